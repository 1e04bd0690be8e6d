//! Seed data: the six saga films with a handful of characters each.

use crate::{Character, CharacterConnection, Film, Homeworld};

// (id, name, birth year, eye color, hair color, homeworld)
type Person = (&'static str, &'static str, &'static str, &'static str, &'static str, &'static str);

const LUKE: Person = ("cGVvcGxlOjE=", "Luke Skywalker", "19BBY", "blue", "blond", "Tatooine");
const THREEPIO: Person = ("cGVvcGxlOjI=", "C-3PO", "112BBY", "yellow", "n/a", "Tatooine");
const ARTOO: Person = ("cGVvcGxlOjM=", "R2-D2", "33BBY", "red", "n/a", "Naboo");
const VADER: Person = ("cGVvcGxlOjQ=", "Darth Vader", "41.9BBY", "yellow", "none", "Tatooine");
const LEIA: Person = ("cGVvcGxlOjU=", "Leia Organa", "19BBY", "brown", "brown", "Alderaan");
const OBI_WAN: Person = (
    "cGVvcGxlOjEw",
    "Obi-Wan Kenobi",
    "57BBY",
    "blue-gray",
    "auburn, white",
    "Stewjon",
);
const ANAKIN: Person = ("cGVvcGxlOjEx", "Anakin Skywalker", "41.9BBY", "blue", "blond", "Tatooine");
const CHEWBACCA: Person = ("cGVvcGxlOjEz", "Chewbacca", "200BBY", "blue", "brown", "Kashyyyk");
const HAN: Person = ("cGVvcGxlOjE0", "Han Solo", "29BBY", "brown", "brown", "Corellia");
const YODA: Person = ("cGVvcGxlOjIw", "Yoda", "896BBY", "brown", "white", "unknown");
const PALPATINE: Person = ("cGVvcGxlOjIx", "Palpatine", "82BBY", "yellow", "grey", "Naboo");
const PADME: Person = ("cGVvcGxlOjM1", "Padmé Amidala", "46BBY", "brown", "brown", "Naboo");
const MAUL: Person = ("cGVvcGxlOjQ0", "Darth Maul", "54BBY", "yellow", "none", "Dathomir");
const WINDU: Person = ("cGVvcGxlOjUx", "Mace Windu", "72BBY", "brown", "none", "Haruun Kal");
const DOOKU: Person = ("cGVvcGxlOjY3", "Dooku", "102BBY", "brown", "white", "Serenno");

fn film(
    id: &str,
    episode_id: i32,
    title: &str,
    director: &str,
    release_date: i64,
    cast: &[Person],
) -> Film {
    let characters = cast
        .iter()
        .map(|&(id, name, birth_year, eye_color, hair_color, homeworld)| Character {
            id: id.to_string(),
            name: name.to_string(),
            birth_year: birth_year.to_string(),
            eye_color: eye_color.to_string(),
            hair_color: hair_color.to_string(),
            homeworld: Homeworld {
                name: homeworld.to_string(),
            },
        })
        .collect();
    Film {
        id: id.to_string(),
        director: director.to_string(),
        episode_id,
        title: title.to_string(),
        release_date,
        character_connection: CharacterConnection { characters },
    }
}

/// Films in archive order (release order), release dates at midnight UTC.
pub fn saga_films() -> Vec<Film> {
    vec![
        film(
            "ZmlsbXM6MQ==",
            4,
            "A New Hope",
            "George Lucas",
            233_366_400,
            &[LUKE, THREEPIO, ARTOO, VADER, LEIA, OBI_WAN, CHEWBACCA, HAN],
        ),
        film(
            "ZmlsbXM6Mg==",
            5,
            "The Empire Strikes Back",
            "Irvin Kershner",
            327_369_600,
            &[LUKE, THREEPIO, ARTOO, VADER, LEIA, CHEWBACCA, HAN, YODA],
        ),
        film(
            "ZmlsbXM6Mw==",
            6,
            "Return of the Jedi",
            "Richard Marquand",
            422_668_800,
            &[LUKE, THREEPIO, ARTOO, VADER, LEIA, CHEWBACCA, HAN, YODA, PALPATINE],
        ),
        film(
            "ZmlsbXM6NA==",
            1,
            "The Phantom Menace",
            "George Lucas",
            927_072_000,
            &[THREEPIO, ARTOO, OBI_WAN, ANAKIN, YODA, PALPATINE, PADME, MAUL, WINDU],
        ),
        film(
            "ZmlsbXM6NQ==",
            2,
            "Attack of the Clones",
            "George Lucas",
            1_021_507_200,
            &[THREEPIO, ARTOO, OBI_WAN, ANAKIN, YODA, PALPATINE, PADME, WINDU, DOOKU],
        ),
        film(
            "ZmlsbXM6Ng==",
            3,
            "Revenge of the Sith",
            "George Lucas",
            1_116_460_800,
            &[LUKE, LEIA, THREEPIO, ARTOO, VADER, OBI_WAN, ANAKIN, YODA, PALPATINE, DOOKU],
        ),
    ]
}
