//! GraphQL documents and request-body construction.
//!
//! The archive only answers one fixed query shape, so documents are static
//! text with no variables. Adding a query means adding a `Query` variant and
//! its document.

use serde::Serialize;

use crate::error::ApiError;

const ALL_FILMS: &str = r#"
    query AllFilms {
      allFilms {
        __typename
        films {
          __typename
          id
          director
          episodeID
          title
          releaseDate
          characterConnection(first: 10) {
            __typename
            characters {
              __typename
              id
              name
              birthYear
              eyeColor
              hairColor
              homeworld {
                __typename
                name
              }
            }
          }
        }
      }
    }
"#;

/// The queries the archive client knows how to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Query {
    AllFilms,
}

impl Query {
    /// GraphQL document text with surrounding whitespace trimmed.
    pub fn document(self) -> &'static str {
        match self {
            Query::AllFilms => ALL_FILMS.trim(),
        }
    }

    pub fn operation_name(self) -> &'static str {
        match self {
            Query::AllFilms => "AllFilms",
        }
    }
}

#[derive(Serialize)]
struct GraphQLBody<'a> {
    query: &'a str,
}

/// Serialize `{"query": <document>}` for `query`.
pub fn build(query: Query) -> Result<Vec<u8>, ApiError> {
    let body = GraphQLBody {
        query: query.document(),
    };
    serde_json::to_vec(&body).map_err(|e| ApiError::Build(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_has_single_query_key() {
        let body: serde_json::Value =
            serde_json::from_slice(&build(Query::AllFilms).unwrap()).unwrap();
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert!(object["query"].as_str().unwrap().contains("allFilms"));
    }

    #[test]
    fn build_is_deterministic() {
        assert_eq!(build(Query::AllFilms).unwrap(), build(Query::AllFilms).unwrap());
    }

    #[test]
    fn document_is_trimmed() {
        let doc = Query::AllFilms.document();
        assert!(doc.starts_with("query AllFilms {"));
        assert!(doc.ends_with('}'));
        assert_eq!(doc, doc.trim());
    }

    #[test]
    fn document_selects_every_decoded_field() {
        let doc = Query::AllFilms.document();
        for field in [
            "director",
            "episodeID",
            "title",
            "releaseDate",
            "characterConnection(first: 10)",
            "birthYear",
            "eyeColor",
            "hairColor",
            "homeworld",
        ] {
            assert!(doc.contains(field), "missing {field}");
        }
    }
}
