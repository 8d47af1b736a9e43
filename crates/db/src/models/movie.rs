//! Movie document model and DTOs.
//!
//! Request DTOs carry loose JSON so that type coercion happens in the
//! storage layer (see [`marquee_core::movie`]) rather than in the HTTP
//! extractor.

use marquee_core::movie::{cast_text, cast_year, FIELD_GENRE, FIELD_TITLE};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::serialize_object_id_as_hex_string;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;

use crate::error::StorageError;

// ---------------------------------------------------------------------------
// Entity struct (stored document)
// ---------------------------------------------------------------------------

/// A document from the `movies` collection.
///
/// Serializes the identifier as a hex string under `_id`, which is the shape
/// API clients see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Movie {
    /// The auto-generated id of the movie.
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    #[schema(value_type = String, example = "65f1c0a2b3d4e5f601234567")]
    pub id: ObjectId,
    /// The title of the movie.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The genre of the movie.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// The release year of the movie.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_year"
    )]
    #[schema(value_type = Option<f64>, example = 2021)]
    pub year: Option<f64>,
}

/// Whole years are written as integers (`2021`, not `2021.0`).
fn serialize_year<S>(year: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match year {
        Some(y) if y.fract() == 0.0 && y.abs() < 9.0e15 => serializer.serialize_i64(*y as i64),
        Some(y) => serializer.serialize_f64(*y),
        None => serializer.serialize_none(),
    }
}

/// Field set written on insert. `_id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMovie {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<f64>,
}

impl NewMovie {
    /// Attach the id assigned by the store.
    pub fn into_movie(self, id: ObjectId) -> Movie {
        Movie {
            id,
            title: self.title,
            genre: self.genre,
            year: self.year,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Body of `POST /movies`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateMovie {
    #[schema(value_type = Option<String>, example = "Dune")]
    pub title: Option<serde_json::Value>,
    #[schema(value_type = Option<String>, example = "Sci-Fi")]
    pub genre: Option<serde_json::Value>,
    #[schema(value_type = Option<f64>, example = 2021)]
    pub year: Option<serde_json::Value>,
}

impl CreateMovie {
    /// Cast the loose request fields to their stored types.
    pub fn cast(&self) -> Result<NewMovie, StorageError> {
        Ok(NewMovie {
            title: cast_text(FIELD_TITLE, self.title.as_ref())?,
            genre: cast_text(FIELD_GENRE, self.genre.as_ref())?,
            year: cast_year(self.year.as_ref())?,
        })
    }
}

/// Body of `PATCH /movies/{id}`. Only the title is ever overwritten.
///
/// An absent `title` and an explicit `"title": null` are different requests:
/// the first leaves the document alone, the second clears the title.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateMovie {
    #[serde(deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>, example = "Dune: Part Two")]
    pub title: Option<serde_json::Value>,
}

/// Keeps `null` as `Some(Value::Null)`; only a missing key yields `None`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

/// Change requested for the title by an update.
#[derive(Debug, Clone, PartialEq)]
pub enum TitleChange {
    /// No `title` key: leave the document untouched.
    Keep,
    /// Overwrite the stored title; `None` clears it.
    Set(Option<String>),
}

impl UpdateMovie {
    /// Cast the requested title change.
    pub fn title_change(&self) -> Result<TitleChange, StorageError> {
        match &self.title {
            None => Ok(TitleChange::Keep),
            Some(value) => Ok(TitleChange::Set(cast_text(FIELD_TITLE, Some(value))?)),
        }
    }
}

/// Parse a path identifier into a document id.
pub fn parse_movie_id(id: &str) -> Result<ObjectId, StorageError> {
    ObjectId::parse_str(id).map_err(|_| StorageError::MalformedId(id.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn movie_serializes_id_as_hex_and_omits_unset_fields() {
        let id = ObjectId::parse_str("65f1c0a2b3d4e5f601234567").unwrap();
        let movie = Movie {
            id,
            title: Some("Dune".into()),
            genre: None,
            year: Some(2021.0),
        };

        let value = serde_json::to_value(&movie).unwrap();
        assert_eq!(
            value,
            json!({"_id": "65f1c0a2b3d4e5f601234567", "title": "Dune", "year": 2021})
        );
    }

    #[test]
    fn create_body_tolerates_missing_fields() {
        let body: CreateMovie = serde_json::from_value(json!({"title": "Alien"})).unwrap();
        let new = body.cast().unwrap();
        assert_eq!(new.title.as_deref(), Some("Alien"));
        assert_eq!(new.genre, None);
        assert_eq!(new.year, None);
    }

    #[test]
    fn create_cast_rejects_bad_year() {
        let body: CreateMovie =
            serde_json::from_value(json!({"title": "Alien", "year": "soon"})).unwrap();
        assert_matches!(body.cast(), Err(StorageError::Cast(_)));
    }

    #[test]
    fn fractional_year_is_kept_and_whole_year_has_no_fraction() {
        let id = ObjectId::new();
        let half = Movie {
            id,
            title: None,
            genre: None,
            year: Some(2021.5),
        };
        assert_eq!(serde_json::to_value(&half).unwrap()["year"], json!(2021.5));

        let whole = Movie {
            year: Some(1999.0),
            ..half
        };
        assert!(!serde_json::to_string(&whole).unwrap().contains("1999.0"));
        assert_eq!(serde_json::to_value(&whole).unwrap()["year"], json!(1999));
    }

    #[test]
    fn create_cast_accepts_loose_years() {
        for (raw, expected) in [
            (json!(2021.5), Some(2021.5)),
            (json!(true), Some(1.0)),
            (json!(""), None),
        ] {
            let body: CreateMovie =
                serde_json::from_value(json!({"title": "X", "year": raw})).unwrap();
            assert_eq!(body.cast().unwrap().year, expected, "year {raw}");
        }
    }

    #[test]
    fn update_distinguishes_absent_and_null_title() {
        let absent: UpdateMovie = serde_json::from_value(json!({})).unwrap();
        assert_eq!(absent.title_change().unwrap(), TitleChange::Keep);

        let null: UpdateMovie = serde_json::from_value(json!({"title": null})).unwrap();
        assert_eq!(null.title_change().unwrap(), TitleChange::Set(None));

        let set: UpdateMovie = serde_json::from_value(json!({"title": "Ronin"})).unwrap();
        assert_eq!(
            set.title_change().unwrap(),
            TitleChange::Set(Some("Ronin".into()))
        );
    }

    #[test]
    fn new_movie_skips_unset_fields_when_written() {
        let new = NewMovie {
            title: Some("Heat".into()),
            genre: None,
            year: None,
        };
        assert_eq!(serde_json::to_value(&new).unwrap(), json!({"title": "Heat"}));
    }

    #[test]
    fn parse_movie_id_rejects_garbage() {
        assert_matches!(
            parse_movie_id("123"),
            Err(StorageError::MalformedId(id)) if id == "123"
        );
        assert!(parse_movie_id("65f1c0a2b3d4e5f601234567").is_ok());
    }
}
