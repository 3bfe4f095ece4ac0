//! Article records and the rules an incoming article must satisfy.
//!
//! Create requests are decoded into [`ArticleInput`], where every field may be absent so that a
//! missing field becomes a per-field validation message rather than a decoding failure. Only a
//! clean [`Validator`] lets the input become an [`Article`].

use crate::date::ArticleDate;
use crate::validator::{unique, Validator};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

pub const MAX_TITLE_BYTES: usize = 500;
pub const MIN_TAGS: usize = 1;
pub const MAX_TAGS: usize = 10;

/// A stored article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Article {
    pub id: i64,
    pub title: String,
    #[schema(value_type = String, example = "2016-09-22")]
    pub date: ArticleDate,
    pub body: String,
    pub tags: Vec<String>,
}

/// Decoded body of a create-article request, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ArticleInput {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "present_date")]
    #[schema(value_type = Option<String>, example = "2016-09-22")]
    pub date: Option<ArticleDate>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl ArticleInput {
    /// Validates the input and, if every rule holds, returns the article it describes.
    ///
    /// # Errors
    ///
    /// Returns the field-to-message map of every failing field.
    pub fn validated(self) -> Result<Article, BTreeMap<String, String>> {
        let mut v = Validator::new();
        validate_article(&mut v, &self);

        // A missing date or tag list always leaves an error behind.
        match (self.date, self.tags) {
            (Some(date), Some(tags)) if v.valid() => Ok(Article {
                id: self.id,
                title: self.title,
                date,
                body: self.body,
                tags,
            }),
            _ => Err(v.into_errors()),
        }
    }
}

/// Treats an explicit JSON `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A `date` key that is present must hold a date string; `null` is a format error.
fn present_date<'de, D>(deserializer: D) -> Result<Option<ArticleDate>, D::Error>
where
    D: Deserializer<'de>,
{
    ArticleDate::deserialize(deserializer).map(Some)
}

/// Applies the article business rules to `input`, recording failures in `v`.
pub fn validate_article(v: &mut Validator, input: &ArticleInput) {
    v.check(input.id > 0, "id", "must be a positive integer");

    v.check(!input.title.is_empty(), "title", "must be provided");
    v.check(
        input.title.len() <= MAX_TITLE_BYTES,
        "title",
        "must not be more than 500 bytes long",
    );

    v.check(!input.body.is_empty(), "body", "must be provided");

    match &input.tags {
        None => v.add_error("tags", "must be provided"),
        Some(tags) => {
            v.check(tags.len() >= MIN_TAGS, "tags", "must contain at least 1 tag");
            v.check(
                tags.len() <= MAX_TAGS,
                "tags",
                "must not contain more than 10 tags",
            );
            v.check(unique(tags), "tags", "must not contain duplicate values");
        }
    }

    v.check(input.date.is_some(), "date", "must be provided and valid");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ArticleInput {
        ArticleInput {
            id: 1,
            title: "latest science shows that potato chips are better for you than sugar".into(),
            date: Some(ArticleDate::parse("2016-09-22").unwrap()),
            body: "some text, potentially containing simple markup about how potato chip".into(),
            tags: Some(vec!["health".into(), "fitness".into(), "science".into()]),
        }
    }

    fn errors_for(input: ArticleInput) -> BTreeMap<String, String> {
        input
            .validated()
            .expect_err("input should fail validation")
    }

    #[test]
    fn test_valid_input_becomes_article() {
        let article = valid_input().validated().expect("valid input should pass");
        assert_eq!(article.id, 1);
        assert_eq!(article.date.to_string(), "2016-09-22");
        assert_eq!(article.tags, vec!["health", "fitness", "science"]);
    }

    #[test]
    fn test_empty_payload_reports_every_required_field() {
        let input: ArticleInput = serde_json::from_str("{}").expect("empty object should decode");
        let errors = errors_for(input);

        let expected: BTreeMap<String, String> = [
            ("id", "must be a positive integer"),
            ("title", "must be provided"),
            ("body", "must be provided"),
            ("tags", "must be provided"),
            ("date", "must be provided and valid"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(errors, expected);
    }

    #[test]
    fn test_non_positive_id_is_rejected() {
        for id in [0, -1] {
            let errors = errors_for(ArticleInput { id, ..valid_input() });
            assert_eq!(errors.len(), 1);
            assert_eq!(errors["id"], "must be a positive integer");
        }
    }

    #[test]
    fn test_title_length_is_measured_in_bytes() {
        let at_limit = ArticleInput {
            title: "a".repeat(MAX_TITLE_BYTES),
            ..valid_input()
        };
        assert!(at_limit.validated().is_ok());

        let errors = errors_for(ArticleInput {
            title: "\0".repeat(MAX_TITLE_BYTES + 1),
            ..valid_input()
        });
        assert_eq!(errors["title"], "must not be more than 500 bytes long");

        // 167 three-byte characters: 501 bytes.
        let errors = errors_for(ArticleInput {
            title: "€".repeat(167),
            ..valid_input()
        });
        assert_eq!(errors["title"], "must not be more than 500 bytes long");
    }

    #[test]
    fn test_tag_rules() {
        let cases = [
            (Some(vec![]), "must contain at least 1 tag"),
            (
                Some((1..=11).map(|i| format!("tag{i}")).collect()),
                "must not contain more than 10 tags",
            ),
            (
                Some(vec!["health".to_string(), "health".to_string()]),
                "must not contain duplicate values",
            ),
            (None, "must be provided"),
        ];

        for (tags, message) in cases {
            let errors = errors_for(ArticleInput {
                tags,
                ..valid_input()
            });
            assert_eq!(errors.len(), 1);
            assert_eq!(errors["tags"], message);
        }
    }

    #[test]
    fn test_ten_tags_are_allowed() {
        let input = ArticleInput {
            tags: Some((1..=10).map(|i| format!("tag{i}")).collect()),
            ..valid_input()
        };
        assert!(input.validated().is_ok());
    }

    #[test]
    fn test_tags_differing_only_in_case_are_not_duplicates() {
        let input = ArticleInput {
            tags: Some(vec!["Health".into(), "health".into()]),
            ..valid_input()
        };
        assert!(input.validated().is_ok());
    }

    #[test]
    fn test_unknown_fields_fail_to_decode() {
        let err = serde_json::from_str::<ArticleInput>(r#"{"id": 1, "author": "x"}"#)
            .expect_err("unknown field should be rejected");
        assert!(err.to_string().contains("unknown field `author`"));
    }

    #[test]
    fn test_null_text_and_id_fall_back_to_defaults() {
        let input: ArticleInput =
            serde_json::from_str(r#"{"id": null, "title": null, "body": null, "tags": null}"#)
                .expect("nulls should decode");
        assert_eq!(input, ArticleInput::default());

        let errors = errors_for(input);
        assert_eq!(errors["id"], "must be a positive integer");
        assert_eq!(errors["title"], "must be provided");
        assert_eq!(errors["body"], "must be provided");
        assert_eq!(errors["tags"], "must be provided");
    }

    #[test]
    fn test_null_date_fails_to_decode() {
        let err = serde_json::from_str::<ArticleInput>(r#"{"date": null}"#)
            .expect_err("null date should be rejected");
        assert!(err.to_string().starts_with("invalid type: null"));
    }

    #[test]
    fn test_article_json_shape() {
        let article = valid_input().validated().unwrap();
        let value = serde_json::to_value(&article).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "title": "latest science shows that potato chips are better for you than sugar",
                "date": "2016-09-22",
                "body": "some text, potentially containing simple markup about how potato chip",
                "tags": ["health", "fitness", "science"]
            })
        );
    }
}
