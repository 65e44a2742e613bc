use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::MalformedIndexError;
use crate::text_utils::parse_post_date;

/// Metadata of one published post, as written into the search store.
/// Optional values the builder wrote as `null` are held as empty strings
/// and empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostRecord {
    pub title: String,
    pub subtitle: String,
    pub excerpt: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub date: String,
    pub url: String,
    pub img: String,
}

impl Display for PostRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "title={}, date={}, url={}\ncategories={:?}, tags={:?}",
               self.title,
               self.date,
               self.url,
               self.categories,
               self.tags
        )
    }
}

/// Example of record
/// {
///   "title": "Tree hack",
///   "subtitle": "Building and printing a tree",
///   "excerpt": "Header image credit1 In which I made two snippets...",
///   "categories": ["blog","code"],
///   "date": "2021-07-18",
///   "tags": ["python","coding","trees"],
///   "url": "https://thomasburgess.github.io/2021/07/18/tree_hack.html",
///   "img": null
/// }
impl PostRecord {
    pub fn from_value(index: usize, value: &Value) -> Result<PostRecord, MalformedIndexError> {
        let Some(obj) = value.as_object() else {
            return Err(MalformedIndexError::NotAnObject { index });
        };

        let title = match Self::extract_text(index, obj, "title")? {
            Some(title) => title,
            None => return Err(MalformedIndexError::MissingField { index, field: "title" }),
        };
        let url = match Self::extract_text(index, obj, "url")? {
            Some(url) => url,
            None => return Err(MalformedIndexError::MissingField { index, field: "url" }),
        };

        let record = PostRecord {
            title,
            subtitle: Self::extract_text(index, obj, "subtitle")?.unwrap_or_default(),
            excerpt: Self::extract_text(index, obj, "excerpt")?.unwrap_or_default(),
            categories: Self::extract_list(index, obj, "categories")?,
            tags: Self::extract_list(index, obj, "tags")?,
            date: Self::extract_text(index, obj, "date")?.unwrap_or_default(),
            url,
            img: Self::extract_text(index, obj, "img")?.unwrap_or_default(),
        };

        Ok(record)
    }

    /// Checks the invariants serde types can't express. Returns the parsed
    /// date, `None` for undated records.
    pub fn validate(&self, index: usize) -> Result<Option<NaiveDate>, MalformedIndexError> {
        if self.categories.iter().any(|c| c.is_empty()) {
            return Err(MalformedIndexError::EmptyTag { index, field: "categories" });
        }
        if self.tags.iter().any(|t| t.is_empty()) {
            return Err(MalformedIndexError::EmptyTag { index, field: "tags" });
        }

        if self.date.trim().is_empty() {
            return Ok(None);
        }
        match parse_post_date(&self.date) {
            Ok(date) => Ok(Some(date)),
            Err(_) => Err(MalformedIndexError::InvalidDate { index, value: self.date.clone() }),
        }
    }

    // Absent and null both mean "no value"
    fn extract_text(index: usize, obj: &Map<String, Value>, field: &'static str) -> Result<Option<String>, MalformedIndexError> {
        match obj.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(MalformedIndexError::WrongType { index, field, expected: "a string" }),
        }
    }

    fn extract_list(index: usize, obj: &Map<String, Value>, field: &'static str) -> Result<Vec<String>, MalformedIndexError> {
        let items = match obj.get(field) {
            None | Some(Value::Null) => return Ok(vec![]),
            Some(Value::Array(items)) => items,
            Some(_) => return Err(MalformedIndexError::WrongType { index, field, expected: "a list of strings" }),
        };

        items.iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                _ => Err(MalformedIndexError::WrongType { index, field, expected: "a list of strings" }),
            })
            .collect()
    }
}

/// Wire shape of a record: empty values go back out as `null`, with the
/// field order the site generator uses.
#[derive(Serialize)]
pub(crate) struct StoredRecord<'a> {
    title: &'a str,
    subtitle: Option<&'a str>,
    excerpt: Option<&'a str>,
    categories: Option<&'a [String]>,
    date: Option<&'a str>,
    tags: Option<&'a [String]>,
    url: &'a str,
    img: Option<&'a str>,
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}

fn non_empty_list(list: &[String]) -> Option<&[String]> {
    if list.is_empty() { None } else { Some(list) }
}

impl<'a> From<&'a PostRecord> for StoredRecord<'a> {
    fn from(record: &'a PostRecord) -> Self {
        StoredRecord {
            title: &record.title,
            subtitle: non_empty(&record.subtitle),
            excerpt: non_empty(&record.excerpt),
            categories: non_empty_list(&record.categories),
            date: non_empty(&record.date),
            tags: non_empty_list(&record.tags),
            url: &record.url,
            img: non_empty(&record.img),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_from_value() {
        let value = json!({
            "title": "Rectangle areas!",
            "subtitle": "Dad & kid Exploring Areas of Rectangles and Squares.",
            "excerpt": "Dad &amp; kid Exploring Areas",
            "categories": ["blog", "math"],
            "date": "2024-07-30",
            "tags": ["area", "maths", "kids"],
            "url": "https://thomasburgess.github.io/2024/07/30/rectangles.html",
            "img": null
        });
        let record = PostRecord::from_value(0, &value).unwrap();
        assert_eq!(record.title, "Rectangle areas!");
        assert_eq!(record.excerpt, "Dad &amp; kid Exploring Areas");
        assert_eq!(record.categories, ["blog", "math"]);
        assert_eq!(record.tags, ["area", "maths", "kids"]);
        assert_eq!(record.img, "");
    }

    #[test]
    fn test_absent_and_null_are_empty() {
        let value = json!({
            "title": "Archive",
            "categories": null,
            "date": null,
            "url": "/archive"
        });
        let record = PostRecord::from_value(0, &value).unwrap();
        assert_eq!(record.subtitle, "");
        assert!(record.categories.is_empty());
        assert!(record.tags.is_empty());
        assert_eq!(record.validate(0).unwrap(), None);
    }

    #[test]
    fn test_required_fields() {
        let res = PostRecord::from_value(4, &json!({"title": "No link"}));
        assert!(matches!(res, Err(MalformedIndexError::MissingField { index: 4, field: "url" })));

        let res = PostRecord::from_value(2, &json!({"title": null, "url": "/a"}));
        assert!(matches!(res, Err(MalformedIndexError::MissingField { index: 2, field: "title" })));

        let res = PostRecord::from_value(1, &json!({"title": 42, "url": "/a"}));
        assert!(matches!(res, Err(MalformedIndexError::WrongType { field: "title", .. })));

        let res = PostRecord::from_value(1, &json!(["title", "url"]));
        assert!(matches!(res, Err(MalformedIndexError::NotAnObject { index: 1 })));
    }

    #[test]
    fn test_wrong_list_items() {
        let res = PostRecord::from_value(0, &json!({"title": "t", "url": "/t", "tags": ["ok", 3]}));
        assert!(matches!(res, Err(MalformedIndexError::WrongType { field: "tags", .. })));

        let res = PostRecord::from_value(0, &json!({"title": "t", "url": "/t", "categories": "blog"}));
        assert!(matches!(res, Err(MalformedIndexError::WrongType { field: "categories", .. })));
    }

    #[test]
    fn test_validate() {
        let mut record = PostRecord {
            title: "Tree hack".to_string(),
            url: "/tree".to_string(),
            date: "2021-07-18".to_string(),
            tags: vec!["python".to_string(), "".to_string()],
            ..Default::default()
        };
        assert!(matches!(record.validate(7), Err(MalformedIndexError::EmptyTag { index: 7, field: "tags" })));

        record.tags.pop();
        assert_eq!(record.validate(7).unwrap(), NaiveDate::from_ymd_opt(2021, 7, 18));

        record.date = "July 2021".to_string();
        assert!(matches!(record.validate(7), Err(MalformedIndexError::InvalidDate { .. })));
    }

    #[test]
    fn test_stored_record_writes_nulls() {
        let record = PostRecord {
            title: "Archive".to_string(),
            url: "/archive".to_string(),
            tags: vec!["blog".to_string()],
            ..Default::default()
        };
        let value = serde_json::to_value(StoredRecord::from(&record)).unwrap();
        assert_eq!(value, json!({
            "title": "Archive",
            "subtitle": null,
            "excerpt": null,
            "categories": null,
            "date": null,
            "tags": ["blog"],
            "url": "/archive",
            "img": null
        }));
    }
}
