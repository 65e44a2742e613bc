use std::collections::{HashMap, HashSet};
use std::path::Path;

use chrono::NaiveDate;
use serde_json::Value;
use spdlog::{debug, warn};

use crate::error::{IndexError, MalformedIndexError};
use crate::post::{PostRecord, StoredRecord};
use crate::store_file::{extract_payload, StoreFile};

/// A record plus the lowercase forms queries compare against.
#[derive(Debug)]
pub(crate) struct IndexedPost {
    pub record: PostRecord,
    pub date: Option<NaiveDate>,
    pub title: String,
    pub subtitle: String,
    pub excerpt: String,
    pub categories: HashSet<String>,
    pub tags: HashSet<String>,
}

impl IndexedPost {
    fn new(record: PostRecord, date: Option<NaiveDate>) -> IndexedPost {
        IndexedPost {
            date,
            title: record.title.to_lowercase(),
            subtitle: record.subtitle.to_lowercase(),
            excerpt: record.excerpt.to_lowercase(),
            categories: lowercase_set(&record.categories),
            tags: lowercase_set(&record.tags),
            record,
        }
    }
}

fn lowercase_set(items: &[String]) -> HashSet<String> {
    items.iter().map(|s| s.to_lowercase()).collect()
}

/// The posts of one site build, in the order the builder emitted them.
/// There is no way to change an index after it's loaded.
#[derive(Debug)]
pub struct SearchIndex {
    pub(crate) posts: Vec<IndexedPost>,
}

impl SearchIndex {
    /// Parses a store. Accepts a bare JSON array or the generator's
    /// `var store = [...]` script.
    pub fn load(content: &str) -> Result<SearchIndex, MalformedIndexError> {
        let value: Value = serde_json::from_str(extract_payload(content))?;
        let Value::Array(items) = value else {
            return Err(MalformedIndexError::NotASequence);
        };

        let records = items.iter()
            .enumerate()
            .map(|(index, item)| PostRecord::from_value(index, item))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_records(records)
    }

    pub fn load_file(file_path: &Path) -> Result<SearchIndex, IndexError> {
        let store_file = StoreFile::from_file(file_path)?;
        let index = Self::load(store_file.payload())?;
        debug!("Loaded {} posts from {} ({:?})", index.len(), file_path.display(), store_file.format);
        Ok(index)
    }

    pub fn from_records(records: Vec<PostRecord>) -> Result<SearchIndex, MalformedIndexError> {
        let mut posts = Vec::with_capacity(records.len());
        let mut seen_urls: HashSet<String> = HashSet::new();

        for (index, record) in records.into_iter().enumerate() {
            let date = record.validate(index)?;
            if !seen_urls.insert(record.url.clone()) {
                warn!("Duplicated url in search index: {} (record {})", record.url, index);
            }
            posts.push(IndexedPost::new(record, date));
        }

        Ok(SearchIndex { posts })
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&PostRecord> {
        self.posts.get(position).map(|p| &p.record)
    }

    pub fn records(&self) -> impl Iterator<Item=&PostRecord> {
        self.posts.iter().map(|p| &p.record)
    }

    /// Serializes back into the store format, writing `null` for empty values.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let stored: Vec<StoredRecord> = self.records().map(StoredRecord::from).collect();
        serde_json::to_string_pretty(&stored)
    }

    pub fn tag_counts(&self) -> Vec<(String, u32)> {
        count_names(self.records().flat_map(|r| r.tags.iter()))
    }

    pub fn category_counts(&self) -> Vec<(String, u32)> {
        count_names(self.records().flat_map(|r| r.categories.iter()))
    }
}

// Counted case-insensitively, shown with the first spelling seen
fn count_names<'a>(names: impl Iterator<Item=&'a String>) -> Vec<(String, u32)> {
    let mut counts: HashMap<String, (String, u32)> = HashMap::new();
    for name in names {
        counts.entry(name.to_lowercase())
            .or_insert_with(|| (name.clone(), 0))
            .1 += 1;
    }

    let mut list: Vec<(String, u32)> = counts.into_values().collect();
    list.sort_by(|(na, ca), (nb, cb)| cb.cmp(ca).then_with(|| na.cmp(nb)));
    list
}
