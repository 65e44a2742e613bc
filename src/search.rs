use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::NaiveDate;

use crate::post::PostRecord;
use crate::search_index::{IndexedPost, SearchIndex};
use crate::text_utils::tokenize;

/// Free text plus category and tag filters. Empty parts don't filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    pub text: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

impl SearchQuery {
    pub fn new(text: &str) -> Self {
        SearchQuery {
            text: text.to_string(),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.categories.push(category.to_string());
        self
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.to_string());
        self
    }
}

struct Hit {
    position: usize,
    exact_title: bool,
    token_count: usize,
    date: Option<NaiveDate>,
}

impl IndexedPost {
    fn contains_token(&self, token: &str) -> bool {
        self.title.contains(token)
            || self.subtitle.contains(token)
            || self.excerpt.contains(token)
            || self.tags.contains(token)
    }
}

fn filter_matches(filter: &HashSet<String>, values: &HashSet<String>) -> bool {
    filter.is_empty() || !filter.is_disjoint(values)
}

// Newest first, undated posts after every dated one
fn cmp_dates(a: &Option<NaiveDate>, b: &Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn cmp_hits(a: &Hit, b: &Hit) -> Ordering {
    b.exact_title.cmp(&a.exact_title)
        .then_with(|| b.token_count.cmp(&a.token_count))
        .then_with(|| cmp_dates(&a.date, &b.date))
        .then_with(|| a.position.cmp(&b.position))
}

impl SearchIndex {
    /// Returns the matching posts, best first. Without free text nothing is
    /// ranked and matches come back in load order.
    pub fn search(&self, query: &SearchQuery) -> Vec<&PostRecord> {
        let categories: HashSet<String> = query.categories.iter().map(|c| c.to_lowercase()).collect();
        let tags: HashSet<String> = query.tags.iter().map(|t| t.to_lowercase()).collect();
        let phrase = query.text.trim().to_lowercase();
        let tokens = tokenize(&phrase);

        let mut hits: Vec<Hit> = vec![];
        for (position, post) in self.posts.iter().enumerate() {
            if !filter_matches(&categories, &post.categories) || !filter_matches(&tags, &post.tags) {
                continue;
            }

            let exact_title = !phrase.is_empty() && post.title == phrase;
            let token_count = tokens.iter().filter(|t| post.contains_token(t)).count();
            if !tokens.is_empty() && !exact_title && token_count == 0 {
                continue;
            }

            hits.push(Hit {
                position,
                exact_title,
                token_count,
                date: post.date,
            });
        }

        if !tokens.is_empty() {
            hits.sort_by(cmp_hits);
        }

        hits.into_iter()
            .map(|hit| &self.posts[hit.position].record)
            .collect()
    }
}
