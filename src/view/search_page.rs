use serde::Serialize;

use crate::paginator::Paginator;
use crate::post::PostRecord;

/// One page of search results, as sent to the search widget.
#[derive(Serialize, Debug, PartialEq)]
pub struct SearchPage<'a> {
    pub page: u32,
    pub page_count: u32,
    pub total: usize,
    pub results: &'a [&'a PostRecord],
}

impl<'a> SearchPage<'a> {
    pub fn new(results: &'a [&'a PostRecord], page: u32, page_size: u32) -> Self {
        let paginator = Paginator::new(results, page_size);
        let page = paginator.clamp_page(page);
        let page_results = paginator.get_page(page).unwrap_or(&[]);

        SearchPage {
            page,
            page_count: paginator.page_count(),
            total: results.len(),
            results: page_results,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct Facets {
    pub tags: Vec<(String, u32)>,
    pub categories: Vec<(String, u32)>,
}
