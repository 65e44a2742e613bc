use crate::search::SearchQuery;

/// Parameters of a `/search` request:
/// `q=polygon&category=math&tag=python,geometry&page=2`
#[derive(PartialEq, Debug)]
pub struct QueryString {
    items: Vec<(String, String)>,
}

impl QueryString {
    pub fn from(buf: &str) -> Self {
        let items: Vec<(String, String)> = serde_urlencoded::from_str(buf).unwrap_or_else(|_| vec![]);

        QueryString {
            items,
        }
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.items.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    // Repeated keys and comma separated values both work
    fn get_all(&self, key: &str) -> Vec<String> {
        self.items.iter()
            .filter(|(k, _)| k == key)
            .flat_map(|(_, v)| v.split(','))
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string())
            .collect()
    }

    pub fn get_page(&self) -> u32 {
        let val = self.get("page").unwrap_or("1");
        val.parse::<u32>().unwrap_or(1).max(1)
    }

    pub fn to_search_query(&self) -> SearchQuery {
        SearchQuery {
            text: self.get("q").unwrap_or("").to_string(),
            categories: self.get_all("category"),
            tags: self.get_all("tag"),
        }
    }
}
