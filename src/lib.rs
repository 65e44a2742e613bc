pub mod config;
pub mod logger;
pub mod server;
pub mod error;
pub mod post;
pub mod search_index;
pub mod search;
pub mod store_file;
pub mod details_tag;
pub mod paginator;
pub mod query_string;
pub mod text_utils;
pub mod view;
mod test_data;

pub use details_tag::DetailsTag;
pub use error::{IndexError, MalformedIndexError};
pub use post::PostRecord;
pub use search::SearchQuery;
pub use search_index::SearchIndex;
