pub mod search_page;
pub mod list_renderer;
