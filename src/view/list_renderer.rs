use std::fmt::Write;

use crate::view::search_page::SearchPage;

/// Plain text listing of a result page, for the terminal.
pub fn render_text(page: &SearchPage) -> String {
    let mut buf = String::new();

    if page.total == 0 {
        let _ = writeln!(&mut buf, "No posts found");
        return buf;
    }

    for record in page.results {
        let date = if record.date.is_empty() { "undated" } else { record.date.as_str() };
        let _ = writeln!(&mut buf, "{}  {}", date, record.title);
        if !record.subtitle.is_empty() {
            let _ = writeln!(&mut buf, "    {}", record.subtitle);
        }
        if !record.tags.is_empty() {
            let _ = writeln!(&mut buf, "    tags: {}", record.tags.join(", "));
        }
        let _ = writeln!(&mut buf, "    {}", record.url);
    }
    let _ = writeln!(&mut buf, "");
    let _ = writeln!(&mut buf, "Page {} of {} ({} posts)", page.page, page.page_count, page.total);

    buf
}

#[cfg(test)]
mod tests {
    use crate::post::PostRecord;

    use super::*;

    #[test]
    fn test_render_text() {
        let record = PostRecord {
            title: "Archive".to_string(),
            subtitle: "Thomas T Burgess's Blog".to_string(),
            url: "/archive".to_string(),
            ..Default::default()
        };
        let results = vec![&record];
        let page = SearchPage::new(&results, 1, 10);
        assert_eq!(render_text(&page), "undated  Archive\n    Thomas T Burgess's Blog\n    /archive\n\nPage 1 of 1 (1 posts)\n");
    }

    #[test]
    fn test_render_nothing() {
        let results: Vec<&PostRecord> = vec![];
        assert_eq!(render_text(&SearchPage::new(&results, 1, 10)), "No posts found\n");
    }
}
