pub struct Paginator<'a, T> {
    items: &'a [T],
    page_size: usize,
    page_count: u32,
}

impl<'a, T> Paginator<'a, T> {
    pub fn new(items: &'a [T], page_size: u32) -> Self {
        let page_size = page_size.max(1) as usize;
        let page_count = items.len().div_ceil(page_size) as u32;

        Paginator {
            items,
            page_size,
            page_count,
        }
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Pages start at 1. Out of range pages fall back to the first one.
    pub fn clamp_page(&self, page: u32) -> u32 {
        match page {
            0 => 1,
            x if x > self.page_count => 1,
            x => x,
        }
    }

    pub fn get_page(&self, page: u32) -> Result<&'a [T], String> {
        match page {
            0 => return Err("Page has to be greater than 0".to_string()),
            x if x > self.page_count => return Err(format!("Page has to be less than page_count ({})", self.page_count)),
            _ => {}
        };

        let items = self.items;
        let start = (page as usize - 1) * self.page_size;
        let end = (start + self.page_size).min(items.len());
        Ok(&items[start..end])
    }
}
