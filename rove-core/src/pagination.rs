//! Fixed size, 1-based pages for all listings.

pub const POSTS_PER_PAGE: u64 = 1;
pub const COMMENTS_OF_POST_PER_PAGE: u64 = 10;
pub const COMMENTS_OF_ACCOUNT_PER_PAGE: u64 = 2;
pub const TAGS_PER_PAGE: u64 = 10;
pub const LODGINGS_PER_PAGE: u64 = 10;
pub const VISITS_OF_LODGING_PAGE_PER_PAGE: u64 = 10;
pub const VISITS_PER_PAGE: u64 = 5;
pub const TODOS_PER_PAGE: u64 = 10;

#[derive(Clone, Debug, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl PageRequest {
    /// Requests page number `page`, everything below 1 is treated as the first page.
    pub fn new(page: Option<u64>, per_page: u64) -> Self {
        debug_assert!(per_page > 0);
        Self {
            page: page.unwrap_or(1).max(1),
            per_page,
        }
    }

    /// Saturates for page numbers far beyond any listing.
    pub const fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }

    pub const fn limit(&self) -> u64 {
        self.per_page
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(request: PageRequest, items: Vec<T>, total: u64) -> Self {
        let PageRequest { page, per_page } = request;
        Self {
            items,
            page,
            per_page,
            total,
        }
    }

    pub fn pages(&self) -> u64 {
        self.total.div_ceil(self.per_page)
    }

    /// Pages beyond the end lead back to the last page.
    pub fn prev_page(&self) -> Option<u64> {
        (self.page > 1).then(|| (self.page - 1).min(self.pages().max(1)))
    }

    pub fn next_page(&self) -> Option<u64> {
        (self.page < self.pages()).then(|| self.page + 1)
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        let Self {
            items,
            page,
            per_page,
            total,
        } = self;
        Page {
            items: items.into_iter().map(f).collect(),
            page,
            per_page,
            total,
        }
    }

    pub fn try_map<U, E, F>(self, f: F) -> Result<Page<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        let Self {
            items,
            page,
            per_page,
            total,
        } = self;
        Ok(Page {
            items: items.into_iter().map(f).collect::<Result<_, _>>()?,
            page,
            per_page,
            total,
        })
    }
}
