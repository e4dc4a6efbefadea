//! Probe-item pagination bookkeeping.
//!
//! The message store never reports a total count, so the dashboard fetches
//! `items_per_page + 1` records and uses the presence of the extra probe
//! item to decide whether a next page exists. The reported total page count
//! is therefore always a lower bound, never an exact figure; that is
//! documented behaviour, not an approximation to be fixed.

/// Number of messages displayed per dashboard page.
pub const ITEMS_PER_PAGE: usize = 10;

/// Derived bookkeeping for one rendered page of results.
///
/// Recomputed per request; nothing here is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    current_page: u32,
    has_next_page: bool,
    total_pages: u32,
    start_item: u64,
    end_item: u64,
}

impl PageWindow {
    /// Returns the current page number (always ≥ 1).
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Returns whether a subsequent page exists.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    /// Returns the known lower bound on the total page count.
    ///
    /// `current_page + 1` when a next page was detected, otherwise
    /// `current_page`. The exact total is never known.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Returns the ordinal of the first displayed item, or 0 when the page
    /// is empty.
    #[must_use]
    pub const fn start_item(&self) -> u64 {
        self.start_item
    }

    /// Returns the ordinal of the last displayed item, or 0 when the page
    /// is empty.
    #[must_use]
    pub const fn end_item(&self) -> u64 {
        self.end_item
    }
}

/// Derives the displayed subset and page window from one fetched page.
///
/// `fetched` is expected to hold up to `items_per_page + 1` records; the
/// probe item, when present, signals a next page and is discarded from
/// display. `current_page` is clamped up to 1.
#[must_use]
pub fn window_page<T>(
    fetched: Vec<T>,
    current_page: u32,
    items_per_page: usize,
) -> (Vec<T>, PageWindow) {
    let page = current_page.max(1);
    let has_next_page = fetched.len() > items_per_page;

    let mut displayed = fetched;
    displayed.truncate(items_per_page);

    let total_pages = if has_next_page {
        page.saturating_add(1)
    } else {
        page
    };

    let shown = u64::try_from(displayed.len()).unwrap_or(u64::MAX);
    let per_page = u64::try_from(items_per_page).unwrap_or(u64::MAX);
    let (start_item, end_item) = if shown == 0 {
        (0, 0)
    } else {
        let preceding = u64::from(page - 1).saturating_mul(per_page);
        (
            preceding.saturating_add(1),
            preceding.saturating_add(shown),
        )
    };

    let window = PageWindow {
        current_page: page,
        has_next_page,
        total_pages,
        start_item,
        end_item,
    };
    (displayed, window)
}
