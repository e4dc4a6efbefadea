//! List query engine for the support dashboard.
//!
//! Pure, stateless transforms over one fetched page of messages: probe-item
//! pagination bookkeeping in [`window`], free-text filtering in [`filter`],
//! and page-navigation markers in [`pages`]. Nothing here performs I/O or
//! holds state between invocations; every function is recomputed fresh per
//! request.

pub mod filter;
pub mod pages;
pub mod window;

pub use filter::filter_messages;
pub use pages::{MAX_VISIBLE_PAGES, PageMarker, page_numbers};
pub use window::{ITEMS_PER_PAGE, PageWindow, window_page};

#[cfg(test)]
mod tests;
