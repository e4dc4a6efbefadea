//! Compact page-number sequences for navigation controls.

/// Maximum number of page markers shown before long ranges collapse into
/// ellipses.
pub const MAX_VISIBLE_PAGES: u32 = 5;

/// One element of a page-navigation sequence.
///
/// Carries no meaning beyond display order; the ellipsis stands for an
/// elided range of pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    /// A navigable page number.
    Page(u32),
    /// An elided range of pages.
    Ellipsis,
}

/// Produces the sequence of page markers to render for navigation.
///
/// All pages are listed when `total_pages` fits within
/// [`MAX_VISIBLE_PAGES`]. Otherwise the sequence is: page 1, an ellipsis
/// when `current_page > 3`, the pages adjacent to `current_page`, an
/// ellipsis when `current_page < total_pages - 2`, and the last page. The
/// two gap conditions are independent, so a single window can legitimately
/// carry an ellipsis on both sides.
#[must_use]
pub fn page_numbers(current_page: u32, total_pages: u32) -> Vec<PageMarker> {
    let mut markers = Vec::new();

    if total_pages <= MAX_VISIBLE_PAGES {
        for number in 1..=total_pages {
            markers.push(PageMarker::Page(number));
        }
        return markers;
    }

    markers.push(PageMarker::Page(1));

    if current_page > 3 {
        markers.push(PageMarker::Ellipsis);
    }

    let start = current_page.saturating_sub(1).max(2);
    let end = current_page.saturating_add(1).min(total_pages - 1);
    for number in start..=end {
        if number != 1 && number != total_pages {
            markers.push(PageMarker::Page(number));
        }
    }

    if current_page.saturating_add(2) < total_pages {
        markers.push(PageMarker::Ellipsis);
    }

    if total_pages > 1 {
        markers.push(PageMarker::Page(total_pages));
    }

    markers
}
