//! Numbered page links for the list pager.

/// One slot in the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(u32),
    Ellipsis,
}

/// Lays out the numbered links for `current` out of `total` pages.
///
/// Up to five pages are all shown. Beyond that the first and last pages are
/// always shown, with ellipses standing in for the skipped ranges around the
/// current page.
///
/// # Examples
///
/// ```
/// use multiverse_catalog::app::pagination::{page_window, PageLink::{Ellipsis, Page}};
///
/// assert_eq!(
///     page_window(10, 42),
///     vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(42)]
/// );
/// ```
#[must_use]
pub fn page_window(current: u32, total: u32) -> Vec<PageLink> {
    use PageLink::{Ellipsis, Page};

    if total == 0 {
        return Vec::new();
    }
    if total <= 5 {
        return (1..=total).map(Page).collect();
    }

    let current = current.clamp(1, total);
    if current <= 3 {
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(total)]
    } else if current >= total - 2 {
        let mut links = vec![Page(1), Ellipsis];
        links.extend((total - 3..=total).map(Page));
        links
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current - 1),
            Page(current),
            Page(current + 1),
            Ellipsis,
            Page(total),
        ]
    }
}
