use serde::{Serialize, Serializer};

/// Number of page buttons shown before the window starts collapsing into ellipses
pub const DEFAULT_WINDOW_SIZE: u32 = 5;

/// One button position in a pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(u32),
    Ellipsis,
}

impl Serialize for PageSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageSlot::Page(n) => serializer.serialize_u32(*n),
            PageSlot::Ellipsis => serializer.serialize_str("ellipsis"),
        }
    }
}

/// Pages needed to show `total_count` items at `page_size` per page
pub fn total_pages(total_count: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total_count.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Page numbers and ellipsis markers to render for `current` of `total_pages`.
///
/// When everything fits in `window_size` buttons every page is listed.
/// Otherwise the first and last pages are always present, a contiguous run
/// around `current` is kept (clamped to `2..=total_pages-1`), and each gap is
/// collapsed into a single ellipsis. `current` is clamped into range, so the
/// result never omits the current page and never holds a number outside
/// `1..=total_pages`.
pub fn page_window(current: u32, total_pages: u32, window_size: u32) -> Vec<PageSlot> {
    if total_pages == 0 {
        return Vec::new();
    }
    if total_pages <= window_size.max(1) {
        return (1..=total_pages).map(PageSlot::Page).collect();
    }

    let current = current.clamp(1, total_pages);
    let radius = (window_size.saturating_sub(3) / 2).max(1);
    let start = current.saturating_sub(radius).max(2);
    let end = current.saturating_add(radius).min(total_pages - 1);

    let mut slots = Vec::with_capacity(window_size as usize + 2);
    slots.push(PageSlot::Page(1));
    if start > 2 {
        slots.push(PageSlot::Ellipsis);
    }
    slots.extend((start..=end).map(PageSlot::Page));
    if end < total_pages - 1 {
        slots.push(PageSlot::Ellipsis);
    }
    slots.push(PageSlot::Page(total_pages));
    slots
}

/// Everything a pagination bar needs.
///
/// `has_next` / `has_prev` come from the remote page, not from arithmetic on
/// `total_pages`: server counts can lag the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageControls {
    pub current: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub slots: Vec<PageSlot>,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageControls {
    pub fn new(current: u32, total_count: u64, page_size: u32, has_next: bool, has_prev: bool) -> Self {
        let total_pages = total_pages(total_count, page_size);
        Self {
            current,
            total_pages,
            total_count,
            slots: page_window(current, total_pages, DEFAULT_WINDOW_SIZE),
            has_next,
            has_prev,
        }
    }

    /// A single page needs no controls
    pub fn is_needed(&self) -> bool {
        self.total_pages > 1 || self.has_next || self.has_prev
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::PageSlot::{Ellipsis, Page};

    fn pages(slots: &[PageSlot]) -> Vec<u32> {
        slots
            .iter()
            .filter_map(|s| match s {
                Page(n) => Some(*n),
                Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn test_small_totals_list_every_page() {
        for total in 1..=5 {
            for current in 1..=total {
                let window = page_window(current, total, DEFAULT_WINDOW_SIZE);
                assert_eq!(pages(&window), (1..=total).collect::<Vec<_>>());
                assert!(!window.contains(&Ellipsis));
            }
        }
    }

    #[test]
    fn test_large_totals_keep_bounds_and_uniqueness() {
        for total in 6..=40 {
            for current in 1..=total {
                let window = page_window(current, total, DEFAULT_WINDOW_SIZE);
                let numbers = pages(&window);
                assert_eq!(numbers.first(), Some(&1));
                assert_eq!(numbers.last(), Some(&total));
                assert!(numbers.contains(&current), "current {} missing in {:?}", current, window);
                assert!(numbers.windows(2).all(|w| w[0] < w[1]), "{:?}", window);
                assert!(numbers.iter().all(|n| (1..=total).contains(n)));
                assert!(!window.windows(2).any(|w| w[0] == Ellipsis && w[1] == Ellipsis));
            }
        }
    }

    #[test]
    fn test_ellipsis_thresholds() {
        assert_eq!(
            page_window(3, 10, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_window(4, 10, 5),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_window(8, 10, 5),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_edges() {
        assert_eq!(page_window(1, 10, 5), vec![Page(1), Page(2), Ellipsis, Page(10)]);
        assert_eq!(page_window(10, 10, 5), vec![Page(1), Ellipsis, Page(9), Page(10)]);
    }

    #[test]
    fn test_out_of_range_current_is_clamped() {
        assert_eq!(page_window(0, 10, 5), page_window(1, 10, 5));
        assert_eq!(page_window(99, 10, 5), page_window(10, 10, 5));
        assert!(page_window(3, 0, 5).is_empty());
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(47, 20), 3);
        assert_eq!(total_pages(40, 20), 2);
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_controls_trust_remote_flags() {
        let controls = PageControls::new(3, 47, 20, true, true);
        assert_eq!(controls.total_pages, 3);
        assert!(controls.has_next, "remote flag wins over local arithmetic");
        assert_eq!(controls.slots, vec![Page(1), Page(2), Page(3)]);
    }
}
