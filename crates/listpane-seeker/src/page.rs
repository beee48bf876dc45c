//! Fixed-size pagination over a filtered sequence.
//!
//! [`paginate`] is a pure slice computation; [`PageState`] is the
//! current-page bookkeeping a view keeps between user actions.
//!
//! Page counts never drop below one: an empty sequence has a single, empty
//! page, so the indicator reads "Page 1 of 1" and both steppers are no-ops.

use crate::error::{Result, SeekerError};

/// Number of rows per page. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(usize);

impl PageSize {
    /// Five rows, as both admin views use.
    pub const DEFAULT: PageSize = PageSize(5);

    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            Err(SeekerError::ZeroPageSize)
        } else {
            Ok(PageSize(size))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::DEFAULT
    }
}

impl TryFrom<usize> for PageSize {
    type Error = SeekerError;

    fn try_from(size: usize) -> Result<Self> {
        PageSize::new(size)
    }
}

/// `max(1, ceil(len / size))`.
pub fn total_pages(len: usize, size: PageSize) -> usize {
    len.div_ceil(size.get()).max(1)
}

/// One visible window of a sequence.
#[derive(Debug, PartialEq)]
pub struct Page<'a, R> {
    /// Rows on this page; empty when `number` is out of range.
    pub items: &'a [R],
    /// The requested page number (1-based).
    pub number: usize,
    /// Page count for the whole sequence, at least 1.
    pub total_pages: usize,
    /// Length of the whole sequence.
    pub total_count: usize,
}

impl<R> Page<'_, R> {
    pub fn has_prev(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Returns rows `[(page-1)*size, page*size)` of `records`, clipped to bounds.
///
/// Never panics: page `0` and pages past the end yield empty `items`.
///
/// # Example
///
/// ```
/// use listpane_seeker::{paginate, PageSize};
///
/// let rows: Vec<u32> = (1..=12).collect();
/// let size = PageSize::new(5)?;
///
/// let last = paginate(&rows, 3, size);
/// assert_eq!(last.items, &[11, 12]);
/// assert_eq!(last.total_pages, 3);
///
/// assert!(paginate(&rows, 999, size).items.is_empty());
/// # Ok::<(), listpane_seeker::SeekerError>(())
/// ```
pub fn paginate<R>(records: &[R], page: usize, size: PageSize) -> Page<'_, R> {
    let total_count = records.len();
    let items: &[R] = match page.checked_sub(1) {
        Some(index) => {
            let start = index.saturating_mul(size.get());
            if start >= total_count {
                &[]
            } else {
                let end = start.saturating_add(size.get()).min(total_count);
                &records[start..end]
            }
        }
        None => &[],
    };

    Page {
        items,
        number: page,
        total_pages: total_pages(total_count, size),
        total_count,
    }
}

/// Current-page bookkeeping for one view.
///
/// Invariant: `1 <= current`, and after any stepping call
/// `current <= total_pages` for the count it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current: usize,
    size: PageSize,
}

impl PageState {
    pub fn new(size: PageSize) -> Self {
        PageState { current: 1, size }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn size(&self) -> PageSize {
        self.size
    }

    /// Back to page 1. Called on every filter or search change.
    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// Advances one page unless already on the last. Returns whether it moved.
    pub fn next_page(&mut self, total_pages: usize) -> bool {
        if self.current < total_pages {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Goes back one page unless already on the first. Returns whether it moved.
    pub fn prev_page(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Jumps to `page`, clamped into `[1, total_pages]`.
    pub fn go_to(&mut self, page: usize, total_pages: usize) {
        self.current = page.clamp(1, total_pages.max(1));
    }

    /// The current window of `records`.
    pub fn slice<'a, R>(&self, records: &'a [R]) -> Page<'a, R> {
        paginate(records, self.current, self.size)
    }
}

impl Default for PageState {
    fn default() -> Self {
        PageState::new(PageSize::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> PageSize {
        PageSize::new(n).unwrap()
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert_eq!(PageSize::new(0), Err(SeekerError::ZeroPageSize));
        assert_eq!(PageSize::try_from(3).map(PageSize::get), Ok(3));
        assert_eq!(PageSize::default().get(), 5);
    }

    #[test]
    fn total_pages_floors_at_one() {
        assert_eq!(total_pages(0, size(5)), 1);
        assert_eq!(total_pages(1, size(5)), 1);
        assert_eq!(total_pages(5, size(5)), 1);
        assert_eq!(total_pages(6, size(5)), 2);
        assert_eq!(total_pages(20, size(5)), 4);
    }

    #[test]
    fn empty_sequence_has_one_empty_page() {
        let rows: Vec<u8> = Vec::new();
        let page = paginate(&rows, 1, size(5));

        assert!(page.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_count, 0);
        assert!(!page.has_prev());
        assert!(!page.has_next());
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let rows = [1, 2, 3];
        assert!(paginate(&rows, 0, size(5)).is_empty());
        assert!(paginate(&rows, 2, size(5)).is_empty());
        assert!(paginate(&rows, usize::MAX, size(5)).is_empty());
    }

    #[test]
    fn last_page_is_clipped() {
        let rows: Vec<u32> = (1..=7).collect();
        let page = paginate(&rows, 2, size(5));

        assert_eq!(page.items, &[6, 7]);
        assert!(page.has_prev());
        assert!(!page.has_next());
    }

    #[test]
    fn steppers_stay_in_bounds() {
        let mut state = PageState::new(size(5));

        assert!(!state.prev_page());
        assert_eq!(state.current(), 1);

        assert!(state.next_page(2));
        assert!(!state.next_page(2));
        assert_eq!(state.current(), 2);

        assert!(state.prev_page());
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn next_on_single_page_is_noop() {
        let mut state = PageState::default();
        assert!(!state.next_page(1));
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn go_to_clamps() {
        let mut state = PageState::default();

        state.go_to(9, 4);
        assert_eq!(state.current(), 4);

        state.go_to(0, 4);
        assert_eq!(state.current(), 1);

        state.go_to(3, 0);
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn reset_returns_to_first_page() {
        let mut state = PageState::default();
        state.go_to(3, 4);
        state.reset();
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn slice_uses_current_page() {
        let rows: Vec<u32> = (1..=12).collect();
        let mut state = PageState::new(size(5));
        state.next_page(3);

        assert_eq!(state.slice(&rows).items, &[6, 7, 8, 9, 10]);
    }
}
