//! The render boundary of a list view.
//!
//! A [`PageView`] is everything a presentation layer needs to draw one
//! screen of a view: the rows on the current page plus the numbers behind
//! the "Page X of Y" indicator and the stepper buttons.

use listpane_seeker::Page;
use serde::Serialize;

/// One rendered page of a list view.
#[derive(Debug, Clone, Serialize)]
pub struct PageView<R> {
    /// View title, e.g. "Product List".
    pub title: String,

    /// Rows on this page, in filtered order.
    pub items: Vec<R>,

    /// Current page number (1-based).
    pub page: usize,

    /// Page count of the filtered set, at least 1.
    pub total_pages: usize,

    /// Size of the filtered set (for "showing X of Y").
    pub total_count: usize,

    /// Active filters (for "filtered by: ...").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_summary: Option<String>,

    pub has_prev: bool,
    pub has_next: bool,
}

impl<R: Clone> PageView<R> {
    /// Copies the rows of `page` into an owned view.
    pub fn from_page(title: impl Into<String>, page: &Page<'_, R>) -> Self {
        PageView {
            title: title.into(),
            items: page.items.to_vec(),
            page: page.number,
            total_pages: page.total_pages,
            total_count: page.total_count,
            filter_summary: None,
            has_prev: page.has_prev(),
            has_next: page.has_next(),
        }
    }
}

impl<R> PageView<R> {
    /// Set the filter summary text.
    pub fn filter_summary(mut self, summary: Option<String>) -> Self {
        self.filter_summary = summary;
        self
    }

    /// "Page X of Y".
    pub fn indicator(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use listpane_seeker::{paginate, PageSize};

    #[test]
    fn mirrors_page() {
        let rows: Vec<u32> = (1..=7).collect();
        let page = paginate(&rows, 2, PageSize::DEFAULT);
        let view = PageView::from_page("Numbers", &page);

        assert_eq!(view.items, vec![6, 7]);
        assert_eq!(view.indicator(), "Page 2 of 2");
        assert!(view.has_prev);
        assert!(!view.has_next);
    }

    #[test]
    fn summary_is_omitted_from_json_when_unset() {
        let rows = [1u8];
        let view = PageView::from_page("One", &paginate(&rows, 1, PageSize::DEFAULT));
        let json = serde_json::to_value(&view).unwrap();

        assert!(json.get("filter_summary").is_none());
        assert_eq!(json["total_pages"], 1);

        let json = serde_json::to_value(view.filter_summary(Some("status=New".into()))).unwrap();
        assert_eq!(json["filter_summary"], "status=New");
    }
}
