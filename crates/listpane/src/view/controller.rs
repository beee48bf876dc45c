//! Per-view UI state and the operations that change it.

use listpane_export::{CsvExport, Download};
use listpane_seeker::{
    distinct_values, filter, is_unconstrained, total_pages, Bucket, FilterSpec, PageState,
    Seekable, ALL,
};

use super::page_view::PageView;
use super::schema::{FilterOption, OptionSource, ViewSchema};
use crate::error::ViewError;
use crate::store::RecordStore;

/// A filterable, paginated, exportable list over a [`RecordStore`].
///
/// Every search or filter change puts the view back on page 1, so the
/// current page always lies inside the filtered set.
#[derive(Debug)]
pub struct ListView<T> {
    store: RecordStore<T>,
    schema: ViewSchema<T>,
    query: String,
    selections: Vec<(String, String)>,
    bucket: Option<Bucket>,
    page: PageState,
}

impl<T: Seekable> ListView<T> {
    pub fn new(store: RecordStore<T>, schema: ViewSchema<T>) -> Self {
        let page = PageState::new(schema.page_size());
        ListView {
            store,
            schema,
            query: String::new(),
            selections: Vec::new(),
            bucket: None,
            page,
        }
    }

    pub fn schema(&self) -> &ViewSchema<T> {
        &self.schema
    }

    pub fn store(&self) -> &RecordStore<T> {
        &self.store
    }

    /// The search text as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current selection of a select filter; `"All"` when unconstrained.
    pub fn selection(&self, field: &str) -> &str {
        self.selections
            .iter()
            .find(|(f, _)| f == field)
            .map_or(ALL, |(_, v)| v.as_str())
    }

    /// Label of the selected range bucket; `"All"` when unconstrained.
    pub fn range_selection(&self) -> &str {
        self.bucket.as_ref().map_or(ALL, Bucket::label)
    }

    pub fn search(&mut self, query: &str) {
        self.query = query.to_string();
        self.page.reset();
        log::debug!("{}: search '{}'", self.schema.title(), query);
    }

    /// Sets a select filter. `""` or `"All"` clears it.
    pub fn select(&mut self, field: &str, value: &str) -> Result<(), ViewError> {
        if self.schema.filter(field).is_none() {
            return Err(ViewError::UnknownFilter {
                view: self.schema.title().to_string(),
                field: field.to_string(),
            });
        }

        self.selections.retain(|(f, _)| f != field);
        if !is_unconstrained(value) {
            self.selections.push((field.to_string(), value.to_string()));
        }
        self.page.reset();
        log::debug!("{}: {} = '{}'", self.schema.title(), field, value);
        Ok(())
    }

    /// Selects a range bucket by label. `""` or `"All"` clears it.
    pub fn select_range(&mut self, label: &str) -> Result<(), ViewError> {
        let range = self
            .schema
            .range_filter()
            .ok_or_else(|| ViewError::NoRangeFilter {
                view: self.schema.title().to_string(),
            })?;

        self.bucket = if is_unconstrained(label) {
            None
        } else {
            Some(range.buckets().require(label)?.clone())
        };
        self.page.reset();
        log::debug!("{}: {} in '{}'", self.schema.title(), range.field(), label);
        Ok(())
    }

    /// Clears the search text and every selection.
    pub fn clear_filters(&mut self) {
        self.query.clear();
        self.selections.clear();
        self.bucket = None;
        self.page.reset();
        log::debug!("{}: filters cleared", self.schema.title());
    }

    /// The filter the current UI state stands for.
    pub fn spec(&self) -> FilterSpec {
        let mut spec = FilterSpec::new().search(&self.query, self.schema.search_fields());
        for (field, value) in &self.selections {
            spec = spec.equals(field, value);
        }
        if let (Some(range), Some(bucket)) = (self.schema.range_filter(), &self.bucket) {
            spec = spec.with_bucket(range.field(), bucket.clone());
        }
        spec
    }

    /// Rows matching the current filters, in dataset order.
    pub fn filtered(&self) -> Vec<&T> {
        filter(self.store.rows(), &self.spec())
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.page.size())
    }

    pub fn page_number(&self) -> usize {
        self.page.current()
    }

    /// Steps forward unless on the last page. Returns whether it moved.
    pub fn next_page(&mut self) -> bool {
        let moved = self.page.next_page(self.total_pages());
        log::debug!("{}: next page -> {}", self.schema.title(), self.page.current());
        moved
    }

    /// Steps back unless on the first page. Returns whether it moved.
    pub fn prev_page(&mut self) -> bool {
        let moved = self.page.prev_page();
        log::debug!("{}: prev page -> {}", self.schema.title(), self.page.current());
        moved
    }

    /// Jumps to `page`, clamped into the valid range.
    pub fn go_to_page(&mut self, page: usize) {
        self.page.go_to(page, self.total_pages());
        log::debug!("{}: page -> {}", self.schema.title(), self.page.current());
    }

    /// The rows and pager state to render.
    pub fn current_page(&self) -> PageView<&T> {
        let spec = self.spec();
        let filtered = filter(self.store.rows(), &spec);
        let page = self.page.slice(&filtered);
        PageView::from_page(self.schema.title(), &page).filter_summary(spec.summary())
    }

    /// Options of the select on `field`, the "All" entry first.
    pub fn options(&self, field: &str) -> Result<Vec<FilterOption>, ViewError> {
        if let Some(filter) = self.schema.filter(field) {
            let mut options = vec![FilterOption::new(ALL, filter.all_label())];
            let values = match filter.source() {
                OptionSource::Fixed(values) => values.clone(),
                OptionSource::Distinct => distinct_values(self.store.rows(), field),
            };
            options.extend(values.into_iter().map(FilterOption::plain));
            return Ok(options);
        }

        match self.schema.range_filter() {
            Some(range) if range.field() == field => {
                let mut options = vec![FilterOption::new(ALL, range.all_label())];
                options.extend(range.buckets().labels().map(FilterOption::plain));
                Ok(options)
            }
            _ => Err(ViewError::UnknownFilter {
                view: self.schema.title().to_string(),
                field: field.to_string(),
            }),
        }
    }

    /// Serializes the whole filtered set, not just the current page.
    pub fn export(&self) -> Result<CsvExport, ViewError> {
        let filtered = self.filtered();
        let export = CsvExport::build(
            self.schema.export_filename(),
            filtered,
            self.schema.columns(),
        )?;
        log::debug!(
            "{}: exported {} rows as {}",
            self.schema.title(),
            export.rows,
            export.filename
        );
        Ok(export)
    }

    /// Exports and hands the result to `download`.
    pub fn export_to<D: Download + ?Sized>(&self, download: &mut D) -> Result<CsvExport, ViewError> {
        let export = self.export()?;
        download.deliver(&export)?;
        Ok(export)
    }
}
