//! Static description of a list view.

use listpane_export::Column;
use listpane_seeker::{Bucket, BucketSet, PageSize};
use serde::Serialize;

use crate::error::ViewError;

/// Where a select filter gets its options from.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionSource {
    /// A fixed list, in display order.
    Fixed(Vec<String>),
    /// The distinct values of the field in the dataset, first seen first.
    Distinct,
}

/// A categorical select: an exact-match filter on one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterField {
    field: String,
    all_label: String,
    source: OptionSource,
}

impl FilterField {
    pub fn fixed<I, S>(field: &str, all_label: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterField {
            field: field.to_string(),
            all_label: all_label.to_string(),
            source: OptionSource::Fixed(values.into_iter().map(Into::into).collect()),
        }
    }

    pub fn distinct(field: &str, all_label: &str) -> Self {
        FilterField {
            field: field.to_string(),
            all_label: all_label.to_string(),
            source: OptionSource::Distinct,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Label of the "no constraint" option, e.g. "All Categories".
    pub fn all_label(&self) -> &str {
        &self.all_label
    }

    pub fn source(&self) -> &OptionSource {
        &self.source
    }
}

/// A numeric select backed by a validated bucket set.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeFilter {
    field: String,
    all_label: String,
    buckets: BucketSet,
}

impl RangeFilter {
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn all_label(&self) -> &str {
        &self.all_label
    }

    pub fn buckets(&self) -> &BucketSet {
        &self.buckets
    }
}

/// One entry of a select, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        FilterOption {
            value: value.into(),
            label: label.into(),
        }
    }

    /// An option whose label is its value.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        FilterOption {
            label: value.clone(),
            value,
        }
    }
}

/// Everything that distinguishes one list view from another: what is
/// searched, what can be selected, what is exported and how it pages.
#[derive(Debug)]
pub struct ViewSchema<T> {
    title: String,
    search_fields: Vec<String>,
    filters: Vec<FilterField>,
    range: Option<RangeFilter>,
    columns: Vec<Column<T>>,
    export_filename: String,
    page_size: PageSize,
}

impl<T> ViewSchema<T> {
    pub fn builder(title: impl Into<String>) -> ViewSchemaBuilder<T> {
        ViewSchemaBuilder::new(title)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn search_fields(&self) -> &[String] {
        &self.search_fields
    }

    pub fn filters(&self) -> &[FilterField] {
        &self.filters
    }

    pub fn filter(&self, field: &str) -> Option<&FilterField> {
        self.filters.iter().find(|f| f.field == field)
    }

    pub fn range_filter(&self) -> Option<&RangeFilter> {
        self.range.as_ref()
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn export_filename(&self) -> &str {
        &self.export_filename
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_export_filename(mut self, filename: impl Into<String>) -> Self {
        self.export_filename = filename.into();
        self
    }

    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.page_size = size;
        self
    }
}

/// Builder for [`ViewSchema`].
///
/// ```
/// use listpane::view::{FilterField, ViewSchema};
/// use listpane::records::Lead;
/// use listpane_export::Column;
///
/// let schema = ViewSchema::<Lead>::builder("Leads")
///     .search_fields(["name", "email"])
///     .filter(FilterField::distinct("status", "All Statuses"))
///     .column(Column::field("Name", "name"))
///     .export_filename("leads.csv")
///     .build()?;
///
/// assert_eq!(schema.page_size().get(), 5);
/// # Ok::<(), listpane::ViewError>(())
/// ```
#[derive(Debug)]
pub struct ViewSchemaBuilder<T> {
    title: String,
    search_fields: Vec<String>,
    filters: Vec<FilterField>,
    range: Option<(String, String, Vec<Bucket>)>,
    columns: Vec<Column<T>>,
    export_filename: String,
    page_size: PageSize,
}

impl<T> ViewSchemaBuilder<T> {
    pub fn new(title: impl Into<String>) -> Self {
        ViewSchemaBuilder {
            title: title.into(),
            search_fields: Vec::new(),
            filters: Vec::new(),
            range: None,
            columns: Vec::new(),
            export_filename: "export.csv".to_string(),
            page_size: PageSize::DEFAULT,
        }
    }

    /// Text fields the search box matches against.
    pub fn search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn filter(mut self, filter: FilterField) -> Self {
        self.filters.push(filter);
        self
    }

    /// Sets the range select. Buckets are validated by [`build`](Self::build).
    pub fn range(mut self, field: &str, all_label: &str, buckets: Vec<Bucket>) -> Self {
        self.range = Some((field.to_string(), all_label.to_string(), buckets));
        self
    }

    pub fn column(mut self, column: Column<T>) -> Self {
        self.columns.push(column);
        self
    }

    pub fn export_filename(mut self, filename: impl Into<String>) -> Self {
        self.export_filename = filename.into();
        self
    }

    pub fn page_size(mut self, size: PageSize) -> Self {
        self.page_size = size;
        self
    }

    pub fn build(self) -> Result<ViewSchema<T>, ViewError> {
        let range = match self.range {
            Some((field, all_label, buckets)) => Some(RangeFilter {
                field,
                all_label,
                buckets: BucketSet::new(buckets)?,
            }),
            None => None,
        };

        Ok(ViewSchema {
            title: self.title,
            search_fields: self.search_fields,
            filters: self.filters,
            range,
            columns: self.columns,
            export_filename: self.export_filename,
            page_size: self.page_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use listpane_seeker::SeekerError;

    #[test]
    fn gapped_buckets_fail_the_build() {
        let err = ViewSchema::<()>::builder("Broken")
            .range(
                "price",
                "All",
                vec![Bucket::under("low", 50.0), Bucket::over("high", 50.0)],
            )
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            ViewError::Seeker(SeekerError::BucketGap { .. })
        ));
    }

    #[test]
    fn lookups() {
        let schema = ViewSchema::<()>::builder("Leads")
            .filter(FilterField::distinct("status", "All Statuses"))
            .filter(FilterField::fixed("tier", "All Tiers", ["Gold", "Silver"]))
            .build()
            .unwrap();

        assert_eq!(schema.filter("status").map(FilterField::all_label), Some("All Statuses"));
        assert_eq!(
            schema.filter("tier").map(FilterField::source),
            Some(&OptionSource::Fixed(vec!["Gold".into(), "Silver".into()]))
        );
        assert!(schema.filter("email").is_none());
        assert!(schema.range_filter().is_none());
    }
}
