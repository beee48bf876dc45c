//! CSV serialization of filtered rows.
//!
//! Output is one header line followed by one line per row. Every line ends
//! in `\n`, fields are comma separated, and a field is quoted only when it
//! contains a comma, a double quote, CR or LF (inner quotes are doubled).
//! Numbers use their shortest round-trip rendering: `59.99`, `1200`.

use std::borrow::Borrow;
use std::fmt;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use listpane_seeker::{Seekable, Value};

use crate::error::Result;

type Extract<T> = Box<dyn for<'a> Fn(&'a T) -> Value<'a>>;
type Format = Box<dyn Fn(&Value<'_>) -> String>;

/// One exported column: a header and the way to read its cell from a row.
///
/// CSV always carries the raw value; an optional display formatter only
/// affects on-screen tables.
pub struct Column<T> {
    header: String,
    extract: Extract<T>,
    format: Option<Format>,
}

impl<T> Column<T> {
    /// Creates a column from an explicit extractor.
    pub fn new<F>(header: impl Into<String>, extract: F) -> Self
    where
        F: for<'a> Fn(&'a T) -> Value<'a> + 'static,
    {
        Column {
            header: header.into(),
            extract: Box::new(extract),
            format: None,
        }
    }

    /// Sets how the cell is shown on screen, e.g. prices with two decimals.
    pub fn display_with<F>(mut self, format: F) -> Self
    where
        F: Fn(&Value<'_>) -> String + 'static,
    {
        self.format = Some(Box::new(format));
        self
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// Reads this column's cell from `row`.
    pub fn value<'a>(&self, row: &'a T) -> Value<'a> {
        (self.extract)(row)
    }

    /// The cell as shown on screen.
    pub fn display(&self, row: &T) -> String {
        let value = self.value(row);
        match &self.format {
            Some(format) => format(&value),
            None => value.to_string(),
        }
    }
}

impl<T: Seekable> Column<T> {
    /// A column that reads the named [`Seekable`] field.
    pub fn field(header: impl Into<String>, field: &str) -> Self {
        let field = field.to_string();
        Column::new(header, move |row: &T| row.seeker_field_value(&field))
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("header", &self.header)
            .finish_non_exhaustive()
    }
}

/// Serializes `records` under `columns`.
///
/// Accepts anything yielding rows or row references, so both a dataset
/// (`&[T]`) and a filter result (`Vec<&T>`) can be passed directly. Empty
/// input produces the header line alone.
///
/// # Example
///
/// ```
/// use listpane_export::{to_csv, Column};
/// use listpane_seeker::{Number, Value};
///
/// struct Item { name: String, price: f64 }
///
/// let columns = vec![
///     Column::new("Name", |i: &Item| Value::String(&i.name)),
///     Column::new("Price", |i: &Item| Value::Number(Number::F64(i.price))),
/// ];
/// let items = vec![Item { name: "Widget, Deluxe".into(), price: 9.5 }];
///
/// let csv = to_csv(&items, &columns)?;
/// assert_eq!(csv, "Name,Price\n\"Widget, Deluxe\",9.5\n");
/// # Ok::<(), listpane_export::ExportError>(())
/// ```
pub fn to_csv<T, I>(records: I, columns: &[Column<T>]) -> Result<String>
where
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    write_rows(records, columns).map(|(csv, _)| csv)
}

/// Serializes and also reports how many data rows were written.
fn write_rows<T, I>(records: I, columns: &[Column<T>]) -> Result<(String, usize)>
where
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(vec![]);

    wtr.write_record(columns.iter().map(Column::header))?;

    let mut rows = 0usize;
    for record in records {
        let row = record.borrow();
        wtr.write_record(columns.iter().map(|c| c.value(row).to_string()))?;
        rows += 1;
    }

    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    log::debug!("serialized {} rows across {} columns", rows, columns.len());
    Ok((String::from_utf8(bytes)?, rows))
}

/// A finished export, ready to be handed to a [`Download`](crate::Download).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub contents: String,
    /// Data rows in `contents`, header excluded.
    pub rows: usize,
}

impl CsvExport {
    pub fn new(filename: impl Into<String>, contents: impl Into<String>, rows: usize) -> Self {
        CsvExport {
            filename: filename.into(),
            contents: contents.into(),
            rows,
        }
    }

    /// Serializes `records` and names the result `filename`.
    pub fn build<T, I>(filename: impl Into<String>, records: I, columns: &[Column<T>]) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let (contents, rows) = write_rows(records, columns)?;
        Ok(CsvExport::new(filename, contents, rows))
    }
}
