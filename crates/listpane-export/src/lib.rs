//! CSV export for listpane views.
//!
//! [`to_csv`] serializes a filtered row sequence under a list of
//! [`Column`]s; [`CsvExport`] pairs the result with a file name, and a
//! [`Download`] implementation delivers it.
//!
//! ```
//! use listpane_export::{Column, CsvExport, Download, MemoryDownload};
//! use listpane_seeker::{Seekable, Value};
//!
//! struct Lead { name: String, status: String }
//!
//! impl Seekable for Lead {
//!     fn seeker_field_value(&self, field: &str) -> Value<'_> {
//!         match field {
//!             "name" => Value::String(&self.name),
//!             "status" => Value::String(&self.status),
//!             _ => Value::None,
//!         }
//!     }
//! }
//!
//! let leads = vec![Lead { name: "John Doe".into(), status: "New".into() }];
//! let columns = vec![Column::field("Name", "name"), Column::field("Status", "status")];
//!
//! let export = CsvExport::build("leads.csv", &leads, &columns)?;
//! let mut download = MemoryDownload::new();
//! download.deliver(&export)?;
//!
//! assert_eq!(download.exports()[0].contents, "Name,Status\nJohn Doe,New\n");
//! # Ok::<(), listpane_export::ExportError>(())
//! ```

mod download;
mod error;
mod writer;

pub use download::{DirectoryDownload, Download, MemoryDownload};
pub use error::{ExportError, Result};
pub use writer::{to_csv, Column, CsvExport};
