//! # listpane
//!
//! Admin-style list views over in-memory datasets: a search box, select
//! filters, fixed-size pages and CSV export of everything that matches.
//!
//! The filtering and paging engine lives in [`listpane_seeker`] and the CSV
//! writer in [`listpane_export`]; this crate binds them to concrete row
//! types and keeps the per-view UI state.
//!
//! ```
//! use listpane::records::{product_schema, sample_products};
//! use listpane::{ListView, RecordStore};
//!
//! let mut view = ListView::new(RecordStore::new(sample_products()), product_schema()?);
//! view.search("electronics");
//! view.select_range("Under $50")?;
//!
//! let page = view.current_page();
//! assert_eq!(page.total_count, 3);
//! assert_eq!(page.indicator(), "Page 1 of 1");
//!
//! let export = view.export()?;
//! assert!(export.contents.starts_with("Name,Category,Price,Stock,Sales\n"));
//! # Ok::<(), listpane::ViewError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod records;
pub mod render;
pub mod store;
pub mod view;

pub use config::{Config, ViewConfig};
pub use error::{ConfigError, ViewError};
pub use store::RecordStore;
pub use view::{ListView, PageView, ViewSchema};
