//! Seeker - filter, facet and paginate in-memory record collections.
//!
//! Seeker is the engine behind listpane's list views. It is generic over the
//! row type: rows expose named fields through [`Seekable`] (or an explicit
//! accessor function) and the engine never knows which concrete shape it is
//! looking at.
//!
//! - [`FilterSpec`]: text search ∧ equality selects ∧ one range bucket
//! - [`Query`]: the AND / OR / NOT clause groups a spec compiles into
//! - [`BucketSet`]: validated, gap-free numeric ranges for range selects
//! - [`paginate`] and [`PageState`]: fixed-size pages and page stepping
//! - [`distinct_values`]: option lists for selects
//!
//! # Quick Start
//!
//! ```rust
//! use listpane_seeker::{filter, paginate, FilterSpec, Number, PageSize, Seekable, Value};
//!
//! struct Product {
//!     name: String,
//!     category: String,
//!     price: f64,
//! }
//!
//! impl Seekable for Product {
//!     fn seeker_field_value(&self, field: &str) -> Value<'_> {
//!         match field {
//!             "name" => Value::String(&self.name),
//!             "category" => Value::String(&self.category),
//!             "price" => Value::Number(Number::F64(self.price)),
//!             _ => Value::None,
//!         }
//!     }
//! }
//!
//! let products = vec![
//!     Product { name: "Smart Watch".into(), category: "Electronics".into(), price: 199.99 },
//!     Product { name: "Yoga Mat".into(), category: "Fitness".into(), price: 29.99 },
//! ];
//!
//! let spec = FilterSpec::new()
//!     .search("watch", ["name", "category"])
//!     .equals("category", "All");
//!
//! let filtered = filter(&products, &spec);
//! let page = paginate(&filtered, 1, PageSize::DEFAULT);
//!
//! assert_eq!(page.items.len(), 1);
//! assert_eq!(page.items[0].name, "Smart Watch");
//! assert_eq!(page.total_pages, 1);
//! ```
//!
//! # How a spec evaluates
//!
//! A [`FilterSpec`] compiles into a [`Query`]. Search fields become
//! alternatives (`icontains`), selects and range bounds become requirements:
//!
//! ```text
//! (name ~ q ∨ category ~ q) ∧ category = "Electronics" ∧ price < 50
//! ```
//!
//! `IContains` only ever matches text fields and the ordering operators
//! (`Gt`, `Lte`, ...) only numbers. `Eq` works on both, and a text operand
//! equals a number when it parses to the same value. A missing field
//! matches nothing.

mod bucket;
mod clause;
mod error;
mod facets;
mod op;
mod page;
mod query;
mod spec;
mod traits;
mod value;

pub use bucket::{Bucket, BucketSet};
pub use clause::{Clause, ClauseValue};
pub use error::{Result, SeekerError};
pub use facets::{distinct_values, distinct_values_with};
pub use op::Op;
pub use page::{paginate, total_pages, Page, PageSize, PageState};
pub use query::Query;
pub use spec::{filter, filter_with, is_unconstrained, FilterSpec, ALL};
pub use traits::Seekable;
pub use value::{Number, Value};
