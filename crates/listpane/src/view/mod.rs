//! List views: schema, state and the page handed to renderers.

mod controller;
mod page_view;
mod schema;

pub use controller::ListView;
pub use page_view::PageView;
pub use schema::{
    FilterField, FilterOption, OptionSource, RangeFilter, ViewSchema, ViewSchemaBuilder,
};
