//! Inventory data model and the pure logic behind the dashboard: amount
//! parsing, stats aggregation, list mutations, grid projection, editor form
//! and mode permissions. Nothing here touches the browser.

pub mod form;
pub mod mode;
pub mod money;
pub mod product;
pub mod stats;
pub mod table;

pub use form::{FormError, FormField, ProductForm};
pub use mode::{Mode, RowAction};
pub use money::{format_grouped, Amount, Money};
pub use product::{Product, ProductDraft, ProductId, ProductList};
pub use stats::{StatCard, Stats};
pub use table::{
    Column, RowModel, SortDirection, SortKey, TableState, DEFAULT_PAGE_SIZE, SKELETON_COLUMNS,
    SKELETON_ROWS,
};
