//! Employee listing: fetch, search, filter, sort, page and row actions.

pub mod controller;
pub mod filter;
pub mod pagination;
pub mod sort;

pub use controller::{ActionError, PendingAction, RowAction, TableController};
pub use filter::StatusFilter;
pub use pagination::DEFAULT_PAGE_SIZE;
pub use sort::{SortColumn, SortDirection, SortOrder};
