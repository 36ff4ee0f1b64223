pub mod catalog;
pub mod dashboard;

pub use catalog::{Catalogs, load_catalogs, load_edit_context};
pub use dashboard::{DashboardStats, load_stats};
