//! Display models for CLI output
//!
//! Each display type converts domain data into rows for tables and HTML,
//! or implements [`crate::output::Formattable`] directly when it needs a
//! richer pretty view.

mod department;
mod hierarchy;

pub use department::DashboardView;
pub use hierarchy::{HierarchyDisplay, ResolutionView, SubordinateDisplay};
