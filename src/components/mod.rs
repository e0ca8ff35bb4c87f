//! UI Components
//!
//! Reusable Leptos components.

mod sidebar;
mod page_header;
mod stat_card;
mod lead_table;
mod status_badge;

pub use sidebar::Sidebar;
pub use page_header::PageHeader;
pub use stat_card::{Stat, StatCard};
pub use lead_table::LeadTable;
pub use status_badge::StatusBadge;
