//! Pages
//!
//! One component per route.

mod dashboard;
mod leads;
mod calls;
mod settings;

pub use dashboard::DashboardPage;
pub use leads::LeadsPage;
pub use calls::CallsPage;
pub use settings::SettingsPage;
