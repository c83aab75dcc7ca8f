//! UI Components
//!
//! Pages and reusable Leptos components.

mod navbar;
mod toaster;
mod estado_badge;
mod pager;
mod delete_confirm_button;
mod project_list;
mod project_form;
mod status_chart;
mod summary_view;
mod ai_summary;
mod dashboard;
mod log_panel;

pub use navbar::Navbar;
pub use toaster::Toaster;
pub use estado_badge::EstadoBadge;
pub use pager::Pager;
pub use delete_confirm_button::DeleteConfirmButton;
pub use project_list::ProjectListPage;
pub use project_form::ProjectFormPage;
pub use status_chart::StatusChart;
pub use summary_view::SummaryView;
pub use ai_summary::AiSummaryPanel;
pub use dashboard::DashboardPage;
pub use log_panel::LogPanel;
