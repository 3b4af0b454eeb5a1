pub mod chart;
pub mod dashboard;

pub use dashboard::EarningsDashboard;
