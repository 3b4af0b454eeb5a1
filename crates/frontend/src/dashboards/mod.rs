pub mod d400_home;
pub mod d401_earnings;

pub use d400_home::ui::HomeDashboard;
pub use d401_earnings::ui::EarningsDashboard;
