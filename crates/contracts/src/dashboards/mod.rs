pub mod d400_home;
pub mod d401_earnings;
