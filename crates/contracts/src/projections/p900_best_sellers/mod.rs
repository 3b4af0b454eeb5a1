pub mod dto;
pub mod seed;
