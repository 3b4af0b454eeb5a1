pub mod a001_affiliate;
pub mod a002_product;
pub mod a003_bonus;
pub mod a004_invoice;
pub mod a005_bank_account;
pub mod a006_training_video;
pub mod common;
