pub mod export;
pub mod roi;
