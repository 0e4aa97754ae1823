pub mod calculator;
pub mod export;
pub mod format;
