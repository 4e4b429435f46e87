pub mod computer;
pub mod pizza;
