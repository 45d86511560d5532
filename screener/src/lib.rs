pub mod filter;
pub mod listings;
pub mod report;
pub mod sheet;
