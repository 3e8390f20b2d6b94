pub mod analysis;
pub mod error;
pub mod parse;
pub mod report;
