pub mod quotes;
pub mod schedule;
pub mod support;
