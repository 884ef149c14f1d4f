pub mod journal;
pub mod schedule;
pub mod support;
