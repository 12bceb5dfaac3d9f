pub mod calendar;
pub mod habit;
pub mod log;
pub mod stats;
pub mod track;
