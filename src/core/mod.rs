pub mod calendar;
pub mod clear;
pub mod location;
pub mod log;
pub mod payments;
pub mod recurrence;
pub mod shift;
pub mod summary;
