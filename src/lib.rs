//! Measure how long a function call takes, alongside what it returned.

pub mod report;
pub mod timed;
pub mod timer;
pub mod triangular;

pub use timed::Timed;
pub use timer::{get_time, measure, measure_async, try_get_time};
