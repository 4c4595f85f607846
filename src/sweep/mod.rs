//! Repeated-run studies for tuning a cooling schedule.
//!
//! Averages the cost trace of many independent, seeded runs so schedules
//! can be compared on their typical behaviour instead of a single lucky or
//! unlucky run. With the `parallel` feature the runs execute on rayon and
//! share one [`WeightTable`](crate::tour::WeightTable).

mod runner;

pub use runner::{
    average_trace, compare_ratios, RatioTrial, DEFAULT_TEST_RATIOS, DEFAULT_TEST_RUNS,
};
