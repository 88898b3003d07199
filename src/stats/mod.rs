pub mod accumulator;
pub mod report;

pub use accumulator::{throughput, DirectionStats, TransferSample};
pub use report::report_direction;
