//! Periodic tracking loop: orchestrator, cycle clock and output sinks

pub mod clock;
pub mod sink;
pub mod tracker;

pub use clock::{CycleClock, ManualClock, TokioClock};
pub use sink::{CycleOutcome, CycleReport, LogSink, MemorySink, ReportSink};
pub use tracker::Tracker;
