//! Several sorting algorithms racing in lockstep, one comparison per algorithm per tick.
//!
//! Every algorithm is written as a state machine over an explicit [`ContinuationStack`], so it can
//! be suspended after any single step and resumed later without recursion or native coroutines.
//! The [`Scheduler`] owns one instance per algorithm and round-robins them.

pub mod clock;
pub mod config;
pub mod continuation;
pub mod patterns;
pub mod scheduler;
pub mod step;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{Config, ConfigError};
pub use continuation::ContinuationStack;
pub use scheduler::{Completion, Lane, Scheduler, Snapshot};
pub use step::{run_to_completion, Algorithm, StepSort};
