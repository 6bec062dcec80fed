mod calculator;
mod clock;
mod scheduler;

pub use calculator::{compute, parse_target, TargetError, TimeBreakdown};
pub use clock::{Clock, SystemClock};
pub use scheduler::{RefreshScheduler, DEFAULT_TICK_INTERVAL};
