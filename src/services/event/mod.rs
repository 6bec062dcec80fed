mod registry;

pub use registry::{sample_events, EventRegistry};
