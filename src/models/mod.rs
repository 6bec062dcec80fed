// Data models for countdown-studio

pub mod event;
pub mod preset;
pub mod style;
