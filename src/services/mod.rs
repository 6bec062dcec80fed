// Service layer: countdown math and refresh loop, style/preset store,
// event registry, app configuration

pub mod config;
pub mod countdown;
pub mod event;
pub mod style;
