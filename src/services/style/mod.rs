mod catalog;
mod persistence;
mod service;

pub use catalog::built_in_presets;
pub use persistence::{load_user_presets, save_user_presets, PRESETS_FILE};
pub use service::StyleService;
