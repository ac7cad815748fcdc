pub mod logging;
pub mod settings;
pub mod translation;

pub use settings::{Settings, TranslatorBackend};
