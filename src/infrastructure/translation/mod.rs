pub mod config;
pub mod mymemory;
pub mod offline;
pub mod stub;
pub mod types;

pub use mymemory::MyMemoryTranslator;
pub use offline::OfflineTranslator;
pub use stub::StubTranslator;
pub use types::{TranslateError, TranslateResult, Translation, Translator};
