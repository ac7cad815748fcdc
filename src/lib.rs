pub mod application;
pub mod infrastructure;
pub mod interfaces;

pub use application::{Counter, InvalidWord, Resolver, ResolverConfig, StaticDictionary};
pub use infrastructure::translation::{Translation, Translator};
