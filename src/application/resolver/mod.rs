pub mod config;
pub mod dictionary;
pub mod filter;
pub mod loader;
pub mod resolver;
pub mod types;

pub use dictionary::StaticDictionary;
pub use loader::load_dictionary_dir;
pub use resolver::{Resolver, ResolverBuilder};
pub use types::{ResolverConfig, ResolverStats};
