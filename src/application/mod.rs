pub mod counter;
pub mod resolver;
pub mod validator;

pub use counter::Counter;
pub use resolver::{Resolver, ResolverConfig, ResolverStats, StaticDictionary};
pub use validator::{InvalidWord, normalize, validate};
