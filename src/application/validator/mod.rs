pub mod types;
pub mod validator;

pub use types::InvalidWord;
pub use validator::{normalize, validate};
