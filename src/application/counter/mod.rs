pub mod counter;
pub mod types;

pub use counter::Counter;
