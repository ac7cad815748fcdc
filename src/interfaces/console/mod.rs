pub mod command;
pub mod console;
pub mod session;

pub use command::Command;
pub use console::ConsoleUI;
pub use session::{Reply, execute, run};
