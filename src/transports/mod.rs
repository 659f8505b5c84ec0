//! Transport implementations

pub mod console;

pub use console::{Console, ConsoleSinks, ConsoleTransport, StdConsole, StreamConsole};

pub use crate::core::Transport;
