//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, den Kommando-Parser und die Command Loop.

#![no_std]

pub mod command_loop;
pub mod logic;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use command_loop::{CommandLoop, serve};
pub use logic::{FAILURE_MESSAGE, GREETING, ParseState, Step, step};
pub use traits::{ChannelError, LedOutput, SerialChannel, SerialPort};
pub use types::{Command, LedLevel, SerialConfig};
