// Library-Root: Hardware-Bindings und Console
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod console;
pub mod hal;

// Re-exports von esp-core
pub use esp_core::{ChannelError, Command, CommandLoop, LedLevel};

/// Endloser Leerlauf nach einem fatalen Fehler
///
/// Keine weitere I/O, kein Neustart.
pub fn halt() -> ! {
    loop {
        core::hint::spin_loop();
    }
}
