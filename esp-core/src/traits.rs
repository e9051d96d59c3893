//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.
//!
//! # Implementierungen
//! - **Production:** GpioLed, UartPort/UartChannel (esp-hal)
//! - **Testing:** Mocks in esp-tests (in-memory, mit Event-Log)

use crate::types::{LedLevel, SerialConfig};

/// Fehler-Typ für den Serial Channel
///
/// Alle Varianten sind fatal: die Firmware loggt den Fehler und hält an.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelError {
    /// Channel konnte beim Start nicht geöffnet werden
    OpenFailed,
    /// Lese-Primitive meldet Fehler
    ReadFailed,
    /// Schreib-Primitive meldet Fehler
    WriteFailed,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ChannelError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ChannelError::OpenFailed => defmt::write!(fmt, "OpenFailed"),
            ChannelError::ReadFailed => defmt::write!(fmt, "ReadFailed"),
            ChannelError::WriteFailed => defmt::write!(fmt, "WriteFailed"),
        }
    }
}

/// Trait für den digitalen Ausgang der LED
///
/// Die Implementierung besitzt genau einen Pin.
pub trait LedOutput {
    /// Initialisiert das GPIO-Subsystem
    fn init(&mut self);

    /// Konfiguriert den Pin als Standard-Ausgang (Push-Pull) mit Start-Pegel
    fn configure(&mut self, initial: LedLevel);

    /// Setzt den Pegel des Pins
    fn write(&mut self, level: LedLevel);
}

/// Trait für einen geöffneten Serial Channel
pub trait SerialChannel {
    /// Liest bis zu `buf.len()` Bytes
    ///
    /// `Ok(0)` ist kein Fehler - der Aufrufer versucht es erneut.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, ChannelError>;

    /// Schreibt bis zu `buf.len()` Bytes und gibt die Anzahl geschriebener Bytes zurück
    ///
    /// `Ok(0)` ist kein Fehler - der Aufrufer versucht es erneut.
    fn write(&mut self, buf: &[u8]) -> Result<usize, ChannelError>;
}

/// Trait für einen noch nicht geöffneten Serial Port
pub trait SerialPort {
    type Channel: SerialChannel;

    /// Öffnet den Channel
    ///
    /// # Fehlerbehandlung
    /// Gibt `ChannelError::OpenFailed` zurück wenn der Treiber die
    /// Konfiguration ablehnt
    fn open(self, config: &SerialConfig) -> Result<Self::Channel, ChannelError>;
}
