//! Core Types für die serielle LED-Konsole
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Pegel des LED-Pins
///
/// `High` = LED an, `Low` = LED aus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LedLevel {
    #[default]
    Low,
    High,
}

/// Parameter zum Öffnen des Serial Channels
///
/// Lesen und Schreiben sind immer blockierend, 8N1 kommt vom Treiber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerialConfig {
    pub baud_rate: u32,
}

impl Default for SerialConfig {
    /// 115200 Baud
    fn default() -> Self {
        Self { baud_rate: 115_200 }
    }
}

/// Ergebnis eines Command-Zyklus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// "ON" erkannt - LED an
    On,
    /// "OFF" erkannt - LED aus
    Off,
    /// Eingabe passt weder auf "ON" noch auf "OFF"
    Unrecognized,
}

impl Command {
    /// LED-Pegel den das Kommando setzt (None = keine Änderung)
    pub fn led_level(self) -> Option<LedLevel> {
        match self {
            Command::On => Some(LedLevel::High),
            Command::Off => Some(LedLevel::Low),
            Command::Unrecognized => None,
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedLevel {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedLevel::Low => defmt::write!(fmt, "Low"),
            LedLevel::High => defmt::write!(fmt, "High"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SerialConfig {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "SerialConfig {{ baud: {}, blocking }}", self.baud_rate)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Command {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Command::On => defmt::write!(fmt, "ON"),
            Command::Off => defmt::write!(fmt, "OFF"),
            Command::Unrecognized => defmt::write!(fmt, "Unrecognized"),
        }
    }
}
