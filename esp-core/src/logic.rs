//! Pure Business Logic Functions
//!
//! Der Kommando-Parser als Zustandsautomat, ohne Hardware-Dependencies (testbar!)

use crate::types::Command;

/// Begrüßung, einmal nach erfolgreichem Start gesendet
pub const GREETING: &[u8] = b"Echoing characters:\r\n";

/// Fehlermeldung bei unbekanntem Kommando (Tippfehler ist Teil der Ausgabe)
pub const FAILURE_MESSAGE: &[u8] = b"Not a vaild entry start over\n";

/// Zustand innerhalb eines Command-Zyklus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseState {
    #[default]
    AwaitFirst,
    /// 'O' gelesen
    AwaitSecond,
    /// "OF" gelesen
    AwaitThird,
}

/// Ergebnis eines Übergangs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Zeichen zurückschicken, nächstes Zeichen lesen, weiter im Zustand
    EchoAndRead(ParseState),
    /// Zyklus beendet
    Done(Command),
}

/// Übergangsfunktion des Parsers
///
/// Akzeptiert genau "ON" und "OFF" (case-sensitive). Jede Abweichung
/// beendet den Zyklus mit `Command::Unrecognized`.
///
/// # Beispiele
///
/// ```
/// # use esp_core::{step, Command, ParseState, Step};
/// assert_eq!(step(ParseState::AwaitFirst, b'O'), Step::EchoAndRead(ParseState::AwaitSecond));
/// assert_eq!(step(ParseState::AwaitSecond, b'N'), Step::Done(Command::On));
/// ```
pub fn step(state: ParseState, input: u8) -> Step {
    match (state, input) {
        (ParseState::AwaitFirst, b'O') => Step::EchoAndRead(ParseState::AwaitSecond),
        // Das 'N' wird hier nicht zurückgeschickt, nur 'O' und 'F'
        (ParseState::AwaitSecond, b'N') => Step::Done(Command::On),
        (ParseState::AwaitSecond, b'F') => Step::EchoAndRead(ParseState::AwaitThird),
        (ParseState::AwaitThird, b'F') => Step::Done(Command::Off),
        _ => Step::Done(Command::Unrecognized),
    }
}
