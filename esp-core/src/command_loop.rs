//! Command Loop - liest Kommandos vom Serial Channel und schaltet die LED
//!
//! Generisch über `LedOutput` und `SerialChannel`:
//! - Real Hardware (GpioLed, UartChannel) in der Firmware
//! - Mocks in den Host-Tests

use crate::logic::{FAILURE_MESSAGE, GREETING, ParseState, Step, step};
use crate::traits::{ChannelError, LedOutput, SerialChannel, SerialPort};
use crate::types::{Command, LedLevel, SerialConfig};

/// Die Command Loop besitzt LED und Channel für die gesamte Laufzeit.
pub struct CommandLoop<L, C> {
    led: L,
    channel: C,
    led_level: LedLevel,
}

impl<L: LedOutput, C: SerialChannel> CommandLoop<L, C> {
    /// Start-Protokoll
    ///
    /// 1. GPIO initialisieren
    /// 2. LED-Pin als Push-Pull Ausgang, Start-Pegel Low
    /// 3. Serial Channel öffnen
    /// 4. LED auf High (Start erfolgreich)
    /// 5. Begrüßung senden
    ///
    /// # Fehlerbehandlung
    /// `ChannelError::OpenFailed` wenn der Port nicht geöffnet werden kann.
    /// Die LED bleibt dann Low und es wird nichts gesendet.
    pub fn start<P>(mut led: L, port: P, config: &SerialConfig) -> Result<Self, ChannelError>
    where
        P: SerialPort<Channel = C>,
    {
        led.init();
        led.configure(LedLevel::Low);

        let channel = port.open(config)?;

        let mut command_loop = Self {
            led,
            channel,
            led_level: LedLevel::Low,
        };
        command_loop.set_led(LedLevel::High);
        command_loop.write_all(GREETING)?;

        Ok(command_loop)
    }

    /// Zuletzt geschriebener LED-Pegel
    pub fn led_level(&self) -> LedLevel {
        self.led_level
    }

    /// Ein kompletter Command-Zyklus: von `AwaitFirst` bis zu einem Endzustand
    ///
    /// Nach dem Dispatch wird das zuletzt gelesene Zeichen zurückgeschickt.
    pub fn run_cycle(&mut self) -> Result<Command, ChannelError> {
        let mut state = ParseState::AwaitFirst;
        let mut input = self.read_byte()?;

        let command = loop {
            match step(state, input) {
                Step::EchoAndRead(next) => {
                    self.write_byte(input)?;
                    input = self.read_byte()?;
                    state = next;
                }
                Step::Done(command) => break command,
            }
        };

        match command.led_level() {
            Some(level) => self.set_led(level),
            None => self.write_all(FAILURE_MESSAGE)?,
        }

        self.write_byte(input)?;
        Ok(command)
    }

    /// Endlosschleife über `run_cycle()`
    ///
    /// `on_command` wird nach jedem Zyklus aufgerufen. Kehrt nur mit dem
    /// ersten fatalen Fehler zurück.
    pub fn run<F: FnMut(Command)>(&mut self, mut on_command: F) -> ChannelError {
        loop {
            match self.run_cycle() {
                Ok(command) => on_command(command),
                Err(e) => return e,
            }
        }
    }

    fn set_led(&mut self, level: LedLevel) {
        self.led.write(level);
        self.led_level = level;
    }

    /// Liest genau ein Zeichen, 0-Byte-Reads werden wiederholt
    fn read_byte(&mut self) -> Result<u8, ChannelError> {
        let mut buf = [0u8; 1];
        while self.channel.read(&mut buf)? == 0 {}
        Ok(buf[0])
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), ChannelError> {
        self.write_all(&[byte])
    }

    /// Schreibt den ganzen Buffer, 0-Byte-Writes werden wiederholt
    fn write_all(&mut self, mut buf: &[u8]) -> Result<(), ChannelError> {
        while !buf.is_empty() {
            let written = self.channel.write(buf)?;
            buf = &buf[written.min(buf.len())..];
        }
        Ok(())
    }
}

/// Start-Protokoll und Endlosschleife in einem
///
/// Kehrt nur mit dem ersten fatalen Fehler zurück, beim Start also mit
/// `ChannelError::OpenFailed`. `on_command` wird nach jedem Zyklus aufgerufen.
pub fn serve<L, P, F>(led: L, port: P, config: &SerialConfig, on_command: F) -> ChannelError
where
    L: LedOutput,
    P: SerialPort,
    F: FnMut(Command),
{
    match CommandLoop::start(led, port, config) {
        Ok(mut command_loop) => command_loop.run(on_command),
        Err(e) => e,
    }
}
