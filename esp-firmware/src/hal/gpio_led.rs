// LED Output über esp-hal GPIO
//
// Implementiert den LedOutput Trait aus esp-core für einen einzelnen
// Push-Pull Ausgang.

use esp_core::{LedLevel, LedOutput};
use esp_hal::gpio::{AnyPin, DriveMode, Level, Output, OutputConfig};

/// Real Hardware LED
///
/// Hält den Pin bis `configure()` aufgerufen wird, danach den
/// konfigurierten `Output` Treiber.
pub struct GpioLed<'a> {
    pin: Option<AnyPin<'a>>,
    output: Option<Output<'a>>,
}

impl<'a> GpioLed<'a> {
    /// Erstellt eine GpioLed
    ///
    /// # Parameter
    /// - `pin`: GPIO Peripheral für die LED (z.B. `peripherals.GPIO15`)
    pub fn new(pin: impl Into<AnyPin<'a>>) -> Self {
        Self {
            pin: Some(pin.into()),
            output: None,
        }
    }
}

fn hal_level(level: LedLevel) -> Level {
    match level {
        LedLevel::Low => Level::Low,
        LedLevel::High => Level::High,
    }
}

impl<'a> LedOutput for GpioLed<'a> {
    fn init(&mut self) {
        // GPIO wird bereits von esp_hal::init() hochgefahren
    }

    fn configure(&mut self, initial: LedLevel) {
        // Nur einmal möglich: der Pin geht in den Output Treiber über
        let Some(pin) = self.pin.take() else {
            return;
        };

        let config = OutputConfig::default().with_drive_mode(DriveMode::PushPull);

        self.output = Some(Output::new(pin, hal_level(initial), config));
    }

    fn write(&mut self, level: LedLevel) {
        // Vor configure() gibt es keinen Treiber - Schreiben wird ignoriert
        if let Some(output) = self.output.as_mut() {
            output.set_level(hal_level(level));
        }
    }
}
