// Serial Console - Command Loop auf echter Hardware
use defmt::{error, info, warn};

use crate::hal::{GpioLed, UartPort};
use crate::halt;
use esp_core::{Command, SerialConfig, serve};

/// Serial Console auf UART0 mit LED
///
/// Baut die esp-hal Bindings, übergibt sie an `esp_core::serve()` und loggt
/// jeden Zyklus. Hält bei einem fatalen Fehler an.
///
/// # Parameter
/// - `led_pin`: GPIO für die LED
/// - `uart`: UART0 Peripheral
/// - `rx`, `tx`: GPIOs der UART
pub fn serial_console<'a>(
    led_pin: impl Into<esp_hal::gpio::AnyPin<'a>>,
    uart: esp_hal::peripherals::UART0<'a>,
    rx: impl Into<esp_hal::gpio::AnyPin<'a>>,
    tx: impl Into<esp_hal::gpio::AnyPin<'a>>,
) -> ! {
    let led = GpioLed::new(led_pin);
    let port = UartPort::new(uart, rx, tx);
    let config = SerialConfig::default();

    info!("Opening serial channel: {}", config);

    let fault = serve(led, port, &config, |command| match command.led_level() {
        Some(level) => info!("Command {} -> LED {}", command, level),
        None => warn!("{} command, waiting for next", Command::Unrecognized),
    });

    // Kein Retry - Hardware-Fehler sind nicht behebbar
    error!("Serial channel fault: {}, halting", fault);
    halt()
}
