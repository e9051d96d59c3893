// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_hal bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

use defmt::info;

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_led_konsole::config::{LED_GPIO_PIN, UART_RX_GPIO_PIN, UART_TX_GPIO_PIN};
use esp_led_konsole::console::serial_console;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert die Hardware und übergibt LED-Pin und UART0 an die
/// Serial Console. Kehrt nie zurück.
#[esp_hal::main]
fn main() -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    info!(
        "Boot: LED GPIO{}, UART0 TX GPIO{} RX GPIO{}",
        LED_GPIO_PIN, UART_TX_GPIO_PIN, UART_RX_GPIO_PIN
    );

    // Pins müssen zu config.rs passen
    serial_console(
        peripherals.GPIO15,
        peripherals.UART0,
        peripherals.GPIO17,
        peripherals.GPIO16,
    )
}
