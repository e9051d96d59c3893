// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Traits aus esp-core mit esp-hal Treibern.
// Die Command Loop selbst kennt nur die Traits.

pub mod gpio_led;
pub mod uart_channel;

pub use gpio_led::GpioLed;
pub use uart_channel::{UartChannel, UartPort};
