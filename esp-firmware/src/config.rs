// Projekt-Konfiguration: Hardware-Zuordnungen
//
// Die Pins selbst werden in main.rs über `peripherals.GPIOxx` übergeben,
// die Nummern hier müssen dazu passen (werden beim Boot geloggt).
// Baudrate und Modus kommen aus `esp_core::SerialConfig::default()`.

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für die LED (Push-Pull, High = an)
pub const LED_GPIO_PIN: u8 = 15;

// ============================================================================
// UART Konfiguration
// ============================================================================

/// UART0 TX-Pin (zum USB-UART Bridge des DevKits)
pub const UART_TX_GPIO_PIN: u8 = 16;

/// UART0 RX-Pin (vom USB-UART Bridge des DevKits)
pub const UART_RX_GPIO_PIN: u8 = 17;
