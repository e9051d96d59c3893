// Serial Channel über esp-hal UART
//
// UartPort ist der noch nicht geöffnete Port (Peripheral + Pins),
// UartChannel der geöffnete blockierende Treiber.

use esp_core::{ChannelError, SerialChannel, SerialConfig, SerialPort};
use esp_hal::Blocking;
use esp_hal::gpio::AnyPin;
use esp_hal::peripherals::UART0;
use esp_hal::uart::{Config, Uart};

/// UART0 mit RX/TX Pins, noch nicht geöffnet
pub struct UartPort<'a> {
    uart: UART0<'a>,
    rx: AnyPin<'a>,
    tx: AnyPin<'a>,
}

impl<'a> UartPort<'a> {
    /// Erstellt einen UartPort
    ///
    /// # Parameter
    /// - `uart`: UART0 Peripheral
    /// - `rx`: GPIO für RX (Daten vom Terminal)
    /// - `tx`: GPIO für TX (Daten zum Terminal)
    pub fn new(uart: UART0<'a>, rx: impl Into<AnyPin<'a>>, tx: impl Into<AnyPin<'a>>) -> Self {
        Self {
            uart,
            rx: rx.into(),
            tx: tx.into(),
        }
    }
}

impl<'a> SerialPort for UartPort<'a> {
    type Channel = UartChannel<'a>;

    fn open(self, config: &SerialConfig) -> Result<UartChannel<'a>, ChannelError> {
        // 8N1 sind die Treiber-Defaults, nur die Baudrate wird gesetzt
        let uart_config = Config::default().with_baudrate(config.baud_rate);

        let uart = Uart::new(self.uart, uart_config)
            .map_err(|_| ChannelError::OpenFailed)?
            .with_rx(self.rx)
            .with_tx(self.tx);

        Ok(UartChannel { uart })
    }
}

/// Geöffneter UART, blockierend
pub struct UartChannel<'a> {
    uart: Uart<'a, Blocking>,
}

impl<'a> SerialChannel for UartChannel<'a> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, ChannelError> {
        // Wartet bis mindestens ein Byte da ist
        self.uart.read(buf).map_err(|_| ChannelError::ReadFailed)
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize, ChannelError> {
        self.uart.write(buf).map_err(|_| ChannelError::WriteFailed)
    }
}
