//! Board pin naming
//!
//! Symbolic names for the package pins of the Giant Gecko parts this library
//! targets. Pin names carry their port and pin number; whether a pin can do
//! anything useful is up to the peripheral consuming it (only a small subset
//! routes to the low-energy timer outputs, see `devices::toggle`).

use crate::platform::Port;

macro_rules! pin_names {
    ($(($name:ident, $port:ident, $num:expr)),* $(,)?) => {
        /// Symbolic pin name (port + pin number)
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[cfg_attr(feature = "efm32gg", derive(defmt::Format))]
        pub enum PinName {
            $($name,)*
        }

        impl PinName {
            /// GPIO port this pin belongs to
            pub fn port(self) -> Port {
                match self {
                    $(PinName::$name => Port::$port,)*
                }
            }

            /// Pin number within the port
            pub fn number(self) -> u8 {
                match self {
                    $(PinName::$name => $num,)*
                }
            }
        }
    };
}

pin_names! {
    (PA0, A, 0), (PA1, A, 1), (PA2, A, 2), (PA3, A, 3), (PA4, A, 4),
    (PA5, A, 5), (PA6, A, 6),

    (PB0, B, 0), (PB1, B, 1), (PB2, B, 2), (PB3, B, 3), (PB4, B, 4),
    (PB5, B, 5), (PB6, B, 6), (PB7, B, 7), (PB8, B, 8), (PB9, B, 9),
    (PB10, B, 10), (PB11, B, 11), (PB12, B, 12), (PB13, B, 13), (PB14, B, 14),

    (PC0, C, 0), (PC1, C, 1), (PC2, C, 2), (PC3, C, 3), (PC4, C, 4),
    (PC5, C, 5), (PC6, C, 6), (PC7, C, 7), (PC8, C, 8), (PC9, C, 9),
    (PC10, C, 10), (PC11, C, 11),

    (PD0, D, 0), (PD1, D, 1), (PD2, D, 2), (PD3, D, 3), (PD4, D, 4),
    (PD5, D, 5), (PD6, D, 6), (PD7, D, 7), (PD8, D, 8),

    (PE0, E, 0), (PE1, E, 1), (PE2, E, 2), (PE3, E, 3), (PE4, E, 4),
    (PE5, E, 5), (PE6, E, 6), (PE7, E, 7), (PE8, E, 8), (PE9, E, 9),
    (PE10, E, 10), (PE11, E, 11), (PE12, E, 12), (PE13, E, 13), (PE14, E, 14),
    (PE15, E, 15),

    (PF0, F, 0), (PF1, F, 1), (PF2, F, 2), (PF3, F, 3), (PF4, F, 4),
    (PF5, F, 5), (PF6, F, 6), (PF7, F, 7), (PF8, F, 8), (PF9, F, 9),
    (PF10, F, 10), (PF11, F, 11), (PF12, F, 12),
}
