//! This crate implements the serial command engine of the ESP32 I/O kit
//! peripheral boards: line assembly, the command grammar, dispatch against a
//! [`KitBoard`](hal::KitBoard) hardware seam, and the reply format.
//!
//! It supports `no_std` environments by use of the `no_std` feature flag.
//!
//! The kit exposes four relays, three spare I/O channels, five digital
//! sensors, three on-chip analog inputs, an ADS1115 external ADC, a WS2812
//! indicator, a buzzer and a two-row OLED over newline-delimited ASCII.
//! Command summary (verbs match case-insensitively, display text keeps its
//! case):
//! * `PING`, `INFO`, `BUZ`, `READ`, `ADS`
//! * `R1`..`R4 ON|OFF`, `SIO1`..`SIO3 ON|OFF`, `LED ON|OFF`
//! * `RGB r,g,b`
//! * `OL1 text`, `OL2 text`
//!
//! The serial link should be configured like so:
//! * Default baud rate: 115200
//! * Data bits: 8
//! * Stop bits: 1
//! * Parity: None

#![cfg_attr(feature = "no_std", no_std)]

pub mod channel;
pub mod command;
pub mod dispatch;
pub mod error;
pub mod hal;
pub mod kit;
pub mod line;
pub mod state;

#[cfg(test)]
mod mock_board;
#[cfg(test)]
mod mock_serial;
