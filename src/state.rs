//! Last-applied device state, owned exclusively by the dispatcher.

use heapless::String;
use strum::EnumCount;

use crate::channel::{DisplayLine, OutputChannel, Relay, Rgb, SpareIo, State};

/// Capacity of one stored display row.
pub const DISPLAY_LINE_LEN: usize = 32;

/// Everything the kit remembers between commands: output levels, the two
/// display rows and the last indicator color.
///
/// Always reflects the last accepted command per channel. Commands that earn
/// an error reply leave it untouched, and accepted commands apply here (and
/// on the board) before their confirmation reply exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceState {
    relays: [State; Relay::COUNT],
    spare_io: [State; SpareIo::COUNT],
    led: State,
    display: [String<DISPLAY_LINE_LEN>; DisplayLine::COUNT],
    indicator: Rgb,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceState {
    /// Boot state: all outputs off, indicator dark, the stock banner on the
    /// display.
    pub fn new() -> Self {
        Self {
            relays: [State::Off; Relay::COUNT],
            spare_io: [State::Off; SpareIo::COUNT],
            led: State::Off,
            display: [bounded("ESP32 KIT"), bounded("READY")],
            indicator: Rgb::OFF,
        }
    }

    /// Last level applied to an output channel.
    pub fn output(&self, channel: OutputChannel) -> State {
        match channel {
            OutputChannel::Relay(relay) => self.relays[relay.index()],
            OutputChannel::SpareIo(spare) => self.spare_io[spare.index()],
            OutputChannel::Led => self.led,
        }
    }

    pub(crate) fn set_output(&mut self, channel: OutputChannel, level: State) {
        match channel {
            OutputChannel::Relay(relay) => self.relays[relay.index()] = level,
            OutputChannel::SpareIo(spare) => self.spare_io[spare.index()] = level,
            OutputChannel::Led => self.led = level,
        }
    }

    /// Current text of one display row.
    pub fn display_line(&self, line: DisplayLine) -> &str {
        self.display[line.index()].as_str()
    }

    /// Store a display row, truncating at the storage bound.
    pub(crate) fn set_display_line(&mut self, line: DisplayLine, text: &str) {
        self.display[line.index()] = bounded(text);
    }

    /// Last color applied to the indicator.
    pub fn indicator(&self) -> Rgb {
        self.indicator
    }

    pub(crate) fn set_indicator(&mut self, color: Rgb) {
        self.indicator = color;
    }
}

/// Copy text into a bounded row, dropping what does not fit.
fn bounded(text: &str) -> String<DISPLAY_LINE_LEN> {
    let mut row = String::new();
    for ch in text.chars() {
        if row.push(ch).is_err() {
            break;
        }
    }
    row
}
