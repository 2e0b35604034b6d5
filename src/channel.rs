//! Addressable channels and output levels of the I/O kit boards.

use strum_macros::{Display, EnumCount, EnumIter};

/// The four relay output channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumCount, EnumIter)]
pub enum Relay {
    R1,
    R2,
    R3,
    R4,
}

impl Relay {
    /// Command prefix addressing this relay, trailing space included.
    pub(crate) const fn command_prefix(self) -> &'static str {
        match self {
            Relay::R1 => "R1 ",
            Relay::R2 => "R2 ",
            Relay::R3 => "R3 ",
            Relay::R4 => "R4 ",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// The three spare I/O output channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumCount, EnumIter)]
pub enum SpareIo {
    #[strum(serialize = "SIO1")]
    Sio1,
    #[strum(serialize = "SIO2")]
    Sio2,
    #[strum(serialize = "SIO3")]
    Sio3,
}

impl SpareIo {
    /// Command prefix addressing this channel, trailing space included.
    pub(crate) const fn command_prefix(self) -> &'static str {
        match self {
            SpareIo::Sio1 => "SIO1 ",
            SpareIo::Sio2 => "SIO2 ",
            SpareIo::Sio3 => "SIO3 ",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Digital sensor inputs, in the channel order `READ` reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCount, EnumIter)]
pub enum Sensor {
    S1,
    S2,
    S3,
    S4,
    S5,
}

impl Sensor {
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// On-chip analog inputs, in the channel order `READ` reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCount, EnumIter)]
pub enum AnalogInput {
    Adc1,
    Adc2,
    Adc3,
}

impl AnalogInput {
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Input channels of the external ADC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCount, EnumIter)]
pub enum AdsInput {
    A0,
    A1,
}

impl AdsInput {
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Any single output the dispatcher drives through
/// [`KitBoard::set_output`](crate::hal::KitBoard::set_output).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputChannel {
    Relay(Relay),
    SpareIo(SpareIo),
    /// The on-board test LED (`LED ON` / `LED OFF`).
    Led,
}

impl From<Relay> for OutputChannel {
    fn from(value: Relay) -> Self {
        OutputChannel::Relay(value)
    }
}

impl From<SpareIo> for OutputChannel {
    fn from(value: SpareIo) -> Self {
        OutputChannel::SpareIo(value)
    }
}

/// The two text rows of the kit display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCount, EnumIter)]
pub enum DisplayLine {
    Line1,
    Line2,
}

impl DisplayLine {
    /// Command verb addressing this row.
    pub(crate) const fn verb(self) -> &'static str {
        match self {
            DisplayLine::Line1 => "OL1",
            DisplayLine::Line2 => "OL2",
        }
    }

    /// The verb with its trailing argument separator.
    pub(crate) const fn command_prefix(self) -> &'static str {
        match self {
            DisplayLine::Line1 => "OL1 ",
            DisplayLine::Line2 => "OL2 ",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Used to be less ambiguous about whether an output is on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum State {
    /// Output driven low.
    #[default]
    #[strum(serialize = "OFF")]
    Off,
    /// Output driven high.
    #[strum(serialize = "ON")]
    On,
}

impl From<State> for bool {
    fn from(value: State) -> Self {
        match value {
            State::Off => false,
            State::On => true,
        }
    }
}

impl From<bool> for State {
    fn from(value: bool) -> Self {
        match value {
            true => State::On,
            false => State::Off,
        }
    }
}

/// One color triple for the addressable indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Indicator dark, the boot state.
    pub const OFF: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
