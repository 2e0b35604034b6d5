//! Hardware capability seam between the command engine and the board drivers.

use fugit::MillisDurationU32;

use crate::channel::{AdsInput, AnalogInput, OutputChannel, Rgb, Sensor, State};

/// Board operations the dispatcher drives.
///
/// On hardware an implementation wraps the GPIO, NeoPixel, SSD1306 and
/// ADS1115 drivers; in tests a recording double stands in. All operations
/// are infallible from the engine's point of view: hardware that failed its
/// startup probe reports through the two availability methods and the
/// engine degrades (zero readings, skipped renders) instead of erroring.
pub trait KitBoard {
    /// Drive a relay, spare I/O or LED output to the given level.
    fn set_output(&mut self, channel: OutputChannel, level: State);

    /// Current level of a digital sensor input.
    fn read_digital_input(&mut self, channel: Sensor) -> bool;

    /// Raw reading of an on-chip analog input. 0-4095 on the reference board.
    fn read_analog_input(&mut self, channel: AnalogInput) -> u16;

    /// Raw reading of one external ADC channel.
    fn read_external_adc(&mut self, channel: AdsInput) -> i16;

    /// Latch a color onto the addressable indicator.
    fn set_indicator_color(&mut self, color: Rgb);

    /// Redraw both display rows in full. No partial updates.
    fn render_display_lines(&mut self, line1: &str, line2: &str);

    /// Pulse the buzzer for the given length.
    fn pulse_buzzer(&mut self, length: MillisDurationU32);

    /// Whether the display probe succeeded at startup.
    fn is_display_available(&self) -> bool;

    /// Whether the external ADC probe succeeded at startup.
    fn is_external_adc_available(&self) -> bool;
}
