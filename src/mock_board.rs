//! Recording board double with scripted readings, for engine tests.

use fugit::MillisDurationU32;

use crate::channel::{AdsInput, AnalogInput, OutputChannel, Rgb, Sensor, State};
use crate::hal::KitBoard;

/// In-memory [`KitBoard`] that hands back scripted sensor values and logs
/// every action the dispatcher takes.
pub struct MockBoard {
    /// Scripted analog readings, in `AnalogInput` channel order.
    pub analog: [u16; 3],
    /// Scripted digital sensor levels, in `Sensor` channel order.
    pub digital: [bool; 5],
    /// Scripted external ADC readings, in `AdsInput` channel order.
    pub ads: [i16; 2],
    pub display_available: bool,
    pub external_adc_available: bool,

    outputs: Vec<(OutputChannel, State)>,
    colors: Vec<Rgb>,
    renders: Vec<(String, String)>,
    beeps: Vec<MillisDurationU32>,
    external_adc_reads: usize,
}

impl MockBoard {
    /// Healthy board: probes succeeded, all readings zero.
    pub fn new() -> Self {
        Self {
            analog: [0; 3],
            digital: [false; 5],
            ads: [0; 2],
            display_available: true,
            external_adc_available: true,
            outputs: Vec::new(),
            colors: Vec::new(),
            renders: Vec::new(),
            beeps: Vec::new(),
            external_adc_reads: 0,
        }
    }

    /// Every output level applied, in order.
    pub fn outputs(&self) -> &[(OutputChannel, State)] {
        &self.outputs
    }

    /// Every indicator color applied, in order.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Every full display redraw, as `(line1, line2)` pairs.
    pub fn renders(&self) -> Vec<(&str, &str)> {
        self.renders
            .iter()
            .map(|(line1, line2)| (line1.as_str(), line2.as_str()))
            .collect()
    }

    /// Every buzzer pulse length, in order.
    pub fn beeps(&self) -> &[MillisDurationU32] {
        &self.beeps
    }

    /// How many times the external ADC was actually sampled.
    pub fn external_adc_reads(&self) -> usize {
        self.external_adc_reads
    }
}

impl KitBoard for MockBoard {
    fn set_output(&mut self, channel: OutputChannel, level: State) {
        self.outputs.push((channel, level));
    }

    fn read_digital_input(&mut self, channel: Sensor) -> bool {
        self.digital[channel.index()]
    }

    fn read_analog_input(&mut self, channel: AnalogInput) -> u16 {
        self.analog[channel.index()]
    }

    fn read_external_adc(&mut self, channel: AdsInput) -> i16 {
        self.external_adc_reads += 1;
        self.ads[channel.index()]
    }

    fn set_indicator_color(&mut self, color: Rgb) {
        self.colors.push(color);
    }

    fn render_display_lines(&mut self, line1: &str, line2: &str) {
        self.renders.push((line1.to_string(), line2.to_string()));
    }

    fn pulse_buzzer(&mut self, length: MillisDurationU32) {
        self.beeps.push(length);
    }

    fn is_display_available(&self) -> bool {
        self.display_available
    }

    fn is_external_adc_available(&self) -> bool {
        self.external_adc_available
    }
}
