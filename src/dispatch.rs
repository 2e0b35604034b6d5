//! Command execution and reply formatting.

use core::fmt::Write;

use fugit::MillisDurationU32;
use heapless::String;
use strum::IntoEnumIterator;

use crate::channel::{AdsInput, AnalogInput, DisplayLine, OutputChannel, Sensor};
use crate::command::{self, Command, CommandError};
use crate::hal::KitBoard;
use crate::state::DeviceState;

/// Identity reported by `INFO`.
pub const KIT_MODEL: &str = "ESP32";
/// Firmware revision reported by `INFO`.
pub const FIRMWARE_VERSION: &str = "1.4";

/// Length of `BUZ`'s audible pulse.
const BUZZ_PULSE: MillisDurationU32 = MillisDurationU32::millis(120);

/// Upper bound on one reply line, terminator excluded. Sized so that
/// `ERR;UNKNOWN_CMD=` can echo a full default-size line.
pub const MAX_REPLY_LEN: usize = 192;

/// One formatted reply line, terminator excluded.
pub type Reply = String<MAX_REPLY_LEN>;

/// Dispatch one assembled line against the device state and board.
///
/// `Ok(None)` covers the documented silent cases: blank input, and a relay
/// or spare prefix with an unrecognized suffix. Every other line produces
/// exactly one reply. State and hardware mutations land strictly before the
/// reply is formatted, so an observer holding the reply may assume the
/// action already took effect. The only failure is reply-buffer overflow.
pub fn dispatch<B: KitBoard>(
    raw: &str,
    state: &mut DeviceState,
    board: &mut B,
) -> Result<Option<Reply>, core::fmt::Error> {
    let line = raw.trim();
    match command::parse(line) {
        None => Ok(None),
        Some(Ok(cmd)) => execute(cmd, state, board).map(Some),
        Some(Err(err)) => error_reply(err, line).map(Some),
    }
}

fn execute<B: KitBoard>(
    cmd: Command<'_>,
    state: &mut DeviceState,
    board: &mut B,
) -> Result<Reply, core::fmt::Error> {
    let mut reply = Reply::new();
    match cmd {
        Command::Ping => reply.write_str("PONG")?,
        Command::Info => write!(reply, "KIT={KIT_MODEL};FW={FIRMWARE_VERSION};")?,
        Command::Buzz => {
            board.pulse_buzzer(BUZZ_PULSE);
            reply.write_str("OK;BUZ;")?;
        }
        Command::ReadInputs => {
            reply.write_str("STATUS;ADC=")?;
            for (position, channel) in AnalogInput::iter().enumerate() {
                if position > 0 {
                    reply.write_char(',')?;
                }
                write!(reply, "{}", board.read_analog_input(channel))?;
            }
            reply.write_str(";S=")?;
            for (position, channel) in Sensor::iter().enumerate() {
                if position > 0 {
                    reply.write_char(',')?;
                }
                write!(reply, "{}", u8::from(board.read_digital_input(channel)))?;
            }
            reply.write_char(';')?;
        }
        Command::ReadExternalAdc => {
            // A missing external ADC degrades to zero readings; it is not a
            // protocol error.
            let (a0, a1) = if board.is_external_adc_available() {
                (
                    board.read_external_adc(AdsInput::A0),
                    board.read_external_adc(AdsInput::A1),
                )
            } else {
                (0, 0)
            };
            write!(reply, "ADS;A0={a0};A1={a1};")?;
        }
        Command::SetRelay { channel, level } => {
            state.set_output(OutputChannel::Relay(channel), level);
            board.set_output(OutputChannel::Relay(channel), level);
            write!(reply, "OK;{channel}={level};")?;
        }
        Command::SetSpareIo { channel, level } => {
            state.set_output(OutputChannel::SpareIo(channel), level);
            board.set_output(OutputChannel::SpareIo(channel), level);
            write!(reply, "OK;{channel}={level};")?;
        }
        Command::SetLed(level) => {
            state.set_output(OutputChannel::Led, level);
            board.set_output(OutputChannel::Led, level);
            write!(reply, "OK;LED={level};")?;
        }
        Command::SetIndicator(color) => {
            state.set_indicator(color);
            board.set_indicator_color(color);
            write!(reply, "OK;RGB={},{},{};", color.r, color.g, color.b)?;
        }
        Command::SetDisplayLine { line, text } => {
            state.set_display_line(line, text);
            render_display(state, board);
            write!(reply, "OK;{};", line.verb())?;
        }
    }
    Ok(reply)
}

/// Full redraw of both rows; skipped, not failed, without a display.
fn render_display<B: KitBoard>(state: &DeviceState, board: &mut B) {
    if board.is_display_available() {
        board.render_display_lines(
            state.display_line(DisplayLine::Line1),
            state.display_line(DisplayLine::Line2),
        );
    }
}

fn error_reply(err: CommandError, line: &str) -> Result<Reply, core::fmt::Error> {
    let mut reply = Reply::new();
    match err {
        CommandError::BadRgb => reply.write_str("ERR;BAD_RGB;")?,
        CommandError::BadDisplayText(display_line) => {
            write!(reply, "ERR;BAD_{};", display_line.verb())?;
        }
        CommandError::Unknown => {
            reply.write_str("ERR;UNKNOWN_CMD=")?;
            for ch in line.chars() {
                reply.write_char(ch.to_ascii_uppercase())?;
            }
            reply.write_char(';')?;
        }
    }
    Ok(reply)
}
