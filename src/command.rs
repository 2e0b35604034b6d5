//! Command grammar of the serial protocol.
//!
//! One assembled line parses into at most one [`Command`]. Matching follows
//! the original firmware's check ladder: exact verbs first, then the
//! prefix-addressed channel commands, first match wins. The quirks hosts
//! already rely on are part of the grammar; see the notes on [`parse`].

use strum::IntoEnumIterator;

use crate::channel::{DisplayLine, Relay, Rgb, SpareIo, State};

/// One recognized command, borrowing free-text arguments from the line it
/// was parsed out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Ping,
    Info,
    /// Pulse the buzzer.
    Buzz,
    /// Sample all on-chip analog and digital sensor inputs.
    ReadInputs,
    /// Sample both external ADC channels.
    ReadExternalAdc,
    SetRelay { channel: Relay, level: State },
    SetSpareIo { channel: SpareIo, level: State },
    SetLed(State),
    SetIndicator(Rgb),
    /// Replace one display row. `text` keeps the original case and internal
    /// spacing; only the outer whitespace is trimmed.
    SetDisplayLine { line: DisplayLine, text: &'a str },
}

/// A line that matched the grammar far enough to earn an error reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// `RGB` verb without a valid `r,g,b` tail.
    BadRgb,
    /// `OL1`/`OL2` verb with no display text.
    BadDisplayText(DisplayLine),
    /// Verb not in the command table. The reply echoes it uppercased.
    Unknown,
}

/// Parse one trimmed line. `None` is the silent outcome: an empty line, or
/// a relay/spare prefix whose suffix is neither `ON` nor `OFF`.
///
/// Verbs match ASCII case-insensitively; arguments keep their original
/// case. Two inherited quirks are deliberate grammar: the `ON`/`OFF` match
/// is a suffix check (so `R1 TURN_ON` switches on), and the `RGB` branch
/// triggers on any verb *starting* with `RGB`.
pub fn parse(line: &str) -> Option<Result<Command<'_>, CommandError>> {
    if line.is_empty() {
        return None;
    }

    if line.eq_ignore_ascii_case("PING") {
        return Some(Ok(Command::Ping));
    }
    if line.eq_ignore_ascii_case("INFO") {
        return Some(Ok(Command::Info));
    }
    if line.eq_ignore_ascii_case("BUZ") {
        return Some(Ok(Command::Buzz));
    }
    if line.eq_ignore_ascii_case("READ") {
        return Some(Ok(Command::ReadInputs));
    }
    if line.eq_ignore_ascii_case("ADS") {
        return Some(Ok(Command::ReadExternalAdc));
    }

    for channel in Relay::iter() {
        if starts_with_ignore_case(line, channel.command_prefix()) {
            return switch_suffix(line).map(|level| Ok(Command::SetRelay { channel, level }));
        }
    }

    for channel in SpareIo::iter() {
        if starts_with_ignore_case(line, channel.command_prefix()) {
            return switch_suffix(line).map(|level| Ok(Command::SetSpareIo { channel, level }));
        }
    }

    if line.eq_ignore_ascii_case("LED ON") {
        return Some(Ok(Command::SetLed(State::On)));
    }
    if line.eq_ignore_ascii_case("LED OFF") {
        return Some(Ok(Command::SetLed(State::Off)));
    }

    if starts_with_ignore_case(line, "RGB") {
        return Some(match parse_rgb_tail(line) {
            Some(color) => Ok(Command::SetIndicator(color)),
            None => Err(CommandError::BadRgb),
        });
    }

    for display_line in DisplayLine::iter() {
        if line.eq_ignore_ascii_case(display_line.verb()) {
            return Some(Err(CommandError::BadDisplayText(display_line)));
        }
        if starts_with_ignore_case(line, display_line.command_prefix()) {
            let text = line[display_line.command_prefix().len()..].trim();
            return Some(if text.is_empty() {
                Err(CommandError::BadDisplayText(display_line))
            } else {
                Ok(Command::SetDisplayLine { line: display_line, text })
            });
        }
    }

    Some(Err(CommandError::Unknown))
}

/// Suffix match, not a token match: anything ending in `ON` switches on.
fn switch_suffix(line: &str) -> Option<State> {
    if ends_with_ignore_case(line, "ON") {
        Some(State::On)
    } else if ends_with_ignore_case(line, "OFF") {
        Some(State::Off)
    } else {
        None
    }
}

/// Everything after the first space, split on the first two commas. The
/// segment before the first comma must be non-empty; later segments may be
/// anything [`parse_u8_or_zero`] accepts.
fn parse_rgb_tail(line: &str) -> Option<Rgb> {
    let space = line.find(' ')?;
    let params = line[space + 1..].trim();
    let first = params.find(',').filter(|&at| at > 0)?;
    let second = params[first + 1..].find(',').map(|at| first + 1 + at)?;
    let r = parse_u8_or_zero(&params[..first]);
    let g = parse_u8_or_zero(&params[first + 1..second]);
    let b = parse_u8_or_zero(&params[second + 1..]);
    Some(Rgb::new(r, g, b))
}

/// Numeric fallback shared by the `RGB` arguments: optional sign, leading
/// decimal digits, trailing junk ignored. No digits parses as 0 and the
/// value truncates to `u8` two's-complement, so `300` reads as `44` and
/// `-5` as `251`.
pub(crate) fn parse_u8_or_zero(text: &str) -> u8 {
    let bytes = text.trim().as_bytes();
    let (negative, digits) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for &byte in digits {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'));
    }

    if !seen_digit {
        return 0;
    }
    if negative {
        value = -value;
    }
    value as u8
}

fn starts_with_ignore_case(line: &str, prefix: &str) -> bool {
    line.len() >= prefix.len()
        && line.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

fn ends_with_ignore_case(line: &str, suffix: &str) -> bool {
    line.len() >= suffix.len()
        && line.as_bytes()[line.len() - suffix.len()..].eq_ignore_ascii_case(suffix.as_bytes())
}
