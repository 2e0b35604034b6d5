//! Engine front door: owns the transport, the board and the protocol state.

use embedded_io::Error as _;
use fugit::MillisDurationU32;

use crate::channel::{DisplayLine, Rgb};
use crate::dispatch;
use crate::error::{Error, Result};
use crate::hal::KitBoard;
use crate::line::LineAssembler;
use crate::state::DeviceState;

/// Beep length announcing a failed display probe.
const PROBE_FAIL_BEEP: MillisDurationU32 = MillisDurationU32::millis(300);

/// The kit's serial command engine.
///
/// `S` is any byte transport implementing [`embedded_io::Read`] and
/// [`embedded_io::Write`]; `B` supplies the hardware actions; `L` bounds
/// the assembled line length. Drive it from a plain polling loop: call
/// [`poll`](Self::poll) whenever the transport may have bytes. The engine
/// never blocks waiting for input and processes commands strictly in the
/// order their terminators arrive.
pub struct IoKit<S, B, const L: usize = 128>
where
    S: embedded_io::Read + embedded_io::Write,
    B: KitBoard,
{
    interface: S,
    board: B,
    state: DeviceState,
    assembler: LineAssembler<L>,
}

impl<S, B, const L: usize> IoKit<S, B, L>
where
    S: embedded_io::Read + embedded_io::Write,
    B: KitBoard,
{
    /// Create a new engine over the given transport and board.
    pub fn new(interface: S, board: B) -> Self {
        Self {
            interface,
            board,
            state: DeviceState::new(),
            assembler: LineAssembler::new(),
        }
    }

    /// Report the startup probe results to the host and put the indicator
    /// and display into their boot state.
    ///
    /// The probing itself happens outside this crate during board bring-up;
    /// the engine only consults the availability flags. Call once before
    /// the first [`poll`](Self::poll).
    pub fn announce_startup(&mut self) -> Result<(), S::Error> {
        if self.board.is_display_available() {
            self.board.render_display_lines(
                self.state.display_line(DisplayLine::Line1),
                self.state.display_line(DisplayLine::Line2),
            );
            self.write_line("OLED OK")?;
        } else {
            self.write_line("ERR;OLED_FAIL;")?;
            self.board.pulse_buzzer(PROBE_FAIL_BEEP);
        }

        if self.board.is_external_adc_available() {
            self.write_line("ADS1115 OK")?;
        } else {
            self.write_line("ERR;ADS_FAIL;")?;
        }

        self.board.set_indicator_color(Rgb::OFF);
        self.write_line("ESP32 KIT READY")
    }

    /// Drain whatever bytes the transport currently holds, dispatching each
    /// completed line and writing its reply.
    ///
    /// A read error whose kind signals "nothing available yet" ends the
    /// drain; any other transport error is surfaced. Partial lines stay
    /// buffered across calls.
    pub fn poll(&mut self) -> Result<(), S::Error> {
        let mut chunk = [0u8; 16];
        loop {
            match self.interface.read(&mut chunk) {
                Ok(0) => break,
                Ok(bytes_read) => {
                    for index in 0..bytes_read {
                        if let Some(line) = self.assembler.feed(chunk[index]) {
                            self.handle_line(&line)?;
                        }
                    }
                }
                Err(e) => {
                    if matches!(
                        e.kind(),
                        embedded_io::ErrorKind::Other | embedded_io::ErrorKind::TimedOut
                    ) {
                        break;
                    }
                    return Err(Error::SerialError(e));
                }
            }
        }
        Ok(())
    }

    /// Last-applied device state, for inspection.
    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    fn handle_line(&mut self, line: &[u8]) -> Result<(), S::Error> {
        // The protocol is ASCII; a line failing UTF-8 validation carries
        // glitched bytes and is discarded whole.
        let Ok(text) = core::str::from_utf8(line) else {
            return Ok(());
        };
        let reply = dispatch::dispatch(text, &mut self.state, &mut self.board)
            .map_err(|_| Error::ReplyOverflow)?;
        if let Some(reply) = reply {
            self.write_line(reply.as_str())?;
        }
        Ok(())
    }

    /// Send one line to the host, framed as the original firmware's
    /// `println` framed it.
    fn write_line(&mut self, text: &str) -> Result<(), S::Error> {
        self.interface
            .write_all(text.as_bytes())
            .map_err(Error::SerialError)?;
        self.interface
            .write_all(b"\r\n")
            .map_err(Error::SerialError)
    }
}
