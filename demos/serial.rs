//! Runs the kit command engine on the host against a real serial port, with
//! a simulated board behind it. Open a terminal on the other end of the wire
//! (115200 8N1) and type protocol commands at it.

use std::env;

use inquire::Select;
use serialport::SerialPort;

use esp32_io_kit::channel::{AdsInput, AnalogInput, OutputChannel, Rgb, Sensor, State};
use esp32_io_kit::hal::KitBoard;
use esp32_io_kit::kit::IoKit;

// Configuration constants - adjust these for your setup
const BAUD_RATE: u32 = 115200;
// Short timeout so the poll loop never lingers on an idle port.
const SERIAL_TIMEOUT_MS: u64 = 20;
const POLL_DELAY_MS: u64 = 5;

pub struct PortWrapper(Box<dyn SerialPort>);

#[derive(Debug)]
pub struct IoError(std::io::Error);

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl embedded_io::Error for IoError {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self.0.kind() {
            std::io::ErrorKind::NotFound => embedded_io::ErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => embedded_io::ErrorKind::PermissionDenied,
            std::io::ErrorKind::ConnectionRefused => embedded_io::ErrorKind::ConnectionRefused,
            std::io::ErrorKind::ConnectionReset => embedded_io::ErrorKind::ConnectionReset,
            std::io::ErrorKind::ConnectionAborted => embedded_io::ErrorKind::ConnectionAborted,
            std::io::ErrorKind::NotConnected => embedded_io::ErrorKind::NotConnected,
            std::io::ErrorKind::AddrInUse => embedded_io::ErrorKind::AddrInUse,
            std::io::ErrorKind::AddrNotAvailable => embedded_io::ErrorKind::AddrNotAvailable,
            std::io::ErrorKind::BrokenPipe => embedded_io::ErrorKind::BrokenPipe,
            std::io::ErrorKind::AlreadyExists => embedded_io::ErrorKind::AlreadyExists,
            std::io::ErrorKind::InvalidInput => embedded_io::ErrorKind::InvalidInput,
            std::io::ErrorKind::InvalidData => embedded_io::ErrorKind::InvalidData,
            std::io::ErrorKind::TimedOut => embedded_io::ErrorKind::TimedOut,
            std::io::ErrorKind::Interrupted => embedded_io::ErrorKind::Interrupted,
            std::io::ErrorKind::Unsupported => embedded_io::ErrorKind::Unsupported,
            std::io::ErrorKind::OutOfMemory => embedded_io::ErrorKind::OutOfMemory,
            _ => embedded_io::ErrorKind::Other,
        }
    }
}

impl embedded_io::ErrorType for PortWrapper {
    type Error = IoError;
}

impl embedded_io::Read for PortWrapper {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        std::io::Read::read(&mut self.0, buf).map_err(IoError)
    }
}

impl embedded_io::Write for PortWrapper {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        std::io::Write::write(&mut self.0, buf).map_err(IoError)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        std::io::Write::flush(&mut self.0).map_err(IoError)
    }
}

/// Pretend hardware: actions print to stdout, readings are synthesized from
/// a running tick so `READ`/`ADS` show changing values.
#[derive(Default)]
struct SimBoard {
    tick: u32,
}

impl SimBoard {
    fn advance(&mut self) -> u32 {
        self.tick = self.tick.wrapping_add(1);
        self.tick
    }
}

impl KitBoard for SimBoard {
    fn set_output(&mut self, channel: OutputChannel, level: State) {
        println!("[board] output {channel:?} -> {level}");
    }

    fn read_digital_input(&mut self, channel: Sensor) -> bool {
        (self.advance() + channel.index() as u32) % 2 == 0
    }

    fn read_analog_input(&mut self, channel: AnalogInput) -> u16 {
        ((self.advance() * 37 + channel.index() as u32 * 911) % 4096) as u16
    }

    fn read_external_adc(&mut self, channel: AdsInput) -> i16 {
        ((self.advance() * 131 + channel.index() as u32 * 557) % 26000) as i16
    }

    fn set_indicator_color(&mut self, color: Rgb) {
        println!("[board] indicator -> {},{},{}", color.r, color.g, color.b);
    }

    fn render_display_lines(&mut self, line1: &str, line2: &str) {
        println!("[board] display | {line1}");
        println!("[board] display | {line2}");
    }

    fn pulse_buzzer(&mut self, length: fugit::MillisDurationU32) {
        println!("[board] buzzer for {} ms", length.ticks());
    }

    fn is_display_available(&self) -> bool {
        true
    }

    fn is_external_adc_available(&self) -> bool {
        true
    }
}

fn main() {
    // Get serial port from command line arg or interactive selection
    let port_name = env::args().nth(1).unwrap_or_else(|| {
        // List available serial ports
        let ports = serialport::available_ports().expect("Failed to enumerate serial ports");

        if ports.is_empty() {
            eprintln!("No serial ports found!");
            std::process::exit(1);
        }

        let port_names: Vec<String> = ports.iter().map(|p| p.port_name.clone()).collect();

        // Interactive selection
        Select::new("Select a serial port:", port_names)
            .prompt()
            .expect("Failed to select port")
    });

    println!("Using port: {}", port_name);

    // Open serial port
    let port = serialport::new(&port_name, BAUD_RATE)
        .timeout(std::time::Duration::from_millis(SERIAL_TIMEOUT_MS))
        .open()
        .expect("Failed to open serial port");

    let port = PortWrapper(port);

    // Bring up the engine the way firmware would: probe results first, then
    // the polling loop.
    let mut kit: IoKit<PortWrapper, SimBoard, 128> = IoKit::new(port, SimBoard::default());
    kit.announce_startup().expect("Failed to write startup banner");

    println!("Engine running; send commands from the peer end (e.g. PING, READ, R1 ON).");
    loop {
        kit.poll().expect("Serial transport failed");
        std::thread::sleep(std::time::Duration::from_millis(POLL_DELAY_MS));
    }
}
