//! # Serial Diagnostics
//!
//! Diagnostic output over a 16550 UART (COM1 at `0x3F8` on PC hardware).
//!
//! Nothing is written until [`init`] hands the driver a port. Until then, and
//! on targets without port I/O, output is dropped. Leveled reports made with
//! `log_debug!`, `log_warn!` and `log_error!` are also counted, so a host
//! without a UART can still observe that a report was raised.
//!
//! ```ignore
//! unsafe { mode13h::serial::init(mode13h::serial::COM1) };
//! mode13h::serial_println!("mode 13h ready");
//! ```

use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};

/// I/O base of the first PC serial port
pub const COM1: u16 = 0x3F8;

static DIAGNOSTICS_EMITTED: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO ",
            LogLevel::Warn => "WARN ",
            LogLevel::Error => "ERROR",
        }
    }
}

#[cfg(target_arch = "x86_64")]
mod port {
    use core::fmt::{self, Write};
    use spin::Mutex;
    use uart_16550::SerialPort;

    pub static SERIAL: Mutex<Option<SerialPort>> = Mutex::new(None);

    pub unsafe fn init(base: u16) {
        let mut port = unsafe { SerialPort::new(base) };
        port.init();
        *SERIAL.lock() = Some(port);
    }

    pub fn write(args: fmt::Arguments) {
        if let Some(serial) = SERIAL.lock().as_mut() {
            let _ = serial.write_fmt(args);
        }
    }

    pub fn is_attached() -> bool {
        SERIAL.lock().is_some()
    }
}

#[cfg(not(target_arch = "x86_64"))]
mod port {
    use core::fmt;

    pub fn write(_args: fmt::Arguments) {}

    pub fn is_attached() -> bool {
        false
    }
}

/// Attach the UART at `base` and start emitting diagnostics.
///
/// # Safety
///
/// Performs port I/O: the caller must run with I/O privilege and `base` must
/// be a 16550-compatible UART.
#[cfg(target_arch = "x86_64")]
pub unsafe fn init(base: u16) {
    unsafe { port::init(base) }
}

/// Whether a UART has been attached with [`init`]
pub fn is_attached() -> bool {
    port::is_attached()
}

/// Number of leveled diagnostics raised since startup
pub fn diagnostics_emitted() -> usize {
    DIAGNOSTICS_EMITTED.load(Ordering::Relaxed)
}

#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    port::write(args);
}

#[doc(hidden)]
pub fn _log(level: LogLevel, args: fmt::Arguments) {
    DIAGNOSTICS_EMITTED.fetch_add(1, Ordering::Relaxed);
    port::write(format_args!("[mode13h][{}] {}\n", level.as_str(), args));
}

/// Print to the serial port
#[macro_export]
macro_rules! serial_print {
    ($($arg:tt)*) => {
        $crate::serial::_print(core::format_args!($($arg)*))
    };
}

/// Print to the serial port with a newline
#[macro_export]
macro_rules! serial_println {
    () => ($crate::serial_print!("\n"));
    ($fmt:expr) => ($crate::serial_print!(concat!($fmt, "\n")));
    ($fmt:expr, $($arg:tt)*) => ($crate::serial_print!(
        concat!($fmt, "\n"), $($arg)*
    ));
}

#[macro_export]
macro_rules! log_level {
    ($level:expr, $($arg:tt)*) => {
        $crate::serial::_log($level, core::format_args!($($arg)*))
    };
}

/// Debug report, compiled out of release builds
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::log_level!($crate::serial::LogLevel::Debug, $($arg)*)
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::log_level!($crate::serial::LogLevel::Info, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::log_level!($crate::serial::LogLevel::Warn, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::log_level!($crate::serial::LogLevel::Error, $($arg)*)
    };
}
