//! Logging utilities.
//!
//! Library code only uses the `log` facade; binaries call [`init_logging`]
//! once to install `env_logger`.

mod init;

pub use env_logger::WriteStyle;
pub use init::{init_logging, LoggingConfig};
