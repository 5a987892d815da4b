//! Command line registry for sample programs.
//!
//! This crate lets a program declare its named options, look them up in the
//! arguments it was started with, and print a help listing. Only the
//! `--name value` form is supported and every value is a string.

mod args;
mod error;
mod mqtt;
mod option;
mod registry;
mod render;

// Re-export core types
pub use args::{find_flag, flag_token, lookup, FlagLookup};
pub use error::{CmdlineError, Result};
pub use mqtt::{common_mqtt_commands, CMD_CA_FILE, CMD_CERT_FILE, CMD_ENDPOINT, CMD_KEY_FILE};
pub use option::CommandLineOption;
pub use registry::{CommandLineUtils, DEFAULT_PROGRAM_NAME};
pub use render::{HelpRenderer, HelpStyle};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
