//! Connection options for the sample.
//!
//! This module declares the commands the sample accepts and resolves them
//! from the argument snapshot into typed settings.

use std::path::PathBuf;

use anyhow::{Context, Result};
use cmdline_core::{
    lookup, CmdlineError, CommandLineUtils, FlagLookup, CMD_CA_FILE, CMD_CERT_FILE, CMD_ENDPOINT,
    CMD_KEY_FILE,
};

pub const PROGRAM_NAME: &str = "basic-connect";
pub const CMD_CLIENT_ID: &str = "client_id";
pub const CMD_PORT: &str = "port";
pub const CMD_HELP: &str = "help";
pub const CMD_JSON_HELP: &str = "json-help";
pub const CMD_DEBUG: &str = "debug";

pub const DEFAULT_PORT: &str = "8883";

/// Settings resolved from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectOptions {
    pub endpoint: String,
    pub port: u16,
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
    pub ca_path: Option<PathBuf>,
    pub client_id: String,
}

/// Declare every command the sample understands
pub fn register_commands(cmd_utils: &mut CommandLineUtils) {
    cmd_utils.register_program_name(PROGRAM_NAME);
    cmd_utils.add_common_mqtt_commands();
    cmd_utils.register_command(
        CMD_PORT,
        "<int>",
        "Port to connect to (optional, default='8883').",
    );
    cmd_utils.register_command(
        CMD_CLIENT_ID,
        "<str>",
        "Client id to use (optional, default='test-*').",
    );
    cmd_utils.register_command(CMD_DEBUG, "<bool>", "Log at debug level (optional).");
    cmd_utils.register_command(
        CMD_JSON_HELP,
        "<bool>",
        "Print the commands as JSON and exit.",
    );
    cmd_utils.register_command(CMD_HELP, "", "Prints this message");
}

/// Build the command line for `arguments`.
///
/// `before_snapshot` sees the raw arguments before anything is captured or
/// registered, so logging installed there records both steps.
pub fn build_command_line<'a>(
    arguments: &'a [String],
    before_snapshot: impl FnOnce(&[String]),
) -> CommandLineUtils<'a> {
    before_snapshot(arguments);
    let mut cmd_utils = CommandLineUtils::new();
    cmd_utils.send_arguments(arguments);
    register_commands(&mut cmd_utils);
    cmd_utils
}

/// The `--debug` and `--json-help` style switches take an optional value.
///
/// A bare trailing switch counts as on, and so does any value other than
/// `false`, `0`, or `off`.
pub fn switch_enabled(arguments: &[String], name: &str) -> bool {
    match lookup(arguments, name) {
        FlagLookup::NotPassed => false,
        FlagLookup::NoValue => true,
        FlagLookup::Value(value) => !matches!(value.to_lowercase().as_str(), "false" | "0" | "off"),
    }
}

impl ConnectOptions {
    /// Resolve the connect settings, failing on the first missing required command
    pub fn from_command_line(cmd_utils: &CommandLineUtils) -> Result<Self> {
        let endpoint = cmd_utils.get_command_required(CMD_ENDPOINT, "")?;
        let cert_path = cmd_utils.get_command_required(CMD_CERT_FILE, "")?;
        let key_path = cmd_utils.get_command_required(CMD_KEY_FILE, "")?;

        let ca_path = cmd_utils
            .has_command(CMD_CA_FILE)
            .then(|| cmd_utils.get_command(CMD_CA_FILE))
            .transpose()?
            .map(PathBuf::from);

        let port = cmd_utils.get_command_or_default(CMD_PORT, DEFAULT_PORT);
        let port = port
            .parse::<u16>()
            .with_context(|| format!("Invalid port: {}", port))?;

        let client_id = match cmd_utils.get_command(CMD_CLIENT_ID) {
            Ok(client_id) => client_id.to_string(),
            Err(CmdlineError::CommandNotFound(_)) => format!("test-{}", uuid::Uuid::new_v4()),
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            endpoint: endpoint.to_string(),
            port,
            cert_path: PathBuf::from(cert_path),
            key_path: PathBuf::from(key_path),
            ca_path,
            client_id,
        })
    }
}
