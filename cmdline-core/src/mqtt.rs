//! Connection options shared by the MQTT samples.

use crate::{CommandLineOption, CommandLineUtils};

pub const CMD_ENDPOINT: &str = "endpoint";
pub const CMD_KEY_FILE: &str = "key";
pub const CMD_CERT_FILE: &str = "cert";
pub const CMD_CA_FILE: &str = "ca_file";

/// The endpoint, key, cert, and ca_file declarations
pub fn common_mqtt_commands() -> [CommandLineOption; 4] {
    [
        CommandLineOption::new(
            CMD_ENDPOINT,
            "<str>",
            "The endpoint of the mqtt server not including a port.",
        ),
        CommandLineOption::new(CMD_KEY_FILE, "<path>", "Path to your key in PEM format."),
        CommandLineOption::new(
            CMD_CERT_FILE,
            "<path>",
            "Path to your client certificate in PEM format.",
        ),
        CommandLineOption::new(
            CMD_CA_FILE,
            "<path>",
            "Path to AmazonRootCA1.pem (optional, system trust store used by default).",
        ),
    ]
}

impl CommandLineUtils<'_> {
    /// Register the endpoint, key, cert, and ca_file commands.
    ///
    /// Calling this again overwrites the same entries.
    pub fn add_common_mqtt_commands(&mut self) {
        for option in common_mqtt_commands() {
            self.register(option);
        }
    }
}
