use serde::{Deserialize, Serialize};

/// A named command line option that can be passed to the program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandLineOption {
    /// Name of the command, matched against `--name` tokens
    pub command_name: String,

    /// Placeholder shown in help for the expected value (e.g. `<endpoint>`)
    #[serde(default)]
    pub example_input: String,

    /// Description shown with the command when printing help
    #[serde(default)]
    pub help_output: String,
}

impl CommandLineOption {
    pub fn new(
        command_name: impl Into<String>,
        example_input: impl Into<String>,
        help_output: impl Into<String>,
    ) -> Self {
        Self {
            command_name: command_name.into(),
            example_input: example_input.into(),
            help_output: help_output.into(),
        }
    }

    /// The flag token this option is passed as, e.g. `--endpoint`
    pub fn flag(&self) -> String {
        crate::args::flag_token(&self.command_name)
    }
}
