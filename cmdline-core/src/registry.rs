//! Registry of declared commands and lookups against the argument snapshot.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::args::{self, FlagLookup};
use crate::render::{HelpRenderer, HelpStyle};
use crate::{CmdlineError, CommandLineOption, Result};

/// Program name shown in help until one is registered
pub const DEFAULT_PROGRAM_NAME: &str = "Application";

/// Registers, finds, and parses commands passed to the program.
///
/// The registry only describes commands for help output. Lookups scan the
/// argument snapshot directly, so `has_command` reports any `--name` flag that
/// was passed, declared or not. Use [`CommandLineUtils::is_registered`] to ask
/// the registry instead.
///
/// The snapshot is borrowed from the caller for `'a`. Populate the registry and
/// run lookups from a single owner; mutation needs `&mut self`.
#[derive(Debug, Clone)]
pub struct CommandLineUtils<'a> {
    program_name: String,
    arguments: &'a [String],
    registered_commands: BTreeMap<String, CommandLineOption>,
}

#[derive(Serialize)]
struct HelpData<'r> {
    program_name: &'r str,
    commands: Vec<&'r CommandLineOption>,
}

impl Default for CommandLineUtils<'_> {
    fn default() -> Self {
        Self {
            program_name: DEFAULT_PROGRAM_NAME.to_string(),
            arguments: &[],
            registered_commands: BTreeMap::new(),
        }
    }
}

impl<'a> CommandLineUtils<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the program name shown by `print_help`
    pub fn register_program_name(&mut self, name: impl Into<String>) {
        self.program_name = name.into();
    }

    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    /// Add a command, replacing any command already registered under its name
    pub fn register(&mut self, option: CommandLineOption) {
        debug!(command = %option.command_name, "registering command");
        self.registered_commands
            .insert(option.command_name.clone(), option);
    }

    /// Add a command from its parts. Same effect as [`CommandLineUtils::register`].
    pub fn register_command(
        &mut self,
        name: impl Into<String>,
        example_input: impl Into<String>,
        help_output: impl Into<String>,
    ) {
        self.register(CommandLineOption::new(name, example_input, help_output));
    }

    /// Remove a command if it has been registered
    pub fn remove_command(&mut self, name: &str) {
        if self.registered_commands.remove(name).is_some() {
            debug!(command = %name, "removed command");
        }
    }

    /// Replace the help text of a registered command. Unknown names are ignored.
    pub fn update_command_help(&mut self, name: &str, help_output: impl Into<String>) {
        if let Some(option) = self.registered_commands.get_mut(name) {
            option.help_output = help_output.into();
        }
    }

    pub fn get_option(&self, name: &str) -> Option<&CommandLineOption> {
        self.registered_commands.get(name)
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.registered_commands.contains_key(name)
    }

    /// Registered commands in help order (sorted by name)
    pub fn commands(&self) -> impl Iterator<Item = &CommandLineOption> {
        self.registered_commands.values()
    }

    pub fn len(&self) -> usize {
        self.registered_commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered_commands.is_empty()
    }

    /// Capture the arguments passed to the program, replacing any earlier snapshot.
    ///
    /// Lookups made before this is called see zero arguments.
    pub fn send_arguments(&mut self, arguments: &'a [String]) {
        debug!(count = arguments.len(), "captured argument snapshot");
        self.arguments = arguments;
    }

    /// The captured argument snapshot; empty until `send_arguments` is called
    pub fn arguments(&self) -> &'a [String] {
        self.arguments
    }

    /// True if `--name` was passed to the program
    pub fn has_command(&self, name: &str) -> bool {
        args::lookup(self.arguments, name).is_passed()
    }

    /// Value passed after `--name`
    ///
    /// # Errors
    /// * `CommandNotFound` - the flag was not passed
    /// * `MissingValue` - the flag was the last argument
    pub fn get_command(&self, name: &str) -> Result<&'a str> {
        match args::lookup(self.arguments, name) {
            FlagLookup::Value(value) => Ok(value),
            FlagLookup::NoValue => Err(CmdlineError::MissingValue(name.to_string())),
            FlagLookup::NotPassed => Err(CmdlineError::CommandNotFound(name.to_string())),
        }
    }

    /// Value passed after `--name`, or `default` when there is none
    pub fn get_command_or_default<'b>(&self, name: &str, default: &'b str) -> &'b str
    where
        'a: 'b,
    {
        match args::lookup(self.arguments, name) {
            FlagLookup::Value(value) => value,
            FlagLookup::NoValue => {
                warn!(command = %name, "flag passed without a value, using default");
                default
            }
            FlagLookup::NotPassed => default,
        }
    }

    /// Value passed after `--name`. A missing command is fatal.
    ///
    /// `extra_message` is appended to the error when non-empty.
    ///
    /// # Errors
    /// * `MissingRequired` - the flag was not passed; callers should print the
    ///   error and exit
    /// * `MissingValue` - the flag was the last argument
    pub fn get_command_required(&self, name: &str, extra_message: &str) -> Result<&'a str> {
        match self.get_command(name) {
            Err(CmdlineError::CommandNotFound(_)) => Err(CmdlineError::MissingRequired {
                name: name.to_string(),
                program: self.program_name.clone(),
                extra: (!extra_message.is_empty()).then(|| extra_message.to_string()),
            }),
            other => other,
        }
    }

    /// Help listing for all registered commands
    pub fn render_help(&self, style: HelpStyle) -> String {
        HelpRenderer::new(style).render(&self.program_name, self.commands())
    }

    /// Write the plain help listing to `writer`
    pub fn write_help<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.render_help(HelpStyle::Plain).as_bytes())
    }

    /// Print the program name and every registered command to stdout
    pub fn print_help(&self) {
        print!("{}", self.render_help(HelpStyle::detect()));
    }

    /// Machine-readable form of the registry
    pub fn to_json(&self) -> Result<Value> {
        let help = HelpData {
            program_name: &self.program_name,
            commands: self.commands().collect(),
        };
        Ok(serde_json::to_value(help)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    fn help(utils: &CommandLineUtils) -> String {
        utils.render_help(HelpStyle::Plain)
    }

    #[test]
    fn registered_command_appears_in_help() {
        let mut utils = CommandLineUtils::new();
        utils.register_command("topic", "<str>", "Topic to publish to");

        let text = help(&utils);
        assert!(text.lines().any(|line| line.contains("--topic <str>")
            && line.contains("Topic to publish to")));
        assert!(text.contains("Application --topic <str>"));
    }

    #[test]
    fn both_registration_forms_match() {
        let mut by_parts = CommandLineUtils::new();
        by_parts.register_command("count", "<int>", "Messages to send");

        let mut by_value = CommandLineUtils::new();
        by_value.register(CommandLineOption::new("count", "<int>", "Messages to send"));

        assert_eq!(help(&by_parts), help(&by_value));
    }

    #[test]
    fn reregistering_overwrites_without_duplicating() {
        let mut utils = CommandLineUtils::new();
        utils.register_command("port", "<int>", "old");
        utils.register_command("port", "<number>", "new");

        assert_eq!(utils.len(), 1);
        let option = utils.get_option("port").unwrap();
        assert_eq!(option.example_input, "<number>");
        assert_eq!(option.help_output, "new");
        assert_eq!(help(&utils).matches("--port").count(), 2);
    }

    #[test]
    fn removed_command_is_not_in_help() {
        let mut utils = CommandLineUtils::new();
        utils.register_command("topic", "<str>", "Topic");
        utils.register_command("message", "<str>", "Payload");
        utils.remove_command("topic");
        utils.remove_command("never-registered");

        assert!(!help(&utils).contains("topic"));
        assert!(utils.is_registered("message"));
    }

    #[test]
    fn update_help_keeps_example() {
        let mut utils = CommandLineUtils::new();
        utils.register_command("ca_file", "<path>", "old help");
        utils.update_command_help("ca_file", "new help");
        utils.update_command_help("missing", "ignored");

        let option = utils.get_option("ca_file").unwrap();
        assert_eq!(option.example_input, "<path>");
        assert_eq!(option.help_output, "new help");
        assert!(!utils.is_registered("missing"));
    }

    #[test]
    fn help_is_sorted_by_name() {
        let mut utils = CommandLineUtils::new();
        utils.register_program_name("sample");
        utils.register_command("zeta", "", "");
        utils.register_command("alpha", "", "");
        utils.register_command("mid", "", "");

        assert!(help(&utils).starts_with("Usage:\nsample --alpha --mid --zeta\n"));
    }

    #[test]
    fn lookups_against_snapshot() {
        let argv = args(&["--endpoint", "x.com", "--port", "8883"]);
        let mut utils = CommandLineUtils::new();
        utils.send_arguments(&argv);

        assert!(utils.has_command("endpoint"));
        assert_eq!(utils.get_command("endpoint"), Ok("x.com"));
        assert!(!utils.has_command("missing"));
        assert_eq!(
            utils.get_command("missing"),
            Err(CmdlineError::CommandNotFound("missing".to_string()))
        );
        assert_eq!(utils.get_command_or_default("missing", "fallback"), "fallback");
        assert_eq!(utils.get_command_or_default("port", "1883"), "8883");
    }

    #[test]
    fn has_command_ignores_registry() {
        let argv = args(&["--unregistered", "1"]);
        let mut utils = CommandLineUtils::new();
        utils.register_command("registered", "<x>", "");
        utils.send_arguments(&argv);

        assert!(utils.has_command("unregistered"));
        assert!(!utils.has_command("registered"));
    }

    #[test]
    fn lookups_before_send_arguments_find_nothing() {
        let utils = CommandLineUtils::new();
        assert!(!utils.has_command("endpoint"));
        assert_eq!(utils.get_command_or_default("endpoint", "d"), "d");
    }

    #[test]
    fn later_snapshot_replaces_earlier() {
        let first = args(&["--endpoint", "a"]);
        let second = args(&["--port", "1"]);
        let mut utils = CommandLineUtils::new();
        utils.send_arguments(&first);
        utils.send_arguments(&second);

        assert!(!utils.has_command("endpoint"));
        assert_eq!(utils.get_command("port"), Ok("1"));
        assert_eq!(utils.arguments(), &second[..]);
    }

    #[test]
    fn trailing_flag_is_missing_value() {
        let argv = args(&["--port", "1", "--endpoint"]);
        let mut utils = CommandLineUtils::new();
        utils.send_arguments(&argv);

        assert!(utils.has_command("endpoint"));
        assert_eq!(
            utils.get_command("endpoint"),
            Err(CmdlineError::MissingValue("endpoint".to_string()))
        );
        assert_eq!(utils.get_command_or_default("endpoint", "d"), "d");
        assert_eq!(
            utils.get_command_required("endpoint", ""),
            Err(CmdlineError::MissingValue("endpoint".to_string()))
        );
    }

    #[test]
    fn required_command() {
        let argv = args(&["--endpoint", "x.com"]);
        let mut utils = CommandLineUtils::new();
        utils.register_program_name("basic-connect");
        utils.send_arguments(&argv);

        assert_eq!(utils.get_command_required("endpoint", ""), Ok("x.com"));

        let err = utils.get_command_required("missing", "").unwrap_err();
        assert!(err.is_fatal());
        assert_eq!(
            err.to_string(),
            "required: missing command missing for program basic-connect"
        );

        let err = utils.get_command_required("cert", "Pass --cert").unwrap_err();
        assert_eq!(
            err,
            CmdlineError::MissingRequired {
                name: "cert".to_string(),
                program: "basic-connect".to_string(),
                extra: Some("Pass --cert".to_string()),
            }
        );
    }

    #[test]
    fn write_help_matches_plain_render() {
        let mut utils = CommandLineUtils::new();
        utils.register_command("key", "<path>", "Key file");

        let mut buffer = Vec::new();
        utils.write_help(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), help(&utils));
    }

    #[test]
    fn json_lists_program_and_commands() {
        let mut utils = CommandLineUtils::new();
        utils.register_program_name("sample");
        utils.register_command("key", "<path>", "Key file");

        let json = utils.to_json().unwrap();
        assert_eq!(json["program_name"], "sample");
        assert_eq!(json["commands"][0]["command_name"], "key");
        assert_eq!(json["commands"][0]["example_input"], "<path>");
        assert_eq!(json["commands"][0]["help_output"], "Key file");
    }
}
