//! Linear scan over the argument snapshot.
//!
//! Only the `--name value` form is recognised. The token after a matched flag is
//! taken as its value verbatim, even when it looks like another flag.

/// Result of looking up a flag in the argument snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagLookup<'a> {
    /// The flag token does not appear in the arguments
    NotPassed,

    /// The flag is the last token, so no value follows it
    NoValue,

    /// The token immediately following the flag
    Value(&'a str),
}

impl FlagLookup<'_> {
    pub fn is_passed(&self) -> bool {
        !matches!(self, FlagLookup::NotPassed)
    }
}

/// Build the two-dash flag token for a command name
pub fn flag_token(name: &str) -> String {
    format!("--{}", name)
}

/// Position of the first token exactly equal to `--name`
pub fn find_flag(args: &[String], name: &str) -> Option<usize> {
    let token = flag_token(name);
    args.iter().position(|arg| *arg == token)
}

/// Look up the value passed with `--name`
///
/// # Arguments
/// * `args` - The argument snapshot to scan
/// * `name` - Command name without the leading dashes
pub fn lookup<'a>(args: &'a [String], name: &str) -> FlagLookup<'a> {
    match find_flag(args, name) {
        None => FlagLookup::NotPassed,
        Some(pos) => match args.get(pos + 1) {
            Some(value) => FlagLookup::Value(value.as_str()),
            None => FlagLookup::NoValue,
        },
    }
}
