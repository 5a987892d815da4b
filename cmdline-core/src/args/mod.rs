//! Raw argument scanning.
//!
//! This module provides the lookups used by the registry to find `--name value`
//! pairs in the argument snapshot. The scan never consults the registry, so any
//! flag passed to the program can be detected whether or not it was declared.

mod scanner;

pub use scanner::{find_flag, flag_token, lookup, FlagLookup};
