//! Help rendering for registered commands.

use ansi_term::Colour::{Blue, Cyan, Yellow};
use ansi_term::Style;

use crate::CommandLineOption;

mod table;
use table::{Cell, Table};

/// How the help listing is decorated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HelpStyle {
    /// No escape codes; what gets written to files and pipes
    #[default]
    Plain,
    /// ANSI colors for terminals
    Colored,
}

impl HelpStyle {
    /// Colored when stdout is a terminal, plain otherwise
    pub fn detect() -> Self {
        if atty::is(atty::Stream::Stdout) {
            HelpStyle::Colored
        } else {
            HelpStyle::Plain
        }
    }
}

pub struct HelpRenderer {
    style: HelpStyle,
}

impl HelpRenderer {
    pub fn new(style: HelpStyle) -> Self {
        Self { style }
    }

    fn paint(&self, style: Style, text: &str) -> String {
        match self.style {
            HelpStyle::Plain => text.to_string(),
            HelpStyle::Colored => style.paint(text).to_string(),
        }
    }

    fn flag_with_example(&self, option: &CommandLineOption) -> String {
        let flag = self.paint(Yellow.normal(), &option.flag());
        if option.example_input.is_empty() {
            flag
        } else {
            format!("{} {}", flag, self.paint(Cyan.normal(), &option.example_input))
        }
    }

    /// Render the usage line followed by one line per option.
    ///
    /// Options are listed in the order the iterator yields them.
    pub fn render<'o>(
        &self,
        program_name: &str,
        options: impl IntoIterator<Item = &'o CommandLineOption>,
    ) -> String {
        let mut usage = self.paint(Blue.bold(), program_name);
        let mut table = Table::new();
        table.set_prefix("* ");

        for option in options {
            let flag = self.flag_with_example(option);
            usage.push(' ');
            usage.push_str(&flag);
            table.add_row(vec![
                Cell::new(flag),
                Cell::new(self.paint(Style::new().dimmed(), &option.help_output)),
            ]);
        }

        let mut output = format!("{}\n{}\n", self.paint(Style::new().underline(), "Usage:"), usage);
        if !table.is_empty() {
            output.push('\n');
            output.push_str(&table.render());
        }
        output
    }
}
