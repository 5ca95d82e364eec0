// Program wide top-level error handling

use owo_colors::OwoColorize;
use std::fmt;

use sentence::language::InvalidContext;

/// Anything that can stop the CLI from producing its output.
#[derive(Debug)]
pub enum Failure {
    Render(InvalidContext),
    Template(tinytemplate::error::Error),
    Beyond { position: usize, length: usize },
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Render(error) => write!(f, "{}", error),
            Failure::Template(error) => write!(f, "Bad line template: {}", error),
            Failure::Beyond { position, length } => write!(
                f,
                "Position {} is beyond the end of the sentence ({} positions)",
                position, length
            ),
        }
    }
}

/// Format a failure with full details
pub fn full_details(failure: &Failure) -> String {
    match failure {
        Failure::Render(error) => {
            let position = error
                .position
                .to_string();
            let width = 3.max(position.len());

            format!(
                r#"
{}: {}

{:width$} {}
{:>width$} {} {}
{:width$} {}
                "#,
                "error".bright_red(),
                error
                    .problem
                    .bold(),
                ' ',
                '|'.bright_blue(),
                position.bright_blue(),
                '|'.bright_blue(),
                error.details,
                ' ',
                '|'.bright_blue(),
            )
            .trim_ascii()
            .to_string()
        }
        _ => concise_details(failure),
    }
}

/// Format a failure as a single line
pub fn concise_details(failure: &Failure) -> String {
    format!("{}: {}", "error".bright_red(), failure.bold())
}
