//! Terminal output utilities for styled CLI output.

use std::fmt::Display;

use anyhow::{Context as _, Result};
use console::{Term, style};
use serde_json::Value;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use userdir_business::UserRecord;

/// How user lists are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Table,
    Json,
}

/// Terminal output helper for consistent styled output.
pub struct Output {
    term: Term,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper writing to stdout.
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    /// Create a new output helper writing to stderr.
    pub fn stderr() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    /// Print a success message with a green checkmark.
    pub fn success(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&format!("{} {}", style("✓").green().bold(), message)),
        );
    }

    /// Print an error message with a red X.
    pub fn error(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&format!("{} {}", style("✗").red().bold(), message)),
        );
    }

    /// Print a plain message without any prefix.
    pub fn print(&self, message: impl Display) {
        drop(self.term.write_line(&message.to_string()));
    }

    /// Print a dim/muted message.
    pub fn dim(&self, message: impl Display) {
        drop(self.term.write_line(&style(message).dim().to_string()));
    }

    /// Print a labeled value.
    pub fn labeled(&self, label: impl Display, value: impl Display) {
        drop(
            self.term
                .write_line(&format!("{}: {}", style(label).dim(), value)),
        );
    }

    /// Print the user list in the requested format.
    pub fn users(&self, users: &[UserRecord], format: Format) -> Result<()> {
        match format {
            Format::Json => {
                let json = serde_json::to_string_pretty(users).context("Failed to encode users")?;
                self.print(json);
            }
            Format::Table if users.is_empty() => self.dim("No users found."),
            Format::Table => {
                self.print(render_table(users));
                drop(self.term.write_line(&format!(
                    "\n{}: {}",
                    style("Total").bold(),
                    style(format!("{} user(s)", users.len())).cyan()
                )));
            }
        }
        Ok(())
    }
}

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Attributes")]
    attributes: String,
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{truncated}...")
    } else {
        s.to_owned()
    }
}

/// Every attribute except `name`, as `key=value` pairs.
fn attributes(user: &UserRecord) -> String {
    user.fields
        .iter()
        .filter(|(key, _)| key.as_str() != "name")
        .map(|(key, value)| match value {
            Value::String(s) => format!("{key}={s}"),
            other => format!("{key}={other}"),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render_table(users: &[UserRecord]) -> String {
    let rows: Vec<UserRow> = users
        .iter()
        .map(|user| UserRow {
            id: user.id.map(|id| id.to_string()).unwrap_or_default(),
            name: truncate_str(user.name().unwrap_or_default(), 24),
            attributes: truncate_str(&attributes(user), 48),
        })
        .collect();

    let mut table = Table::new(&rows);
    table.with(Style::rounded());
    table.to_string()
}
