//! Line-oriented prompts on stdin.

use anyhow::{Context, Result};
use staffdesk_application::record_list::DeleteConfirmation;
use staffdesk_core::employee::EmployeeId;
use std::io::{self, BufRead, Write};

/// Prints `prompt` and reads one line, without the trailing newline.
pub fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Whether an answer to a yes/no prompt means yes. Anything else is no.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Asks on the terminal before a delete goes out.
pub struct StdinConfirmation;

impl DeleteConfirmation for StdinConfirmation {
    fn confirm_delete(&self, id: EmployeeId, name: Option<&str>) -> bool {
        let subject = match name {
            Some(name) => format!("{name} (#{id})"),
            None => format!("employee #{id}"),
        };
        match read_line(&format!("Are you sure you want to delete {subject}? [y/N] ")) {
            Ok(answer) => is_yes(&answer),
            Err(e) => {
                tracing::warn!("[Cli] Could not read confirmation: {:#}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y"));
        assert!(is_yes(" YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
    }
}
