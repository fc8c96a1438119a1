//! Console notification sink and input prompts.

use std::io::{self, BufRead, Write};

use crate::domain::ports::{NoticeLevel, NotificationPort};

/// Prints operator notices to the terminal.
pub struct ConsoleNotifier;

impl NotificationPort for ConsoleNotifier {
    fn send(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Info => println!("  {message}"),
            NoticeLevel::Success => println!("ok: {message}"),
            NoticeLevel::Warning => eprintln!("warning: {message}"),
            NoticeLevel::Error => eprintln!("error: {message}"),
        }
    }
}

/// Prompts for one line of input.
///
/// # Errors
/// Returns an error when stdin or stdout is unavailable.
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompts for a yes/no answer, defaulting to no.
///
/// # Errors
/// Returns an error when stdin or stdout is unavailable.
pub fn confirm(label: &str) -> io::Result<bool> {
    let answer = prompt(&format!("{label} [y/N]"))?;
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}
