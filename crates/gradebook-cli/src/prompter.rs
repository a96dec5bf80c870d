//! Stdin-backed prompter.

use std::io::{self, BufRead, Write};

use gradebook_core::Prompter;

/// Reads prompts from stdin, one line at a time. Returns `None` once stdin
/// reaches end of input so callers can wind down instead of spinning.
pub struct StdinPrompter;

impl StdinPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for StdinPrompter {
    fn prompt_line(&mut self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }

    fn display_message(&self, message: &str) {
        println!("{message}");
    }
}
