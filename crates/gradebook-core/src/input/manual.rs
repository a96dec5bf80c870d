use crate::score::{ScoreStore, MAX_SCORE};

/// Trait for interactive user prompts during manual score entry.
///
/// The binary implements this over stdin; tests drive entry with a scripted
/// implementation instead.
pub trait Prompter {
    /// Prompt and read one line. `None` means input is exhausted.
    fn prompt_line(&mut self, prompt: &str) -> Option<String>;

    /// Display a message to the user.
    fn display_message(&self, message: &str);
}

/// Collect scores interactively until the user types `done` (any case) at the
/// name prompt. A blank name re-prompts. Score entry re-prompts until the
/// input parses as an integer in 0..=100. Entering an existing name again
/// overwrites the previous score without a warning.
///
/// The returned store may be empty; the caller decides what that means.
pub fn manual_entry<P: Prompter>(prompter: &mut P) -> ScoreStore {
    prompter.display_message("\n--- Manual Data Entry ---");
    let mut store = ScoreStore::new();

    'entry: loop {
        let Some(line) = prompter.prompt_line("Enter student name (or type 'done' to finish): ")
        else {
            break;
        };
        let name = line.trim();
        if name.eq_ignore_ascii_case("done") {
            break;
        }
        if name.is_empty() {
            continue;
        }

        let score = loop {
            let Some(raw) = prompter.prompt_line(&format!("Enter mark for {name} (0-100): "))
            else {
                break 'entry;
            };
            match raw.trim().parse::<i64>() {
                Ok(value) if (0..=i64::from(MAX_SCORE)).contains(&value) => break value as u32,
                Ok(_) => prompter.display_message("Mark must be between 0 and 100."),
                Err(_) => prompter
                    .display_message("Invalid input. Please enter a whole number for the mark."),
            }
        };

        store.insert(name, score);
    }

    store
}
