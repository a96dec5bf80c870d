use anyhow::Result;
use clap::Parser;
use gradebook_core::{grade_all, load_csv, manual_entry, report, Prompter, ScoreStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod menu;
mod prompter;

use menu::MenuChoice;
use prompter::StdinPrompter;

/// Interactive analyzer for student grades, from manual entry or a CSV file.
#[derive(Parser)]
#[command(name = "gradebook")]
#[command(about = "Student grade analyzer", version)]
struct Args {}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gradebook_cli=warn".parse()?)
                .add_directive("gradebook_core=warn".parse()?),
        )
        .init();

    let _args = Args::parse();

    info!("GradeBook analyzer starting");

    println!("\n******************************************");
    println!("  Welcome to the GradeBook Analyzer CLI");
    println!("******************************************");

    let mut prompter = StdinPrompter::new();

    loop {
        println!("\n--- Main Menu ---");
        println!("1. Enter marks manually");
        println!("2. Load marks from CSV file");
        println!("3. Exit program");

        // End of stdin is treated like a quit choice.
        let Some(choice) = prompter.prompt_line("Enter your choice (1-3): ") else {
            break;
        };

        match MenuChoice::parse(&choice) {
            Some(MenuChoice::ManualEntry) => {
                let store = manual_entry(&mut prompter);
                analyze(&store);
            }
            Some(MenuChoice::LoadCsv) => {
                let Some(filename) =
                    prompter.prompt_line("Enter the CSV filename (e.g., grades.csv): ")
                else {
                    break;
                };
                match load_csv(filename.trim()) {
                    Ok(load) => {
                        for skipped in &load.skipped {
                            println!("{skipped}");
                        }
                        println!(
                            "\nSuccessfully loaded {} student records from {}.",
                            load.store.len(),
                            filename.trim()
                        );
                        analyze(&load.store);
                    }
                    Err(e) => println!("\nERROR: {e}"),
                }
            }
            Some(MenuChoice::Exit) => break,
            None => println!("Invalid choice. Please enter 1, 2, or 3."),
        }
    }

    println!("\nGoodbye! Happy analyzing.");
    Ok(())
}

/// Run every engine and report over one acquired store. An empty store short
/// circuits to the no-data notice.
fn analyze(store: &ScoreStore) {
    if store.is_empty() {
        println!("\nNo data was entered or loaded. Returning to menu.");
        return;
    }

    let (sheet, histogram) = grade_all(store);

    println!("\n{}", report::render_summary(store));
    println!("\n{}", report::render_histogram(&histogram));
    println!("\n{}", report::render_pass_fail(store));
    println!("\n{}", report::render_table(store, &sheet));
}
