//! Single Responsibility Principle
//! Example: a journal that numbers entries, with persistence kept outside it
//!
//! Run with: cargo run --bin demo_journal

use std::error::Error;
use std::fs;

use colored::Colorize;
use solid_design_patterns::journal::Journal;
use solid_design_patterns::persistence;

fn main() -> Result<(), Box<dyn Error>> {
    println!("{}", "=== Journal Demo ===".bold());

    let mut journal = Journal::new();
    journal.add_entry("I cried today.");
    journal.add_entry("I ate a bug.");
    println!("Journal entries:\n{}\n", journal);

    println!("{}", "=== Removal Keeps Numbering ===".bold());
    let removed = journal.remove_entry(0)?;
    println!("Removed: {}", removed);
    println!("Remaining:\n{}\n", journal);
    journal.add_entry("Feeling better.");
    println!("After another entry:\n{}\n", journal);

    // The journal knows nothing about files; persistence is its own unit.
    println!("{}", "=== Persistence Lives Elsewhere ===".bold());
    let path = std::env::temp_dir().join("journal.txt");
    persistence::save_to_file(&journal, &path)?;
    println!("Saved to {}", path.display());

    let read_back = fs::read_to_string(&path)?;
    println!("Read back:\n{}\n", read_back);

    let mut loaded = persistence::load_from_file(&path)?;
    loaded.add_entry("Loaded and still counting.");
    println!("Loaded journal continues the sequence:\n{}", loaded);

    fs::remove_file(&path)?;
    Ok(())
}
