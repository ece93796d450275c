//! Interface Segregation Principle
//! Example: fat machine interface vs one role trait per capability
//!
//! Run with: cargo run --bin demo_devices

use colored::Colorize;
use solid_design_patterns::devices::{
    Document, FlatbedScanner, InkjetPrinter, Machine, MultiFunctionMachine, MultiFunctionPrinter,
    OldFashionedPrinter, Photocopier, Printer, Scanner,
};

fn main() {
    let report = Document::new("quarterly report", "numbers go here");

    println!("{}", "=== Fat Interface (Anti-Pattern) ===".bold());
    let all_in_one = MultiFunctionPrinter::new();
    all_in_one.print(&report).unwrap();
    all_in_one.fax(&report).unwrap();
    all_in_one.scan(&report).unwrap();
    println!("MultiFunctionPrinter handled: {:?}", all_in_one.handled());

    let old_printer = OldFashionedPrinter::new();
    old_printer.print(&report).unwrap();
    println!("OldFashionedPrinter printed: {:?}", old_printer.printed());

    // fax() returns Ok but sends nothing; scan() blows up at call time.
    old_printer.fax(&report).unwrap();
    println!("fax() came back Ok, yet no fax was sent");
    match old_printer.scan(&report) {
        Ok(()) => unreachable!(),
        Err(err) => println!("scan() failed: {}", err.to_string().red()),
    }

    println!("\n{}", "=== Role Traits (Corrected) ===".bold());
    let printer = InkjetPrinter::new();
    let scanner = FlatbedScanner::new();

    // A print-only device simply has no scan method to call.
    printer.print(&report);
    scanner.scan(&report);
    println!("InkjetPrinter jobs: {:?}", printer.jobs());
    println!("FlatbedScanner scans: {:?}", scanner.scans());

    let copier = Photocopier::new();
    Printer::print(&copier, &report);
    Scanner::scan(&copier, &report);
    println!("Photocopier jobs: {:?}", copier.jobs());

    println!("\n{}", "=== Composite Delegation ===".bold());
    let machine = MultiFunctionMachine::new(&printer, &scanner);
    machine.print(&report);
    machine.scan(&report);
    println!("After delegating through MultiFunctionMachine:");
    println!("  printer jobs: {:?}", printer.jobs());
    println!("  scanner scans: {:?}", scanner.scans());
}
