#![warn(clippy::uninlined_format_args)]

mod bootstrap;
mod input;

use std::io::{self, BufRead, Write};

use evensplit_domain::{InputWarning, Ledger};
use evensplit_presentation::SettlementPresenter;
use input::{MenuChoice, parse_amount, parse_name};

fn main() -> io::Result<()> {
    bootstrap::init_logging();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut ledger = Ledger::new();

    loop {
        print_menu();
        let Some(line) = prompt(&mut lines, "Choose an option: ")? else {
            break;
        };
        let Some(choice) = MenuChoice::parse(&line) else {
            println!("Invalid choice. Please try again.");
            continue;
        };

        match choice {
            MenuChoice::AddPerson => {
                if !add_person(&mut lines, &mut ledger)? {
                    break;
                }
            }
            MenuChoice::Process => match ledger.process() {
                Ok(()) => println!("\n[*] Expense sharing processed successfully."),
                Err(err) => {
                    tracing::error!("processing failed: {err}");
                    println!("\n[!] {err}");
                }
            },
            MenuChoice::DisplayPayments => display(&ledger),
            MenuChoice::Quit => break,
        }
    }

    println!("\n[*] Quitting.");
    Ok(())
}

fn print_menu() {
    println!();
    println!("--- Evensplit ---");
    println!("1. Add Person");
    println!("2. Process Expense Sharing");
    println!("3. Display Payments");
    println!("4. Quit");
}

/// Runs the add-person dialog. Returns `Ok(false)` on end of input.
fn add_person(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    ledger: &mut Ledger,
) -> io::Result<bool> {
    let name = loop {
        let Some(line) = prompt(lines, "Enter person's name: ")? else {
            return Ok(false);
        };
        match parse_name(&line) {
            Some(name) => break name.to_owned(),
            None => println!("[!] Name must not be empty. Please try again."),
        }
    };

    let paid = loop {
        let Some(line) = prompt(lines, &format!("Enter amount paid by {name}: $"))? else {
            return Ok(false);
        };
        match parse_amount(&line) {
            Some(paid) => break paid,
            None => println!("[!] Invalid input. Please enter a valid number."),
        }
    };

    let (_, warning) = ledger.add_person(&name, paid);
    if let Some(InputWarning::NegativePaidClamped { supplied }) = warning {
        tracing::warn!("negative paid amount {supplied} clamped to 0 for {name}");
        println!("[!] A paid amount cannot be negative. Storing 0 instead.");
    }
    println!("\n[*] {name} added successfully.");
    Ok(true)
}

fn display(ledger: &Ledger) {
    if ledger.is_empty() {
        println!("\n[*] No persons added yet.");
        return;
    }

    let view = SettlementPresenter::render(ledger);
    println!();
    for line in &view.balance_lines {
        println!("[*] {line}");
    }
    if view.transfer_lines.is_empty() {
        println!("[*] No payments to display. Process expense sharing first.");
    } else {
        for line in &view.transfer_lines {
            println!("[*] {line}");
        }
    }
}

/// Prints `text` without a newline and reads the next line of input.
/// `Ok(None)` means end of input.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    text: &str,
) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    lines.next().transpose()
}
