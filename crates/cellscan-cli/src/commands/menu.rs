//! Interactive numbered menu.

use std::io::{BufRead, Write};

use cellscan::Catalog;
use colored::Colorize;

use super::{CommandResult, mutate, queries, reports};

const OPTIONS: [&str; 9] = [
    "View unique OEMs and Models in a .txt out file",
    "View unique Feature Sensors and Platform OS in a .txt out file",
    "View the oem with the highest average phone body_weight",
    "View OEMs with different announcement and release phones years",
    "View the number of phones with only one feature sensor",
    "View the year with the most phone launches (after 1999)",
    "Delete a row by model",
    "Search and display all data related to an OEM in a .txt file",
    "Exit",
];

/// Read one line without its line ending. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(len);
    Ok(Some(line))
}

/// Print `question` and read the answer. `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    question: &str,
    input: &mut R,
    out: &mut W,
) -> std::io::Result<Option<String>> {
    writeln!(out, "{}", question)?;
    out.flush()?;
    read_line(input)
}

fn print_menu<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "Menu Options:".cyan().bold())?;
    for (i, option) in OPTIONS.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, option)?;
    }
    write!(out, "Enter your choice (1-9): ")?;
    out.flush()
}

/// Run the menu until the user picks 9 or input ends.
///
/// A failing option prints its error and returns to the menu; only errors
/// writing to `out` end the loop.
pub fn run<R: BufRead, W: Write>(catalog: &Catalog, mut input: R, out: &mut W) -> CommandResult {
    loop {
        print_menu(out)?;
        let Some(choice) = read_line(&mut input)? else {
            writeln!(out)?;
            return Ok(());
        };

        let result = match choice.trim() {
            "1" => reports::oems_and_models(catalog, out),
            "2" => reports::sensors_and_platforms(catalog, out),
            "3" => queries::weight(catalog, out),
            "4" => queries::mismatches(catalog, false, out),
            "5" => queries::sensors(catalog, out),
            "6" => queries::peak_year(catalog, out),
            "7" => match prompt("Enter the model you want to delete:", &mut input, out)? {
                Some(model) => mutate::delete(catalog, &model, out),
                None => return Ok(()),
            },
            "8" => match prompt("Enter the OEM you want to search for:", &mut input, out)? {
                Some(oem) => mutate::search(catalog, &oem, out),
                None => return Ok(()),
            },
            "9" => {
                writeln!(out, "Exiting...")?;
                return Ok(());
            }
            _ => {
                writeln!(out, "{}", "Invalid choice, please enter 1-9.".red())?;
                Ok(())
            }
        };

        if let Err(e) = result {
            writeln!(out, "{} {}", "Error:".red().bold(), e)?;
        }
    }
}
