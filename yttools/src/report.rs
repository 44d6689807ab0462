//! Color-coded console messages for the operator.
//!
//! Every user-visible status line goes through here: green for success, red
//! for failure, plain `[-]` for skipped entries, yellow/blue around the
//! interactive gate. Filenames and raw error text are italicized.

use crate::extract::FileOutcome;
use crate::list::MANIFEST_NAME;
use crate::rename::LineOutcome;
use colored::Colorize;
use std::fmt::Display;

pub fn downloaded_video() {
    println!("{}", "[+] Video from playlist has been downloaded".green());
}

pub fn downloaded_audio() {
    println!("{}", "[+] Audio from playlist has been downloaded".green());
}

pub fn download_failed(error: &dyn Display) {
    println!("{}", "[✗] ERROR: Downloading error".red());
    println!("{}", error.to_string().italic());
}

pub fn created_list() {
    println!(
        "{}",
        format!("[+] Created the files list '{MANIFEST_NAME}'").green()
    );
}

pub fn rename_line(outcome: &LineOutcome) {
    match outcome {
        LineOutcome::Renamed { old, new } => println!(
            "{} File {} renamed to {}",
            "[✓]".green(),
            old.italic().green(),
            new.italic().green(),
        ),
        LineOutcome::Failed { error, .. } => {
            println!(
                "{}",
                "[✗] ERROR: Either the name of a non-existent file is specified, or the new name is empty"
                    .red()
            );
            println!("{}", error.to_string().italic());
        }
        LineOutcome::Ignored { line } => println!("[-] Ignored the '{}'", line.italic()),
    }
}

pub fn extract_outcome(outcome: &FileOutcome) {
    match outcome {
        FileOutcome::Converted { file } => println!(
            "{} File {} converted successfully",
            "[✓]".green(),
            file.italic().green(),
        ),
        FileOutcome::Failed { file, detail } => {
            println!(
                "{} File {} could not be converted",
                "[✗] ERROR:".red(),
                file.italic().red(),
            );
            if !detail.is_empty() {
                println!("{}", detail.italic());
            }
        }
        FileOutcome::Ignored { file } => println!("[-] Ignored the '{}'", file.italic()),
    }
}

pub fn gate_prompt() {
    println!(
        "{}",
        "[↵] Press Enter to continue or Esc to exit...".yellow()
    );
}

pub fn gate_proceed() {
    println!("{}", "[►] Continuing...".green());
}

pub fn gate_abort() {
    println!("{}", "[■] Exiting...".blue());
}
