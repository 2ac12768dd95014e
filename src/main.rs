// ============================================================================
// √2 Expansion Engine — Interactive Front-End
// Prompts for a digit count, persists the expansion, verifies the file
// ============================================================================

use sqrt2_engine::prelude::*;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;

/// File the expansion is persisted to, in the working directory
const OUTPUT_FILE: &str = "sqrt2.txt";

/// Requests above this many digits get a confirmation prompt before the
/// core is invoked; the core itself performs no magnitude gating.
const LARGE_REQUEST_THRESHOLD: i64 = 1_000_000;

fn main() -> ExitCode {
    init_tracing();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let digit_count = match prompt_digit_count(&mut lines) {
        Ok(n) => n,
        Err(message) => {
            eprintln!("Invalid input: {}", message);
            return ExitCode::FAILURE;
        }
    };

    if digit_count > LARGE_REQUEST_THRESHOLD && !confirm_large_request(&mut lines, digit_count) {
        println!("Aborted.");
        return ExitCode::SUCCESS;
    }

    let config = SolverConfig::new(digit_count);
    if let Err(message) = config.validate() {
        eprintln!("Invalid input: {}", message);
        return ExitCode::FAILURE;
    }

    println!(
        "Calculating the square root of 2 to {} decimal places...",
        digit_count
    );
    let solver = RootSolver::new(config.clone(), Arc::new(LoggingEventHandler));
    let expansion = match solver.solve() {
        Ok(expansion) => expansion,
        Err(err) => {
            eprintln!("Computation failed: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = fs::write(OUTPUT_FILE, expansion.as_str()) {
        eprintln!("Could not write '{}': {}", OUTPUT_FILE, err);
        return ExitCode::FAILURE;
    }
    println!(
        "Result written to '{}' ({} characters).",
        OUTPUT_FILE,
        expansion.as_str().len()
    );

    // Verify what actually landed on disk, not the in-memory value
    let persisted = match fs::read_to_string(OUTPUT_FILE) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("Could not read back '{}': {}", OUTPUT_FILE, err);
            return ExitCode::FAILURE;
        }
    };

    let verifier = Verifier::new(config, Arc::new(LoggingEventHandler));
    match verifier.verify(persisted.trim_end()) {
        Ok(VerificationOutcome::Verified) => {
            println!(
                "Verification passed: all {} digits match the independent reference.",
                digit_count
            );
        }
        Ok(VerificationOutcome::Mismatch {
            index,
            candidate_context,
            reference_context,
        }) => {
            // Reported, not fatal: the process still completes normally
            println!("Verification FAILED: first mismatch at index {}.", index);
            println!("  persisted: ...{}...", candidate_context);
            println!("  reference: ...{}...", reference_context);
        }
        Err(err) => {
            eprintln!("Verification could not run: {}", err);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

/// Prompt for the digit count; an empty line picks the default.
fn prompt_digit_count(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<i64, String> {
    print!("Number of decimal places [{}]: ", DEFAULT_DIGIT_COUNT);
    io::stdout().flush().ok();

    let line = match lines.next() {
        Some(Ok(line)) => line,
        Some(Err(err)) => return Err(err.to_string()),
        None => String::new(),
    };
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_DIGIT_COUNT);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| format!("'{}' is not an integer", trimmed))
}

/// Large expansions take real time and memory; ask before proceeding.
fn confirm_large_request(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    digit_count: i64,
) -> bool {
    print!(
        "{} digits may take a long time and significant memory. Continue? [y/N]: ",
        digit_count
    );
    io::stdout().flush().ok();

    match lines.next() {
        Some(Ok(line)) => matches!(line.trim(), "y" | "Y" | "yes" | "YES"),
        _ => false,
    }
}

#[cfg(feature = "logging")]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();
}

#[cfg(not(feature = "logging"))]
fn init_tracing() {}
