//! Main application orchestrator.
//!
//! Coordinates a full run:
//! 1. Initializes logging when a log file is requested.
//! 2. Builds the state graph from the embedded table.
//! 3. Handles the listing modes (`--list-states`, `--list-chains`).
//! 4. Indexes the word list, enumerates chains and matches them.
//! 5. Writes the report to standard output.
//!
//! The word list is read before any output is produced, so a missing file
//! never leaves a partial report behind.

use super::cli::Cli;
use super::error::AppError;
use super::logger;
use super::processing;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::chain::{ChainExplorer, PRACTICAL_MAX_LENGTH};
use crate::graph::{self, NodeId, StateGraph};
use std::io::{self, Write};

/// Runs the application against the embedded US state graph, writing the
/// report to standard output.
///
/// # Errors
/// Returns `AppError` if the word list cannot be read, the embedded table is
/// inconsistent, or standard output cannot be written.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet || cli.log_file.is_none();

    if let Some(log_file) = cli.log_file.as_deref().filter(|_| !cli.quiet) {
        if let Err(e) = logger::init_global_logger(log_file) {
            // Keep going without a log; the report itself is unaffected.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                log_file.display(),
                e
            );
        } else {
            verbose_println!(
                quiet_mode,
                "Verbose logging initialized to {}",
                log_file.display()
            );
        }
    }

    let graph = graph::us_states().map_err(|e| {
        verbose_eprintln!(quiet_mode, "[ERROR] Embedded state table is invalid: {}", e);
        AppError::from(e)
    })?;
    log_asymmetric_edges(graph, quiet_mode);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let result = run_with_graph(&cli, graph, quiet_mode, &mut out);
    let flushed = out.flush();

    if let Err(e) = logger::flush_global_logger() {
        eprintln!("[WARNING] Failed to perform final flush of the log file: {}", e);
    }

    result?;
    flushed?;
    Ok(())
}

/// Runs every step after setup against `graph`, writing to `out`.
pub fn run_with_graph(
    cli: &Cli,
    graph: &StateGraph,
    quiet_mode: bool,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    if cli.list_states {
        write!(out, "{}", graph)?;
        return Ok(());
    }

    let start = resolve_start(graph, cli.start.as_deref())?;
    let length = cli.chain_length.get();
    if warn_if_impractical(length, cli.quiet, &mut io::stderr())? {
        verbose_eprintln!(
            quiet_mode,
            "[WARNING] Chain length {} exceeds the practical limit of {}.",
            length,
            PRACTICAL_MAX_LENGTH
        );
    }

    if cli.list_chains {
        ChainExplorer::print_chains_to_writer(graph, start, length, out)?;
        return Ok(());
    }

    let index = processing::load_index(&cli.word_list, cli.chain_length.word_length(), quiet_mode)?;
    flush_log(quiet_mode);

    let chains = processing::build_chains(graph, start, length, quiet_mode)?;
    flush_log(quiet_mode);

    let report = processing::match_chains(graph, &chains, &index, quiet_mode)?;
    flush_log(quiet_mode);

    processing::write_report(&report, out)?;
    Ok(())
}

/// Writes the long-chain caution to `writer` when `length` is above the
/// practical limit and the run is not quiet. Returns whether it was written.
pub fn warn_if_impractical(
    length: usize,
    quiet: bool,
    writer: &mut dyn Write,
) -> io::Result<bool> {
    if length <= PRACTICAL_MAX_LENGTH || quiet {
        return Ok(false);
    }
    writeln!(
        writer,
        "Warning: chains longer than {} states take a very long time to enumerate.",
        PRACTICAL_MAX_LENGTH
    )?;
    Ok(true)
}

/// Maps `--start` to a node, trying the full name first and then the code.
fn resolve_start(graph: &StateGraph, start: Option<&str>) -> Result<Option<NodeId>, AppError> {
    let Some(start) = start else {
        return Ok(None);
    };
    graph
        .state_by_name(start)
        .or_else(|| graph.state_by_code(start))
        .map(Some)
        .ok_or_else(|| AppError::InvalidArgument(format!("unknown start state '{}'", start)))
}

/// Traversal follows the table literally, so one-sided entries are logged.
fn log_asymmetric_edges(graph: &StateGraph, quiet_mode: bool) {
    for (from, to) in graph.asymmetric_edges() {
        let name = |id| graph.get_state(id).map_or("?", |state| state.name());
        verbose_eprintln!(
            quiet_mode,
            "[WARNING] {} lists {} as a neighbor but not the reverse.",
            name(from),
            name(to)
        );
    }
}

fn flush_log(quiet_mode: bool) {
    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!("[WARNING] Failed to flush the log file: {}", e);
        }
    }
}
