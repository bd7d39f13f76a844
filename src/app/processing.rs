//! The three steps of a run: indexing the word list, enumerating chains and
//! matching chains against the index, plus rendering the final report.

use super::error::AppError;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::chain::{Chain, ChainExplorer};
use crate::graph::{NodeId, StateGraph};
use crate::wordlist::{self, AnagramIndex};
use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

/// One chain whose codes are an anagram of at least one word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainMatch {
    pub codes: Vec<String>,
    pub words: Vec<String>,
}

/// Everything found in a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchReport {
    /// Matching chains, in enumeration order.
    pub matches: Vec<ChainMatch>,
    /// Every matched word once, sorted.
    pub all_words: BTreeSet<String>,
}

/// Loads the word list and indexes words of `word_length` letters.
///
/// # Errors
/// Returns `AppError::WordList` if the file cannot be read.
pub fn load_index(
    word_list_path: &Path,
    word_length: usize,
    quiet_mode: bool,
) -> Result<AnagramIndex, AppError> {
    verbose_println!(
        quiet_mode,
        "\n[STEP 1] Loading word list {}...",
        word_list_path.display()
    );
    let index = wordlist::load_index_from_file(word_list_path, word_length).map_err(|e| {
        verbose_eprintln!(quiet_mode, "   => {}", e);
        AppError::from(e)
    })?;
    verbose_println!(
        quiet_mode,
        "   => Indexed {} word(s) of {} letters in {} anagram class(es).",
        index.len(),
        index.word_length(),
        index.key_count()
    );
    if index.is_empty() {
        verbose_eprintln!(
            quiet_mode,
            "   => No usable {}-letter words in the word list.",
            word_length
        );
    }
    Ok(index)
}

/// Enumerates every chain of `length` states, or only those beginning at
/// `start` when one is given.
pub fn build_chains(
    graph: &StateGraph,
    start: Option<NodeId>,
    length: usize,
    quiet_mode: bool,
) -> Result<Vec<Chain>, AppError> {
    verbose_println!(
        quiet_mode,
        "[STEP 2] Enumerating chains of {} state(s)...",
        length
    );
    verbose_println!(quiet_mode, "   => Graph has {} states.", graph.len());
    let chains = match start {
        Some(start) => ChainExplorer::enumerate_from(graph, start, length)?,
        None => ChainExplorer::enumerate_paths(graph, length)?,
    };
    verbose_println!(quiet_mode, "   => Found {} chains.", chains.len());
    Ok(chains)
}

/// Looks up every chain's codes in the index and collects the matches.
///
/// Several chains can share an anagram key; each reports its own match, but
/// `all_words` holds each word once.
pub fn match_chains(
    graph: &StateGraph,
    chains: &[Chain],
    index: &AnagramIndex,
    quiet_mode: bool,
) -> Result<MatchReport, AppError> {
    verbose_println!(quiet_mode, "[STEP 3] Matching chains against word list...");
    let mut report = MatchReport::default();

    for chain in chains {
        let codes = chain.codes(graph)?;
        let words = index.lookup(&codes.concat());
        if words.is_empty() {
            continue;
        }
        report.all_words.extend(words.iter().cloned());
        report.matches.push(ChainMatch {
            codes: codes.into_iter().map(str::to_string).collect(),
            words: words.to_vec(),
        });
    }

    verbose_println!(
        quiet_mode,
        "   => {} chain(s) matched {} distinct word(s).",
        report.matches.len(),
        report.all_words.len()
    );
    Ok(report)
}

/// Writes the report: one `CODES : WORDS` line per matching chain, then the
/// list of all words or a note that none were found.
pub fn write_report(report: &MatchReport, writer: &mut dyn Write) -> std::io::Result<()> {
    for chain_match in &report.matches {
        writeln!(
            writer,
            "{} : {}",
            chain_match.codes.join(", "),
            chain_match.words.join(", ")
        )?;
    }

    if report.all_words.is_empty() {
        writeln!(writer, "No words found.")?;
    } else {
        writeln!(writer)?;
        writeln!(writer, "All words:")?;
        for word in &report.all_words {
            writeln!(writer, "    {}", word)?;
        }
    }
    Ok(())
}
