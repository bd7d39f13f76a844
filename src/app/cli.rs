use clap::Parser;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::error::AppError;

/// Chain length used when none is given.
pub const DEFAULT_CHAIN_LENGTH: usize = 4;

/// Word list used when none is given.
pub const DEFAULT_WORD_LIST: &str = "/usr/share/dict/words";

/// Number of states in a chain; always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainLength(usize);

impl ChainLength {
    pub fn get(self) -> usize {
        self.0
    }

    /// Every state code is two letters, so matching words are twice as long.
    pub fn word_length(self) -> usize {
        self.0 * 2
    }
}

impl Default for ChainLength {
    fn default() -> Self {
        Self(DEFAULT_CHAIN_LENGTH)
    }
}

impl fmt::Display for ChainLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChainLength {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            AppError::InvalidArgument(format!(
                "chain length must be a positive integer, got '{}'",
                s
            ))
        };
        match s.trim().parse::<usize>() {
            Ok(0) | Err(_) => Err(invalid()),
            // The word length must stay representable.
            Ok(n) if n.checked_mul(2).is_none() => Err(AppError::InvalidArgument(format!(
                "chain length {} is too large",
                n
            ))),
            Ok(n) => Ok(Self(n)),
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about = "Finds words spelled by chains of neighboring US state codes.", long_about = None)]
pub struct Cli {
    /// Number of states in each chain (values above 7 get very slow)
    #[clap(default_value_t = ChainLength::default(), allow_negative_numbers = true)]
    pub chain_length: ChainLength,

    /// Newline-delimited word list to match chains against
    #[clap(default_value = DEFAULT_WORD_LIST)]
    pub word_list: PathBuf,

    /// Write verbose progress messages to this file.
    #[clap(short, long)]
    pub log_file: Option<PathBuf>,

    /// Suppress verbose logging and the long-chain warning.
    #[clap(short, long)]
    pub quiet: bool,

    /// Print the state adjacency table and exit.
    #[clap(long)]
    pub list_states: bool,

    /// Print every chain of the requested length and exit.
    #[clap(long, conflicts_with = "list_states")]
    pub list_chains: bool,

    /// Only build chains starting at this state (name or two-letter code).
    #[clap(short, long, value_name = "STATE")]
    pub start: Option<String>,
}
