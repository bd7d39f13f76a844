use std::fs;
use std::path::Path;

use super::error::WordListError;
use super::index::AnagramIndex;

//─────────────────────────────────────────────────────────────────────────────

/// Reads a newline-delimited word list into memory.
///
/// The file is read in one go and closed before this returns, whether or not
/// reading succeeded. Invalid UTF-8 is reported like any other read failure.
pub fn load_word_list(file_path: &Path) -> Result<String, WordListError> {
    fs::read_to_string(file_path)
        .map_err(|e| WordListError::ReadFile(file_path.display().to_string(), e))
}

/// Reads a word list and indexes the words that are exactly `word_length`
/// letters long.
pub fn load_index_from_file(
    file_path: &Path,
    word_length: usize,
) -> Result<AnagramIndex, WordListError> {
    let contents = load_word_list(file_path)?;
    Ok(AnagramIndex::build(contents.lines(), word_length))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-words");
        let err = load_word_list(&missing).unwrap_err();
        let WordListError::ReadFile(path, source) = &err;
        assert_eq!(path, &missing.display().to_string());
        assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        assert!(err.to_string().contains("no-such-words"));
    }

    #[test]
    fn index_from_file_skips_malformed_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Ohio").unwrap();
        writeln!(file, "can't").unwrap();
        writeln!(file, "ice cream").unwrap();
        writeln!(file, "  hoio  ").unwrap();
        writeln!(file, "dog").unwrap();

        let index = load_index_from_file(file.path(), 4).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.lookup("OHIO"), ["OHIO".to_string(), "HOIO".to_string()]);
    }

    #[test]
    fn invalid_utf8_is_a_read_failure() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, b'\n']).unwrap();
        assert!(load_word_list(file.path()).is_err());
    }
}
