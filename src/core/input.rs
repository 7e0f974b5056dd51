use crate::utils::error::Result;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

/// Where the address list comes from. Files can be re-opened, which is how
/// the precheck pass "rewinds" before dispatch; stdin and the inline
/// `--email` source are read once.
#[derive(Debug, Clone)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    Inline(String),
}

impl InputSource {
    pub fn from_args(infile: Option<&Path>, email: Option<&str>) -> Self {
        if let Some(addresses) = email {
            // One address per line, mirroring the CSV file format.
            return InputSource::Inline(addresses.replace(',', "\n"));
        }
        match infile {
            Some(path) if path.as_os_str() != "-" => InputSource::File(path.to_path_buf()),
            _ => InputSource::Stdin,
        }
    }

    pub fn is_rewindable(&self) -> bool {
        matches!(self, InputSource::File(_))
    }

    pub fn label(&self) -> String {
        match self {
            InputSource::Stdin => "stdin".to_string(),
            InputSource::File(path) => path.display().to_string(),
            InputSource::Inline(_) => "command line".to_string(),
        }
    }

    /// Opens a fresh reader over the source. Unreadable files are fatal.
    pub fn open(&self) -> Result<Box<dyn Read + Send>> {
        Ok(match self {
            InputSource::Stdin => Box::new(std::io::stdin()),
            InputSource::File(path) => Box::new(BufReader::new(File::open(path)?)),
            InputSource::Inline(data) => Box::new(Cursor::new(data.clone().into_bytes())),
        })
    }

    /// CSV reader over the source; input rows have no header and may be
    /// ragged, so every row is taken as data.
    pub fn csv_reader(&self) -> Result<csv::Reader<Box<dyn Read + Send>>> {
        Ok(csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(self.open()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_source_splits_on_commas() {
        let source = InputSource::from_args(None, Some("x@y.com,z@y.com"));
        let mut reader = source.csv_reader().unwrap();
        let rows: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect();
        assert_eq!(rows, vec![vec!["x@y.com".to_string()], vec!["z@y.com".to_string()]]);
        assert!(!source.is_rewindable());
    }

    #[test]
    fn dash_and_omission_mean_stdin() {
        assert!(matches!(
            InputSource::from_args(Some(Path::new("-")), None),
            InputSource::Stdin
        ));
        assert!(matches!(InputSource::from_args(None, None), InputSource::Stdin));
    }

    #[test]
    fn file_source_is_rewindable() {
        let source = InputSource::from_args(Some(Path::new("list.csv")), None);
        assert!(source.is_rewindable());
        assert_eq!(source.label(), "list.csv");
    }
}
