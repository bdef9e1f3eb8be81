//! CSV Export
//!
//! A `CsvDocument` is an owned snapshot of the grid's current view: header
//! labels of the visible columns and their formatted cells, row by row. It can
//! be encoded off the UI thread.

use std::path::{Path, PathBuf};

use csv_async::AsyncWriterBuilder;
use tokio::io::AsyncWriteExt;

use crate::error::Result;

/// Snapshot of the rows to export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvDocument {
    headers: Vec<String>,
    records: Vec<Vec<String>>,
}

impl CsvDocument {
    /// Create a document from headers and records
    pub fn new(headers: Vec<String>, records: Vec<Vec<String>>) -> Self {
        Self { headers, records }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[Vec<String>] {
        &self.records
    }

    /// Number of data rows, excluding the header
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Encode as CSV bytes; the header row is always written
    pub async fn encode(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        {
            let mut writer = AsyncWriterBuilder::new().create_writer(&mut buf);
            writer.write_record(&self.headers).await?;
            for record in &self.records {
                writer.write_record(record).await?;
            }
            writer.flush().await?;
        }
        Ok(buf)
    }

    /// Encode and write to `dir/file_name`, returning the written path
    ///
    /// Existing files are never replaced: on a name clash a numeric suffix is
    /// added, e.g. `tickers-1.csv`.
    pub async fn write_to(&self, dir: &Path, file_name: &str) -> Result<PathBuf> {
        let bytes = self.encode().await?;
        let (mut file, path) = create_unique(dir, file_name).await?;
        file.write_all(&bytes).await?;
        file.flush().await?;
        tracing::info!(path = ?path, rows = self.len(), "CSV export written");
        Ok(path)
    }
}

/// Create a new file in `dir`, picking a free name derived from `file_name`
async fn create_unique(dir: &Path, file_name: &str) -> Result<(tokio::fs::File, PathBuf)> {
    let name = Path::new(file_name);
    let stem = name
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = name.extension().map(|e| e.to_string_lossy().into_owned());

    let mut attempt = 0usize;
    loop {
        let candidate = match (attempt, &extension) {
            (0, _) => file_name.to_string(),
            (n, Some(ext)) => format!("{stem}-{n}.{ext}"),
            (n, None) => format!("{stem}-{n}"),
        };
        let path = dir.join(candidate);
        match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => return Ok((file, path)),
            Err(e)
                if e.kind() == std::io::ErrorKind::AlreadyExists
                    && attempt < MAX_NAME_ATTEMPTS =>
            {
                attempt += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Suffixes tried before giving up on a free export name
const MAX_NAME_ATTEMPTS: usize = 1000;

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> Vec<String> {
        vec!["Symbol".to_string(), "Last Price".to_string()]
    }

    #[tokio::test]
    async fn test_header_only_when_empty() {
        let doc = CsvDocument::new(headers(), Vec::new());
        let bytes = doc.encode().await.expect("encode");
        assert_eq!(String::from_utf8(bytes).expect("utf8"), "Symbol,Last Price\n");
    }

    #[tokio::test]
    async fn test_quotes_special_characters() {
        let doc = CsvDocument::new(
            headers(),
            vec![vec!["A,B".to_string(), "say \"hi\"".to_string()]],
        );
        let text = String::from_utf8(doc.encode().await.expect("encode")).expect("utf8");
        assert_eq!(text, "Symbol,Last Price\n\"A,B\",\"say \"\"hi\"\"\"\n");
    }

    #[tokio::test]
    async fn test_write_to_dir() {
        let dir = std::env::temp_dir().join(format!("ticker-table-export-{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.expect("mkdir");

        let doc = CsvDocument::new(
            headers(),
            vec![vec!["ETHBTC".to_string(), "0.05 €".to_string()]],
        );
        let path = doc.write_to(&dir, "out.csv").await.expect("write");
        let text = tokio::fs::read_to_string(&path).await.expect("read");
        assert_eq!(text, "Symbol,Last Price\nETHBTC,0.05 €\n");

        tokio::fs::remove_dir_all(&dir).await.ok();
    }

    #[tokio::test]
    async fn test_name_clash_keeps_both_files() {
        let dir = std::env::temp_dir().join(format!("ticker-table-clash-{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.expect("mkdir");

        let first = CsvDocument::new(headers(), vec![vec!["A".to_string(), "1".to_string()]]);
        let second = CsvDocument::new(headers(), vec![vec!["B".to_string(), "2".to_string()]]);
        let first_path = first.write_to(&dir, "tickers.csv").await.expect("first");
        let second_path = second.write_to(&dir, "tickers.csv").await.expect("second");

        assert_ne!(first_path, second_path);
        assert_eq!(second_path.file_name().and_then(|n| n.to_str()), Some("tickers-1.csv"));
        let first_text = tokio::fs::read_to_string(&first_path).await.expect("read");
        assert_eq!(first_text, "Symbol,Last Price\nA,1\n");

        tokio::fs::remove_dir_all(&dir).await.ok();
    }
}
