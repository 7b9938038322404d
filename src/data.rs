use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// One parsed line of a code table, split into columns.
pub type Row = Vec<String>;

/// One object of a translations document.
pub type Record = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// Columns are separated by runs of spaces or tabs.
    Whitespace,
    /// Columns are separated by single tabs; spaces stay inside a column.
    Tab,
}

/// Where a dataset comes from: text compiled into the binary or a file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Bundled {
        name: &'static str,
        content: &'static str,
    },
    File(PathBuf),
}

impl Source {
    pub fn file(path: impl AsRef<Path>) -> Self {
        Source::File(path.as_ref().to_path_buf())
    }

    pub fn describe(&self) -> String {
        match self {
            Source::Bundled { name, .. } => format!("bundled {}", name),
            Source::File(path) => path.display().to_string(),
        }
    }

    pub fn read(&self) -> Result<Cow<'static, str>> {
        match self {
            Source::Bundled { content, .. } => Ok(Cow::Borrowed(content)),
            Source::File(path) => fs::read_to_string(path)
                .map(Cow::Owned)
                .map_err(|err| Error::load(self.describe(), err)),
        }
    }
}

/// Splits a code table into rows. The first line is a header and is dropped.
pub fn parse_rows(text: &str, delimiter: Delimiter) -> Vec<Row> {
    text.lines()
        .skip(1)
        .map(|line| split_columns(line, delimiter))
        .collect()
}

fn split_columns(line: &str, delimiter: Delimiter) -> Row {
    match delimiter {
        Delimiter::Whitespace => line.split_whitespace().map(str::to_string).collect(),
        Delimiter::Tab => line
            .split('\t')
            .map(str::trim)
            .filter(|column| !column.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

pub fn parse_records(text: &str, resource: &str) -> Result<Vec<Record>> {
    serde_json::from_str::<Vec<Record>>(text).map_err(|err| Error::parse(resource, err.to_string()))
}

pub fn read_rows(source: &Source, delimiter: Delimiter) -> Result<Vec<Row>> {
    let text = source.read()?;
    Ok(parse_rows(&text, delimiter))
}

pub fn read_records(source: &Source) -> Result<Vec<Record>> {
    let text = source.read()?;
    parse_records(&text, &source.describe())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn whitespace_rows_skip_header_and_collapse_runs() {
        let text = "Country  Alpha2 Alpha3 Numeric\nUnited   States US\tUSA 840\n";
        let rows = parse_rows(text, Delimiter::Whitespace);
        assert_eq!(rows, vec![vec!["United", "States", "US", "USA", "840"]]);
    }

    #[test]
    fn tab_rows_keep_spaces_inside_columns() {
        let text = "Language\tCode\nModern Greek (1453-)\tell\r\n\n";
        let rows = parse_rows(text, Delimiter::Tab);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["Modern Greek (1453-)", "ell"]);
        assert!(rows[1].is_empty());
    }

    #[test]
    fn records_keep_field_order() {
        let records =
            parse_records(r#"[{"alpha3": "fra", "zho": "法国", "deu": "Frankreich"}]"#, "test")
                .expect("parse records");
        let keys: Vec<&str> = records[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["alpha3", "zho", "deu"]);
    }

    #[test]
    fn malformed_json_is_a_load_failure() {
        let err = parse_records("[{\"alpha3\": ", "broken.json").unwrap_err();
        assert!(err.is_load());
        assert!(err.to_string().contains("broken.json"));

        let err = parse_records("{\"alpha3\": \"fra\"}", "object.json").unwrap_err();
        assert!(err.is_load());
    }

    #[test]
    fn missing_file_is_a_load_failure() {
        let dir = tempdir().expect("tempdir");
        let source = Source::file(dir.path().join("absent.txt"));
        let err = read_rows(&source, Delimiter::Whitespace).unwrap_err();
        assert!(err.is_load());
        assert!(matches!(err, Error::Load { .. }));
    }

    #[test]
    fn file_source_reads_contents() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("codes.txt");
        fs::write(&path, "header\nFrance FR FRA 250\n").expect("write file");
        let rows = read_rows(&Source::file(&path), Delimiter::Whitespace).expect("read rows");
        assert_eq!(rows, vec![vec!["France", "FR", "FRA", "250"]]);
    }
}
