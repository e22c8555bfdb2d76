use serde::de::DeserializeOwned;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

/// One line of a delimited mortgage data file, split into trimmed fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based line number in the source file.
    pub line: u64,
    /// The source line with surrounding whitespace stripped.
    pub text: String,
    pub fields: Vec<String>,
}

/// Read a JSON file and deserialise into a typed struct.
pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    let contents = fs::read_to_string(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;
    let value: T = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?;
    Ok(value)
}

/// Read every non-blank line of a delimited file.
///
/// Rows may have any number of fields; the caller decides what is valid.
pub fn read_records(
    path: &str,
    delimiter: char,
) -> Result<Vec<RawRecord>, Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    let file = File::open(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;
    parse_records(file, delimiter)
}

/// Split delimited rows from any reader.
pub fn parse_records<R: Read>(
    mut reader: R,
    delimiter: char,
) -> Result<Vec<RawRecord>, Box<dyn std::error::Error>> {
    if !delimiter.is_ascii() {
        return Err(format!("Delimiter must be a single ASCII character, got '{}'", delimiter).into());
    }

    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    let lines: Vec<&str> = contents.lines().collect();

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .delimiter(delimiter as u8)
        .from_reader(contents.as_bytes());

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let fields: Vec<String> = row.iter().map(str::to_string).collect();

        if fields.iter().all(|f| f.is_empty()) {
            log::warn!("line {}: blank record skipped", line);
            continue;
        }
        let text = line
            .checked_sub(1)
            .and_then(|idx| lines.get(idx as usize))
            .map(|l| l.trim().to_string())
            .unwrap_or_else(|| fields.join(&delimiter.to_string()));
        records.push(RawRecord { line, text, fields });
    }

    Ok(records)
}

/// Resolve and validate the path, preventing directory traversal.
fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let canonical = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !canonical.exists() {
        return Err(format!("File not found: {}", canonical.display()).into());
    }

    if !canonical.is_file() {
        return Err(format!("Not a file: {}", canonical.display()).into());
    }

    Ok(canonical)
}
