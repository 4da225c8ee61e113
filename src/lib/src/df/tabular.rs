use polars::prelude::*;

use crate::error::DriftGuardError;
use crate::util;

use std::fs::File;
use std::path::Path;

const DEFAULT_INFER_SCHEMA_LEN: usize = 10000;
const DEFAULT_DELIMITER: u8 = b',';
const CSV_READ_ERROR: &str = "Could not read csv from path";
const CSV_WRITE_ERROR: &str = "Could not save tabular data to path";

/// Read a comma-delimited file with a header row into a DataFrame.
/// Numeric-looking cells are inferred as numbers, empty cells as null,
/// everything else stays text.
pub fn read_df_csv(path: impl AsRef<Path>) -> Result<DataFrame, DriftGuardError> {
    read_df_csv_delimiter(path, DEFAULT_DELIMITER)
}

pub fn read_df_csv_delimiter(
    path: impl AsRef<Path>,
    delimiter: u8,
) -> Result<DataFrame, DriftGuardError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DriftGuardError::file_does_not_exist(path));
    }

    verify_column_counts(path, delimiter)?;

    let reader = CsvReader::from_path(path)?;
    let df = reader
        .infer_schema(Some(DEFAULT_INFER_SCHEMA_LEN))
        .has_header(true)
        .with_delimiter(delimiter)
        .with_encoding(CsvEncoding::LossyUtf8)
        .finish()
        .map_err(|err| {
            DriftGuardError::parse_error(format!("{CSV_READ_ERROR} {path:?}: {err}"))
        })?;
    log::debug!(
        "read_df_csv {:?} -> {} rows x {} columns",
        path,
        df.height(),
        df.width()
    );
    Ok(df)
}

/// Write a DataFrame back out as comma-delimited text with a header row,
/// creating parent directories as needed.
pub fn write_df_csv(df: &mut DataFrame, path: impl AsRef<Path>) -> Result<(), DriftGuardError> {
    let path = path.as_ref();
    util::fs::create_parent_dirs(path)?;
    log::debug!("Writing tabular file {:?}", path);
    let f = File::create(path)?;
    CsvWriter::new(f)
        .has_header(true)
        .with_delimiter(DEFAULT_DELIMITER)
        .finish(df)
        .map_err(|err| DriftGuardError::basic_str(format!("{CSV_WRITE_ERROR} {path:?}: {err}")))?;
    Ok(())
}

/// Every record must carry the same number of fields as the header. The csv
/// reader drops the extra fields of a ragged record, so we count them
/// ourselves before handing the file over.
fn verify_column_counts(path: &Path, delimiter: u8) -> Result<(), DriftGuardError> {
    let bytes = std::fs::read(path)?;
    let contents = String::from_utf8_lossy(&bytes);
    let counts = field_counts(&contents, delimiter as char);
    if let Some((&header_count, records)) = counts.split_first() {
        for (i, &count) in records.iter().enumerate() {
            if count != header_count {
                return Err(DriftGuardError::parse_error(format!(
                    "{CSV_READ_ERROR} {:?}: record {} has {} fields, header has {}",
                    path,
                    i + 2,
                    count,
                    header_count
                )));
            }
        }
    }
    Ok(())
}

/// Field count per record, honoring quoted fields. Blank lines are skipped,
/// matching the reader.
fn field_counts(contents: &str, delimiter: char) -> Vec<usize> {
    let mut counts: Vec<usize> = vec![];
    let mut fields = 1;
    let mut has_content = false;
    let mut in_quotes = false;
    for c in contents.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
            has_content = true;
        } else if c == '\n' && !in_quotes {
            if has_content || fields > 1 {
                counts.push(fields);
            }
            fields = 1;
            has_content = false;
        } else if c == delimiter && !in_quotes {
            fields += 1;
        } else if c != '\r' {
            has_content = true;
        }
    }
    if has_content || fields > 1 {
        counts.push(fields);
    }
    counts
}
