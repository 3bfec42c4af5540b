//! Loaders for the query tables keyed by tag or title string.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{RankevalError, Result};

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| RankevalError::Open {
            path: path.to_path_buf(),
            source,
        })
}

/// Load the query-vector table from a tab-delimited file.
///
/// Each line is `key \t comma-separated floats`. Parsing a vector stops at
/// the first malformed value; the entry is kept only when the result is
/// non-empty and matches `expected_dim`, so a truncated vector is omitted
/// (with a warning) instead of reaching the similarity engine.
pub fn load_query_vectors(path: &Path, expected_dim: usize) -> Result<HashMap<String, Vec<f64>>> {
    let reader = open(path)?;

    let mut table = HashMap::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.splitn(2, '\t');
        let key = fields.next().unwrap_or_default().to_string();
        let Some(raw_vector) = fields.next() else {
            log::warn!(
                "Skipping query line without a vector in {} at line {}",
                path.display(),
                line_no
            );
            continue;
        };

        let mut vector = Vec::new();
        for token in raw_vector.split(',') {
            match token.trim().parse::<f64>() {
                Ok(value) => vector.push(value),
                Err(_) => {
                    log::warn!(
                        "Stopping vector parse at malformed value {:?} in {} at line {}",
                        token,
                        path.display(),
                        line_no
                    );
                    break;
                }
            }
        }

        if vector.is_empty() {
            log::warn!(
                "Omitting query vector for {:?}: no parseable values ({} line {})",
                key,
                path.display(),
                line_no
            );
            continue;
        }
        if vector.len() != expected_dim {
            log::warn!(
                "Omitting query vector for {:?}: {} values, corpus dimension is {} ({} line {})",
                key,
                vector.len(),
                expected_dim,
                path.display(),
                line_no
            );
            continue;
        }

        table.insert(key, vector);
    }

    if table.is_empty() {
        log::warn!("No usable query vectors in {}", path.display());
    } else {
        log::info!("Loaded {} query vectors from {}", table.len(), path.display());
    }
    Ok(table)
}

/// Load the query-phrasing table from a comma-delimited file.
///
/// Each line is `key,phrase,phrase,...`; the stored phrasing list is the
/// full split line, so the key itself is also its first phrasing.
pub fn load_query_phrasings(path: &Path) -> Result<HashMap<String, Vec<String>>> {
    let reader = open(path)?;

    let mut table = HashMap::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let phrases: Vec<String> = line.split(',').map(str::to_string).collect();
        let key = phrases[0].clone();
        table.insert(key, phrases);
    }

    log::info!(
        "Loaded {} query phrasings from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}
