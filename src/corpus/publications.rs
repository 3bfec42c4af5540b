//! Loaders for the tab-delimited publication files.
//!
//! Each line holds at least five tab-separated fields: field 1 is the title,
//! field 2 the comma-separated tags, field 4 the payload (a comma-separated
//! embedding for the vector path, raw text for the word-frequency path).
//! Remaining fields are carried by the source format but unused here.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::corpus::{Publication, TextPublication};
use crate::error::{RankevalError, Result};

const TITLE_FIELD: usize = 1;
const TAGS_FIELD: usize = 2;
const PAYLOAD_FIELD: usize = 4;
const MIN_FIELDS: usize = 5;

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| RankevalError::Open {
            path: path.to_path_buf(),
            source,
        })
}

fn split_tags(field: &str) -> Vec<String> {
    field
        .split(',')
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a comma-separated embedding, skipping malformed values.
///
/// A value that fails to parse is reported and dropped; the rest of the
/// vector survives. Dimension consistency is enforced by the caller.
fn parse_embedding(field: &str, path: &Path, line_no: usize) -> Vec<f64> {
    let mut embedding = Vec::new();
    for token in field.split(',') {
        match token.trim().parse::<f64>() {
            Ok(value) => embedding.push(value),
            Err(_) => log::warn!(
                "Skipping malformed embedding value {:?} in {} at line {}",
                token,
                path.display(),
                line_no
            ),
        }
    }
    embedding
}

/// Load publications with embeddings from a tab-delimited file.
///
/// Lines with too few fields are skipped with a warning. All embeddings must
/// share one dimension; the first record establishes it and any later
/// mismatch (including one caused by a dropped malformed value) fails the
/// load with a diagnostic naming the offending line. An empty or
/// all-malformed file is an error.
pub fn load_publications(path: &Path) -> Result<Vec<Publication>> {
    let reader = open(path)?;

    let mut publications = Vec::new();
    let mut established: Option<(usize, usize)> = None;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < MIN_FIELDS {
            log::warn!(
                "Skipping malformed record in {} at line {} ({} fields, expected at least {})",
                path.display(),
                line_no,
                fields.len(),
                MIN_FIELDS
            );
            continue;
        }

        let embedding = parse_embedding(fields[PAYLOAD_FIELD], path, line_no);
        match established {
            None => {
                if embedding.is_empty() {
                    return Err(RankevalError::Corpus {
                        path: path.to_path_buf(),
                        line: line_no,
                        message: "embedding is empty".to_string(),
                    });
                }
                established = Some((embedding.len(), line_no));
            }
            Some((dimension, first_line)) if embedding.len() != dimension => {
                return Err(RankevalError::Corpus {
                    path: path.to_path_buf(),
                    line: line_no,
                    message: format!(
                        "embedding has {} values, expected {} (established at line {})",
                        embedding.len(),
                        dimension,
                        first_line
                    ),
                });
            }
            Some(_) => {}
        }

        publications.push(Publication {
            title: fields[TITLE_FIELD].to_string(),
            tags: split_tags(fields[TAGS_FIELD]),
            embedding,
        });
    }

    if publications.is_empty() {
        return Err(RankevalError::Corpus {
            path: path.to_path_buf(),
            line: 0,
            message: "no usable publication records".to_string(),
        });
    }

    log::info!(
        "Loaded {} publications from {}",
        publications.len(),
        path.display()
    );
    Ok(publications)
}

/// Load publications with raw text payloads from a tab-delimited file.
///
/// Same framing rules as [`load_publications`]; the payload field is kept
/// verbatim as the publication text.
pub fn load_text_publications(path: &Path) -> Result<Vec<TextPublication>> {
    let reader = open(path)?;

    let mut publications = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < MIN_FIELDS {
            log::warn!(
                "Skipping malformed record in {} at line {} ({} fields, expected at least {})",
                path.display(),
                line_no,
                fields.len(),
                MIN_FIELDS
            );
            continue;
        }

        publications.push(TextPublication {
            title: fields[TITLE_FIELD].to_string(),
            tags: split_tags(fields[TAGS_FIELD]),
            text: fields[PAYLOAD_FIELD].to_string(),
        });
    }

    if publications.is_empty() {
        return Err(RankevalError::Corpus {
            path: path.to_path_buf(),
            line: 0,
            message: "no usable publication records".to_string(),
        });
    }

    log::info!(
        "Loaded {} text publications from {}",
        publications.len(),
        path.display()
    );
    Ok(publications)
}
