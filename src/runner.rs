//! Evaluation orchestrator: runs every configured method and collects score
//! reports in run order.

use crate::aggregate::summarize;
use crate::config::Config;
use crate::corpus;
use crate::error::Result;
use crate::rank::{vector_ranks, word_frequency_ranks, QueryMode};
use crate::report::ScoreReport;

/// Run every configured evaluation method.
///
/// Vector methods run first, then word-frequency methods, each contributing
/// its score blocks in order. A load failure for any method fails the whole
/// batch; partial data never reaches the report.
pub fn run(config: &Config) -> Result<Vec<ScoreReport>> {
    let mut reports = Vec::new();

    for method in &config.evaluation.vector_methods {
        run_vector_method(config, method, &mut reports)?;
    }
    for method in &config.evaluation.word_frequency_methods {
        run_word_frequency_method(config, method, &mut reports)?;
    }

    Ok(reports)
}

/// Evaluate one vector-based method in Tags mode and Titles mode.
fn run_vector_method(
    config: &Config,
    method: &str,
    reports: &mut Vec<ScoreReport>,
) -> Result<()> {
    log::info!("Scoring method {}", method);

    let publications = corpus::load_publications(&config.publications_path(method))?;
    // The loader rejects empty corpora, so the dimension is always present.
    let dimension = publications
        .first()
        .map(|publication| publication.embedding.len())
        .unwrap_or_default();

    let tag_vectors = corpus::load_query_vectors(&config.tags_path(method), dimension)?;
    let title_vectors = corpus::load_query_vectors(&config.titles_path(method), dimension)?;
    let policy = config.evaluation.missing_key;

    let tag_ranks = vector_ranks(&publications, &tag_vectors, QueryMode::Tags, policy)?;
    reports.push(ScoreReport {
        method: method.to_string(),
        query_type: QueryMode::Tags,
        summary: summarize(&tag_ranks, publications.len())?,
    });

    let title_ranks = vector_ranks(&publications, &title_vectors, QueryMode::Titles, policy)?;
    reports.push(ScoreReport {
        method: method.to_string(),
        query_type: QueryMode::Titles,
        summary: summarize(&title_ranks, publications.len())?,
    });

    Ok(())
}

/// Evaluate one word-frequency method: always Tags mode, Titles mode only
/// when enabled in the configuration.
fn run_word_frequency_method(
    config: &Config,
    method: &str,
    reports: &mut Vec<ScoreReport>,
) -> Result<()> {
    log::info!("Scoring method {}", method);

    let publications = corpus::load_text_publications(&config.publications_path(method))?;

    let tag_phrasings = corpus::load_query_phrasings(&config.tags_path(method))?;
    let tag_ranks = word_frequency_ranks(&publications, &tag_phrasings, QueryMode::Tags);
    reports.push(ScoreReport {
        method: method.to_string(),
        query_type: QueryMode::Tags,
        summary: summarize(&tag_ranks, publications.len())?,
    });

    if config.evaluation.word_frequency_titles {
        let title_phrasings = corpus::load_query_phrasings(&config.titles_path(method))?;
        let title_ranks = word_frequency_ranks(&publications, &title_phrasings, QueryMode::Titles);
        reports.push(ScoreReport {
            method: method.to_string(),
            query_type: QueryMode::Titles,
            summary: summarize(&title_ranks, publications.len())?,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CorpusConfig, EvaluationConfig, OutputConfig};
    use crate::rank::MissingKeyPolicy;
    use std::fs;
    use tempfile::TempDir;

    fn write_method_file(dir: &TempDir, method: &str, name: &str, content: &str) {
        let txt_dir = dir.path().join(method).join("txt");
        fs::create_dir_all(&txt_dir).unwrap();
        fs::write(txt_dir.join(name), content).unwrap();
    }

    fn make_config(dir: &TempDir, vector: &[&str], word_frequency: &[&str]) -> Config {
        Config {
            corpus: CorpusConfig {
                data_dir: dir.path().to_path_buf(),
            },
            evaluation: EvaluationConfig {
                vector_methods: vector.iter().map(|m| m.to_string()).collect(),
                word_frequency_methods: word_frequency.iter().map(|m| m.to_string()).collect(),
                missing_key: MissingKeyPolicy::SkipKey,
                word_frequency_titles: false,
            },
            output: OutputConfig {
                report_path: dir.path().join("scores.txt"),
            },
        }
    }

    fn write_vector_method(dir: &TempDir, method: &str) {
        write_method_file(
            dir,
            method,
            "publications.txt",
            "0\tAlpha\tt1\tx\t1.0,0.0\n0\tBeta\tt2\tx\t0.0,1.0\n",
        );
        write_method_file(dir, method, "tags.txt", "t1\t1.0,0.0\nt2\t0.0,1.0\n");
        write_method_file(dir, method, "titles.txt", "Alpha\t1.0,0.0\nBeta\t0.0,1.0\n");
    }

    fn write_word_frequency_method(dir: &TempDir, method: &str) {
        write_method_file(
            dir,
            method,
            "publications.txt",
            "0\tAlpha\tt1\tx\talpha alpha\n0\tBeta\tt2\tx\tbeta\n",
        );
        write_method_file(dir, method, "tags.txt", "t1,alpha\nt2,beta\n");
        write_method_file(dir, method, "titles.txt", "Alpha,alpha\nBeta,beta\n");
    }

    #[test]
    fn run_collects_reports_in_order() {
        let dir = TempDir::new().unwrap();
        write_vector_method(&dir, "LDA_200");
        write_word_frequency_method(&dir, "WF");
        let config = make_config(&dir, &["LDA_200"], &["WF"]);

        let reports = run(&config).unwrap();

        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].method, "LDA_200");
        assert_eq!(reports[0].query_type, QueryMode::Tags);
        assert_eq!(reports[1].method, "LDA_200");
        assert_eq!(reports[1].query_type, QueryMode::Titles);
        assert_eq!(reports[2].method, "WF");
        assert_eq!(reports[2].query_type, QueryMode::Tags);
    }

    #[test]
    fn run_vector_method_scores() {
        let dir = TempDir::new().unwrap();
        write_vector_method(&dir, "D2V");
        let config = make_config(&dir, &["D2V"], &[]);

        let reports = run(&config).unwrap();

        // Every publication ranks first for its own query; with two items the
        // percentile buckets stay empty and the average lands at 50.
        assert_eq!(reports.len(), 2);
        for report in &reports {
            assert_eq!(report.summary.top_one, 0.0);
            assert_eq!(report.summary.top_five, 0.0);
            assert!((report.summary.average_rank - 50.0).abs() < 1e-9);
        }
    }

    #[test]
    fn run_word_frequency_titles_toggle() {
        let dir = TempDir::new().unwrap();
        write_word_frequency_method(&dir, "WF");
        let mut config = make_config(&dir, &[], &["WF"]);
        config.evaluation.word_frequency_titles = true;

        let reports = run(&config).unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[1].query_type, QueryMode::Titles);
    }

    #[test]
    fn run_fails_on_missing_input() {
        let dir = TempDir::new().unwrap();
        // publications.txt exists but tags.txt does not.
        write_method_file(
            &dir,
            "D2V",
            "publications.txt",
            "0\tAlpha\tt1\tx\t1.0,0.0\n",
        );
        let config = make_config(&dir, &["D2V"], &[]);

        assert!(run(&config).is_err());
    }
}
