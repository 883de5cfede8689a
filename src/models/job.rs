// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ResumeDrop contributors

//! Job catalog and analyzer report models.

use anyhow::{Context, Result};
use serde::Deserialize;

/// A job posting as published in the catalog.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub description: String,
    pub requirements: String,
}

/// Per-job match score produced by the analyzer, in percent.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct JobScore {
    pub job_id: String,
    pub score: f32,
}

/// Analysis report exported by the analyzer for one resume.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MatchReport {
    /// Name of the analyzed resume, when the export carries it.
    #[serde(default)]
    pub resume: Option<String>,
    pub scores: Vec<JobScore>,
}

const EMBEDDED_CATALOG: &str = include_str!("../../data/jobs.json");

/// Deserialize the catalog shipped with the binary.
pub fn load_catalog() -> Result<Vec<Job>> {
    serde_json::from_str(EMBEDDED_CATALOG).context("embedded job catalog is malformed")
}

/// Parse an analyzer report from its JSON export.
pub fn parse_report(content: &str) -> Result<MatchReport> {
    serde_json::from_str(content).context("analysis report is not valid JSON")
}

#[cfg(test)]
mod tests {
    use super::{load_catalog, parse_report};

    #[test]
    fn embedded_catalog_loads() {
        let jobs = load_catalog().expect("catalog parses");
        assert_eq!(jobs.len(), 6);
        assert_eq!(jobs[0].id, "1");
        assert_eq!(jobs[0].title, "Software Engineer");
        assert!(jobs.iter().all(|job| !job.requirements.is_empty()));
    }

    #[test]
    fn parse_report_reads_scores_and_resume_name() {
        let report = parse_report(
            r#"{"resume": "jane_doe.pdf", "scores": [
                {"job_id": "1", "score": 82.5},
                {"job_id": "3", "score": 41.0}
            ]}"#,
        )
        .expect("report parses");

        assert_eq!(report.resume.as_deref(), Some("jane_doe.pdf"));
        assert_eq!(report.scores.len(), 2);
        assert_eq!(report.scores[0].job_id, "1");
        assert!((report.scores[0].score - 82.5).abs() < f32::EPSILON);
    }

    #[test]
    fn parse_report_allows_missing_resume_name() {
        let report = parse_report(r#"{"scores": []}"#).expect("report parses");
        assert!(report.resume.is_none());
        assert!(report.scores.is_empty());
    }

    #[test]
    fn parse_report_rejects_malformed_input() {
        assert!(parse_report("not json").is_err());
        assert!(parse_report(r#"{"scores": "nope"}"#).is_err());
    }
}
