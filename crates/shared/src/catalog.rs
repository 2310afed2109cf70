use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;

use crate::error::PipelineError;
use crate::models::{Difficulty, Problem};

const CATALOG_URL: &str = "https://leetcode.com/api/problems/all/";

#[derive(Debug, Deserialize)]
struct CatalogResponse {
    stat_status_pairs: Vec<StatStatusPair>,
}

#[derive(Debug, Deserialize)]
struct StatStatusPair {
    stat: Stat,
    difficulty: DifficultyInfo,
}

#[derive(Debug, Deserialize)]
struct Stat {
    frontend_question_id: i64,
    #[serde(rename = "question__title")]
    title: String,
    #[serde(rename = "question__title_slug")]
    slug: String,
    // Topic metadata is absent for most of the catalog
    #[serde(rename = "topicTags", default)]
    topic_tags: Option<Vec<TopicTag>>,
}

#[derive(Debug, Deserialize)]
struct DifficultyInfo {
    level: Difficulty,
}

#[derive(Debug, Deserialize)]
struct TopicTag {
    slug: String,
}

impl From<StatStatusPair> for Problem {
    fn from(pair: StatStatusPair) -> Self {
        Self {
            id: pair.stat.frontend_question_id,
            title: pair.stat.title,
            slug: pair.stat.slug,
            level: pair.difficulty.level,
            tags: pair
                .stat
                .topic_tags
                .unwrap_or_default()
                .into_iter()
                .map(|tag| tag.slug)
                .collect(),
        }
    }
}

pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Fetch the full problem catalog. One attempt, no retry; any transport,
    /// status, or parse failure surfaces as `UpstreamUnavailable`.
    pub async fn fetch_all(&self) -> Result<Vec<Problem>> {
        let response = self
            .client
            .get(CATALOG_URL)
            .send()
            .await
            .map_err(|e| PipelineError::UpstreamUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(
                PipelineError::UpstreamUnavailable(format!("catalog returned HTTP {}", status))
                    .into(),
            );
        }

        let body = response
            .text()
            .await
            .map_err(|e| PipelineError::UpstreamUnavailable(e.to_string()))?;

        parse_catalog(&body)
    }
}

/// Map the raw catalog payload to normalized problems, preserving upstream
/// order.
fn parse_catalog(body: &str) -> Result<Vec<Problem>> {
    let response: CatalogResponse = serde_json::from_str(body).map_err(|e| {
        PipelineError::UpstreamUnavailable(format!("unexpected catalog payload: {}", e))
    })?;

    Ok(response
        .stat_status_pairs
        .into_iter()
        .map(Problem::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PAYLOAD: &str = r#"{
        "user_name": "",
        "num_total": 2,
        "stat_status_pairs": [
            {
                "stat": {
                    "question_id": 1,
                    "frontend_question_id": 1,
                    "question__title": "Two Sum",
                    "question__title_slug": "two-sum",
                    "topicTags": [{"slug": "array"}, {"slug": "hash-table"}],
                    "total_acs": 100,
                    "total_submitted": 200
                },
                "status": null,
                "difficulty": {"level": 1},
                "paid_only": false,
                "is_favor": false,
                "frequency": 0,
                "progress": 0
            },
            {
                "stat": {
                    "question_id": 2,
                    "frontend_question_id": 2,
                    "question__title": "Add Two Numbers",
                    "question__title_slug": "add-two-numbers"
                },
                "status": null,
                "difficulty": {"level": 2},
                "paid_only": false
            }
        ]
    }"#;

    #[test]
    fn test_parse_maps_catalog_fields() {
        let problems = parse_catalog(SAMPLE_PAYLOAD).unwrap();

        assert_eq!(problems.len(), 2);
        assert_eq!(problems[0].id, 1);
        assert_eq!(problems[0].title, "Two Sum");
        assert_eq!(problems[0].slug, "two-sum");
        assert_eq!(problems[0].level, Difficulty::Easy);
        assert_eq!(problems[0].tags, vec!["array", "hash-table"]);
    }

    #[test]
    fn test_parse_defaults_missing_tags_to_empty() {
        let problems = parse_catalog(SAMPLE_PAYLOAD).unwrap();

        assert_eq!(problems[1].level, Difficulty::Medium);
        assert!(problems[1].tags.is_empty());
    }

    #[test]
    fn test_parse_is_idempotent() {
        let first = parse_catalog(SAMPLE_PAYLOAD).unwrap();
        let second = parse_catalog(SAMPLE_PAYLOAD).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_rejects_malformed_payload() {
        let err = parse_catalog("{\"items\": []}").unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::UpstreamUnavailable(_))
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_difficulty_level() {
        let payload = r#"{
            "stat_status_pairs": [
                {
                    "stat": {
                        "frontend_question_id": 9,
                        "question__title": "Mystery",
                        "question__title_slug": "mystery"
                    },
                    "difficulty": {"level": 4}
                }
            ]
        }"#;

        let err = parse_catalog(payload).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::UpstreamUnavailable(_))
        ));
    }
}
