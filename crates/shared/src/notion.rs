use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::error::PipelineError;
use crate::models::SelectedProblem;

const PAGES_URL: &str = "https://api.notion.com/v1/pages";
const NOTION_VERSION: &str = "2022-06-28";

#[derive(Debug, Deserialize)]
struct CreatedPage {
    id: String,
}

pub struct NotionRecorder {
    client: Client,
    token: Option<String>,
    database_id: Option<String>,
}

impl NotionRecorder {
    pub fn new(token: Option<String>, database_id: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            token,
            database_id,
        })
    }

    /// Write one database page per problem, in order. Each success is
    /// reported as it happens; the first rejection aborts the remaining
    /// items.
    pub async fn publish(&self, problems: &[SelectedProblem]) -> Result<()> {
        let token = self
            .token
            .as_deref()
            .ok_or(PipelineError::ConfigMissing("NOTION_TOKEN"))?;
        let database_id = self
            .database_id
            .as_deref()
            .ok_or(PipelineError::ConfigMissing("NOTION_DATABASE_ID"))?;

        for problem in problems {
            let payload = build_page(database_id, problem, Utc::now());

            let response = self
                .client
                .post(PAGES_URL)
                .bearer_auth(token)
                .header("Notion-Version", NOTION_VERSION)
                .json(&payload)
                .send()
                .await
                .context("Failed to send request to Notion API")?;

            let status = response.status();
            if !status.is_success() {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| String::from("unknown error"));
                return Err(PipelineError::SinkRejected {
                    sink: "notion",
                    status: status.as_u16(),
                    body,
                }
                .into());
            }

            let page: CreatedPage = response
                .json()
                .await
                .context("Failed to parse Notion API response")?;
            println!("✓ Recorded \"{}\" ({})", problem.title, page.id);
        }

        Ok(())
    }
}

/// New-page payload for one problem: title, difficulty and tag selects, url,
/// and the write timestamp.
fn build_page(
    database_id: &str,
    problem: &SelectedProblem,
    created: DateTime<Utc>,
) -> serde_json::Value {
    serde_json::json!({
        "parent": { "database_id": database_id },
        "properties": {
            "Name": {
                "title": [{ "text": { "content": problem.title } }]
            },
            "Difficulty": {
                "select": { "name": problem.display_difficulty }
            },
            "Url": {
                "url": problem.url
            },
            "Tag": {
                "select": { "name": problem.tag }
            },
            "Date": {
                "date": { "start": created.to_rfc3339() }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, Problem};
    use chrono::TimeZone;

    fn selected() -> SelectedProblem {
        let problem = Problem {
            id: 200,
            title: "Number of Islands".to_string(),
            slug: "number-of-islands".to_string(),
            level: Difficulty::Medium,
            tags: vec!["bfs".to_string()],
        };
        SelectedProblem::from_problem(&problem, "bfs")
    }

    #[test]
    fn test_page_payload_shape() {
        let created = Utc.with_ymd_and_hms(2025, 11, 29, 9, 0, 0).unwrap();
        let page = build_page("db-123", &selected(), created);

        assert_eq!(page["parent"]["database_id"], "db-123");
        assert_eq!(
            page["properties"]["Name"]["title"][0]["text"]["content"],
            "Number of Islands"
        );
        assert_eq!(
            page["properties"]["Difficulty"]["select"]["name"],
            "Medium"
        );
        assert_eq!(
            page["properties"]["Url"]["url"],
            "https://leetcode.com/problems/number-of-islands/"
        );
        assert_eq!(page["properties"]["Tag"]["select"]["name"], "bfs");
    }

    #[test]
    fn test_page_date_is_iso_8601() {
        let created = Utc.with_ymd_and_hms(2025, 11, 29, 9, 0, 0).unwrap();
        let page = build_page("db-123", &selected(), created);

        let start = page["properties"]["Date"]["date"]["start"].as_str().unwrap();
        assert!(start.starts_with("2025-11-29T09:00:00"));
    }

    #[tokio::test]
    async fn test_missing_token_fails_before_any_request() {
        let recorder = NotionRecorder::new(None, Some("db-123".to_string())).unwrap();
        let err = recorder.publish(&[selected()]).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::ConfigMissing("NOTION_TOKEN"))
        ));
    }

    #[tokio::test]
    async fn test_missing_database_id_fails_before_any_request() {
        let recorder = NotionRecorder::new(Some("secret".to_string()), None).unwrap();
        let err = recorder.publish(&[selected()]).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::ConfigMissing("NOTION_DATABASE_ID"))
        ));
    }
}
