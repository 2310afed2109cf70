use anyhow::{Context, Result};
use reqwest::Client;

use crate::error::PipelineError;
use crate::models::SelectedProblem;

pub struct SlackNotifier {
    client: Client,
    webhook_url: Option<String>,
}

impl SlackNotifier {
    pub fn new(webhook_url: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            webhook_url,
        })
    }

    /// Post the whole selection as one webhook message. Checks the webhook
    /// configuration before anything else, so a missing URL never results in
    /// a request.
    pub async fn publish(&self, problems: &[SelectedProblem]) -> Result<()> {
        let webhook = self
            .webhook_url
            .as_deref()
            .ok_or(PipelineError::ConfigMissing("SLACK_WEBHOOK_URL"))?;

        let message = build_message(problems);

        let response = self
            .client
            .post(webhook)
            .json(&serde_json::json!({ "text": message }))
            .send()
            .await
            .context("Failed to send Slack message")?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("unknown error"));
            return Err(PipelineError::SinkRejected {
                sink: "slack",
                status: status.as_u16(),
                body,
            }
            .into());
        }

        Ok(())
    }
}

/// One header line with the count, then a bullet per problem.
fn build_message(problems: &[SelectedProblem]) -> String {
    let lines: Vec<String> = problems
        .iter()
        .map(|p| format!("• *{}* ({})\n{}", p.title, p.display_difficulty, p.url))
        .collect();

    format!(
        "📘 *Today's LeetCode problems ({})*\n\n{}",
        problems.len(),
        lines.join("\n\n")
    )
}
