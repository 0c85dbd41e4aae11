use anyhow::Context;
use reqwest::Client;
use serde_json::json;

use crate::models::AssessmentResult;

/// Thin client for the transactional email API that delivers assessment
/// results. Configured entirely from the environment; when unconfigured,
/// delivery is skipped.
pub struct EmailClient {
    client: Client,
    api_url: String,
    api_key: String,
    from_address: String,
}

impl EmailClient {
    pub fn from_env() -> Option<Self> {
        let api_url = std::env::var("RESULTS_EMAIL_API_URL").ok()?;
        let api_key = std::env::var("RESULTS_EMAIL_API_KEY").ok()?;
        let from_address = std::env::var("RESULTS_EMAIL_FROM")
            .unwrap_or_else(|_| "results@launchpathacademy.com".to_string());
        Some(Self {
            client: Client::new(),
            api_url,
            api_key,
            from_address,
        })
    }

    pub async fn send_results(
        &self,
        to_email: &str,
        to_name: &str,
        result: &AssessmentResult,
    ) -> anyhow::Result<()> {
        let body = json!({
            "from": self.from_address,
            "to": to_email,
            "subject": "Your LaunchPath Academy assessment results",
            "text": render_results_email(to_name, result),
        });

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("email API request failed")?;

        response
            .error_for_status()
            .context("email API rejected the message")?;
        Ok(())
    }
}

/// Sends the results email if a client is configured. Delivery failures are
/// logged and never propagated; the submission has already been recorded.
pub async fn dispatch_results(
    client: Option<&EmailClient>,
    to_email: &str,
    to_name: &str,
    result: &AssessmentResult,
) {
    let Some(client) = client else {
        tracing::debug!(email = to_email, "email delivery not configured, skipping");
        return;
    };

    if let Err(err) = client.send_results(to_email, to_name, result).await {
        tracing::warn!(email = to_email, error = %err, "failed to send results email");
    }
}

pub fn render_results_email(name: &str, result: &AssessmentResult) -> String {
    let mut lines = vec![
        format!("Hi {name},"),
        String::new(),
        format!(
            "You scored {} out of 100 on the LaunchPath Academy career assessment.",
            result.final_score
        ),
        String::new(),
    ];

    if result.is_bridge() {
        lines.push(
            "You're at the start of your journey. These entry roles are a great first step:"
                .to_string(),
        );
    } else {
        lines.push("Based on your score, these roles are within reach:".to_string());
    }

    for title in result.matched_titles() {
        lines.push(format!("- {title}"));
    }

    lines.push(String::new());
    lines.push("An advisor will reach out with next steps.".to_string());
    lines.push("The LaunchPath Academy team".to_string());
    lines.join("\n")
}
