//! Plan generation: free-text goal to normalized [`Plan`].

use std::sync::Arc;

use log::{debug, info};
use serde_json::Value;

use crate::{
    error::GenerationError,
    llm::{CompletionClient, CompletionRequest},
    models::Plan,
};

const PLAN_SYSTEM_PROMPT: &str = r#"You are a Research Architect. Convert the user's goal into a strict JSON configuration for a Reddit search.
Output JSON ONLY. No markdown, no conversational text.
Return a single JSON object with exactly these fields:
{
  "project_name": "Short Name",
  "targets": ["five", "relevant", "subreddit", "names", "without r/"],
  "keywords": ["five", "search", "keywords", "or", "phrases"],
  "instruction": "Specific data extraction goal for the analyst"
}"#;

/// Turns a research goal into a [`Plan`] with one completion call.
pub struct PlanGenerator {
    client: Arc<dyn CompletionClient>,
}

impl PlanGenerator {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Asks `model` for a plan and normalizes whatever shape comes back.
    ///
    /// The returned plan may still lack targets or keywords; execution
    /// rejects such a plan explicitly.
    pub async fn generate(&self, goal: &str, model: &str) -> Result<Plan, GenerationError> {
        let request =
            CompletionRequest::new(model, PLAN_SYSTEM_PROMPT, format!("USER GOAL: {goal}")).json();
        let content = self.client.complete(&request).await?;
        debug!("Plan response: {content}");

        let plan = parse_plan(&content)?;
        info!(
            "Generated plan '{}' with {} targets and {} keywords",
            plan.project_name,
            plan.targets.len(),
            plan.keywords.len()
        );
        Ok(plan)
    }
}

/// Decodes a model response into a plan, tolerating markdown fences.
pub fn parse_plan(content: &str) -> Result<Plan, GenerationError> {
    let value: Value = serde_json::from_str(strip_code_fence(content)).map_err(|e| {
        GenerationError::MalformedResponse {
            reason: e.to_string(),
        }
    })?;
    Ok(Plan::from_raw(&value))
}

/// Removes a surrounding ```` ```json ```` / ```` ``` ```` fence, if any.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string (`json`, `JSON`, ...) on the opening line.
    let body = rest.split_once('\n').map_or(rest, |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}
