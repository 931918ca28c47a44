//! Report synthesis: one completion over the collected corpus.

use std::sync::Arc;

use log::info;

use crate::{
    error::SynthesisError,
    llm::{CompletionClient, CompletionRequest},
    models::{Corpus, Report},
};

/// Steering context for a research report.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    pub project_name: &'a str,
    pub instruction: &'a str,
}

pub struct ReportSynthesizer {
    client: Arc<dyn CompletionClient>,
}

impl ReportSynthesizer {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Writes the research brief for `corpus`.
    ///
    /// Single attempt. The corpus is sent as the user turn unchanged.
    pub async fn synthesize(
        &self,
        corpus: &Corpus,
        context: ReportContext<'_>,
        model: &str,
    ) -> Result<Report, SynthesisError> {
        let system = research_prompt(context);
        info!("Synthesizing report from {} items", corpus.len());
        self.complete(system, corpus, model).await
    }

    /// Writes the daily brief for a digest corpus built from the store.
    pub async fn digest(
        &self,
        corpus: &Corpus,
        project_name: &str,
        model: &str,
    ) -> Result<Report, SynthesisError> {
        let system = digest_prompt(project_name, corpus.len());
        info!("Synthesizing daily digest from {} items", corpus.len());
        self.complete(system, corpus, model).await
    }

    async fn complete(
        &self,
        system: String,
        corpus: &Corpus,
        model: &str,
    ) -> Result<Report, SynthesisError> {
        let request = CompletionRequest::new(model, system, corpus.text());
        self.client
            .complete(&request)
            .await
            .map(Report::new)
            .map_err(|e| SynthesisError::UpstreamFailure {
                message: e.to_string(),
            })
    }
}

fn research_prompt(context: ReportContext<'_>) -> String {
    format!(
        "You are a senior analyst producing a structured markdown brief.
PROJECT: {project}
GOAL: {goal}

TASK:
Write a clear, structured executive brief in Markdown based ONLY on the provided Reddit data.
Use exactly these sections:
## Winners
Products, tools or approaches mentioned positively, with specific names.
## Risks
Complaints, red flags and specific negatives.
## Sentiment
Overall mood, with short quotes of user sentiment.
Use bold, tables and bullet points where they help. Be specific.",
        project = context.project_name,
        goal = context.instruction,
    )
}

fn digest_prompt(project_name: &str, item_count: usize) -> String {
    format!(
        "You are a Strategic Intelligence Analyst.

INPUT DATA:
A list of {item_count} Reddit discussions about {project_name}.
Format: [Engagement Score] r/Subreddit: Title, followed by context.

OBJECTIVE:
Write a \"Daily Market Intelligence Brief\" in Markdown.

STRUCTURE:
1. **Flash Alerts:** Any urgent negative sentiment or scam warnings?
2. **Heat Map:** What is the most discussed topic today?
3. **Vendor Battle:** Compare specific tools mentioned. Who is winning?
4. **Strategic Opportunity:** One actionable recommendation based on today's data."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_research_prompt_names_sections_and_goal() {
        let prompt = research_prompt(ReportContext {
            project_name: "Recruiter Tools",
            instruction: "compare pricing",
        });

        assert!(prompt.contains("senior analyst"));
        assert!(prompt.contains("PROJECT: Recruiter Tools"));
        assert!(prompt.contains("GOAL: compare pricing"));
        for section in ["## Winners", "## Risks", "## Sentiment"] {
            assert!(prompt.contains(section), "missing {section}");
        }
    }

    #[test]
    fn test_digest_prompt_counts_items() {
        let prompt = digest_prompt("Recruiter Tool Watch", 12);
        assert!(prompt.contains("A list of 12 Reddit discussions about Recruiter Tool Watch."));
        assert!(prompt.contains("Flash Alerts"));
    }
}
