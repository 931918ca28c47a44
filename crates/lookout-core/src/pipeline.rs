//! End-to-end research run: goal → plan → corpus → report.

use std::sync::Arc;

use log::{info, warn};

use crate::{
    config::SearchConfig,
    error::{ExecutionError, Result},
    executor::SearchExecutor,
    generator::PlanGenerator,
    llm::CompletionClient,
    models::{Corpus, Plan, Report},
    search::SearchSource,
    synthesizer::{ReportContext, ReportSynthesizer},
};

/// What a completed research run produced.
#[derive(Debug)]
pub struct ResearchOutcome {
    pub plan: Plan,
    pub corpus: Corpus,
    pub report: Report,
    /// Targets that were skipped during the scan
    pub failures: Vec<ExecutionError>,
}

/// Wires the generator, executor and synthesizer around two external
/// clients.
pub struct ResearchPipeline {
    generator: PlanGenerator,
    executor: SearchExecutor,
    synthesizer: ReportSynthesizer,
}

impl ResearchPipeline {
    pub fn new(completion: Arc<dyn CompletionClient>, search: Arc<dyn SearchSource>) -> Self {
        Self {
            generator: PlanGenerator::new(Arc::clone(&completion)),
            executor: SearchExecutor::new(search),
            synthesizer: ReportSynthesizer::new(completion),
        }
    }

    pub async fn generate_plan(&self, goal: &str, model: &str) -> Result<Plan> {
        Ok(self.generator.generate(goal, model).await?)
    }

    /// Executes an existing (possibly user-edited) plan and writes the report.
    pub async fn run(&self, plan: Plan, config: &SearchConfig, model: &str) -> Result<ResearchOutcome> {
        info!("Running research '{}'", plan.project_name);
        let collection = self.executor.collect(&plan, config).await?;
        if !collection.failures.is_empty() {
            warn!(
                "{} of {} targets were skipped",
                collection.failures.len(),
                plan.targets.len()
            );
        }
        let corpus = collection.corpus(config.corpus_cap)?;

        let context = ReportContext {
            project_name: &plan.project_name,
            instruction: &plan.instruction,
        };
        let report = self.synthesizer.synthesize(&corpus, context, model).await?;

        Ok(ResearchOutcome {
            plan,
            corpus,
            report,
            failures: collection.failures,
        })
    }

    /// Generates a plan for `goal` and runs it.
    pub async fn research(
        &self,
        goal: &str,
        config: &SearchConfig,
        model: &str,
    ) -> Result<ResearchOutcome> {
        let plan = self.generate_plan(goal, model).await?;
        self.run(plan, config, model).await
    }
}
