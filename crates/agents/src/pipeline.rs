//! Sequential research → organize → generate pipeline.
//!
//! Each stage is one chat call made in the stage agent's persona. A stage's
//! answer becomes the context of the next one; the last answer is the text
//! the outline parser consumes.

use crate::client::PerplexityClient;
use crate::model::{ChatMessage, ChatModel, ChatRequest};
use crate::search::WebSearchTool;
use deck_core::{Config, Error, Result, Stage, TaskSpec};

/// Sampling temperature for agent calls.
pub const AGENT_TEMPERATURE: f32 = 0.1;

/// Output of one stage.
#[derive(Debug, Clone, PartialEq)]
pub struct StageOutput {
    pub stage: Stage,
    pub text: String,
}

/// Everything a run produced, in stage order.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub stages: Vec<StageOutput>,
}

impl PipelineOutput {
    /// Answer of the last stage.
    pub fn final_text(&self) -> &str {
        self.stages.last().map(|s| s.text.as_str()).unwrap_or_default()
    }

    pub fn stage(&self, stage: Stage) -> Option<&str> {
        self.stages
            .iter()
            .find(|s| s.stage == stage)
            .map(|s| s.text.as_str())
    }
}

/// Runs the three stages against a chat model.
pub struct Pipeline<M: ChatModel> {
    model: M,
    model_name: String,
}

impl Pipeline<PerplexityClient> {
    /// Pipeline talking to the configured API.
    pub fn from_config(config: &Config) -> Self {
        Self::new(PerplexityClient::new(config), config.model.clone())
    }
}

impl<M: ChatModel> Pipeline<M> {
    pub fn new(model: M, model_name: impl Into<String>) -> Self {
        Self {
            model,
            model_name: model_name.into(),
        }
    }

    /// Run every stage for `topic`.
    pub fn kickoff(&self, topic: &str) -> Result<PipelineOutput> {
        self.kickoff_with_progress(topic, |_| {})
    }

    /// Run every stage, calling `on_stage` before each one starts.
    pub fn kickoff_with_progress<F>(&self, topic: &str, mut on_stage: F) -> Result<PipelineOutput>
    where
        F: FnMut(Stage),
    {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(Error::PipelineError("Topic cannot be empty".to_string()));
        }

        let mut stages: Vec<StageOutput> = Vec::with_capacity(Stage::ALL.len());

        for stage in Stage::ALL {
            on_stage(stage);
            let task = stage.task(topic);
            let previous = stages.last().map(|s| s.text.as_str());

            let text = self
                .run_task(&task, previous)
                .map_err(|e| Error::PipelineError(format!("{} stage failed: {}", stage.label(), e)))?;

            if text.trim().is_empty() {
                log::warn!("{} stage returned an empty answer", stage.label());
            }
            log::info!("{} stage finished ({} chars)", stage.label(), text.len());

            stages.push(StageOutput { stage, text });
        }

        Ok(PipelineOutput { stages })
    }

    fn run_task(&self, task: &TaskSpec, previous: Option<&str>) -> Result<String> {
        let agent = task.stage.agent();
        log::info!("Starting {} stage as '{}'", task.stage.label(), agent.role);

        let context = if task.stage.uses_search() {
            let tool = WebSearchTool::new(&self.model, self.model_name.as_str());
            let results = tool.run(&task.description)?;
            Some(join_context(previous, &format!("Results from {}:\n{}", tool.name(), results)))
        } else {
            previous.map(str::to_string)
        };

        let request = ChatRequest {
            model: self.model_name.clone(),
            messages: vec![
                ChatMessage::system(agent.system_prompt()),
                ChatMessage::user(task.user_prompt(context.as_deref())),
            ],
            temperature: AGENT_TEMPERATURE,
            max_tokens: None,
        };

        self.model.complete(&request)
    }
}

fn join_context(previous: Option<&str>, extra: &str) -> String {
    match previous {
        Some(previous) if !previous.trim().is_empty() => format!("{}\n\n{}", previous, extra),
        _ => extra.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedModel;
    use deck_core::prompts::SEARCH_SYSTEM_PROMPT;
    use deck_core::ErrorKind;

    fn scripted() -> ScriptedModel {
        ScriptedModel::new(vec![
            "SEARCH RESULTS",
            "RESEARCH REPORT",
            "ORGANIZED OUTLINE",
            "Slide 1: Final\n- deck",
        ])
    }

    #[test]
    fn test_stages_run_in_order() {
        let model = scripted();
        let pipeline = Pipeline::new(&model, "sonar");

        let mut seen = Vec::new();
        let output = pipeline
            .kickoff_with_progress("Tidal Energy", |stage| seen.push(stage))
            .unwrap();

        assert_eq!(seen, Stage::ALL.to_vec());
        assert_eq!(output.stages.len(), 3);
        assert_eq!(output.stage(Stage::Research), Some("RESEARCH REPORT"));
        assert_eq!(output.stage(Stage::Organize), Some("ORGANIZED OUTLINE"));
        assert_eq!(output.final_text(), "Slide 1: Final\n- deck");
    }

    #[test]
    fn test_search_runs_once_before_research() {
        let model = scripted();
        Pipeline::new(&model, "sonar").kickoff("Tidal Energy").unwrap();

        let requests = model.requests();
        assert_eq!(requests.len(), 4);

        let search_calls: Vec<_> = requests
            .iter()
            .filter(|r| r.messages[0].content == SEARCH_SYSTEM_PROMPT)
            .collect();
        assert_eq!(search_calls.len(), 1);
        assert!(requests[0].messages[1].content.contains("Tidal Energy"));

        let research = &requests[1];
        assert!(research.messages[0].content.contains("Senior Research Analyst"));
        assert!(research.messages[1].content.contains("Results from web_search_tool:\nSEARCH RESULTS"));
    }

    #[test]
    fn test_each_stage_gets_previous_output() {
        let model = scripted();
        Pipeline::new(&model, "sonar").kickoff("Tidal Energy").unwrap();

        let requests = model.requests();
        let organize = &requests[2];
        assert!(organize.messages[0].content.contains("Content Strategist and Organizer"));
        assert!(organize.messages[1].content.contains("RESEARCH REPORT"));
        assert!(!organize.messages[1].content.contains("SEARCH RESULTS"));

        let generate = &requests[3];
        assert!(generate.messages[0].content.contains("PowerPoint Presentation Specialist"));
        assert!(generate.messages[1].content.contains("ORGANIZED OUTLINE"));
        assert_eq!(generate.temperature, AGENT_TEMPERATURE);
        assert_eq!(generate.model, "sonar");
    }

    #[test]
    fn test_failure_aborts_run() {
        let model = ScriptedModel::new(vec!["SEARCH RESULTS", "RESEARCH REPORT"]);
        let err = Pipeline::new(&model, "sonar").kickoff("Tidal Energy").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Generation);
        assert!(err.to_string().contains("organize stage failed"));
        assert_eq!(model.requests().len(), 3);
    }

    #[test]
    fn test_empty_topic_makes_no_calls() {
        let model = scripted();
        assert!(Pipeline::new(&model, "sonar").kickoff("   ").is_err());
        assert!(model.requests().is_empty());
    }

    #[test]
    fn test_join_context() {
        assert_eq!(join_context(None, "x"), "x");
        assert_eq!(join_context(Some(" "), "x"), "x");
        assert_eq!(join_context(Some("a"), "x"), "a\n\nx");
    }
}
