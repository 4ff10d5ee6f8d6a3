//! Agent personas and per-stage task prompts.
//!
//! Pure templating: each stage gets a fixed persona and a task description
//! with the topic substituted in.

use serde::{Deserialize, Serialize};

/// The three pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Research,
    Organize,
    Generate,
}

impl Stage {
    /// All stages in the order they run.
    pub const ALL: [Stage; 3] = [Stage::Research, Stage::Organize, Stage::Generate];

    /// Persona of the agent that handles this stage.
    pub fn agent(&self) -> &'static AgentProfile {
        match self {
            Stage::Research => &RESEARCHER,
            Stage::Organize => &CONTENT_ORGANIZER,
            Stage::Generate => &SLIDE_GENERATOR,
        }
    }

    /// Whether the stage's agent may call the web search tool.
    pub fn uses_search(&self) -> bool {
        matches!(self, Stage::Research)
    }

    /// Build the task for this stage.
    pub fn task(&self, topic: &str) -> TaskSpec {
        match self {
            Stage::Research => research_task(topic),
            Stage::Organize => organize_task(topic),
            Stage::Generate => generation_task(topic),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Research => "research",
            Stage::Organize => "organize",
            Stage::Generate => "generate",
        }
    }
}

/// An agent persona: who the model should act as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentProfile {
    pub role: &'static str,
    pub goal: &'static str,
    pub backstory: &'static str,
}

impl AgentProfile {
    /// System prompt introducing the persona.
    pub fn system_prompt(&self) -> String {
        format!(
            "You are {}. {}\nYour personal goal is: {}",
            self.role, self.backstory, self.goal
        )
    }
}

pub static RESEARCHER: AgentProfile = AgentProfile {
    role: "Senior Research Analyst",
    goal: "Gather comprehensive, accurate, and up-to-date information on the given topic",
    backstory: "You are an expert research analyst with years of experience in gathering \
and synthesizing information from various sources. You have a keen eye for detail \
and always ensure the information you provide is accurate, relevant, and current.",
};

pub static CONTENT_ORGANIZER: AgentProfile = AgentProfile {
    role: "Content Strategist and Organizer",
    goal: "Structure research findings into a coherent presentation outline with clear sections",
    backstory: "You are a skilled content strategist who excels at organizing complex \
information into clear, logical structures. You have a talent for identifying key \
points and creating compelling narratives that engage audiences.",
};

pub static SLIDE_GENERATOR: AgentProfile = AgentProfile {
    role: "PowerPoint Presentation Specialist",
    goal: "Transform structured content into a well-formatted PowerPoint presentation",
    backstory: "You are an expert in creating professional PowerPoint presentations. \
You have a keen eye for design and know how to present information in a visually \
appealing and effective manner. You understand how to balance text and visuals \
to create engaging slides.",
};

/// System prompt used by the web search tool.
pub const SEARCH_SYSTEM_PROMPT: &str =
    "You are an expert researcher. Provide comprehensive, accurate information with sources.";

/// One unit of work for a stage's agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSpec {
    pub stage: Stage,
    pub description: String,
    pub expected_output: &'static str,
}

impl TaskSpec {
    /// User prompt for this task, with the previous stage's output as context.
    pub fn user_prompt(&self, context: Option<&str>) -> String {
        let mut prompt = String::new();
        prompt.push_str(&self.description);
        prompt.push_str("\n\nThis is the expected criteria for your final answer: ");
        prompt.push_str(self.expected_output);
        prompt.push_str("\nYou MUST return the actual complete content as the final answer, not a summary.");

        if let Some(context) = context.filter(|c| !c.trim().is_empty()) {
            prompt.push_str("\n\nThis is the context you're working with:\n");
            prompt.push_str(context);
        }

        prompt.push_str("\n\nBegin! This is VERY important to you, use the tools available and give your best Final Answer, your job depends on it!");
        prompt
    }
}

pub fn research_task(topic: &str) -> TaskSpec {
    TaskSpec {
        stage: Stage::Research,
        description: format!(
            "Conduct comprehensive research on the topic: {topic}

Gather information from reliable sources including:
- Latest trends and developments
- Key facts and statistics
- Important stakeholders or influencers
- Current challenges and opportunities
- Future projections or forecasts

Ensure the information is up-to-date, accurate, and comprehensive."
        ),
        expected_output: "A detailed research report with all relevant information about the topic, \
including sources where appropriate.",
    }
}

pub fn organize_task(topic: &str) -> TaskSpec {
    TaskSpec {
        stage: Stage::Organize,
        description: format!(
            "Organize the research findings about {topic} into a structured presentation outline.

The presentation should follow this structure:
1. Title Slide: Engaging title and subtitle
2. Overview/Introduction: Context and importance of the topic
3. Key Points/Trends/Arguments: 3-4 slides with main content
4. Conclusion/Takeaways: Summary and implications

Ensure the content flows logically and highlights the most important information."
        ),
        expected_output: "A structured outline for a PowerPoint presentation with clear sections \
and bullet points for each slide.",
    }
}

pub fn generation_task(topic: &str) -> TaskSpec {
    TaskSpec {
        stage: Stage::Generate,
        description: format!(
            "Create a PowerPoint presentation on {topic} based on the provided structured content.

Create a professional presentation with:
- A title slide with an engaging title and subtitle
- An overview slide introducing the topic
- 3-4 content slides with key points, trends, or arguments
- A conclusion slide with takeaways

Format each slide with appropriate titles and bullet points.
Write every slide as a line 'Slide N: <title>' followed by one line per bullet point starting with '- '.
The first slide's first bullet is used as the subtitle."
        ),
        expected_output: "The complete slide-by-slide content of the presentation, each slide written as \
'Slide N: <title>' followed by '- ' bullet lines.",
    }
}
