//! Prompt templates and their rendering context.

use super::{StatusSummaryError, SummaryConfig};
use crate::production::domain::{Project, Task};
use minijinja::Environment;
use serde_json::{Map, Value};

/// Built-in template for status summaries.
pub const DEFAULT_STATUS_TEMPLATE: &str = "\
You are the production coordinator of a media studio. Write a two or three \
sentence status update for the project \"{{ title }}\".
Stage: {{ stage }} ({{ progress }}% complete). Priority: {{ priority }}.
{% if open_tasks %}Open tasks for this stage:
{% for task in open_tasks %}- {{ task }}
{% endfor %}{% else %}No open tasks for this stage.
{% endif %}{% if completed_tasks %}Completed this stage:
{% for task in completed_tasks %}- {{ task }}
{% endfor %}{% endif %}\
{% if not next_stage %}The project has been released.\
{% elif eligible %}The project is ready to move to {{ next_stage }}.\
{% else %}Next stage: {{ next_stage }}.{% endif %}";

/// Built-in template for task suggestions.
pub const DEFAULT_SUGGESTION_TEMPLATE: &str = "\
You are the production coordinator of a media studio. Suggest up to \
{{ max_suggestions }} concrete tasks for the {{ stage }} stage of the project \
\"{{ title }}\". Reply with one task title per line and nothing else.
{% if existing_tasks %}Tasks already planned for this stage:
{% for task in existing_tasks %}- {{ task }}
{% endfor %}{% endif %}";

/// Which prompt is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Status summary prompt.
    Status,
    /// Task suggestion prompt.
    Suggestions,
}

impl PromptKind {
    /// Returns the prompt name used in errors and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Suggestions => "suggestions",
        }
    }

    fn template(self, config: &SummaryConfig) -> &str {
        let configured = match self {
            Self::Status => config.status_template.as_deref(),
            Self::Suggestions => config.suggestion_template.as_deref(),
        };
        configured.unwrap_or(match self {
            Self::Status => DEFAULT_STATUS_TEMPLATE,
            Self::Suggestions => DEFAULT_SUGGESTION_TEMPLATE,
        })
    }
}

/// Builds the template context describing a project and its current-stage
/// work.
#[must_use]
pub fn build_prompt_context(
    project: &Project,
    tasks: &[Task],
    config: &SummaryConfig,
) -> Map<String, Value> {
    let eligibility = project.eligibility(tasks);
    let (completed, open): (Vec<&Task>, Vec<&Task>) = tasks
        .iter()
        .filter(|task| task.is_active_for(project))
        .partition(|task| task.is_completed());

    let mut context = Map::new();
    context.insert("title".to_owned(), Value::from(project.title()));
    context.insert("stage".to_owned(), Value::from(project.stage().label()));
    context.insert("progress".to_owned(), Value::from(project.progress().value()));
    context.insert("priority".to_owned(), Value::from(project.priority().as_str()));
    context.insert(
        "next_stage".to_owned(),
        eligibility
            .next_stage
            .map_or(Value::Null, |stage| Value::from(stage.label())),
    );
    context.insert("eligible".to_owned(), Value::from(eligibility.is_eligible()));
    context.insert("open_tasks".to_owned(), titles(&open));
    context.insert("completed_tasks".to_owned(), titles(&completed));
    context.insert(
        "existing_tasks".to_owned(),
        titles(&completed.iter().chain(&open).copied().collect::<Vec<_>>()),
    );
    context.insert(
        "max_suggestions".to_owned(),
        Value::from(config.max_suggestions),
    );
    context
}

/// Renders a prompt for `project`.
///
/// # Errors
///
/// Returns [`StatusSummaryError::TemplateRender`] when the template is
/// malformed.
pub fn render_prompt(
    kind: PromptKind,
    project: &Project,
    tasks: &[Task],
    config: &SummaryConfig,
) -> Result<String, StatusSummaryError> {
    let environment = Environment::new();
    let context = build_prompt_context(project, tasks, config);
    environment
        .render_str(kind.template(config), context)
        .map_err(|error| StatusSummaryError::TemplateRender {
            kind: kind.as_str(),
            reason: error.to_string(),
        })
}

fn titles(tasks: &[&Task]) -> Value {
    Value::Array(
        tasks
            .iter()
            .map(|task| Value::from(task.title()))
            .collect(),
    )
}
