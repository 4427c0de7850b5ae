//! Advancement gating derived from stage-scoped task completion.

use super::{Project, Stage, Task};
use serde::{Deserialize, Serialize};

/// Snapshot of whether a project may leave its current stage.
///
/// Only the project's own tasks scoped to its current stage are counted;
/// work from past or future stages, or from other projects, never affects
/// gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvanceEligibility {
    /// Stage the project is currently in.
    pub stage: Stage,
    /// Stage an advance would move to, `None` when released.
    pub next_stage: Option<Stage>,
    /// Number of tasks scoped to the current stage.
    pub total: usize,
    /// Number of those tasks that are completed.
    pub completed: usize,
}

impl AdvanceEligibility {
    /// Evaluates gating for `project` against a slice of tasks.
    #[must_use]
    pub fn evaluate(project: &Project, tasks: &[Task]) -> Self {
        let stage = project.stage();
        let (total, completed) = tasks
            .iter()
            .filter(|task| task.is_active_for(project))
            .fold((0, 0), |(total, completed), task| {
                (total + 1, completed + usize::from(task.is_completed()))
            });
        Self {
            stage,
            next_stage: stage.next(),
            total,
            completed,
        }
    }

    /// Returns `true` when at least one current-stage task exists and all of
    /// them are completed.
    ///
    /// An empty stage is never eligible, so stages cannot be skipped by
    /// defining no work.
    #[must_use]
    pub const fn is_eligible(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }

    /// Returns `true` when the project is eligible and has somewhere to go.
    #[must_use]
    pub const fn can_advance(&self) -> bool {
        self.is_eligible() && self.next_stage.is_some()
    }

    /// Returns the number of current-stage tasks still open.
    #[must_use]
    pub const fn open(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }
}
