//! Task list queries: filtering, sorting, and progress derivation.
//!
//! Pure over the slices they are handed; the task board recomputes these on
//! every snapshot change instead of storing filtered copies.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::types::{GlobalTask, GlobalTaskStatus, Opportunity, OpportunityTask, OpportunityTaskStatus};
use crate::util::day_of;

/// Due-date sort direction for the task board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DueDateOrder {
    #[default]
    Ascending,
    Descending,
}

/// Typed filter record for the team task board. `None` fields match
/// everything; `search` is a case-insensitive substring over title and
/// description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalTaskQuery {
    pub status: Option<GlobalTaskStatus>,
    pub assignee: Option<String>,
    pub search: Option<String>,
    pub due_date_order: DueDateOrder,
}

/// Filter and sort the team task list for display.
///
/// Tasks whose due dates do not parse sort after every dated task, in both
/// directions.
pub fn filter_global_tasks(tasks: &[GlobalTask], query: &GlobalTaskQuery) -> Vec<GlobalTask> {
    let needle = query.search.as_deref().map(str::to_lowercase);

    let mut result: Vec<GlobalTask> = tasks
        .iter()
        .filter(|task| {
            let matches_status = query.status.is_none_or(|s| task.status == s);
            let matches_assignee = query
                .assignee
                .as_deref()
                .is_none_or(|a| task.assigned_to == a);
            let matches_search = needle.as_deref().is_none_or(|needle| {
                task.title.to_lowercase().contains(needle)
                    || task.description.to_lowercase().contains(needle)
            });
            matches_status && matches_assignee && matches_search
        })
        .cloned()
        .collect();

    result.sort_by(|a, b| {
        match (day_of(&a.due_date), day_of(&b.due_date)) {
            (Some(da), Some(db)) => match query.due_date_order {
                DueDateOrder::Ascending => da.cmp(&db),
                DueDateOrder::Descending => db.cmp(&da),
            },
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });

    result
}

/// Distinct assignee names across the task list, sorted. Backs the assignee
/// filter dropdown.
pub fn assignees(tasks: &[GlobalTask]) -> Vec<String> {
    let mut names: Vec<String> = tasks.iter().map(|t| t.assigned_to.clone()).collect();
    names.sort();
    names.dedup();
    names
}

/// `(done, total)` over an opportunity's owned tasks.
pub fn task_progress(opportunity: &Opportunity) -> (usize, usize) {
    let done = opportunity
        .tasks
        .iter()
        .filter(|t| t.status == OpportunityTaskStatus::Done)
        .count();
    (done, opportunity.tasks.len())
}

/// An opportunity's tasks, optionally narrowed to one status.
pub fn filter_opportunity_tasks(
    opportunity: &Opportunity,
    status: Option<OpportunityTaskStatus>,
) -> Vec<&OpportunityTask> {
    opportunity
        .tasks
        .iter()
        .filter(|t| status.is_none_or(|s| t.status == s))
        .collect()
}
