//! Entity records and status enumerations.
//!
//! Every record is a plain clonable value: mutations go through the store,
//! which replaces the matched record (or the owning collection) wholesale
//! rather than mutating in place. Status enums are string-valued on the wire;
//! the serialized names are load-bearing for equality-based filtering and
//! must not change.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sales pipeline status of an opportunity.
///
/// `New` through `Won` form the ordered forward sequence (see
/// [`crate::pipeline::STAGES`]); `Lost` is terminal and sits outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpportunityStatus {
    New,
    Discovery,
    Proposal,
    Negotiation,
    Won,
    Lost,
}

impl fmt::Display for OpportunityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OpportunityStatus::New => "New",
            OpportunityStatus::Discovery => "Discovery",
            OpportunityStatus::Proposal => "Proposal",
            OpportunityStatus::Negotiation => "Negotiation",
            OpportunityStatus::Won => "Won",
            OpportunityStatus::Lost => "Lost",
        })
    }
}

/// Status of a task owned by an opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpportunityTaskStatus {
    Todo,
    InProgress,
    Done,
}

impl fmt::Display for OpportunityTaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OpportunityTaskStatus::Todo => "Todo",
            OpportunityTaskStatus::InProgress => "InProgress",
            OpportunityTaskStatus::Done => "Done",
        })
    }
}

/// Status of a top-level team task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlobalTaskStatus {
    Pending,
    Completed,
}

impl fmt::Display for GlobalTaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GlobalTaskStatus::Pending => "Pending",
            GlobalTaskStatus::Completed => "Completed",
        })
    }
}

/// Priority of a top-level team task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
        })
    }
}

/// Status of a scheduled training event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainingEventStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl fmt::Display for TrainingEventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TrainingEventStatus::Scheduled => "Scheduled",
            TrainingEventStatus::Completed => "Completed",
            TrainingEventStatus::Cancelled => "Cancelled",
        })
    }
}

/// A customer account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub contact_person: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub address: String,
    pub billing_info: String,
    pub sector: String,
    pub employee_count: u32,
    pub created_at: String,
}

/// An instructor on the teaching roster.
///
/// `is_on_leave` is a manual toggle and takes precedence over any scheduled
/// event when availability is resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub is_on_leave: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A scheduled (or past) instructor-led session.
///
/// `instructor_name` is a denormalized display string, not a foreign key:
/// availability matching is exact string equality against the roster. Two
/// instructors sharing a display name would collide (see DESIGN.md).
/// `start_date`/`end_date` carry time-of-day, but availability only consults
/// the calendar-day component; the event occupies every day of the inclusive
/// range.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingEvent {
    pub id: String,
    /// Originating opportunity, if any. Loose linkage; may be empty.
    #[serde(default)]
    pub opportunity_id: String,
    pub instructor_name: String,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub status: TrainingEventStatus,
}

/// A task owned by an opportunity. Cannot exist independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityTask {
    pub id: String,
    pub text: String,
    pub due_date: String,
    pub status: OpportunityTaskStatus,
}

/// A tracked sales deal for a training engagement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: String,
    pub customer_id: String,
    /// Denormalized from the customer record at creation time.
    pub customer_name: String,
    pub status: OpportunityStatus,
    pub training_type: String,
    pub description: String,
    /// Requested (not yet confirmed) dates, `YYYY-MM-DD`.
    #[serde(default)]
    pub requested_dates: Vec<String>,
    /// Absent amount is treated as zero in revenue sums, never as an error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default)]
    pub tasks: Vec<OpportunityTask>,
    pub created_at: String,
}

/// An independent top-level team task, not owned by any other entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalTask {
    pub id: String,
    pub title: String,
    pub description: String,
    pub assigned_to: String,
    pub assigned_by: String,
    pub due_date: String,
    pub status: GlobalTaskStatus,
    pub priority: TaskPriority,
    pub created_at: String,
}
