//! The entity store: exclusive owner of all back-office collections.
//!
//! Every mutation is an atomic whole-collection replacement — the matched
//! record is rebuilt with the new field, all others are carried over
//! untouched, and the collection is swapped in one assignment. Derivations
//! ([`crate::availability`], [`crate::pipeline`], [`crate::reports`],
//! [`crate::tasks`]) read snapshots through the accessors and hold no state
//! of their own.
//!
//! Identity strings are generated here and only here; a prefix plus a random
//! numeric suffix (`OPP-4821`). Consumers never mint their own ids.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::types::{
    Customer, GlobalTask, GlobalTaskStatus, Instructor, Opportunity, OpportunityStatus,
    OpportunityTask, OpportunityTaskStatus, TaskPriority, TrainingEvent, TrainingEventStatus,
};
use crate::util::entity_id;

/// Form input for a new customer record.
#[derive(Debug, Clone, Default)]
pub struct NewCustomer {
    pub name: String,
    pub contact_person: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: String,
    pub billing_info: String,
    pub sector: String,
    pub employee_count: u32,
}

/// Form input for a new opportunity. `customer_name` is denormalized from
/// the referenced customer at creation; new deals enter the pipeline at
/// [`OpportunityStatus::New`].
#[derive(Debug, Clone, Default)]
pub struct NewOpportunity {
    pub customer_id: String,
    pub training_type: String,
    pub description: String,
    pub requested_dates: Vec<String>,
    pub amount: Option<f64>,
}

/// Form input for a new training event. Events start out
/// [`TrainingEventStatus::Scheduled`].
#[derive(Debug, Clone, Default)]
pub struct NewTrainingEvent {
    /// Originating opportunity; may be empty for standalone sessions.
    pub opportunity_id: String,
    pub instructor_name: String,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
}

/// Form input for a new roster instructor.
#[derive(Debug, Clone, Default)]
pub struct NewInstructor {
    pub name: String,
    pub specialty: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Form input for a new team task. New tasks start out
/// [`GlobalTaskStatus::Pending`].
#[derive(Debug, Clone)]
pub struct NewGlobalTask {
    pub title: String,
    pub description: String,
    pub assigned_to: String,
    pub assigned_by: String,
    pub due_date: String,
    pub priority: TaskPriority,
}

/// Serializable image of the full store contents. Used for seed fixtures and
/// for handing a consistent copy of everything to a consumer at once.
///
/// Unknown keys are rejected: a misspelled collection name in a fixture
/// would otherwise read back as a silently empty collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Snapshot {
    pub customers: Vec<Customer>,
    pub opportunities: Vec<Opportunity>,
    pub events: Vec<TrainingEvent>,
    pub instructors: Vec<Instructor>,
    pub global_tasks: Vec<GlobalTask>,
    pub training_types: Vec<String>,
}

/// Exclusive owner of the back-office collections.
#[derive(Debug, Default)]
pub struct Store {
    customers: Vec<Customer>,
    opportunities: Vec<Opportunity>,
    events: Vec<TrainingEvent>,
    instructors: Vec<Instructor>,
    global_tasks: Vec<GlobalTask>,
    training_types: Vec<String>,
}

fn required(value: &str, field: &'static str) -> Result<(), StoreError> {
    if value.trim().is_empty() {
        return Err(StoreError::MissingField { field });
    }
    Ok(())
}

fn now_iso() -> String {
    Utc::now().to_rfc3339()
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from a snapshot, e.g. the embedded seed fixture.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            customers: snapshot.customers,
            opportunities: snapshot.opportunities,
            events: snapshot.events,
            instructors: snapshot.instructors,
            global_tasks: snapshot.global_tasks,
            training_types: snapshot.training_types,
        }
    }

    /// Copy out the full current contents.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            customers: self.customers.clone(),
            opportunities: self.opportunities.clone(),
            events: self.events.clone(),
            instructors: self.instructors.clone(),
            global_tasks: self.global_tasks.clone(),
            training_types: self.training_types.clone(),
        }
    }

    // ---- accessors ----

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn opportunities(&self) -> &[Opportunity] {
        &self.opportunities
    }

    pub fn events(&self) -> &[TrainingEvent] {
        &self.events
    }

    pub fn instructors(&self) -> &[Instructor] {
        &self.instructors
    }

    pub fn global_tasks(&self) -> &[GlobalTask] {
        &self.global_tasks
    }

    /// Configurable training-type labels offered by the opportunity form.
    pub fn training_types(&self) -> &[String] {
        &self.training_types
    }

    pub fn customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    pub fn opportunity(&self, id: &str) -> Option<&Opportunity> {
        self.opportunities.iter().find(|o| o.id == id)
    }

    pub fn instructor(&self, id: &str) -> Option<&Instructor> {
        self.instructors.iter().find(|i| i.id == id)
    }

    // ---- add operations ----

    /// Append a new customer; returns the generated id.
    pub fn add_customer(&mut self, input: NewCustomer) -> Result<String, StoreError> {
        required(&input.name, "customer name")?;
        let id = entity_id("CUS");
        log::debug!("adding customer {} ({})", id, input.name);
        self.customers.push(Customer {
            id: id.clone(),
            name: input.name,
            contact_person: input.contact_person,
            email: input.email,
            phone: input.phone,
            address: input.address,
            billing_info: input.billing_info,
            sector: input.sector,
            employee_count: input.employee_count,
            created_at: now_iso(),
        });
        Ok(id)
    }

    /// Append a new opportunity for an existing customer; returns the
    /// generated id.
    pub fn add_opportunity(&mut self, input: NewOpportunity) -> Result<String, StoreError> {
        required(&input.training_type, "training type")?;
        let customer = self
            .customer(&input.customer_id)
            .ok_or_else(|| StoreError::not_found("customer", &input.customer_id))?;
        let customer_name = customer.name.clone();

        let id = entity_id("OPP");
        log::debug!("adding opportunity {} for customer {}", id, customer_name);
        self.opportunities.push(Opportunity {
            id: id.clone(),
            customer_id: input.customer_id,
            customer_name,
            status: OpportunityStatus::New,
            training_type: input.training_type,
            description: input.description,
            requested_dates: input.requested_dates,
            amount: input.amount,
            tasks: Vec::new(),
            created_at: now_iso(),
        });
        Ok(id)
    }

    /// Append a new training event; returns the generated id.
    pub fn add_event(&mut self, input: NewTrainingEvent) -> Result<String, StoreError> {
        required(&input.title, "event title")?;
        required(&input.instructor_name, "instructor")?;
        let id = entity_id("EVT");
        log::debug!("adding event {} ({})", id, input.title);
        self.events.push(TrainingEvent {
            id: id.clone(),
            opportunity_id: input.opportunity_id,
            instructor_name: input.instructor_name,
            title: input.title,
            start_date: input.start_date,
            end_date: input.end_date,
            status: TrainingEventStatus::Scheduled,
        });
        Ok(id)
    }

    /// Append a new instructor to the roster; returns the generated id.
    pub fn add_instructor(&mut self, input: NewInstructor) -> Result<String, StoreError> {
        required(&input.name, "instructor name")?;
        let id = entity_id("INS");
        log::debug!("adding instructor {} ({})", id, input.name);
        self.instructors.push(Instructor {
            id: id.clone(),
            name: input.name,
            specialty: input.specialty,
            is_on_leave: false,
            email: input.email,
            phone: input.phone,
        });
        Ok(id)
    }

    /// Append a new team task; returns the generated id.
    pub fn add_global_task(&mut self, input: NewGlobalTask) -> Result<String, StoreError> {
        required(&input.title, "task title")?;
        required(&input.due_date, "due date")?;
        let id = entity_id("GT");
        log::debug!("adding team task {} ({})", id, input.title);
        self.global_tasks.push(GlobalTask {
            id: id.clone(),
            title: input.title,
            description: input.description,
            assigned_to: input.assigned_to,
            assigned_by: input.assigned_by,
            due_date: input.due_date,
            status: GlobalTaskStatus::Pending,
            priority: input.priority,
            created_at: now_iso(),
        });
        Ok(id)
    }

    // ---- targeted updates ----

    /// Replace an opportunity's pipeline status. Unconditional: any status in
    /// the enumeration is accepted, including backward moves, stage skips,
    /// and Lost. Forward monotonicity is deliberately not enforced.
    pub fn set_opportunity_status(
        &mut self,
        id: &str,
        status: OpportunityStatus,
    ) -> Result<(), StoreError> {
        self.replace_opportunity(id, |opp| Opportunity { status, ..opp })
    }

    /// Replace an opportunity's requested-dates list wholesale.
    pub fn set_opportunity_requested_dates(
        &mut self,
        id: &str,
        dates: Vec<String>,
    ) -> Result<(), StoreError> {
        self.replace_opportunity(id, |opp| Opportunity {
            requested_dates: dates,
            ..opp
        })
    }

    /// Append a task to an opportunity's owned list; returns the generated
    /// task id.
    pub fn add_opportunity_task(
        &mut self,
        opportunity_id: &str,
        text: &str,
        due_date: &str,
    ) -> Result<String, StoreError> {
        required(text, "task text")?;
        let task_id = entity_id("TSK");
        let task = OpportunityTask {
            id: task_id.clone(),
            text: text.to_string(),
            due_date: due_date.to_string(),
            status: OpportunityTaskStatus::Todo,
        };
        self.replace_opportunity(opportunity_id, move |opp| {
            let mut tasks = opp.tasks.clone();
            tasks.push(task);
            Opportunity { tasks, ..opp }
        })?;
        Ok(task_id)
    }

    /// Replace the status of one task inside one opportunity.
    pub fn set_opportunity_task_status(
        &mut self,
        opportunity_id: &str,
        task_id: &str,
        status: OpportunityTaskStatus,
    ) -> Result<(), StoreError> {
        let exists = self
            .opportunity(opportunity_id)
            .ok_or_else(|| StoreError::not_found("opportunity", opportunity_id))?
            .tasks
            .iter()
            .any(|t| t.id == task_id);
        if !exists {
            return Err(StoreError::not_found("task", task_id));
        }
        self.replace_opportunity(opportunity_id, |opp| {
            let tasks = opp
                .tasks
                .iter()
                .map(|t| {
                    if t.id == task_id {
                        OpportunityTask {
                            status,
                            ..t.clone()
                        }
                    } else {
                        t.clone()
                    }
                })
                .collect();
            Opportunity { tasks, ..opp }
        })
    }

    /// Replace a team task's status.
    pub fn set_global_task_status(
        &mut self,
        id: &str,
        status: GlobalTaskStatus,
    ) -> Result<(), StoreError> {
        if !self.global_tasks.iter().any(|t| t.id == id) {
            return Err(StoreError::not_found("task", id));
        }
        self.global_tasks = std::mem::take(&mut self.global_tasks)
            .into_iter()
            .map(|t| {
                if t.id == id {
                    GlobalTask { status, ..t }
                } else {
                    t
                }
            })
            .collect();
        Ok(())
    }

    /// Flip an instructor's leave flag.
    pub fn toggle_instructor_leave(&mut self, id: &str) -> Result<(), StoreError> {
        if !self.instructors.iter().any(|i| i.id == id) {
            return Err(StoreError::not_found("instructor", id));
        }
        self.instructors = std::mem::take(&mut self.instructors)
            .into_iter()
            .map(|i| {
                if i.id == id {
                    log::debug!("instructor {} leave -> {}", i.id, !i.is_on_leave);
                    Instructor {
                        is_on_leave: !i.is_on_leave,
                        ..i
                    }
                } else {
                    i
                }
            })
            .collect();
        Ok(())
    }

    // ---- training-type labels ----

    pub fn add_training_type(&mut self, label: &str) -> Result<(), StoreError> {
        let label = label.trim();
        required(label, "training type")?;
        if self.training_types.iter().any(|t| t == label) {
            return Err(StoreError::Duplicate {
                kind: "training type",
                value: label.to_string(),
            });
        }
        self.training_types.push(label.to_string());
        Ok(())
    }

    pub fn remove_training_type(&mut self, label: &str) -> Result<(), StoreError> {
        if !self.training_types.iter().any(|t| t == label) {
            return Err(StoreError::not_found("training type", label));
        }
        self.training_types.retain(|t| t != label);
        Ok(())
    }

    /// Rebuild the opportunity collection with `f` applied to the matched
    /// record, everything else carried over untouched. Should two records
    /// ever share an id (the suffixes are random, not unique), only the
    /// first is transformed.
    fn replace_opportunity(
        &mut self,
        id: &str,
        f: impl FnOnce(Opportunity) -> Opportunity,
    ) -> Result<(), StoreError> {
        if !self.opportunities.iter().any(|o| o.id == id) {
            return Err(StoreError::not_found("opportunity", id));
        }
        let old = std::mem::take(&mut self.opportunities);
        let mut rebuilt = Vec::with_capacity(old.len());
        let mut f = Some(f);
        for opp in old {
            if opp.id == id {
                if let Some(apply) = f.take() {
                    rebuilt.push(apply(opp));
                    continue;
                }
            }
            rebuilt.push(opp);
        }
        self.opportunities = rebuilt;
        Ok(())
    }
}
