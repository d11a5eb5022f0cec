//! Derived dashboard and customer summaries.
//!
//! Everything here is recomputed from the current snapshot on demand; none
//! of it is stored.

use serde::{Deserialize, Serialize};

use crate::pipeline::STAGES;
use crate::store::Store;
use crate::types::{
    Customer, GlobalTask, GlobalTaskStatus, Opportunity, OpportunityStatus, TrainingEventStatus,
};

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub customers: usize,
    /// Opportunities still in play (neither Won nor Lost).
    pub open_opportunities: usize,
    pub won_revenue: f64,
    pub pending_tasks: usize,
    pub scheduled_events: usize,
}

/// One customer's sales picture for the detail screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub opportunities: Vec<Opportunity>,
    pub won_revenue: f64,
}

/// Total revenue from won deals. Opportunities without an amount count as
/// zero.
pub fn won_revenue(opportunities: &[Opportunity]) -> f64 {
    opportunities
        .iter()
        .filter(|o| o.status == OpportunityStatus::Won)
        .map(|o| o.amount.unwrap_or(0.0))
        .sum()
}

/// Opportunity count per forward pipeline stage, in stage order. Backs the
/// dashboard funnel chart; Lost deals do not appear.
pub fn pipeline_breakdown(opportunities: &[Opportunity]) -> Vec<(OpportunityStatus, usize)> {
    STAGES
        .iter()
        .map(|stage| {
            let count = opportunities.iter().filter(|o| o.status == *stage).count();
            (*stage, count)
        })
        .collect()
}

/// Headline dashboard numbers for the current snapshot.
pub fn dashboard_stats(store: &Store) -> DashboardStats {
    let open_opportunities = store
        .opportunities()
        .iter()
        .filter(|o| {
            !matches!(
                o.status,
                OpportunityStatus::Won | OpportunityStatus::Lost
            )
        })
        .count();
    let pending_tasks = store
        .global_tasks()
        .iter()
        .filter(|t| t.status == GlobalTaskStatus::Pending)
        .count();
    let scheduled_events = store
        .events()
        .iter()
        .filter(|e| e.status == TrainingEventStatus::Scheduled)
        .count();

    DashboardStats {
        customers: store.customers().len(),
        open_opportunities,
        won_revenue: won_revenue(store.opportunities()),
        pending_tasks,
        scheduled_events,
    }
}

/// The next few pending team tasks for the dashboard preview card.
pub fn pending_task_preview(tasks: &[GlobalTask], limit: usize) -> Vec<&GlobalTask> {
    tasks
        .iter()
        .filter(|t| t.status == GlobalTaskStatus::Pending)
        .take(limit)
        .collect()
}

/// Customers matching a case-insensitive substring over name, contact
/// person, and sector. Backs the customer list's search box; an empty query
/// matches everyone.
pub fn search_customers<'a>(customers: &'a [Customer], query: &str) -> Vec<&'a Customer> {
    let needle = query.to_lowercase();
    customers
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle)
                || c.contact_person.to_lowercase().contains(&needle)
                || c.sector.to_lowercase().contains(&needle)
        })
        .collect()
}

/// A customer's opportunities and the revenue already won from them.
pub fn customer_summary(customer_id: &str, opportunities: &[Opportunity]) -> CustomerSummary {
    let owned: Vec<Opportunity> = opportunities
        .iter()
        .filter(|o| o.customer_id == customer_id)
        .cloned()
        .collect();
    let won_revenue = won_revenue(&owned);
    CustomerSummary {
        opportunities: owned,
        won_revenue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opportunity(customer_id: &str, status: OpportunityStatus, amount: Option<f64>) -> Opportunity {
        Opportunity {
            id: crate::util::entity_id("OPP"),
            customer_id: customer_id.to_string(),
            customer_name: "Customer".to_string(),
            status,
            training_type: "Technical Skills".to_string(),
            description: String::new(),
            requested_dates: vec![],
            amount,
            tasks: vec![],
            created_at: "2024-06-01T08:00:00Z".to_string(),
        }
    }

    #[test]
    fn won_revenue_treats_missing_amount_as_zero() {
        let opps = [
            opportunity("CUS-1", OpportunityStatus::Won, Some(15000.0)),
            opportunity("CUS-1", OpportunityStatus::Won, None),
            opportunity("CUS-1", OpportunityStatus::Negotiation, Some(99999.0)),
        ];
        assert_eq!(won_revenue(&opps), 15000.0);
    }

    #[test]
    fn breakdown_covers_every_forward_stage_and_skips_lost() {
        let opps = [
            opportunity("CUS-1", OpportunityStatus::New, None),
            opportunity("CUS-1", OpportunityStatus::New, None),
            opportunity("CUS-1", OpportunityStatus::Won, Some(1.0)),
            opportunity("CUS-1", OpportunityStatus::Lost, None),
        ];
        let breakdown = pipeline_breakdown(&opps);
        assert_eq!(breakdown.len(), 5);
        assert_eq!(breakdown[0], (OpportunityStatus::New, 2));
        assert_eq!(breakdown[4], (OpportunityStatus::Won, 1));
        assert!(breakdown
            .iter()
            .all(|(stage, _)| *stage != OpportunityStatus::Lost));
    }

    #[test]
    fn customer_search_spans_name_contact_and_sector() {
        let store = crate::presets::seed_store().unwrap();
        let customers = store.customers();

        let by_name = search_customers(customers, "techflow");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "TechFlow Solutions");

        let by_contact = search_customers(customers, "SELIN");
        assert_eq!(by_contact.len(), 1);
        assert_eq!(by_contact[0].name, "Global Finance Corp");

        let by_sector = search_customers(customers, "finance");
        assert_eq!(by_sector.len(), 1);

        assert_eq!(search_customers(customers, "").len(), 2);
        assert!(search_customers(customers, "retail").is_empty());
    }

    #[test]
    fn dashboard_stats_over_the_seed_dataset() {
        let store = crate::presets::seed_store().unwrap();
        let stats = dashboard_stats(&store);
        assert_eq!(stats.customers, 2);
        assert_eq!(stats.open_opportunities, 1);
        assert_eq!(stats.won_revenue, 0.0);
        assert_eq!(stats.pending_tasks, 2);
        assert_eq!(stats.scheduled_events, 1);

        let preview = pending_task_preview(store.global_tasks(), 3);
        assert_eq!(preview.len(), 2);
    }

    #[test]
    fn customer_summary_scopes_to_one_customer() {
        let opps = [
            opportunity("CUS-1", OpportunityStatus::Won, Some(5000.0)),
            opportunity("CUS-2", OpportunityStatus::Won, Some(7000.0)),
            opportunity("CUS-1", OpportunityStatus::Discovery, None),
        ];
        let summary = customer_summary("CUS-1", &opps);
        assert_eq!(summary.opportunities.len(), 2);
        assert_eq!(summary.won_revenue, 5000.0);
    }
}
