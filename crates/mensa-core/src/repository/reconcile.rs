//! Plan rows
//!
//! Joins plan entries with the current dish list for display. Labels come
//! from the linked dish when it still exists, otherwise from the snapshot
//! stored in the plan.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::{Dish, Plan, RecordId};

/// How a plan row relates to the dish list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanLink {
    /// Linked dish exists
    Linked,
    /// Linked dish was deleted
    Orphaned,
    /// Entry predates dish links
    Unlinked,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRow {
    pub plan_id: RecordId,
    pub label: String,
    pub price: Option<String>,
    pub category: Option<String>,
    pub link: PlanLink,
}

/// One row per plan, in plan order
pub fn resolve_plans(plans: &[Plan], dishes: &[Dish]) -> Vec<PlanRow> {
    let by_id: HashMap<&RecordId, &Dish> = dishes.iter().map(|d| (&d.id, d)).collect();

    plans
        .iter()
        .map(|plan| match plan.dish_id.as_ref() {
            Some(dish_id) => match by_id.get(dish_id) {
                Some(dish) => PlanRow {
                    plan_id: plan.id.clone(),
                    label: dish.label.clone(),
                    price: Some(dish.price.clone()),
                    category: Some(dish.category.clone()),
                    link: PlanLink::Linked,
                },
                None => snapshot_row(plan, PlanLink::Orphaned),
            },
            None => snapshot_row(plan, PlanLink::Unlinked),
        })
        .collect()
}

fn snapshot_row(plan: &Plan, link: PlanLink) -> PlanRow {
    PlanRow {
        plan_id: plan.id.clone(),
        label: plan.label.clone(),
        price: None,
        category: None,
        link,
    }
}
