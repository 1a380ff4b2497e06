//! Plan Repository
//!
//! Owns the meal plan entries. Entries are only ever appended.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Dish, DomainResult, IdGenerator, Plan, UuidGenerator};
use crate::store::KeyValueStore;
use super::collection::StoredCollection;
use super::traits::CollectionRepository;

/// Store key holding the JSON array of plans
pub const PLANS_KEY: &str = "plans";

pub struct PlanRepository {
    plans: StoredCollection<Plan>,
    ids: Box<dyn IdGenerator>,
}

impl PlanRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_id_generator(store, Box::new(UuidGenerator))
    }

    pub fn with_id_generator(store: Arc<dyn KeyValueStore>, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            plans: StoredCollection::new(PLANS_KEY, store),
            ids,
        }
    }

    /// Append a plan entry for `dish` and persist the list
    pub async fn add(&mut self, dish: &Dish) -> DomainResult<Plan> {
        let plan = self
            .plans
            .push_with(self.ids.as_ref(), |id| Plan::for_dish(id, dish))
            .await?;
        log::info!("Planned dish '{}' as {}", plan.label, plan.id);
        Ok(plan)
    }
}

#[async_trait]
impl CollectionRepository<Plan> for PlanRepository {
    async fn load(&mut self) {
        self.plans.load().await;
    }

    fn list(&self) -> &[Plan] {
        self.plans.items()
    }

    fn is_diverged(&self) -> bool {
        self.plans.is_diverged()
    }
}
