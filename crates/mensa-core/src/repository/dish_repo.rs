//! Dish Repository
//!
//! Owns the list of dishes shown on the admin dish screen and the dish
//! picker.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Dish, DishDraft, DomainResult, IdGenerator, RecordId, UuidGenerator};
use crate::store::KeyValueStore;
use super::collection::StoredCollection;
use super::traits::CollectionRepository;

/// Store key holding the JSON array of dishes
pub const DISHES_KEY: &str = "dishes";

pub struct DishRepository {
    dishes: StoredCollection<Dish>,
    ids: Box<dyn IdGenerator>,
}

impl DishRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_id_generator(store, Box::new(UuidGenerator))
    }

    pub fn with_id_generator(store: Arc<dyn KeyValueStore>, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            dishes: StoredCollection::new(DISHES_KEY, store),
            ids,
        }
    }

    /// Validate the form input, append a new dish and persist the list
    pub async fn add(&mut self, draft: DishDraft) -> DomainResult<Dish> {
        let draft = draft.validate()?;
        let dish = self
            .dishes
            .push_with(self.ids.as_ref(), |id| Dish::new(id, draft))
            .await?;
        log::info!("Added dish '{}' ({})", dish.label, dish.id);
        Ok(dish)
    }

    /// Remove the dish with `id`; unknown ids are ignored
    pub async fn remove(&mut self, id: &RecordId) -> DomainResult<()> {
        if self.dishes.remove(id).await? {
            log::info!("Removed dish {}", id);
        } else {
            log::debug!("No dish {} to remove", id);
        }
        Ok(())
    }
}

#[async_trait]
impl CollectionRepository<Dish> for DishRepository {
    async fn load(&mut self) {
        self.dishes.load().await;
    }

    fn list(&self) -> &[Dish] {
        self.dishes.items()
    }

    fn is_diverged(&self) -> bool {
        self.dishes.is_diverged()
    }
}
