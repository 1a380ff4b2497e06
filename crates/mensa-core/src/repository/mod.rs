//! Repository Layer
//!
//! In-memory collections hydrated from, and written back to, the device store.

mod traits;
mod collection;
mod dish_repo;
mod plan_repo;
mod reconcile;

#[cfg(test)]
mod tests;

pub use traits::CollectionRepository;
pub use dish_repo::{DishRepository, DISHES_KEY};
pub use plan_repo::{PlanRepository, PLANS_KEY};
pub use reconcile::{resolve_plans, PlanLink, PlanRow};
