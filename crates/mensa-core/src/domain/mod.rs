//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has no storage dependencies (serde only).

mod entity;
mod record_id;
mod dish;
mod plan;

pub use entity::{Entity, DomainError, DomainResult};
pub use record_id::{IdGenerator, RecordId, UuidGenerator};
pub use dish::{Dish, DishDraft};
pub use plan::Plan;
