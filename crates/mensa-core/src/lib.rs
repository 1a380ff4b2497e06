//! Mensa Planner Core
//!
//! Layered architecture:
//! - domain: Dish and plan entities, identifiers, errors
//! - store: Device key-value store abstraction and backends
//! - repository: In-memory collections persisted through the store
//! - auth: Admin sign-in state machine over a pluggable provider
//! - calendar: ISO week model for the calendar screen
//! - config: Application configuration file

pub mod auth;
pub mod calendar;
pub mod config;
pub mod domain;
pub mod repository;
pub mod store;

pub use auth::{AdminAccount, AuthError, AuthProvider, AuthSession, AuthState, AuthUser, LocalAuthProvider};
pub use calendar::{CalendarWeek, DayView, WeekView};
pub use config::{AppConfig, ConfigError};
pub use domain::{Dish, DishDraft, DomainError, DomainResult, Entity, IdGenerator, Plan, RecordId};
pub use repository::{resolve_plans, CollectionRepository, DishRepository, PlanLink, PlanRepository, PlanRow};
pub use store::{KeyValueStore, MemoryStore, SqliteStore, StoreError};
