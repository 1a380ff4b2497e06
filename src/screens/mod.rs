//! Screens
//!
//! One component per entry of the navigation stack.

mod home;
mod login;
mod admin;
mod calendar;
mod dishes;
mod plans;
mod new_plan;
mod choose_dish;

pub use home::HomeScreen;
pub use login::LoginScreen;
pub use admin::AdminScreen;
pub use calendar::CalendarScreen;
pub use dishes::DishesScreen;
pub use plans::PlansScreen;
pub use new_plan::NewPlanScreen;
pub use choose_dish::ChooseDishScreen;
