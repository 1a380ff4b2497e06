//! Plan Entity
//!
//! A meal plan entry pointing at a dish. The label is kept as a snapshot
//! under the stored `plan` field; `dish_id` links back to the dish itself.
//! Entries written before the link existed have no `dish_id`.

use serde::{Deserialize, Serialize};

use super::dish::Dish;
use super::entity::Entity;
use super::record_id::RecordId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: RecordId,
    /// Dish label at the time the plan was created
    #[serde(rename = "plan")]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dish_id: Option<RecordId>,
    #[serde(default)]
    pub completed: bool,
}

impl Entity for Plan {
    type Id = RecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Plan {
    /// Plan entry for the given dish
    pub fn for_dish(id: RecordId, dish: &Dish) -> Self {
        Self {
            id,
            label: dish.label.clone(),
            dish_id: Some(dish.id.clone()),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_plan_without_dish_id_loads() {
        let json = r#"[{"id":0.77,"plan":"Pizza","completed":false}]"#;
        let plans: Vec<Plan> = serde_json::from_str(json).unwrap();
        assert_eq!(plans[0].label, "Pizza");
        assert!(plans[0].dish_id.is_none());
    }

    #[test]
    fn serializes_label_as_plan_field() {
        let plan = Plan {
            id: RecordId::new("p1"),
            label: "Pizza".into(),
            dish_id: Some(RecordId::new("d1")),
            completed: false,
        };
        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value["plan"], "Pizza");
        assert_eq!(value["dish_id"], "d1");
    }
}
