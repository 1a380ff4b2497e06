//! Repository Integration Tests
//!
//! Tests for DishRepository and PlanRepository over in-memory stores.

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use std::collections::{HashSet, VecDeque};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    use crate::domain::{Dish, DishDraft, DomainError, IdGenerator, Plan, RecordId};
    use crate::repository::{
        resolve_plans, CollectionRepository, DishRepository, PlanLink, PlanRepository, DISHES_KEY,
        PLANS_KEY,
    };
    use crate::store::{KeyValueStore, MemoryStore, SqliteStore, StoreError, StoreResult};

    /// Memory store whose writes can be switched off
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        fail_writes: AtomicBool,
        fail_reads: AtomicBool,
    }

    #[async_trait]
    impl KeyValueStore for FlakyStore {
        async fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(StoreError::Backend("disk unavailable".into()));
            }
            self.inner.get_item(key).await
        }

        async fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(StoreError::Backend("disk full".into()));
            }
            self.inner.set_item(key, value).await
        }
    }

    /// Hands out ids from a fixed script
    struct ScriptedIds(Mutex<VecDeque<&'static str>>);

    impl ScriptedIds {
        fn new(ids: &[&'static str]) -> Box<Self> {
            Box::new(Self(Mutex::new(ids.iter().copied().collect())))
        }
    }

    impl IdGenerator for ScriptedIds {
        fn next_id(&self) -> RecordId {
            let mut ids = self.0.lock().unwrap();
            RecordId::new(ids.pop_front().unwrap_or("exhausted"))
        }
    }

    fn pizza() -> DishDraft {
        DishDraft::new("Pizza", "5", "Hauptgericht")
    }

    async fn stored_dishes(store: &dyn KeyValueStore) -> Vec<Dish> {
        let json = store.get_item(DISHES_KEY).await.unwrap().expect("dishes key written");
        serde_json::from_str(&json).unwrap()
    }

    #[tokio::test]
    async fn test_load_empty_store() {
        let mut repo = DishRepository::new(Arc::new(MemoryStore::new()));
        repo.load().await;
        assert!(repo.list().is_empty());
        assert!(!repo.is_diverged());
    }

    #[tokio::test]
    async fn test_add_dish_persists_single_entry() {
        let store = Arc::new(MemoryStore::new());
        let mut repo = DishRepository::new(store.clone());
        repo.load().await;

        let dish = repo.add(pizza()).await.expect("Failed to add");

        assert!(!dish.id.is_empty());
        assert!(!dish.completed);
        assert_eq!(repo.list(), &[dish.clone()]);
        assert_eq!(stored_dishes(store.as_ref()).await, vec![dish]);
    }

    #[tokio::test]
    async fn test_add_rejects_empty_fields() {
        let store = Arc::new(MemoryStore::new());
        let mut repo = DishRepository::new(store.clone());

        let err = repo.add(DishDraft::new("", "", "")).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert!(repo.list().is_empty());
        assert_eq!(store.get_item(DISHES_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_each_add_grows_list_by_one_with_unique_ids() {
        let mut repo = DishRepository::new(Arc::new(MemoryStore::new()));
        repo.load().await;

        let mut seen = HashSet::new();
        for n in 1..=20 {
            let dish = repo
                .add(DishDraft::new(format!("Dish {}", n), "3", ""))
                .await
                .unwrap();
            assert_eq!(repo.list().len(), n);
            assert!(seen.insert(dish.id));
        }
    }

    #[tokio::test]
    async fn test_remove_first_of_two() {
        let store = Arc::new(MemoryStore::new());
        let mut repo = DishRepository::new(store.clone());
        repo.load().await;

        let first = repo.add(pizza()).await.unwrap();
        let second = repo.add(DishDraft::new("Salat", "3", "Beilage")).await.unwrap();

        repo.remove(&first.id).await.unwrap();

        assert_eq!(repo.list(), &[second.clone()]);
        assert_eq!(stored_dishes(store.as_ref()).await, vec![second]);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent_and_survives_reload() {
        let store = Arc::new(MemoryStore::new());
        let mut repo = DishRepository::new(store.clone());
        let dish = repo.add(pizza()).await.unwrap();
        let other = repo.add(DishDraft::new("Suppe", "2", "")).await.unwrap();

        repo.remove(&dish.id).await.unwrap();
        let after_once = repo.list().to_vec();
        repo.remove(&dish.id).await.unwrap();
        repo.remove(&RecordId::new("never-existed")).await.unwrap();
        assert_eq!(repo.list(), after_once.as_slice());

        let mut fresh = DishRepository::new(store);
        fresh.load().await;
        assert!(fresh.find_by_id(&dish.id).is_none());
        assert!(fresh.find_by_id(&other.id).is_some());
    }

    #[tokio::test]
    async fn test_colliding_ids_are_skipped() {
        let store = Arc::new(MemoryStore::new());
        let mut repo = DishRepository::with_id_generator(store, ScriptedIds::new(&["a", "a", "", "b"]));

        let first = repo.add(pizza()).await.unwrap();
        let second = repo.add(pizza()).await.unwrap();
        assert_eq!(first.id.as_str(), "a");
        assert_eq!(second.id.as_str(), "b");
    }

    #[tokio::test]
    async fn test_failed_write_diverges_until_next_success() {
        let store = Arc::new(FlakyStore::default());
        let mut repo = DishRepository::new(store.clone());
        repo.load().await;

        store.fail_writes.store(true, Ordering::SeqCst);
        let dish = repo.add(pizza()).await.expect("write failures are not surfaced");
        assert_eq!(repo.list().len(), 1);
        assert!(repo.is_diverged());
        assert_eq!(store.get_item(DISHES_KEY).await.unwrap(), None);

        store.fail_writes.store(false, Ordering::SeqCst);
        let salad = repo.add(DishDraft::new("Salat", "3", "")).await.unwrap();
        assert!(!repo.is_diverged());
        assert_eq!(stored_dishes(store.as_ref()).await, vec![dish, salad]);
    }

    #[tokio::test]
    async fn test_failed_read_keeps_current_list() {
        let store = Arc::new(FlakyStore::default());
        let mut repo = DishRepository::new(store.clone());
        repo.add(pizza()).await.unwrap();

        store.fail_reads.store(true, Ordering::SeqCst);
        repo.load().await;
        assert_eq!(repo.list().len(), 1);
        assert!(repo.is_diverged());
    }

    #[tokio::test]
    async fn test_undecodable_value_is_logged_not_raised() {
        let store = Arc::new(MemoryStore::with_entries([(DISHES_KEY, "{not json")]));
        let mut repo = DishRepository::new(store);
        repo.load().await;
        assert!(repo.list().is_empty());
        assert!(repo.is_diverged());
    }

    #[tokio::test]
    async fn test_add_after_failed_first_read_keeps_store() {
        let store = Arc::new(FlakyStore::default());
        let mut seed = DishRepository::new(store.clone());
        let soup = seed.add(DishDraft::new("Suppe", "2", "")).await.unwrap();
        let salad = seed.add(DishDraft::new("Salat", "3", "")).await.unwrap();

        let mut repo = DishRepository::new(store.clone());
        store.fail_reads.store(true, Ordering::SeqCst);
        let err = repo.add(pizza()).await.unwrap_err();
        assert!(matches!(err, DomainError::Internal(_)));
        assert!(repo.list().is_empty());
        assert!(repo.is_diverged());

        store.fail_reads.store(false, Ordering::SeqCst);
        assert_eq!(stored_dishes(store.as_ref()).await, vec![soup.clone(), salad.clone()]);

        // The next mutation hydrates first and appends
        let pizza = repo.add(pizza()).await.unwrap();
        assert_eq!(stored_dishes(store.as_ref()).await, vec![soup, salad, pizza]);
    }

    #[tokio::test]
    async fn test_mutations_on_undecodable_value_leave_it_in_place() {
        let broken = r#"[{"id":"x1","task":"Suppe","art":""}]"#;
        let store = Arc::new(MemoryStore::with_entries([(DISHES_KEY, broken)]));
        let mut repo = DishRepository::new(store.clone());

        assert!(repo.add(pizza()).await.is_err());
        assert!(repo.remove(&RecordId::new("x1")).await.is_err());
        assert_eq!(store.get_item(DISHES_KEY).await.unwrap().as_deref(), Some(broken));
    }

    #[tokio::test]
    async fn test_loads_legacy_records() {
        let store = Arc::new(MemoryStore::with_entries([
            (
                DISHES_KEY,
                r#"[{"id":0.318,"task":"Pizza","price":"5","art":"Hauptgericht","completed":false}]"#,
            ),
            (PLANS_KEY, r#"[{"id":0.9,"plan":"Pizza","completed":false}]"#),
        ]));

        let mut dishes = DishRepository::new(store.clone());
        dishes.load().await;
        let mut plans = PlanRepository::new(store);
        plans.load().await;

        assert_eq!(dishes.list()[0].id.as_str(), "0.318");
        assert_eq!(plans.list().len(), 1);
        assert_eq!(plans.list()[0].label, "Pizza");
    }

    #[tokio::test]
    async fn test_round_trip_preserves_records() {
        let store = Arc::new(MemoryStore::new());
        let mut dishes = DishRepository::new(store.clone());
        let mut plans = PlanRepository::new(store.clone());

        let pizza = dishes.add(pizza()).await.unwrap();
        dishes.add(DishDraft::new("Suppe \"klar\"", "2,50", "Vorspeise")).await.unwrap();
        plans.add(&pizza).await.unwrap();

        let json = serde_json::to_string(dishes.list()).unwrap();
        let decoded: Vec<Dish> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, dishes.list());

        let json = serde_json::to_string(plans.list()).unwrap();
        let decoded: Vec<Plan> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, plans.list());
    }

    #[tokio::test]
    async fn test_plan_add_keeps_existing_plans() {
        let store = Arc::new(MemoryStore::new());
        let mut dishes = DishRepository::new(store.clone());
        let pizza = dishes.add(pizza()).await.unwrap();

        let mut first_session = PlanRepository::new(store.clone());
        let existing = first_session.add(&pizza).await.unwrap();

        // A fresh picker that never displayed the plan list
        let mut picker = PlanRepository::new(store.clone());
        let added = picker.add(&pizza).await.unwrap();

        let mut plans = PlanRepository::new(store);
        plans.load().await;
        assert_eq!(plans.list(), &[existing, added.clone()]);
        assert_eq!(added.dish_id.as_ref(), Some(&pizza.id));
    }

    #[tokio::test]
    async fn test_plan_rows_track_dish_changes() {
        let store = Arc::new(MemoryStore::new());
        let mut dishes = DishRepository::new(store.clone());
        let mut plans = PlanRepository::new(store);

        let pizza = dishes.add(pizza()).await.unwrap();
        let soup = dishes.add(DishDraft::new("Suppe", "2", "")).await.unwrap();
        plans.add(&pizza).await.unwrap();
        plans.add(&soup).await.unwrap();

        dishes.remove(&soup.id).await.unwrap();

        let rows = resolve_plans(plans.list(), dishes.list());
        assert_eq!(rows[0].link, PlanLink::Linked);
        assert_eq!(rows[1].link, PlanLink::Orphaned);
        assert_eq!(rows[1].label, "Suppe");
    }

    #[tokio::test]
    async fn test_two_repositories_last_writer_wins() {
        let store = Arc::new(MemoryStore::new());
        let mut a = DishRepository::new(store.clone());
        let mut b = DishRepository::new(store.clone());
        a.load().await;
        b.load().await;

        a.add(pizza()).await.unwrap();
        let salad = b.add(DishDraft::new("Salat", "3", "")).await.unwrap();

        assert_eq!(stored_dishes(store.as_ref()).await, vec![salad]);
    }

    #[tokio::test]
    async fn test_sqlite_backed_repository() {
        let store = Arc::new(SqliteStore::open_in_memory().expect("Failed to open store"));
        let mut repo = DishRepository::new(store.clone());
        repo.load().await;
        let dish = repo.add(pizza()).await.unwrap();

        let mut reloaded = DishRepository::new(store);
        reloaded.load().await;
        assert_eq!(reloaded.list(), &[dish]);
    }
}
