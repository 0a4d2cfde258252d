//! Dashboard Command Handlers
//!
//! Each handler performs one remote call and turns the response into the
//! [`FoodEvent`] that reconciles the local mirror. Handlers never touch
//! view state themselves; the caller applies the event, which lets it
//! drop responses that arrive after the view is gone.

use crate::domain::{FoodDraft, FoodPlate};
use crate::error::{DashboardError, DashboardResult, Operation, RemoteError};
use crate::mirror::{FoodEvent, MirrorEvent};
use crate::remote::RemoteStore;

fn failed(operation: Operation, cause: RemoteError) -> DashboardError {
    log::warn!("[DASHBOARD] {} failed: {}", operation, cause);
    DashboardError::remote(operation, cause)
}

/// Read the whole collection for the initial render
pub async fn load_foods<S>(store: &S) -> DashboardResult<FoodEvent>
where
    S: RemoteStore + ?Sized,
{
    let plates = store
        .list()
        .await
        .map_err(|cause| failed(Operation::Load, cause))?;
    log::debug!("[DASHBOARD] loaded {} plates", plates.len());
    Ok(MirrorEvent::Loaded(plates))
}

/// Create a plate from `draft`. The server assigns the id.
pub async fn add_food<S>(store: &S, draft: FoodDraft) -> DashboardResult<FoodEvent>
where
    S: RemoteStore + ?Sized,
{
    let created = store
        .create(&draft.into_new_plate())
        .await
        .map_err(|cause| failed(Operation::Add, cause))?;
    log::debug!("[DASHBOARD] added plate {}", created.id);
    Ok(MirrorEvent::Added(created))
}

/// Replace the staged edit target with `draft`
pub async fn update_food<S>(
    store: &S,
    target: Option<&FoodPlate>,
    draft: FoodDraft,
) -> DashboardResult<FoodEvent>
where
    S: RemoteStore + ?Sized,
{
    let target = target.ok_or(DashboardError::NoEditTarget)?;
    let echoed = store
        .replace(&draft.into_plate(target.id))
        .await
        .map_err(|cause| failed(Operation::Update, cause))?;
    log::debug!("[DASHBOARD] updated plate {}", echoed.id);
    Ok(MirrorEvent::Replaced(echoed))
}

pub async fn delete_food<S>(store: &S, id: u32) -> DashboardResult<FoodEvent>
where
    S: RemoteStore + ?Sized,
{
    store
        .delete(id)
        .await
        .map_err(|cause| failed(Operation::Delete, cause))?;
    log::debug!("[DASHBOARD] deleted plate {}", id);
    Ok(MirrorEvent::Removed(id))
}

/// Persist a plate whose `available` flag the caller already flipped
pub async fn set_availability<S>(store: &S, plate: FoodPlate) -> DashboardResult<FoodEvent>
where
    S: RemoteStore + ?Sized,
{
    let echoed = store
        .replace(&plate)
        .await
        .map_err(|cause| failed(Operation::SetAvailability, cause))?;
    log::debug!(
        "[DASHBOARD] plate {} available={}",
        echoed.id,
        echoed.available
    );
    Ok(MirrorEvent::Replaced(echoed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewFoodPlate;
    use crate::error::RemoteResult;
    use crate::mirror::FoodMirror;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};
    use tokio::sync::oneshot;

    /// In-memory stand-in for the `/foods` API
    struct FakeStore {
        plates: RefCell<Vec<FoodPlate>>,
        next_id: Cell<u32>,
        offline: Cell<bool>,
        /// Holds the next create response until released
        create_gate: RefCell<Option<oneshot::Receiver<()>>>,
        replaced: RefCell<Vec<FoodPlate>>,
    }

    impl FakeStore {
        fn seeded(plates: Vec<FoodPlate>) -> Self {
            let next_id = plates.iter().map(|p| p.id).max().unwrap_or(0) + 1;
            Self {
                plates: RefCell::new(plates),
                next_id: Cell::new(next_id),
                offline: Cell::new(false),
                create_gate: RefCell::new(None),
                replaced: RefCell::new(Vec::new()),
            }
        }

        fn check_online(&self) -> RemoteResult<()> {
            if self.offline.get() {
                return Err(RemoteError::Transport("connection refused".to_string()));
            }
            Ok(())
        }
    }

    #[async_trait(?Send)]
    impl RemoteStore for FakeStore {
        async fn list(&self) -> RemoteResult<Vec<FoodPlate>> {
            self.check_online()?;
            Ok(self.plates.borrow().clone())
        }

        async fn create(&self, plate: &NewFoodPlate) -> RemoteResult<FoodPlate> {
            self.check_online()?;
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            let stored = FoodPlate {
                id,
                name: plate.name.clone(),
                image: plate.image.clone(),
                price: plate.price.clone(),
                description: plate.description.clone(),
                available: plate.available,
            };
            self.plates.borrow_mut().push(stored.clone());

            let gate = self.create_gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            Ok(stored)
        }

        async fn replace(&self, plate: &FoodPlate) -> RemoteResult<FoodPlate> {
            self.check_online()?;
            self.replaced.borrow_mut().push(plate.clone());
            let mut plates = self.plates.borrow_mut();
            let slot = plates
                .iter_mut()
                .find(|p| p.id == plate.id)
                .ok_or_else(|| RemoteError::Status {
                    status: 404,
                    message: "Not Found".to_string(),
                })?;
            *slot = plate.clone();
            Ok(plate.clone())
        }

        async fn delete(&self, id: u32) -> RemoteResult<()> {
            self.check_online()?;
            self.plates.borrow_mut().retain(|p| p.id != id);
            Ok(())
        }
    }

    fn plate(id: u32) -> FoodPlate {
        FoodPlate {
            id,
            name: format!("Plate {}", id),
            image: format!("https://example.com/{}.png", id),
            price: format!("{}.90", id),
            description: format!("Description {}", id),
            available: id % 2 == 0,
        }
    }

    fn draft(name: &str) -> FoodDraft {
        FoodDraft {
            name: name.to_string(),
            image: "https://example.com/new.png".to_string(),
            price: "24.50".to_string(),
            description: "Fresh".to_string(),
        }
    }

    async fn loaded_mirror(store: &FakeStore) -> FoodMirror {
        let mut mirror = FoodMirror::new();
        mirror.apply(load_foods(store).await.expect("load failed"));
        mirror
    }

    fn ids(mirror: &FoodMirror) -> Vec<u32> {
        mirror.iter().map(|p| p.id).collect()
    }

    #[tokio::test]
    async fn test_load_mirrors_server_records_in_order() {
        let store = FakeStore::seeded(vec![plate(3), plate(1), plate(2)]);
        let mirror = loaded_mirror(&store).await;

        assert_eq!(mirror.len(), 3);
        assert_eq!(mirror.to_vec(), vec![plate(3), plate(1), plate(2)]);
    }

    #[tokio::test]
    async fn test_add_appends_server_record() {
        let store = FakeStore::seeded(vec![plate(1), plate(2)]);
        store.next_id.set(7);
        let mut mirror = loaded_mirror(&store).await;
        let before = mirror.to_vec();

        let event = add_food(&store, draft("Gnocchi")).await.unwrap();
        assert!(mirror.apply(event));

        let mut expected = before;
        expected.push(draft("Gnocchi").into_plate(7));
        assert_eq!(mirror.to_vec(), expected);
        assert!(mirror.get(7).unwrap().available);
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let store = FakeStore::seeded(vec![plate(1), plate(3), plate(5)]);
        let mut mirror = loaded_mirror(&store).await;
        let target = plate(3);

        let event = update_food(&store, Some(&target), draft("Renamed"))
            .await
            .unwrap();
        mirror.apply(event);

        assert_eq!(ids(&mirror), vec![1, 3, 5]);
        let updated = mirror.get(3).unwrap();
        assert_eq!(updated.name, "Renamed");
        assert!(updated.available);
        assert_eq!(mirror.get(1), Some(&plate(1)));
        assert_eq!(mirror.get(5), Some(&plate(5)));
    }

    #[tokio::test]
    async fn test_update_without_target_sends_nothing() {
        let store = FakeStore::seeded(vec![plate(1)]);

        let err = update_food(&store, None, draft("x")).await.unwrap_err();

        assert_eq!(err, DashboardError::NoEditTarget);
        assert!(store.replaced.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_once_and_repeat_is_noop() {
        let store = FakeStore::seeded(vec![plate(4), plate(5), plate(6)]);
        let mut mirror = loaded_mirror(&store).await;

        mirror.apply(delete_food(&store, 5).await.unwrap());
        assert_eq!(ids(&mirror), vec![4, 6]);

        assert!(!mirror.apply(delete_food(&store, 5).await.unwrap()));
        assert_eq!(mirror.len(), 2);
    }

    #[tokio::test]
    async fn test_set_availability_sends_full_record() {
        let store = FakeStore::seeded(vec![plate(2)]);
        let flipped = plate(2).with_availability(false);

        set_availability(&store, flipped.clone()).await.unwrap();

        assert_eq!(store.replaced.borrow().as_slice(), &[flipped]);
    }

    // Mirroring the old view, a toggle left the rendered list stale until
    // the next full reload. The echo is now applied like any replace.
    #[tokio::test]
    async fn test_set_availability_reflects_server_echo() {
        let store = FakeStore::seeded(vec![plate(1), plate(2)]);
        let mut mirror = loaded_mirror(&store).await;

        let event = set_availability(&store, plate(1).with_availability(true))
            .await
            .unwrap();
        mirror.apply(event);

        assert!(mirror.get(1).unwrap().available);
        assert_eq!(ids(&mirror), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_delete_before_add_resolves_leaks_nothing() {
        let store = FakeStore::seeded(vec![plate(1)]);
        store.next_id.set(7);
        let (release, gate) = oneshot::channel();
        *store.create_gate.borrow_mut() = Some(gate);
        let mut mirror = loaded_mirror(&store).await;

        let mut removed = None;
        let (added, ()) = tokio::join!(add_food(&store, draft("Flash")), async {
            removed = Some(delete_food(&store, 7).await);
            let _ = release.send(());
        });

        // responses are applied in the order they resolved
        mirror.apply(removed.unwrap().unwrap());
        mirror.apply(added.unwrap());

        assert_eq!(ids(&mirror), vec![1]);
        assert!(!mirror.contains(7));
    }

    #[tokio::test]
    async fn test_failures_name_their_operation() {
        let store = FakeStore::seeded(vec![plate(1), plate(2)]);
        store.offline.set(true);

        let results = vec![
            (Operation::Load, load_foods(&store).await),
            (Operation::Add, add_food(&store, draft("a")).await),
            (
                Operation::Update,
                update_food(&store, Some(&plate(1)), draft("b")).await,
            ),
            (Operation::Delete, delete_food(&store, 1).await),
            (
                Operation::SetAvailability,
                set_availability(&store, plate(2).with_availability(false)).await,
            ),
        ];

        for (operation, result) in results {
            match result {
                Err(DashboardError::RemoteOperationFailed { operation: op, cause }) => {
                    assert_eq!(op, operation);
                    assert!(matches!(cause, RemoteError::Transport(_)));
                }
                other => panic!("{} should fail, got {:?}", operation, other),
            }
        }
        store.offline.set(false);
        assert_eq!(store.plates.borrow().as_slice(), &[plate(1), plate(2)]);
    }

    #[tokio::test]
    async fn test_server_rejection_is_reported_as_status() {
        let store = FakeStore::seeded(vec![plate(1)]);

        let err = set_availability(&store, plate(42)).await.unwrap_err();

        assert_eq!(
            err,
            DashboardError::remote(
                Operation::SetAvailability,
                RemoteError::Status {
                    status: 404,
                    message: "Not Found".to_string()
                }
            )
        );
    }
}
