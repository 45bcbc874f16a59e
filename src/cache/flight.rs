//! Single-flight coalescing for identical fetches.
//!
//! Concurrent reads of the same cache key must issue at most one network
//! call, with every caller receiving the same eventual result. Callers
//! joining after the leader started share the leader's future; the slot is
//! cleared once the result is delivered.

use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;

use dashmap::DashMap;
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};

use crate::client::ApiError;

type SharedFetch<V> = Shared<BoxFuture<'static, Result<V, Arc<ApiError>>>>;

/// One coalescing table per resource kind. `K` is the key component that
/// distinguishes fetches within the kind (`()` for collections and
/// singletons, `Uuid` for single items).
pub struct FlightGroup<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone + 'static,
{
    inner: DashMap<K, SharedFetch<V>>,
}

impl<K, V> FlightGroup<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone + 'static,
{
    pub fn new() -> Self {
        Self {
            inner: DashMap::new(),
        }
    }

    /// Run `fetch` for `key`, unless an identical fetch is already in
    /// flight, in which case await that one instead.
    ///
    /// The error is shared between callers, so it arrives behind an `Arc`.
    pub async fn run<F, Fut>(&self, key: K, fetch: F) -> Result<V, Arc<ApiError>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, ApiError>> + Send + 'static,
    {
        use dashmap::mapref::entry::Entry;

        let shared = match self.inner.entry(key.clone()) {
            Entry::Occupied(occupied) => occupied.get().clone(),
            Entry::Vacant(vacant) => {
                let fut = fetch().map(|result| result.map_err(Arc::new)).boxed().shared();
                vacant.insert(fut.clone());
                fut
            }
        };

        let result = shared.clone().await;
        // Clear the slot only while it still holds this flight: a caller
        // finishing late must not evict a newer fetch that already claimed
        // the vacant entry.
        self.inner.remove_if(&key, |_, in_flight| in_flight.ptr_eq(&shared));
        result
    }

    /// Number of fetches currently in flight.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<K, V> Default for FlightGroup<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[tokio::test]
    async fn concurrent_callers_share_one_fetch() {
        let group = Arc::new(FlightGroup::<(), u32>::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let group = Arc::clone(&group);
            let calls = Arc::clone(&calls);
            handles.push(tokio::spawn(async move {
                group
                    .run((), move || async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        tokio::time::sleep(std::time::Duration::from_millis(30)).await;
                        Ok(42)
                    })
                    .await
            }));
        }

        for handle in handles {
            let value = handle.await.expect("task").expect("fetch");
            assert_eq!(value, 42);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(group.is_empty());
    }

    #[tokio::test]
    async fn failure_is_shared_and_slot_cleared() {
        let group = Arc::new(FlightGroup::<(), u32>::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let first = {
            let calls = Arc::clone(&calls);
            group.run((), move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(ApiError::Status {
                    status: 500,
                    status_text: "Internal Server Error".to_string(),
                })
            })
        };
        let err = first.await.expect_err("fetch fails");
        assert_eq!(err.status(), Some(500));

        // A later fetch starts fresh rather than replaying the failure.
        let value = group
            .run((), move || async move { Ok(7) })
            .await
            .expect("second fetch");
        assert_eq!(value, 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn late_joiner_does_not_evict_newer_flight() {
        let group = FlightGroup::<(), u32>::new();
        let (first_tx, first_rx) = tokio::sync::oneshot::channel::<()>();
        let (second_tx, second_rx) = tokio::sync::oneshot::channel::<()>();

        // Leader of the first flight, gated on a channel.
        let mut leader = Box::pin(group.run((), move || async move {
            let _ = first_rx.await;
            Ok(1)
        }));
        assert!(futures::poll!(leader.as_mut()).is_pending());
        assert_eq!(group.len(), 1);

        // Late joiner of the same flight; its own fetch never runs.
        let mut joiner = Box::pin(group.run((), move || async move { Ok(99) }));
        assert!(futures::poll!(joiner.as_mut()).is_pending());

        first_tx.send(()).expect("unblock first flight");
        assert_eq!(leader.await.expect("leader fetch"), 1);
        assert!(group.is_empty());

        // A second flight claims the now-vacant slot before the joiner of
        // the finished flight gets polled again.
        let mut next = Box::pin(group.run((), move || async move {
            let _ = second_rx.await;
            Ok(2)
        }));
        assert!(futures::poll!(next.as_mut()).is_pending());
        assert_eq!(group.len(), 1);

        // The late joiner resolves with the first flight's result and must
        // leave the second flight registered.
        assert_eq!(joiner.await.expect("joined fetch"), 1);
        assert_eq!(group.len(), 1);

        // Anyone arriving now coalesces onto the second flight rather than
        // starting a parallel fetch for the same key.
        let calls = Arc::new(AtomicUsize::new(0));
        let mut follower = {
            let calls = Arc::clone(&calls);
            Box::pin(group.run((), move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(3)
            }))
        };
        assert!(futures::poll!(follower.as_mut()).is_pending());

        second_tx.send(()).expect("unblock second flight");
        assert_eq!(next.await.expect("second fetch"), 2);
        assert_eq!(follower.await.expect("coalesced fetch"), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(group.is_empty());
    }

    #[tokio::test]
    async fn distinct_keys_do_not_coalesce() {
        let group = Arc::new(FlightGroup::<u8, u8>::new());
        let calls = Arc::new(AtomicUsize::new(0));

        for key in [1u8, 2u8] {
            let calls = Arc::clone(&calls);
            let value = group
                .run(key, move || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(key)
                })
                .await
                .expect("fetch");
            assert_eq!(value, key);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
