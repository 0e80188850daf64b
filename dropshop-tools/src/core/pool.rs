// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/dropshop-rs/blob/main/licenses/COPYRIGHT.md

//! Bounded fan-out over a shared work queue.
//!
//! Both enumerators drain their per-token work through [`drain`]; it is the
//! single place the fan-out discipline lives. Workers claim items through an
//! atomic cursor, so each item is handled exactly once and one item's failure
//! is recorded as that item's result rather than aborting the pool.

use std::{
    collections::HashMap,
    future::Future,
    hash::Hash,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use tokio::task::JoinSet;

/// Drains `items` with at most `concurrency` concurrent workers.
///
/// The worker count is clamped to the queue length, and a `concurrency` of
/// zero is treated as one. The handler maps each item to a keyed result;
/// every input produces exactly one entry in the output map, in unspecified
/// completion order.
pub async fn drain<T, K, V, F, Fut>(items: Vec<T>, concurrency: usize, handler: F) -> HashMap<K, V>
where
    T: Clone + Send + Sync + 'static,
    K: Eq + Hash + Send + 'static,
    V: Send + 'static,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (K, V)> + Send + 'static,
{
    let mut results = HashMap::with_capacity(items.len());
    if items.is_empty() {
        return results;
    }

    let workers = concurrency.max(1).min(items.len());
    let queue = Arc::new(items);
    let cursor = Arc::new(AtomicUsize::new(0));
    let handler = Arc::new(handler);

    let mut tasks = JoinSet::new();
    for _ in 0..workers {
        let queue = Arc::clone(&queue);
        let cursor = Arc::clone(&cursor);
        let handler = Arc::clone(&handler);
        tasks.spawn(async move {
            let mut outputs = Vec::new();
            loop {
                let index = cursor.fetch_add(1, Ordering::Relaxed);
                let Some(item) = queue.get(index) else {
                    break;
                };
                outputs.push(handler(item.clone()).await);
            }
            outputs
        });
    }

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(outputs) => {
                for (key, value) in outputs {
                    results.insert(key, value);
                }
            }
            Err(err) => debug!(@grey, "worker task failed to join: {err}"),
        }
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_queue_completes_immediately() {
        let results = drain(Vec::<u64>::new(), 8, |id| async move { (id, id) }).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn every_item_produces_one_result() {
        let items: Vec<u64> = (0..100).collect();
        let results = drain(items, 7, |id| async move { (id, id * 2) }).await;
        assert_eq!(results.len(), 100);
        for id in 0..100 {
            assert_eq!(results[&id], id * 2);
        }
    }

    #[tokio::test]
    async fn failures_do_not_affect_other_items() {
        let items: Vec<u64> = (0..20).collect();
        let results = drain(items, 4, |id| async move {
            let result = if id % 3 == 0 {
                Err(format!("item {id} failed"))
            } else {
                Ok(id)
            };
            (id, result)
        })
        .await;
        assert_eq!(results.len(), 20);
        for id in 0..20 {
            if id % 3 == 0 {
                assert!(results[&id].is_err());
            } else {
                assert_eq!(results[&id], Ok(id));
            }
        }
    }

    #[tokio::test]
    async fn concurrency_is_clamped_to_queue_length() {
        let running = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));
        let items: Vec<u64> = (0..3).collect();
        let (running2, peak2) = (Arc::clone(&running), Arc::clone(&peak));
        let results = drain(items, 64, move |id| {
            let running = Arc::clone(&running2);
            let peak = Arc::clone(&peak2);
            async move {
                let now = running.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                tokio::task::yield_now().await;
                running.fetch_sub(1, Ordering::SeqCst);
                (id, ())
            }
        })
        .await;
        assert_eq!(results.len(), 3);
        assert!(peak.load(Ordering::SeqCst) <= 3);
    }

    #[tokio::test]
    async fn zero_concurrency_still_drains() {
        let items: Vec<u64> = (0..5).collect();
        let results = drain(items, 0, |id| async move { (id, ()) }).await;
        assert_eq!(results.len(), 5);
    }
}
