//! Integration tests for curry nodes shared across threads.
//!
//! With the `arc` feature the callable is shared through `Arc`, so a chain
//! can be branched from several threads at once.

#![cfg(feature = "arc")]

use currying::prelude::*;
use rstest::rstest;
use std::sync::Mutex;
use std::thread;

fn add(a: i32, b: i32, c: i32) -> i32 {
    a + b + c
}

static_assertions::assert_impl_all!(
    Curry<fn(i32, i32, i32) -> i32, currying::HList![i32, i32, i32], currying::HList![i32], currying::HList![i32, i32], Owned>: Send, Sync
);

// =============================================================================
// Static Nodes
// =============================================================================

#[rstest]
fn test_branches_on_separate_threads() {
    let base = curry(add).apply((10,));

    let handles: Vec<_> = (0..4)
        .map(|index| {
            let node = base.clone();
            thread::spawn(move || node.apply((index,)).apply((12,)))
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("Thread panicked"))
        .collect();

    assert_eq!(results, vec![22, 23, 24, 25]);
    assert_eq!(base.apply((11, 12)), 33);
}

#[rstest]
fn test_scoped_threads_share_one_node() {
    let total = Mutex::new(0);
    let node = curry(add).apply((1, 2));

    thread::scope(|scope| {
        for value in 0..8 {
            let node = &node;
            let total = &total;
            scope.spawn(move || {
                let result = node.apply((value,));
                *total.lock().expect("lock poisoned") += result;
            });
        }
    });

    // (1 + 2) * 8 + (0 + 1 + ... + 7)
    assert_eq!(*total.lock().expect("lock poisoned"), 52);
}

#[rstest]
fn test_referenced_mode_across_scoped_threads() {
    let values = [10, 11, 12];
    let node = curry_with(add, Referenced::new()).apply((&values[0], &values[1]));

    let result = thread::scope(|scope| {
        scope
            .spawn(|| node.apply((&values[2],)))
            .join()
            .expect("Thread panicked")
    });

    assert_eq!(result, 33);
}

// =============================================================================
// Dynamic Nodes
// =============================================================================

#[cfg(feature = "dynamic")]
#[rstest]
fn test_dynamic_node_moves_between_threads() {
    use std::num::NonZeroUsize;

    let arity = NonZeroUsize::new(3).expect("non-zero");
    let sum = DynamicCurry::new(variadic(arity, |values: Vec<i32>| values.iter().sum::<i32>()), Owned);
    let node = sum
        .try_into_apply([10])
        .expect("within arity")
        .partial()
        .expect("parameters remain");

    let result = thread::spawn(move || node.try_apply([11, 12]).expect("within arity").complete())
        .join()
        .expect("Thread panicked");

    assert_eq!(result, Some(33));
}
