/*!
 * Ownership Transfer Tests
 *
 * Moving a guard hands the handle to exactly one new owner; every earlier
 * holder reverts to the empty state and drops without effect.
 */

use proptest::prelude::*;
use resguard::{DestroyPolicy, Guard, ResourceGuard};
use std::sync::Mutex;

#[test]
fn native_move_chain_destroys_once() {
    static CALLS: Mutex<Vec<u32>> = Mutex::new(Vec::new());

    struct Recorder;

    impl DestroyPolicy for Recorder {
        type Handle = u32;

        fn destroy(handle: u32) {
            CALLS.lock().unwrap().push(handle);
        }
    }

    {
        let first = ResourceGuard::<Recorder>::new(42);
        let second = first;
        let third = second;
        let _fourth = third;
    }

    assert_eq!(*CALLS.lock().unwrap(), vec![42]);
}

#[test]
fn take_chain_leaves_sources_empty() {
    static CALLS: Mutex<Vec<u32>> = Mutex::new(Vec::new());

    struct Recorder;

    impl DestroyPolicy for Recorder {
        type Handle = u32;

        fn destroy(handle: u32) {
            CALLS.lock().unwrap().push(handle);
        }
    }

    let mut first = ResourceGuard::<Recorder>::new(42);
    let mut second = first.take();
    let third = second.take();

    assert!(!first.is_active());
    assert!(!second.is_active());
    assert!(third.is_active());
    assert_eq!(*third, 42);

    // Dropping the hollowed-out holders must not reach the policy.
    drop(first);
    drop(second);
    assert!(CALLS.lock().unwrap().is_empty());

    drop(third);
    assert_eq!(*CALLS.lock().unwrap(), vec![42]);
}

#[test]
fn taking_twice_yields_an_empty_guard() {
    static CALLS: Mutex<Vec<u32>> = Mutex::new(Vec::new());

    struct Recorder;

    impl DestroyPolicy for Recorder {
        type Handle = u32;

        fn destroy(handle: u32) {
            CALLS.lock().unwrap().push(handle);
        }
    }

    let mut guard = ResourceGuard::<Recorder>::new(9);
    let live = guard.take();
    let hollow = guard.take();

    assert!(!hollow.is_active());
    drop(hollow);
    drop(guard);
    assert!(CALLS.lock().unwrap().is_empty());

    drop(live);
    assert_eq!(*CALLS.lock().unwrap(), vec![9]);
}

#[test]
fn swap_exchanges_full_state() {
    static CALLS: Mutex<Vec<u32>> = Mutex::new(Vec::new());

    struct Recorder;

    impl DestroyPolicy for Recorder {
        type Handle = u32;

        fn destroy(handle: u32) {
            CALLS.lock().unwrap().push(handle);
        }
    }

    let mut bound = ResourceGuard::<Recorder>::new(8);
    let mut empty = ResourceGuard::<Recorder>::empty();

    bound.swap(&mut empty);
    assert!(!bound.is_active());
    assert!(empty.is_active());
    assert_eq!(*empty, 8);

    drop(bound);
    assert!(CALLS.lock().unwrap().is_empty());

    drop(empty);
    assert_eq!(*CALLS.lock().unwrap(), vec![8]);
}

proptest! {
    #[test]
    fn take_chain_destroys_exactly_once(handle in any::<u64>(), hops in 0usize..8) {
        static CALLS: Mutex<Vec<u64>> = Mutex::new(Vec::new());

        struct Recorder;

        impl DestroyPolicy for Recorder {
            type Handle = u64;

            fn destroy(handle: u64) {
                CALLS.lock().unwrap().push(handle);
            }
        }

        let baseline = CALLS.lock().unwrap().len();

        let mut guard = ResourceGuard::<Recorder>::new(handle);
        for _ in 0..hops {
            let next = guard.take();
            prop_assert!(!guard.is_active());
            guard = next;
        }
        drop(guard);

        let calls = CALLS.lock().unwrap();
        prop_assert_eq!(calls[baseline..].to_vec(), vec![handle]);
    }
}
