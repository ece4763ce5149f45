//! Behavioral lock for ordered search: the fixed case table, exhaustive
//! hit/miss sweeps over small sorted inputs, duplicate runs, and shared
//! read-only use from several threads.

use myutils_search::{search, search_by, search_by_key};

use lock_tests::search_cases::cases;

// ---------------------------------------------------------------------------
// Fixed cases
// ---------------------------------------------------------------------------

#[test]
fn case_table_matches_expected() {
    for case in cases() {
        assert_eq!(
            search(&case.seq, &case.target),
            case.expected,
            "case {} (seq={:?}, target={})",
            case.name,
            case.seq,
            case.target
        );
    }
}

// ---------------------------------------------------------------------------
// Exhaustive sweeps
// ---------------------------------------------------------------------------

/// Every even value in `0..2n` is present; every odd value and both
/// out-of-range neighbours are absent.
#[test]
fn present_targets_found_absent_targets_missing() {
    for n in 0..=64u32 {
        let seq: Vec<u32> = (0..n).map(|i| i * 2).collect();
        for target in 0..(2 * n + 2) {
            let found = search(&seq, &target);
            if target % 2 == 0 && target < 2 * n {
                let i = found.unwrap_or_else(|| panic!("n={n} target={target} not found"));
                assert_eq!(seq[i], target, "n={n} target={target}");
            } else {
                assert_eq!(found, None, "n={n} target={target}");
            }
        }
    }
}

#[test]
fn duplicate_runs_return_a_matching_index() {
    for run in 1..=12usize {
        for prefix in 0..4usize {
            let mut seq = vec![0u8; prefix];
            seq.resize(prefix + run, 5);
            seq.push(9);
            let i = search(&seq, &5).expect("run element found");
            assert!(
                (prefix..prefix + run).contains(&i),
                "run={run} prefix={prefix} got {i}"
            );
        }
    }
}

#[test]
fn comparator_and_key_variants_agree_with_search() {
    let seq: Vec<i32> = (-20..20).map(|i| i * 5).collect();
    for target in -110..110 {
        let expected = search(&seq, &target);
        assert_eq!(search_by(&seq, |x| x.cmp(&target)), expected);
        assert_eq!(search_by_key(&seq, &target, |x| *x), expected);
    }
}

#[test]
fn sorted_strings() {
    let words = ["alpha", "bravo", "charlie", "delta", "echo", "foxtrot"];
    for (i, word) in words.iter().enumerate() {
        assert_eq!(search(&words, word), Some(i));
    }
    assert_eq!(search(&words, &"zulu"), None);
    assert_eq!(search(&words, &""), None);
}

// ---------------------------------------------------------------------------
// Unsorted input
// ---------------------------------------------------------------------------

/// All permutations of `items`, by Heap's algorithm.
fn permutations(mut items: Vec<i32>) -> Vec<Vec<i32>> {
    let n = items.len();
    let mut out = vec![items.clone()];
    let mut counters = vec![0usize; n];
    let mut i = 1;
    while i < n {
        if counters[i] < i {
            let j = if i % 2 == 0 { 0 } else { counters[i] };
            items.swap(j, i);
            out.push(items.clone());
            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }
    out
}

/// Unsorted slices break the precondition: the result is unspecified, but
/// the call returns, and any index it reports holds the target.
#[test]
fn unsorted_input_never_panics_and_never_lies() {
    let perms = permutations((0..6).collect());
    assert_eq!(perms.len(), 720);

    for seq in &perms {
        for target in -1..7 {
            if let Some(i) = search(seq, &target) {
                assert_eq!(seq[i], target, "seq={seq:?} target={target}");
            }
        }
    }

    // Sorted permutation still finds everything.
    let sorted: Vec<i32> = (0..6).collect();
    assert!(perms.contains(&sorted));
    for target in 0..6 {
        assert!(search(&sorted, &target).is_some());
    }
}

// ---------------------------------------------------------------------------
// Purity
// ---------------------------------------------------------------------------

#[test]
fn shared_slice_across_threads() {
    let seq: Vec<u64> = (0..10_000).map(|i| i * 7).collect();
    let expected: Vec<Option<usize>> = (0..500).map(|t| search(&seq, &(t * 13))).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    (0..500)
                        .map(|t| search(&seq, &(t * 13)))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
