use prio_heap::{Compare, KeyOrder, MaxOrder, MinOrder, PriorityHeap};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::Cell;
use std::cmp::Ordering;

// Helper asserting that popping yields a non-decreasing sequence under `cmp`
fn assert_sorted_by<T, C: Compare<T>>(values: &[T], cmp: &C) {
    for pair in values.windows(2) {
        assert_ne!(cmp.compare(&pair[1], &pair[0]), Ordering::Less);
    }
}

fn sorted(mut values: Vec<i64>) -> Vec<i64> {
    values.sort();
    values
}

#[test]
fn test_concrete_min_heap_scenario() {
    let mut heap: PriorityHeap<i64, _> = PriorityHeap::new(|a: &i64, b: &i64| a.cmp(b));
    for value in [5, 3, 8, 1] {
        heap.push(value);
    }
    assert_eq!(heap.peek(), Some(&1));
    assert_eq!(heap.pop(), Some(1));
    assert_eq!(heap.peek(), Some(&3));

    // 2 outranks the root 3, so 3 is evicted and 2 takes its place
    assert_eq!(heap.push_pop(2), 3);
    assert_eq!(heap.peek(), Some(&2));
    assert_eq!(sorted(heap.to_vec()), vec![2, 5, 8]);

    // 10 does not outrank the root, so it comes straight back
    let before = heap.to_vec();
    assert_eq!(heap.push_pop(10), 10);
    assert_eq!(heap.to_vec(), before);
}

#[test]
fn test_empty_heap_contract() {
    let mut heap: PriorityHeap<i64, MinOrder> = PriorityHeap::min();
    assert!(heap.is_empty());
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.pop(), None);
    assert_eq!(heap.len(), 0);

    assert_eq!(heap.replace_top(7), None);
    assert_eq!(heap.to_vec(), vec![7]);

    heap.clear();
    assert_eq!(heap.push_pop(4), 4);
    assert_eq!(heap.len(), 1);
    assert_eq!(heap.peek(), Some(&4));
}

#[test]
fn test_single_element_pop_empties_heap() {
    let mut heap = PriorityHeap::max();
    heap.push("only");
    assert_eq!(heap.pop(), Some("only"));
    assert!(heap.is_empty());
    assert_eq!(heap.pop(), None);
}

#[test]
fn test_size_conservation() {
    let mut heap = PriorityHeap::with_items(MinOrder, vec![4, 9, 2, 7]);
    assert_eq!(heap.len(), 4);

    heap.push(1);
    assert_eq!(heap.len(), 5);

    heap.pop();
    assert_eq!(heap.len(), 4);

    heap.replace_top(100);
    assert_eq!(heap.len(), 4);

    // Rejected and accepted push_pop both leave the size alone
    heap.push_pop(1000);
    assert_eq!(heap.len(), 4);
    heap.push_pop(-1);
    assert_eq!(heap.len(), 4);

    heap.clear();
    assert_eq!(heap.len(), 0);
    assert!(heap.is_empty());
}

#[test]
fn test_replace_top_returns_previous_root() {
    let mut heap = PriorityHeap::with_items(MinOrder, vec![3, 1, 2]);
    assert_eq!(heap.replace_top(10), Some(1));
    assert_eq!(heap.peek(), Some(&2));
    assert!(heap.is_valid());
    assert_eq!(heap.into_sorted_vec(), vec![2, 3, 10]);
}

#[test]
fn test_push_pop_rejection_leaves_heap_untouched() {
    let mut heap = PriorityHeap::with_items(MinOrder, vec![6, 2, 9, 4, 4]);
    let before = heap.to_vec();

    // Equal to the root is not strictly better
    assert_eq!(heap.push_pop(2), 2);
    assert_eq!(heap.push_pop(50), 50);
    assert_eq!(heap.to_vec(), before);
}

#[test]
fn test_push_pop_acceptance_swaps_root() {
    let mut heap = PriorityHeap::with_items(MinOrder, vec![6, 2, 9, 4, 4]);
    let mut expected = heap.to_vec();
    let root = *heap.peek().unwrap();

    assert_eq!(heap.push_pop(1), root);
    assert_eq!(heap.peek(), Some(&1));
    assert!(heap.is_valid());

    let pos = expected.iter().position(|&v| v == root).unwrap();
    expected.remove(pos);
    expected.push(1);
    assert_eq!(sorted(heap.to_vec()), sorted(expected));
}

#[test]
fn test_bulk_build_extracts_in_order() {
    let mut rng = StdRng::seed_from_u64(7);
    let input: Vec<i64> = (0..500).map(|_| rng.gen_range(-50..50)).collect();

    let heap = PriorityHeap::from_vec(MinOrder, input.clone());
    assert!(heap.is_valid());
    assert_eq!(heap.len(), input.len());

    let extracted = heap.into_sorted_vec();
    assert_eq!(extracted, sorted(input));
}

#[test]
fn test_random_operations_preserve_invariant() {
    let mut rng = StdRng::seed_from_u64(1234);
    let mut heap = PriorityHeap::new(MinOrder);
    let mut model: Vec<i64> = Vec::new();

    for _ in 0..2000 {
        let value = rng.gen_range(0..100);
        match rng.gen_range(0..4) {
            0 => {
                heap.push(value);
                model.push(value);
            }
            1 => {
                let popped = heap.pop();
                model.sort();
                let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                assert_eq!(popped, expected);
            }
            2 => {
                let previous = heap.replace_top(value);
                model.sort();
                if !model.is_empty() {
                    assert_eq!(previous, Some(model.remove(0)));
                } else {
                    assert_eq!(previous, None);
                }
                model.push(value);
            }
            _ => {
                let out = heap.push_pop(value);
                model.sort();
                match model.first().copied() {
                    None => {
                        assert_eq!(out, value);
                        model.push(value);
                    }
                    Some(root) if value < root => {
                        assert_eq!(out, root);
                        model[0] = value;
                    }
                    Some(_) => assert_eq!(out, value),
                }
            }
        }
        assert!(heap.is_valid());
        assert_eq!(heap.len(), model.len());
        assert_eq!(sorted(heap.to_vec()), sorted(model.clone()));
    }
}

#[test]
fn test_max_order_and_closure_comparator_agree() {
    let values = vec![3, 14, 15, 92, 65, 35, 89, 79];
    let by_trait = PriorityHeap::with_items(MaxOrder, values.clone()).into_sorted_vec();
    let by_closure =
        PriorityHeap::with_items(|a: &i32, b: &i32| b.cmp(a), values).into_sorted_vec();

    assert_eq!(by_trait, vec![92, 89, 79, 65, 35, 15, 14, 3]);
    assert_eq!(by_trait, by_closure);
    assert_sorted_by(&by_trait, &MaxOrder);
}

#[test]
fn test_key_order_on_structured_elements() {
    #[derive(Debug, Clone, PartialEq)]
    struct Job {
        name: &'static str,
        deadline: u32,
    }

    let jobs = vec![
        Job { name: "report", deadline: 30 },
        Job { name: "deploy", deadline: 5 },
        Job { name: "review", deadline: 12 },
    ];
    let mut heap = PriorityHeap::with_items(KeyOrder::new(|job: &Job| job.deadline), jobs);

    assert_eq!(heap.pop().map(|job| job.name), Some("deploy"));
    assert_eq!(heap.pop().map(|job| job.name), Some("review"));
    assert_eq!(heap.pop().map(|job| job.name), Some("report"));
}

#[test]
fn test_ties_prefer_left_child() {
    let cmp = KeyOrder::new(|pair: &(u8, char)| pair.0);
    let mut heap = PriorityHeap::from_vec(cmp, vec![(0, 'r'), (5, 'a'), (5, 'b')]);

    assert_eq!(heap.pop(), Some((0, 'r')));
    assert_eq!(heap.peek(), Some(&(5, 'b')));

    // Both children of the new root tie; the left one must rise
    let mut heap = PriorityHeap::from_vec(cmp, vec![(0, 'r'), (5, 'a'), (5, 'b'), (9, 'z')]);
    assert_eq!(heap.replace_top((9, 'y')), Some((0, 'r')));
    assert_eq!(heap.as_slice()[0], (5, 'a'));
}

#[test]
fn test_to_vec_is_an_independent_copy() {
    let heap = PriorityHeap::with_items(MinOrder, vec![1, 2, 3]);
    let mut snapshot = heap.to_vec();
    snapshot.clear();
    snapshot.push(-100);

    assert_eq!(heap.len(), 3);
    assert_eq!(heap.peek(), Some(&1));
    assert!(heap.is_valid());
}

#[test]
fn test_collect_and_extend() {
    let mut heap: PriorityHeap<i32, MinOrder> = vec![8, 3, 5].into_iter().collect();
    heap.extend(vec![1, 9]);

    assert_eq!(heap.len(), 5);
    assert_eq!(heap.iter().count(), 5);
    assert_eq!((&heap).into_iter().copied().min(), Some(1));
    assert_eq!(heap.clone().into_sorted_vec(), vec![1, 3, 5, 8, 9]);

    let array_order = heap.to_vec();
    let raw = heap.into_vec();
    assert_eq!(raw, array_order);
    assert_eq!(raw[0], 1);
}

#[test]
fn test_comparison_counts() {
    let compares = Cell::new(0usize);
    let counting = |a: &i64, b: &i64| {
        compares.set(compares.get() + 1);
        a.cmp(b)
    };

    // Descending input is the worst case for a min-heap bulk build
    let n = 16_384;
    let mut heap = PriorityHeap::from_vec(&counting, (0..n as i64).rev().collect());
    let bulk = compares.get();
    assert!(bulk <= 2 * n, "bulk build used {} comparisons for {} elements", bulk, n);
    assert_eq!(heap.peek(), Some(&0));

    // A rejected candidate costs exactly one comparison against the root
    compares.set(0);
    assert_eq!(heap.push_pop(1_000_000), 1_000_000);
    assert_eq!(compares.get(), 1);
    assert_eq!(heap.len(), n);
}
