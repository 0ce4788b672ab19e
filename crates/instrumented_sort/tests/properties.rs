//! Property tests for the instrumented sorts.

use instrumented_sort::{
    GapSequence, GapStrategy, OperationCounters, SortAlgorithm, all_algorithms, generate_gaps,
    insertion_sort, shell_insertion_sort, snapshots, sort,
};
use proptest::prelude::*;

const CUSTOM_GAPS: [usize; 3] = [7, 3, 1];

fn is_non_decreasing<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|w| !(w[1] < w[0]))
}

fn sorted_copy(data: &[i32]) -> Vec<i32> {
    let mut out = data.to_vec();
    out.sort_unstable();
    out
}

proptest! {
    #[test]
    fn every_algorithm_sorts_a_permutation(data in prop::collection::vec(-50i32..50, 0..80)) {
        let expected = sorted_copy(&data);
        for &algo in all_algorithms() {
            let mut actual = data.clone();
            let mut counters = OperationCounters::default();
            sort(algo, &mut actual, &mut counters, &CUSTOM_GAPS).unwrap();
            prop_assert!(is_non_decreasing(&actual), "{}", algo);
            prop_assert_eq!(&actual, &expected, "{}", algo);
        }
    }

    #[test]
    fn text_is_sorted_lexicographically(data in prop::collection::vec("[a-e]{0,4}", 0..30)) {
        let mut expected = data.clone();
        expected.sort();
        for &algo in all_algorithms() {
            let mut actual = data.clone();
            let mut counters = OperationCounters::default();
            sort(algo, &mut actual, &mut counters, &CUSTOM_GAPS).unwrap();
            prop_assert_eq!(&actual, &expected, "{}", algo);
        }
    }

    #[test]
    fn bubble_swaps_count_inversions(data in prop::collection::vec(0u8..20, 0..60)) {
        let inversions = (0..data.len())
            .flat_map(|i| (i + 1..data.len()).map(move |j| (i, j)))
            .filter(|&(i, j)| data[j] < data[i])
            .count() as u64;
        let n = data.len() as u64;

        let mut actual = data.clone();
        let mut counters = OperationCounters::default();
        sort(SortAlgorithm::BubbleSort, &mut actual, &mut counters, &[]).unwrap();
        prop_assert_eq!(counters.swaps, inversions);
        prop_assert_eq!(counters.comparisons, n * n.saturating_sub(1) / 2);

        // Insertion shifts once per inversion and places once per index past the first.
        let mut actual = data.clone();
        let mut counters = OperationCounters::default();
        sort(SortAlgorithm::InsertionSort, &mut actual, &mut counters, &[]).unwrap();
        prop_assert_eq!(counters.comparisons, inversions);
        prop_assert_eq!(counters.swaps, inversions + n.saturating_sub(1));
    }

    #[test]
    fn unit_gap_shell_insertion_diverges_only_in_comparisons(
        data in prop::collection::vec(-20i32..20, 0..60),
    ) {
        let mut plain = data.clone();
        let mut plain_counters = OperationCounters::default();
        insertion_sort(&mut plain, &mut plain_counters);

        let mut shell = data.clone();
        let mut shell_counters = OperationCounters::default();
        let gaps = GapSequence::new(vec![1]).unwrap();
        shell_insertion_sort(&mut shell, &mut shell_counters, &gaps);

        prop_assert_eq!(&shell, &plain);
        prop_assert_eq!(shell_counters.swaps, plain_counters.swaps);

        // Every key after the first whose shifting stops before index 0
        // costs one extra, failing comparison.
        let mut stopped_early = 0_u64;
        for i in 1..data.len() {
            if data[..i].iter().any(|x| !(data[i] < *x)) {
                stopped_early += 1;
            }
        }
        prop_assert_eq!(shell_counters.comparisons, plain_counters.comparisons + stopped_early);
    }

    #[test]
    fn snapshots_do_not_change_the_outcome(
        data in prop::collection::vec(0u16..500, 0..40),
        pick in 0usize..11,
    ) {
        let algo = all_algorithms()[pick];

        let mut plain = data.clone();
        let mut plain_counters = OperationCounters::default();
        sort(algo, &mut plain, &mut plain_counters, &CUSTOM_GAPS).unwrap();

        let mut stepped = data.clone();
        let mut stepped_counters = OperationCounters::default();
        let mut frames = 0_usize;
        let mut stream = snapshots(algo, &mut stepped, &mut stepped_counters, &CUSTOM_GAPS).unwrap();
        while let Some(frame) = stream.next_view() {
            prop_assert_eq!(frame.len(), data.len());
            frames += 1;
        }
        prop_assert!(stream.is_finished());
        drop(stream);

        prop_assert_eq!(&stepped, &plain);
        prop_assert_eq!(stepped_counters, plain_counters);
        if data.len() < 2 {
            prop_assert!(frames <= data.len());
        }
    }

    #[test]
    fn frame_count_follows_each_policy(
        data in prop::collection::vec(0u16..500, 0..40),
        pick in 0usize..11,
    ) {
        let algo = all_algorithms()[pick];
        let mut working = data.clone();
        let mut counters = OperationCounters::default();
        let frames = snapshots(algo, &mut working, &mut counters, &CUSTOM_GAPS)
            .unwrap()
            .count() as u64;

        // Insertion variants checkpoint on every shift and placement; the
        // rest checkpoint once per comparison.
        let expected = match algo {
            SortAlgorithm::InsertionSort | SortAlgorithm::ShellInsertion(_) => counters.swaps,
            _ => counters.comparisons,
        };
        prop_assert_eq!(frames, expected, "{}", algo);
    }

    #[test]
    fn builtin_gaps_are_decreasing(n in 0usize..100_000) {
        for strategy in [GapStrategy::Shell, GapStrategy::Hibbard, GapStrategy::Knuth] {
            let gaps = generate_gaps(n, strategy, &[]).unwrap();
            let gaps = gaps.as_slice();
            prop_assert!(gaps.windows(2).all(|w| w[0] > w[1]));
            prop_assert!(gaps.iter().all(|&g| g > 0));
            if let Some(&last) = gaps.last() {
                prop_assert_eq!(last, 1);
            }
        }
    }
}

#[test]
fn custom_gaps_without_a_final_one_sort_partially() {
    let mut data = vec![6, 5, 4, 3, 2, 1];
    let mut counters = OperationCounters::default();
    sort(
        SortAlgorithm::ShellInsertion(GapStrategy::Custom),
        &mut data,
        &mut counters,
        &[3],
    )
    .unwrap();
    assert_eq!(data, [3, 2, 1, 6, 5, 4]);
    assert_eq!(counters.comparisons, 3);
    assert_eq!(counters.swaps, 6);
}
