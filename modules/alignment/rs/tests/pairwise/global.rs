use std::cell::Cell;

use anyalign_alignment_rs::Alignable;
use anyalign_alignment_rs::pairwise::global::{self, Engine, InputTooLarge, Tracer};
use anyalign_alignment_rs::pairwise::scoring::{Difference, Distance};
use anyalign_alignment_rs::pairwise::{Alignment, Item, Op};

type Pairs = Vec<(Option<usize>, Option<usize>)>;

fn offsets<T>(result: &Alignment<'_, T, f64>) -> Pairs {
    result
        .pairs()
        .iter()
        .map(|x| (x.first().map(|i| i.offset), x.second().map(|i| i.offset)))
        .collect()
}

fn penalized(penalty: f64) -> Difference<f64> {
    let mut diff = Difference::new();
    diff.set_skip(penalty).unwrap();
    diff
}

struct Workload<'a> {
    seq1: &'a [i32],
    seq2: &'a [i32],
    penalty: f64,
    loss: f64,
    pairs: Pairs,
}

fn ensure(w: Workload<'_>) {
    let mirrored: Pairs = w.pairs.iter().map(|(a, b)| (*b, *a)).collect();

    for (seq1, seq2, pairs) in [(w.seq1, w.seq2, &w.pairs), (w.seq2, w.seq1, &mirrored)] {
        let result = global::align_with(seq1, seq2, penalized(w.penalty)).unwrap();
        assert_eq!(*result.loss(), w.loss);
        assert_eq!(&offsets(&result), pairs);

        for pair in result.pairs() {
            if let Some(item) = pair.first() {
                assert_eq!(item.value, &seq1[item.offset]);
            }
            if let Some(item) = pair.second() {
                assert_eq!(item.value, &seq2[item.offset]);
            }
        }
    }
}

#[test]
fn test_workloads() {
    let workload = vec![
        Workload {
            seq1: &[1, 3, 5],
            seq2: &[1, 5],
            penalty: 1.0,
            loss: 1.0,
            pairs: vec![(Some(0), Some(0)), (Some(1), None), (Some(2), Some(1))],
        },
        Workload {
            seq1: &[10, 20, 30, 40],
            seq2: &[10, 21, 40],
            penalty: 5.0,
            loss: 6.0,
            pairs: vec![
                (Some(0), Some(0)),
                (Some(1), Some(1)),
                (Some(2), None),
                (Some(3), Some(2)),
            ],
        },
        Workload {
            seq1: &[],
            seq2: &[1, 2, 3],
            penalty: 2.5,
            loss: 7.5,
            pairs: vec![(None, Some(0)), (None, Some(1)), (None, Some(2))],
        },
        Workload {
            seq1: &[],
            seq2: &[],
            penalty: 1.0,
            loss: 0.0,
            pairs: vec![],
        },
    ];

    for w in workload {
        ensure(w);
    }
}

#[test]
fn test_identical() {
    let seq = [2, 4, 8, 16, 32];
    let result = global::align(&seq, &seq).unwrap();

    assert_eq!(*result.loss(), 0.0);
    assert_eq!(result.len(), seq.len());
    for (ind, pair) in result.pairs().iter().enumerate() {
        assert!(pair.is_match());
        assert_eq!(pair.first().map(|x| x.offset), Some(ind));
        assert_eq!(pair.second().map(|x| x.offset), Some(ind));
    }
    assert_eq!(result.matches().count(), seq.len());
}

#[test]
fn test_one_side_empty() {
    let seq = vec![7u32, 8, 9, 10];
    let empty: Vec<u32> = vec![];

    let mut diff = Difference::new();
    diff.set_skip_first(1.5).unwrap().set_skip_second(4.0).unwrap();

    let result = global::align_with(&empty, &seq, diff).unwrap();
    assert_eq!(*result.loss(), 1.5 * seq.len() as f64);
    assert_eq!(result.len(), seq.len());
    assert!(result.pairs().iter().all(|x| x.is_skip_first()));

    let result = global::align_with(&seq, &empty, diff).unwrap();
    assert_eq!(*result.loss(), 4.0 * seq.len() as f64);
    assert!(result.pairs().iter().all(|x| x.is_skip_second()));

    // Skips are forbidden by default
    let result = global::align(&seq, &empty).unwrap();
    assert!(!result.is_feasible());
    assert_eq!(result.len(), seq.len());
}

#[test]
fn test_forbidden_pairings() {
    // Words can only be paired if they start with the same letter
    let distance = |a: Option<&&str>, b: Option<&&str>| -> Option<f64> {
        match (a, b) {
            (Some(a), Some(b)) if a.chars().next() == b.chars().next() => {
                Some(a.len().abs_diff(b.len()) as f64)
            }
            (Some(_), Some(_)) => None,
            _ => Some(1.5),
        }
    };

    let seq1 = ["apple", "banana", "cherry"];
    let seq2 = ["avocado", "cherry"];
    let result = global::align_with(&seq1, &seq2, distance).unwrap();
    assert_eq!(*result.loss(), 3.5);
    assert_eq!(
        offsets(&result),
        vec![(Some(0), Some(0)), (Some(1), None), (Some(2), Some(1))]
    );

    // No path avoids a forbidden pairing: the dropped pair leaves nothing behind
    let strict = |a: Option<&&str>, b: Option<&&str>| -> Option<f64> {
        let (a, b) = (a?, b?);
        (a.chars().next() == b.chars().next()).then_some(0.0)
    };
    let result = global::align_with(&["apple"], &["banana"], strict).unwrap();
    assert!(!result.is_feasible());
    assert!(result.is_empty());

    // Forbidden pairs are dropped, others are kept
    let result = global::align_with(&["apple", "avocado"], &["apricot"], strict).unwrap();
    assert!(!result.is_feasible());
    assert_eq!(offsets(&result), vec![(Some(0), Some(0))]);
}

#[test]
fn test_tie_break() {
    // Matching costs exactly as much as skipping both elements
    let distance = |a: Option<&i32>, b: Option<&i32>| -> Option<f64> {
        match (a, b) {
            (Some(a), Some(b)) => Some(((a - b).abs() + 2) as f64),
            _ => Some(1.0),
        }
    };

    let seq = [3, 3, 3];
    let result = global::align_with(&seq, &seq, distance).unwrap();
    assert_eq!(*result.loss(), 6.0);
    assert!(result.pairs().iter().all(|x| x.is_match()));

    // Repeated runs produce the very same alignment
    for _ in 0..3 {
        assert_eq!(global::align_with(&seq, &seq, distance).unwrap(), result);
    }

    // Skip-first is preferred over skip-second when matching is too expensive
    let distance = |a: Option<&i32>, b: Option<&i32>| -> Option<f64> {
        Some(if a.is_some() && b.is_some() { 10.0 } else { 1.0 })
    };
    let result = global::align_with(&[1], &[2], distance).unwrap();
    assert_eq!(offsets(&result), vec![(None, Some(0)), (Some(0), None)]);
}

#[test]
fn test_symmetric_loss() {
    // Deterministic pseudo-random sequences
    let mut state = 17u64;
    let mut next = move |len: usize| -> Vec<i64> {
        (0..len)
            .map(|_| {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                ((state >> 33) % 20) as i64
            })
            .collect()
    };

    for (len1, len2) in [(5, 7), (12, 3), (20, 20), (1, 9), (0, 4)] {
        let (seq1, seq2) = (next(len1), next(len2));
        let (rev1, rev2) = (seq1.reversed(), seq2.reversed());
        for penalty in [0.0, 1.0, 3.0] {
            let forward = global::align_with(&seq1, &seq2, penalized(penalty)).unwrap();
            let backward = global::align_with(&seq2, &seq1, penalized(penalty)).unwrap();
            assert_eq!(forward.loss(), backward.loss());

            // Global alignment is invariant to reversing both sequences
            let reversed = global::align_with(&rev1, &rev2, penalized(penalty)).unwrap();
            assert_eq!(forward.loss(), reversed.loss());
        }
    }
}

#[test]
fn test_penalty_monotonicity() {
    let seq1 = [3, 9, 1, 4, 4, 8];
    let seq2 = [9, 2, 4, 7];

    let baseline = *global::align_with(&seq1, &seq2, penalized(0.0)).unwrap().loss();
    let mut previous = baseline;
    for penalty in [0.25, 1.0, 2.0, 10.0, f64::INFINITY] {
        let loss = *global::align_with(&seq1, &seq2, penalized(penalty)).unwrap().loss();
        assert!(loss >= baseline);
        assert!(loss >= previous);
        previous = loss;
    }
}

#[test]
fn test_positional_distance() {
    // Equal elements only, each offset of displacement costs 1
    struct Displacement;

    impl Distance<char, f32> for Displacement {
        fn distance(&self, a: Option<Item<'_, char>>, b: Option<Item<'_, char>>) -> Option<f32> {
            match (a, b) {
                (Some(a), Some(b)) => {
                    (a.value == b.value).then(|| a.offset.abs_diff(b.offset) as f32)
                }
                _ => Some(2.0),
            }
        }
    }

    let seq1: Vec<char> = "xabc".chars().collect();
    let seq2: Vec<char> = "abcy".chars().collect();
    let result = global::align_with(&seq1, &seq2, Displacement).unwrap();

    // x and y are skipped (2 + 2), each match is displaced by one position (1 + 1 + 1)
    assert_eq!(*result.loss(), 7.0);
    let matched: Vec<_> = result.matches().map(|(a, b)| (*a.value, *b.value)).collect();
    assert_eq!(matched, vec![('a', 'a'), ('b', 'b'), ('c', 'c')]);
    assert_eq!(result.pairs().first().map(|x| x.op()), Some(Op::SkipSecond));
    assert_eq!(result.pairs().last().map(|x| x.op()), Some(Op::SkipFirst));
}

#[derive(Default)]
struct Recorder {
    started: Option<(usize, usize)>,
    cells: Vec<(usize, usize)>,
    forbidden: usize,
    finished: Option<f64>,
}

impl Tracer<f64> for Recorder {
    fn start(&mut self, len1: usize, len2: usize) {
        self.started = Some((len1, len2));
    }

    fn forbidden(&mut self, _: usize, _: usize, _: Op) {
        self.forbidden += 1;
    }

    fn cell(&mut self, seq1: usize, seq2: usize, _: Option<Op>, _: f64) {
        self.cells.push((seq1, seq2));
    }

    fn finish(&mut self, loss: f64) {
        self.finished = Some(loss);
    }
}

#[test]
fn test_tracer() {
    let mut recorder = Recorder::default();
    let calls = Cell::new(0usize);
    let distance = |a: Option<&i32>, b: Option<&i32>| -> Option<f64> {
        calls.set(calls.get() + 1);
        Some((a.copied().unwrap_or(0) - b.copied().unwrap_or(0)).abs() as f64)
    };

    let (seq1, seq2) = ([1, 2, 3], [2, 3]);
    let mut engine = Engine::new(distance).with_tracer(&mut recorder);
    let result = engine.align(&seq1, &seq2).unwrap();
    let loss = *result.loss();
    drop(engine);

    assert_eq!(recorder.started, Some((3, 2)));
    assert_eq!(recorder.finished, Some(loss));
    assert_eq!(recorder.forbidden, 0);

    // Every cell is settled exactly once, from the end towards the start
    assert_eq!(recorder.cells.len(), 4 * 3);
    assert_eq!(recorder.cells.first(), Some(&(3, 2)));
    assert_eq!(recorder.cells.last(), Some(&(0, 0)));
    let mut unique = recorder.cells.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), recorder.cells.len());

    // 3 candidates per inner cell, 1 per border cell
    assert_eq!(calls.get(), 3 * 2 * 3 + 3 + 2);
}

#[test]
fn test_input_too_large() {
    let mut recorder = Recorder::default();
    let calls = Cell::new(0usize);
    let distance = |_: Option<&u8>, _: Option<&u8>| -> Option<f64> {
        calls.set(calls.get() + 1);
        Some(0.0)
    };

    let long = vec![0u8; global::MAX_SEQUENCE_LEN + 1];
    let mut engine = Engine::new(distance).with_tracer(&mut recorder);
    let err = engine.align(&long, &[1u8, 2]).unwrap_err();
    drop(engine);

    let err = err.downcast_ref::<InputTooLarge>().unwrap();
    assert_eq!(err.len, 901);
    assert_eq!(err.limit, 900);

    // Nothing was computed
    assert_eq!(calls.get(), 0);
    assert_eq!(recorder.started, None);
    assert!(recorder.cells.is_empty());
    assert_eq!(recorder.finished, None);
}

#[test]
fn test_f32_losses() {
    let mut diff = Difference::<f32>::new();
    diff.set_skip(0.5).unwrap();

    let result = global::align_with(&[1u8, 2, 3], &[1u8, 3], diff).unwrap();
    assert_eq!(*result.loss(), 0.5f32);
    assert_eq!(result.len(), 3);
}
