#![no_main]

use arbitrary::Arbitrary;
use cardstack_core::{StackStateManager, SwipeDirection};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Swipe(u8),
    Undo,
    Insert { index: u16, position: u16 },
    Delete { index: u16 },
    DeleteAt { position: u16 },
    DeleteMany(Vec<u16>),
    DeleteManyAt(Vec<u16>),
    Shift(i16),
    Reset(u8),
}

#[derive(Debug, Arbitrary)]
struct Input {
    initial: u8,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let mut stack: StackStateManager = StackStateManager::with_cards(usize::from(input.initial));

    for op in input.ops {
        let total_before = stack.total_count();
        match op {
            Op::Swipe(d) => {
                let dir = SwipeDirection::all()[usize::from(d) % 4];
                stack.swipe(dir);
                assert_eq!(stack.total_count(), total_before, "swipe changed total");
            }
            Op::Undo => {
                stack.undo_swipe();
                assert_eq!(stack.total_count(), total_before, "undo changed total");
            }
            // Checked variants: arbitrary arguments must never panic.
            Op::Insert { index, position } => {
                let ok = stack
                    .try_insert(usize::from(index), usize::from(position))
                    .is_ok();
                let expected = if ok { total_before + 1 } else { total_before };
                assert_eq!(stack.total_count(), expected);
            }
            Op::Delete { index } => {
                let _ = stack.try_delete(usize::from(index));
            }
            Op::DeleteAt { position } => {
                let _ = stack.try_delete_at(usize::from(position));
            }
            Op::DeleteMany(indices) => {
                let indices: Vec<usize> = indices.into_iter().map(usize::from).collect();
                let _ = stack.try_delete_many(&indices);
            }
            Op::DeleteManyAt(positions) => {
                let positions: Vec<usize> = positions.into_iter().map(usize::from).collect();
                let _ = stack.try_delete_many_at(&positions);
            }
            Op::Shift(distance) => {
                stack.shift(isize::from(distance));
                assert_eq!(stack.total_count(), total_before, "shift changed total");
            }
            Op::Reset(n) => {
                stack.reset(usize::from(n));
            }
        }

        // Post-conditions that must always hold: stored indices are exactly 0..total.
        let total = stack.total_count();
        let mut seen = vec![false; total];
        let stored = stack
            .remaining()
            .iter()
            .copied()
            .chain(stack.history().iter().map(|s| s.index));
        for index in stored {
            assert!(index < total, "index {index} >= total {total}");
            assert!(!seen[index], "index {index} stored twice");
            seen[index] = true;
        }
    }
});
