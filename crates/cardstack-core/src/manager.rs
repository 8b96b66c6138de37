#![forbid(unsafe_code)]

//! Index bookkeeping for a stack of swipeable cards.
//!
//! [`StackStateManager`] tracks, independent of any rendering, which
//! data-source indices are still on the stack and which have been swiped off
//! (with their direction, in order, so they can be undone).
//!
//! # Invariants
//!
//! 1. No data-source index appears twice across `remaining` and `history`
//! 2. `total_count() == remaining.len() + history.len()`; swipe, undo and
//!    shift only move indices, they never add or drop one
//! 3. Every stored index is `< total_count()`, so the stored indices are
//!    exactly `0..total_count()`
//! 4. Cards in `remaining` keep their relative order except through swipe
//!    (front removed), shift (rotation), insert and delete (one element added
//!    or removed)
//!
//! # Data Model
//!
//! ```text
//! reset(5); swipe(Right); swipe(Left)
//! ┌──────────────────────────────────────────────┐
//! │ remaining: [2, 3, 4]       (front = top card) │
//! │ history:   [(0, Right), (1, Left)]            │
//! └──────────────────────────────────────────────┘
//!
//! insert(index = 1, position = 0)   every stored index >= 1 moves up by one
//! ┌──────────────────────────────────────────────┐
//! │ remaining: [1, 3, 4, 5]                       │
//! │ history:   [(0, Right), (2, Left)]            │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Failure Modes
//!
//! Emptiness is benign: swiping an empty stack, undoing with no history and
//! rotating an empty stack are silent no-ops. Arguments that disagree with
//! the tracked data source (out-of-range positions or indices, duplicates in
//! a batch) mean the caller and its data source have drifted apart; the
//! unchecked operations panic on them, the `try_*` twins return a
//! [`StackError`] and leave the stack untouched.

use std::fmt;

use crate::config::{StackConfig, StackConfigError};
use crate::error::{StackError, StackResult};
use crate::swipe::{Swipe, SwipeDirection};

/// Tracks remaining and swiped data-source indices for a card stack.
///
/// `D` is the direction token recorded with each swipe. It is stored and
/// handed back unchanged.
#[derive(Clone, PartialEq, Eq)]
pub struct StackStateManager<D = SwipeDirection> {
    /// Indices still on the stack, top card first.
    remaining: Vec<usize>,
    /// Swiped cards, oldest first.
    history: Vec<Swipe<D>>,
    config: StackConfig,
}

impl<D: fmt::Debug> fmt::Debug for StackStateManager<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackStateManager")
            .field("remaining", &self.remaining)
            .field("history", &self.history)
            .field("visible_cards", &self.config.visible_cards)
            .finish()
    }
}

impl<D> Default for StackStateManager<D> {
    fn default() -> Self {
        Self {
            remaining: Vec::new(),
            history: Vec::new(),
            config: StackConfig::default(),
        }
    }
}

/// Owned copy of a stack's state at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackSnapshot<D = SwipeDirection> {
    /// Indices still on the stack, top card first.
    pub remaining: Vec<usize>,
    /// Swiped cards, oldest first.
    pub history: Vec<Swipe<D>>,
}

impl<D> StackSnapshot<D> {
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.remaining.len() + self.history.len()
    }
}

impl<D> StackStateManager<D> {
    /// Create an empty stack with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Indices still on the stack, top card first.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &[usize] {
        &self.remaining
    }

    /// Swiped cards in the order they were swiped, most recent last.
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Swipe<D>] {
        &self.history
    }

    /// Number of data-source indices the stack tracks, swiped or not.
    #[inline]
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.remaining.len() + self.history.len()
    }

    #[inline]
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    #[inline]
    #[must_use]
    pub fn swipe_count(&self) -> usize {
        self.history.len()
    }

    /// True when no cards remain to be swiped.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Data-source index of the top card.
    #[must_use]
    pub fn top_index(&self) -> Option<usize> {
        self.remaining.first().copied()
    }

    /// The swipe that `undo_swipe` would revert next.
    #[must_use]
    pub fn last_swipe(&self) -> Option<&Swipe<D>> {
        self.history.last()
    }

    /// Stack position of a data-source index, if it has not been swiped.
    #[must_use]
    pub fn position_of(&self, index: usize) -> Option<usize> {
        self.remaining.iter().position(|&i| i == index)
    }

    #[must_use]
    pub fn is_swiped(&self, index: usize) -> bool {
        self.history.iter().any(|s| s.index == index)
    }

    /// The top `config.visible_cards` indices, top card first.
    #[must_use]
    pub fn visible_indices(&self) -> &[usize] {
        let n = self.config.visible_cards.min(self.remaining.len());
        &self.remaining[..n]
    }

    #[must_use]
    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Owned copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> StackSnapshot<D>
    where
        D: Clone,
    {
        StackSnapshot {
            remaining: self.remaining.clone(),
            history: self.history.clone(),
        }
    }
}

impl<D: fmt::Debug> StackStateManager<D> {
    /// Create a stack over the data-source indices `0..number_of_cards`.
    #[must_use]
    pub fn with_cards(number_of_cards: usize) -> Self {
        let mut stack = Self::new();
        stack.reset(number_of_cards);
        stack
    }

    /// Create a stack from a configuration, reset to `config.initial_cards`.
    ///
    /// # Panics
    ///
    /// Panics if `config.validate()` reports problems. Use
    /// [`try_with_config`](Self::try_with_config) to get an error instead.
    #[must_use]
    #[track_caller]
    pub fn with_config(config: StackConfig) -> Self {
        match Self::try_with_config(config) {
            Ok(stack) => stack,
            Err(err) => panic!("{err}"),
        }
    }

    /// Checked [`with_config`](Self::with_config).
    pub fn try_with_config(config: StackConfig) -> Result<Self, StackConfigError> {
        let errors = config.validate();
        if !errors.is_empty() {
            tracing::warn!(?errors, "rejecting invalid stack config");
            return Err(StackConfigError::Validation(errors));
        }

        let initial = config.initial_cards;
        let mut stack = Self {
            config,
            ..Self::default()
        };
        stack.reset(initial);
        Ok(stack)
    }

    // ========================================================================
    // Core Operations
    // ========================================================================

    /// Swipe the top card off the stack in `direction`.
    ///
    /// Returns the swiped data-source index, or `None` (leaving the stack
    /// untouched) when no cards remain.
    pub fn swipe(&mut self, direction: D) -> Option<usize> {
        if self.remaining.is_empty() {
            tracing::trace!(?direction, "swipe on empty stack ignored");
            return None;
        }

        let index = self.remaining.remove(0);
        tracing::debug!(index, ?direction, "card swiped");
        self.history.push(Swipe::new(index, direction));

        self.trace_op("swipe");
        Some(index)
    }

    /// Revert the most recent swipe, putting its card back on top.
    ///
    /// Returns the reverted swipe so the UI layer knows which card to bring
    /// back and from which direction, or `None` when there is nothing to undo.
    pub fn undo_swipe(&mut self) -> Option<Swipe<D>> {
        let Some(swipe) = self.history.pop() else {
            tracing::trace!("undo with empty history ignored");
            return None;
        };

        self.remaining.insert(0, swipe.index);
        tracing::debug!(index = swipe.index, direction = ?swipe.direction, "swipe undone");

        self.trace_op("undo_swipe");
        Some(swipe)
    }

    /// Insert a new data-source index at `position` (0 = top).
    ///
    /// Every tracked index `>= index`, swiped or not, moves up by one so it
    /// keeps pointing at the same item in the caller's data source.
    ///
    /// # Panics
    ///
    /// Panics if `index > total_count()` or `position > remaining_count()`.
    /// Use [`try_insert`](Self::try_insert) to get an error instead.
    #[track_caller]
    pub fn insert(&mut self, index: usize, position: usize) {
        if let Err(err) = self.try_insert(index, position) {
            panic!("{err}");
        }
    }

    /// Checked [`insert`](Self::insert).
    pub fn try_insert(&mut self, index: usize, position: usize) -> StackResult {
        let total = self.total_count();
        if index > total {
            return Err(self.reject(
                "insert",
                StackError::InsertIndexOutOfRange { index, total },
            ));
        }
        let len = self.remaining.len();
        if position > len {
            return Err(self.reject(
                "insert",
                StackError::InsertPositionOutOfRange { position, len },
            ));
        }

        for i in &mut self.remaining {
            if *i >= index {
                *i += 1;
            }
        }
        for swipe in &mut self.history {
            if swipe.index >= index {
                swipe.index += 1;
            }
        }
        self.remaining.insert(position, index);
        tracing::debug!(index, position, "card inserted");

        self.trace_op("insert");
        Ok(())
    }

    /// Remove a data-source index from the stack, wherever it is.
    ///
    /// The index may be on the stack or in the swipe history. Every tracked
    /// index above it moves down by one.
    ///
    /// # Panics
    ///
    /// Panics if `index >= total_count()`.
    #[track_caller]
    pub fn delete(&mut self, index: usize) {
        if let Err(err) = self.try_delete(index) {
            panic!("{err}");
        }
    }

    /// Checked [`delete`](Self::delete).
    pub fn try_delete(&mut self, index: usize) -> StackResult {
        self.check_index("delete", index)?;
        self.remove_and_renumber(index);
        self.trace_op("delete");
        Ok(())
    }

    /// Remove several data-source indices, named in the numbering that holds
    /// before the call.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range or listed twice.
    #[track_caller]
    pub fn delete_many(&mut self, indices: &[usize]) {
        if let Err(err) = self.try_delete_many(indices) {
            panic!("{err}");
        }
    }

    /// Checked [`delete_many`](Self::delete_many).
    pub fn try_delete_many(&mut self, indices: &[usize]) -> StackResult {
        for &index in indices {
            self.check_index("delete_many", index)?;
        }
        let sorted = match sorted_unique(indices) {
            Ok(sorted) => sorted,
            Err(index) => {
                return Err(self.reject("delete_many", StackError::DuplicateIndex { index }));
            }
        };

        // Highest first, so each removal leaves the smaller targets' numbers intact.
        for &index in sorted.iter().rev() {
            self.remove_and_renumber(index);
        }
        self.trace_op("delete_many");
        Ok(())
    }

    /// Remove the card at stack `position` (0 = top).
    ///
    /// # Panics
    ///
    /// Panics if `position >= remaining_count()`.
    #[track_caller]
    pub fn delete_at(&mut self, position: usize) {
        if let Err(err) = self.try_delete_at(position) {
            panic!("{err}");
        }
    }

    /// Checked [`delete_at`](Self::delete_at).
    pub fn try_delete_at(&mut self, position: usize) -> StackResult {
        self.check_position("delete_at", position)?;
        let index = self.remaining[position];
        self.remove_and_renumber(index);
        self.trace_op("delete_at");
        Ok(())
    }

    /// Remove the cards at several stack positions, named in the layout that
    /// holds before the call.
    ///
    /// # Panics
    ///
    /// Panics if any position is out of range or listed twice.
    #[track_caller]
    pub fn delete_many_at(&mut self, positions: &[usize]) {
        if let Err(err) = self.try_delete_many_at(positions) {
            panic!("{err}");
        }
    }

    /// Checked [`delete_many_at`](Self::delete_many_at).
    pub fn try_delete_many_at(&mut self, positions: &[usize]) -> StackResult {
        for &position in positions {
            self.check_position("delete_many_at", position)?;
        }
        if let Err(position) = sorted_unique(positions) {
            return Err(self.reject(
                "delete_many_at",
                StackError::DuplicatePosition { position },
            ));
        }

        // Distinct positions hold distinct indices.
        let mut indices: Vec<usize> = positions.iter().map(|&p| self.remaining[p]).collect();
        indices.sort_unstable();
        for &index in indices.iter().rev() {
            self.remove_and_renumber(index);
        }
        self.trace_op("delete_many_at");
        Ok(())
    }

    /// Rotate the remaining cards without swiping any of them.
    ///
    /// A positive `distance` moves the top card toward the back:
    /// `[0, 1, 2, 3]` shifted by `1` becomes `[1, 2, 3, 0]`. A negative
    /// distance rotates the other way, so shifting by `-1` gives
    /// `[3, 0, 1, 2]`. Distances wrap modulo the number of remaining cards.
    pub fn shift(&mut self, distance: isize) {
        let len = self.remaining.len();
        if len == 0 {
            tracing::trace!(distance, "shift on empty stack ignored");
            return;
        }

        // A Vec never holds more than isize::MAX elements.
        let steps = distance.rem_euclid(len as isize) as usize;
        if steps == 0 {
            tracing::trace!(distance, len, "shift by a full rotation ignored");
            return;
        }

        self.remaining.rotate_left(steps);
        tracing::debug!(distance, steps, "stack shifted");
        self.trace_op("shift");
    }

    /// Start over with the indices `0..number_of_cards` and no history.
    pub fn reset(&mut self, number_of_cards: usize) {
        self.remaining = (0..number_of_cards).collect();
        self.history.clear();
        tracing::debug!(number_of_cards, "stack reset");
        self.trace_op("reset");
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn check_index(&self, operation: &'static str, index: usize) -> StackResult {
        let total = self.total_count();
        if index >= total {
            return Err(self.reject(operation, StackError::IndexOutOfRange { index, total }));
        }
        Ok(())
    }

    fn check_position(&self, operation: &'static str, position: usize) -> StackResult {
        let len = self.remaining.len();
        if position >= len {
            return Err(self.reject(
                operation,
                StackError::PositionOutOfRange { position, len },
            ));
        }
        Ok(())
    }

    fn reject(&self, operation: &'static str, err: StackError) -> StackError {
        tracing::warn!(
            operation,
            error = %err,
            remaining = self.remaining.len(),
            swiped = self.history.len(),
            "stack operation rejected"
        );
        err
    }

    /// Drop `index` from both sequences and close the gap in the numbering.
    ///
    /// The caller has checked `index < total_count()`.
    fn remove_and_renumber(&mut self, index: usize) {
        self.remaining.retain(|&i| i != index);
        self.history.retain(|s| s.index != index);

        for i in &mut self.remaining {
            if *i > index {
                *i -= 1;
            }
        }
        for swipe in &mut self.history {
            if swipe.index > index {
                swipe.index -= 1;
            }
        }
        tracing::debug!(index, "card deleted");
    }

    fn trace_op(&self, operation: &'static str) {
        let _span = tracing::debug_span!(
            "stack.op",
            operation,
            remaining = self.remaining.len(),
            swiped = self.history.len(),
            top = ?self.remaining.first()
        )
        .entered();

        #[cfg(debug_assertions)]
        self.debug_assert_consistent();
    }

    #[cfg(debug_assertions)]
    fn debug_assert_consistent(&self) {
        let total = self.total_count();
        let mut seen = vec![false; total];
        let stored = self
            .remaining
            .iter()
            .copied()
            .chain(self.history.iter().map(|s| s.index));
        for index in stored {
            assert!(index < total, "stored index {index} >= total {total}");
            assert!(!seen[index], "index {index} tracked twice");
            seen[index] = true;
        }
    }
}

/// Sort a copy of `values`, reporting the first duplicate found.
fn sorted_unique(values: &[usize]) -> Result<Vec<usize>, usize> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    match sorted.windows(2).find(|w| w[0] == w[1]) {
        Some(w) => Err(w[0]),
        None => Ok(sorted),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swipe::SwipeDirection::{Down, Left, Right, Up};

    fn stack_of(remaining: &[usize], history: &[(usize, SwipeDirection)]) -> StackStateManager {
        StackStateManager {
            remaining: remaining.to_vec(),
            history: history.iter().map(|&(i, d)| Swipe::new(i, d)).collect(),
            config: StackConfig::default(),
        }
    }

    fn swiped_indices<D>(stack: &StackStateManager<D>) -> Vec<usize> {
        stack.history().iter().map(|s| s.index).collect()
    }

    #[test]
    fn new_stack_is_empty() {
        let stack: StackStateManager = StackStateManager::new();
        assert!(stack.is_empty());
        assert!(!stack.can_undo());
        assert_eq!(stack.total_count(), 0);
        assert_eq!(stack.top_index(), None);
    }

    #[test]
    fn reset_fills_in_order() {
        let mut stack: StackStateManager = StackStateManager::new();
        stack.reset(4);
        assert_eq!(stack.remaining(), &[0, 1, 2, 3]);
        assert!(stack.history().is_empty());
        assert_eq!(stack.top_index(), Some(0));
    }

    #[test]
    fn reset_to_zero_clears_everything() {
        let mut stack = StackStateManager::with_cards(3);
        stack.swipe(Left);
        stack.reset(0);
        assert!(stack.is_empty());
        assert!(!stack.can_undo());
    }

    #[test]
    fn swipe_moves_top_card_to_history() {
        let mut stack = StackStateManager::with_cards(3);
        assert_eq!(stack.swipe(Right), Some(0));
        assert_eq!(stack.remaining(), &[1, 2]);
        assert_eq!(stack.history(), &[Swipe::new(0, Right)]);
        assert_eq!(stack.total_count(), 3);
    }

    #[test]
    fn swipe_on_empty_stack_is_noop() {
        let mut stack: StackStateManager = StackStateManager::new();
        assert_eq!(stack.swipe(Up), None);
        assert_eq!(stack.swipe(Up), None);
        assert_eq!(stack.total_count(), 0);
        assert!(!stack.can_undo());
    }

    #[test]
    fn undo_is_lifo() {
        let mut stack = StackStateManager::with_cards(3);
        stack.swipe(Left);
        stack.swipe(Down);

        assert_eq!(stack.last_swipe(), Some(&Swipe::new(1, Down)));
        assert_eq!(stack.undo_swipe(), Some(Swipe::new(1, Down)));
        assert_eq!(stack.remaining(), &[1, 2]);
        assert_eq!(stack.undo_swipe(), Some(Swipe::new(0, Left)));
        assert_eq!(stack.remaining(), &[0, 1, 2]);
        assert_eq!(stack.undo_swipe(), None);
    }

    #[test]
    fn undo_puts_card_on_top_after_shift() {
        let mut stack = StackStateManager::with_cards(4);
        stack.swipe(Left);
        stack.shift(1);
        assert_eq!(stack.remaining(), &[2, 3, 1]);
        stack.undo_swipe();
        assert_eq!(stack.remaining(), &[0, 2, 3, 1]);
    }

    #[test]
    fn insert_renumbers_remaining_and_history() {
        let mut stack = stack_of(&[3, 1, 4], &[(0, Left)]);
        // A second swipe so the stored indices cover 0..5.
        stack.history.push(Swipe::new(2, Up));
        stack.insert(2, 1);
        assert_eq!(stack.remaining(), &[4, 2, 1, 5]);
        assert_eq!(swiped_indices(&stack), vec![0, 3]);
        assert_eq!(stack.total_count(), 6);
    }

    #[test]
    fn insert_at_end_and_past_max_index() {
        let mut stack = StackStateManager::<SwipeDirection>::with_cards(2);
        stack.insert(2, 2);
        assert_eq!(stack.remaining(), &[0, 1, 2]);
        stack.insert(0, 3);
        assert_eq!(stack.remaining(), &[1, 2, 3, 0]);
    }

    #[test]
    fn insert_into_empty_stack() {
        let mut stack: StackStateManager = StackStateManager::new();
        stack.insert(0, 0);
        assert_eq!(stack.remaining(), &[0]);
    }

    #[test]
    fn try_insert_rejects_without_mutating() {
        let mut stack = StackStateManager::with_cards(3);
        stack.swipe(Left);
        let before = stack.snapshot();

        assert_eq!(
            stack.try_insert(4, 0),
            Err(StackError::InsertIndexOutOfRange { index: 4, total: 3 })
        );
        assert_eq!(
            stack.try_insert(1, 3),
            Err(StackError::InsertPositionOutOfRange {
                position: 3,
                len: 2
            })
        );
        assert_eq!(stack.snapshot(), before);
    }

    #[test]
    #[should_panic(expected = "cannot insert index 10")]
    fn insert_past_total_panics() {
        let mut stack = StackStateManager::<SwipeDirection>::with_cards(3);
        stack.insert(10, 0);
    }

    #[test]
    #[should_panic(expected = "cannot insert at position 5")]
    fn insert_past_end_panics() {
        let mut stack = StackStateManager::<SwipeDirection>::with_cards(3);
        stack.insert(0, 5);
    }

    #[test]
    fn delete_remaining_index_renumbers() {
        let mut stack = StackStateManager::with_cards(5);
        stack.swipe(Left); // history [0]
        stack.delete(2);
        assert_eq!(stack.remaining(), &[1, 2, 3]);
        assert_eq!(swiped_indices(&stack), vec![0]);
        assert_eq!(stack.total_count(), 4);
    }

    #[test]
    fn delete_swiped_index_drops_it_from_history() {
        let mut stack = StackStateManager::with_cards(4);
        stack.swipe(Left);
        stack.swipe(Right);
        stack.delete(0);
        assert_eq!(stack.history(), &[Swipe::new(0, Right)]);
        assert_eq!(stack.remaining(), &[1, 2]);
    }

    #[test]
    fn delete_many_uses_pre_call_numbering() {
        let mut stack = StackStateManager::<SwipeDirection>::with_cards(6);
        stack.shift(2); // [2, 3, 4, 5, 0, 1]
        stack.delete_many(&[4, 1, 2]);
        // Survivors 0, 3, 5 renumber to 0, 1, 2.
        assert_eq!(stack.remaining(), &[1, 2, 0]);
    }

    #[test]
    fn delete_many_with_duplicates_is_rejected() {
        let mut stack: StackStateManager = StackStateManager::with_cards(4);
        assert_eq!(
            stack.try_delete_many(&[1, 3, 1]),
            Err(StackError::DuplicateIndex { index: 1 })
        );
        assert_eq!(stack.remaining(), &[0, 1, 2, 3]);
    }

    #[test]
    fn delete_at_removes_card_at_position() {
        let mut stack = StackStateManager::<SwipeDirection>::with_cards(4);
        stack.shift(-1); // [3, 0, 1, 2]
        stack.delete_at(1);
        assert_eq!(stack.remaining(), &[2, 0, 1]);
    }

    #[test]
    fn delete_many_at_uses_pre_call_layout() {
        let mut stack = StackStateManager::with_cards(5);
        stack.shift(1); // [1, 2, 3, 4, 0]
        stack.swipe(Up); // history [1], remaining [2, 3, 4, 0]
        stack.delete_many_at(&[3, 1]);
        // Deleted 0 and 3; survivors 1, 2, 4 renumber to 0, 1, 2.
        assert_eq!(stack.remaining(), &[1, 2]);
        assert_eq!(swiped_indices(&stack), vec![0]);
    }

    #[test]
    fn try_delete_at_rejects_bad_positions() {
        let mut stack: StackStateManager = StackStateManager::with_cards(2);
        assert_eq!(
            stack.try_delete_at(2),
            Err(StackError::PositionOutOfRange {
                position: 2,
                len: 2
            })
        );
        assert_eq!(
            stack.try_delete_many_at(&[0, 0]),
            Err(StackError::DuplicatePosition { position: 0 })
        );
        assert_eq!(stack.remaining(), &[0, 1]);
    }

    #[test]
    #[should_panic(expected = "index 3 out of range")]
    fn delete_unknown_index_panics() {
        let mut stack = StackStateManager::<SwipeDirection>::with_cards(3);
        stack.delete(3);
    }

    #[test]
    fn shift_positive_moves_top_to_back() {
        let mut stack = StackStateManager::<SwipeDirection>::with_cards(4);
        stack.shift(1);
        assert_eq!(stack.remaining(), &[1, 2, 3, 0]);
        stack.shift(2);
        assert_eq!(stack.remaining(), &[3, 0, 1, 2]);
    }

    #[test]
    fn shift_negative_moves_back_to_top() {
        let mut stack = StackStateManager::<SwipeDirection>::with_cards(4);
        stack.shift(-1);
        assert_eq!(stack.remaining(), &[3, 0, 1, 2]);
        stack.shift(-3);
        assert_eq!(stack.remaining(), &[0, 1, 2, 3]);
    }

    #[test]
    fn shift_wraps_modulo_length() {
        let mut stack = StackStateManager::<SwipeDirection>::with_cards(3);
        stack.shift(7);
        assert_eq!(stack.remaining(), &[1, 2, 0]);
        stack.shift(-7);
        assert_eq!(stack.remaining(), &[0, 1, 2]);
        stack.shift(3);
        assert_eq!(stack.remaining(), &[0, 1, 2]);
        stack.shift(isize::MIN);
        assert_eq!(stack.total_count(), 3);
    }

    #[test]
    fn shift_on_empty_stack_is_noop() {
        let mut stack = StackStateManager::<SwipeDirection>::new();
        stack.shift(5);
        stack.shift(-5);
        assert!(stack.is_empty());
    }

    #[test]
    fn visible_indices_follow_config() {
        let config = StackConfig::default()
            .with_visible_cards(3)
            .with_initial_cards(5);
        let mut stack = StackStateManager::<SwipeDirection>::with_config(config);
        assert_eq!(stack.visible_indices(), &[0, 1, 2]);
        stack.swipe(Left);
        stack.swipe(Left);
        stack.swipe(Left);
        assert_eq!(stack.visible_indices(), &[3, 4]);
    }

    #[test]
    fn try_with_config_rejects_zero_visible_cards() {
        let result = StackStateManager::<SwipeDirection>::try_with_config(StackConfig::new(0, 5));
        match result {
            Err(StackConfigError::Validation(errors)) => {
                assert!(errors[0].contains("visible_cards"), "{errors:?}");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    #[should_panic(expected = "visible_cards must be > 0")]
    fn with_config_panics_on_invalid_config() {
        let _ = StackStateManager::<SwipeDirection>::with_config(StackConfig::new(0, 5));
    }

    #[test]
    fn position_and_swiped_lookups() {
        let mut stack = StackStateManager::with_cards(3);
        stack.swipe(Right);
        assert_eq!(stack.position_of(2), Some(1));
        assert_eq!(stack.position_of(0), None);
        assert!(stack.is_swiped(0));
        assert!(!stack.is_swiped(1));
    }

    #[test]
    fn opaque_direction_tokens_roundtrip() {
        let mut stack: StackStateManager<&str> = StackStateManager::with_cards(2);
        stack.swipe("north-east");
        assert_eq!(stack.undo_swipe(), Some(Swipe::new(0, "north-east")));
    }

    #[test]
    fn snapshot_is_detached() {
        let mut stack = StackStateManager::with_cards(2);
        let snap = stack.snapshot();
        stack.swipe(Left);
        assert_eq!(snap.remaining, vec![0, 1]);
        assert_eq!(snap.total_count(), 2);
    }

    #[test]
    fn sorted_unique_reports_first_duplicate() {
        assert_eq!(sorted_unique(&[3, 1, 2]), Ok(vec![1, 2, 3]));
        assert_eq!(sorted_unique(&[5, 2, 5, 2]), Err(2));
        assert_eq!(sorted_unique(&[]), Ok(vec![]));
    }
}
