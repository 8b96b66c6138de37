#![forbid(unsafe_code)]

//! Index bookkeeping for swipeable card stacks.
//!
//! A card-stack UI shows items from an external data source as a pile of
//! cards the user swipes off one at a time. This crate owns the part of that
//! UI with real invariants: which data-source indices are still on the pile,
//! which were swiped (and which way, for undo), and how every outstanding
//! index is renumbered when items are inserted into or deleted from the data
//! source. Rendering, gestures and animation stay with the caller, which
//! drives a [`StackStateManager`] and reads plain values back.
//!
//! ```
//! use cardstack_core::{StackStateManager, Swipe, SwipeDirection};
//!
//! let mut stack: StackStateManager = StackStateManager::with_cards(3);
//! assert_eq!(stack.swipe(SwipeDirection::Right), Some(0));
//! assert_eq!(stack.remaining(), &[1, 2]);
//!
//! assert_eq!(stack.undo_swipe(), Some(Swipe::new(0, SwipeDirection::Right)));
//! assert_eq!(stack.remaining(), &[0, 1, 2]);
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Swipe`], [`SwipeDirection`],
//!   [`StackSnapshot`] and [`StackConfig`]
//! - `config`: load [`StackConfig`] from TOML or JSON (implies `serde`)

pub mod config;
pub mod error;
pub mod manager;
pub mod swipe;

pub use config::{DEFAULT_VISIBLE_CARDS, StackConfig, StackConfigError};
pub use error::{StackError, StackResult};
pub use manager::{StackSnapshot, StackStateManager};
pub use swipe::{Swipe, SwipeDirection};
