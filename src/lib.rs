//! This crate provides [`CursorSeq`], a singly-linked sequence of `f64` values
//! with one distinguished *current element*, the cursor.
//!
//! Elements are inserted right before or right after the cursor, and the
//! cursor only moves forward. Every insertion, removal and cursor move takes
//! constant time.
//!
//! Here is a quick example showing how the sequence works.
//!
//! ```
//! use cursor_seq::CursorSeq;
//!
//! let mut seq = CursorSeq::new();
//!
//! seq.add_after(1.0); // <[1.0]>
//! seq.add_after(3.0); // <1.0, [3.0]>
//! seq.add_before(2.0); // insert before the cursor, which moves onto it
//! assert_eq!(seq.get_current(), Ok(2.0));
//! assert_eq!(seq.to_string(), "<1.0, [2.0], 3.0>");
//!
//! seq.start(); // back to the head
//! assert_eq!(seq.remove_current(), Ok(1.0));
//! assert_eq!(seq.to_string(), "<[2.0], 3.0>");
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the sequence is like the following graph:
//! ```text
//!                 head             precursor          cursor              tail
//!                  │                   │                 │                  │
//!                  ↓                   ↓                 ↓                  ↓
//!            ┌───────────┐       ┌───────────┐     ┌───────────┐      ┌───────────┐
//!  arena ─── │ element   │       │ element   │     │ element   │      │ element   │
//!            ├───────────┤       ├───────────┤     ├───────────┤      ├───────────┤
//!            │ next      │ ─┄┄─→ │ next      │ ──→ │ next      │ ─┄┄→ │ next:None │
//!            └───────────┘       └───────────┘     └───────────┘      └───────────┘
//! ```
//! Nodes live in an arena owned by the sequence and refer to each other by
//! index, so the four tracking references never alias a borrow. Slots vacated
//! by [`remove_current`] are reused by later insertions.
//!
//! The `precursor` always trails the `cursor` by exactly one link, and is
//! absent when the cursor is the head or absent. It is what makes
//! [`add_before`] and [`remove_current`] constant time on a singly-linked
//! chain.
//!
//! # Copies
//!
//! [`Clone`] makes a deep copy: the copy owns a fresh chain of nodes and its
//! cursor sits at the same position. [`add_all`] and [`concatenation`] append
//! copies, so the sequences they read from are never changed afterwards by
//! edits to the result.
//!
//! ```
//! use cursor_seq::{concatenation, CursorSeq};
//!
//! let mut s1: CursorSeq = [1.0, 2.0].iter().copied().collect();
//! s1.start();
//! let s2: CursorSeq = [3.0].iter().copied().collect();
//!
//! let joined = concatenation(Some(&s1), Some(&s2)).unwrap();
//! assert_eq!(joined.to_string(), "<1.0, 2.0, 3.0>");
//! assert!(!joined.is_current());
//! ```
//!
//! # Errors
//!
//! Operations that need a current element fail with
//! [`SeqError::InvalidState`] when there is none, and operations that need a
//! sequence argument fail with [`SeqError::InvalidArgument`] when it is
//! `None`. A failing operation never changes the sequence.
//!
//! # Features
//!
//! - `serde`: `Serialize` and `Deserialize` for [`CursorSeq`], as the list of
//!   elements plus the cursor index.
//!
//! [`CursorSeq`]: crate::CursorSeq
//! [`add_before`]: crate::CursorSeq::add_before
//! [`add_all`]: crate::CursorSeq::add_all
//! [`remove_current`]: crate::CursorSeq::remove_current
//! [`concatenation`]: crate::concatenation
//! [`SeqError::InvalidState`]: crate::SeqError::InvalidState
//! [`SeqError::InvalidArgument`]: crate::SeqError::InvalidArgument

#[doc(inline)]
pub use error::{Result, SeqError};
#[doc(inline)]
pub use seq::iterator::Iter;
#[doc(inline)]
pub use seq::{concatenation, CursorSeq};

pub mod error;
pub mod seq;
