use std::fmt::{self, Debug, Formatter};

use crate::error::{Result, SeqError};
use crate::seq::arena::{Arena, NodeId};
use crate::seq::iterator::{Iter, Nodes};

pub mod iterator;

mod algorithms;
mod arena;
mod cursor;
#[cfg(feature = "serde")]
mod serialize;

pub use algorithms::concatenation;

/// `CursorSeq` is a singly-linked sequence of `f64` values with at most one
/// current element, the *cursor*.
///
/// Insertions happen right before or right after the cursor, and the new
/// element always becomes the current one. Both insertions and the cursor
/// moves are *O*(1).
///
/// The `CursorSeq` contains:
/// - an arena of nodes, each holding a value and the handle of the next node;
/// - `head` and `tail`, the first and the last node of the chain;
/// - `cursor`, the current node, and `precursor`, the node right before it
///   (absent when the cursor is the head or absent);
/// - a length field `len`, maintained on every insertion and removal.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of chain nodes, both inclusive;
/// - *current element*: the value held by the cursor node.
pub struct CursorSeq {
    pub(crate) arena: Arena,
    pub(crate) head: Option<NodeId>,
    pub(crate) tail: Option<NodeId>,
    pub(crate) cursor: Option<NodeId>,
    pub(crate) precursor: Option<NodeId>,
    pub(crate) len: usize,
}

// private methods
impl CursorSeq {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            head: None,
            tail: None,
            cursor: None,
            precursor: None,
            len: 0,
        }
    }

    /// Walk the chain from `head` to `tail`.
    pub(crate) fn nodes(&self) -> Nodes<'_> {
        Nodes::new(&self.arena, self.head, self.len)
    }

    /// Append `element` after the tail without touching the cursor or the
    /// precursor.
    pub(crate) fn push_back(&mut self, element: f64) {
        let node = self.arena.alloc(element, None);
        match self.tail {
            Some(tail) => self.arena.link(tail, Some(node)),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Put the cursor on the element at `index`, counting from the head.
    ///
    /// If `index == len`, the cursor ends up absent.
    #[cfg(any(test, feature = "serde"))]
    pub(crate) fn seek(&mut self, index: usize) -> Result<()> {
        self.start();
        (0..index).try_for_each(|_| self.advance())
    }
}

impl CursorSeq {
    /// Create an empty `CursorSeq` with no current element.
    ///
    /// # Examples
    /// ```
    /// use cursor_seq::CursorSeq;
    /// let seq = CursorSeq::new();
    /// assert_eq!(seq.size(), 0);
    /// assert!(!seq.is_current());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Returns the number of elements in the sequence.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_seq::CursorSeq;
    ///
    /// let mut seq = CursorSeq::new();
    /// seq.add_after(1.0);
    /// seq.add_before(0.5);
    /// assert_eq!(seq.size(), 2);
    /// ```
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Same as [`CursorSeq::size`].
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the sequence has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns `true` if there is a current element.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_seq::CursorSeq;
    ///
    /// let mut seq = CursorSeq::new();
    /// assert!(!seq.is_current());
    ///
    /// seq.add_after(1.0);
    /// assert!(seq.is_current());
    /// ```
    #[inline]
    pub fn is_current(&self) -> bool {
        self.cursor.is_some()
    }

    /// Returns the current element, or an error if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_seq::{CursorSeq, SeqError};
    ///
    /// let mut seq = CursorSeq::new();
    /// assert_eq!(
    ///     seq.get_current(),
    ///     Err(SeqError::InvalidState { op: "get_current" })
    /// );
    ///
    /// seq.add_before(4.2);
    /// assert_eq!(seq.get_current(), Ok(4.2));
    /// ```
    pub fn get_current(&self) -> Result<f64> {
        self.cursor
            .map(|cursor| self.arena[cursor].element)
            .ok_or(SeqError::InvalidState { op: "get_current" })
    }

    /// Returns the index of the current element counting from the head, or
    /// `None` if there is no current element.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_seq::CursorSeq;
    ///
    /// let mut seq: CursorSeq = [1.0, 2.0, 3.0].iter().copied().collect();
    /// assert_eq!(seq.position(), None);
    ///
    /// seq.start();
    /// seq.advance().unwrap();
    /// assert_eq!(seq.position(), Some(1));
    /// ```
    pub fn position(&self) -> Option<usize> {
        let cursor = self.cursor?;
        self.nodes().position(|node| node == cursor)
    }

    /// Make the first element current. On an empty sequence there is
    /// still no current element afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_seq::CursorSeq;
    ///
    /// let mut seq: CursorSeq = [1.0, 2.0].iter().copied().collect();
    /// assert!(!seq.is_current());
    ///
    /// seq.start();
    /// assert_eq!(seq.get_current(), Ok(1.0));
    /// ```
    pub fn start(&mut self) {
        self.cursor = self.head;
        self.precursor = None;
    }

    /// Move the cursor to the next element. Advancing past the tail leaves
    /// the sequence without a current element.
    ///
    /// Returns an error, and leaves the sequence unchanged, if there is no
    /// current element.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_seq::CursorSeq;
    ///
    /// let mut seq: CursorSeq = [1.0, 2.0].iter().copied().collect();
    /// seq.start();
    ///
    /// assert!(seq.advance().is_ok());
    /// assert_eq!(seq.get_current(), Ok(2.0));
    ///
    /// // falls off the tail
    /// assert!(seq.advance().is_ok());
    /// assert!(!seq.is_current());
    ///
    /// assert!(seq.advance().is_err());
    /// ```
    pub fn advance(&mut self) -> Result<()> {
        let cursor = self.cursor.ok_or(SeqError::InvalidState { op: "advance" })?;
        if Some(cursor) == self.tail {
            self.cursor = None;
            self.precursor = None;
        } else {
            // Whether or not `cursor` is the head, the precursor trails it by
            // exactly one link.
            self.precursor = Some(cursor);
            self.cursor = self.arena[cursor].next;
        }
        Ok(())
    }

    /// Provides a forward iterator over the elements, from head to tail.
    ///
    /// The iterator does not move the cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_seq::CursorSeq;
    ///
    /// let mut seq = CursorSeq::new();
    /// seq.add_after(1.0);
    /// seq.add_after(2.0);
    ///
    /// let mut iter = seq.iter();
    /// assert_eq!(iter.next(), Some(1.0));
    /// assert_eq!(iter.next(), Some(2.0));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.nodes())
    }
}

/// Renders the elements of a sequence as a list.
struct Elements<'a>(&'a CursorSeq);

impl Debug for Elements<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl Debug for CursorSeq {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorSeq")
            .field("elements", &Elements(self))
            .field("cursor", &self.position())
            .finish()
    }
}

impl Default for CursorSeq {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl CursorSeq {
    /// Check every structural invariant of the tracking references.
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.head.is_none(), self.len == 0);
        assert_eq!(self.tail.is_none(), self.len == 0);
        assert_eq!(self.arena.live(), self.len);

        let chain: Vec<NodeId> = self.nodes().collect();
        assert_eq!(chain.len(), self.len);
        assert_eq!(chain.first().copied(), self.head);
        assert_eq!(chain.last().copied(), self.tail);
        if let Some(tail) = self.tail {
            assert_eq!(self.arena[tail].next, None);
        }

        match self.cursor {
            None => assert_eq!(self.precursor, None),
            Some(cursor) => {
                assert!(chain.contains(&cursor));
                match self.precursor {
                    None => assert_eq!(Some(cursor), self.head),
                    Some(precursor) => {
                        assert_ne!(Some(cursor), self.head);
                        assert_eq!(self.arena[precursor].next, Some(cursor));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{CursorSeq, SeqError};

    #[test]
    fn seq_create() {
        let seq = CursorSeq::new();
        assert!(seq.is_empty());
        assert_eq!(seq.size(), 0);
        assert!(!seq.is_current());
        assert_eq!(seq.position(), None);
        seq.assert_invariants();
    }

    #[test]
    fn seq_start_and_advance_visit_every_node() {
        let values = [1.5, -2.0, 3.25, 0.0];
        let mut seq: CursorSeq = values.iter().copied().collect();
        seq.assert_invariants();

        seq.start();
        let mut visited = Vec::new();
        while seq.is_current() {
            visited.push(seq.get_current().unwrap());
            seq.advance().unwrap();
            seq.assert_invariants();
        }
        assert_eq!(visited, values);
        assert_eq!(seq.precursor, None);
    }

    #[test]
    fn seq_start_on_empty() {
        let mut seq = CursorSeq::new();
        seq.start();
        assert!(!seq.is_current());
        seq.assert_invariants();
    }

    #[test]
    fn seq_no_current_errors() {
        let mut seq = CursorSeq::new();
        assert_eq!(
            seq.get_current(),
            Err(SeqError::InvalidState { op: "get_current" })
        );
        assert_eq!(
            seq.advance(),
            Err(SeqError::InvalidState { op: "advance" })
        );
        assert_eq!(
            seq.remove_current(),
            Err(SeqError::InvalidState { op: "remove_current" })
        );

        seq.add_after(1.0);
        seq.advance().unwrap();
        assert!(seq.get_current().is_err());
        assert!(seq.advance().is_err());
        assert!(seq.remove_current().is_err());
        assert_eq!(seq.size(), 1);
        seq.assert_invariants();
    }

    #[test]
    fn seq_seek() {
        let mut seq: CursorSeq = [1.0, 2.0, 3.0].iter().copied().collect();
        seq.seek(2).unwrap();
        assert_eq!(seq.get_current(), Ok(3.0));
        assert_eq!(seq.position(), Some(2));
        seq.assert_invariants();

        seq.seek(3).unwrap();
        assert!(!seq.is_current());
        assert!(seq.seek(4).is_err());
    }

    #[test]
    fn seq_debug() {
        let mut seq: CursorSeq = [1.0, 2.5].iter().copied().collect();
        seq.start();
        assert_eq!(
            format!("{:?}", seq),
            "CursorSeq { elements: [1.0, 2.5], cursor: Some(0) }"
        );
        assert_eq!(
            format!("{:?}", CursorSeq::new()),
            "CursorSeq { elements: [], cursor: None }"
        );
    }
}
