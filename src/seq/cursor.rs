//! Mutations relative to the cursor.
//!
//! Every insertion makes the new node current, and keeps `precursor`
//! trailing the cursor by exactly one link, so none of the operations
//! here need to walk the chain.

use crate::error::{Result, SeqError};
use crate::seq::CursorSeq;

impl CursorSeq {
    /// Insert `element` right before the current element, or at the front
    /// if there is no current element. The new element becomes current.
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
    /// seq.add_before(3.0); // <[3.0]>
    /// seq.add_before(1.0); // <[1.0], 3.0>
    /// seq.advance().unwrap(); // <1.0, [3.0]>
    /// seq.add_before(2.0);
    ///
    /// assert_eq!(seq.get_current(), Ok(2.0));
    /// assert_eq!(seq.to_string(), "<1.0, [2.0], 3.0>");
    /// ```
    pub fn add_before(&mut self, element: f64) {
        match (self.cursor, self.precursor) {
            (Some(cursor), Some(precursor)) => {
                // [.. precursor, cursor ..] => [.. precursor, node, cursor ..]
                let node = self.arena.alloc(element, Some(cursor));
                self.arena.link(precursor, Some(node));
                self.cursor = Some(node);
            }
            // Empty, no current element, or the cursor is the head: the new
            // node becomes the head.
            _ => {
                let node = self.arena.alloc(element, self.head);
                if self.tail.is_none() {
                    self.tail = Some(node);
                }
                self.head = Some(node);
                self.cursor = Some(node);
                self.precursor = None;
            }
        }
        self.len += 1;
    }

    /// Insert `element` right after the current element, or at the back if
    /// there is no current element. The new element becomes current.
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
    /// seq.add_after(1.0); // <[1.0]>
    /// seq.add_after(3.0); // <1.0, [3.0]>
    /// seq.start(); // <[1.0], 3.0>
    /// seq.add_after(2.0);
    ///
    /// assert_eq!(seq.get_current(), Ok(2.0));
    /// assert_eq!(seq.to_string(), "<1.0, [2.0], 3.0>");
    /// ```
    pub fn add_after(&mut self, element: f64) {
        match (self.cursor, self.tail) {
            (Some(cursor), _) => {
                let next = self.arena[cursor].next;
                let node = self.arena.alloc(element, next);
                self.arena.link(cursor, Some(node));
                if Some(cursor) == self.tail {
                    self.tail = Some(node);
                }
                self.precursor = Some(cursor);
                self.cursor = Some(node);
            }
            (None, Some(tail)) => {
                let node = self.arena.alloc(element, None);
                self.arena.link(tail, Some(node));
                self.precursor = Some(tail);
                self.tail = Some(node);
                self.cursor = Some(node);
            }
            (None, None) => {
                let node = self.arena.alloc(element, None);
                self.head = Some(node);
                self.tail = Some(node);
                self.cursor = Some(node);
            }
        }
        self.len += 1;
    }

    /// Remove the current element and return it.
    ///
    /// The element after it becomes current; removing the tail leaves the
    /// sequence without a current element.
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
    /// let mut seq: CursorSeq = [1.0, 2.0, 3.0].iter().copied().collect();
    /// seq.start();
    /// seq.advance().unwrap();
    ///
    /// assert_eq!(seq.remove_current(), Ok(2.0));
    /// assert_eq!(seq.to_string(), "<1.0, [3.0]>");
    ///
    /// assert_eq!(seq.remove_current(), Ok(3.0));
    /// assert_eq!(seq.to_string(), "<1.0>");
    /// assert!(seq.remove_current().is_err());
    /// ```
    pub fn remove_current(&mut self) -> Result<f64> {
        let op = "remove_current";
        let cursor = self.cursor.ok_or(SeqError::InvalidState { op })?;
        let next = self.arena[cursor].next;
        match self.precursor {
            // The cursor is the head.
            None => {
                self.head = next;
                if next.is_none() {
                    self.tail = None;
                }
            }
            Some(precursor) => {
                self.arena.link(precursor, next);
                if next.is_none() {
                    self.tail = Some(precursor);
                    self.precursor = None;
                }
            }
        }
        self.cursor = next;
        self.len -= 1;
        Ok(self.arena.release(cursor))
    }
}

#[cfg(test)]
mod tests {
    use crate::CursorSeq;

    fn seq_at(values: &[f64], at: Option<usize>) -> CursorSeq {
        let mut seq: CursorSeq = values.iter().copied().collect();
        if let Some(at) = at {
            seq.seek(at).unwrap();
        }
        seq.assert_invariants();
        seq
    }

    #[test]
    fn add_before_every_case() {
        // empty
        let mut seq = CursorSeq::new();
        seq.add_before(1.0);
        seq.assert_invariants();
        assert_eq!(seq.to_string(), "<[1.0]>");

        // no current element
        let mut seq = seq_at(&[1.0, 2.0], None);
        seq.add_before(0.0);
        seq.assert_invariants();
        assert_eq!(seq.to_string(), "<[0.0], 1.0, 2.0>");
        assert_eq!(seq.precursor, None);

        // cursor is head
        let mut seq = seq_at(&[1.0, 2.0], Some(0));
        seq.add_before(0.0);
        seq.assert_invariants();
        assert_eq!(seq.to_string(), "<[0.0], 1.0, 2.0>");

        // cursor is interior
        let mut seq = seq_at(&[1.0, 2.0, 3.0], Some(1));
        let precursor = seq.precursor;
        seq.add_before(1.5);
        seq.assert_invariants();
        assert_eq!(seq.precursor, precursor);
        assert_eq!(seq.to_string(), "<1.0, [1.5], 2.0, 3.0>");

        // cursor is tail
        let mut seq = seq_at(&[1.0, 2.0], Some(1));
        seq.add_before(1.5);
        seq.assert_invariants();
        assert_eq!(seq.to_string(), "<1.0, [1.5], 2.0>");
    }

    #[test]
    fn add_after_every_case() {
        // empty
        let mut seq = CursorSeq::new();
        seq.add_after(1.0);
        seq.assert_invariants();
        assert_eq!(seq.to_string(), "<[1.0]>");

        // exactly one node
        let mut seq = seq_at(&[1.0], Some(0));
        seq.add_after(2.0);
        seq.assert_invariants();
        assert_eq!(seq.to_string(), "<1.0, [2.0]>");
        assert_eq!(seq.precursor, seq.head);

        // cursor is head
        let mut seq = seq_at(&[1.0, 3.0], Some(0));
        seq.add_after(2.0);
        seq.assert_invariants();
        assert_eq!(seq.to_string(), "<1.0, [2.0], 3.0>");
        assert_eq!(seq.precursor, seq.head);

        // cursor is interior
        let mut seq = seq_at(&[1.0, 2.0, 4.0], Some(1));
        seq.add_after(3.0);
        seq.assert_invariants();
        assert_eq!(seq.to_string(), "<1.0, 2.0, [3.0], 4.0>");

        // cursor is tail
        let mut seq = seq_at(&[1.0, 2.0], Some(1));
        seq.add_after(3.0);
        seq.assert_invariants();
        assert_eq!(seq.to_string(), "<1.0, 2.0, [3.0]>");
        assert_eq!(seq.tail, seq.cursor);

        // no current element
        let mut seq = seq_at(&[1.0, 2.0], None);
        seq.add_after(3.0);
        seq.assert_invariants();
        assert_eq!(seq.to_string(), "<1.0, 2.0, [3.0]>");
    }

    #[test]
    fn add_then_get_current() {
        let mut seq = CursorSeq::new();
        for i in 0..10 {
            let x = f64::from(i) * 1.5;
            if i % 3 == 0 {
                seq.add_before(x);
            } else {
                seq.add_after(x);
            }
            assert_eq!(seq.get_current(), Ok(x));
            assert_eq!(seq.size(), i as usize + 1);
            seq.assert_invariants();
        }
    }

    #[test]
    fn remove_current_every_case() {
        // single node
        let mut seq = seq_at(&[1.0], Some(0));
        assert_eq!(seq.remove_current(), Ok(1.0));
        seq.assert_invariants();
        assert!(seq.is_empty());
        assert!(!seq.is_current());

        // cursor is head
        let mut seq = seq_at(&[1.0, 2.0, 3.0], Some(0));
        assert_eq!(seq.remove_current(), Ok(1.0));
        seq.assert_invariants();
        assert_eq!(seq.to_string(), "<[2.0], 3.0>");

        // cursor is interior
        let mut seq = seq_at(&[1.0, 2.0, 3.0], Some(1));
        assert_eq!(seq.remove_current(), Ok(2.0));
        seq.assert_invariants();
        assert_eq!(seq.to_string(), "<1.0, [3.0]>");

        // cursor is tail
        let mut seq = seq_at(&[1.0, 2.0, 3.0], Some(2));
        assert_eq!(seq.remove_current(), Ok(3.0));
        seq.assert_invariants();
        assert_eq!(seq.to_string(), "<1.0, 2.0>");
        assert_eq!(seq.size(), 2);

        // the new tail accepts appends
        seq.add_after(4.0);
        seq.assert_invariants();
        assert_eq!(seq.to_string(), "<1.0, 2.0, [4.0]>");
    }

    #[test]
    fn removed_slots_are_reused() {
        let mut seq = seq_at(&[1.0, 2.0, 3.0], Some(1));
        seq.remove_current().unwrap();
        seq.add_before(5.0);
        seq.assert_invariants();
        assert_eq!(seq.arena.live(), 3);
        assert_eq!(seq.to_string(), "<1.0, [5.0], 3.0>");
    }

    #[test]
    fn drain_by_removal() {
        let mut seq = seq_at(&[1.0, 2.0, 3.0, 4.0], Some(0));
        let mut removed = Vec::new();
        while seq.is_current() {
            removed.push(seq.remove_current().unwrap());
            seq.assert_invariants();
        }
        assert_eq!(removed, vec![1.0, 2.0, 3.0, 4.0]);
        assert!(seq.is_empty());
    }

    #[test]
    fn drain_long_sequence_reuses_slots() {
        let mut seq: CursorSeq = (0..100_000).map(f64::from).collect();
        seq.start();
        let mut sum = 0.0;
        while seq.is_current() {
            sum += seq.remove_current().unwrap();
        }
        assert_eq!(sum, 4_999_950_000.0);
        assert!(seq.is_empty());
        assert_eq!(seq.arena.live(), 0);

        seq.add_after(1.0);
        seq.assert_invariants();
    }
}
