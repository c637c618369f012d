use std::fmt;

use tracing::trace;

use crate::error::{Result, SeqError};
use crate::seq::CursorSeq;

/// Deep copy: the copy has its own nodes, and its cursor sits at the same
/// position as in the original.
///
/// When the cursor is past the head, the chain is copied as two segments,
/// `head..=precursor` and `cursor..=tail`, which are then linked together.
/// Otherwise the whole chain is copied at once.
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
/// let mut copy = seq.clone();
/// assert_eq!(copy, seq);
/// assert_eq!(copy.to_string(), "<1.0, [2.0], 3.0>");
///
/// copy.remove_current().unwrap();
/// assert_eq!(copy.to_string(), "<1.0, [3.0]>");
/// assert_eq!(seq.to_string(), "<1.0, [2.0], 3.0>");
/// ```
impl Clone for CursorSeq {
    fn clone(&self) -> Self {
        let mut copy = CursorSeq::with_capacity(self.len);
        let (head, tail) = match (self.head, self.tail) {
            (Some(head), Some(tail)) => (head, tail),
            _ => return copy,
        };
        match (self.cursor, self.precursor) {
            (Some(cursor), Some(precursor)) => {
                let prefix = copy.arena.copy_segment(&self.arena, head, precursor);
                let suffix = copy.arena.copy_segment(&self.arena, cursor, tail);
                copy.arena.link(prefix.back, Some(suffix.front));
                copy.head = Some(prefix.front);
                copy.precursor = Some(prefix.back);
                copy.cursor = Some(suffix.front);
                copy.tail = Some(suffix.back);
                copy.len = prefix.len + suffix.len;
                trace!(
                    prefix = prefix.len,
                    suffix = suffix.len,
                    "copied sequence split at the cursor"
                );
            }
            (cursor, _) => {
                let whole = copy.arena.copy_segment(&self.arena, head, tail);
                copy.head = Some(whole.front);
                copy.tail = Some(whole.back);
                // Without a precursor, a present cursor is the head.
                if cursor.is_some() {
                    copy.cursor = copy.head;
                }
                copy.len = whole.len;
                trace!(len = whole.len, "copied whole sequence");
            }
        }
        debug_assert_eq!(copy.len, self.len);
        debug_assert_eq!(copy.arena.live(), copy.len);
        copy
    }
}

impl CursorSeq {
    /// Append a copy of every element of `other` after the tail. The cursor
    /// of this sequence does not move, and `other` is left untouched.
    ///
    /// If this sequence is empty, it becomes a copy of `other` without a
    /// current element.
    ///
    /// Returns an error, and leaves the sequence unchanged, if `other` is
    /// `None`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*m*) time, where *m* is the
    /// length of `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_seq::CursorSeq;
    ///
    /// let mut seq = CursorSeq::new();
    /// seq.add_after(1.0);
    ///
    /// let other: CursorSeq = [2.0, 3.0].iter().copied().collect();
    /// seq.add_all(Some(&other)).unwrap();
    ///
    /// assert_eq!(seq.to_string(), "<[1.0], 2.0, 3.0>");
    /// assert_eq!(other.size(), 2);
    ///
    /// assert!(seq.add_all(None).is_err());
    /// ```
    pub fn add_all(&mut self, other: Option<&CursorSeq>) -> Result<()> {
        let other = other.ok_or(SeqError::InvalidArgument {
            op: "add_all",
            arg: "other",
        })?;
        let (front, back) = match (other.head, other.tail) {
            (Some(front), Some(back)) => (front, back),
            _ => return Ok(()),
        };
        let segment = self.arena.copy_segment(&other.arena, front, back);
        match self.tail {
            Some(tail) => self.arena.link(tail, Some(segment.front)),
            None => self.head = Some(segment.front),
        }
        self.tail = Some(segment.back);
        self.len += segment.len;
        trace!(appended = segment.len, len = self.len, "appended a copied sequence");
        Ok(())
    }
}

/// Create a new sequence holding a copy of the elements of `s1` followed by
/// a copy of the elements of `s2`.
///
/// The result never has a current element, whatever the cursors of `s1` and
/// `s2` were. Both operands are left untouched.
///
/// Returns an error if either operand is `None`.
///
/// # Examples
///
/// ```
/// use cursor_seq::{concatenation, CursorSeq};
///
/// let mut s1: CursorSeq = [1.0, 2.0].iter().copied().collect();
/// s1.start();
/// let s2: CursorSeq = [3.0].iter().copied().collect();
///
/// let joined = concatenation(Some(&s1), Some(&s2)).unwrap();
/// assert_eq!(joined.to_string(), "<1.0, 2.0, 3.0>");
/// assert!(!joined.is_current());
/// assert_eq!(s1.get_current(), Ok(1.0));
///
/// assert!(concatenation(Some(&s1), None).is_err());
/// ```
pub fn concatenation(s1: Option<&CursorSeq>, s2: Option<&CursorSeq>) -> Result<CursorSeq> {
    let op = "concatenation";
    let s1 = s1.ok_or(SeqError::InvalidArgument { op, arg: "s1" })?;
    let s2 = s2.ok_or(SeqError::InvalidArgument { op, arg: "s2" })?;

    let mut seq = s1.clone();
    seq.add_all(Some(s2))?;
    // The copy of `s1` carries its cursor over; walk it off the end.
    while seq.is_current() {
        seq.advance()?;
    }
    trace!(len = seq.len, "concatenated sequences");
    Ok(seq)
}

/// Two sequences are equal if they hold equal elements in the same order,
/// and their cursors sit at the same position (or both are absent).
///
/// # Examples
///
/// ```
/// use cursor_seq::CursorSeq;
///
/// let mut a: CursorSeq = [1.0, 2.0].iter().copied().collect();
/// let mut b = a.clone();
/// assert_eq!(a, b);
///
/// a.start();
/// assert_ne!(a, b);
///
/// b.start();
/// assert_eq!(a, b);
/// ```
impl PartialEq for CursorSeq {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        self.nodes().zip(other.nodes()).all(|(lhs, rhs)| {
            self.arena[lhs].element == other.arena[rhs].element
                && (Some(lhs) == self.cursor) == (Some(rhs) == other.cursor)
        })
    }
}

/// Renders the elements in chain order as `<a, b, c>`, with the current
/// element wrapped in brackets.
///
/// # Examples
///
/// ```
/// use cursor_seq::CursorSeq;
///
/// let mut seq = CursorSeq::new();
/// assert_eq!(seq.to_string(), "<>");
///
/// seq.add_after(5.0);
/// assert_eq!(seq.to_string(), "<[5.0]>");
/// ```
impl fmt::Display for CursorSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<")?;
        for (index, node) in self.nodes().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            let element = self.arena[node].element;
            if Some(node) == self.cursor {
                f.write_str("[")?;
                write_element(f, element)?;
                f.write_str("]")?;
            } else {
                write_element(f, element)?;
            }
        }
        f.write_str(">")
    }
}

/// Write one element the way the rendering expects it.
///
/// Magnitudes in `[1e-3, 1e7)` and zero are written in plain decimal with at
/// least one fractional digit (`10.0`, `0.001`). Everything else finite uses
/// scientific notation with an upper-case `E` and a fractional mantissa
/// (`1.0E7`, `1.5E-7`). Non-finite values are `NaN`, `Infinity` and
/// `-Infinity`.
fn write_element(f: &mut fmt::Formatter<'_>, element: f64) -> fmt::Result {
    if element.is_nan() {
        return f.write_str("NaN");
    }
    if element.is_infinite() {
        return f.write_str(if element > 0.0 { "Infinity" } else { "-Infinity" });
    }

    let magnitude = element.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        // `{:?}` stays in plain decimal over this range and keeps the `.0`
        return write!(f, "{:?}", element);
    }

    let scientific = format!("{:e}", element);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    if mantissa.contains('.') {
        write!(f, "{}E{}", mantissa, exponent)
    } else {
        write!(f, "{}.0E{}", mantissa, exponent)
    }
}
