use std::fmt;
use std::iter::FusedIterator;

use crate::seq::arena::{Arena, NodeId};
use crate::seq::CursorSeq;

/// Walks the node handles of a chain in order.
#[derive(Clone)]
pub(crate) struct Nodes<'a> {
    arena: &'a Arena,
    next: Option<NodeId>,
    len: usize,
}

impl<'a> Nodes<'a> {
    pub(crate) fn new(arena: &'a Arena, front: Option<NodeId>, len: usize) -> Self {
        Self {
            arena,
            next: front,
            len,
        }
    }
}

impl Iterator for Nodes<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.arena[current].next;
        self.len -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

/// An iterator over the elements of a `CursorSeq`, from head to tail.
///
/// It borrows the sequence immutably, so the sequence cannot be changed
/// while iterating.
///
/// # Examples
///
/// ```compile_fail
/// use cursor_seq::CursorSeq;
///
/// let mut seq: CursorSeq = [1.0, 2.0].iter().copied().collect();
/// let mut iter = seq.iter();
///
/// // Won't compile, because seq is already borrowed immutably.
/// seq.add_after(3.0);
/// println!("{:?}", iter.next());
/// ```
#[derive(Clone)]
pub struct Iter<'a> {
    nodes: Nodes<'a>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(nodes: Nodes<'a>) -> Self {
        Self { nodes }
    }
}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("Iter");
        for element in self.clone() {
            f.field(&element);
        }
        f.finish()
    }
}

impl Iterator for Iter<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let node = self.nodes.next()?;
        Some(self.nodes.arena[node].element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a CursorSeq {
    type Item = f64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Collects the values in iteration order. The resulting sequence has no
/// current element.
///
/// # Examples
///
/// ```
/// use cursor_seq::CursorSeq;
///
/// let seq: CursorSeq = vec![1.0, 2.0, 3.0].into_iter().collect();
/// assert_eq!(seq.to_string(), "<1.0, 2.0, 3.0>");
/// ```
impl FromIterator<f64> for CursorSeq {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut seq = CursorSeq::new();
        seq.extend(iter);
        seq
    }
}

/// Appends the values after the tail. The cursor stays where it was.
///
/// # Examples
///
/// ```
/// use cursor_seq::CursorSeq;
///
/// let mut seq = CursorSeq::new();
/// seq.add_after(1.0);
/// seq.extend(vec![2.0, 3.0]);
/// assert_eq!(seq.to_string(), "<[1.0], 2.0, 3.0>");
/// ```
impl Extend<f64> for CursorSeq {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for element in iter {
            self.push_back(element);
        }
    }
}
