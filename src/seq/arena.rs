use std::ops::Index;

/// A stable handle to a node slot in an [`Arena`].
///
/// Handles never leave the sequence that owns the arena, so two sequences
/// can never refer to the same node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) element: f64,
    pub(crate) next: Option<NodeId>,
}

/// Node storage of a sequence: a vector of node slots and a stack of
/// vacated slots waiting to be reused.
///
/// The arena knows nothing about the order of the chain; `head`, `tail` and
/// the cursor are tracked by the sequence itself.
///
/// It does not implement `Clone` on purpose: copies are made segment by
/// segment through [`Arena::copy_segment`].
#[derive(Debug, Default)]
pub(crate) struct Arena {
    nodes: Vec<Node>,
    free: Vec<NodeId>,
}

/// A chain of freshly copied nodes `front..=back`, whose `back.next` is
/// still unlinked.
#[derive(Debug)]
pub(crate) struct Segment {
    pub(crate) front: NodeId,
    pub(crate) back: NodeId,
    pub(crate) len: usize,
}

impl Arena {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Allocate a node holding `element` followed by `next`, reusing a vacated
    /// slot when one is available.
    pub(crate) fn alloc(&mut self, element: f64, next: Option<NodeId>) -> NodeId {
        let node = Node { element, next };
        match self.free.pop() {
            Some(id) => {
                self.nodes[id.0] = node;
                id
            }
            None => {
                self.nodes.push(node);
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    /// Vacate the slot of `id` and return the element it held.
    ///
    /// The caller must have unlinked `id` from the chain already, and must
    /// not release it twice.
    pub(crate) fn release(&mut self, id: NodeId) -> f64 {
        self.nodes[id.0].next = None;
        self.free.push(id);
        self.nodes[id.0].element
    }

    /// Rewrite the link of `from`.
    pub(crate) fn link(&mut self, from: NodeId, to: Option<NodeId>) {
        self.nodes[from.0].next = to;
    }

    /// Number of slots holding a live node.
    pub(crate) fn live(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Copy the chain `front..=back` of `src` into this arena, node by node,
    /// in chain order.
    ///
    /// `back` must be reachable from `front` in `src`.
    pub(crate) fn copy_segment(&mut self, src: &Arena, front: NodeId, back: NodeId) -> Segment {
        let copied_front = self.alloc(src[front].element, None);
        let mut copied_back = copied_front;
        let mut len = 1;
        let mut node = front;
        while node != back {
            let next = src[node].next;
            debug_assert!(next.is_some(), "{:?} is not reachable from {:?}", back, front);
            node = match next {
                Some(next) => next,
                None => break,
            };
            let copied = self.alloc(src[node].element, None);
            self.link(copied_back, Some(copied));
            copied_back = copied;
            len += 1;
        }
        Segment {
            front: copied_front,
            back: copied_back,
            len,
        }
    }
}

impl Index<NodeId> for Arena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}
