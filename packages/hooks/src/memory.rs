use crate::{HostEnv, ListenerId, Overflow, PointerDown, PointerListener};
use rustc_hash::FxHashMap;
use slab::Slab;
use std::cell::{Cell, RefCell};

/// A node created in a [`MemoryHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// An in-memory document.
///
/// Holds a title, a body overflow value, a tree of bare nodes and the document's pointer
/// listeners. Events are dispatched by hand with [`MemoryHost::pointer_down`].
#[derive(Default)]
pub struct MemoryHost {
    title: RefCell<String>,
    title_writes: Cell<usize>,
    overflow: RefCell<Overflow>,
    listeners: RefCell<Slab<PointerListener<NodeId>>>,
    parents: RefCell<FxHashMap<NodeId, Option<NodeId>>>,
    next_node: Cell<u64>,
}

impl MemoryHost {
    /// An empty document with no title and `visible` overflow.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a given body overflow value.
    pub fn with_overflow(overflow: Overflow) -> Self {
        let host = Self::new();
        *host.overflow.borrow_mut() = overflow;
        host
    }

    /// Add a node to the tree, either as a root or under `parent`.
    pub fn create_node(&self, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.next_node.get());
        self.next_node.set(id.0 + 1);
        self.parents.borrow_mut().insert(id, parent);
        id
    }

    /// Dispatch a pointer-down on `target` to every listener registered right now.
    ///
    /// The listener set is snapshotted first, so listeners may add or remove listeners (including
    /// themselves) while the event is being delivered.
    pub fn pointer_down(&self, target: NodeId) {
        let snapshot: Vec<_> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        tracing::trace!(?target, listeners = snapshot.len(), "dispatching pointer down");

        let event = PointerDown { target };
        for listener in snapshot {
            listener(&event);
        }
    }

    /// The number of pointer listeners currently registered.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// How many times the title has been written.
    pub fn title_writes(&self) -> usize {
        self.title_writes.get()
    }
}

impl HostEnv for MemoryHost {
    type Node = NodeId;

    fn title(&self) -> String {
        self.title.borrow().clone()
    }

    fn set_title(&self, title: &str) {
        self.title_writes.set(self.title_writes.get() + 1);
        *self.title.borrow_mut() = title.to_string();
    }

    fn overflow(&self) -> Overflow {
        self.overflow.borrow().clone()
    }

    fn set_overflow(&self, overflow: Overflow) {
        *self.overflow.borrow_mut() = overflow;
    }

    fn add_pointer_listener(&self, listener: PointerListener<NodeId>) -> ListenerId {
        ListenerId(self.listeners.borrow_mut().insert(listener))
    }

    fn remove_pointer_listener(&self, id: ListenerId) {
        // dropped after the borrow ends, the listener may own things that call back in here
        let removed = self.listeners.borrow_mut().try_remove(id.0);
        drop(removed);
    }

    fn contains(&self, region: &NodeId, target: &NodeId) -> bool {
        let parents = self.parents.borrow();
        let mut cursor = Some(*target);
        while let Some(node) = cursor {
            if node == *region {
                return true;
            }
            cursor = parents.get(&node).copied().flatten();
        }
        false
    }
}
