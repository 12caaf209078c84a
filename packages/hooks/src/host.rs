use std::{borrow::Cow, fmt::Display, rc::Rc};

/// The parts of the host document the dishes hooks read and write.
///
/// The document title and the body's scroll behavior are process-wide state. Hooks never reach
/// for them through a global; they are handed a host and only ever go through it, which is what
/// lets the tests run against [`crate::MemoryHost`].
pub trait HostEnv {
    /// The host's identity for a node in the document.
    type Node: Clone + 'static;

    /// Read the current document title.
    fn title(&self) -> String;

    /// Set the document title.
    fn set_title(&self, title: &str);

    /// Read the body's current scroll behavior.
    fn overflow(&self) -> Overflow;

    /// Overwrite the body's scroll behavior.
    fn set_overflow(&self, overflow: Overflow);

    /// Subscribe to every pointer-down on the document.
    fn add_pointer_listener(&self, listener: PointerListener<Self::Node>) -> ListenerId;

    /// Drop a subscription created with [`HostEnv::add_pointer_listener`].
    ///
    /// Removing an id that is no longer registered does nothing.
    fn remove_pointer_listener(&self, id: ListenerId);

    /// Is `target` the `region` node or one of its descendants?
    fn contains(&self, region: &Self::Node, target: &Self::Node) -> bool;
}

impl<H: HostEnv + ?Sized> HostEnv for Rc<H> {
    type Node = H::Node;

    fn title(&self) -> String {
        (**self).title()
    }

    fn set_title(&self, title: &str) {
        (**self).set_title(title)
    }

    fn overflow(&self) -> Overflow {
        (**self).overflow()
    }

    fn set_overflow(&self, overflow: Overflow) {
        (**self).set_overflow(overflow)
    }

    fn add_pointer_listener(&self, listener: PointerListener<Self::Node>) -> ListenerId {
        (**self).add_pointer_listener(listener)
    }

    fn remove_pointer_listener(&self, id: ListenerId) {
        (**self).remove_pointer_listener(id)
    }

    fn contains(&self, region: &Self::Node, target: &Self::Node) -> bool {
        (**self).contains(region, target)
    }
}

/// A document-level pointer-down subscriber.
pub type PointerListener<N> = Rc<dyn Fn(&PointerDown<N>)>;

/// A pointer (mouse or touch) went down somewhere in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerDown<N> {
    /// The node the pointer went down on.
    pub target: N,
}

/// Handle to a registered pointer listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub usize);

/// The body's `overflow` style, the host setting that decides whether the page scrolls.
///
/// Only [`Overflow::HIDDEN`] has a meaning to the hooks ("scrolling disabled"); every other value
/// is recorded and restored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Overflow(Cow<'static, str>);

impl Overflow {
    /// Content is not clipped and the page scrolls. The CSS initial value.
    pub const VISIBLE: Self = Self(Cow::Borrowed("visible"));

    /// Scrollbars only when needed.
    pub const AUTO: Self = Self(Cow::Borrowed("auto"));

    /// Always show scrollbars.
    pub const SCROLL: Self = Self(Cow::Borrowed("scroll"));

    /// Scrolling disabled.
    pub const HIDDEN: Self = Self(Cow::Borrowed("hidden"));

    /// Wrap an arbitrary CSS value, as read back from the host.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        match value.as_str() {
            "visible" => Self::VISIBLE,
            "auto" => Self::AUTO,
            "scroll" => Self::SCROLL,
            "hidden" => Self::HIDDEN,
            _ => Self(Cow::Owned(value)),
        }
    }

    /// The CSS text of this value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Does this value stop the page from scrolling?
    pub fn is_locked(&self) -> bool {
        *self == Self::HIDDEN
    }
}

impl Default for Overflow {
    fn default() -> Self {
        Self::VISIBLE
    }
}

impl Display for Overflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Overflow {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
