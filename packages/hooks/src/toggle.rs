use crate::{HostEnv, OutsideDismiss, ScrollLock};
use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

/// Whether the disclosure is showing its control or its form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToggleState {
    /// Only the disclosure control is rendered.
    #[default]
    Closed,

    /// Only the embedded form is rendered, with scrolling locked.
    Open,
}

/// The one thing a toggle renders in a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleView {
    /// The button that opens the form.
    Control,

    /// The embedded form.
    Form,
}

impl ToggleState {
    /// The other state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Is the form showing?
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// What to render. Never both, never neither.
    pub fn view(self) -> ToggleView {
        match self {
            Self::Closed => ToggleView::Control,
            Self::Open => ToggleView::Form,
        }
    }
}

/// Everything an open region holds on to: the scroll lock, and once the region is mounted, the
/// outside-dismiss observer.
///
/// The lock is taken on creation, before anything renders. On drop the observer goes first and
/// the lock second, the reverse of how they were acquired.
pub struct ModalScope<H: HostEnv> {
    dismiss: Option<OutsideDismiss<H>>,
    lock: ScrollLock<H>,
}

impl<H: HostEnv + Clone + 'static> ModalScope<H> {
    /// Lock page scrolling for a region that is about to become visible.
    pub fn acquire(host: H) -> Self {
        Self {
            dismiss: None,
            lock: ScrollLock::acquire(host),
        }
    }

    /// The region is in the document now; dismiss on presses outside of it.
    ///
    /// Calling this again moves the observer to the new region.
    pub fn observe(&mut self, region: H::Node, on_dismiss: impl Fn() + 'static) {
        let host = self.lock.host().clone();
        self.dismiss = Some(OutsideDismiss::observe(host, region, on_dismiss));
    }

    /// Is an outside-dismiss observer attached?
    pub fn is_observing(&self) -> bool {
        self.dismiss.as_ref().is_some_and(OutsideDismiss::is_active)
    }
}

impl<H: HostEnv> Drop for ModalScope<H> {
    fn drop(&mut self) {
        // observer before lock
        self.dismiss.take();
    }
}

/// A disclosure control that swaps itself for a form, independent of any renderer.
///
/// Opening takes a [`ModalScope`]; closing, whether through [`ToggleForm::close`] or a press
/// outside the mounted region, drops it. Clones share the same state and compare equal.
///
/// A renderer keeps its own copy of the state in sync through [`ToggleForm::on_change`].
pub struct ToggleForm<H: HostEnv> {
    inner: Rc<RefCell<ToggleInner<H>>>,
}

struct ToggleInner<H: HostEnv> {
    host: H,
    scope: Option<ModalScope<H>>,
    on_change: Option<Rc<dyn Fn(ToggleState)>>,
}

impl<H: HostEnv> Clone for ToggleForm<H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<H: HostEnv> PartialEq for ToggleForm<H> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<H: HostEnv + Clone + 'static> ToggleForm<H> {
    /// A closed toggle.
    pub fn new(host: H) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ToggleInner {
                host,
                scope: None,
                on_change: None,
            })),
        }
    }

    /// Call `listener` with the new state after every transition. Replaces any earlier listener.
    pub fn on_change(&self, listener: impl Fn(ToggleState) + 'static) {
        self.inner.borrow_mut().on_change = Some(Rc::new(listener));
    }

    fn notify(&self) {
        let listener = self.inner.borrow().on_change.clone();
        if let Some(listener) = listener {
            listener(self.state());
        }
    }

    /// The current state.
    pub fn state(&self) -> ToggleState {
        match self.inner.borrow().scope {
            Some(_) => ToggleState::Open,
            None => ToggleState::Closed,
        }
    }

    /// What to render right now.
    pub fn view(&self) -> ToggleView {
        self.state().view()
    }

    /// Is the open form listening for outside presses?
    pub fn is_observing(&self) -> bool {
        self.inner
            .borrow()
            .scope
            .as_ref()
            .is_some_and(ModalScope::is_observing)
    }

    /// Closed → Open. Returns `false` if it was already open.
    pub fn open(&self) -> bool {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.scope.is_some() {
                return false;
            }
            tracing::debug!("toggle form opened");
            let scope = ModalScope::acquire(inner.host.clone());
            inner.scope = Some(scope);
        }
        self.notify();
        true
    }

    /// The open form's region was mounted. Ignored while closed.
    pub fn region_mounted(&self, region: H::Node) {
        let weak = Rc::downgrade(&self.inner);
        let mut inner = self.inner.borrow_mut();
        let Some(scope) = inner.scope.as_mut() else {
            tracing::warn!("region mounted for a toggle form that is closed");
            return;
        };
        scope.observe(region, move || close_weak(&weak));
    }

    /// Open → Closed. Returns `false` if it was already closed.
    pub fn close(&self) -> bool {
        // Taken out first so the scope is dropped without the state borrowed.
        let scope = self.inner.borrow_mut().scope.take();
        match scope {
            Some(scope) => {
                tracing::debug!("toggle form closed");
                drop(scope);
                self.notify();
                true
            }
            None => false,
        }
    }

    /// Flip between the two states, returning the new one.
    pub fn toggle(&self) -> ToggleState {
        match self.state() {
            ToggleState::Closed => self.open(),
            ToggleState::Open => self.close(),
        };
        self.state()
    }
}

fn close_weak<H: HostEnv + Clone + 'static>(weak: &Weak<RefCell<ToggleInner<H>>>) {
    if let Some(inner) = weak.upgrade() {
        ToggleForm { inner }.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryHost, Overflow};

    #[test]
    fn state_machine() {
        assert_eq!(ToggleState::default(), ToggleState::Closed);
        assert_eq!(ToggleState::Closed.toggled(), ToggleState::Open);
        assert_eq!(ToggleState::Open.toggled(), ToggleState::Closed);
        assert_eq!(ToggleState::Closed.view(), ToggleView::Control);
        assert_eq!(ToggleState::Open.view(), ToggleView::Form);
    }

    #[test]
    fn scope_releases_observer_before_lock() {
        let host = Rc::new(MemoryHost::with_overflow(Overflow::AUTO));
        let region = host.create_node(None);

        let mut scope = ModalScope::acquire(host.clone());
        assert!(!scope.is_observing());
        scope.observe(region, || {});
        assert!(scope.is_observing());
        assert_eq!(host.listener_count(), 1);

        drop(scope);
        assert_eq!(host.listener_count(), 0);
        assert_eq!(host.overflow(), Overflow::AUTO);
    }

    #[test]
    fn reopening_while_open_is_a_no_op() {
        let host = Rc::new(MemoryHost::with_overflow(Overflow::SCROLL));
        let toggle = ToggleForm::new(host.clone());

        assert!(toggle.open());
        assert!(!toggle.open());
        assert!(toggle.close());
        assert!(!toggle.close());
        assert_eq!(host.overflow(), Overflow::SCROLL);
    }

    #[test]
    fn listener_sees_every_transition_once() {
        let host = Rc::new(MemoryHost::new());
        let toggle = ToggleForm::new(host.clone());
        let seen = Rc::new(RefCell::new(Vec::new()));
        toggle.on_change({
            let seen = seen.clone();
            move |state| seen.borrow_mut().push(state)
        });

        toggle.open();
        toggle.open();
        toggle.close();
        toggle.close();

        assert_eq!(*seen.borrow(), [ToggleState::Open, ToggleState::Closed]);
    }

    #[test]
    fn listener_may_read_the_toggle() {
        let host = Rc::new(MemoryHost::new());
        let toggle = ToggleForm::new(host.clone());
        let observed = Rc::new(RefCell::new(Vec::new()));
        toggle.on_change({
            let toggle = toggle.clone();
            let observed = observed.clone();
            move |_| observed.borrow_mut().push(toggle.view())
        });

        toggle.toggle();
        toggle.toggle();

        assert_eq!(*observed.borrow(), [ToggleView::Form, ToggleView::Control]);
        assert!(toggle == toggle.clone());
        assert!(toggle != ToggleForm::new(host));
    }
}
