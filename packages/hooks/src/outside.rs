use crate::{HostEnv, ListenerId, PointerDown, PointerListener};
use std::{cell::Cell, rc::Rc};

/// Calls back when a pointer goes down outside a region of the document.
///
/// One listener is attached to the whole document for as long as the observer lives. Only where
/// the pointer went *down* matters: a press that starts inside the region and is released
/// outside of it never fires.
///
/// Stopping the observer from inside its own callback is fine. Once stopped, no further
/// callbacks run, including ones for listeners a dispatch in progress has already picked up.
#[must_use = "the observer stops as soon as it is dropped"]
pub struct OutsideDismiss<H: HostEnv> {
    host: H,
    id: Option<ListenerId>,
    active: Rc<Cell<bool>>,
}

impl<H: HostEnv + Clone + 'static> OutsideDismiss<H> {
    /// Start observing pointer-downs outside of `region`.
    pub fn observe(host: H, region: H::Node, on_dismiss: impl Fn() + 'static) -> Self {
        let active = Rc::new(Cell::new(true));

        let listener: PointerListener<H::Node> = Rc::new({
            let host = host.clone();
            let active = active.clone();
            move |event: &PointerDown<H::Node>| {
                if !active.get() || host.contains(&region, &event.target) {
                    return;
                }
                tracing::debug!("pointer down outside of the observed region");
                on_dismiss();
            }
        });

        let id = host.add_pointer_listener(listener);
        tracing::trace!(?id, "observing outside pointer downs");

        Self {
            host,
            id: Some(id),
            active,
        }
    }
}

impl<H: HostEnv> OutsideDismiss<H> {
    /// Is the document listener still attached?
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Detach the document listener. Calling this twice does nothing.
    pub fn stop(&mut self) {
        self.active.set(false);
        if let Some(id) = self.id.take() {
            tracing::trace!(?id, "no longer observing outside pointer downs");
            self.host.remove_pointer_listener(id);
        }
    }
}

impl<H: HostEnv> Drop for OutsideDismiss<H> {
    fn drop(&mut self) {
        self.stop();
    }
}
