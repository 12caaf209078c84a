use crate::{HostEnv, ListenerId, Overflow, PointerDown, PointerListener};
use slab::Slab;
use std::cell::RefCell;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Event, HtmlElement, Node, Window};

/// Covers mouse, pen and touch with one event per press.
const POINTER_DOWN: &str = "pointerdown";

/// The browser document, through `web-sys`.
pub struct WebHost {
    window: Window,
    document: Document,
    body: HtmlElement,
    listeners: RefCell<Slab<Closure<dyn FnMut(Event)>>>,
}

impl WebHost {
    /// Grab the current window's document.
    ///
    /// Returns `None` outside a browser main thread, or before `<body>` exists.
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let body = document.body()?;
        Some(Self {
            window,
            document,
            body,
            listeners: RefCell::new(Slab::new()),
        })
    }

    fn detach(&self, closure: &Closure<dyn FnMut(Event)>) {
        if let Err(err) = self
            .document
            .remove_event_listener_with_callback(POINTER_DOWN, closure.as_ref().unchecked_ref())
        {
            tracing::warn!(?err, "failed to detach document listener");
        }
    }
}

impl HostEnv for WebHost {
    type Node = Node;

    fn title(&self) -> String {
        self.document.title()
    }

    fn set_title(&self, title: &str) {
        tracing::trace!(title, "setting document title");
        self.document.set_title(title);
    }

    fn overflow(&self) -> Overflow {
        // The computed style, so a value coming from a stylesheet is restored as well.
        let computed = self
            .window
            .get_computed_style(&self.body)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value("overflow").ok())
            .unwrap_or_default();
        Overflow::new(computed)
    }

    fn set_overflow(&self, overflow: Overflow) {
        tracing::trace!(%overflow, "setting body overflow");
        if let Err(err) = self
            .body
            .style()
            .set_property("overflow", overflow.as_str())
        {
            tracing::warn!(?err, "failed to set body overflow");
        }
    }

    fn add_pointer_listener(&self, listener: PointerListener<Node>) -> ListenerId {
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                return;
            };
            listener(&PointerDown { target });
        });

        if let Err(err) = self
            .document
            .add_event_listener_with_callback(POINTER_DOWN, closure.as_ref().unchecked_ref())
        {
            tracing::warn!(?err, "failed to attach document listener");
        }

        ListenerId(self.listeners.borrow_mut().insert(closure))
    }

    fn remove_pointer_listener(&self, id: ListenerId) {
        let removed = self.listeners.borrow_mut().try_remove(id.0);
        if let Some(closure) = removed {
            self.detach(&closure);
        }
    }

    fn contains(&self, region: &Node, target: &Node) -> bool {
        region.contains(Some(target))
    }
}

impl Drop for WebHost {
    fn drop(&mut self) {
        let listeners = std::mem::take(self.listeners.get_mut());
        for (_, closure) in listeners {
            self.detach(&closure);
        }
    }
}
