use crate::HostHandle;
use dioxus::prelude::*;
use dishes_hooks::{TextReverse, TitleSync};
use std::{cell::RefCell, fmt, rc::Rc};

/// A text signal that is mirrored into the document title.
///
/// The title is written on mount and after every change to the signal, and left alone on renders
/// that did not change it.
///
/// ```rust, no_run
/// # use dioxus::prelude::*;
/// # use dishes::{use_title_input, HostHandle};
/// #[component]
/// fn Search(host: HostHandle) -> Element {
///     let mut query = use_title_input(host, String::new);
///     rsx! {
///         input { value: "{query}", oninput: move |evt| query.set(evt.value()) }
///     }
/// }
/// ```
pub fn use_title_input(host: HostHandle, initial: impl FnOnce() -> String) -> Signal<String> {
    let value = use_signal(initial);
    let sync = use_hook(|| Rc::new(RefCell::new(TitleSync::new(host.rc()))));

    use_effect(move || {
        sync.borrow_mut().sync(&value.read());
    });

    value
}

/// The reversed form of `text`, derived again only on renders where `text` changed.
pub fn use_reversed(text: &str) -> Reversed {
    let memo = use_hook(|| Reversed(Rc::new(RefCell::new(TextReverse::new()))));
    memo.0.borrow_mut().get(text);
    memo
}

/// The result of [`use_reversed`]. Displays as the reversed text.
#[derive(Clone)]
pub struct Reversed(Rc<RefCell<TextReverse>>);

impl Reversed {
    /// How many times the text was actually reversed over the component's life.
    pub fn derivations(&self) -> usize {
        self.0.borrow().derivations()
    }
}

impl fmt::Display for Reversed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.borrow().output())
    }
}
