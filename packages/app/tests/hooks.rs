use dioxus::prelude::*;
use dioxus_core::NoOpMutations;
use dishes::{use_reversed, use_title_input, HostHandle};
use dishes_hooks::{HostEnv, MemoryHost};
use futures::{
    channel::mpsc::{self, UnboundedReceiver, UnboundedSender},
    StreamExt,
};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

/// Input the test feeds to a mounted component.
enum Key {
    Type(char),
    /// Re-render without touching the text.
    Nudge,
}

/// The receiving end of the keyboard, handed to the component once.
#[derive(Clone)]
struct Keyboard(Rc<RefCell<Option<UnboundedReceiver<Key>>>>);

impl PartialEq for Keyboard {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

fn keyboard() -> (UnboundedSender<Key>, Keyboard) {
    let (tx, rx) = mpsc::unbounded();
    (tx, Keyboard(Rc::new(RefCell::new(Some(rx)))))
}

/// Type into `text` and bump `nudges` as keys arrive.
fn use_keyboard(keyboard: Keyboard, mut text: Signal<String>, mut nudges: Signal<usize>) {
    use_hook(move || {
        let Some(mut keys) = keyboard.0.borrow_mut().take() else {
            return;
        };
        spawn(async move {
            while let Some(key) = keys.next().await {
                match key {
                    Key::Type(c) => text.write().push(c),
                    Key::Nudge => nudges += 1,
                }
            }
        });
    });
}

/// Run pending tasks and renders until nothing happens for a little while.
async fn settle(dom: &mut VirtualDom) {
    for _ in 0..16 {
        tokio::select! {
            _ = dom.wait_for_work() => {}
            _ = tokio::time::sleep(Duration::from_millis(50)) => break,
        }
        dom.render_immediate(&mut NoOpMutations);
    }
}

#[component]
fn TitleField(host: HostHandle, keyboard: Keyboard) -> Element {
    let value = use_title_input(host, || "abc".to_string());
    let nudges = use_signal(|| 0);
    use_keyboard(keyboard, value, nudges);

    rsx! {
        input { value: "{value}" }
        span { "nudges {nudges}" }
    }
}

#[tokio::test]
async fn title_follows_each_keystroke() {
    let host = Rc::new(MemoryHost::new());
    let (keys, keyboard) = keyboard();
    let props = TitleFieldProps::builder()
        .host(HostHandle::from(host.clone()))
        .keyboard(keyboard)
        .build();
    let mut dom = VirtualDom::new_with_props(TitleField, props);
    dom.rebuild_in_place();
    settle(&mut dom).await;

    assert_eq!(host.title(), "abc");
    assert_eq!(host.title_writes(), 1);

    for (key, title) in [('d', "abcd"), ('e', "abcde")] {
        keys.unbounded_send(Key::Type(key)).unwrap();
        settle(&mut dom).await;
        assert_eq!(host.title(), title);
    }
    assert_eq!(host.title_writes(), 3);

    keys.unbounded_send(Key::Nudge).unwrap();
    settle(&mut dom).await;
    assert!(dioxus_ssr::render(&dom).contains("nudges 1"));
    assert_eq!(host.title(), "abcde");
    assert_eq!(host.title_writes(), 3);
}

#[component]
fn ReversedTitle(title: String, keyboard: Keyboard, derivations: Rc<Cell<usize>>) -> Element {
    let input = use_signal(String::new);
    let nudges = use_signal(|| 0);
    use_keyboard(keyboard, input, nudges);

    let reversed = use_reversed(&title);
    derivations.set(reversed.derivations());

    rsx! {
        p { "{reversed}" }
        input { value: "{input}" }
        span { "nudges {nudges}" }
    }
}

#[tokio::test]
async fn reversed_title_survives_unrelated_renders() {
    let derivations = Rc::new(Cell::new(0));
    let (keys, keyboard) = keyboard();
    let props = ReversedTitleProps::builder()
        .title("Level Up Dishes".to_string())
        .keyboard(keyboard)
        .derivations(derivations.clone())
        .build();
    let mut dom = VirtualDom::new_with_props(ReversedTitle, props);
    dom.rebuild_in_place();
    settle(&mut dom).await;

    assert!(dioxus_ssr::render(&dom).contains("sehsiD pU leveL"));
    assert_eq!(derivations.get(), 1);

    for key in "Tacos".chars() {
        keys.unbounded_send(Key::Type(key)).unwrap();
    }
    keys.unbounded_send(Key::Nudge).unwrap();
    settle(&mut dom).await;

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Tacos"), "{html}");
    assert!(html.contains("nudges 1"), "{html}");
    assert!(html.contains("sehsiD pU leveL"), "{html}");
    assert_eq!(derivations.get(), 1);
}
