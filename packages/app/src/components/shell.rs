use crate::{use_reversed, use_title_input, DishList, DishSourceHandle, HostHandle, ToggleForm};
use dioxus::prelude::*;

/// The classes of the page wrapper. Clicking the heading marks it active for good.
pub fn shell_classes(active: bool) -> &'static str {
    if active {
        "main-wrapper new-class-name"
    } else {
        "main-wrapper"
    }
}

/// The whole page.
#[component]
pub fn Shell(host: HostHandle, source: DishSourceHandle, title: String) -> Element {
    let mut name = use_title_input(host.clone(), String::new);
    let mut active = use_signal(|| false);
    let reversed = use_reversed(&title);

    rsx! {
        main { class: shell_classes(active()),
            h1 { onclick: move |_| active.set(true), "{title}" }
            p { class: "title-reversed", "{reversed}" }
            ToggleForm { host }
            form {
                onsubmit: move |event: FormEvent| event.prevent_default(),
                input {
                    r#type: "text",
                    value: "{name}",
                    oninput: move |event: FormEvent| name.set(event.value()),
                }
                button { r#type: "submit", "Submit" }
            }
            DishList { source }
        }
    }
}
