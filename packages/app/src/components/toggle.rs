use crate::{mounted_node, HostHandle};
use dioxus::prelude::*;
use dishes_hooks::{PlatformHost, ToggleState, ToggleView};
use std::rc::Rc;

/// The state behind a [`ToggleForm`]: its scroll lock, its outside-dismiss observer and whether
/// it is open.
pub type ToggleController = dishes_hooks::ToggleForm<Rc<PlatformHost>>;

/// A "new dish" disclosure: a button that swaps itself for a small form.
///
/// Exactly one of the two is rendered. While the form is showing, page scrolling is locked and a
/// press anywhere outside the form closes it again.
///
/// Pass a `controller` to open or close the form from elsewhere. Whoever passes it in keeps it
/// alive, so closing it on the way out is up to them.
#[component]
pub fn ToggleForm(
    host: HostHandle,
    #[props(default)] initial: ToggleState,
    controller: Option<ToggleController>,
) -> Element {
    let toggle = use_hook(|| {
        let toggle = controller.unwrap_or_else(|| ToggleController::new(host.rc()));
        if initial.is_open() {
            toggle.open();
        }
        toggle
    });

    let state = use_signal(|| toggle.state());
    use_hook(|| {
        toggle.on_change(move |next| {
            let mut state = state;
            state.set(next);
        })
    });
    use_drop({
        let toggle = toggle.clone();
        // the signal goes away with this component
        move || toggle.on_change(|_| {})
    });

    let body = match state().view() {
        ToggleView::Control => {
            let toggle = toggle.clone();
            rsx! {
                button {
                    class: "disclosure",
                    r#type: "button",
                    onclick: move |_| {
                        toggle.open();
                    },
                    "Add a dish"
                }
            }
        }
        ToggleView::Form => rsx! {
            DishForm { toggle: toggle.clone() }
        },
    };

    rsx! {
        div { class: "toggle", {body} }
    }
}

/// The open side of [`ToggleForm`]. Points the outside-dismiss observer at itself once mounted.
#[component]
fn DishForm(toggle: ToggleController) -> Element {
    let mounted = toggle.clone();
    let submitted = toggle.clone();

    rsx! {
        div {
            class: "dish-card",
            onmounted: move |event: MountedEvent| {
                let Some(region) = mounted_node(&event.data()) else {
                    tracing::warn!("dish form has no host node, outside presses will not close it");
                    return;
                };
                mounted.region_mounted(region);
            },
            form {
                onsubmit: move |event: FormEvent| {
                    event.prevent_default();
                    submitted.close();
                },
                div { class: "form-row",
                    label { r#for: "name", "Name: " }
                    input { r#type: "text", id: "name", name: "name" }
                }
                button { r#type: "submit", "Save" }
                button {
                    r#type: "button",
                    onclick: move |_| {
                        toggle.close();
                    },
                    "Cancel"
                }
            }
        }
    }
}
