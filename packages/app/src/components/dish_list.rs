use crate::{Dish, DishSourceHandle, FetchState, RequestSlot};
use dioxus::prelude::*;
use futures::future::Aborted;
use std::rc::Rc;

/// Every dish the source knows about, one card each.
///
/// The source is asked once, when the list mounts. Nothing is rendered while the request is in
/// flight. Unmounting aborts the request and whatever it would have returned is thrown away.
#[component]
pub fn DishList(source: DishSourceHandle) -> Element {
    let mut state = use_signal(FetchState::default);
    let requests = use_hook(|| Rc::new(RequestSlot::default()));

    use_hook(move || {
        let request = requests.start(source.fetch_dishes());
        spawn(async move {
            state.set(FetchState::Loading);
            match request.await {
                Ok(result) => state.set(FetchState::settle(result)),
                Err(Aborted) => tracing::debug!("dish request cancelled"),
            }
        })
    });

    let current = state.read();
    let body = match &*current {
        FetchState::Failed(err) => rsx! {
            p { class: "dish-error", "Could not load dishes: {err}" }
        },
        // empty until loaded
        loaded => rsx! {
            for dish in loaded.dishes() {
                DishCard { key: "{dish.name}", dish: dish.clone() }
            }
        },
    };

    rsx! {
        section { class: "dish-list", {body} }
    }
}

#[component]
fn DishCard(dish: Dish) -> Element {
    rsx! {
        article { class: "dish-card dish-card--withImage",
            h3 { "{dish.name}" }
            p { "{dish.desc}" }
            div { class: "ingredients",
                for ingredient in dish.ingredients.iter() {
                    span { "{ingredient}" }
                }
            }
        }
    }
}
