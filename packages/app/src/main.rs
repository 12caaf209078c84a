//! Launches Level Up Dishes.
//!
//! Build with the `web` feature and serve the result, e.g. `dx serve --features web`.

use dioxus::prelude::*;
use dishes::{AppConfig, DishSourceHandle, HostHandle, HttpDishSource, Shell};

fn main() {
    let config = AppConfig::from_env();
    dioxus::logger::init(config.log_level()).expect("failed to initialize logger");
    dioxus::launch(app);
}

fn app() -> Element {
    let config = use_hook(AppConfig::from_env);
    let host = use_hook(HostHandle::platform);
    let source = use_hook(|| DishSourceHandle::new(HttpDishSource::new(config.endpoint())));

    let Some(host) = host else {
        tracing::error!("no document to render into");
        return rsx! {};
    };

    rsx! {
        Shell { host, source, title: config.title().to_string() }
    }
}
