//! Level Up Dishes
//! ---------------
//!
//! A text input that doubles as the page title, a disclosure that swaps itself for a small form
//! (locking page scroll and closing on outside presses), and a list of dishes fetched once from a
//! mock API.
//!
//! Everything that touches the document goes through a [`HostHandle`] and everything that touches
//! the network goes through a [`DishSourceHandle`], both passed down as props.

#![warn(missing_docs)]

mod api;
pub use api::*;

mod config;
pub use config::*;

mod error;
pub use error::*;

mod fetch;
pub use fetch::*;

mod host;
pub use host::*;

mod hooks;
pub use hooks::*;

mod components;
pub use components::*;
