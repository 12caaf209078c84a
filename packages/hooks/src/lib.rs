#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![allow(clippy::type_complexity)]

mod host;
pub use host::*;

mod memory;
pub use memory::*;

#[cfg(target_arch = "wasm32")]
mod web;
#[cfg(target_arch = "wasm32")]
pub use web::*;

mod effect;
pub use effect::*;

mod title;
pub use title::*;

mod scroll_lock;
pub use scroll_lock::*;

mod outside;
pub use outside::*;

mod toggle;
pub use toggle::*;

mod reverse;
pub use reverse::*;

/// The host the current target renders into.
///
/// In the browser this is the real document; everywhere else it is the in-memory fake.
#[cfg(target_arch = "wasm32")]
pub type PlatformHost = WebHost;

/// The host the current target renders into.
///
/// In the browser this is the real document; everywhere else it is the in-memory fake.
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformHost = MemoryHost;
