use crate::{DepsEffect, HostEnv};

/// Coarse shape of the synced title, for inspection without reading the text itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleFill {
    /// The title is the empty string.
    Empty,

    /// The title has at least one character.
    Full,
}

impl TitleFill {
    /// Classify a title value.
    pub fn of(value: &str) -> Self {
        if value.is_empty() {
            Self::Empty
        } else {
            Self::Full
        }
    }
}

/// Keeps the host's document title equal to a piece of text state.
///
/// The title is written on activation and then whenever [`TitleSync::sync`] sees a different
/// value. Nothing is restored when the sync goes away; the last value stays as the title.
pub struct TitleSync<H: HostEnv> {
    host: H,
    effect: DepsEffect<String>,
}

impl<H: HostEnv> TitleSync<H> {
    /// A sync that has not written anything yet. The first [`TitleSync::sync`] always writes.
    pub fn new(host: H) -> Self {
        Self {
            host,
            effect: DepsEffect::new(),
        }
    }

    /// Start syncing, writing `value` as the title right away.
    pub fn activate(host: H, value: &str) -> Self {
        let mut sync = Self::new(host);
        sync.sync(value);
        sync
    }

    /// Push `value` to the title if it changed. Returns whether the title was written.
    pub fn sync(&mut self, value: &str) -> bool {
        if self.effect.deps().map(String::as_str) == Some(value) {
            return false;
        }

        let host = &self.host;
        self.effect.update(value.to_string(), |value| {
            tracing::trace!(len = value.len(), "syncing document title");
            host.set_title(value);
            || {}
        })
    }

    /// The classification of the last synced value.
    pub fn fill(&self) -> TitleFill {
        TitleFill::of(self.effect.deps().map(String::as_str).unwrap_or_default())
    }
}
