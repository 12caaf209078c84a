use crate::{HostEnv, Overflow};

/// Page scrolling is disabled for as long as this guard lives.
///
/// Acquiring records the body's current overflow and forces [`Overflow::HIDDEN`]. Dropping puts
/// back exactly the recorded value, so locks taken one inside another unwind in order. A lock
/// acquired while another one is already held records `hidden` and therefore restores `hidden`.
#[must_use = "the page unlocks as soon as the guard is dropped"]
pub struct ScrollLock<H: HostEnv> {
    host: H,
    previous: Overflow,
}

impl<H: HostEnv> ScrollLock<H> {
    /// Disable scrolling on `host`.
    pub fn acquire(host: H) -> Self {
        let previous = host.overflow();
        tracing::debug!(%previous, "locking page scroll");
        host.set_overflow(Overflow::HIDDEN);
        Self { host, previous }
    }

    /// The overflow value that will be restored.
    pub fn previous(&self) -> &Overflow {
        &self.previous
    }

    /// Restore the recorded overflow now.
    pub fn release(self) {
        drop(self)
    }

    pub(crate) fn host(&self) -> &H {
        &self.host
    }
}

impl<H: HostEnv> Drop for ScrollLock<H> {
    fn drop(&mut self) {
        let previous = std::mem::take(&mut self.previous);
        tracing::debug!(%previous, "unlocking page scroll");
        self.host.set_overflow(previous);
    }
}
