/// An effect with an explicit dependency value.
///
/// [`DepsEffect::update`] runs the effect the first time it is called and again only when the
/// dependency compares unequal to the one it last ran with. Every run returns a cleanup; the
/// previous cleanup always runs before the effect re-registers, and the last one runs on
/// [`DepsEffect::teardown`] or drop.
///
/// ```rust
/// use dishes_hooks::DepsEffect;
/// use std::{cell::Cell, rc::Rc};
///
/// let runs = Rc::new(Cell::new(0));
/// let mut effect = DepsEffect::new();
///
/// for deps in [1, 1, 2] {
///     let runs = runs.clone();
///     effect.update(deps, move |_| {
///         runs.set(runs.get() + 1);
///         || {}
///     });
/// }
///
/// assert_eq!(runs.get(), 2);
/// ```
pub struct DepsEffect<D> {
    deps: Option<D>,
    cleanup: Option<Box<dyn FnOnce()>>,
}

impl<D> Default for DepsEffect<D> {
    fn default() -> Self {
        Self {
            deps: None,
            cleanup: None,
        }
    }
}

impl<D: PartialEq> DepsEffect<D> {
    /// An effect that has not run yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `effect` if `deps` changed since the last run. Returns whether it ran.
    pub fn update<C>(&mut self, deps: D, effect: impl FnOnce(&D) -> C) -> bool
    where
        C: FnOnce() + 'static,
    {
        if self.deps.as_ref() == Some(&deps) {
            return false;
        }

        self.teardown();
        let cleanup = effect(&deps);
        self.cleanup = Some(Box::new(cleanup));
        self.deps = Some(deps);
        true
    }
}

impl<D> DepsEffect<D> {
    /// The dependency value of the registration that is currently live.
    pub fn deps(&self) -> Option<&D> {
        self.deps.as_ref()
    }

    /// Run the pending cleanup and forget the dependencies, so the next update always runs.
    pub fn teardown(&mut self) {
        self.deps = None;
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}

impl<D> Drop for DepsEffect<D> {
    fn drop(&mut self) {
        self.teardown();
    }
}
