use crate::{Dish, FetchError};
use futures::future::{AbortHandle, Abortable};
use rustc_hash::FxHashSet;
use std::{cell::RefCell, future::Future, rc::Rc};

/// Where the dish list is in its one request.
#[derive(Debug, Default)]
pub enum FetchState {
    /// Nothing requested yet.
    #[default]
    Idle,

    /// The request is in flight.
    Loading,

    /// The API answered with this list, in order.
    Loaded(Rc<[Dish]>),

    /// The request failed or the answer was unusable. Not retried.
    Failed(Rc<FetchError>),
}

impl FetchState {
    /// The state a finished request leaves the list in.
    ///
    /// A list with two dishes of the same name is refused as a whole.
    pub fn settle(result: Result<Vec<Dish>, FetchError>) -> Self {
        match result.and_then(ensure_unique_names) {
            Ok(dishes) => {
                tracing::debug!(count = dishes.len(), "dishes loaded");
                Self::Loaded(dishes.into())
            }
            Err(err) => {
                tracing::error!(%err, "loading dishes failed");
                Self::Failed(Rc::new(err))
            }
        }
    }

    /// The dishes to render. Empty unless loaded.
    pub fn dishes(&self) -> &[Dish] {
        match self {
            Self::Loaded(dishes) => &dishes[..],
            _ => &[],
        }
    }
}

fn ensure_unique_names(dishes: Vec<Dish>) -> Result<Vec<Dish>, FetchError> {
    let mut seen = FxHashSet::default();
    for dish in &dishes {
        if !seen.insert(dish.name.as_str()) {
            return Err(FetchError::DuplicateDish(dish.name.clone()));
        }
    }
    Ok(dishes)
}

/// Holds the one outstanding request of a component.
///
/// Starting a request aborts the previous one, and dropping the slot aborts whatever is still in
/// flight. An aborted request resolves to `Err(Aborted)` without polling the transport again.
#[derive(Default)]
pub struct RequestSlot {
    current: RefCell<Option<AbortHandle>>,
}

impl RequestSlot {
    /// Wrap `request` so it can be aborted, aborting the one started before it.
    pub fn start<F: Future>(&self, request: F) -> Abortable<F> {
        let (handle, registration) = AbortHandle::new_pair();
        if let Some(previous) = self.current.replace(Some(handle)) {
            if !previous.is_aborted() {
                tracing::debug!("superseding the outstanding request");
            }
            previous.abort();
        }
        Abortable::new(request, registration)
    }

    /// Abort the outstanding request, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.current.take() {
            handle.abort();
        }
    }
}

impl Drop for RequestSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}
