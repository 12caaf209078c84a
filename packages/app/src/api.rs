use crate::FetchError;
use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// One dish, as served by the API.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
pub struct Dish {
    /// Unique across the list; cards are keyed by it.
    pub name: String,

    /// A line of description.
    pub desc: String,

    /// Listed in the order the API gives them.
    pub ingredients: Vec<String>,
}

/// A request for the dish list in progress.
pub type DishFuture = LocalBoxFuture<'static, Result<Vec<Dish>, FetchError>>;

/// Somewhere the dish list comes from.
///
/// Dropping the returned future must stop the request.
pub trait DishSource {
    /// Start a request for the whole list.
    fn fetch_dishes(&self) -> DishFuture;
}

/// `GET` the dish list from an HTTP endpoint.
pub struct HttpDishSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpDishSource {
    /// A source for the list served at `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl DishSource for HttpDishSource {
    fn fetch_dishes(&self) -> DishFuture {
        let request = self.client.get(&self.endpoint);
        let endpoint = self.endpoint.clone();

        // In the browser, dropping this future aborts the underlying `fetch`.
        Box::pin(async move {
            tracing::debug!(%endpoint, "fetching dishes");
            let response = request.send().await?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            let body = response.text().await?;
            decode_dishes(&body)
        })
    }
}

/// Parse the API's JSON array of dishes.
pub fn decode_dishes(body: &str) -> Result<Vec<Dish>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

/// A shared [`DishSource`] that can be passed around as a prop.
///
/// Two handles are equal when they point at the same source.
#[derive(Clone)]
pub struct DishSourceHandle(Rc<dyn DishSource>);

impl DishSourceHandle {
    /// Share `source`.
    pub fn new(source: impl DishSource + 'static) -> Self {
        Self(Rc::new(source))
    }

    /// See [`DishSource::fetch_dishes`].
    pub fn fetch_dishes(&self) -> DishFuture {
        self.0.fetch_dishes()
    }
}

impl PartialEq for DishSourceHandle {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}
