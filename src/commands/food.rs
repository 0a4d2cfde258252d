//! Food Commands
//!
//! `RemoteStore` over HTTP using `gloo-net` (browser `fetch`).

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use food_core::{FoodPlate, NewFoodPlate, RemoteError, RemoteResult, RemoteStore};

use crate::config::ApiConfig;

/// HTTP client for the food API
#[derive(Debug, Clone)]
pub struct HttpFoodStore {
    config: ApiConfig,
}

impl HttpFoodStore {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

fn transport(err: gloo_net::Error) -> RemoteError {
    RemoteError::Transport(err.to_string())
}

/// `RemoteError::Status` for a non-2xx status, `None` otherwise.
///
/// A non-empty body is the message; the status text is the fallback.
fn status_error(status: u16, status_text: String, body: Option<String>) -> Option<RemoteError> {
    if (200..300).contains(&status) {
        return None;
    }
    let message = body
        .map(|b| b.trim().to_string())
        .filter(|b| !b.is_empty())
        .unwrap_or(status_text);
    Some(RemoteError::Status { status, message })
}

async fn check_status(resp: Response) -> RemoteResult<Response> {
    if resp.ok() {
        return Ok(resp);
    }
    let body = resp.text().await.ok();
    match status_error(resp.status(), resp.status_text(), body) {
        Some(err) => Err(err),
        None => Ok(resp),
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> RemoteResult<T> {
    let resp = check_status(resp).await?;
    resp.json::<T>()
        .await
        .map_err(|e| RemoteError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl RemoteStore for HttpFoodStore {
    async fn list(&self) -> RemoteResult<Vec<FoodPlate>> {
        let resp = Request::get(&self.config.foods_url())
            .send()
            .await
            .map_err(transport)?;
        decode(resp).await
    }

    async fn create(&self, plate: &NewFoodPlate) -> RemoteResult<FoodPlate> {
        let resp = Request::post(&self.config.foods_url())
            .json(plate)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        decode(resp).await
    }

    async fn replace(&self, plate: &FoodPlate) -> RemoteResult<FoodPlate> {
        let resp = Request::put(&self.config.food_url(plate.id))
            .json(plate)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        decode(resp).await
    }

    async fn delete(&self, id: u32) -> RemoteResult<()> {
        let resp = Request::delete(&self.config.food_url(id))
            .send()
            .await
            .map_err(transport)?;
        // body is not meaningful
        check_status(resp).await.map(|_| ())
    }
}
