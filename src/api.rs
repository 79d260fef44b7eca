//! Remote Store Client
//!
//! Frontend bindings to the user REST service.

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{User, UserId, UserInput};

/// Operations the remote user store exposes
///
/// Futures are not `Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait UserApi {
    /// Full collection, in store order
    async fn list(&self) -> Result<Vec<User>, ApiError>;

    async fn create(&self, input: &UserInput) -> Result<(), ApiError>;

    /// Full replacement of the record's fields
    async fn update(&self, id: &UserId, input: &UserInput) -> Result<(), ApiError>;

    async fn delete(&self, id: &UserId) -> Result<(), ApiError>;
}

/// `UserApi` over HTTP + JSON
#[derive(Debug, Clone)]
pub struct HttpUserApi {
    client: Client,
    config: ApiConfig,
}

impl HttpUserApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

#[async_trait(?Send)]
impl UserApi for HttpUserApi {
    async fn list(&self) -> Result<Vec<User>, ApiError> {
        let url = self.config.users_url();
        debug!("[API] GET {}", url);
        let response = ensure_success(self.client.get(&url).send().await?)?;
        let users = response
            .json::<Vec<User>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(users)
    }

    async fn create(&self, input: &UserInput) -> Result<(), ApiError> {
        let url = self.config.users_url();
        debug!("[API] POST {}", url);
        let response = self.client.post(&url).json(input).send().await?;
        ensure_success(response).map_err(ApiError::into_conflict)?;
        Ok(())
    }

    async fn update(&self, id: &UserId, input: &UserInput) -> Result<(), ApiError> {
        let url = self.config.user_url(id);
        debug!("[API] PUT {}", url);
        let response = self.client.put(&url).json(input).send().await?;
        ensure_success(response).map_err(ApiError::into_conflict)?;
        Ok(())
    }

    async fn delete(&self, id: &UserId) -> Result<(), ApiError> {
        let url = self.config.user_url(id);
        debug!("[API] DELETE {}", url);
        ensure_success(self.client.delete(&url).send().await?)?;
        Ok(())
    }
}
