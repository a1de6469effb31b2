pub mod config;
pub mod factory;

mod review;

use std::{fs, io};

use anyhow::{bail, Context, Result};
use log::debug;
use reqwest::{Certificate, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::types::status::Status;

pub const MIME_JSON: &str = "application/json";

/// Client for the cluster API server.
#[derive(Debug, Clone)]
pub struct Client {
    url: String,
    client: reqwest::Client,
    token: Option<String>,
}

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Network error: {0}")]
    Network(#[from] anyhow::Error),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Server error: code {code}, {message}")]
    Server { code: u16, message: String },

    #[error("Server returned invalid json: {0:?}")]
    InvalidJson(String),
}

#[derive(Debug)]
pub enum Payload {
    Json(String),
    None,
}

impl Client {
    pub fn connect(url: &str, cert_path: &str, insecure: bool) -> Result<Self> {
        let url = url.trim_end_matches('/');
        let parsed = match Url::parse(url) {
            Ok(url) => url,
            Err(_) => bail!("invalid server url '{url}'"),
        };
        match parsed.scheme() {
            "http" | "https" => {}
            _ => bail!(
                "invalid url scheme, expect 'http' or 'https', not '{}'",
                parsed.scheme()
            ),
        }

        if parsed.path() != "/" {
            bail!(
                "invalid server url, path should be '/', not '{}'",
                parsed.path()
            );
        }

        let mut builder = reqwest::Client::builder();
        if parsed.scheme() == "https" {
            if !cert_path.is_empty() {
                match fs::read(cert_path) {
                    Ok(data) => {
                        let cert = Certificate::from_pem(&data).context("load cert file")?;
                        builder = builder.add_root_certificate(cert);
                    }
                    Err(err) if err.kind() == io::ErrorKind::NotFound => {
                        debug!("Cert file '{cert_path}' not found, use system roots");
                    }
                    Err(err) => return Err(err).context("read cert file"),
                }
            }
            if insecure {
                builder = builder.danger_accept_invalid_certs(true);
            }
        }
        let client = builder.build().context("build server client")?;

        Ok(Client {
            url: url.to_string(),
            client,
            token: None,
        })
    }

    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn get_json<T>(&self, path: &str) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
    {
        self.do_request_json(Method::GET, path, Payload::None).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, RequestError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let json = match serde_json::to_string(body) {
            Ok(json) => json,
            Err(e) => return Err(RequestError::Client(format!("encode request body: {e}"))),
        };
        self.do_request_json(Method::POST, path, Payload::Json(json))
            .await
    }

    async fn do_request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: Payload,
    ) -> Result<T, RequestError> {
        let url = format!("{}/{}", self.url, path.trim_start_matches('/'));
        debug!("Request {method} {url}");
        let mut req = self
            .client
            .request(method, &url)
            .header("Accept", MIME_JSON);

        req = match payload {
            Payload::Json(json) => req.header("Content-Type", MIME_JSON).body(json),
            Payload::None => req,
        };

        if let Some(token) = &self.token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = match req.build() {
            Ok(req) => req,
            Err(e) => return Err(RequestError::Client(format!("build request failed: {e:#}"))),
        };

        let resp = match self.client.execute(req).await {
            Ok(resp) => resp,
            Err(e) => return Err(RequestError::Network(e.into())),
        };

        let status = resp.status();
        let data = resp
            .text()
            .await
            .map_err(|e| RequestError::Network(e.into()))?;

        if !status.is_success() {
            let message = match serde_json::from_str::<Status>(&data) {
                Ok(status) if !status.message.is_empty() => status.message,
                _ => data,
            };
            return Err(RequestError::Server {
                code: status.as_u16(),
                message,
            });
        }

        match serde_json::from_str(&data) {
            Ok(data) => Ok(data),
            Err(_) => Err(RequestError::InvalidJson(data)),
        }
    }
}

impl RequestError {
    pub fn is_forbidden(&self) -> bool {
        matches!(self, RequestError::Server { code: 403, .. })
    }
}
