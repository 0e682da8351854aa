use reqwest::blocking::Client;

use crate::error::{Error, Result};

pub const API_KEY_HEADER: &str = "hibp-api-key";

/// Status and raw body of one GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

pub trait Transport {
    /// Issues a GET carrying the API key header. Any status is a successful
    /// exchange; only transport failures are errors.
    fn get(&self, url: &str, api_key: &str) -> Result<Response>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, api_key: &str) -> Result<Response> {
        let transport_err = |source| Error::Transport {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, api_key)
            .send()
            .map_err(transport_err)?;

        let status = response.status().as_u16();
        let body = response.bytes().map_err(transport_err)?;

        Ok(Response::new(status, body.to_vec()))
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str, api_key: &str) -> Result<Response> {
        (**self).get(url, api_key)
    }
}
