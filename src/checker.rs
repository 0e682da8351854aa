use url::{form_urlencoded, Url};

use crate::clock::Clock;
use crate::config::Settings;
use crate::error::{api_message, Error, Result};
use crate::hasher::PasswordHash;
use crate::transport::Transport;
use crate::{status, status_inline};

/// Account resources of the breach API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Breach,
    Paste,
}

impl Service {
    /// Maps the `-s` selector; `password` is handled separately.
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector {
            "breach" => Some(Service::Breach),
            "paste" => Some(Service::Paste),
            _ => None,
        }
    }

    pub fn resource(&self) -> &'static str {
        match self {
            Service::Breach => "breachedaccount",
            Service::Paste => "pasteaccount",
        }
    }
}

pub struct Checker<T, C> {
    settings: Settings,
    transport: T,
    clock: C,
}

impl<T: Transport, C: Clock> Checker<T, C> {
    pub fn new(settings: Settings, transport: T, clock: C) -> Self {
        Self {
            settings,
            transport,
            clock,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub(crate) fn clock(&self) -> &C {
        &self.clock
    }

    pub fn range_url(&self, hash: &PasswordHash) -> Result<String> {
        let base = self.settings.passwords_url.trim_end_matches('/');
        let url = Url::parse(&format!("{}/range/{}", base, hash.prefix()))?;
        Ok(url.into())
    }

    pub fn account_url(&self, service: Service, account: &str) -> Result<String> {
        let base = self.settings.api_url.trim_end_matches('/');
        let escaped: String = form_urlencoded::byte_serialize(account.as_bytes()).collect();
        // A bare "." or ".." segment is resolved away by URL parsing, even
        // when written as %2e.
        if matches!(escaped.as_str(), "." | "..") {
            return Err(Error::InvalidAccount(account.to_string()));
        }
        let url = Url::parse(&format!("{}/{}/{}", base, service.resource(), escaped))?;
        Ok(url.into())
    }

    /// k-anonymity lookup: only the 5 character prefix is sent, the suffix is
    /// searched for in the returned range. The range endpoint is not rate
    /// limited and its status code is not inspected.
    pub fn is_password_leaked(&self, hash: &PasswordHash) -> Result<bool> {
        let url = self.range_url(hash)?;
        let response = self.transport.get(&url, &self.settings.api_key)?;

        let body = String::from_utf8_lossy(&response.body).to_lowercase();
        Ok(body.contains(&hash.suffix().to_lowercase()))
    }

    /// Returns the vendor payload for an account, empty when the account is
    /// not found. A 429 is waited out and the same request sent again until a
    /// different status comes back; a 401 aborts.
    pub fn check_account(&self, service: Service, account: &str) -> Result<Vec<u8>> {
        let url = self.account_url(service, account)?;

        loop {
            let response = self.transport.get(&url, &self.settings.api_key)?;

            match response.status {
                429 => {
                    status!("{}", api_message(&response.body));
                    status_inline!(
                        "Sleeping for {} seconds...",
                        self.settings.retry_delay.as_secs()
                    );
                    self.clock.sleep(self.settings.retry_delay);
                    status!("retrying");
                }
                401 => return Err(Error::Unauthorized(api_message(&response.body))),
                404 => return Ok(Vec::new()),
                _ => return Ok(response.body),
            }
        }
    }
}
