// src/net.rs
//
// The single HTTP seam. Scrape code talks to the portal through `Fetch`
// so tests can stand in a canned-page fake; `Session` is the real thing:
// one blocking reqwest client with a cookie store, shared across the
// org → login → calendar sequence (the login POST sets the auth cookies).

use std::time::Duration;

use log::debug;

use crate::error::ScrapeError;
use crate::params::HTTP_TIMEOUT_SECS;

/// Page fetching against the portal. Addresses are query strings appended
/// to the configured root URI.
pub trait Fetch {
    fn get(&self, query: &str) -> Result<String, ScrapeError>;
    fn post_form(&self, query: &str, form: &[(&str, &str)]) -> Result<String, ScrapeError>;
}

pub struct Session {
    client: reqwest::blocking::Client,
    root: String,
}

impl Session {
    pub fn new(root: &str) -> reqwest::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            root: root.to_string(),
        })
    }

    fn uri(&self, query: &str) -> String {
        format!("{}{}", self.root, query)
    }
}

impl Fetch for Session {
    fn get(&self, query: &str) -> Result<String, ScrapeError> {
        let uri = self.uri(query);
        debug!("GET {uri}");
        let response = self
            .client
            .get(&uri)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| ScrapeError::transport("GET", &uri, e))?;
        response
            .text()
            .map_err(|e| ScrapeError::transport("GET", &uri, e))
    }

    fn post_form(&self, query: &str, form: &[(&str, &str)]) -> Result<String, ScrapeError> {
        let uri = self.uri(query);
        // Field values stay out of the log; the form carries the password.
        debug!("POST {uri} ({} form fields)", form.len());
        let response = self
            .client
            .post(&uri)
            .form(form)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| ScrapeError::transport("POST", &uri, e))?;
        response
            .text()
            .map_err(|e| ScrapeError::transport("POST", &uri, e))
    }
}
