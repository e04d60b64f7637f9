//! reqwest-based backup backend client
//!
//! Keeps the backend session in a cookie jar and forwards the anti-forgery
//! token from the `csrf_token` cookie on every mutating request.

use crate::client::{BackupClient, ClientError};
use crate::types::{
    Acknowledgement, ActivityLog, BackupContent, BackupList, BackupResult, BulkBackupResult,
    Device,
};
use crate::{CSRF_COOKIE, CSRF_HEADER};
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

/// Backend path of the login form.
const LOGIN_PATH: &str = "/login";

/// Direct backend client over HTTP
#[derive(Debug, Clone)]
pub struct HttpBackupClient {
    http: Client,
    jar: Arc<Jar>,
    base_url: Url,
}

impl HttpBackupClient {
    /// Create a client for the backend at `base_url`
    pub fn new(base_url: &str, timeout: Duration, accept_invalid_certs: bool) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .with_context(|| format!("Invalid backend URL '{}'", base_url))?;

        let jar = Arc::new(Jar::default());
        let http = Client::builder()
            .cookie_provider(jar.clone())
            .danger_accept_invalid_certs(accept_invalid_certs)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            jar,
            base_url,
        })
    }

    /// Backend base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        endpoint_url(self.base_url.as_str(), path)
    }

    /// Current anti-forgery token from the session cookies
    fn csrf_token(&self) -> Option<String> {
        let header = self.jar.cookies(&self.base_url)?;
        let cookies = header.to_str().ok()?;
        cookie_value(cookies, CSRF_COOKIE).map(str::to_string)
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let response = self
            .http
            .get(self.endpoint(path))
            .send()
            .await
            .with_context(|| format!("GET {} failed", path))?;
        self.decode(path, response).await
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let mut request = self.http.post(self.endpoint(path)).json(body);
        if let Some(token) = self.csrf_token() {
            request = request.header(CSRF_HEADER, token);
        }
        let response = request
            .send()
            .await
            .with_context(|| format!("POST {} failed", path))?;
        self.decode(path, response).await
    }

    /// Parse a JSON body. The backend answers errors with JSON too (even with
    /// a 500 status), so the status code alone is not checked.
    async fn decode<R: DeserializeOwned>(&self, path: &str, response: Response) -> Result<R> {
        if response.url().path() == LOGIN_PATH {
            return Err(ClientError::NotLoggedIn(self.base_url.to_string()).into());
        }
        let status = response.status();
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response of {}", path))?;
        serde_json::from_str(&body)
            .with_context(|| format!("Unexpected response from {} (HTTP {})", path, status))
    }
}

#[async_trait]
impl BackupClient for HttpBackupClient {
    async fn login(&self, username: &str, password: &str) -> Result<()> {
        debug!("Logging in to {} as {}", self.base_url, username);

        // The login page sets the csrf cookie the form must echo back.
        self.http
            .get(self.endpoint(LOGIN_PATH))
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", self.base_url))?;
        let token = self.csrf_token().unwrap_or_default();

        let response = self
            .http
            .post(self.endpoint(LOGIN_PATH))
            .form(&[
                ("username", username),
                ("password", password),
                ("csrf_token", token.as_str()),
            ])
            .send()
            .await
            .context("Login request failed")?;

        // Success redirects to the dashboard; failure stays on the login page.
        if response.url().path() == LOGIN_PATH {
            return Err(ClientError::InvalidCredentials(username.to_string()).into());
        }

        info!("Logged in to {} as {}", self.base_url, username);
        Ok(())
    }

    async fn list_devices(&self) -> Result<Vec<Device>> {
        let mut devices: Vec<Device> = self.get_json("/get_switches").await?;
        for (index, device) in devices.iter_mut().enumerate() {
            device.index = index;
        }
        debug!("Fetched {} devices", devices.len());
        Ok(devices)
    }

    async fn list_backups(&self, device_index: usize) -> Result<BackupList> {
        let list: BackupList = self
            .post_json("/get_switch_backups", &json!({ "index": device_index }))
            .await?;
        let list = list.into_result()?;
        debug!(
            "Fetched {} backups for device {}",
            list.backups.len(),
            device_index
        );
        Ok(list)
    }

    async fn fetch_backup_content(&self, path: &str) -> Result<BackupContent> {
        debug!("Fetching backup content of {}", path);
        self.post_json("/get_backup_content", &json!({ "filepath": path }))
            .await
    }

    async fn trigger_backup(&self, device_index: usize) -> Result<BackupResult> {
        info!("Triggering backup of device {}", device_index);
        self.post_json("/backup_switch", &json!({ "index": device_index }))
            .await
    }

    async fn backup_all_devices(&self) -> Result<BulkBackupResult> {
        info!("Triggering backup of all devices");
        let result: BulkBackupResult = self.post_json("/backup_all_switches", &json!({})).await?;
        let result = result.into_result()?;
        info!("Backed up {}/{} devices", result.count, result.total);
        Ok(result)
    }

    async fn log_event(&self, message: &str) -> Result<Acknowledgement> {
        self.post_json("/log_event", &json!({ "message": message }))
            .await
    }

    async fn fetch_activity_log(&self) -> Result<ActivityLog> {
        let log: ActivityLog = self.get_json("/get_full_log").await?;
        log.into_result()
    }
}

/// Join the base URL and an absolute endpoint path.
fn endpoint_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Value of cookie `name` in a `Cookie` header value.
fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            endpoint_url("https://backup.local/", "/get_switches"),
            "https://backup.local/get_switches"
        );
        assert_eq!(
            endpoint_url("https://backup.local/console", "log_event"),
            "https://backup.local/console/log_event"
        );
    }

    #[test]
    fn test_cookie_value() {
        let header = "session=abc.def; csrf_token=IjQ5ZmE=.Zx; theme=dark";
        assert_eq!(cookie_value(header, "csrf_token"), Some("IjQ5ZmE=.Zx"));
        assert_eq!(cookie_value(header, "session"), Some("abc.def"));
        assert_eq!(cookie_value(header, "missing"), None);
        assert_eq!(cookie_value("", "csrf_token"), None);
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        assert!(HttpBackupClient::new("not a url", Duration::from_secs(5), false).is_err());
    }

    #[test]
    fn test_csrf_token_from_jar() {
        let client =
            HttpBackupClient::new("http://127.0.0.1:5000", Duration::from_secs(5), false).unwrap();
        assert_eq!(client.csrf_token(), None);

        client.jar.add_cookie_str(
            "csrf_token=tok123; Path=/",
            client.base_url(),
        );
        assert_eq!(client.csrf_token(), Some("tok123".to_string()));
    }
}
