use std::time::Duration;

use async_trait::async_trait;
use datatable::actions::{Action, ActionClient, ActionError};
use log::debug;
use url::Url;

use crate::error::CliError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Sends player actions as JSON POSTs to the jukebox server.
pub struct HttpActionClient {
    client: reqwest::Client,
    base: Url,
}

impl HttpActionClient {
    pub fn new(server_url: &str) -> Result<Self, CliError> {
        let base = Url::parse(server_url)?;
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, base })
    }

    fn url(&self, action: &Action) -> Result<Url, ActionError> {
        self.base
            .join(action.endpoint())
            .map_err(|e| ActionError::Transport(e.to_string()))
    }
}

#[async_trait]
impl ActionClient for HttpActionClient {
    async fn send(&self, action: &Action) -> Result<(), ActionError> {
        let url = self.url(action)?;
        debug!("POST {}", url);

        let mut request = self.client.post(url);
        if let Some(body) = action.body() {
            request = request.json(&body);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ActionError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ActionError::Status {
                status: status.as_u16(),
                endpoint: action.endpoint(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let client = HttpActionClient::new("http://127.0.0.1:8080/").unwrap();
        assert_eq!(
            client.url(&Action::Enqueue(1)).unwrap().as_str(),
            "http://127.0.0.1:8080/api/add"
        );
        assert_eq!(
            client.url(&Action::Stop).unwrap().as_str(),
            "http://127.0.0.1:8080/api/stop"
        );
    }

    #[test]
    fn test_rejects_bad_url() {
        assert!(matches!(
            HttpActionClient::new("not a url"),
            Err(CliError::Url(_))
        ));
    }
}
