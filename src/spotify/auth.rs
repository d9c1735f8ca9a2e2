use reqwest::Client;
use serde::Deserialize;

use crate::config::Config;

#[derive(Debug, Clone, Deserialize)]
pub struct ClientCredentialsToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Exchanges the application's client id and secret for an access token.
///
/// Client credentials tokens only grant access to public data, which covers
/// public playlists, their items and user profiles. The token is valid for
/// an hour and is not refreshed.
///
/// # Example
///
/// ```
/// let token = client_credentials_token(&Client::new(), &config).await?;
/// println!("Access token expires in {} seconds", token.expires_in);
/// ```
pub async fn client_credentials_token(
    http: &Client,
    config: &Config,
) -> Result<ClientCredentialsToken, reqwest::Error> {
    http.post(&config.token_url)
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?
        .error_for_status()?
        .json::<ClientCredentialsToken>()
        .await
}
