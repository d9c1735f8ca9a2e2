use reqwest::Client;

use crate::types::RawUser;

/// Retrieves the public profile of `user_id`.
pub async fn get_user(
    http: &Client,
    api_url: &str,
    token: &str,
    user_id: &str,
) -> Result<RawUser, reqwest::Error> {
    let api_url = format!("{uri}/users/{user_id}", uri = api_url, user_id = user_id);
    super::get_json::<RawUser>(http, &api_url, token).await
}
