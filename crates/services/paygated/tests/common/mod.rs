#![allow(dead_code)]

use std::error::Error;

use api_client::ApiClient;
use paygate_auth::auth_body::AuthBody;

pub mod api_client;
pub mod db_test_context;
pub mod test_context;

pub static PAYGATED: ApiClient = ApiClient {
    url: "http://localhost:3000",
};

pub fn from_env(var: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| panic!("Env Variable '{}' missing", var))
}

pub async fn login(
    client: &reqwest::Client,
    username: &str,
    password: &str,
) -> Result<AuthBody, Box<dyn Error>> {
    PAYGATED
        .post_form(
            client,
            "auth",
            &[("username", username), ("password", password)],
        )
        .await
}
