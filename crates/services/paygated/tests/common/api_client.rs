use std::{error::Error, str::FromStr};

use reqwest::Url;
use serde::de::DeserializeOwned;

pub struct ApiClient {
    pub url: &'static str,
}

impl ApiClient {
    fn path(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.url)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        client: &reqwest::Client,
        endpoint: &str,
    ) -> Result<T, Box<dyn Error>> {
        let url = Url::from_str(&self.path(endpoint))?;
        let response = client.get(url).send().await?.text().await?;
        Ok(serde_json::from_str(&response)?)
    }

    pub async fn get_response(
        &self,
        client: &reqwest::Client,
        endpoint: &str,
        token: Option<&str>,
    ) -> Result<reqwest::Response, Box<dyn Error>> {
        let url = Url::from_str(&self.path(endpoint))?;
        let mut request = client.get(url);
        if let Some(token) = token {
            request = request.header("authorization", format!("Bearer {token}"));
        }
        Ok(request.send().await?)
    }

    pub async fn post<T: Into<reqwest::Body>, U: DeserializeOwned>(
        &self,
        client: &reqwest::Client,
        endpoint: &str,
        body: T,
    ) -> Result<U, Box<dyn Error>> {
        let response = self.post_response(client, endpoint, body).await?;
        Ok(serde_json::from_str(&response.text().await?)?)
    }

    pub async fn post_response<T: Into<reqwest::Body>>(
        &self,
        client: &reqwest::Client,
        endpoint: &str,
        body: T,
    ) -> Result<reqwest::Response, Box<dyn Error>> {
        let url = Url::from_str(&self.path(endpoint))?;
        Ok(client
            .post(url)
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await?)
    }

    pub async fn post_form<U: DeserializeOwned>(
        &self,
        client: &reqwest::Client,
        endpoint: &str,
        fields: &[(&str, &str)],
    ) -> Result<U, Box<dyn Error>> {
        let response = self.post_form_response(client, endpoint, fields).await?;
        Ok(serde_json::from_str(&response.text().await?)?)
    }

    pub async fn post_form_response(
        &self,
        client: &reqwest::Client,
        endpoint: &str,
        fields: &[(&str, &str)],
    ) -> Result<reqwest::Response, Box<dyn Error>> {
        let url = Url::from_str(&self.path(endpoint))?;
        Ok(client.post(url).form(fields).send().await?)
    }
}
