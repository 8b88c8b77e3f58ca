use super::*;

pub(crate) struct Client {
  base_url: String,
  client: reqwest::Client,
}

impl Client {
  fn decode(url: &str, body: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(body) {
      Ok(value) => Some(value),
      Err(error) => {
        log::debug!("decode error for {url}: {error}");
        log::warn!("bad json: {url}");
        None
      }
    }
  }

  /// Fetches `url` and parses the body as JSON. Transport errors, error
  /// statuses, and unparseable bodies are logged and yield `None`.
  async fn fetch_json(&self, url: &str) -> Option<Value> {
    log::debug!("GET {url}");

    let body = match self.get_text(url).await {
      Ok(body) => body,
      Err(error) => {
        log::warn!("request failed: {url} -> {error}");
        return None;
      }
    };

    Self::decode(url, &body)
  }

  async fn get_text(&self, url: &str) -> reqwest::Result<String> {
    self
      .client
      .get(url)
      .send()
      .await?
      .error_for_status()?
      .text()
      .await
  }

  fn item_url(&self, id: u64) -> String {
    format!("{}/item/{id}.json", self.base_url)
  }

  fn listing_url(&self, listing: Listing) -> String {
    format!("{}/{}.json", self.base_url, listing.endpoint())
  }

  pub(crate) fn new(base_url: &str, timeout: Duration) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(timeout)
      .build()
      .context("failed to build HTTP client")?;

    Ok(Self {
      base_url: base_url.trim_end_matches('/').to_string(),
      client,
    })
  }
}

impl Source for Client {
  async fn fetch_item(&self, id: u64) -> Option<Value> {
    self.fetch_json(&self.item_url(id)).await
  }

  async fn fetch_listing(&self, listing: Listing) -> Option<Value> {
    self.fetch_json(&self.listing_url(listing)).await
  }
}
