use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde_json::json;

use crate::modules::content::application::ports::outgoing::{
    ContentClient, ContentClientError, FetchOutcome, ObjectQuery, RawContentObject,
};
use crate::shared::config::CosmicConfig;

/// Body of a successful `objects` query.
#[derive(Debug, Deserialize)]
struct ObjectsResponse {
    #[serde(default)]
    objects: Vec<RawContentObject>,
}

/// Body of an error response; Cosmic puts a human-readable reason in `message`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn error_message(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown").to_string())
}

/// `{"type": ..., "slug": ...}` filter for the `query` parameter.
fn query_filter(query: &ObjectQuery) -> String {
    let mut filter = json!({ "type": query.kind.as_str() });
    if let Some(slug) = &query.slug {
        filter["slug"] = json!(slug);
    }
    filter.to_string()
}

/// Production adapter: reads objects from the Cosmic REST API.
#[derive(Debug, Clone)]
pub struct CosmicHttpClient {
    http: reqwest::Client,
    objects_url: Url,
    read_key: String,
}

impl CosmicHttpClient {
    pub fn new(config: CosmicConfig) -> anyhow::Result<Self> {
        let objects_url = Url::parse(&format!(
            "{}/buckets/{}/objects",
            config.api_url.trim_end_matches('/'),
            config.bucket_slug
        ))?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        tracing::info!(
            bucket = %config.bucket_slug,
            api_url = %config.api_url,
            "Content client configured"
        );

        Ok(Self {
            http,
            objects_url,
            read_key: config.read_key,
        })
    }

    fn request_url(&self, query: &ObjectQuery, limit: Option<u32>) -> Url {
        let mut url = self.objects_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("query", &query_filter(query))
                .append_pair("props", &query.props_param())
                .append_pair("depth", &query.depth.to_string())
                .append_pair("read_key", &self.read_key);
            if let Some(limit) = limit {
                pairs.append_pair("limit", &limit.to_string());
            }
        }
        url
    }

    /// One GET against the objects endpoint, mapped onto the outcome taxonomy.
    async fn fetch(&self, query: &ObjectQuery, limit: Option<u32>) -> FetchOutcome<Vec<RawContentObject>> {
        let response = match self.http.get(self.request_url(query, limit)).send().await {
            Ok(response) => response,
            Err(e) => {
                return FetchOutcome::Failure(ContentClientError::Transport(
                    e.without_url().to_string(),
                ))
            }
        };

        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                return FetchOutcome::Failure(ContentClientError::Transport(
                    e.without_url().to_string(),
                ))
            }
        };

        match status {
            StatusCode::NOT_FOUND => {
                tracing::debug!(kind = %query.kind, "Backend reported no matching objects");
                return FetchOutcome::NotFound;
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return FetchOutcome::Failure(ContentClientError::Unauthorized);
            }
            s if !s.is_success() => {
                return FetchOutcome::Failure(ContentClientError::Status {
                    status: s.as_u16(),
                    message: error_message(s, &body),
                });
            }
            _ => {}
        }

        match serde_json::from_slice::<ObjectsResponse>(&body) {
            Ok(parsed) => FetchOutcome::Found(parsed.objects),
            Err(e) => FetchOutcome::Failure(ContentClientError::Decode(e.to_string())),
        }
    }
}

#[async_trait]
impl ContentClient for CosmicHttpClient {
    async fn find_objects(&self, query: &ObjectQuery) -> FetchOutcome<Vec<RawContentObject>> {
        self.fetch(query, None).await
    }

    async fn find_object(&self, query: &ObjectQuery) -> FetchOutcome<RawContentObject> {
        match self.fetch(query, Some(1)).await {
            FetchOutcome::Found(objects) => match objects.into_iter().next() {
                Some(object) => FetchOutcome::Found(object),
                None => FetchOutcome::NotFound,
            },
            FetchOutcome::NotFound => FetchOutcome::NotFound,
            FetchOutcome::Failure(e) => FetchOutcome::Failure(e),
        }
    }
}
