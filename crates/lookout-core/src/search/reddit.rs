//! Reddit search over the application-only OAuth API.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::OnceCell;

use super::{SearchHit, SearchQuery, SearchSource};
use crate::{config::RedditConfig, error::SearchError};

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Child>,
}

#[derive(Deserialize)]
struct Child {
    data: Post,
}

#[derive(Deserialize)]
struct Post {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    selftext: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    score: i64,
    #[serde(default)]
    num_comments: i64,
}

impl From<Post> for SearchHit {
    fn from(post: Post) -> Self {
        SearchHit {
            id: post.id,
            title: post.title,
            body: post.selftext,
            url: post.url,
            score: post.score,
            comment_count: post.num_comments,
        }
    }
}

/// Subreddit-scoped search client.
///
/// The bearer token is requested on first use and reused for the lifetime
/// of the client.
pub struct RedditSearch {
    config: RedditConfig,
    client: Client,
    token: OnceCell<String>,
}

impl RedditSearch {
    pub fn new(config: RedditConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            config,
            client,
            token: OnceCell::new(),
        })
    }

    async fn token(&self) -> Result<&str, SearchError> {
        self.token
            .get_or_try_init(|| self.fetch_token())
            .await
            .map(String::as_str)
    }

    async fn fetch_token(&self) -> Result<String, SearchError> {
        let url = format!(
            "{}/api/v1/access_token",
            self.config.auth_url.trim_end_matches('/')
        );
        debug!("Requesting Reddit application token");

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SearchError::Auth(format!(
                "token endpoint returned {}",
                response.status()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Auth(format!("invalid token response: {e}")))?;
        Ok(token.access_token)
    }
}

#[async_trait]
impl SearchSource for RedditSearch {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>, SearchError> {
        if !is_community_name(&query.target) {
            return Err(SearchError::InvalidTarget {
                target: query.target.clone(),
            });
        }
        let token = self.token().await?;
        let url = format!(
            "{}/r/{}/search",
            self.config.api_url.trim_end_matches('/'),
            query.target
        );
        let limit = query.limit.to_string();
        debug!("GET {url} q={:?} limit={limit}", query.query);

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .query(&[
                ("q", query.query.as_str()),
                ("restrict_sr", "1"),
                ("sort", query.sort.as_str()),
                ("t", query.window.as_str()),
                ("limit", limit.as_str()),
                ("raw_json", "1"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Api {
                target: query.target.clone(),
                status: status.as_u16(),
            });
        }

        let listing: Listing = response.json().await?;
        Ok(listing
            .data
            .children
            .into_iter()
            .map(|child| child.data.into())
            .collect())
    }
}

/// Community names are alphanumeric with underscores; `+` joins several
/// communities into one search. Anything else would change the request path.
fn is_community_name(target: &str) -> bool {
    !target.is_empty()
        && target
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '+')
}
