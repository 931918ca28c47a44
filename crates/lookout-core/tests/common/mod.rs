//! Shared test doubles for the external clients.

#![allow(dead_code)]

use std::{
    collections::{HashMap, VecDeque},
    sync::Mutex,
};

use async_trait::async_trait;
use lookout_core::{
    ArchiveBuilder, CompletionClient, CompletionError, CompletionRequest, SearchError, SearchHit,
    SearchQuery, SearchSource,
};
use tempfile::TempDir;

/// Search double answering per target and recording every query.
#[derive(Default)]
pub struct MockSearch {
    results: HashMap<String, Result<Vec<SearchHit>, u16>>,
    queries: Mutex<Vec<SearchQuery>>,
}

impl MockSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hits(mut self, target: &str, hits: Vec<SearchHit>) -> Self {
        self.results.insert(target.to_string(), Ok(hits));
        self
    }

    /// Makes `target` fail with the given HTTP status.
    pub fn failing(mut self, target: &str, status: u16) -> Self {
        self.results.insert(target.to_string(), Err(status));
        self
    }

    pub fn call_count(&self) -> usize {
        self.queries.lock().expect("lock").len()
    }

    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries.lock().expect("lock").clone()
    }
}

#[async_trait]
impl SearchSource for MockSearch {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>, SearchError> {
        self.queries.lock().expect("lock").push(query.clone());
        match self.results.get(&query.target) {
            Some(Ok(hits)) => Ok(hits.clone()),
            Some(Err(status)) => Err(SearchError::Api {
                target: query.target.clone(),
                status: *status,
            }),
            None => Ok(Vec::new()),
        }
    }
}

/// Completion double replaying scripted answers in order.
#[derive(Default)]
pub struct MockCompletion {
    answers: Mutex<VecDeque<Result<String, CompletionError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockCompletion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(self, content: &str) -> Self {
        self.answers
            .lock()
            .expect("lock")
            .push_back(Ok(content.to_string()));
        self
    }

    pub fn fail(self, status: u16, body: &str) -> Self {
        self.answers
            .lock()
            .expect("lock")
            .push_back(Err(CompletionError::Api {
                status,
                body: body.to_string(),
            }));
        self
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().expect("lock").clone()
    }
}

#[async_trait]
impl CompletionClient for MockCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        self.requests.lock().expect("lock").push(request.clone());
        self.answers
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or(Err(CompletionError::EmptyResponse))
    }
}

/// A hit whose heat score is exactly `engagement`.
pub fn hit(id: &str, engagement: i64) -> SearchHit {
    SearchHit {
        id: id.to_string(),
        title: format!("Post {id}"),
        body: format!("Body of {id}"),
        url: format!("https://reddit.com/comments/{id}"),
        score: 0,
        comment_count: engagement,
    }
}

/// Helper function to create a test archive
pub async fn create_test_archive() -> (TempDir, lookout_core::Archive) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let archive = ArchiveBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create archive");
    (temp_dir, archive)
}
