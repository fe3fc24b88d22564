//! Shared test utilities and stub data ports.

#![allow(dead_code, unused_imports)]

pub mod mock_news_api;

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use breaking_news::data::{Article, DataPort, FetchError};
use breaking_news::store::StateStream;
use breaking_news::ui::mvi::UiState;
use parking_lot::Mutex;
use tempfile::TempDir;
use tokio::sync::Notify;

/// Upper bound for anything a test awaits.
pub const WAIT: Duration = Duration::from_secs(2);

/// Article with a title, image and description.
pub fn article(title: &str) -> Article {
    Article {
        title: Some(title.to_string()),
        url_to_image: Some(format!("https://img.example/{title}.png")),
        description: Some(format!("About {title}")),
        ..Article::default()
    }
}

pub fn articles(titles: &[&str]) -> Vec<Article> {
    titles.iter().map(|t| article(t)).collect()
}

/// Next state of `stream`, failing the test on timeout or a closed stream.
pub async fn next_state<S: UiState>(stream: &mut StateStream<S>) -> S {
    tokio::time::timeout(WAIT, stream.next())
        .await
        .expect("Timed out waiting for state")
        .expect("State stream closed")
}

/// Collect exactly `count` states.
pub async fn take_states<S: UiState>(stream: &mut StateStream<S>, count: usize) -> Vec<S> {
    let mut states = Vec::with_capacity(count);
    for _ in 0..count {
        states.push(next_state(stream).await);
    }
    states
}

/// Wait until `stream` emits a state matching `pred`, returning everything seen.
pub async fn states_until<S: UiState>(
    stream: &mut StateStream<S>,
    pred: impl Fn(&S) -> bool,
) -> Vec<S> {
    let mut seen = Vec::new();
    loop {
        let state = next_state(stream).await;
        let done = pred(&state);
        seen.push(state);
        if done {
            return seen;
        }
    }
}

/// Assert nothing arrives on `stream` for a short while.
pub async fn assert_quiet<S: UiState>(stream: &mut StateStream<S>) {
    let outcome = tokio::time::timeout(Duration::from_millis(100), stream.next()).await;
    if let Ok(Some(state)) = outcome {
        panic!("Unexpected state: {state:?}");
    }
}

/// Create a temporary config file with the given TOML body.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- Stub ports ---------------------------------------------------------------

/// Port answering every fetch from a script, then repeating the last answer.
pub struct ScriptedPort {
    script: Mutex<VecDeque<Result<Vec<Article>, FetchError>>>,
    calls: AtomicUsize,
}

impl ScriptedPort {
    pub fn new(script: Vec<Result<Vec<Article>, FetchError>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn ok(items: Vec<Article>) -> Arc<Self> {
        Self::new(vec![Ok(items)])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataPort for ScriptedPort {
    type Item = Article;

    async fn fetch_items(&self) -> Result<Vec<Article>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut script = self.script.lock();
        if script.len() > 1 {
            script.pop_front().unwrap_or(Ok(Vec::new()))
        } else {
            script.front().cloned().unwrap_or(Ok(Vec::new()))
        }
    }
}

/// Port that blocks every fetch until released.
pub struct GatedPort {
    items: Vec<Article>,
    started: Notify,
    release: Notify,
    finished: AtomicBool,
}

impl GatedPort {
    pub fn new(items: Vec<Article>) -> Arc<Self> {
        Arc::new(Self {
            items,
            started: Notify::new(),
            release: Notify::new(),
            finished: AtomicBool::new(false),
        })
    }

    /// Wait until a fetch is in flight.
    pub async fn wait_started(&self) {
        tokio::time::timeout(WAIT, self.started.notified())
            .await
            .expect("Fetch never started");
    }

    pub fn release(&self) {
        self.release.notify_one();
    }

    /// Whether a fetch ran to completion.
    pub fn finished(&self) -> bool {
        self.finished.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataPort for GatedPort {
    type Item = Article;

    async fn fetch_items(&self) -> Result<Vec<Article>, FetchError> {
        self.started.notify_one();
        self.release.notified().await;
        self.finished.store(true, Ordering::SeqCst);
        Ok(self.items.clone())
    }
}

/// Port whose fetch panics.
pub struct PanickingPort;

#[async_trait]
impl DataPort for PanickingPort {
    type Item = Article;

    async fn fetch_items(&self) -> Result<Vec<Article>, FetchError> {
        explode()
    }
}

fn explode() -> Result<Vec<Article>, FetchError> {
    panic!("port exploded")
}
