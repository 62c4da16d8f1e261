//! Shared helpers for router integration tests: in-memory repositories and
//! a small request builder driving the router through `tower::ServiceExt`.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use chrono::{Duration, Utc};
use serde_json::Value;
use tower::ServiceExt;

use parley_api::http::router::build_router;
use parley_api::state::AppState;
use parley_core::repository::chat::ChatRepository;
use parley_core::repository::message::MessageRepository;
use parley_types::chat::{Chat, NewChat};
use parley_types::config::ApiConfig;
use parley_types::error::RepositoryError;
use parley_types::message::{Message, NewMessage};

// --- In-memory store ---

#[derive(Default)]
struct Store {
    chats: Vec<Chat>,
    messages: Vec<Message>,
    next_chat_id: i64,
    next_message_id: i64,
}

/// Chat half of the in-memory store.
#[derive(Clone, Default)]
pub struct MemChatRepository {
    store: Arc<Mutex<Store>>,
}

/// Message half, sharing the chat half's store.
#[derive(Clone)]
pub struct MemMessageRepository {
    store: Arc<Mutex<Store>>,
}

pub fn memory_repositories() -> (MemChatRepository, MemMessageRepository) {
    let chats = MemChatRepository::default();
    let messages = MemMessageRepository {
        store: Arc::clone(&chats.store),
    };
    (chats, messages)
}

impl ChatRepository for MemChatRepository {
    async fn create(&self, chat: &NewChat) -> Result<Chat, RepositoryError> {
        let mut store = self.store.lock().unwrap();
        store.next_chat_id += 1;
        let created = Chat {
            id: store.next_chat_id,
            title: chat.title.clone(),
            created_at: Utc::now(),
        };
        store.chats.push(created.clone());
        Ok(created)
    }

    async fn get(&self, id: i64) -> Result<Option<Chat>, RepositoryError> {
        let store = self.store.lock().unwrap();
        Ok(store.chats.iter().find(|c| c.id == id).cloned())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut store = self.store.lock().unwrap();
        let before = store.chats.len();
        store.chats.retain(|c| c.id != id);
        if store.chats.len() == before {
            return Err(RepositoryError::NotFound);
        }
        store.messages.retain(|m| m.chat_id != id);
        Ok(())
    }
}

impl MessageRepository for MemMessageRepository {
    async fn create(&self, message: &NewMessage) -> Result<Message, RepositoryError> {
        let mut store = self.store.lock().unwrap();
        if !store.chats.iter().any(|c| c.id == message.chat_id) {
            return Err(RepositoryError::NotFound);
        }
        store.next_message_id += 1;
        let id = store.next_message_id;
        let created = Message {
            id,
            chat_id: message.chat_id,
            text: message.text.clone(),
            // Strictly increasing so newest-first ordering is unambiguous.
            created_at: Utc::now() + Duration::milliseconds(id),
        };
        store.messages.push(created.clone());
        Ok(created)
    }

    async fn list_by_chat(
        &self,
        chat_id: i64,
        limit: u32,
    ) -> Result<Vec<Message>, RepositoryError> {
        let store = self.store.lock().unwrap();
        let mut found: Vec<Message> = store
            .messages
            .iter()
            .filter(|m| m.chat_id == chat_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        found.truncate(limit as usize);
        Ok(found)
    }
}

/// Repository whose every call fails as if the database were unreachable.
#[derive(Clone, Copy, Default)]
pub struct UnavailableRepository;

impl ChatRepository for UnavailableRepository {
    async fn create(&self, _chat: &NewChat) -> Result<Chat, RepositoryError> {
        Err(RepositoryError::Connection)
    }

    async fn get(&self, _id: i64) -> Result<Option<Chat>, RepositoryError> {
        Err(RepositoryError::Connection)
    }

    async fn delete(&self, _id: i64) -> Result<(), RepositoryError> {
        Err(RepositoryError::Connection)
    }
}

impl MessageRepository for UnavailableRepository {
    async fn create(&self, _message: &NewMessage) -> Result<Message, RepositoryError> {
        Err(RepositoryError::Connection)
    }

    async fn list_by_chat(
        &self,
        _chat_id: i64,
        _limit: u32,
    ) -> Result<Vec<Message>, RepositoryError> {
        Err(RepositoryError::Connection)
    }
}

// --- Routers ---

/// Router over a fresh in-memory store, mounted at `/api/v1`.
pub fn memory_app() -> Router {
    let (chats, messages) = memory_repositories();
    build_router(AppState::new(chats, messages), &ApiConfig::default())
}

/// Router whose storage is down.
pub fn unavailable_app() -> Router {
    build_router(
        AppState::new(UnavailableRepository, UnavailableRepository),
        &ApiConfig::default(),
    )
}

// --- Requests ---

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    pub fn error(&self) -> String {
        self.json()["error"]
            .as_str()
            .expect("missing \"error\" field")
            .to_string()
    }
}

/// Send one request through the router. `body` is sent verbatim.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(Body::from(body.unwrap_or_default().to_owned()))
        .expect("failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body")
        .to_vec();

    TestResponse { status, body }
}

/// Create a chat and return its id.
pub async fn create_chat(app: &Router, title: &str) -> i64 {
    let body = serde_json::json!({ "title": title }).to_string();
    let resp = send(app, Method::POST, "/api/v1/chats", Some(&body)).await;
    assert_eq!(resp.status, StatusCode::CREATED);
    resp.json()["Id"].as_i64().expect("chat id")
}

/// Post a message and return the response.
pub async fn post_message(app: &Router, chat_id: &str, text: &str) -> TestResponse {
    let body = serde_json::json!({ "text": text }).to_string();
    send(
        app,
        Method::POST,
        &format!("/api/v1/chats/{chat_id}/messages"),
        Some(&body),
    )
    .await
}
