// ABOUTME: Catalog, provider, and router fixtures shared by integration tests
// ABOUTME: Builds generators against wiremock servers or scripted in-process providers

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use recipe_finder::{
    catalog::Catalog,
    config::GeneratorConfig,
    errors::{AppError, ErrorCode},
    generator::{GenerationSettings, RecipeGenerator},
    llm::{ChatRequest, ChatResponse, LlmCapabilities, LlmProvider},
    routes::{router, AppState},
};
use serde_json::{json, Value};
use wiremock::MockServer;

/// The built-in catalog, shared
pub fn builtin_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::builtin().expect("built-in catalog must load"))
}

/// Generator settings pointing at a wiremock server
pub fn mock_generator_config(server: &MockServer) -> GeneratorConfig {
    GeneratorConfig {
        base_url: server.uri(),
        api_key: Some("test-key".to_owned()),
        timeout_secs: 5,
        ..GeneratorConfig::default()
    }
}

/// A generator that talks HTTP to the given wiremock server
pub fn mock_generator(server: &MockServer, catalog: Arc<Catalog>) -> RecipeGenerator {
    RecipeGenerator::from_config(&mock_generator_config(server), catalog)
        .expect("generator must build")
}

/// Full application router backed by a wiremock chat-completion server
pub fn mock_app(server: &MockServer) -> Router {
    let catalog = builtin_catalog();
    let generator = Arc::new(mock_generator(server, Arc::clone(&catalog)));
    router(AppState::new(catalog, generator), "*")
}

/// `OpenAI`-style chat-completion envelope carrying `content`
pub fn chat_completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "THUDM/glm-4-9b-chat",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 120, "completion_tokens": 240, "total_tokens": 360 }
    })
}

/// In-process provider returning a fixed reply and recording requests
pub struct ScriptedProvider {
    reply: Result<String, ErrorCode>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedProvider {
    /// Provider that answers every request with `content`
    pub fn replying(content: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(content.to_owned()),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Provider that fails every request with `code`
    pub fn failing(code: ErrorCode) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(code),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::JSON_MODE
    }

    fn default_model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Ok(content) => Ok(ChatResponse {
                content: content.clone(),
                model: "scripted-model".to_owned(),
                usage: None,
                finish_reason: Some("stop".to_owned()),
            }),
            Err(code) => Err(AppError::new(*code, "scripted failure")),
        }
    }
}

/// Generator over a scripted provider and the built-in catalog
pub fn scripted_generator(provider: Arc<ScriptedProvider>) -> RecipeGenerator {
    RecipeGenerator::new(provider, builtin_catalog(), GenerationSettings::default())
}
