//! Drives the real router over a local TCP listener.

use async_trait::async_trait;
use interview_application::{
    AuthError, Authenticator, GatewayError, LlmGateway, Principal,
};
use interview_domain::CompletionRequest;
use interview_presentation::{AppState, serve};
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// Replies from a script, recording every request it sees.
struct ScriptedGateway {
    replies: Mutex<VecDeque<Result<String, GatewayError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedGateway {
    fn new(replies: Vec<Result<&str, GatewayError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(
                replies
                    .into_iter()
                    .map(|r| r.map(str::to_string))
                    .collect(),
            ),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    fn provider_name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Other("script exhausted".into())))
    }
}

/// Accepts exactly one token.
struct SingleToken(&'static str);

impl Authenticator for SingleToken {
    fn authenticate(&self, bearer: Option<&str>) -> Result<Principal, AuthError> {
        match bearer {
            None => Err(AuthError::MissingToken),
            Some(token) if token == self.0 => Ok(Principal::new("tester")),
            Some(_) => Err(AuthError::InvalidToken),
        }
    }
}

async fn start(state: AppState) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve(listener, state, std::future::pending()));
    format!("http://{}", addr)
}

async fn post(base: &str, path: &str, token: Option<&str>, body: &str) -> (u16, Value) {
    let mut request = reqwest::Client::new()
        .post(format!("{}{}", base, path))
        .header("content-type", "application/json")
        .body(body.to_string());
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }
    let response = request.send().await.unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn health_is_unauthenticated() {
    let state = AppState::with_gateway(ScriptedGateway::new(vec![]))
        .with_authenticator(Arc::new(SingleToken("secret")));
    let base = start(state).await;

    let response = reqwest::get(format!("{}/api/health", base)).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn generation_requires_a_valid_token() {
    let gateway = ScriptedGateway::new(vec![Ok(r#"{"explanation":"x"}"#)]);
    let state = AppState::with_gateway(gateway.clone())
        .with_authenticator(Arc::new(SingleToken("secret")));
    let base = start(state).await;
    let body = r#"{"question":"What is ownership?"}"#;

    let (status, json_body) = post(&base, "/api/ai/generate-explanation", None, body).await;
    assert_eq!(status, 401);
    assert_eq!(json_body, json!({ "message": "Not authorized, no token" }));

    let (status, json_body) =
        post(&base, "/api/ai/generate-explanation", Some("wrong"), body).await;
    assert_eq!(status, 401);
    assert_eq!(json_body, json!({ "message": "Not authorized, token failed" }));
    assert!(gateway.requests().is_empty());

    let (status, json_body) =
        post(&base, "/api/ai/generate-explanation", Some("secret"), body).await;
    assert_eq!(status, 200);
    assert_eq!(json_body, json!({ "explanation": "x" }));
    assert_eq!(gateway.requests().len(), 1);
}

#[tokio::test]
async fn questions_end_to_end() {
    let reply = json!({
        "questions": (1..=5)
            .map(|i| json!({ "question": format!("Q{}", i), "answer": format!("A{}", i) }))
            .collect::<Vec<_>>()
    });
    let reply_text = reply.to_string();
    let gateway = ScriptedGateway::new(vec![Ok(reply_text.as_str())]);
    let base = start(AppState::with_gateway(gateway.clone())).await;

    let (status, body) = post(
        &base,
        "/api/ai/generate-questions",
        None,
        r#"{"role":"Backend Engineer","experience":"3 years","topicsToFocus":"Node.js","numberOfQuestions":5}"#,
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body, reply);

    let requests = gateway.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.model.as_str(), "llama-3.1-8b-instant");
    assert!((request.temperature - 0.2).abs() < f32::EPSILON);
    assert!(request.json_mode);
    assert_eq!(request.messages[0].content, "You must return ONLY valid JSON.");
    let prompt = request.prompt().unwrap();
    for needle in ["Backend Engineer", "3 years", "Node.js", "Write 5 interview questions.", "\"questions\""] {
        assert!(prompt.contains(needle), "prompt is missing {}", needle);
    }
}

#[tokio::test]
async fn error_bodies() {
    let gateway = ScriptedGateway::new(vec![
        Ok("not json"),
        Err(GatewayError::Unauthorized("Invalid API Key".into())),
    ]);
    let base = start(AppState::with_gateway(gateway.clone())).await;

    let (status, body) = post(&base, "/api/ai/generate-explanation", None, "{}").await;
    assert_eq!(status, 400);
    assert_eq!(body, json!({ "message": "Missing required fields" }));

    let (status, body) = post(&base, "/api/ai/generate-questions", None, "{").await;
    assert_eq!(status, 400);
    assert_eq!(body, json!({ "message": "Invalid JSON body" }));

    let (status, body) = post(&base, "/api/ai/generate-questions", None, "").await;
    assert_eq!(status, 500);
    assert_eq!(body, json!({ "message": "AI returned invalid JSON", "raw": "not json" }));

    let (status, body) = post(&base, "/api/ai/generate-questions", None, "{}").await;
    assert_eq!(status, 500);
    assert_eq!(body["message"], "Failed to generate questions");
    assert_eq!(body["error"], "Authentication failed: Invalid API Key");

    // The 400s never reached the provider
    assert_eq!(gateway.requests().len(), 2);
}

#[tokio::test]
async fn success_body_matches_provider_text_byte_for_byte() {
    let reply = r#"{"questions":[{"question":"Q1","answer":"A1"}],"meta":1}"#;
    let base = start(AppState::with_gateway(ScriptedGateway::new(vec![Ok(reply)]))).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/ai/generate-questions", base))
        .header("content-type", "application/json")
        .body("{}")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), reply);
}
