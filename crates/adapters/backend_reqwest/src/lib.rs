//! # vaultdesk-adapter-backend-reqwest
//!
//! Backend adapter — the vault backend's JSON API over HTTP via `reqwest`.
//!
//! ## Responsibilities
//! - Implement [`DeskBackend`] for [`HttpBackend`]
//! - Unwrap the backend's `{items: [...]}` / `{lines: [...]}` envelopes
//! - Collapse transport failures, non-2xx statuses and malformed bodies into
//!   a [`DeskError::Backend`] naming the request path
//!
//! Every request carries `Content-Type: application/json`. POSTs without a
//! payload send `{}`, which the backend expects.
//!
//! ## Dependency rule
//! Depends on `vaultdesk-app` (for the port trait) and `vaultdesk-domain`.

pub mod error;
mod wire;

use std::time::Duration;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;

use vaultdesk_app::ports::DeskBackend;
use vaultdesk_domain::action::{ActionReply, CreateAppRequest, NewTask, PathRequest, VaultInfo};
use vaultdesk_domain::error::DeskError;
use vaultdesk_domain::summary::Summary;
use vaultdesk_domain::work_item::WorkItem;

pub use error::HttpError;
use wire::{ItemsEnvelope, LinesEnvelope};

const APPLICATION_JSON: &str = "application/json";
const EMPTY_BODY: &str = "{}";

/// Backend API paths.
pub mod paths {
    pub const SUMMARY: &str = "/api/summary";
    pub const TASKS: &str = "/api/tasks";
    pub const APPROVALS: &str = "/api/approvals";
    pub const LOGS: &str = "/api/logs";
    pub const CLAUDE_LOGS: &str = "/api/claude/logs";
    pub const VAULT_PATH: &str = "/api/vault-path";
    pub const RUN_ORCHESTRATOR: &str = "/api/run-orchestrator";
    pub const NEW_TASK: &str = "/api/new-task";
    pub const APPROVE: &str = "/api/approve";
    pub const REJECT: &str = "/api/reject";
    pub const COMPLETE_TASK: &str = "/api/complete-task";
    pub const CLAUDE_START: &str = "/api/claude/start";
    pub const CLAUDE_STOP: &str = "/api/claude/stop";
    pub const NEW_CLAUDE_TASK: &str = "/api/new-claude-task";
}

/// [`DeskBackend`] implementation talking JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a backend for `base_url` using the transport's default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Client`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, HttpError> {
        Self::with_timeout(base_url, None)
    }

    /// Create a backend whose requests give up after `timeout`, when set.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Client`] if the HTTP client cannot be built.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(HttpError::Client)?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// The base URL every path is appended to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let response = self
            .client
            .get(self.url(path))
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .send()
            .await
            .map_err(|err| HttpError::from_reqwest(path, err))?;
        decode(path, response).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|err| HttpError::from_reqwest(path, err))?;
        decode(path, response).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let response = self
            .client
            .post(self.url(path))
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .body(EMPTY_BODY)
            .send()
            .await
            .map_err(|err| HttpError::from_reqwest(path, err))?;
        decode(path, response).await
    }

    async fn post_path(&self, path: &str, item: &str) -> Result<ActionReply, HttpError> {
        let body = PathRequest {
            path: item.to_string(),
        };
        self.post(path, &body).await
    }
}

async fn decode<T: DeserializeOwned>(
    path: &str,
    response: reqwest::Response,
) -> Result<T, HttpError> {
    let status = response.status();
    if !status.is_success() {
        tracing::debug!(path, %status, "backend returned non-success status");
        return Err(HttpError::Status {
            path: path.to_string(),
            status: status.as_u16(),
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|err| HttpError::from_reqwest(path, err))
}

impl DeskBackend for HttpBackend {
    async fn summary(&self) -> Result<Summary, DeskError> {
        Ok(self.get(paths::SUMMARY).await?)
    }

    async fn tasks(&self) -> Result<Vec<WorkItem>, DeskError> {
        let envelope: ItemsEnvelope = self.get(paths::TASKS).await?;
        Ok(envelope.items)
    }

    async fn approvals(&self) -> Result<Vec<WorkItem>, DeskError> {
        let envelope: ItemsEnvelope = self.get(paths::APPROVALS).await?;
        Ok(envelope.items)
    }

    async fn work_log(&self) -> Result<Vec<String>, DeskError> {
        let envelope: LinesEnvelope = self.get(paths::LOGS).await?;
        Ok(envelope.lines)
    }

    async fn claude_log(&self) -> Result<Vec<String>, DeskError> {
        let envelope: LinesEnvelope = self.get(paths::CLAUDE_LOGS).await?;
        Ok(envelope.lines)
    }

    async fn vault_path(&self) -> Result<VaultInfo, DeskError> {
        Ok(self.get(paths::VAULT_PATH).await?)
    }

    async fn run_orchestrator(&self) -> Result<ActionReply, DeskError> {
        Ok(self.post_empty(paths::RUN_ORCHESTRATOR).await?)
    }

    async fn new_task(&self, task: &NewTask) -> Result<ActionReply, DeskError> {
        Ok(self.post(paths::NEW_TASK, task).await?)
    }

    async fn approve(&self, path: &str) -> Result<ActionReply, DeskError> {
        Ok(self.post_path(paths::APPROVE, path).await?)
    }

    async fn reject(&self, path: &str) -> Result<ActionReply, DeskError> {
        Ok(self.post_path(paths::REJECT, path).await?)
    }

    async fn complete_task(&self, path: &str) -> Result<ActionReply, DeskError> {
        Ok(self.post_path(paths::COMPLETE_TASK, path).await?)
    }

    async fn claude_start(&self) -> Result<ActionReply, DeskError> {
        Ok(self.post_empty(paths::CLAUDE_START).await?)
    }

    async fn claude_stop(&self) -> Result<ActionReply, DeskError> {
        Ok(self.post_empty(paths::CLAUDE_STOP).await?)
    }

    async fn new_claude_task(&self, request: &CreateAppRequest) -> Result<ActionReply, DeskError> {
        Ok(self.post(paths::NEW_CLAUDE_TASK, request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vaultdesk_domain::error::{BackendError, FailureKind};
    use wiremock::matchers::{body_json, body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn backend_for(server: &MockServer) -> HttpBackend {
        HttpBackend::new(server.uri()).unwrap()
    }

    fn backend_failure(err: &DeskError) -> &BackendError {
        match err {
            DeskError::Backend(inner) => inner,
            other => panic!("expected backend error, got {other:?}"),
        }
    }

    #[test]
    fn should_strip_trailing_slash_from_base_url() {
        let backend = HttpBackend::new("http://127.0.0.1:8787/").unwrap();
        assert_eq!(backend.base_url(), "http://127.0.0.1:8787");
        assert_eq!(backend.url(paths::TASKS), "http://127.0.0.1:8787/api/tasks");
    }

    #[tokio::test]
    async fn should_unwrap_task_items_with_json_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(paths::TASKS))
            .and(header("content-type", APPLICATION_JSON))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    {"path": "Needs_Action/a.md", "title": "Reply to Ana", "type": "email"},
                    {"path": "Needs_Action/b.md"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tasks = backend_for(&server).await.tasks().await.unwrap();

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].kind, "email");
        assert_eq!(tasks[1].kind, "task");
        assert_eq!(tasks[1].label(), "Needs_Action/b.md");
    }

    #[tokio::test]
    async fn should_parse_summary_running_flag() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(paths::SUMMARY))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tasks_open": 2,
                "approvals_open": 1,
                "watchers": 1,
                "last_sync": "2026-01-01T10:00:00Z",
                "claude_running": true
            })))
            .mount(&server)
            .await;

        let summary = backend_for(&server).await.summary().await.unwrap();

        assert!(summary.claude_running);
        assert_eq!(summary.tasks_open, Some(2));
    }

    #[tokio::test]
    async fn should_unwrap_log_lines() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(paths::CLAUDE_LOGS))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"lines": ["one", "two"]})),
            )
            .mount(&server)
            .await;

        let lines = backend_for(&server).await.claude_log().await.unwrap();

        assert_eq!(lines, vec!["one".to_string(), "two".to_string()]);
    }

    #[tokio::test]
    async fn should_report_status_failure_with_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(paths::APPROVALS))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = backend_for(&server).await.approvals().await.unwrap_err();

        assert_eq!(
            backend_failure(&err),
            &BackendError::new(paths::APPROVALS, FailureKind::Status(500))
        );
    }

    #[tokio::test]
    async fn should_report_malformed_body_as_decode_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(paths::LOGS))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = backend_for(&server).await.work_log().await.unwrap_err();

        assert_eq!(backend_failure(&err).kind, FailureKind::Decode);
        assert_eq!(err.failed_path(), Some(paths::LOGS));
    }

    #[tokio::test]
    async fn should_report_missing_envelope_as_decode_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(paths::TASKS))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rows": []})))
            .mount(&server)
            .await;

        let err = backend_for(&server).await.tasks().await.unwrap_err();

        assert_eq!(backend_failure(&err).kind, FailureKind::Decode);
    }

    #[tokio::test]
    async fn should_report_unreachable_backend_as_transport_failure() {
        let backend = HttpBackend::new("http://127.0.0.1:1").unwrap();
        let err = backend.summary().await.unwrap_err();

        assert_eq!(backend_failure(&err).kind, FailureKind::Transport);
        assert_eq!(err.failed_path(), Some(paths::SUMMARY));
    }

    #[tokio::test]
    async fn should_send_empty_object_body_for_orchestrator_run() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(paths::RUN_ORCHESTRATOR))
            .and(header("content-type", APPLICATION_JSON))
            .and(body_string(EMPTY_BODY))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"ok": true, "planned": 3})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let reply = backend_for(&server).await.run_orchestrator().await.unwrap();

        assert!(reply.ok);
        assert_eq!(reply.planned, Some(3));
    }

    #[tokio::test]
    async fn should_post_path_body_for_approve() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(paths::APPROVE))
            .and(header("content-type", APPLICATION_JSON))
            .and(body_json(json!({"path": "Pending_Approval/x.md"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                json!({"ok": true, "path": "Approved/x.md"}),
            ))
            .expect(1)
            .mount(&server)
            .await;

        let reply = backend_for(&server)
            .await
            .approve("Pending_Approval/x.md")
            .await
            .unwrap();

        assert_eq!(reply.path.as_deref(), Some("Approved/x.md"));
    }

    #[tokio::test]
    async fn should_post_new_task_with_type_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(paths::NEW_TASK))
            .and(body_json(json!({
                "title": "Draft reply for new inbound Gmail inquiry",
                "type": "email",
                "body": "Draft a polite reply and request approval before sending."
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let reply = backend_for(&server)
            .await
            .new_task(&NewTask::draft_reply())
            .await
            .unwrap();

        assert!(reply.ok);
    }

    #[tokio::test]
    async fn should_treat_refused_create_app_as_status_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(paths::NEW_CLAUDE_TASK))
            .respond_with(ResponseTemplate::new(400).set_body_json(
                json!({"ok": false, "error": "Language and name required."}),
            ))
            .mount(&server)
            .await;

        let request = CreateAppRequest::from_form("rust", "hello", "").unwrap();
        let err = backend_for(&server)
            .await
            .new_claude_task(&request)
            .await
            .unwrap_err();

        assert_eq!(backend_failure(&err).kind, FailureKind::Status(400));
    }

    #[tokio::test]
    async fn should_read_vault_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(paths::VAULT_PATH))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"vault": "/srv/vault"})),
            )
            .mount(&server)
            .await;

        let info = backend_for(&server).await.vault_path().await.unwrap();

        assert_eq!(info.vault.as_deref(), Some("/srv/vault"));
    }

    #[tokio::test]
    async fn should_give_up_after_configured_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(paths::SUMMARY))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"claude_running": false}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let backend =
            HttpBackend::with_timeout(server.uri(), Some(Duration::from_millis(100))).unwrap();
        let err = backend.summary().await.unwrap_err();

        assert_eq!(backend_failure(&err).kind, FailureKind::Transport);
    }
}
