//! Action payloads — bodies sent with mutating backend requests and the
//! replies the backend sends back.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Body of `POST /api/new-task`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub body: String,
}

impl NewTask {
    /// The canned task queued by the "new task" button.
    #[must_use]
    pub fn draft_reply() -> Self {
        Self {
            title: "Draft reply for new inbound Gmail inquiry".to_string(),
            kind: "email".to_string(),
            body: "Draft a polite reply and request approval before sending.".to_string(),
        }
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTitle`] when the title is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// Body of approve / reject / complete requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRequest {
    pub path: String,
}

/// Body of `POST /api/new-claude-task`, built from the create-app form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAppRequest {
    pub language: String,
    pub name: String,
    pub instruction: String,
}

impl CreateAppRequest {
    /// Trim the raw form fields and require a language and a name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingLanguageOrName`] when either
    /// trimmed field is empty. The instruction may be empty.
    pub fn from_form(
        language: &str,
        name: &str,
        instruction: &str,
    ) -> Result<Self, ValidationError> {
        let language = language.trim();
        let name = name.trim();
        if language.is_empty() || name.is_empty() {
            return Err(ValidationError::MissingLanguageOrName);
        }
        Ok(Self {
            language: language.to_string(),
            name: name.to_string(),
            instruction: instruction.trim().to_string(),
        })
    }
}

/// Reply to a mutating request. Absent fields mean "not reported".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionReply {
    #[serde(default)]
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Number of tasks planned by an orchestrator run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned: Option<u32>,
}

impl ActionReply {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            ok: true,
            ..Self::default()
        }
    }
}

/// Reply to `GET /api/vault-path`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultInfo {
    #[serde(default)]
    pub vault: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_new_task_kind_as_type() {
        let json = serde_json::to_value(NewTask::draft_reply()).unwrap();
        assert_eq!(json["type"], "email");
        assert_eq!(json["title"], "Draft reply for new inbound Gmail inquiry");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn should_reject_blank_task_title() {
        let mut task = NewTask::draft_reply();
        task.title = " ".into();
        assert_eq!(task.validate(), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn should_trim_create_app_fields() {
        let req = CreateAppRequest::from_form(" rust ", " hello ", "  scaffold it ").unwrap();
        assert_eq!(req.language, "rust");
        assert_eq!(req.name, "hello");
        assert_eq!(req.instruction, "scaffold it");
    }

    #[test]
    fn should_require_language_and_name() {
        assert_eq!(
            CreateAppRequest::from_form("", "app", ""),
            Err(ValidationError::MissingLanguageOrName)
        );
        assert_eq!(
            CreateAppRequest::from_form("rust", "   ", "do it"),
            Err(ValidationError::MissingLanguageOrName)
        );
    }

    #[test]
    fn should_accept_empty_instruction() {
        let req = CreateAppRequest::from_form("go", "svc", "").unwrap();
        assert!(req.instruction.is_empty());
    }

    #[test]
    fn should_parse_reply_with_missing_fields_as_not_ok() {
        let reply: ActionReply = serde_json::from_str("{}").unwrap();
        assert!(!reply.ok);
        assert!(reply.path.is_none());
    }

    #[test]
    fn should_parse_failed_reply_with_error() {
        let reply: ActionReply =
            serde_json::from_str(r#"{"ok":false,"error":"Language and name required."}"#).unwrap();
        assert_eq!(reply.error.as_deref(), Some("Language and name required."));
    }
}
