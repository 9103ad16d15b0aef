use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A single note as persisted in the collection file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Note {
    pub fn new(title: impl Into<String>, content: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            created_at,
            updated_at: None,
        }
    }
}

/// Current time at millisecond precision, matching the persisted timestamp format.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Urlencoded body of the add and update forms.
#[derive(Debug, Default, Deserialize)]
pub struct NoteForm {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NoteForm {
    /// Both fields, if both are present and non-empty.
    pub fn fields(&self) -> Option<(&str, &str)> {
        let title = self.title.as_deref().filter(|t| !t.is_empty())?;
        let content = self.content.as_deref().filter(|c| !c.is_empty())?;
        Some((title, content))
    }
}
