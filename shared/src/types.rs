use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// Chat Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    Human,
    Ai,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::Human => "human",
            ChatRole::Ai => "ai",
        }
    }
}

impl FromStr for ChatRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "user" => Ok(ChatRole::Human),
            "ai" | "assistant" => Ok(ChatRole::Ai),
            _ => Err(format!("Invalid chat role: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    /// Markdown text.
    pub content: String,
}

impl ChatTurn {
    pub fn human(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Human,
            content: content.into(),
        }
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Ai,
            content: content.into(),
        }
    }

    pub fn is_from_ai(&self) -> bool {
        self.role == ChatRole::Ai
    }
}

// ============================================================================
// Answer Types
// ============================================================================

/// Where an answer came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    Docs,
    #[default]
    ModelOnly,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Docs => "docs",
            Provenance::ModelOnly => "model_only",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
    #[serde(default)]
    pub chat_history: Vec<ChatTurn>,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub provenance: Provenance,
    #[serde(default)]
    pub model_name: Option<String>,
}

impl AnswerResponse {
    pub fn is_grounded(&self) -> bool {
        self.provenance == Provenance::Docs && !self.sources.is_empty()
    }
}
