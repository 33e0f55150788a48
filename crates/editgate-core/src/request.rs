//! The edit under evaluation, plus the hook payload it arrives in.
//!
//! Claude Code invokes the gate as a PreToolUse hook with a JSON payload on
//! stdin. Only the fields the gate cares about are modeled here; unknown
//! fields in the payload are ignored so new tool parameters don't break the
//! hook.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// OperationKind / EditRequest
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Create,
    Modify,
    MultiEdit,
}

/// A proposed file operation. Immutable once built; the gate never touches
/// the file system on its behalf.
#[derive(Debug, Clone)]
pub struct EditRequest {
    pub path: String,
    pub content: String,
    pub kind: OperationKind,
}

// ---------------------------------------------------------------------------
// Hook payload (Claude Code PreToolUse)
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct HookPayload {
    #[serde(default)]
    pub tool_name: String,
    #[serde(default)]
    pub tool_input: ToolInput,
}

#[derive(Debug, Default, Deserialize)]
pub struct ToolInput {
    #[serde(default)]
    pub file_path: String,
    /// Write tool: the full proposed file content.
    #[serde(default)]
    pub content: Option<String>,
    /// Edit tool: the replacement fragment.
    #[serde(default)]
    pub new_string: Option<String>,
    /// MultiEdit tool: one fragment per edit.
    #[serde(default)]
    pub edits: Vec<EditFragment>,
}

#[derive(Debug, Deserialize)]
pub struct EditFragment {
    #[serde(default)]
    pub new_string: String,
}

impl HookPayload {
    pub fn parse(raw: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Extract the edit this payload proposes, or `None` when there is
    /// nothing to gate (no target path, or no content-bearing field at all —
    /// a pure delete or a tool shape the gate doesn't know).
    ///
    /// An empty content *string* still produces a request: protected paths
    /// must block even when the proposed content is empty.
    pub fn into_request(self) -> Option<EditRequest> {
        if self.tool_input.file_path.is_empty() {
            return None;
        }
        let kind = match self.tool_name.as_str() {
            "Write" => OperationKind::Create,
            "MultiEdit" => OperationKind::MultiEdit,
            _ => OperationKind::Modify,
        };
        let content = if let Some(content) = self.tool_input.content {
            content
        } else if let Some(new_string) = self.tool_input.new_string {
            new_string
        } else if !self.tool_input.edits.is_empty() {
            // Fragments are scanned as one blob; line numbers are relative
            // to the combined fragment text, not the target file.
            self.tool_input
                .edits
                .iter()
                .map(|e| e.new_string.as_str())
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            return None;
        };
        Some(EditRequest {
            path: self.tool_input.file_path,
            content,
            kind,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
