//! Protected paths: files whose edits are blocked no matter what the
//! proposed content looks like.
//!
//! Content rules can't express "never touch this file" — a generated type
//! file legitimately contains raw client calls that would trip the content
//! rules. Path protection is the escape hatch that runs before and
//! independently of content analysis.

use crate::error::{GateError, Result};
use globset::{Glob, GlobMatcher};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ProtectedCategory / ProtectedDef
// ---------------------------------------------------------------------------

/// Why a path is protected. Surfaced in the violation message so the agent
/// knows which escape hatch it hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtectedCategory {
    Generated,
    Secret,
    Lockfile,
}

impl std::fmt::Display for ProtectedCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProtectedCategory::Generated => write!(f, "auto-generated file"),
            ProtectedCategory::Secret => write!(f, "secret file"),
            ProtectedCategory::Lockfile => write!(f, "lockfile"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProtectedDef {
    /// Path glob. Any edit to a matching file is blocked unconditionally.
    pub pattern: String,
    pub category: ProtectedCategory,
    /// What to do instead of editing the file.
    pub message: String,
}

// ---------------------------------------------------------------------------
// CompiledProtected
// ---------------------------------------------------------------------------

pub struct CompiledProtected {
    def: ProtectedDef,
    matcher: GlobMatcher,
}

impl CompiledProtected {
    pub fn compile(def: ProtectedDef) -> Result<Self> {
        let matcher = Glob::new(&def.pattern)
            .map_err(|source| GateError::InvalidProtectedGlob {
                pattern: def.pattern.clone(),
                source,
            })?
            .compile_matcher();
        Ok(Self { def, matcher })
    }

    pub fn def(&self) -> &ProtectedDef {
        &self.def
    }

    pub fn matches(&self, path: &str) -> bool {
        self.matcher.is_match(path)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
