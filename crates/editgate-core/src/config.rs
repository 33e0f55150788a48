//! Gate configuration: the rule table, the protected-path list, and the
//! content scan limit.
//!
//! The embedded defaults are the normal mode of operation; a YAML file with
//! the same shape can be swapped in wholesale via `--config`. There is no
//! partial override — the file either loads and validates as a complete
//! table or the gate refuses to run.

use crate::error::Result;
use crate::protected::ProtectedDef;
use crate::rule::RuleDef;
use crate::rules;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GateConfig {
    #[serde(default = "rules::default_rules")]
    pub rules: Vec<RuleDef>,
    #[serde(default = "rules::default_protected")]
    pub protected: Vec<ProtectedDef>,
    #[serde(default = "default_max_content_bytes")]
    pub max_content_bytes: usize,
}

fn default_max_content_bytes() -> usize {
    2 * 1024 * 1024
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            rules: rules::default_rules(),
            protected: rules::default_protected(),
            max_content_bytes: default_max_content_bytes(),
        }
    }
}

impl GateConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
