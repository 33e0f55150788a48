use crate::error::{GateError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use regex::Regex;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Whether a violation prevents the edit or merely annotates it.
///
/// `Block` sorts before `Warn` so decision reports list blocking
/// violations first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Block,
    Warn,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Block => write!(f, "block"),
            Severity::Warn => write!(f, "warn"),
        }
    }
}

// ---------------------------------------------------------------------------
// ContentCheck
// ---------------------------------------------------------------------------

/// The content predicate of a rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentCheck {
    /// A pattern that must not appear. Every matching line yields one
    /// violation carrying the line number and the offending line.
    Forbid { pattern: String },
    /// If `when` matches anywhere in the content, `pattern` must also match
    /// somewhere. Its absence yields a single violation with no line number.
    RequireWith { when: String, pattern: String },
}

// ---------------------------------------------------------------------------
// RuleDef
// ---------------------------------------------------------------------------

/// A single authored rule. Rules are data: the engine never branches on a
/// rule's id, only on its check kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDef {
    pub id: String,
    /// Path globs scoping the rule. The content check runs only on files
    /// matching at least one of these.
    pub paths: Vec<String>,
    /// Path globs exempting files that would otherwise match `paths`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
    pub check: ContentCheck,
    #[serde(default = "default_severity")]
    pub severity: Severity,
    /// What went wrong, in one sentence.
    pub message: String,
    /// The concrete fix direction shown under the message.
    pub fix: String,
}

fn default_severity() -> Severity {
    Severity::Block
}

// ---------------------------------------------------------------------------
// CompiledRule
// ---------------------------------------------------------------------------

enum CompiledCheck {
    Forbid(Regex),
    RequireWith { when: Regex, pattern: Regex },
}

/// A rule with its globs and regexes compiled. Compilation is all-or-nothing
/// at table load; a rule that fails to compile refuses the whole gate rather
/// than being skipped, since a silently-skipped rule is a bypass vector.
pub struct CompiledRule {
    def: RuleDef,
    paths: GlobSet,
    exclude: Option<GlobSet>,
    check: CompiledCheck,
}

fn compile_glob_set(rule_id: &str, globs: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for glob in globs {
        let compiled = Glob::new(glob).map_err(|source| GateError::InvalidGlob {
            rule: rule_id.to_string(),
            glob: glob.clone(),
            source,
        })?;
        builder.add(compiled);
    }
    builder.build().map_err(|source| GateError::InvalidGlob {
        rule: rule_id.to_string(),
        glob: globs.join(", "),
        source,
    })
}

fn compile_regex(rule_id: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| GateError::InvalidPattern {
        rule: rule_id.to_string(),
        source,
    })
}

impl CompiledRule {
    pub fn compile(def: RuleDef) -> Result<Self> {
        if def.paths.is_empty() {
            return Err(GateError::EmptyPathGlobs(def.id.clone()));
        }
        let paths = compile_glob_set(&def.id, &def.paths)?;
        let exclude = if def.exclude.is_empty() {
            None
        } else {
            Some(compile_glob_set(&def.id, &def.exclude)?)
        };
        let check = match &def.check {
            ContentCheck::Forbid { pattern } => {
                CompiledCheck::Forbid(compile_regex(&def.id, pattern)?)
            }
            ContentCheck::RequireWith { when, pattern } => CompiledCheck::RequireWith {
                when: compile_regex(&def.id, when)?,
                pattern: compile_regex(&def.id, pattern)?,
            },
        };
        Ok(Self {
            def,
            paths,
            exclude,
            check,
        })
    }

    pub fn def(&self) -> &RuleDef {
        &self.def
    }

    /// Path predicate. A rule that doesn't apply is skipped entirely; its
    /// content check never runs.
    pub fn applies_to(&self, path: &str) -> bool {
        if !self.paths.is_match(path) {
            return false;
        }
        match &self.exclude {
            Some(exclude) => !exclude.is_match(path),
            None => true,
        }
    }

    /// Run the content check, returning matched (line, snippet) pairs.
    ///
    /// `Forbid` yields one entry per matching line (1-based numbers);
    /// `RequireWith` yields a single entry with neither when the required
    /// pattern is missing.
    pub fn scan(&self, content: &str) -> Vec<(Option<u32>, Option<String>)> {
        match &self.check {
            CompiledCheck::Forbid(pattern) => content
                .lines()
                .enumerate()
                .filter(|(_, line)| pattern.is_match(line))
                .map(|(i, line)| (Some(i as u32 + 1), Some(line.trim().to_string())))
                .collect(),
            CompiledCheck::RequireWith { when, pattern } => {
                if when.is_match(content) && !pattern.is_match(content) {
                    vec![(None, None)]
                } else {
                    Vec::new()
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
