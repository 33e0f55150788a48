//! The gate itself: compiled tables plus the evaluation pass.

use crate::config::GateConfig;
use crate::decision::{Decision, Violation, ViolationOrigin};
use crate::error::{GateError, Result};
use crate::protected::CompiledProtected;
use crate::request::EditRequest;
use crate::rule::{CompiledRule, RuleDef, Severity};
use std::collections::HashSet;

/// Reserved id for violations produced by the protected-path checker.
pub const PROTECTED_PATH_ID: &str = "protected-path";
/// Reserved id for fail-closed denials on oversized content.
pub const SIZE_LIMIT_ID: &str = "content-size-limit";

// ---------------------------------------------------------------------------
// Gate
// ---------------------------------------------------------------------------

/// The compiled gate. Built once per process from a [`GateConfig`]; the
/// whole table compiles or construction fails — a partially-loaded table
/// could silently let violations through.
pub struct Gate {
    rules: Vec<CompiledRule>,
    protected: Vec<CompiledProtected>,
    max_content_bytes: usize,
}

impl Gate {
    pub fn new(config: GateConfig) -> Result<Self> {
        let mut seen = HashSet::new();
        for def in &config.rules {
            if !seen.insert(def.id.clone()) {
                return Err(GateError::DuplicateRuleId(def.id.clone()));
            }
        }
        let rules = config
            .rules
            .into_iter()
            .map(CompiledRule::compile)
            .collect::<Result<Vec<_>>>()?;
        let protected = config
            .protected
            .into_iter()
            .map(CompiledProtected::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            rules,
            protected,
            max_content_bytes: config.max_content_bytes,
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(GateConfig::default())
    }

    pub fn rules(&self) -> impl Iterator<Item = &RuleDef> {
        self.rules.iter().map(|r| r.def())
    }

    pub fn protected(&self) -> impl Iterator<Item = &crate::protected::ProtectedDef> {
        self.protected.iter().map(|p| p.def())
    }

    /// Evaluate one edit. Pure: no I/O, no mutation, same decision for the
    /// same request every time.
    pub fn evaluate(&self, request: &EditRequest) -> Decision {
        if request.content.len() > self.max_content_bytes {
            tracing::warn!(
                path = %request.path,
                bytes = request.content.len(),
                limit = self.max_content_bytes,
                "content above scan limit; denying fail-closed"
            );
            return Decision::from_violations(vec![self.size_limit_violation(request)]);
        }

        let mut violations = Vec::new();

        // Protected paths run first and independently of content rules:
        // protection must hold even when the file's legitimate content would
        // itself trip a rule.
        for entry in &self.protected {
            if entry.matches(&request.path) {
                let def = entry.def();
                violations.push(Violation {
                    rule: PROTECTED_PATH_ID.to_string(),
                    path: request.path.clone(),
                    line: None,
                    snippet: None,
                    message: format!(
                        "Protected path: {} (matched '{}').",
                        def.category, def.pattern
                    ),
                    fix: def.message.clone(),
                    severity: Severity::Block,
                    origin: ViolationOrigin::ProtectedPath,
                });
            }
        }

        // Content rules: every applicable rule runs; all matches are
        // collected so the caller sees the complete list in one pass.
        let mut scoped = 0usize;
        for rule in &self.rules {
            if !rule.applies_to(&request.path) {
                continue;
            }
            scoped += 1;
            let def = rule.def();
            for (line, snippet) in rule.scan(&request.content) {
                violations.push(Violation {
                    rule: def.id.clone(),
                    path: request.path.clone(),
                    line,
                    snippet,
                    message: def.message.clone(),
                    fix: def.fix.clone(),
                    severity: def.severity,
                    origin: ViolationOrigin::Rule,
                });
            }
        }
        tracing::debug!(
            path = %request.path,
            kind = ?request.kind,
            scoped_rules = scoped,
            violations = violations.len(),
            "evaluated edit"
        );

        Decision::from_violations(violations)
    }

    fn size_limit_violation(&self, request: &EditRequest) -> Violation {
        Violation {
            rule: SIZE_LIMIT_ID.to_string(),
            path: request.path.clone(),
            line: None,
            snippet: None,
            message: format!(
                "Proposed content is {} bytes, above the {}-byte scan limit. The content was not scanned; this is a resource bound, not a rule violation.",
                request.content.len(),
                self.max_content_bytes
            ),
            fix: "Split the edit into smaller writes, or raise max_content_bytes in the gate config."
                .to_string(),
            severity: Severity::Block,
            origin: ViolationOrigin::ResourceLimit,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
