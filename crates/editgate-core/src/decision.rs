use crate::rule::Severity;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Violation
// ---------------------------------------------------------------------------

/// Where a violation came from. A resource-bound denial must never read like
/// a convention violation, so the origin travels with the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationOrigin {
    Rule,
    ProtectedPath,
    ResourceLimit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub rule: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    pub message: String,
    pub fix: String,
    pub severity: Severity,
    pub origin: ViolationOrigin,
}

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub allowed: bool,
    pub violations: Vec<Violation>,
}

impl Decision {
    /// Aggregate violations into a decision with deterministic ordering:
    /// block before warn, then by path, then by line (entries without a line
    /// first), then by rule id. Identical input yields byte-identical output,
    /// which snapshot tests and iteratively-fixing agents both rely on.
    pub fn from_violations(mut violations: Vec<Violation>) -> Self {
        violations.sort_by(|a, b| {
            a.severity
                .cmp(&b.severity)
                .then_with(|| a.path.cmp(&b.path))
                .then_with(|| a.line.cmp(&b.line))
                .then_with(|| a.rule.cmp(&b.rule))
        });
        let allowed = !violations.iter().any(|v| v.severity == Severity::Block);
        Self {
            allowed,
            violations,
        }
    }

    pub fn allow_empty() -> Self {
        Self {
            allowed: true,
            violations: Vec::new(),
        }
    }

    /// Render the human-readable report. Empty when there is nothing to say
    /// (allowed, zero violations) so callers can print it unconditionally.
    pub fn report(&self) -> String {
        if self.violations.is_empty() {
            return String::new();
        }
        let mut out = String::new();
        let path = &self.violations[0].path;
        if self.allowed {
            out.push_str(&format!("⚠ edit allowed with warnings — {path}\n"));
        } else {
            out.push_str(&format!("⛔ edit blocked — {path}\n"));
        }
        for v in &self.violations {
            out.push('\n');
            let location = match v.line {
                Some(line) => format!("{}:{}", v.path, line),
                None => v.path.clone(),
            };
            out.push_str(&format!(
                "{} {}  {}\n",
                severity_tag(v.severity),
                v.rule,
                location
            ));
            out.push_str(&format!("  {}\n", v.message));
            if let Some(snippet) = &v.snippet {
                out.push_str(&format!("  found: {snippet}\n"));
            }
            out.push_str(&format!("  fix:   {}\n", v.fix));
        }
        if !self.allowed {
            out.push_str("\nFix the issues above and resubmit the edit.\n");
            out.push_str("See .claude/skills/ for the pattern documentation.\n");
        }
        out
    }
}

fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Block => "BLOCK",
        Severity::Warn => "WARN ",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
