//! The embedded rule and protected-path tables.
//!
//! These are configuration, not behavior: maintainers edit this file (or
//! supply a YAML override) to tune the gate for their codebase. The engine
//! treats the tables as opaque data.

use crate::protected::{ProtectedCategory, ProtectedDef};
use crate::rule::{ContentCheck, RuleDef, Severity};

fn globs(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| p.to_string()).collect()
}

fn forbid(pattern: &str) -> ContentCheck {
    ContentCheck::Forbid {
        pattern: pattern.to_string(),
    }
}

const ACTION_PATHS: &[&str] = &["**/actions.ts", "**/actions/**/*.ts"];
const COMPONENT_PATHS: &[&str] = &["**/components/**/*.tsx"];

// ---------------------------------------------------------------------------
// Default rules
// ---------------------------------------------------------------------------

pub fn default_rules() -> Vec<RuleDef> {
    vec![
        // Server actions go through the repository layer, never straight to
        // the Supabase client.
        RuleDef {
            id: "action-no-direct-db".to_string(),
            paths: globs(ACTION_PATHS),
            exclude: globs(&["**/repositories/**", "**/*.repository.ts"]),
            check: forbid(r"supabase\s*\.\s*from\s*\("),
            severity: Severity::Block,
            message: "Direct Supabase query in a server action.".to_string(),
            fix: "Import a repository function from @/app/_shared/repositories/ instead."
                .to_string(),
        },
        // Mutations must invalidate the Next.js cache.
        RuleDef {
            id: "action-mutation-revalidates".to_string(),
            paths: globs(ACTION_PATHS),
            exclude: vec![],
            check: ContentCheck::RequireWith {
                when: r"(?i)\b(insert|update|delete)\b".to_string(),
                pattern: r"revalidatePath".to_string(),
            },
            severity: Severity::Block,
            message: "Data mutation without a revalidatePath() call.".to_string(),
            fix: "Call revalidatePath('/affected/route') after the mutation so cached pages are invalidated."
                .to_string(),
        },
        // Repositories select whole rows; column picking drifts from the
        // generated row types.
        RuleDef {
            id: "repository-select-star".to_string(),
            paths: globs(&["**/*.repository.ts"]),
            exclude: vec![],
            check: forbid(r#"\.select\s*\(\s*["'][^*]"#),
            severity: Severity::Block,
            message: "Column picking in a repository query.".to_string(),
            fix: "Use .select('*') so row types stay aligned with database.types.ts.".to_string(),
        },
        // Components use the theme's semantic tokens, not raw palette stops.
        RuleDef {
            id: "component-semantic-colors".to_string(),
            paths: globs(COMPONENT_PATHS),
            exclude: vec![],
            check: forbid(
                r"(bg|text|border)-(blue|red|green|yellow|purple|pink|orange|gray|slate|zinc)-\d{2,3}",
            ),
            severity: Severity::Block,
            message: "Hardcoded Tailwind palette color.".to_string(),
            fix: "Use semantic classes (bg-primary, text-muted-foreground, border-border) so theming stays in CSS variables."
                .to_string(),
        },
        // Raw interactive elements bypass the shadcn/ui wrappers. One entry
        // per element so each fix points at its replacement import.
        RuleDef {
            id: "component-no-raw-button".to_string(),
            paths: globs(COMPONENT_PATHS),
            exclude: vec![],
            check: forbid(r"(?i)<button\s"),
            severity: Severity::Block,
            message: "Raw <button> element in a component.".to_string(),
            fix: "Use <Button> from @/components/ui/button.".to_string(),
        },
        RuleDef {
            id: "component-no-raw-input".to_string(),
            paths: globs(COMPONENT_PATHS),
            exclude: vec![],
            check: forbid(r"(?i)<input\s"),
            severity: Severity::Block,
            message: "Raw <input> element in a component.".to_string(),
            fix: "Use <Input> from @/components/ui/input.".to_string(),
        },
        RuleDef {
            id: "component-no-raw-textarea".to_string(),
            paths: globs(COMPONENT_PATHS),
            exclude: vec![],
            check: forbid(r"(?i)<textarea\s"),
            severity: Severity::Block,
            message: "Raw <textarea> element in a component.".to_string(),
            fix: "Use <Textarea> from @/components/ui/textarea.".to_string(),
        },
        RuleDef {
            id: "component-no-raw-select".to_string(),
            paths: globs(COMPONENT_PATHS),
            exclude: vec![],
            check: forbid(r"(?i)<select\s"),
            severity: Severity::Block,
            message: "Raw <select> element in a component.".to_string(),
            fix: "Use <Select> from @/components/ui/select.".to_string(),
        },
        // Stray debug logging annotates the edit but doesn't block it.
        RuleDef {
            id: "no-console-log".to_string(),
            paths: globs(&["**/*.ts", "**/*.tsx"]),
            exclude: globs(&["**/*.test.ts", "**/*.test.tsx"]),
            check: forbid(r"console\.log\s*\("),
            severity: Severity::Warn,
            message: "console.log left in committed code.".to_string(),
            fix: "Remove it, or route through the project logger.".to_string(),
        },
    ]
}

// ---------------------------------------------------------------------------
// Default protected paths
// ---------------------------------------------------------------------------

pub fn default_protected() -> Vec<ProtectedDef> {
    vec![
        ProtectedDef {
            pattern: "**/database.types.ts".to_string(),
            category: ProtectedCategory::Generated,
            message: "database.types.ts is generated from the schema. Run 'npm run db:types' to regenerate it."
                .to_string(),
        },
        ProtectedDef {
            pattern: "**/.env*".to_string(),
            category: ProtectedCategory::Secret,
            message: ".env files hold secrets and are never edited by the agent.".to_string(),
        },
        ProtectedDef {
            pattern: "**/package-lock.json".to_string(),
            category: ProtectedCategory::Lockfile,
            message: "package-lock.json is managed by npm. Run 'npm install' instead.".to_string(),
        },
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
