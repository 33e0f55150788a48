use crate::output::print_json;
use editgate_core::engine::Gate;
use editgate_core::protected::ProtectedDef;
use editgate_core::rule::{ContentCheck, RuleDef};
use serde::Serialize;

#[derive(Serialize)]
struct Listing<'a> {
    rules: Vec<&'a RuleDef>,
    protected: Vec<&'a ProtectedDef>,
}

pub fn run(gate: &Gate, json: bool) -> anyhow::Result<bool> {
    let listing = Listing {
        rules: gate.rules().collect(),
        protected: gate.protected().collect(),
    };

    if json {
        print_json(&listing)?;
    } else {
        println!("Rules:");
        for rule in &listing.rules {
            println!(
                "  {:<30} {:<6} {:<13} {}",
                rule.id,
                rule.severity.to_string(),
                check_kind(&rule.check),
                rule.paths.join(", ")
            );
        }
        println!();
        println!("Protected paths:");
        for entry in &listing.protected {
            println!("  {:<30} {}", entry.pattern, entry.category);
        }
    }
    Ok(true)
}

fn check_kind(check: &ContentCheck) -> &'static str {
    match check {
        ContentCheck::Forbid { .. } => "forbid",
        ContentCheck::RequireWith { .. } => "require_with",
    }
}
