use editgate_core::decision::Decision;
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Emit a decision on stdout and translate it into the process outcome.
/// A clean allow prints nothing; hooks should be silent when they have
/// nothing to say.
pub fn emit_decision(decision: &Decision, json: bool) -> anyhow::Result<bool> {
    if json {
        print_json(decision)?;
    } else {
        let report = decision.report();
        if !report.is_empty() {
            print!("{report}");
        }
    }
    Ok(decision.allowed)
}
