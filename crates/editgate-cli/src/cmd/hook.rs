use crate::output::emit_decision;
use anyhow::Context;
use editgate_core::decision::Decision;
use editgate_core::engine::Gate;
use editgate_core::request::HookPayload;
use std::io::Read;

pub fn run(gate: &Gate, json: bool) -> anyhow::Result<bool> {
    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("failed to read hook payload from stdin")?;
    let payload = HookPayload::parse(&raw).context("hook payload is not valid JSON")?;

    match payload.into_request() {
        Some(request) => emit_decision(&gate.evaluate(&request), json),
        None => {
            // No target path or no proposed content — a delete, or a tool
            // shape the gate doesn't know. Not ours to gate.
            tracing::debug!("payload carries no editable content; allowing");
            emit_decision(&Decision::allow_empty(), json)
        }
    }
}
