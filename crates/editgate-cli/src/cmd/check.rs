use crate::output::emit_decision;
use anyhow::Context;
use editgate_core::engine::Gate;
use editgate_core::request::{EditRequest, OperationKind};
use std::io::Read;
use std::path::Path;

pub fn run(
    gate: &Gate,
    path: &str,
    content_file: Option<&Path>,
    json: bool,
) -> anyhow::Result<bool> {
    let content = match content_file {
        Some(file) => std::fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read proposed content from stdin")?;
            buf
        }
    };
    let request = EditRequest {
        path: path.to_string(),
        content,
        kind: OperationKind::Modify,
    };
    emit_decision(&gate.evaluate(&request), json)
}
