use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn editgate() -> Command {
    let mut cmd = Command::cargo_bin("editgate").unwrap();
    cmd.env_remove("EDITGATE_CONFIG");
    cmd
}

fn hook_payload(tool: &str, path: &str, content: &str) -> String {
    serde_json::json!({
        "tool_name": tool,
        "tool_input": { "file_path": path, "content": content }
    })
    .to_string()
}

// ---------------------------------------------------------------------------
// editgate hook — exit codes
// ---------------------------------------------------------------------------

#[test]
fn hook_allows_clean_component_silently() {
    editgate()
        .arg("hook")
        .write_stdin(hook_payload(
            "Write",
            "app/components/card.tsx",
            "<Card className=\"bg-primary\"><Button>Go</Button></Card>",
        ))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn hook_blocks_direct_query_in_server_action() {
    editgate()
        .arg("hook")
        .write_stdin(hook_payload(
            "Write",
            "app/admin/actions.ts",
            "const { data } = await supabase.from(\"users\").select(\"*\")\nrevalidatePath('/admin')",
        ))
        .assert()
        .code(2)
        .stdout(predicate::str::contains("action-no-direct-db"))
        .stdout(predicate::str::contains("repositories"));
}

#[test]
fn hook_blocks_generated_types_file_on_path_alone() {
    editgate()
        .arg("hook")
        .write_stdin(hook_payload(
            "Write",
            "src/lib/database.types.ts",
            "export type Json = string;",
        ))
        .assert()
        .code(2)
        .stdout(predicate::str::contains("auto-generated file"))
        .stdout(predicate::str::contains("npm run db:types"));
}

#[test]
fn hook_blocks_env_file_despite_non_code_extension() {
    editgate()
        .arg("hook")
        .write_stdin(hook_payload("Write", ".env.local", "API_KEY=abc"))
        .assert()
        .code(2)
        .stdout(predicate::str::contains("secret file"));
}

#[test]
fn hook_warn_only_exits_zero_with_report() {
    editgate()
        .arg("hook")
        .write_stdin(hook_payload(
            "Write",
            "app/lib/util.ts",
            "console.log('debug');",
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("WARN"))
        .stdout(predicate::str::contains("no-console-log"));
}

#[test]
fn hook_reports_all_violations_in_one_pass() {
    let content = "<button onClick={go}>Go</button>\n<input value={v} />\n<div className=\"bg-red-500\" />";
    editgate()
        .arg("hook")
        .write_stdin(hook_payload("Write", "app/components/form.tsx", content))
        .assert()
        .code(2)
        .stdout(predicate::str::contains("component-no-raw-button"))
        .stdout(predicate::str::contains("component-no-raw-input"))
        .stdout(predicate::str::contains("component-semantic-colors"));
}

#[test]
fn hook_multi_edit_fragments_are_all_scanned() {
    let payload = serde_json::json!({
        "tool_name": "MultiEdit",
        "tool_input": {
            "file_path": "app/components/form.tsx",
            "edits": [
                { "old_string": "a", "new_string": "<button onClick={go}>" },
                { "old_string": "b", "new_string": "<input value={v} />" }
            ]
        }
    })
    .to_string();
    editgate()
        .arg("hook")
        .write_stdin(payload)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("component-no-raw-button"))
        .stdout(predicate::str::contains("component-no-raw-input"));
}

#[test]
fn hook_allows_payload_without_content() {
    // A delete (or an unknown tool shape) carries nothing to scan.
    editgate()
        .arg("hook")
        .write_stdin(r#"{"tool_name":"Edit","tool_input":{"file_path":"app/a.ts"}}"#)
        .assert()
        .success();
}

#[test]
fn hook_invalid_json_is_a_gate_error_not_a_block() {
    editgate()
        .arg("hook")
        .write_stdin("not json at all")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("hook payload"));
}

#[test]
fn hook_json_flag_emits_structured_decision() {
    editgate()
        .args(["hook", "--json"])
        .write_stdin(hook_payload(
            "Write",
            "app/admin/actions.ts",
            "supabase.from('users')",
        ))
        .assert()
        .code(2)
        .stdout(predicate::str::contains("\"allowed\": false"))
        .stdout(predicate::str::contains("\"rule\": \"action-no-direct-db\""));
}

// ---------------------------------------------------------------------------
// editgate check
// ---------------------------------------------------------------------------

#[test]
fn check_reads_content_from_stdin() {
    editgate()
        .args(["check", "app/components/save.tsx"])
        .write_stdin("<button onClick={save}>Save</button>")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("component-no-raw-button"))
        .stdout(predicate::str::contains("<button onClick={save}>"));
}

#[test]
fn check_reads_content_from_file() {
    let dir = TempDir::new().unwrap();
    let content_file = dir.path().join("proposed.ts");
    std::fs::write(&content_file, "await supabase.from('users').select()").unwrap();

    editgate()
        .args(["check", "app/admin/actions.ts", "--content-file"])
        .arg(&content_file)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("action-no-direct-db"));
}

#[test]
fn check_allows_unmatched_path() {
    editgate()
        .args(["check", "docs/README.md"])
        .write_stdin("<button bg-blue-500 supabase.from(")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// ---------------------------------------------------------------------------
// editgate rules
// ---------------------------------------------------------------------------

#[test]
fn rules_lists_table_and_protected_paths() {
    editgate()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("action-no-direct-db"))
        .stdout(predicate::str::contains("component-no-raw-button"))
        .stdout(predicate::str::contains("**/database.types.ts"))
        .stdout(predicate::str::contains("Protected paths:"));
}

#[test]
fn rules_json_is_structured() {
    editgate()
        .args(["rules", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rules\""))
        .stdout(predicate::str::contains("\"protected\""));
}

// ---------------------------------------------------------------------------
// --config override
// ---------------------------------------------------------------------------

fn write_config(dir: &TempDir, yaml: &str) -> std::path::PathBuf {
    let path = dir.path().join("gate.yaml");
    std::fs::write(&path, yaml).unwrap();
    path
}

#[test]
fn config_override_swaps_the_rule_table() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        "\
rules:
  - id: no-eval
    paths: ['**/*.ts']
    check:
      kind: forbid
      pattern: '\\beval\\s*\\('
    message: eval() is banned
    fix: compute the value without eval
protected: []
",
    );

    editgate()
        .args(["--config"])
        .arg(&config)
        .args(["check", "app/lib/run.ts"])
        .write_stdin("eval('2 + 2')")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("no-eval"));

    // The embedded table is fully replaced: default rules no longer fire.
    editgate()
        .args(["--config"])
        .arg(&config)
        .args(["check", "app/admin/actions.ts"])
        .write_stdin("supabase.from('users')")
        .assert()
        .success();
}

#[test]
fn config_with_invalid_regex_refuses_to_start() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        "\
rules:
  - id: broken
    paths: ['**/*.ts']
    check:
      kind: forbid
      pattern: '(unclosed'
    message: m
    fix: f
",
    );

    editgate()
        .args(["--config"])
        .arg(&config)
        .arg("rules")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid content pattern"));
}

#[test]
fn missing_config_file_is_a_gate_error() {
    editgate()
        .args(["--config", "/nonexistent/gate.yaml", "rules"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("failed to load gate config"));
}

#[test]
fn oversized_content_fails_closed() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "max_content_bytes: 16\n");

    editgate()
        .args(["--config"])
        .arg(&config)
        .args(["check", "docs/README.md"])
        .write_stdin("x".repeat(64))
        .assert()
        .code(2)
        .stdout(predicate::str::contains("content-size-limit"))
        .stdout(predicate::str::contains("not scanned"));
}
