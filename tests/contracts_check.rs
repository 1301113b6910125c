use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

mod common;
use common::TestEnv;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn contracts_check() {
    let env = TestEnv::new();

    let budget = env.run_json(&["budget"]);
    assert_eq!(budget["ok"], true);
    validate("budget.schema.json", &budget["data"]);

    let phase = env.run_json(&["phase", "Phase 1"]);
    assert_eq!(phase["ok"], true);
    validate("phase.schema.json", &phase["data"]);

    let report = env.run_json(&["validate"]);
    assert_eq!(report["ok"], true);
    validate("validate.schema.json", &report["data"]);
}
