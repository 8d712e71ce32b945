//! Configuration defaults and JSON loading.

use mipsim_core::common::SimError;
use mipsim_core::config::{Config, UnimplementedPolicy};
use rstest::rstest;

#[test]
fn defaults_match_process_layout() {
    let config = Config::default();
    assert_eq!(config.memory.stack_top, 0x7FFF_EFFC);
    assert_eq!(config.memory.stack_size, 0x10_0000);
    assert!(!config.memory.strict);
    assert!(!config.general.trace_instructions);
    assert!(!config.general.print_registers);
    assert_eq!(config.execution.unimplemented, UnimplementedPolicy::Fault);
    assert!(!config.execution.trap_on_overflow);
    assert!(!config.execution.zero_extend_logical_imm);
}

#[test]
fn empty_document_is_all_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.memory.stack_top, 0x7FFF_EFFC);
    assert_eq!(config.execution.unimplemented, UnimplementedPolicy::Fault);
}

#[test]
fn partial_sections_keep_remaining_defaults() {
    let config = Config::from_json(r#"{ "memory": { "strict": true } }"#).unwrap();
    assert!(config.memory.strict);
    assert_eq!(config.memory.stack_top, 0x7FFF_EFFC);
    assert_eq!(config.memory.stack_size, 0x10_0000);
}

#[test]
fn execution_options_parse() {
    let json = r#"{
        "execution": { "trap_on_overflow": true, "zero_extend_logical_imm": true }
    }"#;
    let config = Config::from_json(json).unwrap();
    assert!(config.execution.trap_on_overflow);
    assert!(config.execution.zero_extend_logical_imm);
}

#[rstest]
#[case("Fault", UnimplementedPolicy::Fault)]
#[case("SkipWithWarning", UnimplementedPolicy::SkipWithWarning)]
#[case("Skip", UnimplementedPolicy::SkipWithWarning)]
fn unimplemented_policy_names(#[case] name: &str, #[case] expected: UnimplementedPolicy) {
    let json = format!(r#"{{ "execution": {{ "unimplemented": "{name}" }} }}"#);
    assert_eq!(Config::from_json(&json).unwrap().execution.unimplemented, expected);
}

#[test]
fn unknown_policy_is_rejected() {
    let err = Config::from_json(r#"{ "execution": { "unimplemented": "Ignore" } }"#).unwrap_err();
    assert!(matches!(err, SimError::Config(_)));
}

#[test]
fn wrong_field_type_is_rejected() {
    let err = Config::from_json(r#"{ "memory": { "stack_top": "high" } }"#).unwrap_err();
    assert!(err.to_string().starts_with("invalid configuration: "));
}

#[test]
fn malformed_document_is_rejected() {
    assert!(matches!(Config::from_json("{ memory"), Err(SimError::Config(_))));
}
