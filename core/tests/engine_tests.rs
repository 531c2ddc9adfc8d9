use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use objcore::{ConfigError, Engine, EngineConfig, KeyOrder, ObjCoreError, RuntimeError, Value};

#[test]
fn default_config_values() {
    let config = EngineConfig::default();
    assert_eq!(config.max_call_depth, 512);
    assert_eq!(config.gc_threshold, 1024);
    assert_eq!(config.key_order, KeyOrder::Insertion);
}

#[test]
fn config_parses_partial_json() {
    let config = EngineConfig::from_json_str(r#"{ "key_order": "integer_first" }"#)
        .expect("partial config should parse");
    assert_eq!(config.key_order, KeyOrder::IntegerFirst);
    assert_eq!(config.max_call_depth, 512);
}

#[test]
fn config_rejects_unknown_fields() {
    let err = EngineConfig::from_json_str(r#"{ "max_depth": 3 }"#)
        .expect_err("unknown keys are rejected");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn config_from_missing_file_reports_path() {
    let err = EngineConfig::from_path("/definitely/not/here/objcore.json")
        .expect_err("missing file");
    match err {
        ConfigError::Io { path, .. } => assert!(path.ends_with("objcore.json")),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn config_from_file() {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time should be valid")
        .as_nanos();
    let path = std::env::temp_dir().join(format!("objcore-config-{unique}.json"));
    fs::write(&path, r#"{ "max_call_depth": 8, "gc_threshold": 16 }"#)
        .expect("temporary config should be written");

    let config = EngineConfig::from_path(&path).expect("config file should load");
    let _ = fs::remove_file(&path);
    assert_eq!(config.max_call_depth, 8);
    assert_eq!(config.gc_threshold, 16);
}

#[test]
fn engine_builder_configures_contexts() {
    let engine = Engine::new()
        .with_max_call_depth(4)
        .with_gc_threshold(32)
        .with_key_order(KeyOrder::IntegerFirst);
    let ctx = engine.new_context();
    assert_eq!(ctx.config().max_call_depth, 4);
    assert_eq!(ctx.config().gc_threshold, 32);
    assert_eq!(ctx.config().key_order, KeyOrder::IntegerFirst);
}

#[test]
fn unbounded_recursion_is_range_error() {
    let mut ctx = Engine::new().with_max_call_depth(16).new_context();
    let recurse = ctx.create_native_function("recurse", 0, |ctx, args| {
        let this = args.this().clone();
        ctx.call(&this, this.clone(), &[])
    });

    let err = ctx
        .call(&Value::Object(recurse), Value::Object(recurse), &[])
        .expect_err("recursion must be cut off");
    assert!(matches!(err, RuntimeError::RangeError { .. }), "got {err:?}");
    assert_eq!(ctx.call_depth(), 0);
}

#[test]
fn self_referential_to_string_is_bounded() {
    let mut ctx = Engine::new().with_max_call_depth(32).new_context();
    let obj = ctx.new_object();
    let to_string = ctx.create_native_function("toString", 0, |ctx, args| {
        let this = args.this().clone();
        let key = ctx.to_property_key(&this)?;
        Ok(Value::String(key.to_string()))
    });
    ctx.create_data_property(obj, "toString".into(), Value::Object(to_string))
        .expect("define");

    let err = ctx
        .to_property_key(&Value::Object(obj))
        .expect_err("re-entrant toString must hit the depth limit");
    assert!(matches!(err, RuntimeError::RangeError { .. }));
}

#[test]
fn errors_convert_into_unified_error() {
    let runtime: ObjCoreError = RuntimeError::type_error("boom").into();
    assert_eq!(runtime.to_string(), "type error: boom");

    let config: ObjCoreError = EngineConfig::from_json_str("[")
        .expect_err("invalid json")
        .into();
    assert!(matches!(config, ObjCoreError::Config(ConfigError::Parse(_))));
}
