use objcore::runtime::value::number_to_js_string;
use objcore::runtime::value::object::slots::PRIMITIVE_VALUE;
use objcore::{
    Context, JsSymbol, PreferredType, PropertyDescriptorPatch, PropertyKey, RuntimeError, Value,
};

#[test]
fn number_formatting_follows_script_rules() {
    let cases = [
        (0.0, "0"),
        (-0.0, "0"),
        (1.0, "1"),
        (-42.0, "-42"),
        (0.1, "0.1"),
        (123.456, "123.456"),
        (100.0, "100"),
        (1e21, "1e+21"),
        (1.5e21, "1.5e+21"),
        (123e18, "123000000000000000000"),
        (0.000001, "0.000001"),
        (1e-7, "1e-7"),
        (2.5e-8, "2.5e-8"),
        (f64::NAN, "NaN"),
        (f64::INFINITY, "Infinity"),
        (f64::NEG_INFINITY, "-Infinity"),
    ];
    for (input, expected) in cases {
        assert_eq!(number_to_js_string(input), expected, "formatting {input:?}");
    }
}

#[test]
fn to_object_rejects_nullish() {
    let mut ctx = Context::new();
    for value in [Value::Undefined, Value::Null] {
        let err = ctx.to_object(&value).expect_err("nullish cannot be boxed");
        assert!(err.is_type_error());
    }
}

#[test]
fn to_object_passes_objects_through() {
    let mut ctx = Context::new();
    let obj = ctx.new_object();
    let same = ctx.to_object(&Value::Object(obj)).expect("object");
    assert_eq!(same, obj);
}

#[test]
fn to_object_boxes_each_primitive_kind() {
    let mut ctx = Context::new();
    let symbol = JsSymbol::new(Some("tag"));
    let cases = [
        (Value::Boolean(false), "Boolean", ctx.intrinsics().boolean_prototype),
        (Value::Number(1.5), "Number", ctx.intrinsics().number_prototype),
        (Value::string("hi"), "String", ctx.intrinsics().string_prototype),
        (Value::Symbol(symbol), "Symbol", ctx.intrinsics().symbol_prototype),
    ];
    for (value, class_tag, prototype) in cases {
        let boxed = ctx.to_object(&value).expect("primitives box");
        let node = ctx.object(boxed).expect("live");
        assert_eq!(node.class_tag, class_tag);
        assert_eq!(node.slots.get(PRIMITIVE_VALUE), Some(&value));
        assert_eq!(ctx.get_prototype_of(boxed).expect("live"), Some(prototype));
    }
}

#[test]
fn boxing_allocates_a_fresh_wrapper_each_time() {
    let mut ctx = Context::new();
    let first = ctx.to_object(&Value::Number(1.0)).expect("box");
    let second = ctx.to_object(&Value::Number(1.0)).expect("box");
    assert_ne!(first, second);
}

#[test]
fn string_wrapper_exposes_code_units_and_length() {
    let mut ctx = Context::new();
    let boxed = ctx.to_object(&Value::string("ab")).expect("box");

    let first = ctx
        .get_own_property(boxed, &PropertyKey::from("0"))
        .expect("live")
        .expect("index 0 should exist");
    assert_eq!(first.value(), Some(&Value::string("a")));
    assert!(first.enumerable);
    assert_eq!(first.writable(), Some(false));

    let length = ctx
        .get_own_property(boxed, &PropertyKey::from("length"))
        .expect("live")
        .expect("length should exist");
    assert_eq!(length.value(), Some(&Value::Number(2.0)));
    assert!(!length.enumerable);
}

#[test]
fn to_property_key_converts_primitives() {
    let mut ctx = Context::new();
    let cases = [
        (Value::Undefined, "undefined"),
        (Value::Null, "null"),
        (Value::Boolean(true), "true"),
        (Value::Number(1.0), "1"),
        (Value::Number(-0.0), "0"),
        (Value::Number(0.5), "0.5"),
        (Value::string("name"), "name"),
    ];
    for (value, expected) in cases {
        let key = ctx.to_property_key(&value).expect("primitive keys convert");
        assert_eq!(key, PropertyKey::from(expected), "converting {value}");
    }
}

#[test]
fn to_property_key_keeps_symbols() {
    let mut ctx = Context::new();
    let symbol = JsSymbol::new(Some("id"));
    let key = ctx
        .to_property_key(&Value::Symbol(symbol.clone()))
        .expect("symbol key");
    assert_eq!(key, PropertyKey::Symbol(symbol));
}

#[test]
fn to_property_key_runs_object_to_string() {
    let mut ctx = Context::new();
    let obj = ctx.new_object();
    let to_string = ctx.create_native_function("toString", 0, |_, _| Ok(Value::string("custom")));
    ctx.create_data_property(obj, "toString".into(), Value::Object(to_string))
        .expect("define");

    let key = ctx.to_property_key(&Value::Object(obj)).expect("key");
    assert_eq!(key, PropertyKey::from("custom"));
}

#[test]
fn plain_object_key_uses_inherited_to_string() {
    let mut ctx = Context::new();
    let obj = ctx.new_object();
    let key = ctx.to_property_key(&Value::Object(obj)).expect("key");
    assert_eq!(key, PropertyKey::from("[object Object]"));
}

#[test]
fn to_primitive_hint_order() {
    let mut ctx = Context::new();
    let obj = ctx.new_object();
    let value_of = ctx.create_native_function("valueOf", 0, |_, _| Ok(Value::Number(9.0)));
    ctx.create_data_property(obj, "valueOf".into(), Value::Object(value_of))
        .expect("define");

    let number = ctx
        .to_primitive(&Value::Object(obj), PreferredType::Number)
        .expect("number hint");
    let string = ctx
        .to_primitive(&Value::Object(obj), PreferredType::String)
        .expect("string hint");
    assert_eq!(number, Value::Number(9.0));
    assert_eq!(string, Value::string("[object Object]"));
}

#[test]
fn to_primitive_without_usable_methods_is_type_error() {
    let mut ctx = Context::new();
    let obj = ctx.object_create(None);
    let err = ctx
        .to_primitive(&Value::Object(obj), PreferredType::Default)
        .expect_err("no toString or valueOf");
    assert!(err.is_type_error());
}

#[test]
fn symbol_to_string_is_type_error() {
    let mut ctx = Context::new();
    let err = ctx
        .to_string(&Value::Symbol(JsSymbol::new(None)))
        .expect_err("symbols do not stringify implicitly");
    assert!(err.is_type_error());
}

#[test]
fn as_callable_accepts_functions_only() {
    let mut ctx = Context::new();
    let function = ctx.create_native_function("f", 0, |_, _| Ok(Value::Undefined));
    let callable = ctx
        .as_callable(&Value::Object(function))
        .expect("function objects are callable");
    assert_eq!(callable.object(), function);

    let plain = ctx.new_object();
    for value in [
        Value::Undefined,
        Value::Number(1.0),
        Value::string("f"),
        Value::Object(plain),
    ] {
        let err = ctx.as_callable(&value).expect_err("not callable");
        assert!(
            matches!(err, RuntimeError::TypeError { ref message } if message.contains("not a function")),
            "unexpected error {err:?}"
        );
    }
}

#[test]
fn callable_call_passes_receiver_and_arguments() {
    let mut ctx = Context::new();
    let function = ctx.create_native_function("pick", 2, |_, args| {
        assert_eq!(args.this(), &Value::string("receiver"));
        Ok(args.arg(1))
    });
    let callable = ctx.as_callable(&Value::Object(function)).expect("callable");
    let result = callable
        .call(
            &mut ctx,
            Value::string("receiver"),
            &[Value::Number(1.0), Value::Number(2.0)],
        )
        .expect("call");
    assert_eq!(result, Value::Number(2.0));
}

#[test]
fn thrown_values_propagate_unchanged() {
    let mut ctx = Context::new();
    let thrower = ctx.create_native_function("boom", 0, |_, _| {
        Err(RuntimeError::Thrown(Value::Number(13.0)))
    });
    let err = ctx
        .call(&Value::Object(thrower), Value::Undefined, &[])
        .expect_err("throws");
    assert!(matches!(err, RuntimeError::Thrown(Value::Number(n)) if n == 13.0));
}

#[test]
fn boxing_a_long_string_keeps_the_property_table_empty() {
    let mut ctx = Context::new();
    let text = "x".repeat(200_000);
    let boxed = ctx.to_object(&Value::string(text.as_str())).expect("box");
    assert!(ctx.object(boxed).expect("live").properties.is_empty());

    let length = ctx
        .get_own_property(boxed, &PropertyKey::from("length"))
        .expect("live")
        .expect("length should exist");
    assert_eq!(length.value(), Some(&Value::Number(200_000.0)));
    assert!(ctx.has_own_property(boxed, &PropertyKey::from("199999")).expect("live"));
    assert!(!ctx.has_own_property(boxed, &PropertyKey::from("200000")).expect("live"));
}

#[test]
fn string_wrapper_keys_come_before_added_properties() {
    let mut ctx = Context::new();
    let boxed = ctx.to_object(&Value::string("ab")).expect("box");
    ctx.create_data_property(boxed, "extra".into(), Value::Null)
        .expect("define");

    let keys: Vec<String> = ctx
        .own_property_keys(boxed)
        .expect("live")
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(keys, ["0", "1", "length", "extra"]);

    let enumerable = ctx.enumerable_own_keys(boxed).expect("live");
    assert_eq!(
        enumerable,
        vec![PropertyKey::from("0"), PropertyKey::from("1"), PropertyKey::from("extra")]
    );
}

#[test]
fn string_wrapper_index_keys_are_read_only() {
    let mut ctx = Context::new();
    let boxed = ctx.to_object(&Value::string("ab")).expect("box");

    let changed = ctx
        .define_own_property(
            boxed,
            "0".into(),
            PropertyDescriptorPatch::value(Value::string("z")),
        )
        .expect("define");
    let unchanged = ctx
        .define_own_property(
            boxed,
            "0".into(),
            PropertyDescriptorPatch::value(Value::string("a")),
        )
        .expect("define");
    assert!(!changed);
    assert!(unchanged);
    assert!(ctx.object(boxed).expect("live").properties.is_empty());

    assert!(!ctx
        .set(boxed, "1".into(), Value::string("q"), &Value::Object(boxed))
        .expect("set"));
    assert!(!ctx.delete(boxed, &PropertyKey::from("length")).expect("delete"));
}

#[test]
fn string_prototype_has_zero_length() {
    let mut ctx = Context::new();
    let proto = ctx.intrinsics().string_prototype;
    let length = ctx
        .get(proto, &PropertyKey::from("length"), &Value::Object(proto))
        .expect("get");
    assert_eq!(length, Value::Number(0.0));
    assert!(!ctx.has_own_property(proto, &PropertyKey::from("0")).expect("live"));
}
