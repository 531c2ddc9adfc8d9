use objcore::runtime::value::object::PrototypeChain;
use objcore::{Context, PropertyKey, Value};

#[test]
fn new_object_inherits_from_object_prototype() {
    let mut ctx = Context::new();
    let obj = ctx.new_object();
    let proto = ctx.intrinsics().object_prototype;
    assert_eq!(ctx.get_prototype_of(obj).expect("live"), Some(proto));
    assert_eq!(ctx.get_prototype_of(proto).expect("live"), None);
}

#[test]
fn function_prototype_chains_to_object_prototype() {
    let mut ctx = Context::new();
    let intrinsics = *ctx.intrinsics();
    let function = ctx.create_native_function("f", 0, |_, _| Ok(Value::Undefined));
    assert_eq!(
        ctx.get_prototype_of(function).expect("live"),
        Some(intrinsics.function_prototype)
    );
    assert_eq!(
        ctx.get_prototype_of(intrinsics.function_prototype).expect("live"),
        Some(intrinsics.object_prototype)
    );
    assert!(ctx.is_callable(&Value::Object(intrinsics.function_prototype)));
    let result = ctx
        .call(&Value::Object(intrinsics.function_prototype), Value::Undefined, &[Value::Null])
        .expect("Function.prototype accepts any arguments");
    assert_eq!(result, Value::Undefined);
}

#[test]
fn set_prototype_of_refuses_cycles() {
    let mut ctx = Context::new();
    let a = ctx.new_object();
    let b = ctx.object_create(Some(a));
    let c = ctx.object_create(Some(b));

    assert!(!ctx.set_prototype_of(a, Some(c)).expect("live"));
    assert!(!ctx.set_prototype_of(a, Some(a)).expect("live"));
    assert_eq!(
        ctx.get_prototype_of(a).expect("live"),
        Some(ctx.intrinsics().object_prototype)
    );
}

#[test]
fn set_prototype_of_on_non_extensible() {
    let mut ctx = Context::new();
    let obj = ctx.new_object();
    let other = ctx.new_object();
    let current = ctx.get_prototype_of(obj).expect("live");
    ctx.prevent_extensions(obj).expect("live");

    assert!(ctx.set_prototype_of(obj, current).expect("same prototype is a no-op"));
    assert!(!ctx.set_prototype_of(obj, Some(other)).expect("live"));
    assert!(!ctx.set_prototype_of(obj, None).expect("live"));
}

#[test]
fn set_prototype_of_relinks() {
    let mut ctx = Context::new();
    let obj = ctx.new_object();
    let replacement = ctx.object_create(None);
    ctx.create_data_property(replacement, "marker".into(), Value::Boolean(true))
        .expect("define");

    assert!(ctx.set_prototype_of(obj, Some(replacement)).expect("live"));
    assert!(ctx.has_property(obj, &PropertyKey::from("marker")).expect("live"));
    assert!(!ctx.has_property(obj, &PropertyKey::from("toString")).expect("live"));
}

#[test]
fn lookups_terminate_on_cyclic_chain() {
    let mut ctx = Context::new();
    let a = ctx.object_create(None);
    let b = ctx.object_create(None);
    ctx.set_prototype_unchecked(a, Some(b)).expect("link");
    ctx.set_prototype_unchecked(b, Some(a)).expect("link");
    ctx.create_data_property(b, "found".into(), Value::Number(1.0))
        .expect("define");

    let missing = PropertyKey::from("missing");
    assert!(!ctx.has_property(a, &missing).expect("terminates"));
    assert_eq!(
        ctx.get(a, &missing, &Value::Object(a)).expect("terminates"),
        Value::Undefined
    );
    assert_eq!(
        ctx.get(a, &PropertyKey::from("found"), &Value::Object(a))
            .expect("terminates"),
        Value::Number(1.0)
    );
    assert!(ctx
        .set(a, PropertyKey::from("fresh"), Value::Null, &Value::Object(a))
        .expect("terminates"));
    assert!(ctx.has_own_property(a, &PropertyKey::from("fresh")).expect("live"));
}

#[test]
fn is_prototype_of_walks_strict_ancestors() {
    let mut ctx = Context::new();
    let a = ctx.new_object();
    let b = ctx.object_create(Some(a));
    let c = ctx.object_create(Some(b));
    let proto = ctx.intrinsics().object_prototype;

    assert!(ctx.is_prototype_of(a, c).expect("live"));
    assert!(ctx.is_prototype_of(b, c).expect("live"));
    assert!(ctx.is_prototype_of(proto, c).expect("live"));
    assert!(!ctx.is_prototype_of(c, a).expect("live"));
    assert!(!ctx.is_prototype_of(c, c).expect("live"));
}

#[test]
fn is_prototype_of_on_cycle_terminates() {
    let mut ctx = Context::new();
    let a = ctx.object_create(None);
    let b = ctx.object_create(None);
    let outsider = ctx.object_create(None);
    ctx.set_prototype_unchecked(a, Some(b)).expect("link");
    ctx.set_prototype_unchecked(b, Some(a)).expect("link");

    assert!(ctx.is_prototype_of(b, a).expect("terminates"));
    assert!(ctx.is_prototype_of(a, a).expect("cycle leads back to a"));
    assert!(!ctx.is_prototype_of(outsider, a).expect("terminates"));
}

#[test]
fn deep_chain_resolves_inherited_property() {
    let mut ctx = Context::new();
    let root = ctx.object_create(None);
    ctx.create_data_property(root, "depth".into(), Value::Number(0.0))
        .expect("define");
    let mut leaf = root;
    for _ in 0..40 {
        leaf = ctx.object_create(Some(leaf));
    }

    assert_eq!(PrototypeChain::from_object(ctx.heap(), leaf).count(), 41);
    assert_eq!(
        ctx.get(leaf, &PropertyKey::from("depth"), &Value::Object(leaf))
            .expect("inherited read"),
        Value::Number(0.0)
    );
    assert!(ctx.is_prototype_of(root, leaf).expect("live"));
}

#[test]
fn long_ring_yields_each_node_once() {
    let mut ctx = Context::new();
    let start = ctx.object_create(None);
    let mut last = start;
    for _ in 1..50 {
        last = ctx.object_create(Some(last));
    }
    ctx.set_prototype_unchecked(start, Some(last)).expect("close ring");
    let outsider = ctx.object_create(None);

    assert_eq!(PrototypeChain::from_object(ctx.heap(), start).count(), 50);
    assert_eq!(PrototypeChain::ancestors_of(ctx.heap(), start).count(), 50);
    assert!(!ctx.is_prototype_of(outsider, start).expect("terminates"));
    assert!(ctx.is_prototype_of(start, start).expect("ring leads back"));
    assert!(!ctx.has_property(start, &PropertyKey::from("missing")).expect("terminates"));
}
