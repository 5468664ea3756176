use canopy_tree::{
    Context, KeyToken, NodeDef, TreeError, TreeRegistry, TreeValue, ValueRef, downcast, value,
};

/// Minimal two-slot container used to exercise the registry without pulling
/// in the real frozen containers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Pair {
    left: ValueRef,
    right: ValueRef,
}

impl Pair {
    fn new(left: ValueRef, right: ValueRef) -> Self {
        Self { left, right }
    }
}

fn pair_flatten(v: &dyn TreeValue) -> Result<(Vec<ValueRef>, Context), TreeError> {
    let pair = downcast::<Pair>(v)?;
    Ok((vec![pair.left.clone(), pair.right.clone()], Context::Arity(2)))
}

fn pair_flatten_with_keys(
    v: &dyn TreeValue,
) -> Result<(Vec<(KeyToken, ValueRef)>, Context), TreeError> {
    let (children, context) = pair_flatten(v)?;
    let keyed = children
        .into_iter()
        .enumerate()
        .map(|(index, child)| (KeyToken::Index(index), child))
        .collect();
    Ok((keyed, context))
}

fn pair_unflatten(children: Vec<ValueRef>, context: &Context) -> Result<ValueRef, TreeError> {
    if context.arity() != Some(children.len()) {
        return Err(TreeError::ArityMismatch {
            message: format!("expected 2 children, got {}", children.len()).into(),
            context: None,
        });
    }
    let mut children = children.into_iter();
    let left = children.next().expect("arity checked above");
    let right = children.next().expect("arity checked above");
    Ok(value(Pair::new(left, right)))
}

fn pair_def(serialized_name: &'static str) -> NodeDef {
    NodeDef::of::<Pair>(serialized_name, pair_flatten, pair_flatten_with_keys, pair_unflatten)
}

#[test]
fn register_and_dispatch_roundtrip() {
    let registry = TreeRegistry::new();
    registry.register(pair_def("test.Pair")).unwrap();

    let pair = Pair::new(value(1_i64), value("two"));
    let (children, context) = registry.flatten(&pair).unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(context, Context::Arity(2));

    let rebuilt = registry.unflatten("test.Pair", children, &context).unwrap();
    assert!(rebuilt.dyn_eq(&pair));
}

#[test]
fn flatten_with_keys_matches_flatten_order() {
    let registry = TreeRegistry::new();
    registry.register(pair_def("test.Pair")).unwrap();

    let pair = Pair::new(value(10_i64), value(20_i64));
    let (children, _) = registry.flatten(&pair).unwrap();
    let (keyed, _) = registry.flatten_with_keys(&pair).unwrap();

    assert_eq!(keyed.len(), children.len());
    for (index, ((token, keyed_child), child)) in keyed.iter().zip(&children).enumerate() {
        assert_eq!(*token, KeyToken::Index(index));
        assert_eq!(keyed_child, child);
    }
}

#[test]
fn duplicate_type_registration_is_rejected() {
    let registry = TreeRegistry::new();
    registry.register(pair_def("test.Pair")).unwrap();

    let rejected = registry.register(pair_def("test.PairAlias"));
    assert!(matches!(rejected, Err(TreeError::DuplicateType { .. })));
    assert_eq!(registry.len(), 1);
}

#[test]
fn serialized_name_collision_is_rejected() {
    #[derive(Debug, PartialEq, Eq, Hash)]
    struct Other(ValueRef);

    fn other_flatten(v: &dyn TreeValue) -> Result<(Vec<ValueRef>, Context), TreeError> {
        let other = downcast::<Other>(v)?;
        Ok((vec![other.0.clone()], Context::Arity(1)))
    }
    fn other_flatten_with_keys(
        v: &dyn TreeValue,
    ) -> Result<(Vec<(KeyToken, ValueRef)>, Context), TreeError> {
        let (children, context) = other_flatten(v)?;
        let keyed = children.into_iter().map(|child| (KeyToken::Index(0), child)).collect();
        Ok((keyed, context))
    }
    fn other_unflatten(
        mut children: Vec<ValueRef>,
        _context: &Context,
    ) -> Result<ValueRef, TreeError> {
        Ok(value(Other(children.remove(0))))
    }

    let registry = TreeRegistry::new();
    registry.register(pair_def("test.Shared")).unwrap();

    let rejected = registry.register(NodeDef::of::<Other>(
        "test.Shared",
        other_flatten,
        other_flatten_with_keys,
        other_unflatten,
    ));
    assert!(matches!(rejected, Err(TreeError::DuplicateName { .. })));
    assert!(registry.lookup_of::<Other>().is_none());
}

#[test]
fn flatten_of_unregistered_type_fails() {
    let registry = TreeRegistry::new();
    let result = registry.flatten(&42_i64);
    assert!(matches!(result, Err(TreeError::NotRegistered { .. })));
}

#[test]
fn unflatten_by_unknown_name_fails() {
    let registry = TreeRegistry::new();
    let result = registry.unflatten("test.Missing", Vec::new(), &Context::Arity(0));
    assert!(matches!(result, Err(TreeError::NotRegistered { .. })));
}

#[test]
fn lookup_by_serialized_name_resolves_type() {
    let registry = TreeRegistry::new();
    registry.register(pair_def("test.Pair")).unwrap();

    let def = registry.lookup_serialized("test.Pair").unwrap();
    assert_eq!(def.type_id(), std::any::TypeId::of::<Pair>());
    assert_eq!(registry.serialized_name_of::<Pair>().as_deref(), Some("test.Pair"));
    assert!(registry.is_registered::<Pair>());
}

#[test]
fn node_def_flatten_rejects_foreign_value() {
    let registry = TreeRegistry::new();
    registry.register(pair_def("test.Pair")).unwrap();

    let def = registry.lookup_of::<Pair>().unwrap();
    let result = def.flatten(&"not a pair");
    assert!(matches!(result, Err(TreeError::TypeMismatch { .. })));
}

#[test]
fn value_handles_compare_by_value_and_type() {
    assert!(value(7_i64).dyn_eq(&7_i64));
    assert!(!value(7_i64).dyn_eq(&7_i32));
    assert!(!value(7_i64).dyn_eq(&8_i64));
}

#[test]
fn value_handles_support_operator_equality_and_derives() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(value: &impl Hash) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    // `TreeValue` is in scope in this file; handle equality must not care.
    let a = value(7_i64);
    let b = value(7_i64);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_ne!(a, value(8_i64));

    // Derived PartialEq/Hash over handle fields.
    let pair_a = Pair::new(value(1_i64), value("two"));
    let pair_b = Pair::new(value(1_i64), value("two"));
    assert_eq!(pair_a, pair_b);
    assert_eq!(hash_of(&pair_a), hash_of(&pair_b));
}

#[test]
fn wrapping_a_handle_returns_an_equal_handle() {
    let original = value(7_i64);
    let rewrapped = value(original.clone());

    assert_eq!(original, rewrapped);
    assert!(rewrapped.dyn_eq(&7_i64));
}

#[test]
fn flatten_accepts_a_handle_to_a_registered_container() {
    let registry = TreeRegistry::new();
    registry.register(pair_def("test.Pair")).unwrap();

    let pair = Pair::new(value(1_i64), value(2_i64));
    let (children, context) = registry.flatten(&pair).unwrap();
    let rebuilt = registry.unflatten("test.Pair", children, &context).unwrap();

    // The reconstruction output is a handle; it feeds straight back in.
    let (children, context) = registry.flatten(&rebuilt).unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(context, Context::Arity(2));
}

#[test]
fn key_tokens_render_readable_paths() {
    assert_eq!(KeyToken::Index(3).to_string(), "[3]");
    assert_eq!(KeyToken::Key(value("a")).to_string(), "[\"a\"]");
}
