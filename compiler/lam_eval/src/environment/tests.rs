use super::*;
use pretty_assertions::assert_eq;

fn id(n: u32) -> NodeId {
    NodeId::new(n)
}

#[test]
fn empty_environment_has_nothing() {
    let env = Environment::new();
    assert!(env.is_empty());
    assert_eq!(env.lookup(id(1)), None);
    assert_eq!(env.depth(), 0);
}

#[test]
fn extend_leaves_parent_untouched() {
    let outer = Environment::new().extend(id(1), Value::number(1.0));
    let inner = outer.extend(id(3), Value::number(2.0));

    assert_eq!(inner.lookup(id(1)), Some(&Value::number(1.0)));
    assert_eq!(inner.lookup(id(3)), Some(&Value::number(2.0)));
    assert!(!outer.contains(id(3)));
    assert_eq!(outer.depth(), 1);
    assert_eq!(inner.depth(), 2);
}

#[test]
fn inner_frame_wins() {
    let env = Environment::new()
        .extend(id(1), Value::number(1.0))
        .extend(id(1), Value::number(2.0));
    assert_eq!(env.lookup(id(1)), Some(&Value::number(2.0)));
}

#[test]
fn siblings_share_a_parent() {
    let base = Environment::new().extend(id(1), Value::number(0.0));
    let left = base.extend(id(2), Value::number(1.0));
    let right = base.extend(id(2), Value::number(2.0));
    assert_eq!(left.lookup(id(2)), Some(&Value::number(1.0)));
    assert_eq!(right.lookup(id(2)), Some(&Value::number(2.0)));
    drop(left);
    assert_eq!(right.lookup(id(1)), Some(&Value::number(0.0)));
}

#[test]
fn long_chain_drops_without_overflow() {
    let mut env = Environment::new();
    for n in 0..200_000 {
        env = env.extend(id(n), Value::number(f64::from(n)));
    }
    assert_eq!(env.lookup(id(0)), Some(&Value::number(0.0)));
    drop(env);
}
