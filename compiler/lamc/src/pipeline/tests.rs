use super::*;
use lam_eval::{EvalError, EvalMode};
use lam_ir::{ErrorCode, Node, NodeId, Span, Tree, TreeBuilder};
use lam_resolve::ResolveError;
use pretty_assertions::assert_eq;

fn parsed(build: impl FnOnce(&mut TreeBuilder) -> Tree) -> ParsedTree {
    let mut b = TreeBuilder::new();
    let root = build(&mut b);
    b.finish(root)
}

#[test]
fn compile_resolves_everything() {
    let tree = parsed(|b| b.let_in("x", |b| b.number(42.0), |b| b.ident("x")));
    let ast = compile(&tree, &Config::default()).unwrap();
    assert!(ast.is_resolved());
    assert_eq!(ast[NodeId::new(3)], Node::Reference { target: NodeId::new(1) });
}

#[test]
fn run_returns_the_value() {
    let tree = parsed(|b| b.binary("*", |b| b.number(6.0), |b| b.number(7.0)));
    assert_eq!(run(&tree, &Config::default()), Ok(Value::number(42.0)));
}

#[test]
fn errors_convert_per_phase() {
    let structural = parsed(|b| b.error());
    let err = run(&structural, &Config::default()).unwrap_err();
    assert!(matches!(err, Error::Flatten(_)));
    assert!(err.is_internal());

    let unbound = parsed(|b| b.ident("nope").with_span(Span::new(0, 4)));
    let err = run(&unbound, &Config::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Resolve(ResolveError::UnresolvedIdentifier { .. })
    ));
    assert_eq!(err.code(), ErrorCode::E2001);
    assert_eq!(err.span(), Some(Span::new(0, 4)));

    let underflow = parsed(|b| b.ident("!"));
    let err = run(&underflow, &Config::default()).unwrap_err();
    assert!(matches!(err, Error::Eval(EvalError::StackUnderflow { .. })));
    assert!(!err.is_internal());
}

#[test]
fn config_mode_reaches_the_evaluator() {
    let tree = parsed(|b| b.call(|b| b.ident("~"), |b| b.call(|b| b.ident("~"), |b| b.number(1.0))));
    let tight = Config::new().with_max_depth(2);
    assert_eq!(
        run(&tree, &tight).unwrap_err().code(),
        ErrorCode::E3004
    );
    let loose = Config::new().with_mode(EvalMode::Bounded { max_depth: 32 });
    assert_eq!(run(&tree, &loose), Ok(Value::number(1.0)));
}

#[test]
fn batch_keeps_input_order() {
    let trees: Vec<ParsedTree> = (0..32)
        .map(|n| parsed(|b| b.binary("-", |b| b.number(f64::from(n)), |b| b.number(1.0))))
        .collect();
    let results = run_batch(&trees, &Config::default());
    for (n, result) in (0..32).zip(results) {
        assert_eq!(result, Ok(Value::number(f64::from(n) - 1.0)));
    }
}

#[test]
fn batch_isolates_failures() {
    let trees = vec![
        parsed(|b| b.number(1.0)),
        parsed(|b| b.ident("missing")),
        parsed(|b| b.boolean(true)),
    ];
    let results = run_batch(&trees, &Config::default());
    assert_eq!(results[0], Ok(Value::number(1.0)));
    assert!(results[1].is_err());
    assert_eq!(results[2], Ok(Value::Bool(true)));
}

#[test]
fn invalid_error_reports_first_violation() {
    let err = Error::Invalid(vec![lam_resolve::Violation::Unresolved { id: NodeId::new(2) }]);
    assert_eq!(err.code(), ErrorCode::E9007);
    assert_eq!(
        err.to_string(),
        "resolved tree failed validation (1 violation(s)), first: identifier #2 was never resolved"
    );
}
