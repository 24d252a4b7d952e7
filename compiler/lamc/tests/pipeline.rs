//! End-to-end tests: parsed tree in, value or error out.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use lam_eval::EvalError;
use lam_ir::{Arity, BuiltinOp, Node, Tree};
use lam_resolve::{resolve, ResolveError};
use lamc::{compile, run, Config, Error, ParsedTree, TreeBuilder, Value};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn parsed(build: impl FnOnce(&mut TreeBuilder) -> Tree) -> ParsedTree {
    let mut b = TreeBuilder::new();
    let root = build(&mut b);
    b.finish(root)
}

fn eval(build: impl FnOnce(&mut TreeBuilder) -> Tree) -> Result<Value, Error> {
    run(&parsed(build), &Config::default())
}

fn num(n: f64) -> Value {
    Value::number(n)
}

#[test]
fn let_yields_its_value() {
    assert_eq!(
        eval(|b| b.let_in("x", |b| b.number(42.0), |b| b.ident("x"))),
        Ok(num(42.0))
    );
}

#[test]
fn curried_addition() {
    assert_eq!(
        eval(|b| b.binary("+", |b| b.number(1.0), |b| b.number(2.0))),
        Ok(num(3.0))
    );
}

#[test]
fn curried_subtraction_keeps_operand_order() {
    assert_eq!(
        eval(|b| b.binary("-", |b| b.number(3.0), |b| b.number(1.0))),
        Ok(num(2.0))
    );
}

fn apply_two(pick: &'static str) -> Result<Value, Error> {
    // (((lambda a (lambda b <pick>)) 1) 2)
    eval(move |b| {
        b.call(
            |b| {
                b.call(
                    |b| b.lambda("a", |b| b.lambda("b", |b| b.ident(pick))),
                    |b| b.number(1.0),
                )
            },
            |b| b.number(2.0),
        )
    })
}

#[test]
fn nested_lambdas_capture_the_right_parameter() {
    assert_eq!(apply_two("a"), Ok(num(1.0)));
    assert_eq!(apply_two("b"), Ok(num(2.0)));
}

#[test]
fn shadowing() {
    assert_eq!(
        eval(|b| {
            b.let_in(
                "x",
                |b| b.number(1.0),
                |b| b.let_in("x", |b| b.number(2.0), |b| b.ident("x")),
            )
        }),
        Ok(num(2.0))
    );
}

#[test]
fn unary_builtins_underflow_on_empty_stack() {
    for op in BuiltinOp::ALL.into_iter().filter(|op| op.arity() == Arity::Unary) {
        let err = eval(|b| b.ident(op.spelling())).unwrap_err();
        assert!(
            matches!(
                err,
                Error::Eval(EvalError::StackUnderflow { available: 0, .. })
            ),
            "{op}: {err}"
        );
    }
}

#[test]
fn binary_builtins_underflow_with_one_argument() {
    for op in BuiltinOp::ALL.into_iter().filter(|op| op.arity() == Arity::Binary) {
        let err = eval(|b| b.call(|b| b.ident(op.spelling()), |b| b.number(1.0))).unwrap_err();
        assert!(
            matches!(
                err,
                Error::Eval(EvalError::StackUnderflow {
                    needed: 2,
                    available: 1,
                    ..
                })
            ),
            "{op}: {err}"
        );
    }
}

#[test]
fn unbound_name_fails_before_evaluation() {
    // (lambda y ((+ y) z)) is never applied, yet z still fails
    let tree = parsed(|b| {
        b.lambda("y", |b| b.binary("+", |b| b.ident("y"), |b| b.ident("z")))
    });
    let err = compile(&tree, &Config::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Resolve(ResolveError::UnresolvedIdentifier { ref name, .. }) if name == "z"
    ));
    assert_eq!(run(&tree, &Config::default()).unwrap_err(), err);
}

#[test]
fn let_value_never_sees_its_own_binding() {
    // (let x x 1) with no outer x fails to resolve
    let err = eval(|b| b.let_in("x", |b| b.ident("x"), |b| b.number(1.0))).unwrap_err();
    assert!(matches!(err, Error::Resolve(_)));

    // (let x 5 (let x ((+ x) 1) x)) uses the outer x
    let value = eval(|b| {
        b.let_in(
            "x",
            |b| b.number(5.0),
            |b| {
                b.let_in(
                    "x",
                    |b| b.binary("+", |b| b.ident("x"), |b| b.number(1.0)),
                    |b| b.ident("x"),
                )
            },
        )
    });
    assert_eq!(value, Ok(num(6.0)));
}

#[test]
fn resolution_is_idempotent_on_a_program() {
    let tree = parsed(|b| {
        b.let_in(
            "f",
            |b| b.number(2.0),
            |b| b.binary("<", |b| b.ident("f"), |b| b.number(3.0)),
        )
    });
    let once = compile(&tree, &Config::default()).unwrap();
    let twice = resolve(&once).unwrap();
    for (id, node) in once.iter() {
        assert_eq!(node, &twice[id]);
        assert!(!matches!(node, Node::Identifier { .. }));
    }
}

#[test]
fn strings_and_booleans_flow_through() {
    assert_eq!(
        eval(|b| b.binary("==", |b| b.string("a"), |b| b.string("a"))),
        Ok(Value::Bool(true))
    );
    assert_eq!(
        eval(|b| b.binary("||", |b| b.boolean(false), |b| b.boolean(true))),
        Ok(Value::Bool(true))
    );
}

proptest! {
    #[test]
    fn subtraction_order_holds_for_all_operands(a in -1000i32..1000, b in -1000i32..1000) {
        let (a, b) = (f64::from(a), f64::from(b));
        let result = eval(|t| t.binary("-", |t| t.number(a), |t| t.number(b)));
        prop_assert_eq!(result, Ok(num(a - b)));
    }

    #[test]
    fn division_order_holds(a in 1i32..1000, b in 1i32..1000) {
        let (a, b) = (f64::from(a), f64::from(b));
        let result = eval(|t| t.binary("/", |t| t.number(a), |t| t.number(b)));
        prop_assert_eq!(result, Ok(num(a / b)));
    }

    #[test]
    fn free_names_always_fail_to_resolve(name in "[a-z]{1,8}") {
        let tree = parsed(|b| b.binary("+", |b| b.number(1.0), |b| b.ident(&name)));
        let is_unresolved = matches!(
            compile(&tree, &Config::default()),
            Err(Error::Resolve(ResolveError::UnresolvedIdentifier { .. }))
        );
        prop_assert!(is_unresolved);
    }
}
