use super::*;
use crate::{BuiltinOp, Literal};
use pretty_assertions::assert_eq;

fn id(n: u32) -> NodeId {
    NodeId::new(n)
}

fn dummy_spans(n: usize) -> Vec<Span> {
    vec![Span::DUMMY; n]
}

/// `(let x 42 x)` after resolution.
fn resolved_let() -> Vec<Node> {
    vec![
        Node::Let {
            binding: id(1),
            value: id(2),
            body: id(3),
        },
        Node::Binding {
            name: "x".to_owned(),
        },
        Node::Literal(Literal::Number(42.0)),
        Node::Reference { target: id(1) },
    ]
}

#[test]
fn accepts_well_formed_array() {
    let ast = FlatAst::from_parts(resolved_let(), dummy_spans(4)).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(ast.len(), 4);
    assert_eq!(ast.root(), NodeId::ROOT);
    assert_eq!(ast.binding_name(id(1)), Some("x"));
    assert!(ast.is_resolved());
}

#[test]
fn rejects_empty() {
    assert_eq!(FlatAst::from_parts(vec![], vec![]), Err(FlatAstError::Empty));
}

#[test]
fn rejects_length_mismatch() {
    assert_eq!(
        FlatAst::from_parts(resolved_let(), dummy_spans(3)),
        Err(FlatAstError::LengthMismatch { nodes: 4, spans: 3 })
    );
}

#[test]
fn rejects_dangling_child() {
    let nodes = vec![
        Node::Call {
            function: id(1),
            argument: id(7),
        },
        Node::Builtin { op: BuiltinOp::Not },
    ];
    assert_eq!(
        FlatAst::from_parts(nodes, dummy_spans(2)),
        Err(FlatAstError::DanglingChild {
            parent: id(0),
            child: id(7),
            len: 2,
        })
    );
}

#[test]
fn rejects_non_binding_slot() {
    let nodes = vec![
        Node::Lambda {
            binding: id(1),
            body: id(1),
        },
        Node::Literal(Literal::Bool(true)),
    ];
    assert_eq!(
        FlatAst::from_parts(nodes, dummy_spans(2)),
        Err(FlatAstError::NotABinding {
            parent: id(0),
            child: id(1),
            found: "literal",
        })
    );
}

#[test]
fn rejects_reference_to_non_binding() {
    let mut nodes = resolved_let();
    nodes[3] = Node::Reference { target: id(2) };
    assert_eq!(
        FlatAst::from_parts(nodes, dummy_spans(4)),
        Err(FlatAstError::BadReference {
            id: id(3),
            target: id(2),
        })
    );
}

#[test]
fn unresolved_lists_identifiers() {
    let mut nodes = resolved_let();
    nodes[3] = Node::Identifier {
        name: "x".to_owned(),
    };
    let ast = FlatAst::from_parts(nodes, dummy_spans(4)).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(ast.unresolved().collect::<Vec<_>>(), vec![id(3)]);
    assert!(!ast.is_resolved());
}

#[test]
fn display_lists_one_node_per_line() {
    let ast = FlatAst::from_parts(resolved_let(), dummy_spans(4)).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(
        ast.to_string(),
        "#0 let #1 #2 #3\n#1 binding x\n#2 literal 42\n#3 reference #1\n"
    );
}

#[test]
fn errors_carry_internal_code() {
    assert_eq!(FlatAstError::Empty.code(), ErrorCode::E9001);
    assert!(FlatAstError::Empty.code().is_internal());
}

#[test]
fn rejects_self_cycle() {
    // (#0 1) where the call is its own function
    let nodes = vec![
        Node::Call {
            function: id(0),
            argument: id(1),
        },
        Node::Literal(Literal::Number(1.0)),
    ];
    assert_eq!(
        FlatAst::from_parts(nodes, dummy_spans(2)),
        Err(FlatAstError::NotATree {
            id: id(0),
            parents: 1,
        })
    );
}

#[test]
fn rejects_shared_child() {
    let nodes = vec![
        Node::Call {
            function: id(1),
            argument: id(1),
        },
        Node::Builtin { op: BuiltinOp::Neg },
    ];
    assert_eq!(
        FlatAst::from_parts(nodes, dummy_spans(2)),
        Err(FlatAstError::NotATree {
            id: id(1),
            parents: 2,
        })
    );
}

#[test]
fn rejects_orphan_node() {
    let nodes = vec![
        Node::Literal(Literal::Bool(true)),
        Node::Binding {
            name: "x".to_owned(),
        },
    ];
    assert_eq!(
        FlatAst::from_parts(nodes, dummy_spans(2)),
        Err(FlatAstError::NotATree {
            id: id(1),
            parents: 0,
        })
    );
}

#[test]
fn rejects_detached_cycle() {
    // #1 and #2 call each other; nothing links them to the root
    let nodes = vec![
        Node::Literal(Literal::Number(0.0)),
        Node::Call {
            function: id(2),
            argument: id(3),
        },
        Node::Call {
            function: id(1),
            argument: id(4),
        },
        Node::Literal(Literal::Number(1.0)),
        Node::Literal(Literal::Number(2.0)),
    ];
    assert_eq!(
        FlatAst::from_parts(nodes, dummy_spans(5)),
        Err(FlatAstError::Unreachable { id: id(1) })
    );
}
