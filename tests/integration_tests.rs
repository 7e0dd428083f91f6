//! Integration tests for the front end.
//!
//! These tests run source text through tokenization and parsing, and check
//! the folded, validated statements and the diagnostics a driver would print.

use std::rc::Rc;

use entropia::{
    ast::ast::{Expression, NodeType, Statement},
    errors::errors::{Error, ErrorCategory, ErrorImpl},
    lexer::lexer::tokenize,
    parser::{
        lookups::Dialect,
        parser::{parse, parse_with_dialect, Parser},
    },
    render_error,
    validator::types::ValueType,
};

const FILE: &str = "program.ent";

fn run(source: &str) -> (Parser, Result<Vec<Statement>, Error>) {
    let tokens = tokenize(source.to_string(), Some(FILE.to_string())).unwrap();
    parse(tokens, Rc::new(FILE.to_string()))
}

#[test]
fn test_program_with_every_statement_kind() {
    let source = "
        let mut total: i64 = 0;
        let limit: u8 = 10;
        let ratio: f32 = 0.5 * 3;
        let done: bool = !false && limit;
        let initial: char = 'e';
        let name: str = \"entropia\";

        for (let mut i: i32 = 0; i; i = i + 1) {
            total = total + i;
        }

        while total {
            total = total - 1;
            if (total) {
                continue;
            } else {
                break;
            }
        } or {
            total = 0;
        }

        loop { break; }
    ";

    let (parser, result) = run(source);
    let statements = result.unwrap();

    let kinds: Vec<NodeType> = statements.iter().map(|statement| statement.node_type()).collect();
    assert_eq!(
        kinds,
        vec![
            NodeType::DeclarationExpression,
            NodeType::DeclarationExpression,
            NodeType::DeclarationExpression,
            NodeType::DeclarationExpression,
            NodeType::DeclarationExpression,
            NodeType::DeclarationExpression,
            NodeType::ForExpression,
            NodeType::WhileExpression,
            NodeType::LoopExpression,
        ]
    );

    let symbols = parser.symbols();
    assert_eq!(symbols.lookup("total"), Some(ValueType::I64));
    assert_eq!(symbols.lookup("ratio"), Some(ValueType::F32));
    assert_eq!(symbols.lookup("done"), Some(ValueType::Bool));
    assert_eq!(symbols.lookup("i"), Some(ValueType::I32));
    assert_eq!(symbols.len(), 7);
}

#[test]
fn test_folded_declarations() {
    let (_, result) = run("let ratio: f32 = 0.5 * 3; let flag: bool = !(1 && 0);");
    let statements = result.unwrap();

    let values: Vec<Expression> = statements
        .into_iter()
        .map(|statement| match statement {
            Statement::Declaration(declaration) => declaration.assignation.value,
            other => panic!("expected a declaration, got {:?}", other),
        })
        .collect();

    assert_eq!(values, vec![Expression::number(1.5), Expression::boolean(true)]);
}

#[test]
fn test_conditional_chain_links_branches() {
    let (_, result) = run("if (a) { } else if (b) { } else { }");
    let statements = result.unwrap();

    let Some(Expression::Conditionnal(structure)) = statements[0].as_expression() else {
        panic!("expected a conditionnal structure");
    };

    assert_eq!(structure.get_expressions().len(), 3);
    assert!(structure.before(0).is_none());
    assert_eq!(
        structure.before(1).and_then(|branch| branch.condition.clone()),
        Some(Expression::identifier("a"))
    );
    assert_eq!(
        structure.before(2).and_then(|branch| branch.condition.clone()),
        Some(Expression::identifier("b"))
    );
    assert!(structure.has_else());
}

#[test]
fn test_propagation_through_containers() {
    let (parser, result) = run("let y: i32 = 5; let z: i32 = y + 1;");

    assert!(result.is_ok());
    assert_eq!(parser.symbols().lookup("z"), Some(ValueType::I32));
}

#[test]
fn test_negative_identifier() {
    let (_, result) = run("-x;");

    assert_eq!(
        result.unwrap(),
        vec![Statement::from(Expression::binary(
            Expression::number(0.0),
            "-",
            Expression::identifier("x"),
        ))]
    );
}

#[test]
fn test_error_categories() {
    let cases = [
        ("let x: i32 5;", ErrorCategory::Syntax),
        ("let x: i32 = 4 / 0;", ErrorCategory::Arithmetic),
        ("let x: str = \"a\" * \"b\";", ErrorCategory::OperandKind),
        ("let x: u8 = 256;", ErrorCategory::Range),
        ("let w: bool = \"x\";", ErrorCategory::KindMismatch),
    ];

    for (source, category) in cases {
        let (_, result) = run(source);
        assert_eq!(result.unwrap_err().get_category(), category, "{}", source);
    }
}

#[test]
fn test_kind_mismatch_cites_boolean_requirement() {
    let (_, result) = run("let w: bool = \"x\";");
    let error = result.unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::KindMismatch {
            expected: String::from("boolean (true / false)"),
            received: String::from("\"x\""),
        }
    );
    assert_eq!(
        error.to_string(),
        "KindMismatch: expected valid boolean (true / false) value, got \"x\" (program.ent:14)"
    );
}

#[test]
fn test_rendered_diagnostic_points_at_token() {
    let source = "let a: i8 = 1;\nlet b: i8 = 2 b;";
    let (_, result) = run(source);
    let error = result.unwrap_err();

    let rendered = render_error(&error, source);
    assert!(rendered.contains("SyntaxError"));
    assert!(rendered.contains("let b: i8 = 2 b;"));
    assert!(rendered.contains("2 |"));
}

#[test]
fn test_core_dialect_only_accepts_numbers() {
    let tokens = tokenize("4 8 15".to_string(), None).unwrap();
    let (_, result) = parse_with_dialect(tokens, Rc::new(FILE.to_string()), Dialect::Core);
    assert_eq!(result.unwrap().len(), 3);

    let tokens = tokenize("let x: i32 = 4;".to_string(), None).unwrap();
    let (_, result) = parse_with_dialect(tokens, Rc::new(FILE.to_string()), Dialect::Core);
    assert!(result.is_err());
}

#[test]
fn test_dialects_disagree_on_the_same_source() {
    let source = "let s: str = \"x\"; let n: i8 = 1 + 2;";

    let tokens = tokenize(source.to_string(), None).unwrap();
    let (parser, result) = parse_with_dialect(tokens, Rc::new(FILE.to_string()), Dialect::Entropia);
    assert_eq!(result.unwrap().len(), 2);
    assert_eq!(parser.symbols().lookup("s"), Some(ValueType::Str));

    let tokens = tokenize(source.to_string(), None).unwrap();
    let (parser, result) = parse_with_dialect(tokens, Rc::new(FILE.to_string()), Dialect::Tlang);
    assert_eq!(
        result.unwrap_err().get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            token: String::from("\"x\"")
        }
    );
    assert!(parser.symbols().is_empty());

    let tokens = tokenize("let n: i8 = 1 + 2;".to_string(), None).unwrap();
    let (_, result) = parse_with_dialect(tokens, Rc::new(FILE.to_string()), Dialect::Tlang);
    assert_eq!(result.unwrap().len(), 1);
}

#[test]
fn test_repr_of_parsed_program() {
    let (_, result) = run("let mut x: i32 = 1; while x { x = x - 1; }");
    let statements = result.unwrap();

    assert_eq!(statements[0].repr(0), "let mut\n\tx\n\t: i32\n\t1");
    assert_eq!(
        statements[1].repr(0),
        "while (\n\tx\n) {\n\tx\n\t=\n\t\t(\n\t\t\tx\n\t\t\t-\n\t\t\t1\n\t\t)\n}"
    );
}
