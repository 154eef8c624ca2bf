use annota::{
    annotate,
    ast::Operator,
    error::{Error, EvalError, ParseError},
    interpreter::{
        evaluator::core::evaluate,
        parser::core::{MAX_DEPTH, parse},
        tree::{AnnotatedKind, AnnotatedNode},
    },
};
use pretty_assertions::assert_eq;

fn value_of(src: &str) -> i64 {
    annotate(src).unwrap_or_else(|e| panic!("failed to annotate {src:?}: {e}"))
                 .value()
}

fn eval_error(src: &str) -> EvalError {
    match annotate(src) {
        Err(Error::Eval(e)) => e,
        other => panic!("expected an evaluation error for {src:?}, got {other:?}"),
    }
}

#[test]
fn evaluates_with_standard_precedence() {
    assert_eq!(value_of("3+4*2"), 11);
    assert_eq!(value_of("(3+4)*2"), 14);
    assert_eq!(value_of("2^3+1"), 9);
    assert_eq!(value_of("10%3"), 1);
    assert_eq!(value_of("2*3^2"), 18);
    assert_eq!(value_of("20-6/3*2"), 16);
    assert_eq!(value_of("2^3^2"), 64);
}

#[test]
fn subtraction_and_division_chain_left_to_right() {
    assert_eq!(value_of("8-3-2"), 3);
    assert_eq!(value_of("100/10/5"), 2);
    assert_eq!(value_of("5-9"), -4);
}

#[test]
fn integer_division_truncates_toward_zero() {
    assert_eq!(value_of("7/2"), 3);
    assert_eq!(value_of("(0-7)/2"), -3);
    assert_eq!(value_of("(0-7)%2"), -1);
    assert_eq!(value_of("7%(0-2)"), 1);
}

#[test]
fn power_by_repeated_multiplication() {
    assert_eq!(value_of("5^0"), 1);
    assert_eq!(value_of("0^0"), 1);
    assert_eq!(value_of("0^5"), 0);
    assert_eq!(value_of("(0-2)^3"), -8);
    assert_eq!(value_of("1^4000000000"), 1);
    assert_eq!(value_of("2^62"), 1 << 62);
}

#[test]
fn single_literal_annotation() {
    let tree = annotate("7").unwrap();
    assert!(tree.is_constant());
    assert_eq!(tree.value(), 7);
    assert_eq!(tree.annotation(), "comp -> num : 7");
    assert_eq!(tree.operator(), None);
    assert!(tree.children().is_none());
}

#[test]
fn operation_annotations_follow_their_productions() {
    let cases = [("1+2", "exp -> exp + term : 1 + 2 = 3"),
                 ("5-9", "exp -> exp - term : 5 - 9 = -4"),
                 ("6*7", "term -> term * fac : 6 * 7 = 42"),
                 ("8/3", "term -> term / fac : 8 / 3 = 2"),
                 ("10%3", "term -> term % fac : 10 % 3 = 1"),
                 ("2^10", "fac -> fac ^ comp : 2 ^ 10 = 1024")];

    for (src, expected) in cases {
        assert_eq!(annotate(src).unwrap().annotation(), expected, "annotation of {src:?}");
    }
}

#[test]
fn nodes_are_evaluated_in_post_order() {
    let tree = annotate("2*3-4").unwrap();
    let annotations: Vec<&str> = tree.walk_post_order()
                                     .into_iter()
                                     .map(AnnotatedNode::annotation)
                                     .collect();
    assert_eq!(annotations,
               vec!["comp -> num : 2",
                    "comp -> num : 3",
                    "term -> term * fac : 2 * 3 = 6",
                    "comp -> num : 4",
                    "exp -> exp - term : 6 - 4 = 2",]);
}

#[test]
fn every_node_matches_its_template() {
    let tree = annotate("((1+2)*3-4/2)%5+2^(1+2)").unwrap();
    let nodes = tree.walk_post_order();
    assert_eq!(nodes.len(), 17);

    for node in nodes {
        let expected = match node.children() {
            None => format!("comp -> num : {}", node.value()),
            Some((left, right)) => {
                let op = node.operator().unwrap();
                format!("{} : {} {} {} = {}",
                        op.production(),
                        left.value(),
                        op,
                        right.value(),
                        node.value())
            },
        };
        assert_eq!(node.annotation(), expected);
    }
    assert_eq!(tree.value(), 10);
}

#[test]
fn nested_parentheses_yield_one_operation() {
    let tree = annotate("((((1+2))))").unwrap();
    assert_eq!(tree.operator(), Some(Operator::Add));
    assert_eq!(tree.value(), 3);
    assert_eq!(tree.walk_post_order().len(), 3);
}

#[test]
fn evaluating_twice_gives_the_same_tree() {
    let expr = parse("(3+4)*2^2-9%4").unwrap();
    let first = evaluate(&expr).unwrap();
    let second = evaluate(&expr).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.value(), 27);
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(eval_error("1/0"),
               EvalError::DivisionByZero { left:     1,
                                           position: 1, });
    assert_eq!(eval_error("7%(2-2)"),
               EvalError::ModuloByZero { left:     7,
                                         position: 1, });
}

#[test]
fn negative_exponent_is_rejected() {
    assert_eq!(eval_error("2^(1-3)"),
               EvalError::NegativeExponent { exponent: -2,
                                             position: 1, });
}

#[test]
fn overflow_is_an_error() {
    assert_eq!(eval_error("2^63"),
               EvalError::Overflow { op:       Operator::Pow,
                                     left:     2,
                                     right:    63,
                                     position: 1, });
    assert_eq!(eval_error("9223372036854775807+1"),
               EvalError::Overflow { op:       Operator::Add,
                                     left:     i64::MAX,
                                     right:    1,
                                     position: 19, });
    assert_eq!(eval_error("(0-9223372036854775807-1)/(0-1)").position(), 25);
}

#[test]
fn remainder_of_minimum_by_minus_one_is_zero() {
    assert_eq!(value_of("(0-9223372036854775807-1)%(0-1)"), 0);
    assert_eq!(annotate("(0-9223372036854775807-1)%(0-1)").unwrap().annotation(),
               "term -> term % fac : -9223372036854775808 % -1 = 0");
}

#[test]
fn errors_display_their_position() {
    assert_eq!(annotate("1/0").unwrap_err().to_string(),
               "Error at position 1: Division by zero: 1 / 0.");
    assert_eq!(annotate("2^(0-1)").unwrap_err().to_string(),
               "Error at position 1: Negative exponent -1 is not supported.");
    assert!(matches!(annotate("1+"), Err(Error::Parse(_))));
}

#[test]
fn operation_nodes_own_their_evaluated_operands() {
    let tree = annotate("6/(1+2)").unwrap();
    let AnnotatedKind::Operation { op, left, right } = tree.kind() else {
        panic!("expected an operation at the root");
    };
    assert_eq!(*op, Operator::Div);
    assert_eq!(left.value(), 6);
    assert_eq!(right.annotation(), "exp -> exp + term : 1 + 2 = 3");
    assert_eq!(tree.annotation(), "term -> term / fac : 6 / 3 = 2");
}

#[test]
fn deepest_accepted_chain_evaluates_and_renders() {
    let tree = annotate(&vec!["1"; MAX_DEPTH].join("+")).unwrap();
    assert_eq!(tree.value(), 256);
    assert_eq!(tree.walk_post_order().len(), 2 * MAX_DEPTH - 1);
    assert_eq!(tree.to_string().lines().count(), 2 * MAX_DEPTH - 1);
}

#[test]
fn overly_deep_input_is_an_error_not_a_crash() {
    let chain = vec!["1"; 2000].join("+");
    assert!(matches!(annotate(&chain),
                     Err(Error::Parse(ParseError::NestingTooDeep { .. }))));

    let nested = format!("{}1{}", "(".repeat(1000), ")".repeat(1000));
    assert!(matches!(annotate(&nested),
                     Err(Error::Parse(ParseError::NestingTooDeep { .. }))));
}
