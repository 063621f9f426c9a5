use std::collections::BTreeSet;

use pretty_assertions::assert_eq;

use super::*;
use crate::delimiters::Delimiters;
use crate::errors::invalid_literal;
use crate::test_helpers::Numbers;

fn functions(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

fn resolve(node: ProtoNode, names: &[&str]) -> Result<Evaluable<f64>, ParseError> {
    let delimiters = Delimiters::new();
    let names = functions(names);
    let ctx = ParseContext::new(&delimiters, [], &names, "multiply", None);
    Evaluable::resolve(node, &Numbers, &ctx)
}

fn undefined(node: &ProtoNode, names: &[&str]) -> BTreeSet<String> {
    let delimiters = Delimiters::new();
    let names = functions(names);
    let ctx = ParseContext::new(&delimiters, [], &names, "multiply", None);
    let mut found = BTreeSet::new();
    collect_undefined(node, &Numbers, &ctx, &mut found);
    found
}

fn lit(value: f64) -> Evaluable<f64> {
    Evaluable::Literal(value)
}

#[test]
fn leaf_becomes_literal() {
    assert_eq!(resolve(ProtoNode::leaf("3"), &[]), Ok(lit(3.0)));
    assert_eq!(resolve(ProtoNode::leaf(""), &[]), Ok(lit(0.0)));
    assert_eq!(resolve(ProtoNode::leaf("x"), &[]), Err(invalid_literal("x")));
}

#[test]
fn registered_name_becomes_call() {
    let node = ProtoNode::call("sum", vec![ProtoNode::leaf("1"), ProtoNode::leaf("2")]);
    assert_eq!(
        resolve(node, &["multiply", "sum"]),
        Ok(Evaluable::call("sum", vec![lit(1.0), lit(2.0)]))
    );
}

#[test]
fn prefix_before_name_multiplies() {
    let node = ProtoNode::call("2sin", vec![ProtoNode::leaf("0")]);
    assert_eq!(
        resolve(node, &["multiply", "sin"]),
        Ok(Evaluable::call(
            "multiply",
            vec![lit(2.0), Evaluable::call("sin", vec![lit(0.0)])]
        ))
    );
}

#[test]
fn bad_prefix_is_parse_error() {
    let node = ProtoNode::call("xsin", vec![ProtoNode::leaf("0")]);
    assert_eq!(resolve(node, &["multiply", "sin"]), Err(invalid_literal("x")));
}

#[test]
fn empty_name_is_grouping() {
    let node = ProtoNode::call("", vec![ProtoNode::leaf("3"), ProtoNode::leaf("4")]);
    assert_eq!(
        resolve(node, &["multiply"]),
        Ok(Evaluable::call("", vec![lit(3.0), lit(4.0)]))
    );
}

#[test]
fn value_before_group_multiplies() {
    let node = ProtoNode::call("4", vec![ProtoNode::leaf("5")]);
    assert_eq!(
        resolve(node, &["multiply"]),
        Ok(Evaluable::call(
            "multiply",
            vec![lit(4.0), Evaluable::call("", vec![lit(5.0)])]
        ))
    );
}

#[test]
fn unknown_name_stays_a_call() {
    let node = ProtoNode::call("unknownFunc", vec![ProtoNode::leaf("3")]);
    assert_eq!(
        resolve(node, &["multiply"]),
        Ok(Evaluable::call("unknownFunc", vec![lit(3.0)]))
    );
}

#[test]
fn display_nests_calls() {
    let expr = Evaluable::call(
        "sum",
        vec![lit(3.0), Evaluable::call("multiply", vec![lit(4.0), lit(5.0)])],
    );
    assert_eq!(expr.to_string(), "sum(3, multiply(4, 5))");
}

#[test]
fn undefined_collects_leaves_and_prefixes() {
    let node = ProtoNode::call(
        "",
        vec![
            ProtoNode::call("Aln", vec![ProtoNode::leaf("E")]),
            ProtoNode::leaf("E"),
            ProtoNode::leaf("3"),
        ],
    );
    let expected: BTreeSet<String> = ["A", "E"].into_iter().map(String::from).collect();
    assert_eq!(undefined(&node, &["multiply", "ln"]), expected);
}

#[test]
fn undefined_reports_unknown_call_name() {
    let node = ProtoNode::call("f", vec![ProtoNode::leaf("3")]);
    let expected: BTreeSet<String> = ["f".to_string()].into_iter().collect();
    assert_eq!(undefined(&node, &["multiply"]), expected);
}

#[test]
fn nothing_undefined_in_numbers() {
    let node = ProtoNode::call("2sin", vec![ProtoNode::leaf("")]);
    assert!(undefined(&node, &["multiply", "sin"]).is_empty());
}

#[test]
fn deep_tree_displays_and_drops() {
    let depth = 20_000;
    let mut expr: Evaluable<f64> = Evaluable::Literal(3.0);
    for _ in 0..depth {
        expr = Evaluable::call("", vec![expr]);
    }
    assert_eq!(
        expr.to_string(),
        format!("{}3{}", "(".repeat(depth), ")".repeat(depth))
    );
}
