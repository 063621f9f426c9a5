use pretty_assertions::assert_eq;

use super::*;
use crate::delimiters::Delimiters;

fn build_with(
    delimiters: &Delimiters,
    max_depth: Option<usize>,
    text: &str,
) -> Result<ProtoNode, ParseError> {
    let ctx = ParseContext::new(delimiters, [], &[], "multiply", max_depth);
    let chars: Vec<char> = text.chars().collect();
    ProtoNode::build(&chars, &ctx)
}

fn build(text: &str) -> ProtoNode {
    match build_with(&Delimiters::new(), None, text) {
        Ok(node) => node,
        Err(err) => panic!("`{text}` failed to build: {err}"),
    }
}

fn leaf(data: &str) -> ProtoNode {
    ProtoNode::leaf(data)
}

#[test]
fn rewritten_call_nests_groups() {
    assert_eq!(
        build("((sum(2,2)))"),
        ProtoNode::call(
            "",
            vec![ProtoNode::call(
                "",
                vec![ProtoNode::call("sum", vec![leaf("2"), leaf("2")])]
            )]
        )
    );
}

#[test]
fn adjacent_segments_multiply() {
    assert_eq!(
        build("4(5)6"),
        ProtoNode::call(
            "multiply",
            vec![ProtoNode::call("4", vec![leaf("5")]), leaf("6")]
        )
    );
}

#[test]
fn missing_closer_same_tree() {
    assert_eq!(build("sum(3,4"), build("sum(3,4)"));
}

#[test]
fn empty_call_has_empty_argument() {
    assert_eq!(build("f()"), ProtoNode::call("f", vec![leaf("")]));
}

#[test]
fn plain_text_is_leaf() {
    let node = build("3.5");
    assert!(node.is_leaf());
    assert_eq!(node.data(), "3.5");
}

#[test]
fn wrappers_stay_in_leaves() {
    let delimiters = Delimiters::with_wrappers([('<', '>')]);
    assert_eq!(
        build_with(&delimiters, None, "<1,2><2,3>"),
        Ok(ProtoNode::call(
            "multiply",
            vec![leaf("<1,2>"), leaf("<2,3>")]
        ))
    );
    assert_eq!(
        build_with(&delimiters, None, "add(<1,2>,<3,4>)"),
        Ok(ProtoNode::call("add", vec![leaf("<1,2>"), leaf("<3,4>")]))
    );
}

#[test]
fn nesting_limit_enforced() {
    assert_eq!(
        build_with(&Delimiters::new(), Some(2), "((((3))))"),
        Err(ParseError::NestingTooDeep { limit: 2 })
    );
    assert!(build_with(&Delimiters::new(), Some(2), "((3))").is_ok());
}

#[test]
fn deep_nesting_builds() {
    let depth = 2_000;
    let text = format!("{}3{}", "(".repeat(depth), ")".repeat(depth));
    let mut node = &build(&text);
    let mut levels = 0;
    while let [child] = node.children() {
        node = child;
        levels += 1;
    }
    assert_eq!(levels, depth);
    assert_eq!(node.data(), "3");
}

#[test]
fn deep_tree_drops() {
    let mut node = leaf("3");
    for _ in 0..100_000 {
        node = ProtoNode::call("", vec![node]);
    }
    assert_eq!(node.children().len(), 1);
}
