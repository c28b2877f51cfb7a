//! Integration tests for selector rendering.
//!
//! Covers the string grammar the builder produces:
//! - Fragment prefixes: `#id`, `.class`, `[attr]`, `:pseudo-class`,
//!   `::pseudo-element`
//! - Combinator rendering with one space on each side of the token
//! - Recursive rendering of nested combinations
//! - render() purity and idempotence

use cssbuild::{Combinator, combine, element, pseudo_class};

// ============================================================================
// SIMPLE AND COMPOUND SELECTORS
// ============================================================================

#[test]
fn test_element_id_classes() {
    let mut selector = element("div");
    selector
        .id("main")
        .unwrap()
        .class("container")
        .unwrap()
        .class("draggable")
        .unwrap();

    assert_eq!(selector.render(), "div#main.container.draggable");
}

#[test]
fn test_attribute_and_pseudo_class() {
    let mut selector = element("a");
    selector
        .attr("href$=\".png\"")
        .unwrap()
        .pseudo_class("focus")
        .unwrap();

    assert_eq!(selector.render(), "a[href$=\".png\"]:focus");
}

#[test]
fn test_pseudo_element_double_colon() {
    let mut selector = element("li");
    selector.pseudo_element("marker").unwrap();
    assert_eq!(selector.render(), "li::marker");
}

#[test]
fn test_fragment_text_passes_through_verbatim() {
    // No escaping, no validation: garbage in, garbage out.
    let mut selector = element("x y");
    selector.class("{weird}").unwrap();
    assert_eq!(selector.render(), "x y.{weird}");
}

// ============================================================================
// COMBINATORS
// ============================================================================

#[test]
fn test_child_combinator() {
    let selector = combine(&element("ul"), Combinator::Child, &element("li"));
    assert_eq!(selector.render(), "ul > li");
}

#[test]
fn test_adjacent_sibling_combinator() {
    let selector = combine(&element("h1"), Combinator::AdjacentSibling, &element("p"));
    assert_eq!(selector.render(), "h1 + p");
}

#[test]
fn test_general_sibling_combinator() {
    let selector = combine(&element("h1"), Combinator::GeneralSibling, &element("p"));
    assert_eq!(selector.render(), "h1 ~ p");
}

#[test]
fn test_descendant_combinator_renders_three_spaces() {
    // The token itself is a space, surrounded by the usual two.
    let selector = combine(&element("tr"), Combinator::Descendant, &element("td"));
    assert_eq!(selector.render(), "tr   td");
}

#[test]
fn test_nested_combination_renders_flat_chain() {
    let a_plus_b = combine(&element("a"), Combinator::AdjacentSibling, &element("b"));
    let chained = combine(&a_plus_b, Combinator::GeneralSibling, &element("c"));
    assert_eq!(chained.render(), "a + b ~ c");
}

#[test]
fn test_deeply_nested_combination() {
    let mut left = element("div");
    left.id("main")
        .unwrap()
        .class("container")
        .unwrap()
        .class("draggable")
        .unwrap();

    let mut table = element("table");
    table.id("data").unwrap();

    let mut tr = element("tr");
    tr.pseudo_class("nth-of-type(even)").unwrap();

    let mut td = element("td");
    td.pseudo_class("nth-of-type(even)").unwrap();

    let selector = combine(
        &left,
        Combinator::AdjacentSibling,
        &combine(
            &table,
            Combinator::GeneralSibling,
            &combine(&tr, Combinator::Descendant, &td),
        ),
    );

    assert_eq!(
        selector.render(),
        "div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
    );
}

// ============================================================================
// PURITY
// ============================================================================

#[test]
fn test_render_is_idempotent() {
    let mut selector = element("div");
    selector.class("container").unwrap();
    let combined = combine(&selector, Combinator::Child, &element("p"));

    assert_eq!(combined.render(), combined.render());
    assert_eq!(combined.render(), "div.container > p");
}

#[test]
fn test_combine_does_not_consume_its_arguments() {
    let left = element("div");
    let right = pseudo_class("hover");

    let combined = combine(&left, Combinator::Child, &right);
    assert_eq!(combined.render(), "div > :hover");

    // Both originals render independently afterwards.
    assert_eq!(left.render(), "div");
    assert_eq!(right.render(), ":hover");
}

#[test]
fn test_combined_sequences_are_not_aliased() {
    // Growing the original after combine must not leak into the copy.
    let mut original = element("div");
    original.class("one").unwrap();

    let combined = combine(&original, Combinator::Child, &element("p"));
    original.class("two").unwrap();

    assert_eq!(original.render(), "div.one.two");
    assert_eq!(combined.render(), "div.one > p");
}

#[test]
fn test_display_matches_render() {
    let selector = combine(&element("ul"), Combinator::Child, &element("li"));
    assert_eq!(format!("{selector}"), selector.render());
}
