//! Integration tests for combining selectors.
//!
//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

use sprig_selector::{Combinator, Selector, SelectorBuilder, SelectorError, class, combine, element, id};

#[test]
fn test_combine_next_sibling() {
    let a = element("div").and_then(|s| s.id("main")).unwrap();
    let b = element("table").and_then(|s| s.id("data")).unwrap();
    let expected = format!("{} + {}", a.stringify(), b.stringify());

    let combined = combine(a, '+', b).unwrap();
    assert_eq!(combined.stringify(), expected);
    assert_eq!(combined.stringify(), "div#main + table#data");
}

#[test]
fn test_combine_every_token() {
    for (token, expected) in [
        ('>', "ul > li"),
        ('+', "ul + li"),
        ('~', "ul ~ li"),
        (' ', "ul   li"),
    ] {
        let combined = combine(element("ul").unwrap(), token, element("li").unwrap()).unwrap();
        assert_eq!(combined.stringify(), expected);
    }
}

#[test]
fn test_combine_accepts_enum_and_str() {
    let by_enum = combine(element("a").unwrap(), Combinator::Child, element("b").unwrap()).unwrap();
    let by_str = combine(element("a").unwrap(), ">", element("b").unwrap()).unwrap();
    assert_eq!(by_enum, by_str);
}

#[test]
fn test_nested_combine_left() {
    let a = element("h1").unwrap();
    let b = element("p").unwrap();
    let c = class("note").unwrap();

    let combined = combine(combine(a, '+', b).unwrap(), '~', c).unwrap();
    assert_eq!(combined.stringify(), "h1 + p ~ .note");
}

#[test]
fn test_nested_combine_right() {
    let inner = combine(element("li").unwrap(), '>', element("a").unwrap()).unwrap();
    let combined = combine(element("nav").unwrap(), '>', inner).unwrap();
    assert_eq!(combined.stringify(), "nav > li > a");
}

#[test]
fn test_then_chains() {
    let selector = Selector::from(id("app").unwrap())
        .then('>', element("main").unwrap())
        .and_then(|s| s.then('~', element("footer").unwrap()))
        .unwrap();
    assert_eq!(selector.stringify(), "#app > main ~ footer");

    let compounds: Vec<String> = selector.compounds().iter().map(|c| c.stringify()).collect();
    assert_eq!(compounds, ["#app", "main", "footer"]);
}

#[test]
fn test_complex_accessors() {
    let Selector::Complex(complex) =
        combine(element("dt").unwrap(), '+', element("dd").unwrap()).unwrap()
    else {
        panic!("expected a complex selector");
    };
    assert_eq!(complex.combinator(), Combinator::NextSibling);
    assert_eq!(complex.left().stringify(), "dt");
    assert_eq!(complex.right().stringify(), "dd");
}

#[test]
fn test_invalid_combinator() {
    let err = combine(element("a").unwrap(), '|', element("b").unwrap()).unwrap_err();
    assert_eq!(err, SelectorError::InvalidCombinator("|".to_string()));

    let err = combine(element("a").unwrap(), "||", element("b").unwrap()).unwrap_err();
    assert_eq!(err, SelectorError::InvalidCombinator("||".to_string()));
}

#[test]
fn test_parse_combinator_tokens() {
    assert_eq!("+".parse::<Combinator>(), Ok(Combinator::NextSibling));
    assert_eq!("~".parse::<Combinator>(), Ok(Combinator::SubsequentSibling));
    assert_eq!(">".parse::<Combinator>(), Ok(Combinator::Child));
    assert_eq!(" ".parse::<Combinator>(), Ok(Combinator::Descendant));
    assert!("".parse::<Combinator>().is_err());
    assert_eq!(Combinator::Child.to_string(), ">");
}

#[test]
fn test_shared_builder_combine_then_reuse() {
    let sb = SelectorBuilder::new();
    let first = sb
        .combine(sb.element("a").unwrap(), '+', sb.element("b").unwrap())
        .unwrap();
    assert_eq!(first.stringify(), "a + b");

    let second = sb.element("c").unwrap();
    assert_eq!(Selector::from(second).stringify(), "c");
}

#[test]
fn test_serialize_structure() {
    let selector = combine(
        element("a").and_then(|s| s.class("x")).unwrap(),
        '>',
        element("b").unwrap(),
    )
    .unwrap();
    let json = serde_json::to_value(&selector).unwrap();

    assert_eq!(json["complex"]["combinator"], "child");
    assert_eq!(
        json["complex"]["left"]["compound"]["fragments"][1],
        serde_json::json!({ "kind": "class", "value": "x" })
    );
    assert_eq!(
        json["complex"]["right"]["compound"]["fragments"][0]["value"],
        "b"
    );
}
