use crate::{Element, PatternTree, SeqId, SymbolKind};

/// `a b`
fn two_literals(tree: &mut PatternTree) -> SeqId {
    let a = tree.literal("a");
    let b = tree.literal("b");
    let la = tree.add_leaf(a, 0);
    let lb = tree.add_leaf(b, 2);
    tree.add_sequence(&[Element::Symbol(la), Element::Symbol(lb)], 3)
}

#[test]
fn symbols_are_deduplicated() {
    let mut tree = PatternTree::new();

    let a = tree.literal("add");
    let b = tree.literal("add");
    let c = tree.placeholder("add", None);

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(tree.symbol_count(), 2);
    assert_eq!(tree.symbol(c).kind, SymbolKind::Placeholder);
}

#[test]
fn symbol_labels() {
    let mut tree = PatternTree::new();

    let lit = tree.literal("--force");
    let ph = tree.placeholder("file", None);
    let typed = tree.placeholder("n", Some("int"));

    assert_eq!(tree.symbol_label(lit), "--force");
    assert_eq!(tree.symbol_label(ph), "<file>");
    assert_eq!(tree.symbol_label(typed), "<n:int>");
}

#[test]
fn sequence_of_symbols_is_not_nullable() {
    let mut tree = PatternTree::new();
    let seq = two_literals(&mut tree);

    let s = tree.sequence(seq);
    assert!(!s.nullable());
    assert_eq!(s.len(), 2);
    assert_eq!(s.end(), 3);
}

#[test]
fn empty_sequence_is_nullable() {
    let mut tree = PatternTree::new();
    let seq = tree.add_sequence(&[], 0);

    assert!(tree.sequence(seq).nullable());
    assert!(tree.sequence(seq).is_empty());
    assert!(tree.elements(seq).is_empty());
}

#[test]
fn optional_makes_sequence_nullable() {
    let mut tree = PatternTree::new();
    let body = two_literals(&mut tree);
    let seq = tree.add_sequence(&[Element::Optional(body)], 5);

    assert!(tree.sequence(seq).nullable());
}

#[test]
fn repeated_inherits_body_nullability() {
    let mut tree = PatternTree::new();
    let body = two_literals(&mut tree);
    let opt = tree.add_sequence(&[Element::Optional(body)], 5);

    let strict = tree.add_sequence(&[Element::Repeated(body)], 6);
    let loose = tree.add_sequence(&[Element::Repeated(opt)], 8);

    assert!(!tree.sequence(strict).nullable());
    assert!(tree.sequence(loose).nullable());
}

#[test]
fn choice_is_nullable_if_any_branch_is() {
    let mut tree = PatternTree::new();
    let strict = two_literals(&mut tree);
    let empty = tree.add_sequence(&[], 4);

    let alt_strict = tree.add_alternation(&[strict]);
    let alt_mixed = tree.add_alternation(&[strict, empty]);

    let s1 = tree.add_sequence(&[Element::Choice(alt_strict)], 5);
    let s2 = tree.add_sequence(&[Element::Choice(alt_mixed)], 7);

    assert!(!tree.sequence(s1).nullable());
    assert!(tree.sequence(s2).nullable());
    assert_eq!(tree.alternatives(alt_mixed), &[strict, empty]);
    assert_eq!(tree.alternative(alt_mixed, 1), empty);
}

#[test]
fn element_pool_keeps_sequences_separate() {
    let mut tree = PatternTree::new();
    let first = two_literals(&mut tree);
    let x = tree.literal("x");
    let lx = tree.add_leaf(x, 0);
    let second = tree.add_sequence(&[Element::Symbol(lx)], 1);

    assert_eq!(tree.elements(first).len(), 2);
    assert_eq!(tree.elements(second), &[Element::Symbol(lx)]);
    assert_eq!(tree.element(second, 0), Element::Symbol(lx));
    assert_eq!(tree.leaf(lx).offset, 0);
}

#[test]
#[should_panic(expected = "at least one alternative")]
fn empty_alternation_panics() {
    let mut tree = PatternTree::new();
    tree.add_alternation(&[]);
}

#[test]
#[should_panic(expected = "sequence S9 not found")]
fn foreign_sequence_id_panics() {
    let mut tree = PatternTree::new();
    tree.add_sequence(&[Element::Optional(SeqId::from_raw(9))], 0);
}

#[test]
#[should_panic(expected = "element 2 out of range")]
fn element_index_out_of_range_panics() {
    let mut tree = PatternTree::new();
    let seq = two_literals(&mut tree);
    tree.element(seq, 2);
}
