use clasp_core::{Colors, Element, PatternId, PatternTree, SeqId};

use super::automaton::Automaton;
use super::builder::Compiler;
use super::trace::{PrintTracer, Verbosity};

fn lit(tree: &mut PatternTree, text: &str, offset: u32) -> Element {
    let symbol = tree.literal(text);
    Element::Symbol(tree.add_leaf(symbol, offset))
}

/// `a [b]`
fn optional_tail(tree: &mut PatternTree) -> SeqId {
    let a = lit(tree, "a", 0);
    let b = lit(tree, "b", 3);
    let body = tree.add_sequence(&[b], 4);
    tree.add_sequence(&[a, Element::Optional(body)], 5)
}

/// `(a | b)`
fn choice(tree: &mut PatternTree) -> SeqId {
    let a = lit(tree, "a", 1);
    let left = tree.add_sequence(&[a], 3);
    let b = lit(tree, "b", 5);
    let right = tree.add_sequence(&[b], 6);
    let alt = tree.add_alternation(&[left, right]);
    tree.add_sequence(&[Element::Choice(alt)], 7)
}

fn trace(tree: &PatternTree, root: SeqId, verbosity: Verbosity) -> String {
    let mut automaton = Automaton::new();
    let mut compiler = Compiler::new(tree, &mut automaton)
        .with_tracer(PrintTracer::new(verbosity, Colors::OFF));
    compiler.compile(root, PatternId::from_raw(0));
    compiler.into_tracer().dump()
}

#[test]
fn default_shows_positions_and_starts() {
    let mut tree = PatternTree::new();
    let root = optional_tail(&mut tree);

    insta::assert_snapshot!(trace(&tree, root, Verbosity::Default), @r"
    P0 compile S1
      new #0 a@0
      new #1 b@3
      start #0
      new #2 ⊤@5
    P0 done (terminal #2, depth 1)
    ");
}

#[test]
fn verbose_adds_edges() {
    let mut tree = PatternTree::new();
    let root = optional_tail(&mut tree);

    insta::assert_snapshot!(trace(&tree, root, Verbosity::Verbose), @r"
    P0 compile S1
      new #0 a@0
      new #1 b@3
      edge #0 → #1
      start #0
      new #2 ⊤@5
      edge #0 → #2
      edge #1 → #2
    P0 done (terminal #2, depth 1)
    ");
}

#[test]
fn very_verbose_adds_frames() {
    let mut tree = PatternTree::new();
    let root = optional_tail(&mut tree);

    insta::assert_snapshot!(trace(&tree, root, Verbosity::VeryVerbose), @r"
    P0 compile S1
      enter S1
      new #0 a@0
        enter S0
      new #1 b@3
        unwind
      edge #0 → #1
      unwind
      start #0
      new #2 ⊤@5
      edge #0 → #2
      edge #1 → #2
    P0 done (terminal #2, depth 1)
    ");
}

#[test]
fn very_verbose_nests_alternation_frames() {
    let mut tree = PatternTree::new();
    let root = choice(&mut tree);

    insta::assert_snapshot!(trace(&tree, root, Verbosity::VeryVerbose), @r"
    P0 compile S2
      enter S2
        enter A0
          enter S0
      new #0 a@1
          unwind
          enter S1
      new #1 b@5
          unwind
        unwind
      unwind
      start #0
      start #1
      new #2 ⊤@7
      edge #0 → #2
      edge #1 → #2
    P0 done (terminal #2, depth 2)
    ");
}

#[test]
fn empty_pattern_unwinds_nullable() {
    let mut tree = PatternTree::new();
    let root = tree.add_sequence(&[], 0);

    insta::assert_snapshot!(trace(&tree, root, Verbosity::VeryVerbose), @r"
    P0 compile S0
      enter S0
      unwind nullable
      new #0 ⊤@0
      start #0
    P0 done (terminal #0, depth 0)
    ");
}

#[test]
fn borrowed_tracer_keeps_lines_across_patterns() {
    let mut tree = PatternTree::new();
    let first = tree.add_sequence(&[], 0);
    let second = tree.add_sequence(&[], 0);

    let mut tracer = PrintTracer::new(Verbosity::Default, Colors::OFF);
    let mut automaton = Automaton::new();
    let mut compiler = Compiler::new(&tree, &mut automaton).with_tracer(&mut tracer);
    compiler.compile(first, PatternId::from_raw(0));
    compiler.compile(second, PatternId::from_raw(1));
    drop(compiler);

    assert_eq!(tracer.lines().len(), 8);
    assert_eq!(tracer.lines()[4], "P1 compile S1");
}

#[test]
fn colors_wrap_ids_and_labels() {
    let mut tree = PatternTree::new();
    let root = tree.add_sequence(&[], 0);

    let mut automaton = Automaton::new();
    let mut compiler = Compiler::new(&tree, &mut automaton)
        .with_tracer(PrintTracer::new(Verbosity::Default, Colors::ON));
    compiler.compile(root, PatternId::from_raw(0));
    let tracer = compiler.into_tracer();

    assert_eq!(tracer.lines()[0], "\x1b[34mP0\x1b[0m compile S0");
    assert_eq!(
        tracer.lines()[1],
        "  new \x1b[34m#0\x1b[0m \x1b[32m⊤\x1b[0m\x1b[2m@0\x1b[0m"
    );
}
