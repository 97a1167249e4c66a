use clasp_core::{Colors, PatternId};

use crate::nfa::{PrintTracer, Verbosity};
use crate::patterns::{PatternSet, PatternSetBuilder};
use crate::shot_nfa;
use crate::syntax::{ParseError, Span};
use crate::Error;

#[test]
fn flags_and_repeated_files() {
    shot_nfa!(r#"
        add: add [-f | --force] <file>...
    "#, @r"
    P0 add:
      start: #0
      #0 add@0 → #1 #2 #3
      #1 -f@5 → #3
      #2 --force@10 → #3
      #3 <file>@19 → #3 #4
      #4 ⊤@28
    ");
}

#[test]
fn patterns_are_numbered_in_registration_order() {
    shot_nfa!(r#"
        status: status
        commit: commit [-m <msg>]
    "#, @r"
    P0 status:
      start: #0
      #0 status@0 → #1
      #1 ⊤@6

    P1 commit:
      start: #2
      #2 commit@0 → #3 #5
      #3 -m@8 → #4
      #4 <msg>@11 → #5
      #5 ⊤@17
    ");
}

#[test]
fn top_level_alternatives() {
    shot_nfa!(r#"
        mode: --fast | --slow [-v]
    "#, @r"
    P0 mode:
      start: #0 #1
      #0 --fast@0 → #3
      #1 --slow@9 → #2 #3
      #2 -v@17 → #3
      #3 ⊤@20
    ");
}

#[test]
fn empty_pattern_starts_at_terminal() {
    let mut builder = PatternSetBuilder::new();
    builder.add("none", "").unwrap();

    insta::assert_snapshot!(builder.build().dump(Colors::OFF), @r"
    P0 none:
      start: #0
      #0 ⊤@0
    ");
}

#[test]
fn names_and_ids() {
    let set = PatternSet::expect_valid("add: add <file>\nrm: rm <file>");

    assert_eq!(set.len(), 2);
    assert_eq!(set.id("add"), Some(PatternId::from_raw(0)));
    assert_eq!(set.id("rm"), Some(PatternId::from_raw(1)));
    assert_eq!(set.id("mv"), None);
    assert_eq!(set.name(PatternId::from_raw(1)), Some("rm"));
    assert_eq!(set.name(PatternId::from_raw(5)), None);

    let names: Vec<_> = set.patterns().map(|(_, name, _)| name).collect();
    assert_eq!(names, vec!["add", "rm"]);
    assert_eq!(set.pattern(PatternId::from_raw(1)).unwrap().source, "rm <file>");
}

#[test]
fn symbols_are_shared_across_patterns() {
    let set = PatternSet::expect_valid("add: add <file>\nrm: rm <file>");

    let file = |p: u32| set.automaton().position(clasp_core::PositionId::from_raw(p)).symbol;
    // #1 and #4 are the two `<file>` positions.
    assert_eq!(file(1), file(4));
    assert_eq!(set.tree().symbol_count(), 3);
}

#[test]
fn records_max_depth_per_pattern() {
    let set = PatternSet::expect_valid("flat: a b\ndeep: a [(b | c)]");

    assert_eq!(set.pattern(PatternId::from_raw(0)).unwrap().max_depth, 0);
    assert_eq!(set.pattern(PatternId::from_raw(1)).unwrap().max_depth, 3);
}

#[test]
fn duplicate_name_is_rejected() {
    let mut builder = PatternSetBuilder::new();
    builder.add("a", "x").unwrap();

    let err = builder.add("a", "y").unwrap_err();

    assert_eq!(err, Error::DuplicatePattern("a".to_owned()));
    assert_eq!(err.to_string(), "pattern `a` is defined more than once");
    assert_eq!(builder.len(), 1);
}

#[test]
fn parse_error_names_the_pattern() {
    let mut builder = PatternSetBuilder::new();

    let err = builder.add("bad", "[x").unwrap_err();

    assert_eq!(
        err,
        Error::Parse {
            name: "bad".to_owned(),
            source: ParseError::Unclosed {
                open: '[',
                span: Span::new(0, 1),
            },
        }
    );
    insta::assert_snapshot!(err.to_string(), @"pattern `bad`: unclosed `[`");
}

#[test]
fn builder_stays_usable_after_error() {
    let mut builder = PatternSetBuilder::new();
    assert!(builder.add("bad", "a | ").is_err());

    let id = builder.add("good", "a").unwrap();

    assert_eq!(id, PatternId::from_raw(0));
    insta::assert_snapshot!(builder.build().dump(Colors::OFF), @r"
    P0 good:
      start: #0
      #0 a@0 → #1
      #1 ⊤@1
    ");
}

#[test]
fn build_reports_to_borrowed_tracer() {
    let mut builder = PatternSetBuilder::new();
    builder.add("one", "a").unwrap();

    let mut tracer = PrintTracer::new(Verbosity::Default, Colors::OFF);
    let set = builder.build_with_tracer(&mut tracer);

    assert_eq!(set.automaton().len(), 2);
    insta::assert_snapshot!(tracer.dump(), @r"
    P0 compile S0
      new #0 a@0
      start #0
      new #1 ⊤@1
    P0 done (terminal #1, depth 0)
    ");
}
