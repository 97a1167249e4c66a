use crate::{Interner, Name};

#[test]
fn intern_deduplicates() {
    let mut interner = Interner::new();

    let a = interner.intern("--force");
    let b = interner.intern("--force");
    let c = interner.intern("add");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.len(), 2);
}

#[test]
fn resolve_roundtrip() {
    let mut interner = Interner::new();

    let name = interner.intern("file");
    assert_eq!(interner.resolve(name), "file");
}

#[test]
fn intern_owned_hits_existing() {
    let mut interner = Interner::new();

    let a = interner.intern("int");
    let b = interner.intern_owned("int".to_string());

    assert_eq!(a, b);
    assert_eq!(interner.len(), 1);
}

#[test]
fn names_are_ordered_by_insertion() {
    let mut interner = Interner::new();

    let z = interner.intern("z");
    let a = interner.intern("a");

    assert!(z < a);
}

#[test]
fn try_resolve_rejects_foreign_name() {
    let interner = Interner::new();

    assert!(interner.is_empty());
    assert_eq!(interner.try_resolve(Name::from_raw(3)), None);
}

#[test]
fn iter_yields_all_strings() {
    let mut interner = Interner::new();
    let a = interner.intern("alpha");
    let b = interner.intern("beta");

    let items: Vec<_> = interner.iter().collect();
    assert_eq!(items, vec![(a, "alpha"), (b, "beta")]);
}
