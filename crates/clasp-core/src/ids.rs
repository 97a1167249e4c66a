//! Index newtypes for the pattern tree and the position automaton.
//!
//! All ids are dense `u32` indices into the owning arrays. They carry no
//! lifetime, so holding one never borrows the tree or the automaton.

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, serde::Serialize)]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn from_raw(raw: u32) -> Self {
                Self(raw)
            }

            #[inline]
            pub const fn as_u32(self) -> u32 {
                self.0
            }

            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            /// Id for the next element of an array of `len` items.
            #[inline]
            pub fn next_of(len: usize) -> Self {
                Self(u32::try_from(len).expect(concat!(stringify!($name), " space exhausted")))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}{}", $prefix, self.0)
            }
        }
    };
}

define_id!(
    /// Identifier of one registered CLI pattern.
    ///
    /// Attached to every position created while compiling that pattern, so a
    /// downstream matcher knows which pattern an accepting run belongs to.
    PatternId,
    "P"
);

define_id!(
    /// Automaton state. Assigned monotonically by the automaton.
    PositionId,
    "#"
);

define_id!(
    /// Index into `PatternTree` sequences.
    SeqId,
    "S"
);

define_id!(
    /// Index into `PatternTree` alternations.
    AltId,
    "A"
);

define_id!(
    /// Index into `PatternTree` leaves.
    LeafId,
    "L"
);

define_id!(
    /// Index into the deduplicated `PatternTree` symbol table.
    SymbolId,
    "Y"
);
