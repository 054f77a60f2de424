//! The capability lattice of optic kinds.
//!
//! Every optic trait carries an associated `KIND` constant. Kinds are ordered
//! by how much they can do:
//!
//! ```text
//!           Iso
//!          /   \
//!       Lens   Prism
//!          \   /
//!        Optional
//!            |
//!        Traversal
//! ```
//!
//! Composing two optics yields an optic of the least upper bound of their
//! kinds, computed by [`OpticKind::join`]. The typed composition methods in
//! [`optics_compose`](super::optics_compose) follow the same table.
//!
//! # Examples
//!
//! ```
//! use optica::optics::OpticKind;
//!
//! assert_eq!(OpticKind::Lens.join(OpticKind::Prism), OpticKind::Optional);
//! assert_eq!(OpticKind::Iso.join(OpticKind::Lens), OpticKind::Lens);
//! assert!(OpticKind::Prism.is_subkind_of(OpticKind::Traversal));
//! ```

use std::fmt;

/// The five optic kinds, from most to least capable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpticKind {
    /// Lossless, total conversion in both directions.
    Iso,
    /// Exactly one focus.
    Lens,
    /// At most one focus, constructible from the focus alone.
    Prism,
    /// At most one focus.
    Optional,
    /// Zero or more foci.
    Traversal,
}

impl OpticKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Iso,
        Self::Lens,
        Self::Prism,
        Self::Optional,
        Self::Traversal,
    ];

    /// Returns the least upper bound of two kinds.
    ///
    /// This is the kind of the optic obtained by composing an optic of kind
    /// `self` with an optic of kind `other`. The operation is total,
    /// commutative, associative and idempotent, and [`OpticKind::Iso`] is its
    /// identity.
    #[must_use]
    pub const fn join(self, other: Self) -> Self {
        match (self, other) {
            (Self::Iso, kind) | (kind, Self::Iso) => kind,
            (Self::Traversal, _) | (_, Self::Traversal) => Self::Traversal,
            (Self::Lens, Self::Lens) => Self::Lens,
            (Self::Prism, Self::Prism) => Self::Prism,
            _ => Self::Optional,
        }
    }

    /// Returns `true` when every optic of kind `self` can be used as an optic
    /// of kind `other`.
    #[must_use]
    pub const fn is_subkind_of(self, other: Self) -> bool {
        self.join(other) as u8 == other as u8
    }

    /// The kind's name, as used in messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Iso => "Iso",
            Self::Lens => "Lens",
            Self::Prism => "Prism",
            Self::Optional => "Optional",
            Self::Traversal => "Traversal",
        }
    }
}

impl fmt::Display for OpticKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

static_assertions::const_assert!(matches!(
    OpticKind::Lens.join(OpticKind::Prism),
    OpticKind::Optional
));
static_assertions::const_assert!(OpticKind::Iso.is_subkind_of(OpticKind::Traversal));
static_assertions::const_assert!(!OpticKind::Optional.is_subkind_of(OpticKind::Lens));

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(OpticKind::Iso, OpticKind::Iso, OpticKind::Iso)]
    #[case(OpticKind::Iso, OpticKind::Prism, OpticKind::Prism)]
    #[case(OpticKind::Lens, OpticKind::Lens, OpticKind::Lens)]
    #[case(OpticKind::Lens, OpticKind::Prism, OpticKind::Optional)]
    #[case(OpticKind::Prism, OpticKind::Optional, OpticKind::Optional)]
    #[case(OpticKind::Optional, OpticKind::Traversal, OpticKind::Traversal)]
    #[case(OpticKind::Traversal, OpticKind::Iso, OpticKind::Traversal)]
    fn join_table(#[case] left: OpticKind, #[case] right: OpticKind, #[case] expected: OpticKind) {
        assert_eq!(left.join(right), expected);
    }

    #[test]
    fn join_is_commutative_and_idempotent() {
        for left in OpticKind::ALL {
            assert_eq!(left.join(left), left);
            for right in OpticKind::ALL {
                assert_eq!(left.join(right), right.join(left));
            }
        }
    }

    #[test]
    fn join_is_associative() {
        for a in OpticKind::ALL {
            for b in OpticKind::ALL {
                for c in OpticKind::ALL {
                    assert_eq!(a.join(b).join(c), a.join(b.join(c)));
                }
            }
        }
    }

    #[test]
    fn lens_and_prism_are_incomparable() {
        assert!(!OpticKind::Lens.is_subkind_of(OpticKind::Prism));
        assert!(!OpticKind::Prism.is_subkind_of(OpticKind::Lens));
        assert!(OpticKind::Lens.is_subkind_of(OpticKind::Optional));
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(OpticKind::Optional.to_string(), "Optional");
    }
}
