//! Structured, positional decode errors and their tree rendering.
//!
//! A failed decode produces a [`DecodeErrors`]: a [`FreeSemigroup`] of
//! [`DecodeError`] nodes. Leaves carry the offending JSON and what was
//! expected; the other shapes say *where* the failure happened (which key,
//! index, union member, lazy definition) and hold the errors underneath.
//!
//! [`draw`] turns the errors into an indented outline:
//!
//! ```rust
//! use optica::decoder::{draw, DecodeError, FieldKind};
//! use serde_json::json;
//!
//! let errors = DecodeError::wrap(
//!     "cannot decode struct".to_string(),
//!     DecodeError::key(
//!         "name",
//!         FieldKind::Required,
//!         DecodeError::leaf(Some(json!(1)), "string".to_string()),
//!     ),
//! );
//!
//! assert_eq!(
//!     draw(&errors),
//!     "cannot decode struct\n└─ required property \"name\"\n   └─ cannot decode 1, \
//!      should be string"
//! );
//! ```

use std::fmt::Display;

use serde_json::Value;

use super::FreeSemigroup;

/// Whether a key or index was required or optional where it failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// The position had to be present.
    Required,
    /// The position could be absent.
    Optional,
}

impl FieldKind {
    const fn label(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Optional => "optional",
        }
    }
}

/// One node of a decoding failure.
#[derive(Clone, Debug, PartialEq)]
pub enum DecodeError<E> {
    /// The input did not have the expected shape. `actual` is `None` when
    /// the input was absent.
    Leaf {
        /// The offending input.
        actual: Option<Value>,
        /// What was expected.
        error: E,
    },
    /// Failures under an object key.
    Key {
        /// The key.
        key: String,
        /// Whether the key was required.
        kind: FieldKind,
        /// The nested failures.
        errors: Box<FreeSemigroup<Self>>,
    },
    /// Failures under an array index.
    Index {
        /// The index.
        index: usize,
        /// Whether the index was required.
        kind: FieldKind,
        /// The nested failures.
        errors: Box<FreeSemigroup<Self>>,
    },
    /// Failures of one member of a union.
    Member {
        /// The position of the member in the union.
        index: usize,
        /// The nested failures.
        errors: Box<FreeSemigroup<Self>>,
    },
    /// Failures inside a lazily defined decoder.
    Lazy {
        /// The identifier of the lazy definition.
        id: String,
        /// The nested failures.
        errors: Box<FreeSemigroup<Self>>,
    },
    /// Failures under a custom message.
    Wrap {
        /// The message.
        error: E,
        /// The nested failures.
        errors: Box<FreeSemigroup<Self>>,
    },
}

/// The failures of a decode, as produced by every decoder in this crate.
pub type DecodeErrors = FreeSemigroup<DecodeError<String>>;

impl<E> DecodeError<E> {
    /// A single leaf failure.
    #[must_use]
    pub const fn leaf(actual: Option<Value>, error: E) -> FreeSemigroup<Self> {
        FreeSemigroup::of(Self::Leaf { actual, error })
    }

    /// Failures under `key`.
    #[must_use]
    pub fn key(
        key: impl Into<String>,
        kind: FieldKind,
        errors: FreeSemigroup<Self>,
    ) -> FreeSemigroup<Self> {
        FreeSemigroup::of(Self::Key {
            key: key.into(),
            kind,
            errors: Box::new(errors),
        })
    }

    /// Failures under `index`.
    #[must_use]
    pub fn index(
        index: usize,
        kind: FieldKind,
        errors: FreeSemigroup<Self>,
    ) -> FreeSemigroup<Self> {
        FreeSemigroup::of(Self::Index {
            index,
            kind,
            errors: Box::new(errors),
        })
    }

    /// Failures of union member `index`.
    #[must_use]
    pub fn member(index: usize, errors: FreeSemigroup<Self>) -> FreeSemigroup<Self> {
        FreeSemigroup::of(Self::Member {
            index,
            errors: Box::new(errors),
        })
    }

    /// Failures inside the lazy definition `id`.
    #[must_use]
    pub fn lazy(id: impl Into<String>, errors: FreeSemigroup<Self>) -> FreeSemigroup<Self> {
        FreeSemigroup::of(Self::Lazy {
            id: id.into(),
            errors: Box::new(errors),
        })
    }

    /// Failures under the message `error`.
    #[must_use]
    pub fn wrap(error: E, errors: FreeSemigroup<Self>) -> FreeSemigroup<Self> {
        FreeSemigroup::of(Self::Wrap {
            error,
            errors: Box::new(errors),
        })
    }
}

/// A rose tree, the intermediate form of [`draw`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<A> {
    /// The label of this node.
    pub value: A,
    /// The children, in order.
    pub forest: Vec<Tree<A>>,
}

impl<A> Tree<A> {
    const fn leaf(value: A) -> Self {
        Self {
            value,
            forest: Vec::new(),
        }
    }
}

fn describe(actual: Option<&Value>) -> String {
    actual.map_or_else(|| "undefined".to_string(), Value::to_string)
}

fn to_tree<E: Display>(error: &DecodeError<E>) -> Tree<String> {
    match error {
        DecodeError::Leaf { actual, error } => Tree::leaf(format!(
            "cannot decode {}, should be {error}",
            describe(actual.as_ref())
        )),
        DecodeError::Key { key, kind, errors } => Tree {
            value: format!("{} property \"{key}\"", kind.label()),
            forest: to_forest(errors),
        },
        DecodeError::Index { index, kind, errors } => Tree {
            value: format!("{} index {index}", kind.label()),
            forest: to_forest(errors),
        },
        DecodeError::Member { index, errors } => Tree {
            value: format!("member {index}"),
            forest: to_forest(errors),
        },
        DecodeError::Lazy { id, errors } => Tree {
            value: format!("lazy type {id}"),
            forest: to_forest(errors),
        },
        DecodeError::Wrap { error, errors } => Tree {
            value: error.to_string(),
            forest: to_forest(errors),
        },
    }
}

/// Converts the errors into one tree per top-level failure.
#[must_use]
pub fn to_forest<E: Display>(errors: &FreeSemigroup<DecodeError<E>>) -> Vec<Tree<String>> {
    errors.iter().map(to_tree).collect()
}

fn draw_forest(output: &mut String, indentation: &str, forest: &[Tree<String>]) {
    let count = forest.len();
    for (position, tree) in forest.iter().enumerate() {
        let is_last = position + 1 == count;
        output.push_str(indentation);
        output.push_str(if is_last { "└─ " } else { "├─ " });
        output.push_str(&tree.value);

        let continuation = if count > 1 && !is_last { "│  " } else { "   " };
        draw_forest(output, &format!("{indentation}{continuation}"), &tree.forest);
    }
}

/// Renders one tree as an outline.
#[must_use]
pub fn draw_tree(tree: &Tree<String>) -> String {
    let mut output = tree.value.clone();
    draw_forest(&mut output, "\n", &tree.forest);
    output
}

/// Renders the errors as an outline, one tree per top-level failure.
#[must_use]
pub fn draw<E: Display>(errors: &FreeSemigroup<DecodeError<E>>) -> String {
    to_forest(errors)
        .iter()
        .map(draw_tree)
        .collect::<Vec<_>>()
        .join("\n")
}
