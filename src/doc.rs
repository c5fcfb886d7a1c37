//! The print fragment intermediate representation.
//!
//! Builders do not emit strings; they emit [`Fragment`] trees that describe
//! layout intent: literal text, break opportunities, grouping, and
//! indentation. Rendering a fragment tree to its final text is the printing
//! backend's job and happens elsewhere; within this crate fragments are
//! opaque values that dispatch returns unchanged.
//!
//! The vocabulary follows the classic Wadler/Prettier document algebra:
//!
//! | Constructor                 | Meaning                                        |
//! |-----------------------------|------------------------------------------------|
//! | [`Fragment::nil`]           | Nothing                                        |
//! | [`Fragment::text`]          | Verbatim text, never re-wrapped                |
//! | [`Fragment::space`]         | A single mandatory space                       |
//! | [`Fragment::line_or_space`] | Break point; a space when the group fits       |
//! | [`Fragment::line_or_nil`]   | Break point; nothing when the group fits       |
//! | [`Fragment::hard_line`]     | Unconditional line break                       |
//! | [`Fragment::list`]          | Concatenation of fragments                     |
//! | [`Fragment::group`]         | Fit-on-one-line-or-break-together region       |
//! | [`Fragment::indent`]        | One extra indentation level for enclosed lines |

use serde::{Deserialize, Serialize};

/// How a break point renders when its enclosing group fits on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineMode {
    /// Nothing when flat, a newline when broken.
    Soft,
    /// A space when flat, a newline when broken.
    Space,
    /// Always a newline.
    Hard,
}

/// A layout description produced by a builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fragment {
    Nil,
    Text(String),
    Line(LineMode),
    Seq(Vec<Fragment>),
    Group(Box<Fragment>),
    Indent(Box<Fragment>),
}

impl Fragment {
    /// The empty fragment.
    pub fn nil() -> Fragment {
        Fragment::Nil
    }

    /// Verbatim text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use galley::doc::Fragment;
    /// let f = Fragment::text("return");
    /// assert_eq!(f, Fragment::Text("return".into()));
    /// ```
    pub fn text(text: impl Into<String>) -> Fragment {
        Fragment::Text(text.into())
    }

    /// A mandatory single space.
    pub fn space() -> Fragment {
        Fragment::Text(" ".into())
    }

    /// A break point that renders as a space when its group fits.
    pub fn line_or_space() -> Fragment {
        Fragment::Line(LineMode::Space)
    }

    /// A break point that renders as nothing when its group fits.
    pub fn line_or_nil() -> Fragment {
        Fragment::Line(LineMode::Soft)
    }

    /// An unconditional line break.
    pub fn hard_line() -> Fragment {
        Fragment::Line(LineMode::Hard)
    }

    /// Concatenates fragments in order.
    pub fn list(items: Vec<Fragment>) -> Fragment {
        Fragment::Seq(items)
    }

    /// Interleaves `separator` between `items`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use galley::doc::Fragment;
    /// let f = Fragment::join(
    ///     Fragment::text(", "),
    ///     vec![Fragment::text("a"), Fragment::text("b")],
    /// );
    /// assert_eq!(
    ///     f,
    ///     Fragment::Seq(vec![
    ///         Fragment::text("a"),
    ///         Fragment::text(", "),
    ///         Fragment::text("b"),
    ///     ])
    /// );
    /// ```
    pub fn join(separator: Fragment, items: impl IntoIterator<Item = Fragment>) -> Fragment {
        let mut parts = Vec::new();
        for item in items {
            if !parts.is_empty() {
                parts.push(separator.clone());
            }
            parts.push(item);
        }
        Fragment::Seq(parts)
    }

    /// Appends `next` after `self`, flattening into an existing sequence.
    pub fn append(self, next: Fragment) -> Fragment {
        match self {
            Fragment::Seq(mut parts) => {
                parts.push(next);
                Fragment::Seq(parts)
            }
            first => Fragment::Seq(vec![first, next]),
        }
    }

    /// Wraps `self` in a group: render flat if it fits, otherwise break
    /// every break point inside.
    pub fn group(self) -> Fragment {
        Fragment::Group(Box::new(self))
    }

    /// Indents every line break inside `self` by one level.
    pub fn indent(self) -> Fragment {
        Fragment::Indent(Box::new(self))
    }

    /// True for the empty fragment.
    pub fn is_nil(&self) -> bool {
        matches!(self, Fragment::Nil)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_flattens_into_sequences() {
        let f = Fragment::text("a")
            .append(Fragment::text("b"))
            .append(Fragment::text("c"));
        assert_eq!(
            f,
            Fragment::Seq(vec![
                Fragment::text("a"),
                Fragment::text("b"),
                Fragment::text("c"),
            ])
        );
    }

    #[test]
    fn join_of_empty_iterator_is_an_empty_sequence() {
        assert_eq!(
            Fragment::join(Fragment::text(","), Vec::new()),
            Fragment::Seq(Vec::new())
        );
    }

    #[test]
    fn join_of_one_item_has_no_separator() {
        assert_eq!(
            Fragment::join(Fragment::text(","), vec![Fragment::text("only")]),
            Fragment::Seq(vec![Fragment::text("only")])
        );
    }

    #[test]
    fn group_and_indent_nest() {
        let f = Fragment::line_or_nil().indent().group();
        assert_eq!(
            f,
            Fragment::Group(Box::new(Fragment::Indent(Box::new(Fragment::Line(
                LineMode::Soft
            )))))
        );
    }

    #[test]
    fn fragments_survive_json() {
        let f = Fragment::join(
            Fragment::line_or_space(),
            vec![Fragment::text("x"), Fragment::text("y")],
        )
        .group();
        let json = serde_json::to_string(&f).unwrap();
        let back: Fragment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, f);
    }
}
