//! Console renderings of a [`Tree`]: a flat, ascending dump through [`fmt::Display`] and a
//! side view through [`Tree::display_sideways`].

use std::fmt;

use crate::tree::Tree;

/// Prints every element in ascending order, each followed by a space, then ends the line.
///
/// ```
/// use bintree::Tree;
///
/// let tree: Tree<_> = ["m", "d", "t", "b", "f"].into_iter().collect();
/// assert_eq!(tree.to_string(), "b d f m t \n");
/// ```
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in self.in_order() {
            write!(f, "{} ", element)?;
        }
        writeln!(f)
    }
}

/// Layout of the side view. A node at depth `d` (0 for the root) is indented by
/// `(d + margin) * indent_width` spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidewaysFormat {
    /// Spaces per level.
    pub indent_width: usize,
    /// Levels of indentation added in front of the root.
    pub margin: usize,
}

impl Default for SidewaysFormat {
    fn default() -> Self {
        Self {
            indent_width: 4,
            margin: 2,
        }
    }
}

/// Renders a tree on its side, one element per line, right subtree above its parent and left
/// subtree below. Created by [`Tree::display_sideways`].
pub struct DisplaySideways<'a, T> {
    tree: &'a Tree<T>,
    format: SidewaysFormat,
}

impl<'a, T> DisplaySideways<'a, T> {
    /// Replaces the whole layout.
    pub fn format(mut self, format: SidewaysFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets how many spaces each level is indented by.
    pub fn indent_width(mut self, indent_width: usize) -> Self {
        self.format.indent_width = indent_width;
        self
    }

    /// Sets how many levels of indentation come before the root.
    pub fn margin(mut self, margin: usize) -> Self {
        self.format.margin = margin;
        self
    }
}

impl<T> fmt::Display for DisplaySideways<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let SidewaysFormat {
            indent_width,
            margin,
        } = self.format;
        for (depth, element) in self.tree.sideways() {
            let indent = (depth + margin) * indent_width;
            writeln!(f, "{:indent$}{}", "", element, indent = indent)?;
        }
        Ok(())
    }
}

impl<T> Tree<T> {
    /// Side view of the tree with the default [`SidewaysFormat`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(
    ///     tree.display_sideways().margin(0).indent_width(2).to_string(),
    ///     "  3\n2\n  1\n"
    /// );
    /// ```
    pub fn display_sideways(&self) -> DisplaySideways<'_, T> {
        DisplaySideways {
            tree: self,
            format: SidewaysFormat::default(),
        }
    }
}
