// file: src/models/tree.rs
// description: labelled word tree rendered in bracketed form
// reference: bracketed tree notation, one child per line once a subtree gets wide

use serde::Serialize;
use std::fmt;

/// Column width at which a subtree stops being printed on one line.
pub const DEFAULT_MARGIN: usize = 70;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TreeChild {
    Leaf(String),
    Node(Tree),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tree {
    pub label: String,
    pub children: Vec<TreeChild>,
}

impl Tree {
    pub fn new(label: impl Into<String>, children: Vec<TreeChild>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }

    pub fn to_flat_string(&self) -> String {
        let children: Vec<String> = self
            .children
            .iter()
            .map(|child| match child {
                TreeChild::Leaf(word) => word.clone(),
                TreeChild::Node(tree) => tree.to_flat_string(),
            })
            .collect();
        format!("({} {})", self.label, children.join(" "))
    }

    /// Renders on one line when it fits within `margin` at the given indent,
    /// otherwise puts every child on its own line two columns deeper.
    pub fn pformat(&self, margin: usize, indent: usize) -> String {
        let flat = self.to_flat_string();
        if flat.chars().count() + indent < margin {
            return flat;
        }

        let child_indent = indent + 2;
        let mut out = format!("({}", self.label);
        for child in &self.children {
            out.push('\n');
            out.push_str(&" ".repeat(child_indent));
            match child {
                TreeChild::Leaf(word) => out.push_str(word),
                TreeChild::Node(tree) => out.push_str(&tree.pformat(margin, child_indent)),
            }
        }
        out.push(')');
        out
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pformat(DEFAULT_MARGIN, 0))
    }
}
