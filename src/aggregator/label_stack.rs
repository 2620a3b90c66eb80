//! Label stack used while walking a shard's profile trees.
//!
//! Labels are pushed through [`LabelStack::push`], which hands back a
//! guard; the label is popped when the guard goes out of scope, so every
//! push is matched by exactly one pop on every exit path.

use crate::utils::config::{PATH_SEPARATOR, SEPARATOR_REPLACEMENT};
use std::ops::{Deref, DerefMut};

/// Ordered path from the traversal root to the current frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelStack {
    labels: Vec<String>,
}

impl LabelStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a label; it stays on the stack until the returned guard drops
    pub fn push(&mut self, label: impl AsRef<str>) -> LabelGuard<'_> {
        self.labels.push(sanitize_label(label.as_ref()));
        LabelGuard { stack: self }
    }

    pub fn depth(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Current path in folded form, e.g. `c1;n1;search;rewrite`
    pub fn path(&self) -> String {
        let mut path = String::with_capacity(self.labels.iter().map(|l| l.len() + 1).sum());
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                path.push(PATH_SEPARATOR);
            }
            path.push_str(label);
        }
        path
    }
}

/// Scoped stack slot; pops its label on drop
///
/// Derefs to the stack so nested frames are pushed through the guard.
#[derive(Debug)]
pub struct LabelGuard<'a> {
    stack: &'a mut LabelStack,
}

impl Deref for LabelGuard<'_> {
    type Target = LabelStack;

    fn deref(&self) -> &LabelStack {
        self.stack
    }
}

impl DerefMut for LabelGuard<'_> {
    fn deref_mut(&mut self) -> &mut LabelStack {
        self.stack
    }
}

impl Drop for LabelGuard<'_> {
    fn drop(&mut self) {
        self.stack.labels.pop();
    }
}

/// Make a label safe to use as a single folded-stack frame
///
/// The separator would split the label into two frames and a line break
/// would split the output line, so both are replaced.
pub fn sanitize_label(label: &str) -> String {
    label
        .chars()
        .map(|c| match c {
            PATH_SEPARATOR => SEPARATOR_REPLACEMENT,
            '\n' | '\r' => ' ',
            other => other,
        })
        .collect()
}
