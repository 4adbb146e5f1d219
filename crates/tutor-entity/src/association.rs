//! Parent/child association maintenance.
//!
//! Children own the foreign key; the parent's child set is derived. An
//! [`Aggregate`] keeps both sides in step: linking a child writes the
//! parent id into it, unlinking clears it.

use tutor_core::traits::Entity;
use tutor_core::traits::entity::same_identity;

/// A child entity holding a foreign key to parent `P`.
pub trait BackReference<P: Entity>: Entity {
    /// The referenced parent id.
    fn parent_id(&self) -> Option<i64>;

    /// Point at another parent, or none.
    fn set_parent_id(&mut self, parent_id: Option<i64>);
}

/// A parent together with the children currently linked to it.
#[derive(Debug, Clone)]
pub struct Aggregate<P, C> {
    parent: P,
    children: Vec<C>,
}

impl<P: Entity, C: BackReference<P>> Aggregate<P, C> {
    /// Build from a stored parent and candidate children. Children that do
    /// not reference the parent are ignored.
    pub fn new(parent: P, children: Vec<C>) -> Self {
        let parent_id = parent.id();
        let children = children
            .into_iter()
            .filter(|child| parent_id.is_some() && child.parent_id() == parent_id)
            .collect();
        Self { parent, children }
    }

    /// The parent.
    pub fn parent(&self) -> &P {
        &self.parent
    }

    /// The linked children.
    pub fn children(&self) -> &[C] {
        &self.children
    }

    /// Link `child` to the parent. Returns `false` if a child with the same
    /// id is already linked.
    pub fn add(&mut self, mut child: C) -> bool {
        if self.children.iter().any(|c| same_identity(c, &child)) {
            return false;
        }
        child.set_parent_id(self.parent.id());
        self.children.push(child);
        true
    }

    /// Unlink the child with `child_id`, clearing its foreign key.
    pub fn remove(&mut self, child_id: i64) -> Option<C> {
        let index = self.children.iter().position(|c| c.id() == Some(child_id))?;
        let mut child = self.children.remove(index);
        child.set_parent_id(None);
        Some(child)
    }

    /// Replace the whole child set.
    ///
    /// Returns the previously linked children that are not part of the new
    /// set, with their foreign key cleared.
    pub fn replace(&mut self, children: Vec<C>) -> Vec<C> {
        let previous = std::mem::take(&mut self.children);
        let mut detached = Vec::new();
        for mut child in previous {
            if !children.iter().any(|c| same_identity(c, &child)) {
                child.set_parent_id(None);
                detached.push(child);
            }
        }
        for child in children {
            self.add(child);
        }
        detached
    }

    /// Split into parent and linked children.
    pub fn into_parts(self) -> (P, Vec<C>) {
        (self.parent, self.children)
    }
}
