//! The mansion map
//!
//! A strict binary tree of locations. Each node owns its two optional
//! children, so the whole map is released with its entry node. Building and
//! releasing both use an explicit stack, so depth is bounded by the heap
//! rather than the call stack.

use crate::data::{LocationSpec, WorldConfig};
use crate::GameError;
use std::collections::HashMap;

/// Which of the two doors leaving a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Left,
    Right,
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Branch::Left => write!(f, "esquerda"),
            Branch::Right => write!(f, "direita"),
        }
    }
}

/// A room of the mansion
pub struct LocationNode {
    name: String,
    clue: Option<String>,
    left: Option<Box<LocationNode>>,
    right: Option<Box<LocationNode>>,
}

impl LocationNode {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The clue found here; an empty clue counts as none
    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref().filter(|c| !c.is_empty())
    }

    pub fn left(&self) -> Option<&LocationNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&LocationNode> {
        self.right.as_deref()
    }

    pub fn child(&self, branch: Branch) -> Option<&LocationNode> {
        match branch {
            Branch::Left => self.left(),
            Branch::Right => self.right(),
        }
    }

    /// A room with no way forward
    pub fn is_dead_end(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

}

// Shallow: children are shown by name only
impl std::fmt::Debug for LocationNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationNode")
            .field("name", &self.name)
            .field("clue", &self.clue)
            .field("left", &self.left().map(LocationNode::name))
            .field("right", &self.right().map(LocationNode::name))
            .finish()
    }
}

impl Drop for LocationNode {
    fn drop(&mut self) {
        let mut pending: Vec<Box<LocationNode>> =
            self.left.take().into_iter().chain(self.right.take()).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// The immutable location tree a run explores
#[derive(Debug)]
pub struct LocationMap {
    entry: LocationNode,
    len: usize,
}

impl LocationMap {
    /// Build the tree described by `world`, validating its wiring first
    pub fn build(world: &WorldConfig) -> Result<Self, GameError> {
        let mut specs: HashMap<&str, &LocationSpec> = HashMap::new();
        for spec in &world.locations {
            if specs.insert(spec.name.as_str(), spec).is_some() {
                return Err(GameError::DuplicateLocation(spec.name.clone()));
            }
        }

        if !specs.contains_key(world.entry.as_str()) {
            return Err(GameError::UnknownEntry(world.entry.clone()));
        }

        // Every room may be entered through at most one door, and never the
        // entry itself; together this keeps the reachable part a strict tree.
        let mut referenced: HashMap<&str, &str> = HashMap::new();
        for spec in &world.locations {
            for child in [&spec.left, &spec.right].into_iter().flatten() {
                if !specs.contains_key(child.as_str()) {
                    return Err(GameError::UnknownLocation {
                        parent: spec.name.clone(),
                        child: child.clone(),
                    });
                }
                if *child == world.entry || referenced.insert(child, &spec.name).is_some() {
                    return Err(GameError::SharedLocation(child.clone()));
                }
            }
        }

        let (entry, len) = Self::grow(&world.entry, &specs)?;
        if len < specs.len() {
            tracing::warn!(
                unreachable = specs.len() - len,
                "some locations cannot be reached from the entry"
            );
        }
        tracing::debug!(entry = %entry.name, locations = len, "location map built");

        Ok(Self { entry, len })
    }

    /// Assemble the rooms reachable from `entry`. Parents come before their
    /// children in `order`, so walking it backwards finds every child built.
    fn grow(entry: &str, specs: &HashMap<&str, &LocationSpec>) -> Result<(LocationNode, usize), GameError> {
        let mut order: Vec<&LocationSpec> = Vec::new();
        let mut stack = vec![entry];
        while let Some(name) = stack.pop() {
            let spec = specs
                .get(name)
                .copied()
                .ok_or_else(|| GameError::UnknownEntry(name.to_string()))?;
            order.push(spec);
            stack.extend(spec.right.as_deref());
            stack.extend(spec.left.as_deref());
        }

        let len = order.len();
        let mut built: HashMap<&str, LocationNode> = HashMap::with_capacity(len);
        for spec in order.into_iter().rev() {
            let mut adopt = |child: &Option<String>| {
                child
                    .as_deref()
                    .and_then(|name| built.remove(name))
                    .map(Box::new)
            };
            let node = LocationNode {
                name: spec.name.clone(),
                clue: spec.clue.clone(),
                left: adopt(&spec.left),
                right: adopt(&spec.right),
            };
            built.insert(spec.name.as_str(), node);
        }

        let root = built
            .remove(entry)
            .ok_or_else(|| GameError::UnknownEntry(entry.to_string()))?;
        Ok((root, len))
    }

    /// Where every run starts
    pub fn entry(&self) -> &LocationNode {
        &self.entry
    }

    /// Number of reachable locations
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Follow a sequence of doors from the entry
    pub fn walk(&self, path: &[Branch]) -> Option<&LocationNode> {
        path.iter()
            .try_fold(&self.entry, |node, branch| node.child(*branch))
    }
}
