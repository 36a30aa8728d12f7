//! Lookup helpers over the immediate children of a node
//!
//! Lookups are deliberately shallow: each helper scans one child sequence.
//! Deeper lookups are composed by calling them once per level of the tree.

use crate::facility::error::LocationError;
use crate::types::{LocationId, LocationKind};

/// A node that can be found among its siblings by id
pub trait Identified {
    /// Kind of node, used in error reports
    const KIND: LocationKind;

    /// Identifier of the node
    fn location_id(&self) -> LocationId;

    /// Structural equality used when detaching a child
    ///
    /// Measurements compare by bit pattern, so a node holding NaN still
    /// matches itself.
    fn same_node(&self, other: &Self) -> bool;
}

/// Pairwise [`Identified::same_node`] over two child sequences
pub(crate) fn same_children<T: Identified>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_node(y))
}

/// Find the first child with the given id
pub fn find_child_by_id<T: Identified>(children: &[T], id: LocationId) -> Result<&T, LocationError> {
    children
        .iter()
        .find(|child| child.location_id() == id)
        .ok_or_else(|| LocationError::not_found(T::KIND, id))
}

/// Find the first child with the given id, mutably
pub fn find_child_by_id_mut<T: Identified>(
    children: &mut [T],
    id: LocationId,
) -> Result<&mut T, LocationError> {
    children
        .iter_mut()
        .find(|child| child.location_id() == id)
        .ok_or_else(|| LocationError::not_found(T::KIND, id))
}

/// Detach the first child with the given id
pub fn remove_child_by_id<T: Identified>(
    children: &mut Vec<T>,
    id: LocationId,
) -> Result<T, LocationError> {
    let pos = children
        .iter()
        .position(|child| child.location_id() == id)
        .ok_or_else(|| LocationError::not_found(T::KIND, id))?;
    Ok(children.remove(pos))
}

/// Detach the first child structurally equal to `target`
pub(crate) fn remove_equal_child<T: Identified>(
    children: &mut Vec<T>,
    target: &T,
) -> Result<T, LocationError> {
    let pos = children
        .iter()
        .position(|child| child.same_node(target))
        .ok_or_else(|| LocationError::not_found(T::KIND, target.location_id()))?;
    Ok(children.remove(pos))
}
