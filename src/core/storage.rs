use crate::core::BodyHandle;
use crate::error::PhysicsError;
use crate::Result;

/// Storage for physics bodies
///
/// Bodies are kept in insertion order and are never removed individually, so
/// a handle is simply the insertion index.
#[derive(Debug, Clone)]
pub struct BodyStorage<T> {
    items: Vec<T>,
}

impl<T> BodyStorage<T> {
    /// Creates a new empty storage
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Adds an item to the storage and returns its handle
    pub fn add(&mut self, item: T) -> BodyHandle {
        let handle = BodyHandle(self.items.len());
        self.items.push(item);
        handle
    }

    /// Gets a reference to an item by its handle
    pub fn get(&self, handle: BodyHandle) -> Option<&T> {
        self.items.get(handle.0)
    }

    /// Gets a mutable reference to an item by its handle
    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut T> {
        self.items.get_mut(handle.0)
    }

    /// Gets a body by its handle, returning an error if not found
    pub fn get_body(&self, handle: BodyHandle) -> Result<&T> {
        self.get(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))
    }

    /// Gets a mutable reference to a body by its handle, returning an error if not found
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut T> {
        self.get_mut(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))
    }

    /// Borrows two distinct bodies mutably at the same time
    ///
    /// Returns `None` if the handles are equal or either is out of range.
    pub fn get_pair_mut(&mut self, a: BodyHandle, b: BodyHandle) -> Option<(&mut T, &mut T)> {
        if a.0 == b.0 || a.0 >= self.items.len() || b.0 >= self.items.len() {
            return None;
        }

        if a.0 < b.0 {
            let (head, tail) = self.items.split_at_mut(b.0);
            Some((&mut head[a.0], &mut tail[0]))
        } else {
            let (head, tail) = self.items.split_at_mut(a.0);
            Some((&mut tail[0], &mut head[b.0]))
        }
    }

    /// Returns the number of items in the storage
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the storage is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clears all items from the storage
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator over all items with their handles
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &T)> + '_ {
        self.items.iter().enumerate().map(|(i, item)| (BodyHandle(i), item))
    }

    /// Returns a mutable iterator over all items with their handles
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyHandle, &mut T)> + '_ {
        self.items.iter_mut().enumerate().map(|(i, item)| (BodyHandle(i), item))
    }

    /// Returns the items as a slice, in insertion order
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for BodyStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}
