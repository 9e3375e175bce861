//! Fixed-capacity particle pools.

/// A bounded collection of particles addressed by slot.
///
/// The backing storage is allocated once; spawning into a full pool hands the
/// particle back instead of growing, and removal swap-removes by slot.
#[derive(Debug, Clone)]
pub struct Pool<T> {
    slots: Vec<T>,
    capacity: usize,
}

impl<T> Pool<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Place `item` in the next free slot, returning the slot index.
    pub fn spawn(&mut self, item: T) -> Result<usize, T> {
        if self.is_full() {
            return Err(item);
        }
        self.slots.push(item);
        Ok(self.slots.len() - 1)
    }

    /// Keep only the particles for which `keep` returns true.
    pub fn retain_mut(&mut self, mut keep: impl FnMut(&mut T) -> bool) {
        let mut slot = 0;
        while slot < self.slots.len() {
            if keep(&mut self.slots[slot]) {
                slot += 1;
            } else {
                self.slots.swap_remove(slot);
            }
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.slots.iter_mut()
    }
}

impl<'a, T> IntoIterator for &'a Pool<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
