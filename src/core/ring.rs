//! Rotation-aware stack storage.
//!
//! A [`Ring`] is a fixed-capacity circular buffer with a movable head. Index 0
//! is the top of the stack. Rotations in either direction, pushes and pops at
//! the top are all O(1): nothing is ever shifted.

/// Fixed-capacity circular stack of ranks.
///
/// Capacity is chosen at construction and is the total element count of the
/// problem, so either stack can hold everything at once.
///
/// # Example
///
/// ```rust
/// use stacksort::core::Ring;
///
/// let mut ring = Ring::from_slice(&[1, 2, 3], 3);
/// ring.rotate();
/// assert_eq!(ring.to_vec(), vec![2, 3, 1]);
/// ring.reverse_rotate();
/// assert_eq!(ring.top(), Some(1));
/// ```
#[derive(Clone, Debug)]
pub struct Ring {
    buf: Vec<u32>,
    head: usize,
    len: usize,
}

impl Ring {
    /// Create an empty ring able to hold `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0; capacity],
            head: 0,
            len: 0,
        }
    }

    /// Create a ring holding `items` (first item on top).
    ///
    /// Capacity is raised to `items.len()` if it is smaller.
    pub fn from_slice(items: &[u32], capacity: usize) -> Self {
        let mut buf = vec![0; capacity.max(items.len())];
        buf[..items.len()].copy_from_slice(items);
        Self {
            buf,
            head: 0,
            len: items.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    fn slot(&self, index: usize) -> usize {
        (self.head + index) % self.buf.len()
    }

    /// Element at logical position `index` (0 is the top).
    pub fn get(&self, index: usize) -> Option<u32> {
        (index < self.len).then(|| self.buf[self.slot(index)])
    }

    pub fn top(&self) -> Option<u32> {
        self.get(0)
    }

    /// Position of `value` counted from the top.
    pub fn position(&self, value: u32) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    /// Position of the smallest element, or `None` when empty.
    pub fn min_position(&self) -> Option<usize> {
        self.iter()
            .enumerate()
            .min_by_key(|&(_, v)| v)
            .map(|(i, _)| i)
    }

    /// Iterate from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.len).map(move |i| self.buf[self.slot(i)])
    }

    pub fn to_vec(&self) -> Vec<u32> {
        self.iter().collect()
    }

    /// Place `value` on top. Returns `false` when the ring is full.
    pub fn push_top(&mut self, value: u32) -> bool {
        if self.len == self.capacity() {
            return false;
        }
        self.head = (self.head + self.buf.len() - 1) % self.buf.len();
        self.buf[self.head] = value;
        self.len += 1;
        true
    }

    pub fn pop_top(&mut self) -> Option<u32> {
        if self.len == 0 {
            return None;
        }
        let value = self.buf[self.head];
        self.head = (self.head + 1) % self.buf.len();
        self.len -= 1;
        Some(value)
    }

    /// Exchange the two top elements. No-op with fewer than two.
    pub fn swap_top(&mut self) {
        if self.len < 2 {
            return;
        }
        let (first, second) = (self.slot(0), self.slot(1));
        self.buf.swap(first, second);
    }

    /// Move the top element to the bottom. No-op with fewer than two.
    pub fn rotate(&mut self) {
        if self.len < 2 {
            return;
        }
        let value = self.buf[self.head];
        let tail = self.slot(self.len);
        self.buf[tail] = value;
        self.head = (self.head + 1) % self.buf.len();
    }

    /// Move the bottom element to the top. No-op with fewer than two.
    pub fn reverse_rotate(&mut self) {
        if self.len < 2 {
            return;
        }
        let value = self.buf[self.slot(self.len - 1)];
        self.head = (self.head + self.buf.len() - 1) % self.buf.len();
        self.buf[self.head] = value;
    }
}
