//! Recency List Module
//!
//! Tracks access order for LRU eviction with O(1) operations.
//!
//! Keys are held in an arena-based doubly-linked list (head = most recently
//! used, tail = least recently used) with a HashMap from key to arena index.
//! No unsafe code: links are Vec indices instead of raw pointers.

use std::collections::HashMap;
use std::hash::Hash;

/// Sentinel value for null links in the doubly-linked list.
const NIL: usize = usize::MAX;

/// A node in the arena-based doubly-linked list.
///
/// `key` is None while the slot sits on the free list.
#[derive(Debug)]
struct Node<K> {
    key: Option<K>,
    prev: usize,
    next: usize,
}

// == Recency List ==
/// Access-order list over the cached keys.
///
/// Invariant: every key tracked here appears exactly once, and the map
/// always points at the arena slot currently holding that key.
#[derive(Debug)]
pub(crate) struct RecencyList<K> {
    /// Key -> arena index mapping
    map: HashMap<K, usize>,
    /// Arena of list nodes
    nodes: Vec<Node<K>>,
    /// Most recently used node
    head: usize,
    /// Least recently used node
    tail: usize,
    /// Head of the free list for recycling removed slots
    free_head: usize,
}

impl<K: Hash + Eq + Clone> RecencyList<K> {
    // == Constructor ==
    /// Creates an empty recency list sized for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            head: NIL,
            tail: NIL,
            free_head: NIL,
        }
    }

    // == Touch ==
    /// Marks a key as most recently used.
    ///
    /// An already tracked key is moved to the head; a new key is linked in
    /// at the head. Both paths are O(1).
    pub fn touch(&mut self, key: &K) {
        if let Some(&idx) = self.map.get(key) {
            self.move_to_head(idx);
        } else {
            let idx = self.alloc(key.clone());
            self.push_head(idx);
            self.map.insert(key.clone(), idx);
        }
    }

    // == Remove ==
    /// Removes a key from the list. No-op if the key is not tracked.
    pub fn remove(&mut self, key: &K) {
        if let Some(idx) = self.map.remove(key) {
            self.unlink(idx);
            self.nodes[idx].key = None;
            self.release(idx);
        }
    }

    // == Pop LRU ==
    /// Removes and returns the least recently used key.
    ///
    /// Returns None if the list is empty.
    pub fn pop_lru(&mut self) -> Option<K> {
        if self.tail == NIL {
            return None;
        }
        let idx = self.tail;
        self.unlink(idx);
        let key = self.nodes[idx].key.take();
        self.release(idx);
        if let Some(ref k) = key {
            self.map.remove(k);
        }
        key
    }

    // == Peek LRU ==
    /// Returns the least recently used key without removing it.
    #[allow(dead_code)]
    pub fn peek_lru(&self) -> Option<&K> {
        if self.tail == NIL {
            None
        } else {
            self.nodes[self.tail].key.as_ref()
        }
    }

    // == Length ==
    /// Returns the number of tracked keys.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    // == Is Empty ==
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    #[allow(dead_code)]
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    // == Clear ==
    /// Removes all tracked keys.
    pub fn clear(&mut self) {
        self.map.clear();
        self.nodes.clear();
        self.head = NIL;
        self.tail = NIL;
        self.free_head = NIL;
    }

    // == Internal Linked-List Operations ==

    /// Allocates an arena slot, reusing a free slot if available.
    fn alloc(&mut self, key: K) -> usize {
        if self.free_head != NIL {
            let idx = self.free_head;
            self.free_head = self.nodes[idx].next;
            self.nodes[idx] = Node {
                key: Some(key),
                prev: NIL,
                next: NIL,
            };
            idx
        } else {
            self.nodes.push(Node {
                key: Some(key),
                prev: NIL,
                next: NIL,
            });
            self.nodes.len() - 1
        }
    }

    /// Returns an unlinked slot to the free list.
    fn release(&mut self, idx: usize) {
        self.nodes[idx].next = self.free_head;
        self.free_head = idx;
    }

    /// Detaches the node at `idx` from the list without freeing the slot.
    fn unlink(&mut self, idx: usize) {
        let prev = self.nodes[idx].prev;
        let next = self.nodes[idx].next;

        if prev != NIL {
            self.nodes[prev].next = next;
        } else {
            self.head = next;
        }

        if next != NIL {
            self.nodes[next].prev = prev;
        } else {
            self.tail = prev;
        }

        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = NIL;
    }

    /// Links the node at `idx` in at the head (most recently used).
    fn push_head(&mut self, idx: usize) {
        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = self.head;

        if self.head != NIL {
            self.nodes[self.head].prev = idx;
        }
        self.head = idx;

        if self.tail == NIL {
            self.tail = idx;
        }
    }

    /// Moves an existing node to the head (most recently used).
    fn move_to_head(&mut self, idx: usize) {
        if self.head == idx {
            return;
        }
        self.unlink(idx);
        self.push_head(idx);
    }
}
