//! Circular intrusive doubly linked list backed by `SlotArena`.
//!
//! Nodes live in a `SlotArena` and link to each other by `SlotId`. One extra
//! node, the root sentinel, is allocated at construction and never holds a
//! value; every other node sits on a ring that starts and ends at the root.
//! Because the ring is never empty, push/remove/move never branch on
//! "is this the first/last node".
//!
//! ## Architecture
//!
//! ```text
//!   arena (SlotArena<Node<T>>)
//!   ┌────────┬──────────────────────────────────────────┐
//!   │ SlotId │ Node { value, prev, next }               │
//!   ├────────┼──────────────────────────────────────────┤
//!   │ root   │ { value: None,    prev: id_3, next: id_1 }│
//!   │ id_1   │ { value: Some(A), prev: root, next: id_2 }│
//!   │ id_2   │ { value: Some(B), prev: id_1, next: id_3 }│
//!   │ id_3   │ { value: Some(C), prev: id_2, next: root }│
//!   └────────┴──────────────────────────────────────────┘
//!
//!        ┌──────────────────────────────────────────┐
//!        ▼                                          │
//!      [root] ◄──► [id_1] ◄──► [id_2] ◄──► [id_3] ◄─┘
//!              front (MRU)             back (LRU)
//! ```
//!
//! ## Operations
//! - `push_front(v)`: link after root
//! - `push_back(v)`: link before root
//! - `move_to_front(id)` / `move_to_back(id)`: unlink + relink next to root
//! - `remove(id)`: unlink + free slot in arena
//! - `put_new_value(id, v)`: swap payload, position untouched
//!
//! ## Performance
//! - every mutation: O(1)
//! - `iter`: O(n)
//!
//! Handing the root, or a handle whose node was already removed, to
//! `remove`/`put_new_value` is a bug in the caller and panics.
//! `debug_validate_invariants()` is available in debug/test builds.

use crate::ds::slot_arena::{SlotArena, SlotId};

#[derive(Debug)]
struct Node<T> {
    // `None` only on the root sentinel.
    value: Option<T>,
    prev: SlotId,
    next: SlotId,
}

#[derive(Debug)]
/// Sentinel-rooted ring that stores nodes in a `SlotArena` and links them via `SlotId`.
pub struct IntrusiveList<T> {
    arena: SlotArena<Node<T>>,
    root: SlotId,
}

impl<T> IntrusiveList<T> {
    /// Creates an empty list (just the root sentinel).
    pub fn new() -> Self {
        Self::from_arena(SlotArena::new())
    }

    /// Creates an empty list with room for `capacity` nodes besides the root.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_arena(SlotArena::with_capacity(capacity.saturating_add(1)))
    }

    fn from_arena(mut arena: SlotArena<Node<T>>) -> Self {
        let root = Self::alloc_root(&mut arena);
        Self { arena, root }
    }

    fn alloc_root(arena: &mut SlotArena<Node<T>>) -> SlotId {
        let root = arena.insert(Node {
            value: None,
            prev: SlotId(0),
            next: SlotId(0),
        });
        // A fresh or cleared arena always hands out slot 0 first.
        debug_assert_eq!(root, SlotId(0));
        root
    }

    /// Returns the number of nodes in the list, root excluded.
    pub fn len(&self) -> usize {
        self.arena.len() - 1
    }

    /// Returns `true` if only the root is on the ring.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of arena slots allocated so far, root included.
    pub fn slot_count(&self) -> usize {
        self.arena.slot_count()
    }

    /// Returns `true` if `id` is a live, non-root node of this list.
    pub fn contains(&self, id: SlotId) -> bool {
        id != self.root && self.arena.contains(id)
    }

    /// Returns the id of the front (MRU) node.
    pub fn front(&self) -> Option<SlotId> {
        let next = self.node(self.root).next;
        (next != self.root).then_some(next)
    }

    /// Returns the id of the back (LRU) node.
    pub fn back(&self) -> Option<SlotId> {
        let prev = self.node(self.root).prev;
        (prev != self.root).then_some(prev)
    }

    /// Returns the node after `id` toward the back, or `None` at the end of the ring.
    pub fn next_id(&self, id: SlotId) -> Option<SlotId> {
        let next = self.arena.get(id)?.next;
        (next != self.root).then_some(next)
    }

    /// Returns the value at the front (MRU) of the list.
    pub fn front_value(&self) -> Option<&T> {
        self.front().and_then(|id| self.get(id))
    }

    /// Returns the value at the back (LRU) of the list.
    pub fn back_value(&self) -> Option<&T> {
        self.back().and_then(|id| self.get(id))
    }

    /// Returns the value for a node id, if present.
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.arena.get(id).and_then(|node| node.value.as_ref())
    }

    /// Returns a mutable reference to a node value, if present.
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.arena.get_mut(id).and_then(|node| node.value.as_mut())
    }

    /// Returns an iterator from front to back.
    pub fn iter(&self) -> IntrusiveListIter<'_, T> {
        IntrusiveListIter {
            list: self,
            current: self.node(self.root).next,
        }
    }

    /// Returns an iterator of SlotIds from front to back.
    pub fn iter_ids(&self) -> IntrusiveListIdIter<'_, T> {
        IntrusiveListIdIter {
            list: self,
            current: self.node(self.root).next,
        }
    }

    /// Returns an iterator of `(SlotId, &T)` from front to back.
    pub fn iter_entries(&self) -> IntrusiveListEntryIter<'_, T> {
        IntrusiveListEntryIter {
            list: self,
            current: self.node(self.root).next,
        }
    }

    /// Inserts a new node right after the root and returns its `SlotId`.
    pub fn push_front(&mut self, value: T) -> SlotId {
        let id = self.alloc(value);
        self.link_after(id, self.root);
        id
    }

    /// Inserts a new node right before the root and returns its `SlotId`.
    pub fn push_back(&mut self, value: T) -> SlotId {
        let id = self.alloc(value);
        let last = self.node(self.root).prev;
        self.link_after(id, last);
        id
    }

    /// Removes and returns the front value.
    pub fn pop_front(&mut self) -> Option<T> {
        let id = self.front()?;
        Some(self.remove(id))
    }

    /// Removes and returns the back value.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.back()?;
        Some(self.remove(id))
    }

    /// Unlinks node `id` and returns its value.
    ///
    /// # Panics
    ///
    /// Panics if `id` is the root or is not a live node.
    pub fn remove(&mut self, id: SlotId) -> T {
        self.assert_live(id, "remove");
        self.unlink(id);
        match self.arena.remove(id).and_then(|node| node.value) {
            Some(value) => value,
            None => unreachable!("live non-root node without a value"),
        }
    }

    /// Replaces the value stored in `id` without moving it; returns the old value.
    ///
    /// # Panics
    ///
    /// Panics if `id` is the root or is not a live node.
    pub fn put_new_value(&mut self, id: SlotId, value: T) -> T {
        self.assert_live(id, "put_new_value");
        match self.node_mut(id).value.replace(value) {
            Some(old) => old,
            None => unreachable!("live non-root node without a value"),
        }
    }

    /// Moves an existing node right after the root.
    ///
    /// Returns `false` (and does nothing) if `id` is the root or not a live node.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if !self.contains(id) {
            return false;
        }
        if self.node(self.root).next == id {
            return true;
        }
        self.unlink(id);
        self.link_after(id, self.root);
        true
    }

    /// Moves an existing node right before the root.
    ///
    /// Returns `false` (and does nothing) if `id` is the root or not a live node.
    pub fn move_to_back(&mut self, id: SlotId) -> bool {
        if !self.contains(id) {
            return false;
        }
        if self.node(self.root).prev == id {
            return true;
        }
        self.unlink(id);
        let last = self.node(self.root).prev;
        self.link_after(id, last);
        true
    }

    /// Drops every node and resets the ring to just the root.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = Self::alloc_root(&mut self.arena);
    }

    fn alloc(&mut self, value: T) -> SlotId {
        self.arena.insert(Node {
            value: Some(value),
            prev: self.root,
            next: self.root,
        })
    }

    fn node(&self, id: SlotId) -> &Node<T> {
        match self.arena.get(id) {
            Some(node) => node,
            None => panic!("intrusive list: dangling handle {:?}", id),
        }
    }

    fn node_mut(&mut self, id: SlotId) -> &mut Node<T> {
        match self.arena.get_mut(id) {
            Some(node) => node,
            None => panic!("intrusive list: dangling handle {:?}", id),
        }
    }

    fn assert_live(&self, id: SlotId, op: &str) {
        assert!(id != self.root, "intrusive list: {op} called on the root sentinel");
        assert!(
            self.arena.contains(id),
            "intrusive list: {op} called on removed node {:?}",
            id
        );
    }

    // Splices `id` between `anchor` and `anchor.next`.
    fn link_after(&mut self, id: SlotId, anchor: SlotId) {
        let next = self.node(anchor).next;
        {
            let node = self.node_mut(id);
            node.prev = anchor;
            node.next = next;
        }
        self.node_mut(anchor).next = id;
        self.node_mut(next).prev = id;
    }

    // Closes the gap around `id` and leaves it self-linked.
    fn unlink(&mut self, id: SlotId) {
        let (prev, next) = {
            let node = self.node(id);
            (node.prev, node.next)
        };
        self.node_mut(prev).next = next;
        self.node_mut(next).prev = prev;
        let node = self.node_mut(id);
        node.prev = id;
        node.next = id;
    }

    #[cfg(any(test, debug_assertions))]
    /// Returns the list order as SlotIds from front to back.
    pub fn debug_snapshot_ids(&self) -> Vec<SlotId> {
        self.iter_ids().collect()
    }

    #[cfg(any(test, debug_assertions))]
    /// Walks the ring from the root and panics on a broken link or count.
    pub fn debug_validate_invariants(&self) {
        let root = self.node(self.root);
        assert!(root.value.is_none(), "root sentinel holds a value");

        let mut seen = std::collections::HashSet::new();
        let mut count = 0usize;
        let mut prev = self.root;
        let mut current = root.next;

        while current != self.root {
            assert!(seen.insert(current), "cycle that skips the root");
            let node = self.arena.get(current).expect("node missing");
            assert!(node.value.is_some(), "non-root node without a value");
            assert_eq!(node.prev, prev);
            prev = current;
            current = node.next;
            count += 1;
            assert!(count <= self.len());
        }

        assert_eq!(root.prev, prev);
        assert_eq!(count, self.len());
    }
}

pub struct IntrusiveListIter<'a, T> {
    list: &'a IntrusiveList<T>,
    current: SlotId,
}

impl<'a, T> Iterator for IntrusiveListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == self.list.root {
            return None;
        }
        let node = self.list.arena.get(self.current)?;
        self.current = node.next;
        node.value.as_ref()
    }
}

/// Iterator over SlotIds from front to back.
pub struct IntrusiveListIdIter<'a, T> {
    list: &'a IntrusiveList<T>,
    current: SlotId,
}

impl<'a, T> Iterator for IntrusiveListIdIter<'a, T> {
    type Item = SlotId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == self.list.root {
            return None;
        }
        let id = self.current;
        self.current = self.list.arena.get(id)?.next;
        Some(id)
    }
}

/// Iterator over `(SlotId, &T)` pairs from front to back.
pub struct IntrusiveListEntryIter<'a, T> {
    list: &'a IntrusiveList<T>,
    current: SlotId,
}

impl<'a, T> Iterator for IntrusiveListEntryIter<'a, T> {
    type Item = (SlotId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == self.list.root {
            return None;
        }
        let id = self.current;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        node.value.as_ref().map(|value| (id, value))
    }
}

impl<'a, T> IntoIterator for &'a IntrusiveList<T> {
    type Item = &'a T;
    type IntoIter = IntrusiveListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for IntrusiveList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<T: Copy>(list: &IntrusiveList<T>) -> Vec<T> {
        list.iter().copied().collect()
    }

    #[test]
    fn intrusive_list_basic_ops() {
        let mut list = IntrusiveList::new();
        let a = list.push_front("a");
        let b = list.push_back("b");
        let c = list.push_back("c");

        assert_eq!(list.front_value(), Some(&"a"));
        assert_eq!(list.back_value(), Some(&"c"));
        assert_eq!(list.len(), 3);

        assert!(list.move_to_front(c));
        assert_eq!(list.front_value(), Some(&"c"));
        assert_eq!(list.back_value(), Some(&"b"));

        assert_eq!(list.remove(b), "b");
        assert_eq!(list.len(), 2);

        assert_eq!(list.pop_front(), Some("c"));
        assert_eq!(list.pop_back(), Some("a"));
        assert!(list.is_empty());

        assert!(!list.contains(a));
        list.debug_validate_invariants();
    }

    #[test]
    fn empty_list_has_no_front_or_back() {
        let list: IntrusiveList<u8> = IntrusiveList::new();
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.len(), 0);
        assert_eq!(list.iter().count(), 0);
        list.debug_validate_invariants();
    }

    #[test]
    fn single_node_is_both_front_and_back() {
        let mut list = IntrusiveList::new();
        let a = list.push_back(1);
        assert_eq!(list.front(), Some(a));
        assert_eq!(list.back(), Some(a));
        assert!(list.move_to_front(a));
        assert!(list.move_to_back(a));
        assert_eq!(values(&list), vec![1]);
        list.debug_validate_invariants();
    }

    #[test]
    fn push_front_orders_newest_first() {
        let mut list = IntrusiveList::new();
        list.push_front(1);
        list.push_front(2);
        list.push_front(3);
        assert_eq!(values(&list), vec![3, 2, 1]);
    }

    #[test]
    fn intrusive_list_iter_order() {
        let mut list = IntrusiveList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);
        assert_eq!(values(&list), vec![1, 2, 3]);
        // A fresh call starts over from the front.
        assert_eq!(values(&list), vec![1, 2, 3]);
    }

    #[test]
    fn intrusive_list_move_to_front_back_edges() {
        let mut list = IntrusiveList::new();
        let a = list.push_back("a");
        let b = list.push_back("b");
        let c = list.push_back("c");

        assert!(list.move_to_front(a));
        assert_eq!(values(&list), vec!["a", "b", "c"]);

        assert!(list.move_to_back(a));
        assert_eq!(values(&list), vec!["b", "c", "a"]);

        assert!(list.move_to_front(c));
        assert_eq!(values(&list), vec!["c", "b", "a"]);

        assert!(list.move_to_back(b));
        assert_eq!(values(&list), vec!["c", "a", "b"]);

        assert!(list.contains(b));
        list.debug_validate_invariants();
    }

    #[test]
    fn move_on_root_or_removed_node_is_noop() {
        let mut list = IntrusiveList::new();
        let a = list.push_back(1);
        let b = list.push_back(2);
        assert!(!list.move_to_front(SlotId(0)));
        assert!(!list.move_to_back(SlotId(0)));

        list.remove(a);
        assert!(!list.move_to_front(a));
        assert_eq!(list.front(), Some(b));
        list.debug_validate_invariants();
    }

    #[test]
    fn intrusive_list_remove_middle_and_ends() {
        let mut list = IntrusiveList::new();
        let a = list.push_back("a");
        let b = list.push_back("b");
        let c = list.push_back("c");

        assert_eq!(list.remove(b), "b");
        assert_eq!(values(&list), vec!["a", "c"]);

        assert_eq!(list.remove(a), "a");
        assert_eq!(list.front_value(), Some(&"c"));
        assert_eq!(list.back_value(), Some(&"c"));

        assert_eq!(list.remove(c), "c");
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        list.debug_validate_invariants();
    }

    #[test]
    #[should_panic(expected = "root sentinel")]
    fn remove_root_panics() {
        let mut list: IntrusiveList<u8> = IntrusiveList::new();
        list.push_back(1);
        list.remove(SlotId(0));
    }

    #[test]
    #[should_panic(expected = "removed node")]
    fn remove_twice_panics() {
        let mut list = IntrusiveList::new();
        let a = list.push_back(1);
        list.remove(a);
        list.remove(a);
    }

    #[test]
    fn put_new_value_keeps_position() {
        let mut list = IntrusiveList::new();
        let a = list.push_back(1);
        list.push_back(2);
        assert_eq!(list.put_new_value(a, 10), 1);
        assert_eq!(values(&list), vec![10, 2]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    #[should_panic(expected = "root sentinel")]
    fn put_new_value_on_root_panics() {
        let mut list = IntrusiveList::new();
        list.push_back(1);
        list.put_new_value(SlotId(0), 2);
    }

    #[test]
    fn removed_slots_are_reused() {
        let mut list = IntrusiveList::with_capacity(2);
        let a = list.push_back(1);
        list.push_back(2);
        assert_eq!(list.slot_count(), 3);
        list.remove(a);
        let c = list.push_front(3);
        assert_eq!(c, a);
        assert_eq!(list.slot_count(), 3);
        assert_eq!(values(&list), vec![3, 2]);
    }

    #[test]
    fn intrusive_list_clear_resets_state() {
        let mut list = IntrusiveList::new();
        let a = list.push_back(1);
        list.push_back(2);
        list.clear();
        assert!(list.is_empty());
        assert!(!list.contains(a));
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_back(5);
        assert_eq!(values(&list), vec![5]);
        list.debug_validate_invariants();
    }

    #[test]
    fn intrusive_list_get_mut_updates_value() {
        let mut list = IntrusiveList::new();
        let id = list.push_back(10);
        if let Some(value) = list.get_mut(id) {
            *value = 20;
        }
        assert_eq!(list.get(id), Some(&20));
        assert_eq!(list.get(SlotId(0)), None);
    }

    #[test]
    fn intrusive_list_id_and_entry_iters() {
        let mut list = IntrusiveList::new();
        let a = list.push_back("a");
        let b = list.push_back("b");
        let c = list.push_back("c");

        assert_eq!(list.front(), Some(a));
        assert_eq!(list.back(), Some(c));

        let ids: Vec<_> = list.iter_ids().collect();
        assert_eq!(ids, vec![a, b, c]);
        assert_eq!(list.debug_snapshot_ids(), ids);

        assert_eq!(list.next_id(a), Some(b));
        assert_eq!(list.next_id(c), None);

        let entries: Vec<_> = list.iter_entries().map(|(id, v)| (id, *v)).collect();
        assert_eq!(entries, vec![(a, "a"), (b, "b"), (c, "c")]);
    }

    #[test]
    fn intrusive_list_debug_invariants_hold() {
        let mut list = IntrusiveList::new();
        let a = list.push_back(1);
        let b = list.push_back(2);
        let c = list.push_back(3);
        list.move_to_front(b);
        list.remove(a);
        list.move_to_back(b);
        list.remove(c);
        list.debug_validate_invariants();
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;
        use std::collections::VecDeque;

        #[derive(Debug, Clone)]
        enum Op {
            PushFront(u16),
            PushBack(u16),
            Remove(usize),
            MoveFront(usize),
            MoveBack(usize),
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![
                any::<u16>().prop_map(Op::PushFront),
                any::<u16>().prop_map(Op::PushBack),
                any::<usize>().prop_map(Op::Remove),
                any::<usize>().prop_map(Op::MoveFront),
                any::<usize>().prop_map(Op::MoveBack),
            ]
        }

        proptest! {
            /// The ring matches a `VecDeque` model after any operation sequence.
            #[cfg_attr(miri, ignore)]
            #[test]
            fn prop_matches_deque_model(ops in prop::collection::vec(op_strategy(), 0..200)) {
                let mut list = IntrusiveList::new();
                let mut model: VecDeque<(SlotId, u16)> = VecDeque::new();

                for op in ops {
                    match op {
                        Op::PushFront(v) => {
                            let id = list.push_front(v);
                            model.push_front((id, v));
                        }
                        Op::PushBack(v) => {
                            let id = list.push_back(v);
                            model.push_back((id, v));
                        }
                        Op::Remove(i) if !model.is_empty() => {
                            let (id, v) = model.remove(i % model.len()).unwrap();
                            prop_assert_eq!(list.remove(id), v);
                        }
                        Op::MoveFront(i) if !model.is_empty() => {
                            let entry = model.remove(i % model.len()).unwrap();
                            prop_assert!(list.move_to_front(entry.0));
                            model.push_front(entry);
                        }
                        Op::MoveBack(i) if !model.is_empty() => {
                            let entry = model.remove(i % model.len()).unwrap();
                            prop_assert!(list.move_to_back(entry.0));
                            model.push_back(entry);
                        }
                        _ => {}
                    }
                    list.debug_validate_invariants();
                    let got: Vec<_> = list.iter_entries().map(|(id, v)| (id, *v)).collect();
                    let want: Vec<_> = model.iter().copied().collect();
                    prop_assert_eq!(got, want);
                }
            }
        }
    }
}
