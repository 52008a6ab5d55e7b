//! Arena-backed doubly linked list of characters.
//!
//! Cells live in a `Vec` and link to each other by slot index, so a
//! [`NodeId`] stays valid across edits elsewhere in the list. Erased slots go
//! on a free list and are reused by later inserts.

/// Stable handle to a character cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
struct Node {
    ch: char,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// Ordered characters with O(1) insert and erase at a handle.
///
/// A position in the list is an `Option<NodeId>`: `Some(id)` means "just
/// before `id`", `None` is the end sentinel.
#[derive(Clone, Debug, Default)]
pub struct CharList {
    nodes: Vec<Node>,
    free: Vec<NodeId>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl CharList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First cell, or `None` for an empty list.
    #[must_use]
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// Character stored in `id`.
    #[must_use]
    pub fn get(&self, id: NodeId) -> char {
        self.nodes[id.0].ch
    }

    #[must_use]
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].next
    }

    #[must_use]
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].prev
    }

    /// Cell immediately before position `at` (the tail when `at` is the end).
    #[must_use]
    pub fn before(&self, at: Option<NodeId>) -> Option<NodeId> {
        match at {
            Some(id) => self.prev(id),
            None => self.tail,
        }
    }

    /// Insert `ch` just before position `at` and return its handle.
    pub fn insert_before(&mut self, at: Option<NodeId>, ch: char) -> NodeId {
        let prev = self.before(at);
        let node = Node {
            ch,
            prev,
            next: at,
        };
        let id = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot.0] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                NodeId(self.nodes.len() - 1)
            }
        };

        match prev {
            Some(p) => self.nodes[p.0].next = Some(id),
            None => self.head = Some(id),
        }
        match at {
            Some(n) => self.nodes[n.0].prev = Some(id),
            None => self.tail = Some(id),
        }
        self.len += 1;
        id
    }

    /// Unlink `id`, returning its character and the cell that followed it.
    ///
    /// `id` must not be used after this call; its slot is recycled.
    pub fn erase(&mut self, id: NodeId) -> (char, Option<NodeId>) {
        let Node { ch, prev, next } = self.nodes[id.0].clone();
        match prev {
            Some(p) => self.nodes[p.0].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n.0].prev = prev,
            None => self.tail = prev,
        }
        self.nodes[id.0].prev = None;
        self.nodes[id.0].next = None;
        self.free.push(id);
        self.len -= 1;
        (ch, next)
    }

    /// Drop every cell, keeping the allocation.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterate characters front to back.
    pub fn iter(&self) -> Chars<'_> {
        Chars {
            list: self,
            at: self.head,
            remaining: self.len,
        }
    }
}

/// Iterator over the characters of a [`CharList`].
#[derive(Clone, Debug)]
pub struct Chars<'a> {
    list: &'a CharList,
    at: Option<NodeId>,
    remaining: usize,
}

impl Iterator for Chars<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let id = self.at?;
        self.at = self.list.next(id);
        self.remaining -= 1;
        Some(self.list.get(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Chars<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(list: &CharList) -> String {
        list.iter().collect()
    }

    #[test]
    fn test_list_append() {
        let mut list = CharList::new();
        list.insert_before(None, 'a');
        list.insert_before(None, 'b');
        list.insert_before(None, 'c');
        assert_eq!(collect(&list), "abc");
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_list_insert_before_head() {
        let mut list = CharList::new();
        let b = list.insert_before(None, 'b');
        list.insert_before(Some(b), 'a');
        assert_eq!(collect(&list), "ab");
        assert_eq!(list.head().map(|id| list.get(id)), Some('a'));
    }

    #[test]
    fn test_list_erase_middle() {
        let mut list = CharList::new();
        list.insert_before(None, 'a');
        let b = list.insert_before(None, 'b');
        let c = list.insert_before(None, 'c');

        let (ch, next) = list.erase(b);
        assert_eq!(ch, 'b');
        assert_eq!(next, Some(c));
        assert_eq!(collect(&list), "ac");
        assert_eq!(list.before(Some(c)).map(|id| list.get(id)), Some('a'));
    }

    #[test]
    fn test_list_erase_tail_updates_end() {
        let mut list = CharList::new();
        let a = list.insert_before(None, 'a');
        let b = list.insert_before(None, 'b');

        assert_eq!(list.erase(b), ('b', None));
        assert_eq!(list.before(None), Some(a));
        assert_eq!(list.erase(a), ('a', None));
        assert!(list.is_empty());
        assert_eq!(list.head(), None);
        assert_eq!(list.before(None), None);
    }

    #[test]
    fn test_list_reuses_freed_slots() {
        let mut list = CharList::new();
        let a = list.insert_before(None, 'a');
        list.erase(a);
        let b = list.insert_before(None, 'b');
        assert_eq!(a, b);
        assert_eq!(list.nodes.len(), 1);
        assert_eq!(collect(&list), "b");
    }

    #[test]
    fn test_list_handles_survive_edits() {
        let mut list = CharList::new();
        let x = list.insert_before(None, 'x');
        for ch in "hello".chars() {
            list.insert_before(Some(x), ch);
        }
        list.insert_before(None, '!');
        assert_eq!(list.get(x), 'x');
        assert_eq!(collect(&list), "hellox!");
    }

    #[test]
    fn test_list_iter_is_exact_size() {
        let mut list = CharList::with_capacity(4);
        for ch in "abcd".chars() {
            list.insert_before(None, ch);
        }
        assert_eq!(list.iter().len(), 4);
        list.clear();
        assert_eq!(list.iter().len(), 0);
    }
}
