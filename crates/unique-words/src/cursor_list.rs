use std::cell::Cell;

#[derive(Clone, Debug)]
struct ListNode<T> {
    value: T,
    next: Option<u32>,
}

/// Singly linked list with a cursor, kept in an index arena.
///
/// The linear-scan baseline the AVL set is measured against: membership is
/// a walk from the head, counting one comparison per element looked at.
#[derive(Clone, Debug)]
pub struct CursorList<T> {
    nodes: Vec<ListNode<T>>,
    head: Option<u32>,
    cursor: Option<u32>,
    comparisons: Cell<u64>,
}

impl<T> CursorList<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            cursor: None,
            comparisons: Cell::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn comparison_count(&self) -> u64 {
        self.comparisons.get()
    }

    /// Moves the cursor to the head.
    pub fn first(&mut self) -> Option<&T> {
        self.cursor = self.head;
        self.current()
    }

    /// Advances the cursor; past the tail it points at nothing.
    pub fn next(&mut self) -> Option<&T> {
        self.cursor = self.cursor.and_then(|c| self.nodes[c as usize].next);
        self.current()
    }

    pub fn current(&self) -> Option<&T> {
        self.cursor.map(|c| &self.nodes[c as usize].value)
    }

    /// Inserts `value` in front of the cursor, or as the new head when the
    /// cursor points at nothing. The cursor stays where it was.
    pub fn add_before(&mut self, value: T) {
        let n = self.push(value, self.cursor);
        let prev = match self.cursor {
            Some(c) if self.head != Some(c) => self.predecessor(c),
            _ => None,
        };
        match prev {
            Some(p) => self.nodes[p as usize].next = Some(n),
            None => {
                self.nodes[n as usize].next = self.head;
                self.head = Some(n);
            }
        }
    }

    /// Inserts `value` behind the cursor, or as the new head when the cursor
    /// points at nothing. The cursor stays where it was.
    pub fn add_after(&mut self, value: T) {
        match self.cursor {
            Some(c) => {
                let n = self.push(value, self.nodes[c as usize].next);
                self.nodes[c as usize].next = Some(n);
            }
            None => {
                let n = self.push(value, self.head);
                self.head = Some(n);
            }
        }
    }

    /// Linear scan from the head.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut compared = 0;
        let found = self.iter().any(|v| {
            compared += 1;
            v == value
        });
        self.comparisons.set(self.comparisons.get() + compared);
        found
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            curr: self.head,
        }
    }

    fn push(&mut self, value: T, next: Option<u32>) -> u32 {
        self.nodes.push(ListNode { value, next });
        (self.nodes.len() - 1) as u32
    }

    fn predecessor(&self, target: u32) -> Option<u32> {
        let mut curr = self.head;
        while let Some(i) = curr {
            let next = self.nodes[i as usize].next;
            if next == Some(target) {
                return Some(i);
            }
            curr = next;
        }
        None
    }
}

impl<T> Default for CursorList<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Iter<'a, T> {
    list: &'a CursorList<T>,
    curr: Option<u32>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = &self.list.nodes[self.curr? as usize];
        self.curr = node.next;
        Some(&node.value)
    }
}
