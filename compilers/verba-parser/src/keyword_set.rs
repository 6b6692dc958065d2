use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

struct Node<K> {
    key: K,
    left: Option<Box<Node<K>>>,
    right: Option<Box<Node<K>>>,
}

impl<K> Node<K> {
    fn leaf(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }
}

/// Unbalanced binary search tree used as a reserved-word membership test.
///
/// Keys are placed by strict `<`/`>` comparison from the root. There is no
/// removal and no rebalancing; reserved-word lists are small.
///
/// A sorted insertion order degenerates the tree into a chain, so nothing
/// here recurses over the nodes: lookup, traversal, cloning and dropping all
/// walk the tree with an explicit stack.
pub struct KeywordSet<K> {
    root: Option<Box<Node<K>>>,
    len: usize,
}

impl<K> Default for KeywordSet<K> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<K: Ord> KeywordSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `key` as a new leaf. Returns `false` (and changes nothing) when
    /// the key is already present.
    pub fn insert(&mut self, key: K) -> bool {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            match key.cmp(&node.key) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
                Ordering::Equal => return false,
            }
        }
        *slot = Some(Box::new(Node::leaf(key)));
        self.len += 1;
        true
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => cursor = node.left.as_deref(),
                Ordering::Greater => cursor = node.right.as_deref(),
                Ordering::Equal => return true,
            }
        }
        false
    }
}

impl<K> KeywordSet<K> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&Node<K>, usize)> = self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.left.as_deref().map(|n| (n, level + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, level + 1)));
        }
        deepest
    }

    /// Keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }
}

/// In-order traversal of a [`KeywordSet`].
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    fn push_left(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(&node.key)
    }
}

impl<K: Clone> Clone for KeywordSet<K> {
    fn clone(&self) -> Self {
        // Flatten in pre-order, recording child slots by index
        let mut flat: Vec<(K, Option<usize>, Option<usize>)> = Vec::with_capacity(self.len);
        let mut stack: Vec<(&Node<K>, Option<(usize, bool)>)> =
            self.root.as_deref().map(|n| (n, None)).into_iter().collect();
        while let Some((node, parent)) = stack.pop() {
            let index = flat.len();
            flat.push((node.key.clone(), None, None));
            match parent {
                Some((p, true)) => flat[p].1 = Some(index),
                Some((p, false)) => flat[p].2 = Some(index),
                None => {}
            }
            stack.extend(node.right.as_deref().map(|n| (n, Some((index, false)))));
            stack.extend(node.left.as_deref().map(|n| (n, Some((index, true)))));
        }

        // Children always follow their parent, so build back to front
        let mut built: Vec<Option<Box<Node<K>>>> = Vec::with_capacity(flat.len());
        built.resize_with(flat.len(), || None);
        for (index, (key, left, right)) in flat.into_iter().enumerate().rev() {
            let left = left.and_then(|i| built[i].take());
            let right = right.and_then(|i| built[i].take());
            built[index] = Some(Box::new(Node { key, left, right }));
        }

        Self {
            root: built.into_iter().next().flatten(),
            len: self.len,
        }
    }
}

impl<K> Drop for KeywordSet<K> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for KeywordSet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Ord> Extend<K> for KeywordSet<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for KeywordSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut set = Self::new();
        set.extend(keys);
        set
    }
}

impl<'s> FromIterator<&'s str> for KeywordSet<String> {
    fn from_iter<I: IntoIterator<Item = &'s str>>(keys: I) -> Self {
        keys.into_iter().map(str::to_owned).collect()
    }
}
