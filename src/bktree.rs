//! An in-RAM BK-tree: a tree indexed by a bounded integer metric, where each child
//! edge is labelled with the distance from parent to child. See `crate::metric` for
//! the capability interface this is built against.

use std::fmt;
use std::fmt::Debug;

use crate::metric::Metric;
use crate::Dist;

/// A node optimised for small, densely-clustered distances: children are stored in a
/// `Vec` indexed directly by edge label, grown lazily to the highest label seen.
struct Node<K> {
    key: K,
    children: Vec<Option<Node<K>>>,
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Node {
            key,
            children: Vec::new(),
        }
    }

    fn has_child_at(&self, dist: Dist) -> bool {
        matches!(self.children.get(dist as usize), Some(Some(_)))
    }

    fn child_at(&self, dist: Dist) -> Option<&Node<K>> {
        self.children.get(dist as usize).and_then(|c| c.as_ref())
    }

    fn child_at_mut(&mut self, dist: Dist) -> Option<&mut Node<K>> {
        self.children.get_mut(dist as usize).and_then(|c| c.as_mut())
    }

    fn set_child(&mut self, dist: Dist, node: Node<K>) {
        let idx = dist as usize;
        if self.children.len() <= idx {
            self.children.resize_with(idx + 1, || None);
        }
        debug_assert!(!self.has_child_at(dist));
        self.children[idx] = Some(node);
    }

    /// Children paired with their edge label, closest-first (matches the order a
    /// query wants to explore: a child at distance `d` from this node is more likely
    /// to satisfy a tight radius than one further away).
    fn children_by_distance(&self) -> impl Iterator<Item = (Dist, &Node<K>)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(dist, child)| child.as_ref().map(|c| (dist as Dist, c)))
    }
}

/// An indexed metric-space structure over keys `K` with a bounded-integer `Metric<K>`.
/// Supports `insert` and `find_within` in expected `O(log n)` for well-distributed keys;
/// worst case (an adversarial chain of keys each exactly one distance further from the
/// root) is `O(n)`.
pub struct BkTree<K, M> {
    root: Option<Node<K>>,
    metric: M,
    len: usize,
}

impl<K, M> BkTree<K, M>
where
    M: Metric<K>,
{
    pub fn new(metric: M) -> Self {
        BkTree {
            root: None,
            metric,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Inserts `key`. Returns `true` if it was newly added, `false` if an equal key
    /// (distance 0 from an existing node) was already present.
    pub fn insert(&mut self, key: K) -> bool {
        if self.root.is_none() {
            self.root = Some(Node::new(key));
            self.len = 1;
            return true;
        }

        let mut cur = self.root.as_mut().unwrap();
        loop {
            let dist = self.metric.distance(&key, &cur.key);
            if dist == 0 {
                return false;
            }
            if cur.has_child_at(dist) {
                cur = cur.child_at_mut(dist).unwrap();
                continue;
            }
            cur.set_child(dist, Node::new(key));
            self.len += 1;
            return true;
        }
    }

    /// Equivalent to a distance-0 membership test.
    pub fn contains(&self, key: &K) -> bool {
        let mut cur = match &self.root {
            None => return false,
            Some(root) => root,
        };
        loop {
            let dist = self.metric.distance(key, &cur.key);
            if dist == 0 {
                return true;
            }
            match cur.child_at(dist) {
                Some(child) => cur = child,
                None => return false,
            }
        }
    }

    /// Every stored key `k` with `metric.distance(query, k) <= radius`. Order is
    /// unspecified. `radius` must be `<= metric.max_distance()`.
    pub fn find_within(&self, query: &K, radius: Dist) -> Vec<K>
    where
        K: Clone,
    {
        debug_assert!(radius <= self.metric.max_distance());
        let mut out = Vec::new();
        let root = match &self.root {
            None => return out,
            Some(root) => root,
        };

        // Explicit stack, not recursion: an adversarial insertion order can produce a
        // chain as deep as `metric.max_distance()`, and this must not risk a stack
        // overflow on hostile input.
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            let dist = self.metric.distance(query, &node.key);
            if dist <= radius {
                out.push(node.key.clone());
            }
            let lo = dist.saturating_sub(radius);
            let hi = dist.saturating_add(radius);
            for (edge, child) in node.children_by_distance() {
                if edge >= lo && edge <= hi {
                    stack.push(child);
                }
            }
        }
        out
    }

    /// Preorder traversal of every stored key. Used by tests to brute-force-check
    /// `find_within`, not on any hot path.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        if let Some(root) = &self.root {
            let mut stack = vec![root];
            while let Some(node) = stack.pop() {
                out.push(node.key.clone());
                for (_, child) in node.children_by_distance() {
                    stack.push(child);
                }
            }
        }
        out
    }
}

impl<K, M> Debug for BkTree<K, M>
where
    K: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BkTree")
            .field("len", &self.len)
            .field("root", &self.root.as_ref().map(|r| &r.key))
            .finish()
    }
}
