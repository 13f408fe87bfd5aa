//! Transitive clustering of candidate pairs.

use std::collections::HashMap;

use crate::candidates::CandidatePair;

/// Disjoint-set forest over record ids, with path compression and
/// union by size.
#[derive(Debug, Default)]
pub struct UnionFind {
    parent: HashMap<i64, i64>,
    size: HashMap<i64, usize>,
}

impl UnionFind {
    pub fn new() -> Self {
        Self::default()
    }

    /// Root of `id`'s set, inserting a fresh singleton on first sight.
    pub fn find(&mut self, id: i64) -> i64 {
        let parent = *self.parent.entry(id).or_insert(id);
        self.size.entry(id).or_insert(1);
        if parent == id {
            return id;
        }
        let root = self.find(parent);
        // Path compression: point directly at the root.
        self.parent.insert(id, root);
        root
    }

    /// Merge the sets containing `a` and `b`, smaller into larger.
    pub fn union(&mut self, a: i64, b: i64) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return;
        }
        let size_a = self.size[&root_a];
        let size_b = self.size[&root_b];
        let (big, small) = if size_a >= size_b { (root_a, root_b) } else { (root_b, root_a) };
        self.parent.insert(small, big);
        self.size.insert(big, size_a + size_b);
    }

    /// All ids ever seen by `find` or `union`.
    fn ids(&self) -> Vec<i64> {
        self.parent.keys().copied().collect()
    }
}

/// Connected components over candidate pairs treated as undirected edges.
///
/// Every id appearing in any pair lands in exactly one cluster;
/// transitivity holds even for pairs that were never directly compared.
/// Ids that never paired are absent, so each cluster has at least two
/// members. Components order by smallest member, members ascending —
/// independent of input order.
pub fn cluster(pairs: &[CandidatePair]) -> Vec<Vec<i64>> {
    let mut forest = UnionFind::new();
    for pair in pairs {
        forest.union(pair.id1, pair.id2);
    }

    let mut by_root: HashMap<i64, Vec<i64>> = HashMap::new();
    for id in forest.ids() {
        let root = forest.find(id);
        by_root.entry(root).or_default().push(id);
    }

    let mut clusters: Vec<Vec<i64>> = by_root.into_values().collect();
    for members in &mut clusters {
        members.sort_unstable();
    }
    clusters.sort_unstable_by_key(|members| members[0]);
    clusters
}
