//! Disjoint-set forest over a fixed universe `0..n`.
//!
//! Every element carries a parent index into the same universe; an element
//! that is its own parent is a root and names its group. Two flat arrays hold
//! the forest (`parent`, plus `rank` and `size` for linking decisions), so
//! there is no per-node allocation.
//!
//! [`DisjointSet::find`] is a lookup with a side effect: it compresses the
//! path it walked so later lookups along it are cheaper. The partition never
//! changes under `find`, only the shape of the trees, which is why it takes
//! `&mut self`. With compression and union by rank (or size) a sequence of
//! operations runs in amortized O(α(n)) each.
//!
//! When two roots have equal rank (or size), the **lower index** survives as
//! the root. `find` therefore returns the same representative for a given
//! merge history regardless of argument order.
//!
//! ```
//! use algokit_core::DisjointSet;
//!
//! let mut ds = DisjointSet::new(5);
//! assert_eq!(ds.union(0, 1), Ok(true));
//! assert_eq!(ds.union(1, 0), Ok(false));
//! assert_eq!(ds.connected(0, 1), Ok(true));
//! assert_eq!(ds.group_count(), 4);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::StructureError;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Which measure decides the surviving root during `union`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum UnionStrategy {
    /// Attach the shallower tree (by rank upper bound) under the deeper one.
    #[default]
    ByRank,
    /// Attach the group with fewer elements under the larger one.
    BySize,
}

/// How `find` rewrites the path it walks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum PathCompression {
    /// Second pass repoints every visited node directly at the root.
    #[default]
    Full,
    /// Single pass; each visited node is repointed at its grandparent.
    Halving,
}

/// Configuration for a [`DisjointSet`].
///
/// ```
/// # use algokit_core::{DisjointSetConfig, PathCompression, UnionStrategy};
/// let cfg = DisjointSetConfig::default();
/// assert_eq!(cfg.union_strategy, UnionStrategy::ByRank);
/// assert_eq!(cfg.path_compression, PathCompression::Full);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisjointSetConfig {
    /// Linking rule. Default: [`UnionStrategy::ByRank`].
    pub union_strategy: UnionStrategy,
    /// Compression rule. Default: [`PathCompression::Full`].
    pub path_compression: PathCompression,
}

// ---------------------------------------------------------------------------
// DisjointSet
// ---------------------------------------------------------------------------

/// A union-find structure over the indices `0..n`.
///
/// The universe is fixed at construction. Any index `>= n` is rejected with
/// [`StructureError::OutOfRange`] and never grows the structure.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    size: Vec<usize>,
    group_count: usize,
    config: DisjointSetConfig,
}

impl DisjointSet {
    /// Creates `n` singleton groups with the default configuration.
    pub fn new(n: usize) -> Self {
        Self::with_config(n, DisjointSetConfig::default())
    }

    /// Creates `n` singleton groups: every element is its own root with
    /// rank 0 and size 1.
    pub fn with_config(n: usize, config: DisjointSetConfig) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0u8; n],
            size: vec![1; n],
            group_count: n,
            config,
        }
    }

    /// Returns the root of the group containing `x`, compressing the path
    /// walked to reach it.
    ///
    /// Two elements share a root exactly when they are in the same group.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::OutOfRange`] if `x >= len()`.
    pub fn find(&mut self, x: usize) -> Result<usize, StructureError> {
        self.check(x)?;
        Ok(self.root_of(x))
    }

    /// Merges the groups containing `x` and `y`.
    ///
    /// Returns `Ok(true)` if two distinct groups were merged and `Ok(false)`
    /// if `x` and `y` were already joined. Graph callers read `false` as a
    /// redundant edge, i.e. a cycle.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::OutOfRange`] if either index is `>= len()`.
    /// Both indices are checked before anything is touched.
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool, StructureError> {
        self.check(x)?;
        self.check(y)?;

        let rx = self.root_of(x);
        let ry = self.root_of(y);
        if rx == ry {
            return Ok(false);
        }

        let (root, child) = self.pick_root(rx, ry);
        self.parent[child] = root;
        self.size[root] += self.size[child];
        let by_rank = self.config.union_strategy == UnionStrategy::ByRank;
        if by_rank && self.rank[root] == self.rank[child] {
            self.rank[root] = self.rank[root].saturating_add(1);
        }
        self.group_count -= 1;
        Ok(true)
    }

    /// Returns `true` if `x` and `y` are in the same group.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::OutOfRange`] if either index is `>= len()`.
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool, StructureError> {
        self.check(x)?;
        self.check(y)?;
        Ok(self.root_of(x) == self.root_of(y))
    }

    /// Number of distinct groups. Maintained on every merge, O(1).
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// Number of elements in the group containing `x`.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::OutOfRange`] if `x >= len()`.
    pub fn group_size(&mut self, x: usize) -> Result<usize, StructureError> {
        let root = self.find(x)?;
        Ok(self.size[root])
    }

    /// Lists every group. Members are ascending within a group and groups
    /// are ordered by their smallest member.
    pub fn groups(&mut self) -> Vec<Vec<usize>> {
        let n = self.parent.len();
        let mut slot_of_root: Vec<Option<usize>> = vec![None; n];
        let mut out: Vec<Vec<usize>> = Vec::with_capacity(self.group_count);
        for x in 0..n {
            let root = self.root_of(x);
            let slot = match slot_of_root[root] {
                Some(slot) => slot,
                None => {
                    out.push(Vec::with_capacity(self.size[root]));
                    slot_of_root[root] = Some(out.len() - 1);
                    out.len() - 1
                }
            };
            out[slot].push(x);
        }
        out
    }

    /// Size of the universe.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if the universe is empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// The configuration this structure was built with.
    pub fn config(&self) -> &DisjointSetConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn check(&self, x: usize) -> Result<(), StructureError> {
        if x < self.parent.len() {
            Ok(())
        } else {
            Err(StructureError::OutOfRange {
                index: x,
                len: self.parent.len(),
            })
        }
    }

    /// `x` must already be in range.
    fn root_of(&mut self, x: usize) -> usize {
        match self.config.path_compression {
            PathCompression::Full => self.find_full(x),
            PathCompression::Halving => self.find_halving(x),
        }
    }

    fn find_full(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = x;
        while node != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    fn find_halving(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Returns `(surviving_root, attached_root)` for two distinct roots.
    fn pick_root(&self, a: usize, b: usize) -> (usize, usize) {
        let weight = |r: usize| match self.config.union_strategy {
            UnionStrategy::ByRank => usize::from(self.rank[r]),
            UnionStrategy::BySize => self.size[r],
        };
        match weight(a).cmp(&weight(b)) {
            std::cmp::Ordering::Less => (b, a),
            std::cmp::Ordering::Greater => (a, b),
            std::cmp::Ordering::Equal => {
                if a < b {
                    (a, b)
                } else {
                    (b, a)
                }
            }
        }
    }

    /// Rebuilds a structure from raw arrays, rejecting anything that does not
    /// describe a valid forest with consistent bookkeeping.
    #[cfg(feature = "serde")]
    pub(crate) fn from_parts(
        parent: Vec<usize>,
        rank: Vec<u8>,
        size: Vec<usize>,
        group_count: usize,
        config: DisjointSetConfig,
    ) -> Result<Self, StructureError> {
        let n = parent.len();
        if rank.len() != n || size.len() != n {
            return Err(StructureError::invalid(format!(
                "array lengths differ: parent={n}, rank={}, size={}",
                rank.len(),
                size.len()
            )));
        }
        if let Some((x, &p)) = parent.iter().enumerate().find(|&(_, &p)| p >= n) {
            return Err(StructureError::invalid(format!(
                "parent of {x} is {p}, outside universe of size {n}"
            )));
        }

        #[derive(Clone, Copy)]
        enum Visit {
            Unseen,
            OnPath,
            Resolved,
        }

        // Resolve each element to its root, detecting cycles on the way.
        let mut state = vec![Visit::Unseen; n];
        let mut root_of = vec![0usize; n];
        let mut path = Vec::new();
        for start in 0..n {
            let mut node = start;
            let root = loop {
                match state[node] {
                    Visit::Resolved => break root_of[node],
                    Visit::OnPath => {
                        return Err(StructureError::invalid(format!(
                            "parent chain through {node} forms a cycle"
                        )));
                    }
                    Visit::Unseen => {}
                }
                if parent[node] == node {
                    break node;
                }
                state[node] = Visit::OnPath;
                path.push(node);
                node = parent[node];
            };
            for visited in path.drain(..) {
                state[visited] = Visit::Resolved;
                root_of[visited] = root;
            }
            state[root] = Visit::Resolved;
            root_of[root] = root;
        }

        let mut members = vec![0usize; n];
        for &root in &root_of {
            members[root] += 1;
        }
        let mut roots = 0usize;
        for x in (0..n).filter(|&x| parent[x] == x) {
            roots += 1;
            if size[x] != members[x] {
                return Err(StructureError::invalid(format!(
                    "root {x} records size {} but has {} members",
                    size[x], members[x]
                )));
            }
        }
        if roots != group_count {
            return Err(StructureError::invalid(format!(
                "group_count is {group_count} but the forest has {roots} roots"
            )));
        }

        // Union by rank keeps ranks strictly increasing towards the root and
        // a rank-r root has at least 2^r members. Union by size never raises
        // a rank.
        match config.union_strategy {
            UnionStrategy::ByRank => {
                for x in 0..n {
                    let p = parent[x];
                    if p != x && rank[x] >= rank[p] {
                        return Err(StructureError::invalid(format!(
                            "rank of {x} is {} but its parent {p} has rank {}",
                            rank[x], rank[p]
                        )));
                    }
                    let min_members = 1usize.checked_shl(u32::from(rank[x]));
                    if p == x && min_members.is_none_or(|min| min > members[x]) {
                        return Err(StructureError::invalid(format!(
                            "root {x} has rank {} but only {} members",
                            rank[x], members[x]
                        )));
                    }
                }
            }
            UnionStrategy::BySize => {
                if let Some((x, &r)) = rank.iter().enumerate().find(|&(_, &r)| r != 0) {
                    return Err(StructureError::invalid(format!(
                        "rank of {x} is {r} under union by size"
                    )));
                }
            }
        }

        Ok(Self {
            parent,
            rank,
            size,
            group_count,
            config,
        })
    }
}

impl TryFrom<i64> for DisjointSet {
    type Error = StructureError;

    /// Builds a structure from a signed size, rejecting negative values.
    fn try_from(n: i64) -> Result<Self, Self::Error> {
        if n < 0 {
            return Err(StructureError::invalid(format!(
                "universe size {n} is negative"
            )));
        }
        let n = usize::try_from(n).map_err(|_| {
            StructureError::invalid(format!("universe size {n} does not fit in usize"))
        })?;
        Ok(Self::new(n))
    }
}

impl TryFrom<isize> for DisjointSet {
    type Error = StructureError;

    fn try_from(n: isize) -> Result<Self, Self::Error> {
        let n = i64::try_from(n).map_err(|_| {
            StructureError::invalid(format!("universe size {n} does not fit in i64"))
        })?;
        Self::try_from(n)
    }
}
