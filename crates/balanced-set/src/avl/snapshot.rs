use std::fmt;

/// One key of a [`Snapshot`] with the balance metadata of its node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnapshotEntry<K> {
    pub key: K,
    pub height: i32,
    /// `height(left) - height(right)` at the time of the snapshot.
    pub balance: i32,
}

impl<K: fmt::Display> fmt::Display for SnapshotEntry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entry(f, &self.key, self.height, self.balance)
    }
}

pub(crate) fn write_entry<K: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    key: &K,
    height: i32,
    balance: i32,
) -> fmt::Result {
    write!(f, "{key}:H{height}:B{balance}")
}

/// Point-in-time, ascending copy of an [`AvlSet`](super::AvlSet).
///
/// Renders as `[k:H<height>:B<balance>, ...]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot<K> {
    entries: Vec<SnapshotEntry<K>>,
}

impl<K> Snapshot<K> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SnapshotEntry<K>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SnapshotEntry<K>> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|e| &e.key)
    }

    pub fn into_keys(self) -> Vec<K> {
        self.entries.into_iter().map(|e| e.key).collect()
    }
}

impl<K> FromIterator<SnapshotEntry<K>> for Snapshot<K> {
    fn from_iter<I: IntoIterator<Item = SnapshotEntry<K>>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K> IntoIterator for Snapshot<K> {
    type Item = SnapshotEntry<K>;
    type IntoIter = std::vec::IntoIter<SnapshotEntry<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K> IntoIterator for &'a Snapshot<K> {
    type Item = &'a SnapshotEntry<K>;
    type IntoIter = std::slice::Iter<'a, SnapshotEntry<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: fmt::Display> fmt::Display for Snapshot<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{entry}")?;
        }
        f.write_str("]")
    }
}
