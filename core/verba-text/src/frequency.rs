use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts keyed by item.
///
/// Iteration follows first-encounter order, so two tables built from the
/// same sequence always list their entries identically. Counts are always
/// positive: entries are only created by an occurrence.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, u64)>,
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> FrequencyTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `item`.
    pub fn add(&mut self, item: K) {
        self.add_count(item, 1);
    }

    /// Records `count` occurrences of `item` at once.
    pub fn add_count(&mut self, item: K, count: u64) {
        if count == 0 {
            return;
        }
        match self.index.get(&item) {
            Some(&slot) => self.entries[slot].1 += count,
            None => {
                self.index.insert(item.clone(), self.entries.len());
                self.entries.push((item, count));
            }
        }
    }

    /// Count for `item`, zero when it never occurred.
    pub fn get<Q>(&self, item: &Q) -> u64
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(item)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Folds another table (e.g. a per-document shard) into this one.
    pub fn merge(&mut self, other: FrequencyTable<K>) {
        for (item, count) in other.entries {
            self.add_count(item, count);
        }
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted sequence.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> + '_ {
        self.entries.iter().map(|(item, count)| (item, *count))
    }

    /// The `k` highest counts, ties kept in first-encounter order.
    pub fn most_common(&self, k: usize) -> Vec<(&K, u64)> {
        let mut ranked: Vec<(&K, u64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(k);
        ranked
    }
}

impl<K: Eq + Hash + Clone> PartialEq for FrequencyTable<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(item, count)| other.get(item) == count)
    }
}

impl<K: Eq + Hash + Clone> Eq for FrequencyTable<K> {}

impl<K: Eq + Hash + Clone> Extend<K> for FrequencyTable<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, items: I) {
        for item in items {
            self.add(item);
        }
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(items: I) -> Self {
        let mut table = Self::new();
        table.extend(items);
        table
    }
}

impl<K> IntoIterator for FrequencyTable<K> {
    type Item = (K, u64);
    type IntoIter = std::vec::IntoIter<(K, u64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Counts every distinct item of `items`.
pub fn count_frequencies<I>(items: I) -> FrequencyTable<I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash + Clone,
{
    items.into_iter().collect()
}
