//! Collected clues
//!
//! An unbalanced binary search tree of clue texts ordered byte-wise. It only
//! ever grows; inserting a text that is already present changes nothing.
//! Sorted input degrades it into a chain, so nothing here recurses.

use std::fmt;

struct ClueEntry {
    text: String,
    lesser: Option<Box<ClueEntry>>,
    greater: Option<Box<ClueEntry>>,
}

impl ClueEntry {
    fn leaf(text: &str) -> Box<Self> {
        Box::new(Self {
            text: text.to_string(),
            lesser: None,
            greater: None,
        })
    }
}

/// Every distinct clue found so far, kept in alphabetical order
#[derive(Default)]
pub struct ClueIndex {
    root: Option<Box<ClueEntry>>,
    len: usize,
}

impl ClueIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a clue. Returns `false` when the text was already present.
    pub fn insert(&mut self, text: &str) -> bool {
        let mut slot = &mut self.root;
        while let Some(entry) = slot {
            slot = match text.as_bytes().cmp(entry.text.as_bytes()) {
                std::cmp::Ordering::Less => &mut entry.lesser,
                std::cmp::Ordering::Greater => &mut entry.greater,
                std::cmp::Ordering::Equal => return false,
            };
        }
        *slot = Some(ClueEntry::leaf(text));
        self.len += 1;
        true
    }

    pub fn contains(&self, text: &str) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(entry) = cursor {
            cursor = match text.as_bytes().cmp(entry.text.as_bytes()) {
                std::cmp::Ordering::Less => entry.lesser.as_deref(),
                std::cmp::Ordering::Greater => entry.greater.as_deref(),
                std::cmp::Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Lazily walk the clues in increasing order. Each call starts afresh.
    pub fn iter(&self) -> InOrder<'_> {
        let mut walk = InOrder { pending: Vec::new() };
        walk.descend(self.root.as_deref());
        walk
    }

    /// Entries parent-first, the order that rebuilds the same tree shape
    fn pre_order(&self) -> impl Iterator<Item = &str> {
        let mut pending: Vec<&ClueEntry> = self.root.as_deref().into_iter().collect();
        std::iter::from_fn(move || {
            let entry = pending.pop()?;
            pending.extend(entry.greater.as_deref());
            pending.extend(entry.lesser.as_deref());
            Some(entry.text.as_str())
        })
    }
}

impl Clone for ClueIndex {
    fn clone(&self) -> Self {
        self.pre_order().collect()
    }
}

impl PartialEq for ClueIndex {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for ClueIndex {}

impl fmt::Debug for ClueIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Drop for ClueIndex {
    fn drop(&mut self) {
        let mut pending: Vec<Box<ClueEntry>> = self.root.take().into_iter().collect();
        while let Some(mut entry) = pending.pop() {
            pending.extend(entry.lesser.take());
            pending.extend(entry.greater.take());
        }
    }
}

impl<'a> IntoIterator for &'a ClueIndex {
    type Item = &'a str;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClueIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = ClueIndex::new();
        for text in iter {
            index.insert(text.as_ref());
        }
        index
    }
}

/// In-order traversal of a [`ClueIndex`], holding the path of entries whose
/// lesser side has been visited but which have not been yielded yet.
pub struct InOrder<'a> {
    pending: Vec<&'a ClueEntry>,
}

impl<'a> InOrder<'a> {
    fn descend(&mut self, mut cursor: Option<&'a ClueEntry>) {
        while let Some(entry) = cursor {
            self.pending.push(entry);
            cursor = entry.lesser.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.pending.pop()?;
        self.descend(entry.greater.as_deref());
        Some(&entry.text)
    }
}
