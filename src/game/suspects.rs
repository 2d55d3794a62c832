//! Suspect directory
//!
//! A fixed-size chained hash table from clue text to the suspect it points
//! at. Buckets are singly linked chains with the most recent insertion at
//! the head.

use crate::data::ClueLink;

/// Number of hash buckets
pub const BUCKETS: usize = 10;

/// Bucket of a clue: the sum of its bytes modulo [`BUCKETS`]
pub fn bucket_of(clue: &str) -> usize {
    clue.bytes().map(usize::from).sum::<usize>() % BUCKETS
}

struct SuspectLink {
    clue: String,
    suspect: String,
    next: Option<Box<SuspectLink>>,
}

/// Which suspect each known clue incriminates
#[derive(Default)]
pub struct SuspectDirectory {
    buckets: [Option<Box<SuspectLink>>; BUCKETS],
    len: usize,
}

impl SuspectDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the directory from pairs in insertion order
    pub fn build<'a, I>(links: I) -> Self
    where
        I: IntoIterator<Item = &'a ClueLink>,
    {
        let mut directory = Self::new();
        for link in links {
            directory.insert(&link.clue, &link.suspect);
        }
        tracing::debug!(
            links = directory.len,
            occupied = directory.buckets.iter().filter(|b| b.is_some()).count(),
            "suspect directory built"
        );
        directory
    }

    /// Prepend a link to the clue's bucket. An existing key is shadowed,
    /// not replaced.
    pub fn insert(&mut self, clue: &str, suspect: &str) {
        let bucket = &mut self.buckets[bucket_of(clue)];
        let link = Box::new(SuspectLink {
            clue: clue.to_string(),
            suspect: suspect.to_string(),
            next: bucket.take(),
        });
        *bucket = Some(link);
        self.len += 1;
    }

    /// The suspect linked to `clue`, if any
    pub fn lookup(&self, clue: &str) -> Option<&str> {
        let mut cursor = self.buckets[bucket_of(clue)].as_deref();
        while let Some(link) = cursor {
            if link.clue == clue {
                return Some(&link.suspect);
            }
            cursor = link.next.as_deref();
        }
        None
    }

    /// Number of links stored, shadowed ones included
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Length of each bucket chain
    pub fn chain_lengths(&self) -> [usize; BUCKETS] {
        let mut lengths = [0; BUCKETS];
        for (slot, bucket) in lengths.iter_mut().zip(&self.buckets) {
            let mut cursor = bucket.as_deref();
            while let Some(link) = cursor {
                *slot += 1;
                cursor = link.next.as_deref();
            }
        }
        lengths
    }
}

impl std::fmt::Debug for SuspectDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuspectDirectory")
            .field("len", &self.len)
            .field("chains", &self.chain_lengths())
            .finish()
    }
}

impl Drop for SuspectDirectory {
    fn drop(&mut self) {
        // Unlink chains iteratively so long buckets never recurse
        for bucket in &mut self.buckets {
            let mut cursor = bucket.take();
            while let Some(mut link) = cursor {
                cursor = link.next.take();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::WorldConfig;

    #[test]
    fn bucket_is_byte_sum_mod_ten() {
        // 'a' = 97, 'b' = 98
        assert_eq!(bucket_of("a"), 7);
        assert_eq!(bucket_of("ab"), 5);
        assert_eq!(bucket_of(""), 0);
    }

    #[test]
    fn finds_every_mansion_clue() {
        let world = WorldConfig::mansion();
        let directory = SuspectDirectory::build(&world.suspects);
        assert_eq!(directory.len(), 6);
        for link in &world.suspects {
            assert_eq!(directory.lookup(&link.clue), Some(link.suspect.as_str()));
        }
    }

    #[test]
    fn unknown_clue_is_not_found() {
        let directory = SuspectDirectory::build(&WorldConfig::mansion().suspects);
        assert_eq!(directory.lookup("Um chapéu esquecido."), None);
        assert_eq!(directory.lookup(""), None);
    }

    #[test]
    fn colliding_clues_share_a_chain() {
        // "ab" and "ba" have the same byte sum
        let mut directory = SuspectDirectory::new();
        directory.insert("ab", "Sr. Black");
        directory.insert("ba", "Sra. White");

        assert_eq!(directory.chain_lengths()[bucket_of("ab")], 2);
        assert_eq!(directory.lookup("ab"), Some("Sr. Black"));
        assert_eq!(directory.lookup("ba"), Some("Sra. White"));
    }

    #[test]
    fn latest_duplicate_wins() {
        let mut directory = SuspectDirectory::new();
        directory.insert("pista", "Prof. Plum");
        directory.insert("pista", "Coronel Mustard");
        assert_eq!(directory.lookup("pista"), Some("Coronel Mustard"));
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn lookup_is_idempotent() {
        let directory = SuspectDirectory::build(&WorldConfig::mansion().suspects);
        let clue = "Uma garrafa com impressão digital.";
        assert_eq!(directory.lookup(clue), directory.lookup(clue));
        assert_eq!(directory.lookup(clue), Some("Coronel Mustard"));
    }
}
