//! Insertion-ordered frequency counter.
//!
//! `most_common` sorts by score descending and keeps first-seen order for ties,
//! so rankings are reproducible across runs with the same input.

#[derive(Debug, Clone, Default)]
pub struct Tally {
    entries: Vec<(String, u64)>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str, amount: u64) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 += amount,
            None => self.entries.push((key.to_string(), amount)),
        }
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> u64 {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
            .unwrap_or(0)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn most_common(&self, limit: usize) -> Vec<(String, u64)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);
        ranked
    }

    /// Keys of `most_common(limit)`
    pub fn top_keys(&self, limit: usize) -> Vec<String> {
        self.most_common(limit).into_iter().map(|(k, _)| k).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_and_ties() {
        let mut tally = Tally::new();
        tally.add("Go", 3);
        tally.add("Rust", 5);
        tally.add("Zig", 3);
        tally.add("Go", 0);

        assert_eq!(tally.get("Go"), 3);
        assert_eq!(tally.get("C"), 0);
        assert_eq!(tally.top_keys(10), vec!["Rust", "Go", "Zig"]);
        assert_eq!(tally.most_common(1), vec![("Rust".to_string(), 5)]);
        assert!(!tally.is_empty());
        assert!(Tally::new().top_keys(3).is_empty());
    }
}
