// src/simulation/results.rs
use std::collections::BTreeMap;
use std::fmt;

/// Shot counts of one circuit execution: bitstring -> number of shots that produced it.
///
/// Only observed outcomes are present. Keys are ordered, so iteration and
/// `Display` are stable across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCounts {
    counts: BTreeMap<String, usize>,
    shots: usize,
}

impl ResultCounts {
    /// Wraps raw counts produced by a backend for `shots` executions.
    pub fn new(counts: BTreeMap<String, usize>, shots: usize) -> Self {
        Self { counts, shots }
    }

    /// Number of shots requested from the backend.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Sum of all counts. Equals [`shots`](Self::shots) for a well-formed result.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Count for `bitstring`, zero if never observed.
    pub fn get(&self, bitstring: &str) -> usize {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Observed bitstrings in ascending order.
    pub fn bitstrings(&self) -> impl Iterator<Item = &String> {
        self.counts.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &usize)> {
        self.counts.iter()
    }

    pub fn as_map(&self) -> &BTreeMap<String, usize> {
        &self.counts
    }

    /// Number of distinct outcomes observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The outcome seen most often; ties go to the smallest bitstring.
    pub fn most_frequent(&self) -> Option<(&String, usize)> {
        self.counts
            .iter()
            .fold(None, |best: Option<(&String, usize)>, (k, &v)| match best {
                Some((_, best_v)) if best_v >= v => best,
                _ => Some((k, v)),
            })
    }

    /// Counts divided by the shot count.
    pub fn probabilities(&self) -> BTreeMap<String, f64> {
        if self.shots == 0 {
            return BTreeMap::new();
        }
        self.counts
            .iter()
            .map(|(k, &v)| (k.clone(), v as f64 / self.shots as f64))
            .collect()
    }
}

impl fmt::Display for ResultCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Walk Results ({} shots):", self.shots)?;
        if self.counts.is_empty() {
            return writeln!(f, "  No outcomes recorded.");
        }
        for (bitstring, count) in &self.counts {
            writeln!(f, "  {}: {}", bitstring, count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResultCounts {
        let mut raw = BTreeMap::new();
        raw.insert("00".to_string(), 600);
        raw.insert("11".to_string(), 400);
        raw.insert("01".to_string(), 24);
        ResultCounts::new(raw, 1024)
    }

    #[test]
    fn test_totals_and_lookup() {
        let counts = sample();
        assert_eq!(counts.total(), 1024);
        assert_eq!(counts.get("11"), 400);
        assert_eq!(counts.get("10"), 0);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.bitstrings().collect::<Vec<_>>(), vec!["00", "01", "11"]);
    }

    #[test]
    fn test_most_frequent() {
        let counts = sample();
        assert_eq!(counts.most_frequent(), Some((&"00".to_string(), 600)));
        assert_eq!(ResultCounts::new(BTreeMap::new(), 0).most_frequent(), None);
    }

    #[test]
    fn test_probabilities() {
        let probs = sample().probabilities();
        assert!((probs["01"] - 24.0 / 1024.0).abs() < 1e-12);
        assert!((probs.values().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_display_is_sorted() {
        let text = sample().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Walk Results (1024 shots):");
        assert_eq!(lines[1], "  00: 600");
        assert_eq!(lines[3], "  11: 400");
    }
}
