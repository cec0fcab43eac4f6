use crate::models::TaggedAlert;
use std::collections::HashSet;

/// Headline overlap between two systems, by exact string equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeadlineAnalysis {
    pub overlap: usize,
    pub unique_to_first: usize,
    pub unique_to_second: usize,
}

impl HeadlineAnalysis {
    pub fn compute(entries: &[TaggedAlert], first: &str, second: &str) -> Self {
        let first_set = headlines(entries, first);
        let second_set = headlines(entries, second);

        Self {
            overlap: first_set.intersection(&second_set).count(),
            unique_to_first: first_set.difference(&second_set).count(),
            unique_to_second: second_set.difference(&first_set).count(),
        }
    }
}

fn headlines<'a>(entries: &'a [TaggedAlert], system: &str) -> HashSet<&'a str> {
    entries
        .iter()
        .filter(|e| e.system == system)
        .map(|e| e.alert.headline.as_str())
        .collect()
}
