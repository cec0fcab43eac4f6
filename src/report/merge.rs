use crate::models::{AlertDocument, TaggedAlert};

/// Tag every alert with its system label and order by time-of-day string.
///
/// The sort compares raw strings (so "9:05" sorts after "10:00") and is stable:
/// entries with equal keys keep document order, first system first.
pub fn merge_alerts(documents: &[(&str, Option<&AlertDocument>)]) -> Vec<TaggedAlert> {
    let mut entries: Vec<TaggedAlert> = documents
        .iter()
        .filter_map(|(system, document)| document.map(|d| (*system, d)))
        .flat_map(|(system, document)| {
            document.alerts.iter().map(move |alert| TaggedAlert {
                system: system.to_string(),
                alert: alert.clone(),
            })
        })
        .collect();

    entries.sort_by(|a, b| a.alert.time_key().cmp(b.alert.time_key()));
    entries
}
