use super::*;

/// Orders entries by comment count, then score, both descending. Entries
/// with equal keys keep their input order.
pub(crate) fn rank(mut entries: Vec<Entry>) -> Vec<Entry> {
  entries.sort_by_key(|entry| Reverse((entry.comments, entry.score)));
  entries
}
