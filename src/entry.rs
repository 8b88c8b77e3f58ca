use super::*;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct Entry {
  pub(crate) by: String,
  pub(crate) comments: u64,
  pub(crate) hn: String,
  pub(crate) id: u64,
  pub(crate) score: u64,
  pub(crate) title: String,
  pub(crate) url: String,
}

impl Entry {
  const NO_AUTHOR: &str = "<unknown>";

  const NO_TITLE: &str = "<no title>";

  /// Builds an entry from an untrusted item record. Missing or malformed
  /// fields fall back to placeholders, counts fall back to zero.
  pub(crate) fn normalize(item: &RawItem, id: u64) -> Self {
    let hn = permalink(id);

    let url = coerce_text(item.get("url"))
      .filter(|url| !url.trim().is_empty())
      .unwrap_or_else(|| hn.clone());

    Self {
      by: coerce_text(item.get("by"))
        .unwrap_or_else(|| Self::NO_AUTHOR.to_string()),
      comments: coerce_count(item.get("descendants")),
      hn,
      id,
      score: coerce_count(item.get("score")),
      title: coerce_text(item.get("title"))
        .unwrap_or_else(|| Self::NO_TITLE.to_string()),
      url,
    }
  }
}
