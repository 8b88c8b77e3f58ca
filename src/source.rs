use super::*;

/// Where story listings and item records come from. Implementations report
/// their own failures and hand back `None` instead of an error.
pub(crate) trait Source {
  async fn fetch_item(&self, id: u64) -> Option<Value>;

  async fn fetch_listing(&self, listing: Listing) -> Option<Value>;
}
