use super::*;

#[derive(Debug, PartialEq)]
pub(crate) enum Outcome {
  NoListing,
  NoStories,
  Ranked(Vec<Entry>),
}

/// One run: fetch the listing, fetch each selected item in turn, normalize,
/// rank, and render. Progress and terminal messages go to `status`, the
/// report goes to `out`.
pub(crate) struct Pipeline<S> {
  pub(crate) color: bool,
  pub(crate) delay: Duration,
  pub(crate) json: bool,
  pub(crate) limit: usize,
  pub(crate) listing: Listing,
  pub(crate) source: S,
}

impl<S: Source> Pipeline<S> {
  async fn collect(&self, ids: &[Value]) -> Vec<Entry> {
    let mut entries = Vec::with_capacity(ids.len());

    let mut first = true;

    for id in ids {
      let Some(id) = id.as_u64() else {
        log::warn!("skip id={id} (not an identifier)");
        continue;
      };

      if !first {
        tokio::time::sleep(self.delay).await;
      }

      first = false;

      match self.source.fetch_item(id).await {
        Some(Value::Object(item)) => {
          entries.push(Entry::normalize(&item, id));
        }
        _ => log::warn!("skip id={id} (no item)"),
      }
    }

    entries
  }

  pub(crate) async fn run(
    &self,
    out: &mut impl Write,
    status: &mut impl Write,
  ) -> Result<Outcome> {
    let label = self.listing.label();

    writeln!(status, "Getting {label} Hacker News story IDs...")?;

    let ids = match self.source.fetch_listing(self.listing).await {
      Some(Value::Array(ids)) if !ids.is_empty() => ids,
      _ => {
        writeln!(status, "Could not load {label} stories.")?;
        return Ok(Outcome::NoListing);
      }
    };

    log::debug!("{label} listing returned {} ids", ids.len());

    let selected = &ids[..ids.len().min(self.limit)];

    writeln!(
      status,
      "Fetching first {} items (skipping any broken ones)...",
      selected.len()
    )?;

    let entries = self.collect(selected).await;

    if entries.is_empty() {
      writeln!(status, "No stories to show.")?;
      return Ok(Outcome::NoStories);
    }

    log::info!("ranking {} of {} stories", entries.len(), selected.len());

    let entries = rank(entries);

    if !self.json {
      writeln!(status)?;
      status.flush()?;
    }

    Report {
      color: self.color,
      entries: &entries,
      json: self.json,
      listing: self.listing,
    }
    .write(out)?;

    Ok(Outcome::Ranked(entries))
  }
}
