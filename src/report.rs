use super::*;

/// Renders ranked entries, either as numbered text blocks or as a JSON
/// array.
pub(crate) struct Report<'a> {
  pub(crate) color: bool,
  pub(crate) entries: &'a [Entry],
  pub(crate) json: bool,
  pub(crate) listing: Listing,
}

impl Display for Report<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    writeln!(
      f,
      "Hacker News {} stories (ranked by comments, then score):",
      self.listing.label()
    )?;

    writeln!(f)?;

    for (index, entry) in self.entries.iter().enumerate() {
      let heading = format!("{}. {}", index + 1, entry.title);

      if self.color {
        writeln!(f, "{}", heading.bold())?;
      } else {
        writeln!(f, "{heading}")?;
      }

      writeln!(
        f,
        "   by: {} | comments: {} | score: {}",
        entry.by, entry.comments, entry.score
      )?;
      writeln!(f, "   url: {}", entry.url)?;
      writeln!(f, "   hn:  {}", entry.hn)?;
      writeln!(f)?;
    }

    Ok(())
  }
}

impl Report<'_> {
  pub(crate) fn write(&self, out: &mut impl Write) -> Result {
    if self.json {
      serde_json::to_writer_pretty(&mut *out, self.entries)?;
      writeln!(out)?;
    } else {
      write!(out, "{self}")?;
    }

    Ok(())
  }
}
