use super::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub(crate) enum Listing {
  Ask,
  Best,
  Job,
  New,
  Show,
  #[default]
  Top,
}

impl Listing {
  pub(crate) fn endpoint(self) -> &'static str {
    match self {
      Self::Ask => "askstories",
      Self::Best => "beststories",
      Self::Job => "jobstories",
      Self::New => "newstories",
      Self::Show => "showstories",
      Self::Top => "topstories",
    }
  }

  pub(crate) fn label(self) -> &'static str {
    match self {
      Self::Ask => "ask",
      Self::Best => "best",
      Self::Job => "job",
      Self::New => "new",
      Self::Show => "show",
      Self::Top => "top",
    }
  }
}
