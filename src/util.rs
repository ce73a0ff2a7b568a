use std::cell::Cell;
use std::fmt::Display;

/// Displays the items of an iterator separated by `sep`.
///
/// The iterator is consumed by the first `fmt` call, so formatting
/// it a second time writes nothing.
pub(crate) struct Join<Iter, Sep> {
  iter: Cell<Option<Iter>>,
  sep: Sep,
}

impl<Iter, Sep> Display for Join<Iter, Sep>
where
  Iter: Iterator,
  <Iter as Iterator>::Item: Display,
  Sep: Display,
{
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let Some(mut iter) = self.iter.take() else {
      return Ok(());
    };
    if let Some(first) = iter.next() {
      write!(f, "{first}")?;
      for item in iter {
        write!(f, "{}{item}", self.sep)?;
      }
    }
    Ok(())
  }
}

pub(crate) trait JoinIter: Sized + Iterator {
  fn join<Sep>(self, sep: Sep) -> Join<Self, Sep>;
}

impl<Iter> JoinIter for Iter
where
  Iter: Sized + Iterator,
{
  fn join<Sep>(self, sep: Sep) -> Join<Self, Sep> {
    Join {
      iter: Cell::new(Some(self)),
      sep,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn join() {
    assert_eq!([1, 2, 3].iter().join(", ").to_string(), "1, 2, 3");
    assert_eq!(["only"].iter().join(" ").to_string(), "only");
    assert_eq!(std::iter::empty::<u8>().join(" ").to_string(), "");
  }
}
