pub use eyre::{bail, ensure, eyre, Context, Result};
pub use std::format as f;
pub use std::println as p;
use std::time::Instant;

pub trait OptionStringExt<S>
where
    S: AsRef<str>,
{
    fn is_none_or_empty(&self) -> bool;
    fn not_empty(self) -> Option<S>;
}

impl<S> OptionStringExt<S> for Option<S>
where
    S: AsRef<str>,
{
    fn is_none_or_empty(&self) -> bool {
        self.as_ref().map_or(true, |s| s.as_ref().is_empty())
    }

    fn not_empty(self) -> Option<S> {
        self.filter(|x| !x.as_ref().is_empty())
    }
}

pub fn stopwatch(name: &str) -> StopwatchGuard {
    let start = Instant::now();
    StopwatchGuard { name: name.to_string(), start }
}

pub struct StopwatchGuard {
    name: String,
    start: Instant,
}

impl Drop for StopwatchGuard {
    fn drop(&mut self) {
        tracing::debug!("{} took {}ms", self.name, self.start.elapsed().as_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_and_empty_strings_are_treated_alike() {
        assert!(None::<&str>.is_none_or_empty());
        assert!(Some("").is_none_or_empty());
        assert!(!Some("eu-west-1").is_none_or_empty());
        assert_eq!(Some(String::new()).not_empty(), None);
        assert_eq!(Some("x").not_empty(), Some("x"));
    }
}
