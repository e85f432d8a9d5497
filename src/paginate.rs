use crate::error::Result;
use crate::operation::{Page, Paginated};

/// Iterator over every page of a paginated operation.
///
/// Follows `NextToken` until the service stops returning one. Stops after the
/// first error, and also when a token repeats so a misbehaving endpoint can't
/// keep it spinning.
pub struct Pages<R, F> {
    request: R,
    send: F,
    last_token: Option<String>,
    done: bool,
}

impl<R, F> Pages<R, F>
where
    R: Paginated,
    R::Output: Page,
    F: FnMut(&R) -> Result<R::Output>,
{
    pub fn new(request: R, send: F) -> Self {
        Pages { request, send, last_token: None, done: false }
    }
}

impl<R, F> Iterator for Pages<R, F>
where
    R: Paginated,
    R::Output: Page,
    F: FnMut(&R) -> Result<R::Output>,
{
    type Item = Result<R::Output>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let page = match (self.send)(&self.request) {
            Ok(page) => page,
            Err(err) => {
                self.done = true;
                return Some(Err(err));
            }
        };
        match page.next_token().filter(|t| !t.is_empty()) {
            Some(token) if self.last_token.as_deref() != Some(token) => {
                tracing::trace!("next page: {token}");
                self.last_token = Some(token.to_string());
                self.request.set_next_token(Some(token.to_string()));
            }
            _ => self.done = true,
        }
        Some(Ok(page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{DescribeTagsRequest, DescribeTagsResult, TagDescription};
    use std::collections::VecDeque;

    fn page(key: &str, token: Option<&str>) -> DescribeTagsResult {
        let mut page = DescribeTagsResult::default()
            .with_tags([TagDescription::default().with_key(key)]);
        page.set_next_token(token.map(String::from));
        page
    }

    fn keys(pages: &[DescribeTagsResult]) -> Vec<&str> {
        pages.iter().flat_map(|p| p.tags().unwrap_or_default()).filter_map(|t| t.key()).collect()
    }

    #[test]
    fn follows_tokens_until_exhausted() {
        let mut replies =
            VecDeque::from([page("a", Some("t1")), page("b", Some("t2")), page("c", None)]);
        let mut seen = Vec::new();
        let pages = Pages::new(DescribeTagsRequest::default().with_max_records(1), |req| {
            seen.push(req.next_token().map(String::from));
            Ok(replies.pop_front().unwrap())
        })
        .collect::<Result<Vec<_>>>()
        .unwrap();
        assert_eq!(keys(&pages), ["a", "b", "c"]);
        assert_eq!(seen, [None, Some("t1".to_string()), Some("t2".to_string())]);
    }

    #[test]
    fn empty_token_ends_iteration() {
        let mut calls = 0;
        let pages: Vec<_> = Pages::new(DescribeTagsRequest::default(), |_| {
            calls += 1;
            Ok(page("a", Some("")))
        })
        .collect();
        assert_eq!(pages.len(), 1);
        assert_eq!(calls, 1);
    }

    #[test]
    fn repeated_token_ends_iteration() {
        let pages: Vec<_> =
            Pages::new(DescribeTagsRequest::default(), |_| Ok(page("a", Some("same")))).collect();
        assert_eq!(pages.len(), 2);
    }

    #[test]
    fn stops_after_first_error() {
        let mut calls = 0;
        let mut pages = Pages::new(DescribeTagsRequest::default(), |_| {
            calls += 1;
            Err(Error::Signing("no credentials".into()))
        });
        assert!(matches!(pages.next(), Some(Err(Error::Signing(_)))));
        assert!(pages.next().is_none());
        drop(pages);
        assert_eq!(calls, 1);
    }
}
