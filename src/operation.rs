//! Binds a request type to its action name and result type.

use crate::query::ToQuery;
use crate::xml::FromXml;

pub trait Operation: ToQuery {
    /// Value of the `Action` parameter.
    const ACTION: &'static str;
    /// `()` for operations that reply with nothing but a request id.
    type Output: FromXml + Default;
}

/// A request that can ask for a later page.
pub trait Paginated: Operation {
    fn set_next_token(&mut self, token: Option<String>);
}

/// A result that may point at the next page.
pub trait Page {
    fn next_token(&self) -> Option<&str>;
}
