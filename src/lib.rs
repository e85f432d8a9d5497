//! Client models and a small synchronous client for the Auto Scaling query API
//! (version `2011-01-01`).
//!
//! Every request and result of the service is a plain data type in [`model`].
//! Fields are optional, list fields start out as empty lists, and each type has
//! `x()` getters, `set_x()` setters and chaining `with_x()` builders:
//!
//! ```no_run
//! use ascale::model::DescribeAutoScalingGroupsRequest;
//!
//! let request = DescribeAutoScalingGroupsRequest::default()
//!     .with_auto_scaling_group_names(["web", "worker"])
//!     .with_max_records(50);
//! println!("{request}");
//! ```
//!
//! [`AutoScalingClient`] signs those requests, sends them and parses the replies.

#[macro_use]
mod macros;

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod model;
pub mod operation;
mod operations;
pub mod paginate;
pub mod parsers;
pub mod prelude;
pub mod query;
pub mod xml;

pub use client::{AutoScalingClient, ClientConfig};
pub use error::{Error, ErrorKind, Result, ServiceError};
pub use operation::{Operation, Page, Paginated};
pub use paginate::Pages;
