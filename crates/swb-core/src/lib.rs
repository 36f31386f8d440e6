//! swb core: locator parsing and scheme-dispatched retrieval for a minimal
//! web client (`http`, `https`, `file`, `data`).

pub mod config;
pub mod error;
pub mod fetch;
pub mod locator;
pub mod logging;
pub mod render;

pub use error::{FetchError, ParseError, ProtocolViolation};
pub use fetch::{retrieve, Fetcher};
pub use locator::{parse, Locator, Scheme};
