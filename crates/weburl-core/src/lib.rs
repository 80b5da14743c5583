pub mod config;
pub mod error;
pub mod logging;
pub mod percent;
pub mod url_model;

pub use error::UrlError;
pub use percent::{decode_percent, encode_percent};
pub use url_model::{QueryParams, Scheme, Url};
