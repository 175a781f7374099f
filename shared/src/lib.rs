//! Signs URLs with a shared URL signing secret.
//!
//! The signature is an HMAC-SHA1 over `<path>?<query>`, encoded as URL-safe
//! base64 and appended to the URL as a `signature` query parameter.

pub mod key;
pub mod signature;

mod url_parts;
