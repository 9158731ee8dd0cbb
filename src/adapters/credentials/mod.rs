//! Credential adapters.
//!
//! Implementations of the `CredentialStore` port:
//!
//! - `json_file` - Reads `{"teachers": {email: {name, password}}}` from disk

mod json_file;

pub use json_file::JsonFileCredentialStore;
