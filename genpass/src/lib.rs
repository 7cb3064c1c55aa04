//! Secure random passphrase/password/hex/base64 string generator.
//!
//! Character sets for the password modes are described in the CSET
//! mini-language parsed by the `runeset` crate.

pub mod cli;
pub mod generator;
pub mod wordlist;
