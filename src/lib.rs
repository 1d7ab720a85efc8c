//! # translate - Google Translate CLI
//!
//! `translate` is a command-line client for the Google Translate v2 API.
//! It sends its arguments to the API in a single request and prints one
//! line per returned translation. By default the input language is
//! auto-detected and the output language is English.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate into English (auto-detected source)
//! translate bonjour le monde
//!
//! # Translate into Japanese
//! translate --to ja good morning
//!
//! # Force the source language
//! translate --from fr --to de bonjour
//! ```
//!
//! ## Credentials
//!
//! An API key is required, either via `--key` or the `GOOGLEAPIKEY`
//! environment variable.

/// Command-line interface definitions and handlers.
pub mod cli;

/// Translation client for the Google Translate v2 API.
pub mod translation;
