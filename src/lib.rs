//! lutkey - translation key generation for i18n extraction
//!
//! lutkey turns the location of a piece of UI text into a short, readable,
//! dotted translation key and keeps the resulting lookup table free of
//! collisions. Extraction tools call into the library with plain strings;
//! the CLI drives the same engine against a JSON table file.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Key derivation, collision resolution and the table store
//! - `table_file`: JSON table persistence

pub mod cli;
pub mod config;
pub mod core;
pub mod table_file;
