//! bitmx - bitext to TMX converter
//!
//! bitmx is a CLI tool and library that pairs two line-aligned monolingual
//! text files into a TMX 1.4 translation memory. Line `i` of the source file
//! becomes the source segment of translation unit `i`, line `i` of the target
//! file its target segment.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, prompts, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Line reading, language tags, TMX building and writing
//! - `error`: Typed errors returned by the core
//! - `logger`: `log` backend used by the binary

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logger;
