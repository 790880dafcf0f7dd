//! Alphabet Map
//!
//! An authoring aid for stylized alphabets.  The operator enters an
//! identifier, a display name and one replacement glyph per printable ASCII
//! character, and gets back an entry line that can be pasted into an
//! alphabet map.
#![warn(missing_docs)]

pub use config::Config;
pub use error::{Error, Result};
pub use fragment::AlphabetEntry;
pub use generator::Generator;

pub mod config;
pub mod error;
pub mod fragment;
pub mod generator;
pub mod interrupt;
pub mod preview;
mod prompt;
