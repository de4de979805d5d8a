//! font-install
//!
//! A small command line tool that installs OpenType/TrueType fonts from
//! local files, URLs, and archives (ZIP, TAR, gzip).

pub mod container;
pub mod core;
pub mod error;
pub mod fetch;
pub mod font;
pub mod install;
