//! YouTube playlist download, batch rename, and audio extraction tools.

pub mod cli;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod gate;
pub mod list;
pub mod rename;
pub mod report;
