pub mod config;
pub mod generate;
pub mod parse;
pub mod replay;
pub mod serve;

use std::path::Path;

/// Multi-thread runtime for commands that talk to the network.
pub(crate) fn runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread().enable_all().build()
}

/// Read `path`, or all of stdin when no path is given.
pub(crate) fn read_input(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => std::io::read_to_string(std::io::stdin()),
    }
}
