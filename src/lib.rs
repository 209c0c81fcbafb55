pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod input;
pub mod library;
pub mod logging;
pub mod pager;
pub mod report;
pub mod ui;

#[cfg(test)]
mod test_support;
