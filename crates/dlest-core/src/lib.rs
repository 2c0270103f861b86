//! dlest core: find the URLs in a JSON document and estimate how much data
//! (and how much time) downloading all of them would take.

pub mod config;
pub mod logging;

pub mod dispatch;
pub mod document;
pub mod extract;
pub mod measure;
pub mod report;
