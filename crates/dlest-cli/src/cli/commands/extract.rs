//! `dlest extract <path>` – list URLs found in a document.

use anyhow::Result;
use dlest_core::{document, extract};
use std::path::Path;

pub fn run_extract(path: &Path) -> Result<()> {
    let doc = document::load_path(path)?;
    let urls = extract::extract_urls(&doc);
    if urls.is_empty() {
        println!("No URLs found.");
    } else {
        for url in urls {
            println!("{url}");
        }
    }
    Ok(())
}
