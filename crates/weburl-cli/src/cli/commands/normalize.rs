//! `weburl normalize <url>` – parse and rebuild.

use anyhow::Result;
use weburl_core::Url;

pub fn run_normalize(input: &str) -> Result<()> {
    println!("{}", Url::parse(input).build());
    Ok(())
}
