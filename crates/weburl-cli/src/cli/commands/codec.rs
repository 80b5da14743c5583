//! `weburl encode` / `weburl decode` – percent-codec on raw text.

use anyhow::Result;
use weburl_core::config::WeburlConfig;
use weburl_core::{decode_percent, encode_percent};

/// Encodes `text`; either the flag or the config can turn on escaping of the
/// unreserved punctuation.
pub(crate) fn encode_with(cfg: &WeburlConfig, text: &str, unreserved: bool) -> String {
    encode_percent(text, unreserved || cfg.encode_unreserved)
}

pub fn run_encode(cfg: &WeburlConfig, text: &str, unreserved: bool) -> Result<()> {
    println!("{}", encode_with(cfg, text, unreserved));
    Ok(())
}

pub fn run_decode(text: &str) -> Result<()> {
    println!("{}", decode_percent(text));
    Ok(())
}
