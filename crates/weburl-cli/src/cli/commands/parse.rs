//! `weburl parse <url>` – show the decomposed fields.

use anyhow::{Context, Result};
use weburl_core::config::{OutputFormat, WeburlConfig};
use weburl_core::Url;

/// One `name: value` line per field; query parameters are listed in order
/// with their decoded values.
pub(crate) fn render_text(url: &Url) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<9} {}\n", "scheme:", url.scheme));
    out.push_str(&format!("{:<9} {}\n", "host:", url.host));
    if url.port == 0 {
        out.push_str(&format!("{:<9} - (default {})\n", "port:", url.effective_port()));
    } else {
        out.push_str(&format!("{:<9} {}\n", "port:", url.port));
    }
    out.push_str(&format!("{:<9} {}\n", "path:", url.path));
    for (name, value) in url.query.iter() {
        out.push_str(&format!("{:<9} {} = {}\n", "query:", name, value));
    }
    out.push_str(&format!("{:<9} {}\n", "fragment:", url.fragment));
    out
}

pub fn run_parse(cfg: &WeburlConfig, input: &str, json: bool) -> Result<()> {
    let url = Url::parse(input);
    if json || cfg.output == OutputFormat::Json {
        let rendered = serde_json::to_string_pretty(&url).context("serialize url")?;
        println!("{}", rendered);
    } else {
        print!("{}", render_text(&url));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_lists_fields_and_query_in_order() {
        let text = render_text(&Url::parse("https://h:8443/p?b=2&a=x%20y#f"));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "scheme:   https",
                "host:     h",
                "port:     8443",
                "path:     /p",
                "query:    b = 2",
                "query:    a = x y",
                "fragment: f",
            ]
        );
    }

    #[test]
    fn text_shows_default_port() {
        let text = render_text(&Url::parse("https://h/"));
        assert!(text.contains("port:     - (default 443)"));
    }
}
