//! `weburl build --host ...` – assemble a URL from parts.

use anyhow::Result;
use weburl_core::config::WeburlConfig;
use weburl_core::{QueryParams, Scheme, Url};

/// Parts collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct BuildArgs {
    pub scheme: Option<Scheme>,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub fragment: String,
}

/// Assembles the URL, taking the scheme from config when not given.
pub(crate) fn assemble(cfg: &WeburlConfig, args: BuildArgs) -> Url {
    Url {
        scheme: args
            .scheme
            .or(cfg.default_scheme)
            .unwrap_or_default(),
        host: args.host,
        port: args.port,
        path: args.path,
        query: args.query.into_iter().collect::<QueryParams>(),
        fragment: args.fragment,
    }
}

pub fn run_build(cfg: &WeburlConfig, args: BuildArgs) -> Result<()> {
    let url = assemble(cfg, args);
    tracing::debug!(url = %url, "built url");
    println!("{}", url.build());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_precedence() {
        let cfg = WeburlConfig {
            default_scheme: Some(Scheme::Https),
            ..WeburlConfig::default()
        };
        let args = BuildArgs {
            host: "h".into(),
            ..BuildArgs::default()
        };
        assert_eq!(assemble(&cfg, args.clone()).scheme, Scheme::Https);
        assert_eq!(
            assemble(&WeburlConfig::default(), args.clone()).scheme,
            Scheme::Http
        );
        let explicit = BuildArgs {
            scheme: Some(Scheme::Http),
            ..args
        };
        assert_eq!(assemble(&cfg, explicit).scheme, Scheme::Http);
    }

    #[test]
    fn assembles_all_parts() {
        let args = BuildArgs {
            scheme: None,
            host: "x.com".into(),
            port: 8080,
            path: "/s".into(),
            query: vec![("q".into(), "c++ code".into()), ("q".into(), "rust".into())],
            fragment: "top".into(),
        };
        let url = assemble(&WeburlConfig::default(), args);
        assert_eq!(url.build(), "http://x.com:8080/s?q=c%2B%2B%20code&q=rust#top");
    }
}
