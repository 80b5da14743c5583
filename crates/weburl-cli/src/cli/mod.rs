//! CLI for the weburl toolkit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use weburl_core::config;
use weburl_core::{QueryParams, Scheme};

use commands::{
    run_build, run_completions, run_decode, run_encode, run_man, run_normalize, run_parse,
    BuildArgs,
};

/// Top-level CLI for weburl.
#[derive(Debug, Parser)]
#[command(name = "weburl")]
#[command(about = "weburl: inspect, build and percent-code http(s) URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Split a URL into scheme, host, port, path, query and fragment.
    Parse {
        /// URL text; malformed input is decomposed as far as possible.
        url: String,
        /// Print JSON instead of a field listing.
        #[arg(long)]
        json: bool,
    },

    /// Assemble a URL from its parts.
    Build {
        /// Host name (without port).
        #[arg(long)]
        host: String,
        /// "http" or "https" (default from config, else http).
        #[arg(long)]
        scheme: Option<Scheme>,
        /// Port; 0 leaves it out.
        #[arg(long, default_value_t = 0)]
        port: u16,
        /// Path, including its leading '/'.
        #[arg(long, default_value = "")]
        path: String,
        /// Query parameter as NAME=VALUE; may be repeated. VALUE is encoded on output.
        #[arg(long = "query", value_name = "NAME=VALUE", value_parser = QueryParams::parse_pair)]
        query: Vec<(String, String)>,
        /// Fragment, without '#'.
        #[arg(long, default_value = "")]
        fragment: String,
    },

    /// Parse a URL and print it back in canonical form.
    Normalize {
        url: String,
    },

    /// Percent-encode text.
    Encode {
        text: String,
        /// Also escape '-', '.', '_' and '~'.
        #[arg(long)]
        unreserved: bool,
    },

    /// Percent-decode text.
    Decode {
        text: String,
    },

    /// Print a shell completion script.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Parse { url, json } => run_parse(&cfg, &url, json)?,
            CliCommand::Build {
                host,
                scheme,
                port,
                path,
                query,
                fragment,
            } => run_build(
                &cfg,
                BuildArgs {
                    scheme,
                    host,
                    port,
                    path,
                    query,
                    fragment,
                },
            )?,
            CliCommand::Normalize { url } => run_normalize(&url)?,
            CliCommand::Encode { text, unreserved } => run_encode(&cfg, &text, unreserved)?,
            CliCommand::Decode { text } => run_decode(&text)?,
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
