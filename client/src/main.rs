use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Context;
use clap::Parser;
use signurl_shared::{key::SigningKey, signature::sign_with_key};
use tracing::info;
use tracing_subscriber::EnvFilter;

const SHARED_SECRET_ENV_KEY: &str = "SIGNURL_SHARED_SECRET";
const PROMPT: &str = "URL to sign: ";

/// Signs URLs with a URL signing secret
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// URL signing secret, in URL-safe base64
    #[arg(long, env = SHARED_SECRET_ENV_KEY, hide_env_values = true)]
    secret: String,

    /// URLs to sign. When none are given they are read from stdin, one per line
    urls: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let stdin = io::stdin();
    let prompt = args.urls.is_empty() && stdin.is_terminal();
    run(&args, stdin.lock(), prompt, &mut io::stdout().lock())
}

fn run(
    args: &Args,
    input: impl BufRead,
    prompt: bool,
    output: &mut impl Write,
) -> anyhow::Result<()> {
    let key: SigningKey = args
        .secret
        .parse()
        .context("Failed to decode the signing secret")?;

    let mut signed_count = 0;
    if args.urls.is_empty() {
        let mut lines = input.lines();
        loop {
            if prompt {
                eprint!("{PROMPT}");
            }
            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("Failed to read a URL from stdin")?;
            let url = line.trim();
            if url.is_empty() {
                continue;
            }
            sign_and_print(url, &key, output)?;
            signed_count += 1;
        }
    } else {
        for url in &args.urls {
            sign_and_print(url, &key, output)?;
            signed_count += 1;
        }
    }

    info!(signed_count, "Done signing");
    Ok(())
}

fn sign_and_print(url: &str, key: &SigningKey, output: &mut impl Write) -> anyhow::Result<()> {
    let signed = sign_with_key(url, key).with_context(|| format!("Failed to sign {url}"))?;
    writeln!(output, "{signed}")?;
    Ok(())
}
