#![warn(clippy::all)]
use clap::Parser;
use config::Config;
use prelude::*;
use std::io::Write;

mod config;
mod error;
mod fetch;
mod instances;
mod logging;
mod map_literal;
mod prelude;

/// Print the AWS EC2 instance types from ec2instances.info as a Go map literal
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {}

fn run(cfg: &Config, out: &mut impl Write) -> Result<()> {
    let body = fetch::fetch(cfg).context("can't download instance list")?;
    let records = instances::decode(&body).context(f!("can't decode {}", cfg.url))?;
    let map = map_literal::render(&records)?;
    out.write_all(map.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let _args = Args::parse();
    logging::setup_logging()?;
    run(&Config::default(), &mut std::io::stdout().lock())
}
