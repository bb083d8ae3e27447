/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

mod commands;
use commands::{codes::CodesArgs, format::FormatArgs, simulate::SimulateArgs};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "hc")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Render an error code the way end users, HTTP clients or logs see it
  Format(FormatArgs),

  /// List known error codes with category, severity and suggestion
  Codes(CodesArgs),

  /// List available locales
  Locales,

  /// Drive concurrent loads through a batch loader and report what was fetched
  Simulate(SimulateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  let cli = Cli::parse();

  // Logs go to stderr so command output can be piped
  let log_level = if cli.verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

  let config = hc_core::Config::from_env().context("Failed to load configuration")?;

  match cli.command {
    Commands::Format(args) => commands::format::execute(args, &config)?,
    Commands::Codes(args) => commands::codes::execute(args)?,
    Commands::Locales => commands::locales::execute(&config),
    Commands::Simulate(args) => commands::simulate::execute(args, &config).await?,
  }

  Ok(())
}
