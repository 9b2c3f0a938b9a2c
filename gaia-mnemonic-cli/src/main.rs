//! # Gaia Mnemonic CLI
//!
//! This crate provides a CLI interface to the `gaia-mnemonic` library.
//! Generated documents go to stdout, logs go to stderr.

#![warn(trivial_casts)]
#![deny(
	absolute_paths_not_starting_with_crate, deprecated, future_incompatible, missing_docs,
	nonstandard_style, unreachable_code, unreachable_patterns
)]
#![forbid(unsafe_code)]
#![deny(
	// Complexity
 	clippy::unnecessary_cast,
	clippy::needless_question_mark,
	// Pedantic
 	clippy::cast_lossless,
 	clippy::cast_possible_wrap,
	// Perf
	clippy::redundant_clone,
	// Restriction
 	clippy::panic,
	// Style
 	clippy::let_and_return,
 	clippy::needless_borrow
)]

mod cli;
mod fs;

use clap::Parser;
use cli::*;
use dotenv::dotenv;
use env_logger::{init_from_env, Env};
use fs::load_config;
use gaia_mnemonic::error::GaiaError;
use log::debug;

fn main() -> Result<(), GaiaError> {
	dotenv().ok();
	init_from_env(Env::default().filter_or("LOG_LEVEL", "info"));
	let mode = Cli::parse().mode;
	let config = load_config()?;

	match mode.render_args(&config) {
		Some((render_mode, count)) => {
			debug!("Rendering {} for {} node(s)", render_mode, count);
			handle_render(config, render_mode, count)?
		},
		None => handle_show(&config)?,
	};

	Ok(())
}
