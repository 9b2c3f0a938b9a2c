//! # CLI Module.
//!
//! This module contains all CLI related data handling and command handlers.

use crate::fs::write_output;
use clap::{Args, Parser, Subcommand};
use gaia_mnemonic::{
	error::GaiaError,
	generator::Bip39Generator,
	render::{RenderMode, ENV_PAIRS},
	MnemonicBatchFormatter, MnemonicConfig,
};
use std::io::stdout;

/// Generates BIP-39 mnemonics for Gaia nodes and relayers.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
	#[command(subcommand)]
	pub mode: Mode,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Mode {
	/// Print MNEMONIC_1..2 and RELAYER_MNEMONIC_1..2 as environment variables.
	Env,
	/// Print a Kubernetes Secret manifest. Accepts an optional node count.
	#[command(name = "k8s-secret")]
	K8sSecret(K8sSecretData),
	/// Print the effective configuration as JSON.
	Show,
}

/// Kubernetes Secret subcommand input.
#[derive(Args, Debug)]
pub struct K8sSecretData {
	/// Number of nodes (defaults to the configured node count).
	#[arg(value_name = "COUNT")]
	count: Option<usize>,
}

impl Mode {
	/// Returns the render mode and pair count of a rendering command.
	pub fn render_args(&self, config: &MnemonicConfig) -> Option<(RenderMode, usize)> {
		match self {
			Mode::Env => Some((RenderMode::Env, ENV_PAIRS)),
			Mode::K8sSecret(data) => {
				Some((RenderMode::K8sSecret, data.count.unwrap_or(config.node_count)))
			},
			Mode::Show => None,
		}
	}
}

/// Handle `env` and `k8s-secret` commands.
pub fn handle_render(
	config: MnemonicConfig, mode: RenderMode, count: usize,
) -> Result<(), GaiaError> {
	let generator = Bip39Generator::new(config.strength);
	let formatter = MnemonicBatchFormatter::new(generator, config);

	// Nothing reaches stdout unless the whole document rendered.
	let document = formatter.render(mode, count)?;
	write_output(stdout().lock(), &document)
}

/// Handle `show` command.
pub fn handle_show(config: &MnemonicConfig) -> Result<(), GaiaError> {
	let json = config.to_json()?;
	write_output(stdout().lock(), &format!("{}\n", json))
}
