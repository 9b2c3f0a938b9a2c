//! # Gaia Mnemonic
//!
//! A library for generating batches of BIP-39 mnemonics for Gaia nodes and
//! rendering them as text.
//!
//! ## Main characteristics:
//!
//! **Independent** - every phrase in a batch comes from fresh OS entropy.
//!
//! **Ordered** - phrases are generated and emitted index-ascending, primary
//! before relayer, so generated manifests diff cleanly.
//!
//! **All or nothing** - a single failure aborts the batch and no partial
//! document is produced.
//!
//! ## Output formats
//!
//! - `env`: four `NAME="phrase"` lines for the legacy two-node setup.
//! - `k8s-secret`: a Kubernetes `Secret` manifest with one primary and one
//!   relayer mnemonic per node.

// Rustc
#![warn(trivial_casts)]
#![deny(
	absolute_paths_not_starting_with_crate, deprecated, future_incompatible, missing_docs,
	nonstandard_style, unreachable_code, unreachable_patterns
)]
#![forbid(unsafe_code)]
// Clippy
#![allow(clippy::tabs_in_doc_comments)]
#![deny(
	// Complexity
 	clippy::unnecessary_cast,
	clippy::needless_question_mark,
	clippy::clone_on_copy,
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

pub mod error;
pub mod generator;
pub mod phrase;
pub mod render;
pub mod storage;

use error::GaiaError;
use generator::{PhraseGenerator, Strength};
use log::{debug, info};
use phrase::MnemonicPhrase;
use render::{RenderMode, DEFAULT_SECRET_NAME, ENV_PAIRS};
use serde::{Deserialize, Serialize};

/// Default number of nodes in a Kubernetes Secret.
pub const DEFAULT_NODE_COUNT: usize = 2;

/// Formatter configuration settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MnemonicConfig {
	/// Kubernetes Secret name.
	pub secret_name: String,
	/// Number of nodes rendered when no count is given.
	pub node_count: usize,
	/// Entropy strength of generated phrases.
	pub strength: Strength,
}

impl Default for MnemonicConfig {
	fn default() -> Self {
		Self {
			secret_name: DEFAULT_SECRET_NAME.to_string(),
			node_count: DEFAULT_NODE_COUNT,
			strength: Strength::default(),
		}
	}
}

impl MnemonicConfig {
	/// Checks that the settings can produce a valid document.
	pub fn validate(&self) -> Result<(), GaiaError> {
		render::validate_secret_name(&self.secret_name)
			.map_err(|e| GaiaError::ConfigurationError(e.to_string()))?;

		if self.node_count == 0 {
			return Err(GaiaError::ConfigurationError(
				"Node count must be positive.".to_string(),
			));
		}

		Ok(())
	}

	/// Serializes the settings as pretty-printed JSON, the `config.json` format.
	pub fn to_json(&self) -> Result<String, GaiaError> {
		serde_json::to_string_pretty(self).map_err(|e| GaiaError::ParsingError(e.to_string()))
	}
}

/// Generates mnemonic batches and renders them.
pub struct MnemonicBatchFormatter<G: PhraseGenerator> {
	generator: G,
	config: MnemonicConfig,
}

impl<G: PhraseGenerator> MnemonicBatchFormatter<G> {
	/// Creates a new MnemonicBatchFormatter instance.
	pub fn new(generator: G, config: MnemonicConfig) -> Self {
		Self { generator, config }
	}

	/// Returns the configuration.
	pub fn get_config(&self) -> &MnemonicConfig {
		&self.config
	}

	/// Generates `count` primary/relayer pairs, `2 * count` phrases in total.
	///
	/// Phrases are ordered primary then relayer for each index. The first
	/// generator failure aborts the batch and is returned as is.
	pub fn generate_batch(&self, count: usize) -> Result<Vec<MnemonicPhrase>, GaiaError> {
		if count == 0 {
			return Err(GaiaError::InvalidArgument("Count must be positive.".to_string()));
		}

		let total = count.checked_mul(2).ok_or_else(|| {
			GaiaError::InvalidArgument(format!("Count {} is too large.", count))
		})?;
		let expected_words = self.config.strength.word_count();

		debug!("Generating {} mnemonics ({})", total, self.config.strength);

		let mut phrases = Vec::with_capacity(total);
		for _ in 0..total {
			let phrase = self.generator.generate()?;

			if phrase.word_count() != expected_words {
				return Err(GaiaError::GenerationFailure(format!(
					"Expected a {}-word mnemonic, got {} words.",
					expected_words,
					phrase.word_count()
				)));
			}

			phrases.push(phrase);
		}

		Ok(phrases)
	}

	/// Renders the legacy two-node `env` format from the first four phrases.
	pub fn render_env(&self, phrases: &[MnemonicPhrase]) -> Result<String, GaiaError> {
		render::render_env(phrases)
	}

	/// Renders `count` pairs as a Kubernetes Secret with the configured name.
	pub fn render_k8s_secret(
		&self, phrases: &[MnemonicPhrase], count: usize,
	) -> Result<String, GaiaError> {
		render::render_k8s_secret(&self.config.secret_name, phrases, count)
	}

	/// Generates a batch and renders it in the given mode.
	///
	/// The `env` mode always generates two pairs and ignores `count`.
	pub fn render(&self, mode: RenderMode, count: usize) -> Result<String, GaiaError> {
		let document = match mode {
			RenderMode::Env => {
				let phrases = self.generate_batch(ENV_PAIRS)?;
				self.render_env(&phrases)?
			},
			RenderMode::K8sSecret => {
				let phrases = self.generate_batch(count)?;
				self.render_k8s_secret(&phrases, count)?
			},
		};

		info!("Rendered {} document", mode);

		Ok(document)
	}
}
