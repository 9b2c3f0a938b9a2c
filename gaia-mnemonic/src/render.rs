//! # Render Module.
//!
//! This module renders mnemonic phrases into the two supported text formats.
//!
//! The `env` format is a legacy two-node layout: it always emits exactly four
//! variables numbered from 1. The `k8s-secret` format emits one pair per node,
//! numbered from 0. Both numbering schemes are relied upon by deployments.

use crate::{
	error::GaiaError,
	phrase::{pair_records, MnemonicPhrase, OutputRecord},
};
use std::{fmt, str::FromStr};

/// Number of node pairs in the `env` format.
pub const ENV_PAIRS: usize = 2;
/// Index of the first pair in the `env` format.
pub const ENV_FIRST_INDEX: usize = 1;
/// Index of the first pair in the `k8s-secret` format.
pub const K8S_SECRET_FIRST_INDEX: usize = 0;
/// Default name of the Kubernetes Secret.
pub const DEFAULT_SECRET_NAME: &str = "gaia-mnemonics";
/// Maximum length of a Kubernetes object name.
pub const MAX_SECRET_NAME_LEN: usize = 253;

/// Output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
	/// Shell-style `NAME="value"` lines.
	Env,
	/// Kubernetes Secret manifest.
	K8sSecret,
}

impl RenderMode {
	/// Returns the mode name.
	pub fn as_str(&self) -> &'static str {
		match self {
			RenderMode::Env => "env",
			RenderMode::K8sSecret => "k8s-secret",
		}
	}
}

impl FromStr for RenderMode {
	type Err = GaiaError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"env" => Ok(RenderMode::Env),
			"k8s-secret" => Ok(RenderMode::K8sSecret),
			_ => Err(GaiaError::InvalidArgument(format!("Unknown render mode: {}", s))),
		}
	}
}

impl fmt::Display for RenderMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Renders the first four phrases as `MNEMONIC_1`, `RELAYER_MNEMONIC_1`,
/// `MNEMONIC_2` and `RELAYER_MNEMONIC_2`. Any further phrases are ignored.
pub fn render_env(phrases: &[MnemonicPhrase]) -> Result<String, GaiaError> {
	let records = pair_records(phrases, ENV_FIRST_INDEX, ENV_PAIRS)?;

	Ok(records.iter().map(env_line).collect())
}

/// Renders `count` phrase pairs as a Kubernetes Secret named `secret_name`.
///
/// A `count` of zero yields the manifest header alone.
pub fn render_k8s_secret(
	secret_name: &str, phrases: &[MnemonicPhrase], count: usize,
) -> Result<String, GaiaError> {
	validate_secret_name(secret_name)?;

	let records = pair_records(phrases, K8S_SECRET_FIRST_INDEX, count)?;

	let mut document = format!(
		"---\napiVersion: v1\nkind: Secret\nmetadata:\n  name: {}\nstringData:\n",
		secret_name
	);
	document.extend(records.iter().map(string_data_line));

	Ok(document)
}

/// Checks that `name` is a DNS-1123 subdomain, as Kubernetes requires for
/// Secret names. Such a name is also a plain YAML scalar, so it needs no quoting.
pub fn validate_secret_name(name: &str) -> Result<(), GaiaError> {
	let invalid = |reason: &str| {
		Err(GaiaError::InvalidArgument(format!("Invalid secret name {:?}: {}", name, reason)))
	};

	if name.is_empty() {
		return invalid("empty");
	}

	if name.len() > MAX_SECRET_NAME_LEN {
		return invalid("longer than 253 characters");
	}

	let allowed = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit();
	if !name.chars().all(|c| allowed(c) || c == '-' || c == '.') {
		return invalid("only lowercase alphanumerics, '-' and '.' are allowed");
	}

	let first = name.chars().next().map_or(false, allowed);
	let last = name.chars().last().map_or(false, allowed);
	if !(first && last) {
		return invalid("must start and end with an alphanumeric character");
	}

	Ok(())
}

fn env_line(record: &OutputRecord) -> String {
	format!("{}=\"{}\"\n", record.name(), record.phrase())
}

fn string_data_line(record: &OutputRecord) -> String {
	format!("  {}: \"{}\"\n", record.name(), record.phrase())
}
