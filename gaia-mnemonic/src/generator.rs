//! # Generator Module.
//!
//! This module provides the `PhraseGenerator` abstraction and its BIP-39
//! implementation backed by the operating system entropy source.

use crate::{error::GaiaError, phrase::MnemonicPhrase};
use ethers::signers::coins_bip39::{English, Mnemonic};
use log::trace;
use rand::{
	rngs::{OsRng, StdRng},
	SeedableRng,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source of fresh mnemonic phrases.
pub trait PhraseGenerator {
	/// Generates a new, independent phrase.
	fn generate(&self) -> Result<MnemonicPhrase, GaiaError>;
}

/// BIP-39 entropy strength.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Strength {
	/// 128 bits, 12 words.
	Bits128,
	/// 160 bits, 15 words.
	Bits160,
	/// 192 bits, 18 words.
	Bits192,
	/// 224 bits, 21 words.
	Bits224,
	/// 256 bits, 24 words.
	#[default]
	Bits256,
}

impl Strength {
	/// Returns the number of entropy bits.
	pub fn bits(self) -> u32 {
		match self {
			Strength::Bits128 => 128,
			Strength::Bits160 => 160,
			Strength::Bits192 => 192,
			Strength::Bits224 => 224,
			Strength::Bits256 => 256,
		}
	}

	/// Returns the number of words in a phrase of this strength.
	///
	/// Every 32 bits of entropy add one checksum bit, and every word carries 11 bits.
	pub fn word_count(self) -> usize {
		let bits = self.bits() as usize;
		(bits + bits / 32) / 11
	}
}

impl TryFrom<u32> for Strength {
	type Error = GaiaError;

	fn try_from(bits: u32) -> Result<Self, Self::Error> {
		match bits {
			128 => Ok(Strength::Bits128),
			160 => Ok(Strength::Bits160),
			192 => Ok(Strength::Bits192),
			224 => Ok(Strength::Bits224),
			256 => Ok(Strength::Bits256),
			_ => Err(GaiaError::InvalidArgument(format!(
				"Unsupported entropy strength: {} bits. Expected 128, 160, 192, 224 or 256.",
				bits
			))),
		}
	}
}

impl From<Strength> for u32 {
	fn from(strength: Strength) -> Self {
		strength.bits()
	}
}

impl fmt::Display for Strength {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} bits", self.bits())
	}
}

/// Generates English BIP-39 mnemonics.
///
/// Each phrase is drawn from its own generator seeded straight from the OS,
/// so no entropy is shared between the phrases of a batch.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bip39Generator {
	strength: Strength,
}

impl Bip39Generator {
	/// Creates a new Bip39Generator.
	pub fn new(strength: Strength) -> Self {
		Self { strength }
	}

	/// Returns the configured strength.
	pub fn strength(&self) -> Strength {
		self.strength
	}
}

impl PhraseGenerator for Bip39Generator {
	fn generate(&self) -> Result<MnemonicPhrase, GaiaError> {
		let mut rng = StdRng::from_rng(OsRng)
			.map_err(|e| GaiaError::GenerationFailure(format!("Entropy unavailable: {}", e)))?;

		let mnemonic = Mnemonic::<English>::new_with_count(&mut rng, self.strength.word_count())
			.map_err(|e| GaiaError::GenerationFailure(e.to_string()))?;
		trace!("Generated a {} mnemonic", self.strength);

		MnemonicPhrase::new(mnemonic.to_phrase())
			.map_err(|e| GaiaError::GenerationFailure(e.to_string()))
	}
}
