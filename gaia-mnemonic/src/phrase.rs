//! # Phrase Module.
//!
//! This module contains the mnemonic phrase type and the named output records
//! the renderers emit.

use crate::error::GaiaError;
use std::fmt;

/// Variable name prefix of the primary mnemonic.
pub const MNEMONIC_PREFIX: &str = "MNEMONIC";
/// Variable name prefix of the relayer mnemonic.
pub const RELAYER_MNEMONIC_PREFIX: &str = "RELAYER_MNEMONIC";

/// A mnemonic phrase: words separated by single spaces.
///
/// Rendered values are wrapped in double quotes without escaping, so the
/// phrase can't contain quotes, backslashes or control characters.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct MnemonicPhrase(String);

impl MnemonicPhrase {
	/// Creates a new phrase, validating that it is safe to quote.
	pub fn new(phrase: String) -> Result<Self, GaiaError> {
		if phrase.is_empty() {
			return Err(GaiaError::InvalidArgument("Empty mnemonic phrase.".to_string()));
		}

		if phrase.chars().any(|c| c == '"' || c == '\\' || c.is_control()) {
			return Err(GaiaError::InvalidArgument(
				"Mnemonic phrase contains characters that require escaping.".to_string(),
			));
		}

		if phrase.split(' ').any(str::is_empty) {
			return Err(GaiaError::InvalidArgument(
				"Mnemonic words must be separated by single spaces.".to_string(),
			));
		}

		Ok(Self(phrase))
	}

	/// Returns the phrase as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Returns an iterator over the words of the phrase.
	pub fn words(&self) -> impl Iterator<Item = &str> {
		self.0.split(' ')
	}

	/// Returns the number of words in the phrase.
	pub fn word_count(&self) -> usize {
		self.words().count()
	}
}

// Keeps secrets out of logs and panic messages.
impl fmt::Debug for MnemonicPhrase {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "MnemonicPhrase(<{} words>)", self.word_count())
	}
}

impl fmt::Display for MnemonicPhrase {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// A named phrase, as written to the output document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputRecord<'a> {
	name: String,
	phrase: &'a MnemonicPhrase,
}

impl<'a> OutputRecord<'a> {
	/// Creates the `MNEMONIC_<index>` record.
	pub fn primary(index: usize, phrase: &'a MnemonicPhrase) -> Self {
		Self { name: format!("{}_{}", MNEMONIC_PREFIX, index), phrase }
	}

	/// Creates the `RELAYER_MNEMONIC_<index>` record.
	pub fn relayer(index: usize, phrase: &'a MnemonicPhrase) -> Self {
		Self { name: format!("{}_{}", RELAYER_MNEMONIC_PREFIX, index), phrase }
	}

	/// Returns the variable name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the phrase.
	pub fn phrase(&self) -> &MnemonicPhrase {
		self.phrase
	}
}

/// Pairs up `phrases` into `pairs` primary/relayer records, numbered from
/// `first_index`. Phrases beyond `2 * pairs` are ignored.
pub fn pair_records(
	phrases: &[MnemonicPhrase], first_index: usize, pairs: usize,
) -> Result<Vec<OutputRecord<'_>>, GaiaError> {
	let required = pairs.checked_mul(2).ok_or_else(|| {
		GaiaError::InvalidArgument(format!("Pair count {} is too large.", pairs))
	})?;

	if phrases.len() < required {
		return Err(GaiaError::InvalidArgument(format!(
			"Expected at least {} phrases, got {}.",
			required,
			phrases.len()
		)));
	}

	let records = phrases[..required]
		.chunks_exact(2)
		.enumerate()
		.flat_map(|(i, pair)| {
			let index = first_index + i;
			[OutputRecord::primary(index, &pair[0]), OutputRecord::relayer(index, &pair[1])]
		})
		.collect();

	Ok(records)
}

#[cfg(test)]
mod tests {
	use crate::phrase::*;

	fn phrase(text: &str) -> MnemonicPhrase {
		MnemonicPhrase::new(text.to_string()).unwrap()
	}

	#[test]
	fn test_phrase_words() {
		let phrase = phrase("abandon ability able");

		assert_eq!(phrase.word_count(), 3);
		assert_eq!(phrase.words().collect::<Vec<_>>(), vec!["abandon", "ability", "able"]);
		assert_eq!(phrase.to_string(), "abandon ability able");
	}

	#[test]
	fn test_phrase_rejects_unquotable_text() {
		let invalid = [
			"",
			"abandon \"ability\"",
			"abandon\\ability",
			"abandon\nability",
			"abandon\tability",
			"abandon  ability",
			" abandon ability",
			"abandon ability ",
		];

		for text in invalid {
			let result = MnemonicPhrase::new(text.to_string());
			assert!(
				matches!(result, Err(GaiaError::InvalidArgument(_))),
				"accepted {:?}",
				text
			);
		}
	}

	#[test]
	fn test_phrase_debug_is_redacted() {
		let phrase = phrase("zoo zoo wrong");

		assert_eq!(format!("{:?}", phrase), "MnemonicPhrase(<3 words>)");
	}

	#[test]
	fn test_pair_records() {
		let phrases = vec![phrase("a"), phrase("b"), phrase("c"), phrase("d"), phrase("e")];

		let records = pair_records(&phrases, 1, 2).unwrap();
		let rendered: Vec<(&str, &str)> =
			records.iter().map(|record| (record.name(), record.phrase().as_str())).collect();

		assert_eq!(
			rendered,
			vec![
				("MNEMONIC_1", "a"),
				("RELAYER_MNEMONIC_1", "b"),
				("MNEMONIC_2", "c"),
				("RELAYER_MNEMONIC_2", "d"),
			]
		);
	}

	#[test]
	fn test_pair_records_not_enough_phrases() {
		let phrases = vec![phrase("a"), phrase("b"), phrase("c")];

		let result = pair_records(&phrases, 0, 2);

		assert!(matches!(result, Err(GaiaError::InvalidArgument(_))));
	}

	#[test]
	fn test_pair_records_zero_pairs() {
		let records = pair_records(&[], 0, 0).unwrap();

		assert!(records.is_empty());
	}
}
