//! # Storage Module.
//!
//! This module contains the generic storage trait and the JSON file storage
//! used for configuration files. Storage is read-only.

use crate::error::GaiaError;
use serde::de::DeserializeOwned;
use serde_json::from_reader;
use std::{fs::File, io::BufReader, marker::PhantomData, path::PathBuf};

/// The main trait to be implemented by different storage types.
pub trait Storage<T> {
	/// The error type.
	type Err;

	/// Loads data from storage.
	fn load(&self) -> Result<T, Self::Err>;
}

/// The `JSONFileStorage` struct provides a mechanism for retrieving
/// structured data from JSON files.
///
/// # Examples
///
/// ```no_run
/// use gaia_mnemonic::{storage::{JSONFileStorage, Storage}, MnemonicConfig};
/// use std::path::PathBuf;
///
/// let storage = JSONFileStorage::<MnemonicConfig>::new(PathBuf::from("config.json"));
/// let config = storage.load().unwrap();
/// println!("{}", config.secret_name);
/// ```
pub struct JSONFileStorage<T> {
	filepath: PathBuf,
	phantom: PhantomData<T>,
}

impl<T> JSONFileStorage<T> {
	/// Creates a new JSONFileStorage.
	pub fn new(filepath: PathBuf) -> Self {
		Self { filepath, phantom: PhantomData }
	}

	/// Returns the path to the file.
	pub fn filepath(&self) -> &PathBuf {
		&self.filepath
	}
}

impl<T: DeserializeOwned> Storage<T> for JSONFileStorage<T> {
	type Err = GaiaError;

	fn load(&self) -> Result<T, Self::Err> {
		let file = File::open(&self.filepath)
			.map_err(|e| GaiaError::FileIOError(format!("{}: {}", self.filepath.display(), e)))?;
		let reader = BufReader::new(file);
		from_reader(reader).map_err(|e| GaiaError::ParsingError(e.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use crate::storage::*;
	use serde::Deserialize;
	use std::{env::temp_dir, fs};

	#[derive(Debug, Deserialize, PartialEq)]
	struct Record {
		name: String,
		count: u32,
	}

	#[test]
	fn test_json_file_storage() {
		let filepath = temp_dir().join("gaia-mnemonic-storage-test.json");
		fs::write(&filepath, r#"{ "name": "gaia-mnemonics", "count": 3 }"#).unwrap();
		let json_storage = JSONFileStorage::<Record>::new(filepath.clone());

		let result = json_storage.load();

		assert!(result.is_ok());
		assert_eq!(result.unwrap(), Record { name: "gaia-mnemonics".to_string(), count: 3 });

		// Clean up
		fs::remove_file(filepath).unwrap();
	}

	#[test]
	fn test_json_file_storage_missing_file() {
		let filepath = temp_dir().join("gaia-mnemonic-storage-missing.json");
		let json_storage = JSONFileStorage::<Record>::new(filepath);

		assert!(matches!(json_storage.load(), Err(GaiaError::FileIOError(_))));
	}

	#[test]
	fn test_json_file_storage_invalid_json() {
		let filepath = temp_dir().join("gaia-mnemonic-storage-invalid.json");
		fs::write(&filepath, "{ not json").unwrap();
		let json_storage = JSONFileStorage::<Record>::new(filepath.clone());

		assert!(matches!(json_storage.load(), Err(GaiaError::ParsingError(_))));

		// Clean up
		fs::remove_file(filepath).unwrap();
	}
}
