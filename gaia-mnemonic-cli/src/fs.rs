//! # Filesystem Actions Module.
//!
//! This module provides configuration loading and output writing.

use dotenv::var;
use gaia_mnemonic::{
	error::GaiaError,
	storage::{JSONFileStorage, Storage},
	MnemonicConfig,
};
use log::{debug, warn};
use std::{
	env::current_dir,
	io::Write,
	path::PathBuf,
};

/// Configuration file name.
pub const CONFIG_FILENAME: &str = "config";
/// Environment variable overriding the configuration file path.
pub const CONFIG_PATH_VAR: &str = "GAIA_MNEMONIC_CONFIG";

/// Enum representing the possible file extensions.
pub enum FileType {
	/// JSON file.
	Json,
}

impl FileType {
	/// Converts the enum variant into its corresponding file extension.
	fn as_str(&self) -> &'static str {
		match self {
			FileType::Json => "json",
		}
	}
}

/// Retrieves the path to the `assets` directory.
pub fn get_assets_path() -> Result<PathBuf, GaiaError> {
	current_dir().map_err(|e| GaiaError::FileIOError(e.to_string())).map(|current_dir| {
		// Workaround for the tests running in the crate directory.
		#[cfg(test)]
		{
			current_dir.join("assets")
		}

		#[cfg(not(test))]
		{
			current_dir.join("gaia-mnemonic-cli/assets")
		}
	})
}

/// Helper function to get the path of a file in the `assets` directory.
pub fn get_file_path(file_name: &str, file_type: FileType) -> Result<PathBuf, GaiaError> {
	let assets_path = get_assets_path()?;
	Ok(assets_path.join(format!("{}.{}", file_name, file_type.as_str())))
}

/// Returns the configuration file path, honouring `GAIA_MNEMONIC_CONFIG`.
pub fn get_config_path() -> Result<PathBuf, GaiaError> {
	match var(CONFIG_PATH_VAR) {
		Ok(path) => Ok(PathBuf::from(path)),
		Err(_) => get_file_path(CONFIG_FILENAME, FileType::Json),
	}
}

/// Loads the configuration file, falling back to defaults when it is absent.
pub fn load_config() -> Result<MnemonicConfig, GaiaError> {
	load_config_from(get_config_path()?)
}

/// Loads and validates the configuration at `filepath`.
pub fn load_config_from(filepath: PathBuf) -> Result<MnemonicConfig, GaiaError> {
	let config = if filepath.exists() {
		debug!("Loading config from \"{}\"", filepath.display());
		JSONFileStorage::<MnemonicConfig>::new(filepath).load()?
	} else {
		warn!("Config file \"{}\" not found. Using defaults.", filepath.display());
		MnemonicConfig::default()
	};

	config.validate()?;

	Ok(config)
}

/// Writes a finished document to `out` in a single write.
pub fn write_output<W: Write>(mut out: W, document: &str) -> Result<(), GaiaError> {
	out.write_all(document.as_bytes()).map_err(GaiaError::IOFailure)?;
	out.flush().map_err(GaiaError::IOFailure)
}
