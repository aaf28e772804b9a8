//! Persistence of the hidden-stat string.
//!
//! Format: a little-endian `u32` format version followed by the payload.
//! Version 1 carries a bitcode-encoded [`HiddenStatsPayload`]. Older saves
//! stored the bare comma-separated string with no header at all; those are
//! recognized by their content and read as version 0.
//!
//! [`HiddenStatsSavePlugin`] reads `<data folder>/hidden-stats.bin` at
//! startup and rewrites it whenever the accepted string changes.

use std::fmt;

use bevy::prelude::*;

use crate::config::{ModConfig, HIDDEN_STATS_FILE, HIDDEN_STATS_FORMAT_VERSION};
use crate::data_folder::{read_data_file, write_data_file};
use crate::HostUpdateSet;

// ---------------------------------------------------------------------------
// SaveDataError
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveDataError {
    /// Payload bytes were corrupt.
    Decode(String),
    /// Written by a newer build.
    UnsupportedVersion { found: u32, max: u32 },
}

impl fmt::Display for SaveDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveDataError::Decode(msg) => write!(f, "Decoding error: {msg}"),
            SaveDataError::UnsupportedVersion { found, max } => write!(
                f,
                "Version mismatch: data is v{found}, but this build only supports up to v{max}"
            ),
        }
    }
}

impl std::error::Error for SaveDataError {}

impl From<bitcode::Error> for SaveDataError {
    fn from(e: bitcode::Error) -> Self {
        SaveDataError::Decode(e.to_string())
    }
}

impl From<std::str::Utf8Error> for SaveDataError {
    fn from(e: std::str::Utf8Error) -> Self {
        SaveDataError::Decode(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// Codec
// ---------------------------------------------------------------------------

#[derive(bitcode::Encode, bitcode::Decode, Debug, Clone, PartialEq)]
struct HiddenStatsPayload {
    hidden: String,
}

pub fn encode_hidden_stats(hidden: &str) -> Vec<u8> {
    let mut bytes = HIDDEN_STATS_FORMAT_VERSION.to_le_bytes().to_vec();
    bytes.extend(bitcode::encode(&HiddenStatsPayload {
        hidden: hidden.to_string(),
    }));
    bytes
}

/// Headerless saves only ever contained stat ids and commas.
fn is_legacy_string(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .all(|b| b.is_ascii_alphanumeric() || *b == b',')
}

pub fn decode_hidden_stats(bytes: &[u8]) -> Result<String, SaveDataError> {
    if is_legacy_string(bytes) {
        return Ok(std::str::from_utf8(bytes)?.to_string());
    }
    let Some((header, payload)) = bytes.split_first_chunk::<4>() else {
        return Err(SaveDataError::Decode(format!(
            "{} bytes is too short for a format header",
            bytes.len()
        )));
    };
    match u32::from_le_bytes(*header) {
        0 => Ok(std::str::from_utf8(payload)?.to_string()),
        1 => Ok(bitcode::decode::<HiddenStatsPayload>(payload)?.hidden),
        found => Err(SaveDataError::UnsupportedVersion {
            found,
            max: HIDDEN_STATS_FORMAT_VERSION,
        }),
    }
}

// ---------------------------------------------------------------------------
// Resource
// ---------------------------------------------------------------------------

/// The hidden-stat string as the host last accepted it.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct HiddenStatsData {
    pub hidden: String,
}

impl HiddenStatsData {
    pub fn to_bytes(&self) -> Vec<u8> {
        encode_hidden_stats(&self.hidden)
    }

    /// Decode saved bytes. Corrupt or too-new data falls back to `Default`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match decode_hidden_stats(bytes) {
            Ok(hidden) => Self { hidden },
            Err(e) => {
                warn!(
                    "[HiddenStatsSave] failed to decode {} bytes, falling back to default: {}",
                    bytes.len(),
                    e
                );
                Self::default()
            }
        }
    }
}

/// The string last read from or written to disk.
#[derive(Resource, Debug, Default)]
struct LastSavedHiddenStats(String);

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

fn load_hidden_stats(
    config: Res<ModConfig>,
    mut hidden: ResMut<HiddenStatsData>,
    mut last_saved: ResMut<LastSavedHiddenStats>,
) {
    match read_data_file(&config.data_dir, HIDDEN_STATS_FILE) {
        Ok(Some(bytes)) => {
            let loaded = HiddenStatsData::from_bytes(&bytes);
            info!("[HiddenStatsSave] loaded hidden stats: '{}'", loaded.hidden);
            last_saved.0 = loaded.hidden.clone();
            hidden.set_if_neq(loaded);
        }
        Ok(None) => debug!("[HiddenStatsSave] no saved hidden stats"),
        Err(e) => warn!(
            "[HiddenStatsSave] failed to read '{}': {}",
            config.data_dir.join(HIDDEN_STATS_FILE).display(),
            e
        ),
    }
}

fn save_hidden_stats(
    config: Res<ModConfig>,
    hidden: Res<HiddenStatsData>,
    mut last_saved: ResMut<LastSavedHiddenStats>,
) {
    if !hidden.is_changed() || hidden.hidden == last_saved.0 {
        return;
    }
    match write_data_file(&config.data_dir, HIDDEN_STATS_FILE, &hidden.to_bytes()) {
        Ok(path) => {
            debug!("[HiddenStatsSave] saved '{}' to {}", hidden.hidden, path.display());
            last_saved.0 = hidden.hidden.clone();
        }
        Err(e) => warn!("[HiddenStatsSave] failed to save hidden stats: {}", e),
    }
}

/// Keeps the hidden-stat string in the data folder across sessions. Added by
/// the application next to [`crate::HostPlugin`].
pub struct HiddenStatsSavePlugin;

impl Plugin for HiddenStatsSavePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HiddenStatsData>()
            .init_resource::<LastSavedHiddenStats>()
            .add_systems(Startup, load_hidden_stats)
            .add_systems(Update, save_hidden_stats.in_set(HostUpdateSet::Publish));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_format_has_version_header() {
        let bytes = encode_hidden_stats("crimeRate,fireHazard");
        assert_eq!(&bytes[..4], &1u32.to_le_bytes());
        assert_eq!(
            decode_hidden_stats(&bytes),
            Ok("crimeRate,fireHazard".to_string())
        );
    }

    #[test]
    fn test_legacy_headerless_string() {
        assert_eq!(
            decode_hidden_stats(b"unemployment,parkingAvailability"),
            Ok("unemployment,parkingAvailability".to_string())
        );
        assert_eq!(decode_hidden_stats(b""), Ok(String::new()));
    }

    #[test]
    fn test_version_zero_header() {
        let mut bytes = 0u32.to_le_bytes().to_vec();
        bytes.extend_from_slice(b"crimeRate");
        assert_eq!(decode_hidden_stats(&bytes), Ok("crimeRate".to_string()));
    }

    #[test]
    fn test_newer_version_is_rejected() {
        let mut bytes = 9u32.to_le_bytes().to_vec();
        bytes.extend_from_slice(&[1, 2, 3]);
        assert_eq!(
            decode_hidden_stats(&bytes),
            Err(SaveDataError::UnsupportedVersion { found: 9, max: 1 })
        );
    }

    #[test]
    fn test_corrupt_payload_is_decode_error() {
        let bytes = 1u32.to_le_bytes().to_vec();
        assert!(matches!(
            decode_hidden_stats(&bytes),
            Err(SaveDataError::Decode(_))
        ));
    }

    #[test]
    fn test_short_binary_is_decode_error() {
        assert!(matches!(
            decode_hidden_stats(&[0x01, 0x02]),
            Err(SaveDataError::Decode(_))
        ));
    }

    #[test]
    fn test_load_falls_back_on_error() {
        let mut bytes = 7u32.to_le_bytes().to_vec();
        bytes.push(0);
        assert_eq!(HiddenStatsData::from_bytes(&bytes), HiddenStatsData::default());
    }

    #[test]
    fn test_bytes_roundtrip() {
        let data = HiddenStatsData {
            hidden: "mailAvailability".to_string(),
        };
        assert_eq!(HiddenStatsData::from_bytes(&data.to_bytes()), data);
    }

    #[test]
    fn test_error_display() {
        let err = SaveDataError::UnsupportedVersion { found: 3, max: 1 };
        assert!(format!("{err}").contains("v3"));
    }

    // -----------------------------------------------------------------------
    // Data folder
    // -----------------------------------------------------------------------

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("city-stats-save-{name}-{}", std::process::id()))
    }

    fn save_app(dir: &std::path::Path) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(ModConfig {
                data_dir: dir.to_path_buf(),
                ..ModConfig::default()
            })
            .configure_sets(Update, HostUpdateSet::Publish)
            .add_plugins(HiddenStatsSavePlugin);
        app.update();
        app
    }

    #[test]
    fn test_nothing_written_until_changed() {
        let dir = scratch_dir("untouched");
        let _ = std::fs::remove_dir_all(&dir);
        let mut app = save_app(&dir);
        app.update();
        assert!(!dir.join(HIDDEN_STATS_FILE).exists());
    }

    #[test]
    fn test_change_is_written_and_restored() {
        let dir = scratch_dir("restore");
        let _ = std::fs::remove_dir_all(&dir);
        let mut app = save_app(&dir);
        app.world_mut().resource_mut::<HiddenStatsData>().hidden = "crimeRate".to_string();
        app.update();
        let bytes = std::fs::read(dir.join(HIDDEN_STATS_FILE)).unwrap();
        assert_eq!(decode_hidden_stats(&bytes), Ok("crimeRate".to_string()));

        let next = save_app(&dir);
        assert_eq!(next.world().resource::<HiddenStatsData>().hidden, "crimeRate");
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_legacy_file_is_read() {
        let dir = scratch_dir("legacy");
        let _ = std::fs::remove_dir_all(&dir);
        write_data_file(&dir, HIDDEN_STATS_FILE, b"unemployment").unwrap();
        let app = save_app(&dir);
        assert_eq!(app.world().resource::<HiddenStatsData>().hidden, "unemployment");
        let _ = std::fs::remove_dir_all(&dir);
    }
}
