//! Effective baud/port resolution from CLI overrides and the INI file.
//!
//! # Resolution order
//!
//! ```text
//! CLI flag (if explicitly set)  →  INI file value  →  validation
//! ```
//!
//! "Explicitly set" means the flag differs from its default: a baud other
//! than `0`, a port other than `""`.  The merged pair must then satisfy
//! `baud > 0` and `port != ""`, or resolution fails and the bridge never
//! touches the serial device.
//!
//! # INI layout
//!
//! `baud` and `port` are read from the top of the file, before any
//! `[section]` header:
//!
//! ```ini
//! baud=9600
//! port=/dev/ttyUSB0
//! A=shift+1
//! ```
//!
//! The mapping lines (`A=shift+1`) are ordinary INI keys to this parser and
//! are ignored here; [`super::mapping`] reads them in a separate pass.

use std::path::Path;

use ini::{Ini, ParseOption};
use tracing::{debug, warn};

use super::error::ConfigError;

/// Baud and port as given on the command line.
///
/// `baud == 0` and `port == ""` mean "not given; use the file value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub baud: i64,
    pub port: String,
}

/// The final, validated serial settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    /// Baud rate, always above zero.
    pub baud: u32,
    /// OS device name (`/dev/ttyUSB0`, `COM3`), never empty.
    pub port: String,
}

/// Values read from the INI file.  Missing keys stay at their defaults.
#[derive(Debug, Default, PartialEq, Eq)]
struct FileSettings {
    baud: i64,
    port: String,
}

/// Resolves the effective serial settings.
///
/// # Errors
///
/// - [`ConfigError::NotFound`] if `path` does not exist.
/// - [`ConfigError::Io`] if the file exists but cannot be read.
/// - [`ConfigError::Parse`] if the file is not valid INI.
/// - [`ConfigError::InvalidBaud`] if the merged baud is not above zero.
/// - [`ConfigError::InvalidPort`] if the merged port is empty.
pub fn resolve(overrides: &CliOverrides, path: &Path) -> Result<EffectiveConfig, ConfigError> {
    match path.try_exists() {
        Ok(true) => {}
        Ok(false) => {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    let bytes = std::fs::read(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes);
    let file = parse_file_settings(&content).map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    })?;
    debug!(path = %path.display(), ?file, "read serial settings from config file");

    merge(overrides, file)
}

/// Parses `baud`/`port` from the general section of INI text.
///
/// Quote and escape processing are off so mapping values such as `\` or
/// `'` do not make an otherwise valid file unparsable.  A `;` or `#`
/// preceded by whitespace starts an inline comment.
fn parse_file_settings(content: &str) -> Result<FileSettings, String> {
    let opt = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    };
    let ini = Ini::load_from_str_opt(content, opt).map_err(|e| e.to_string())?;
    let general = ini.section(None::<String>);
    let value = |key: &str| general.and_then(|props| props.get(key)).map(str::trim);

    let baud = match value("baud") {
        None => 0,
        Some(raw) => raw.parse::<i64>().unwrap_or_else(|_| {
            warn!(value = raw, "baud in config file is not an integer; ignoring it");
            0
        }),
    };
    let port = value("port").unwrap_or_default().to_string();

    Ok(FileSettings { baud, port })
}

fn merge(overrides: &CliOverrides, file: FileSettings) -> Result<EffectiveConfig, ConfigError> {
    let baud = if overrides.baud != 0 {
        overrides.baud
    } else {
        file.baud
    };
    let port = if overrides.port.is_empty() {
        file.port
    } else {
        overrides.port.clone()
    };

    if baud <= 0 {
        return Err(ConfigError::InvalidBaud(baud));
    }
    let baud = u32::try_from(baud).map_err(|_| ConfigError::InvalidBaud(baud))?;
    if port.is_empty() {
        return Err(ConfigError::InvalidPort);
    }

    Ok(EffectiveConfig { baud, port })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn file(baud: i64, port: &str) -> FileSettings {
        FileSettings {
            baud,
            port: port.to_string(),
        }
    }

    fn cli(baud: i64, port: &str) -> CliOverrides {
        CliOverrides {
            baud,
            port: port.to_string(),
        }
    }

    // ── parse_file_settings ───────────────────────────────────────────────────

    #[test]
    fn test_parse_reads_baud_and_port_alongside_mapping_lines() {
        // Arrange
        let content = "baud=9600\nport=/dev/ttyUSB0\nA=shift+1\nB=ctrl+c\n";

        // Act
        let settings = parse_file_settings(content).unwrap();

        // Assert
        assert_eq!(settings, file(9600, "/dev/ttyUSB0"));
    }

    #[test]
    fn test_parse_missing_keys_default_to_unset() {
        let settings = parse_file_settings("A=shift+1\n").unwrap();
        assert_eq!(settings, FileSettings::default());
    }

    #[test]
    fn test_parse_non_numeric_baud_is_treated_as_unset() {
        let settings = parse_file_settings("baud=fast\nport=COM3\n").unwrap();
        assert_eq!(settings, file(0, "COM3"));
    }

    #[test]
    fn test_parse_strips_inline_comments() {
        let settings = parse_file_settings("baud=9600 ; serial rate\nport=COM3 # usb hub\n").unwrap();
        assert_eq!(settings, file(9600, "COM3"));
    }

    #[test]
    fn test_parse_ignores_keys_inside_sections() {
        let settings = parse_file_settings("[serial]\nbaud=9600\nport=COM3\n").unwrap();
        assert_eq!(settings, FileSettings::default());
    }

    #[test]
    fn test_parse_accepts_backslash_and_quote_values() {
        let settings = parse_file_settings("baud=115200\nport=COM4\nX=ctrl+\\\nY='\n").unwrap();
        assert_eq!(settings, file(115200, "COM4"));
    }

    #[test]
    fn test_parse_rejects_unterminated_section_header() {
        assert!(parse_file_settings("baud=9600\n[serial\n").is_err());
    }

    // ── merge ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_merge_uses_file_values_when_cli_unset() {
        let cfg = merge(&CliOverrides::default(), file(9600, "/dev/ttyUSB0")).unwrap();
        assert_eq!(
            cfg,
            EffectiveConfig {
                baud: 9600,
                port: "/dev/ttyUSB0".to_string()
            }
        );
    }

    #[test]
    fn test_merge_cli_values_win_over_file() {
        let cfg = merge(&cli(115200, "COM7"), file(9600, "/dev/ttyUSB0")).unwrap();
        assert_eq!(cfg.baud, 115200);
        assert_eq!(cfg.port, "COM7");
    }

    #[test]
    fn test_merge_cli_baud_only_keeps_file_port() {
        let cfg = merge(&cli(57600, ""), file(9600, "/dev/ttyACM0")).unwrap();
        assert_eq!(cfg.baud, 57600);
        assert_eq!(cfg.port, "/dev/ttyACM0");
    }

    #[test]
    fn test_merge_fails_with_invalid_baud_when_both_unset() {
        let err = merge(&CliOverrides::default(), file(0, "COM3")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaud(0)));
    }

    #[test]
    fn test_merge_negative_cli_baud_is_not_replaced_by_file() {
        let err = merge(&cli(-5, ""), file(9600, "COM3")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaud(-5)));
    }

    #[test]
    fn test_merge_negative_file_baud_is_invalid() {
        let err = merge(&CliOverrides::default(), file(-9600, "COM3")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaud(-9600)));
    }

    #[test]
    fn test_merge_baud_beyond_u32_is_invalid() {
        let huge = i64::from(u32::MAX) + 1;
        let err = merge(&cli(huge, "COM3"), FileSettings::default()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaud(b) if b == huge));
    }

    #[test]
    fn test_merge_fails_with_invalid_port_when_both_empty() {
        let err = merge(&cli(9600, ""), file(0, "")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort));
    }

    #[test]
    fn test_merge_checks_baud_before_port() {
        let err = merge(&CliOverrides::default(), FileSettings::default()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaud(0)));
    }
}
