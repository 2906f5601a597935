use std::path::PathBuf;

use ootrando_game::LocationType;
use strum::VariantNames;
use thiserror::Error;

/// Failures the patcher can report. Every one of them is fatal for the patch run
/// except a base-image checksum mismatch, which is only logged.
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("checksum mismatch (expected {expected}, got {actual}): {message}")]
    Checksum {
        expected: String,
        actual: String,
        message: String,
    },

    #[error("write of {width} byte(s) at {addr:#X} is outside the ROM (length {len:#X})")]
    AddressOutOfRange { addr: usize, width: usize, len: usize },

    #[error("value {value} does not fit in {width} byte(s) at {addr:#X}")]
    ValueOutOfRange { addr: usize, value: isize, width: usize },

    #[error("no item data for item '{item}' (placed at '{location}')")]
    UnknownItem { item: String, location: String },

    #[error(
        "location '{location}' has unsupported type '{tag}' (expected one of: {})",
        LocationType::VARIANTS.join(", ")
    )]
    UnsupportedLocationType { location: String, tag: String },

    #[error("location '{location}' needs a secondary address")]
    MissingSecondaryAddress { location: String },

    #[error("item data for '{item}' has {len} byte(s), needed {needed}")]
    ItemDataTooShort {
        item: String,
        needed: usize,
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_values_display_in_decimal() {
        let err = PatchError::ValueOutOfRange {
            addr: 0x20,
            value: -3,
            width: 1,
        };
        assert_eq!(err.to_string(), "value -3 does not fit in 1 byte(s) at 0x20");
    }

    #[test]
    fn unsupported_type_lists_known_tags() {
        let err = PatchError::UnsupportedLocationType {
            location: "Bazaar Item 1".to_string(),
            tag: "Shop".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("location 'Bazaar Item 1' has unsupported type 'Shop'"));
        assert!(msg.contains("GS Token"));
        assert!(msg.contains("NPC"));
    }
}
