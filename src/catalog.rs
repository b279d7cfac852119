//! Fixed parameter tables published by the NeoSpeech REST service.
//!
//! The tables map the short keys accepted by this client's public API to the
//! literal identifiers the remote API expects. They are closed sets: nothing
//! registers into them at runtime, and every assignment to a client's voice,
//! format, or rate field goes through a membership check here first.

use crate::{Error, ErrorContext, Result};

/// Voice keys and their service-side voice identifiers.
pub const VOICES: &[(&str, &str)] = &[
    ("paul", "TTS_PAUL_DB"),
    ("kate", "TTS_KATE_DB"),
    ("julie", "TTS_JULIE_DB"),
    ("neobridget", "TTS_NEOBRIDGET_DB"),
    ("neovioleta", "TTS_NEOVIOLETA_DB"),
];

/// Audio format keys and their service-side format identifiers.
pub const FORMATS: &[(&str, &str)] = &[
    ("wav", "FORMAT_WAV"),         // 16bit linear PCM Wave
    ("pcm", "FORMAT_PCM"),         // 16bit linear PCM
    ("mulaw", "FORMAT_MULAW"),     // 8bit Mu-law PCM
    ("alaw", "FORMAT_ALAW"),       // 8bit A-law PCM
    ("adpcm", "FORMAT_ADPCM"),     // 4bit Dialogic ADPCM
    ("ogg", "FORMAT_OGG"),         // Ogg Vorbis
    ("8bitwav", "FORMAT_8BITWAV"), // 8bit unsigned linear PCM Wave
    ("awav", "FORMAT_AWAV"),       // 8bit A-law PCM Wave
    ("muwav", "FORMAT_MUWAV"),     // 8bit Mu-law PCM Wave
];

/// Supported sample rates in kHz.
pub const SAMPLE_RATES: &[u16] = &[8, 16];

/// Resolve `key` against a key-to-identifier table, or fail with an
/// invalid-parameter error labeled `argument_name`.
pub(crate) fn resolve(
    key: &str,
    table: &[(&'static str, &'static str)],
    argument_name: &str,
) -> Result<&'static str> {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, id)| *id)
        .ok_or_else(|| {
            Error::invalid_parameter_with_context(
                format!("{} is incorrect", argument_name),
                ErrorContext::new()
                    .with_details(format!("unknown key \"{}\"", key))
                    .with_source("parameter_validator"),
            )
        })
}

/// Validate a sample rate against [`SAMPLE_RATES`].
pub(crate) fn validate_rate(rate: u16) -> Result<u16> {
    if SAMPLE_RATES.contains(&rate) {
        return Ok(rate);
    }

    Err(Error::invalid_parameter_with_context(
        "Rate of audio is incorrect",
        ErrorContext::new()
            .with_field_path("sample_rate")
            .with_details(format!("got {}, supported: {:?}", rate, SAMPLE_RATES))
            .with_source("parameter_validator"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_voice_key_resolves() {
        for (key, id) in VOICES {
            assert_eq!(resolve(key, VOICES, "Voice").unwrap(), *id);
        }
    }

    #[test]
    fn test_every_format_key_resolves() {
        for (key, id) in FORMATS {
            assert_eq!(resolve(key, FORMATS, "Format of audio").unwrap(), *id);
        }
    }

    #[test]
    fn test_unknown_voice_key_is_rejected() {
        let err = resolve("bob", VOICES, "Voice").unwrap_err();
        assert!(err.to_string().contains("Voice is incorrect"));
    }

    #[test]
    fn test_service_ids_are_not_valid_keys() {
        // Only the short keys are accepted, never the service identifiers.
        assert!(resolve("TTS_PAUL_DB", VOICES, "Voice").is_err());
        assert!(resolve("FORMAT_WAV", FORMATS, "Format of audio").is_err());
    }

    #[test]
    fn test_supported_rates() {
        assert_eq!(validate_rate(8).unwrap(), 8);
        assert_eq!(validate_rate(16).unwrap(), 16);
    }

    #[test]
    fn test_unsupported_rate_is_rejected() {
        let err = validate_rate(11).unwrap_err();
        assert!(err.to_string().contains("Rate of audio is incorrect"));
    }
}
