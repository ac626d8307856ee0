// In: src/config.rs

//! Serializable description of a codec choice.
//!
//! A `CodecConfig` is what a framing layer or record store persists next to
//! its data to remember *which* codec (and which parameters) produced the
//! bits. It is created at the application boundary, usually from JSON, and
//! turned into a ready-to-use [`AnyCodec`] with [`CodecConfig::build`].
//!
//! ```json
//! { "codec": "thompson_alpha", "length_bits": 4 }
//! ```

use serde::{Deserialize, Serialize};

use crate::codecs::thompson_alpha::DEFAULT_LENGTH_BITS;
use crate::codecs::vlq::DEFAULT_GROUP_BITS;
use crate::codecs::{
    AnyCodec, EliasDeltaCodec, EliasGammaCodec, EliasOmegaCodec, FibonacciCodec, IntegerCodec,
    RawCodec, ThompsonAlphaCodec, VlqCodec,
};
use crate::error::CodecError;

//==================================================================================
// I. The Codec Selector
//==================================================================================

/// Which codec to build, with its construction-time parameters.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "codec", rename_all = "snake_case")]
pub enum CodecConfig {
    /// **Default:** byte-oriented VLQ, flag set on the final group.
    Vlq {
        #[serde(default = "default_group_bits")]
        group_bits: u8,
    },

    /// VLQ with the flag set on every non-final group.
    InvertedVlq {
        #[serde(default = "default_group_bits")]
        group_bits: u8,
    },

    EliasGamma,
    EliasDelta,
    EliasOmega,
    Fibonacci,

    /// Fixed-width length prefix of `length_bits` bits (1..=6).
    ThompsonAlpha {
        #[serde(default = "default_length_bits")]
        length_bits: u8,
    },

    /// Plain 64-bit big-endian words.
    Raw,
}

impl Default for CodecConfig {
    fn default() -> Self {
        CodecConfig::Vlq {
            group_bits: default_group_bits(),
        }
    }
}

/// Provides the default for `group_bits` for serde.
fn default_group_bits() -> u8 {
    DEFAULT_GROUP_BITS
}

/// Provides the default for `length_bits` for serde.
fn default_length_bits() -> u8 {
    DEFAULT_LENGTH_BITS
}

//==================================================================================
// II. Construction
//==================================================================================

impl CodecConfig {
    /// Parses a JSON document such as `{"codec": "vlq", "group_bits": 7}`.
    pub fn from_json(json: &str) -> Result<Self, CodecError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, CodecError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Validates the parameters and builds the codec.
    pub fn build(&self) -> Result<AnyCodec, CodecError> {
        let codec: AnyCodec = match *self {
            CodecConfig::Vlq { group_bits } => VlqCodec::new().with_group_bits(group_bits)?.into(),
            CodecConfig::InvertedVlq { group_bits } => {
                VlqCodec::inverted().with_group_bits(group_bits)?.into()
            }
            CodecConfig::EliasGamma => EliasGammaCodec::new().into(),
            CodecConfig::EliasDelta => EliasDeltaCodec::new().into(),
            CodecConfig::EliasOmega => EliasOmegaCodec::new().into(),
            CodecConfig::Fibonacci => FibonacciCodec::new().into(),
            CodecConfig::ThompsonAlpha { length_bits } => {
                ThompsonAlphaCodec::new(length_bits)?.into()
            }
            CodecConfig::Raw => RawCodec::new().into(),
        };
        log::debug!(
            "Built codec '{}' from {:?} (range [{}, {}])",
            codec.name(),
            self,
            codec.min_value(),
            codec.max_value()
        );
        Ok(codec)
    }
}
