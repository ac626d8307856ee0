//! This file is the root of the `bitcodec` Rust crate.
//!
//! `bitcodec` turns unsigned 64-bit integers into compact, self-delimiting bit
//! sequences and back: VLQ (and its inverted twin), Elias Gamma, Delta and
//! Omega, Fibonacci, Thompson-Alpha and a fixed-width Raw codec, all built on
//! one MSB-first [`BitWriter`]/[`BitReader`] pair. Signed values cross over
//! through ZigZag.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of the library.
//! 2.  Re-exporting the public surface and the logging bootstrap.
//!
//! ```
//! use bitcodec::{decode_all, encode_all, EliasGammaCodec};
//!
//! let bytes = encode_all(&EliasGammaCodec::new(), &[0, 1, 2]).unwrap();
//! assert_eq!(decode_all(&EliasGammaCodec::new(), &bytes, 3).unwrap(), vec![0, 1, 2]);
//! ```
//!
//! # Features
//! - `unchecked`: compiles out the `ValueOutOfRange` checks in `encode`. The
//!   caller must then guarantee every symbol lies inside the codec's range.
//!   Out-of-range symbols never panic; see [`codecs`] for what each codec
//!   does with them.

use std::sync::Once;

use log::LevelFilter;

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod bitio;
pub mod codecs;
pub mod config;
pub mod kernels;

mod error;
mod traits;
mod utils;

//==================================================================================
// 2. Public Surface
//==================================================================================
pub use bitio::{BitReader, BitWriter};
pub use codecs::{
    decode_all, encode_all, AnyCodec, EliasDeltaCodec, EliasGammaCodec, EliasOmegaCodec,
    FibonacciCodec, IntegerCodec, IntegerCodecExt, RawCodec, ThompsonAlphaCodec, VlqCodec,
};
pub use config::CodecConfig;
pub use error::CodecError;
pub use traits::{HasSigned, HasUnsigned};

//==================================================================================
// 3. Logging Bootstrap
//==================================================================================
static INIT_LOGGER: Once = Once::new();

/// Installs an `env_logger` backend printing `[LEVEL] message` lines.
///
/// Only the first call has any effect. If the host application already set a
/// logger, this is a no-op.
pub fn enable_verbose_logging(level: LevelFilter) {
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(level);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        let _ = builder.try_init();
    });
}
