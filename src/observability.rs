//! This module provides observability and diagnostics capabilities for the codecs.
//!
//! The `log_metric!` macro emits one structured key-value line through the
//! `log` facade at `trace` level. It is compiled out of release builds by the
//! `#[cfg(debug_assertions)]` attribute, so hot encode/decode loops pay nothing
//! for it in production.

/// Logs a structured key-value metric string at `trace` level, only in debug builds.
///
/// # Example
/// ```
/// use bitcodec::log_metric;
/// let bits = 12;
/// log_metric!("event" = "encode", "codec" = "elias_gamma", "bits" = &bits);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            if ::log::log_enabled!(::log::Level::Trace) {
                let mut parts = Vec::new();
                $(
                    parts.push(format!("\"{}\": \"{}\"", $key, $value));
                )+
                ::log::trace!("BITCODEC_METRIC: {{ {} }}", parts.join(", "));
            }
        }
    };
}
