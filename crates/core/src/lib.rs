//! Core constants, rounding helpers, and shared primitives for the aerogeo workspace.

/// Geometry and export constants (SI units unless stated otherwise).
pub mod constants {
    /// Default number of linear spanwise steps across the half-span.
    pub const DEFAULT_RESOLUTION: usize = 50;
    /// Chord (m) substituted for a section whose chord evaluates to exactly zero.
    pub const CHORD_FLOOR_M: f64 = 0.001;
    /// Decimal places kept for every real number written to an explane document.
    pub const EXPORT_DECIMALS: u32 = 3;
    /// Forward semi-minor fraction used when an elliptical planform omits one.
    pub const DEFAULT_FSMF: f64 = 0.25;
    /// Directory (relative to the working directory) receiving exported geometry.
    pub const DEFAULT_OUTPUT_DIR: &str = "geometry";
}

/// Rounding and fixed-point formatting for exported values.
pub mod rounding {
    use super::constants::EXPORT_DECIMALS;

    /// Round `value` to `decimals` places (half away from zero).
    #[inline]
    pub fn round_to(value: f64, decimals: u32) -> f64 {
        let factor = 10f64.powi(decimals as i32);
        (value * factor).round() / factor
    }

    /// Format a value with exactly three fractional digits. Negative zero prints as `0.000`.
    pub fn format_fixed(value: f64) -> String {
        let rounded = round_to(value, EXPORT_DECIMALS) + 0.0;
        format!("{:.*}", EXPORT_DECIMALS as usize, rounded)
    }
}

/// Error classification shared by the workspace error enums.
pub mod error {
    use std::fmt;

    /// Coarse error kind: every workspace error maps onto one of these.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ErrorKind {
        /// Invalid or degenerate input parameters.
        Configuration,
        /// A quotient with a non-positive or non-finite denominator.
        Division,
        /// Filesystem or stream failure.
        Io,
    }

    impl fmt::Display for ErrorKind {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let label = match self {
                ErrorKind::Configuration => "configuration error",
                ErrorKind::Division => "division error",
                ErrorKind::Io => "io error",
            };
            f.write_str(label)
        }
    }
}

/// Identity generation for surface entities.
pub mod ids {
    use std::sync::OnceLock;
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Source of unique, monotonically increasing identities.
    pub trait IdGenerator {
        /// Draw the next identity. Identities are never reused.
        fn next_id(&self) -> u64;
    }

    /// Atomic counter starting at a caller-chosen value.
    #[derive(Debug, Default)]
    pub struct SequentialIds {
        next: AtomicU64,
    }

    impl SequentialIds {
        pub fn new() -> Self {
            Self::starting_at(0)
        }

        pub fn starting_at(first: u64) -> Self {
            Self {
                next: AtomicU64::new(first),
            }
        }

        /// Identity the next call to [`IdGenerator::next_id`] will return.
        pub fn peek(&self) -> u64 {
            self.next.load(Ordering::SeqCst)
        }
    }

    impl IdGenerator for SequentialIds {
        fn next_id(&self) -> u64 {
            self.next.fetch_add(1, Ordering::SeqCst)
        }
    }

    /// Process-wide generator, initialised once and never reset.
    pub fn global_ids() -> &'static SequentialIds {
        static GLOBAL: OnceLock<SequentialIds> = OnceLock::new();
        GLOBAL.get_or_init(SequentialIds::new)
    }
}
