#![forbid(unsafe_code)]

//! CPU vector capability detection.
//!
//! # Role in runekit
//! `runekit-simd` reports which vector extensions the running CPU offers and
//! how many lanes of each primitive type fit in the widest register. The
//! string helpers do not depend on it; benchmarks print its banner so
//! results can be compared across machines.
//!
//! # Configuration
//! [`SimdConfig`] reads two environment variables:
//! - `RUNEKIT_SIMD_FORCE_SCALAR`: report a scalar-only profile.
//! - `RUNEKIT_SIMD_REPORT`: always emit the banner, not only for bench runs.
//!
//! # Example
//! ```
//! use runekit_simd::{SimdCaps, lanes};
//!
//! let caps = SimdCaps::scalar();
//! assert_eq!(caps.vector_width_bits(), 0);
//! assert_eq!(lanes::<f32>(&caps), 0);
//! ```

use std::fmt;

/// Environment variable forcing the scalar profile (`1/0/true/false`).
pub const ENV_FORCE_SCALAR: &str = "RUNEKIT_SIMD_FORCE_SCALAR";
/// Environment variable forcing the capability banner (`1/0/true/false`).
pub const ENV_REPORT: &str = "RUNEKIT_SIMD_REPORT";

/// Vector extensions available at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimdCaps {
    pub sse2: bool,
    pub avx: bool,
    pub avx2: bool,
    pub avx512f: bool,
    pub neon: bool,
}

impl SimdCaps {
    /// Profile with no vector extensions.
    #[must_use]
    pub const fn scalar() -> Self {
        Self {
            sse2: false,
            avx: false,
            avx2: false,
            avx512f: false,
            neon: false,
        }
    }

    /// Detect the features of the running CPU.
    #[must_use]
    pub fn detect() -> Self {
        let caps = detect_native();
        tracing::debug!(
            sse2 = caps.sse2,
            avx = caps.avx,
            avx2 = caps.avx2,
            avx512f = caps.avx512f,
            neon = caps.neon,
            width_bits = caps.vector_width_bits(),
            "detected SIMD capabilities"
        );
        caps
    }

    /// Width of the widest usable vector register, 0 when scalar.
    #[must_use]
    pub const fn vector_width_bits(&self) -> u32 {
        if self.avx512f {
            512
        } else if self.avx2 || self.avx {
            256
        } else if self.sse2 || self.neon {
            128
        } else {
            0
        }
    }

    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        self.vector_width_bits() == 0
    }

    /// One-line summary printed ahead of benchmark output.
    #[must_use]
    pub fn banner(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SimdCaps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "simd: AVX={} AVX2={} AVX512={} NEON={} width={}",
            self.avx,
            self.avx2,
            self.avx512f,
            self.neon,
            self.vector_width_bits()
        )
    }
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn detect_native() -> SimdCaps {
    SimdCaps {
        sse2: is_x86_feature_detected!("sse2"),
        avx: is_x86_feature_detected!("avx"),
        avx2: is_x86_feature_detected!("avx2"),
        avx512f: is_x86_feature_detected!("avx512f"),
        neon: false,
    }
}

#[cfg(target_arch = "aarch64")]
fn detect_native() -> SimdCaps {
    SimdCaps {
        neon: std::arch::is_aarch64_feature_detected!("neon"),
        ..SimdCaps::scalar()
    }
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
fn detect_native() -> SimdCaps {
    SimdCaps::scalar()
}

// ── Lanes ───────────────────────────────────────────────────────────────

/// Primitive element types a vector register can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneKind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
}

impl LaneKind {
    pub const ALL: [Self; 10] = [
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::F32,
        Self::F64,
    ];

    #[must_use]
    pub const fn size_bytes(self) -> usize {
        match self {
            Self::I8 | Self::U8 => 1,
            Self::I16 | Self::U16 => 2,
            Self::I32 | Self::U32 | Self::F32 => 4,
            Self::I64 | Self::U64 | Self::F64 => 8,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }

    /// Elements of this kind per widest register.
    #[must_use]
    pub const fn lanes(self, caps: &SimdCaps) -> usize {
        caps.vector_width_bits() as usize / 8 / self.size_bytes()
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Rust primitive usable as a vector lane.
pub trait Lane: sealed::Sealed + Copy {
    const KIND: LaneKind;
}

macro_rules! impl_lane {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Lane for $ty {
                const KIND: LaneKind = LaneKind::$kind;
            }
        )*
    };
}

impl_lane! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

/// Elements of `T` per widest register under `caps`.
#[must_use]
pub fn lanes<T: Lane>(caps: &SimdCaps) -> usize {
    T::KIND.lanes(caps)
}

// ── Configuration ───────────────────────────────────────────────────────

/// Environment-driven overrides for detection and reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimdConfig {
    /// Ignore detected extensions and report the scalar profile.
    pub force_scalar: bool,
    /// Emit the banner even outside benchmark runs.
    pub report: bool,
}

impl SimdConfig {
    /// Load overrides from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Load overrides through a custom lookup (for tests).
    ///
    /// Unparseable values are ignored.
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = get_env(ENV_FORCE_SCALAR)
            && let Some(parsed) = parse_bool(&value)
        {
            config.force_scalar = parsed;
        }
        if let Some(value) = get_env(ENV_REPORT)
            && let Some(parsed) = parse_bool(&value)
        {
            config.report = parsed;
        }
        config
    }

    /// Apply the overrides to a detected profile.
    #[must_use]
    pub fn effective_caps(&self, detected: SimdCaps) -> SimdCaps {
        if self.force_scalar {
            tracing::debug!("SIMD detection overridden to scalar");
            return SimdCaps::scalar();
        }
        detected
    }

    /// Detect and apply the overrides.
    #[must_use]
    pub fn caps(&self) -> SimdCaps {
        self.effective_caps(SimdCaps::detect())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// ── Benchmark banner ────────────────────────────────────────────────────

/// True when a bench harness command line asks for benchmarks to run.
///
/// Accepts `--bench` followed by an optional positional filter, or
/// `--bench=<filter>`. A filter of `none` disables the run, as does an empty
/// `--bench=`. The first argument is the program name and is skipped.
#[must_use]
pub fn requests_benchmarks<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut bench_flag = false;
    let mut filter: Option<String> = None;
    for arg in args.into_iter().skip(1) {
        let arg = arg.as_ref();
        if arg == "--bench" {
            bench_flag = true;
        } else if let Some(value) = arg.strip_prefix("--bench=") {
            bench_flag = true;
            filter = Some(value.to_owned());
        } else if !arg.starts_with('-') && filter.is_none() {
            filter = Some(arg.to_owned());
        }
    }
    match filter.as_deref() {
        _ if !bench_flag => false,
        Some("" | "none") => false,
        _ => true,
    }
}

/// Banner to print before benchmarks, if this run should report one.
#[must_use]
pub fn report_for_args<I, S>(args: I, config: &SimdConfig) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if !config.report && !requests_benchmarks(args) {
        return None;
    }
    let banner = config.caps().banner();
    tracing::info!(banner = %banner, "SIMD capability report");
    Some(banner)
}
