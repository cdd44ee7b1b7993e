//! `rust-aec-encoder` is a pure Rust encoder for **CCSDS 121.0-B-2 Adaptive
//! Entropy Coding (AEC)**.
//!
//! Primary goal: produce payloads for **GRIB2 Data Representation Template
//! 5.0 = 42 (CCSDS/AEC)** without requiring native `libaec`. The output is a
//! big-endian bitstream of per-block Coded Data Sets, each encoded with the
//! code option (zero-run, second extension, Rice splitting, uncompressed)
//! that minimizes its coded length.
//!
//! # Quick start
//!
//! ```
//! use rust_aec_encoder::{encode, AecFlags, AecParams};
//!
//! // 16-bit big-endian unsigned samples, preprocessed before coding.
//! let samples: Vec<u8> = [1000u16, 1001, 1003, 1002, 1004, 1006, 1005, 1007]
//!     .iter()
//!     .flat_map(|s| s.to_be_bytes())
//!     .collect();
//!
//! let params = AecParams::new(16, 8, 128, AecFlags::MSB | AecFlags::DATA_PREPROCESS);
//! let payload = encode(&samples, params);
//! assert!(payload.is_ok());
//! ```
//!
//! For chunked input/output (e.g. compressing while reading from a socket)
//! use the streaming [`Encoder`] directly.

mod accessors;
pub mod bitwriter;
mod encoder;
pub mod error;
pub mod params;

pub use crate::error::AecError;
pub use crate::params::{AecFlags, AecParams};

pub use crate::encoder::{EncodeStatus, Encoder, Flush};

/// Encode packed sample bytes into an AEC bitstream.
///
/// - `input`: raw samples, `bytes_per_sample` each (1 byte for widths up to
///   8 bits, 2 for 9..=16, 3 for 17..=24 with [`AecFlags::DATA_3BYTE`], else
///   4), in the byte order selected by [`AecFlags::MSB`].
/// - `params`: bit width, block size, RSI, and flags.
///
/// Returns the coded payload, byte-aligned at the end of the stream. Errors
/// if the configuration is invalid or `input` ends with a partial sample.
pub fn encode(input: &[u8], params: AecParams) -> Result<Vec<u8>, AecError> {
    encoder::encode(input, params)
}

/// Encode packed sample bytes into a caller-provided output buffer.
///
/// This is useful when you want to reuse an allocation (e.g. encode many
/// tiles/messages) without repeatedly allocating a `Vec<u8>`. Returns the
/// number of payload bytes written, or an error if `output` cannot hold the
/// whole encoded stream.
pub fn encode_into(
    input: &[u8],
    params: AecParams,
    output: &mut [u8],
) -> Result<usize, AecError> {
    encoder::encode_into(input, params, output)
}

/// Bit assignments of the GRIB2 `ccsdsFlags` byte (template 5.42).
const GRIB2_FLAG_BITS: [(u8, AecFlags); 6] = [
    (1 << 0, AecFlags::DATA_SIGNED),
    (1 << 1, AecFlags::DATA_3BYTE),
    (1 << 2, AecFlags::MSB),
    (1 << 3, AecFlags::DATA_PREPROCESS),
    (1 << 4, AecFlags::RESTRICTED),
    (1 << 5, AecFlags::PAD_RSI),
];

/// Helper: convert GRIB2 `ccsdsFlags` (template 5.42) to [`AecFlags`].
pub fn flags_from_grib2_ccsds_flags(ccsds_flags: u8) -> AecFlags {
    GRIB2_FLAG_BITS
        .iter()
        .filter(|&&(bit, _)| ccsds_flags & bit != 0)
        .fold(AecFlags::empty(), |acc, &(_, flag)| acc | flag)
}

/// Helper: convert [`AecFlags`] to the GRIB2 `ccsdsFlags` byte (template
/// 5.42) describing an encoded payload.
pub fn grib2_ccsds_flags_from_flags(flags: AecFlags) -> u8 {
    GRIB2_FLAG_BITS
        .iter()
        .filter(|&&(_, flag)| flags.contains(flag))
        .fold(0, |acc, &(bit, _)| acc | bit)
}
