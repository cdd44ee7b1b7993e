use crate::params::{AecFlags, AecParams};

/// Raw-sample layout of the input stream, fixed at init.
///
/// One variant per width/byte-order combination the encoder accepts. The
/// 3-byte layouts are selected only for widths of at most 24 bits with
/// [`AecFlags::DATA_3BYTE`] set; 17..=24-bit samples otherwise occupy 4
/// bytes like the 32-bit layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SampleFormat {
    U8,
    Msb16,
    Lsb16,
    Msb24,
    Lsb24,
    Msb32,
    Lsb32,
}

impl SampleFormat {
    pub(crate) fn select(params: AecParams) -> SampleFormat {
        let bps = params.bits_per_sample;
        let msb = params.flags.contains(AecFlags::MSB);

        if bps > 16 {
            if bps <= 24 && params.flags.contains(AecFlags::DATA_3BYTE) {
                if msb { SampleFormat::Msb24 } else { SampleFormat::Lsb24 }
            } else if msb {
                SampleFormat::Msb32
            } else {
                SampleFormat::Lsb32
            }
        } else if bps > 8 {
            if msb { SampleFormat::Msb16 } else { SampleFormat::Lsb16 }
        } else {
            SampleFormat::U8
        }
    }

    pub(crate) fn bytes_per_sample(self) -> usize {
        match self {
            SampleFormat::U8 => 1,
            SampleFormat::Msb16 | SampleFormat::Lsb16 => 2,
            SampleFormat::Msb24 | SampleFormat::Lsb24 => 3,
            SampleFormat::Msb32 | SampleFormat::Lsb32 => 4,
        }
    }

    /// Read one sample from `b`, which must hold exactly
    /// [`SampleFormat::bytes_per_sample`] bytes.
    pub(crate) fn get_sample(self, b: &[u8]) -> u32 {
        match self {
            SampleFormat::U8 => u32::from(b[0]),
            SampleFormat::Msb16 => u32::from(u16::from_be_bytes([b[0], b[1]])),
            SampleFormat::Lsb16 => u32::from(u16::from_le_bytes([b[0], b[1]])),
            SampleFormat::Msb24 => u32::from_be_bytes([0, b[0], b[1], b[2]]),
            SampleFormat::Lsb24 => u32::from_le_bytes([b[0], b[1], b[2], 0]),
            SampleFormat::Msb32 => u32::from_be_bytes([b[0], b[1], b[2], b[3]]),
            SampleFormat::Lsb32 => u32::from_le_bytes([b[0], b[1], b[2], b[3]]),
        }
    }

    /// Bulk-read `dst.len()` samples from `src` (the whole-RSI fast path).
    ///
    /// `src` must hold exactly `dst.len() * bytes_per_sample` bytes.
    pub(crate) fn get_rsi(self, src: &[u8], dst: &mut [u32]) {
        match self {
            SampleFormat::U8 => {
                for (d, &s) in dst.iter_mut().zip(src) {
                    *d = u32::from(s);
                }
            }
            SampleFormat::Msb16 => {
                for (d, c) in dst.iter_mut().zip(src.chunks_exact(2)) {
                    *d = u32::from(u16::from_be_bytes([c[0], c[1]]));
                }
            }
            SampleFormat::Lsb16 => {
                for (d, c) in dst.iter_mut().zip(src.chunks_exact(2)) {
                    *d = u32::from(u16::from_le_bytes([c[0], c[1]]));
                }
            }
            SampleFormat::Msb24 => {
                for (d, c) in dst.iter_mut().zip(src.chunks_exact(3)) {
                    *d = u32::from_be_bytes([0, c[0], c[1], c[2]]);
                }
            }
            SampleFormat::Lsb24 => {
                for (d, c) in dst.iter_mut().zip(src.chunks_exact(3)) {
                    *d = u32::from_le_bytes([c[0], c[1], c[2], 0]);
                }
            }
            SampleFormat::Msb32 => {
                for (d, c) in dst.iter_mut().zip(src.chunks_exact(4)) {
                    *d = u32::from_be_bytes([c[0], c[1], c[2], c[3]]);
                }
            }
            SampleFormat::Lsb32 => {
                for (d, c) in dst.iter_mut().zip(src.chunks_exact(4)) {
                    *d = u32::from_le_bytes([c[0], c[1], c[2], c[3]]);
                }
            }
        }
    }
}
