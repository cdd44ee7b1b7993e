//! Reference decoder used as a round-trip oracle for the encoder tests.
//!
//! One-shot and sample-oriented: it returns the masked `bits_per_sample`-bit
//! value of every decoded sample rather than packed bytes.

use rust_aec_encoder::{AecFlags, AecParams};

struct BitReader<'a> {
    data: &'a [u8],
    bit_pos: usize,
}

impl<'a> BitReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, bit_pos: 0 }
    }

    fn align_to_byte(&mut self) {
        let rem = self.bit_pos % 8;
        if rem != 0 {
            self.bit_pos += 8 - rem;
        }
    }

    fn read_bit(&mut self) -> bool {
        self.read_bits(1) != 0
    }

    fn read_bits(&mut self, nbits: usize) -> u32 {
        let mut out = 0u32;
        for _ in 0..nbits {
            let byte = self.data[self.bit_pos / 8];
            let bit = (byte >> (7 - self.bit_pos % 8)) & 1;
            out = (out << 1) | u32::from(bit);
            self.bit_pos += 1;
        }
        out
    }

    fn read_unary(&mut self) -> u32 {
        let mut count = 0u32;
        while !self.read_bit() {
            count += 1;
            assert!(count < 1_000_000, "unary run too long");
        }
        count
    }
}

fn se_pair(m: u32) -> (u32, u32) {
    let mut idx = 0u32;
    for s in 0u32..=64 {
        for b in 0..=s {
            if idx == m {
                return (s - b, b);
            }
            idx += 1;
        }
    }
    panic!("second extension symbol out of range: {m}");
}

fn id_len(params: AecParams) -> usize {
    let bps = params.bits_per_sample;
    if params.flags.contains(AecFlags::RESTRICTED) && bps <= 4 {
        if bps <= 2 { 1 } else { 2 }
    } else if bps > 16 {
        5
    } else if bps > 8 {
        4
    } else {
        3
    }
}

fn sign_extend(raw: u32, bits: u8) -> i64 {
    if bits == 32 {
        return i64::from(raw as i32);
    }
    let shift = 32 - u32::from(bits);
    i64::from(((raw << shift) as i32) >> shift)
}

/// Inverse of the CCSDS fold mapping: reconstruct the next sample from the
/// previous one and the coded residual.
fn unfold(prev: i64, d: u32, params: AecParams) -> i64 {
    let n = params.bits_per_sample;
    let delta: i64 = i64::from(d >> 1) ^ (!(i64::from(d & 1) - 1));
    let half_d: i64 = i64::from((d >> 1) + (d & 1));

    if params.flags.contains(AecFlags::DATA_SIGNED) {
        let signed_max: i64 = (1i64 << (n - 1)) - 1;
        if prev < 0 {
            if half_d <= signed_max + prev + 1 {
                prev + delta
            } else {
                i64::from(d) - signed_max - 1
            }
        } else if half_d <= signed_max - prev {
            prev + delta
        } else {
            signed_max - i64::from(d)
        }
    } else {
        let unsigned_max: u64 = (1u64 << n) - 1;
        let data_u = prev as u64;
        let med = unsigned_max / 2 + 1;
        let mask = if (data_u & med) != 0 { unsigned_max } else { 0 };
        if (half_d as u64) <= (mask ^ data_u) {
            prev + delta
        } else {
            (mask ^ u64::from(d)) as i64
        }
    }
}

pub fn decode(input: &[u8], params: AecParams, output_samples: usize) -> Vec<u32> {
    let bps = params.bits_per_sample;
    let mask: u32 = if bps == 32 { u32::MAX } else { (1u32 << bps) - 1 };
    let preprocess = params.flags.contains(AecFlags::DATA_PREPROCESS);
    let signed = params.flags.contains(AecFlags::DATA_SIGNED);
    let pad_rsi = params.flags.contains(AecFlags::PAD_RSI);
    let id_len = id_len(params);
    let max_id = (1u32 << id_len) - 1;
    let block_size = params.block_size as usize;
    let rsi = params.rsi;

    let mut r = BitReader::new(input);
    let mut out: Vec<u32> = Vec::with_capacity(output_samples);
    let mut predictor: i64 = 0;
    let mut block_index: u32 = 0;

    let mut emit = |out: &mut Vec<u32>, predictor: &mut i64, v: u32| {
        if preprocess {
            let x = unfold(*predictor, v, params);
            out.push((x as u32) & mask);
            *predictor = x;
        } else {
            out.push(v & mask);
        }
    };

    while out.len() < output_samples {
        let at_rsi_start = preprocess && block_index == 0;
        let id = r.read_bits(id_len);
        let mut ref_consumed = false;

        let mut read_reference =
            |r: &mut BitReader<'_>, out: &mut Vec<u32>, predictor: &mut i64| {
                let raw = r.read_bits(bps as usize);
                out.push(raw & mask);
                *predictor = if signed { sign_extend(raw, bps) } else { i64::from(raw) };
            };

        if id == 0 {
            // Low-entropy family: the selector bit comes before the optional
            // RSI reference sample.
            let selector = r.read_bit();
            if at_rsi_start {
                read_reference(&mut r, &mut out, &mut predictor);
                ref_consumed = true;
            }

            if !selector {
                // Zero-block run.
                let fs = r.read_unary();
                let mut z = fs + 1;
                if z == 5 {
                    z = (rsi - block_index).min(64 - block_index % 64);
                } else if z > 5 {
                    z -= 1;
                }

                let mut run = z as usize * block_size;
                if ref_consumed {
                    run -= 1;
                }
                for _ in 0..run {
                    if out.len() >= output_samples {
                        break;
                    }
                    emit(&mut out, &mut predictor, 0);
                }

                block_index += z;
                if block_index >= rsi {
                    block_index %= rsi;
                    if pad_rsi {
                        r.align_to_byte();
                    }
                }
                continue;
            }

            // Second Extension.
            let mut remaining = block_size - usize::from(ref_consumed);
            let mut need_odd = ref_consumed;
            while remaining > 0 {
                let m = r.read_unary();
                let (a, b) = se_pair(m);
                if need_odd {
                    emit(&mut out, &mut predictor, b);
                    remaining -= 1;
                    need_odd = false;
                    continue;
                }
                emit(&mut out, &mut predictor, a);
                remaining -= 1;
                if remaining == 0 {
                    break;
                }
                emit(&mut out, &mut predictor, b);
                remaining -= 1;
            }
        } else if id == max_id {
            // Uncompressed block: the reference sample is the first raw
            // sample.
            if at_rsi_start {
                read_reference(&mut r, &mut out, &mut predictor);
                ref_consumed = true;
            }
            for _ in 0..block_size - usize::from(ref_consumed) {
                let v = r.read_bits(bps as usize);
                emit(&mut out, &mut predictor, v);
            }
        } else {
            // Rice split: all fundamental sequences first, then all k-bit
            // binary parts.
            let k = (id - 1) as usize;
            if at_rsi_start {
                read_reference(&mut r, &mut out, &mut predictor);
                ref_consumed = true;
            }

            let n = block_size - usize::from(ref_consumed);
            let mut tmp = vec![0u32; n];
            for t in tmp.iter_mut() {
                *t = r.read_unary() << k;
            }
            if k > 0 {
                for t in tmp.iter_mut() {
                    *t |= r.read_bits(k);
                }
            }
            for v in tmp {
                emit(&mut out, &mut predictor, v);
            }
        }

        block_index += 1;
        if block_index >= rsi {
            block_index = 0;
            if pad_rsi {
                r.align_to_byte();
            }
        }
    }

    out.truncate(output_samples);
    out
}
