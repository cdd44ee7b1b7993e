use crate::accessors::SampleFormat;
use crate::bitwriter::BitWriter;
use crate::error::AecError;
use crate::params::{AecFlags, AecParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flush {
    /// Like `AEC_NO_FLUSH`: more input may follow; the encoder suspends when
    /// the current input is exhausted.
    NoFlush,
    /// Like `AEC_FLUSH`: the caller asserts no more input will be provided;
    /// the encoder pads a short tail, drains its state and byte-aligns the
    /// stream.
    Flush,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeStatus {
    /// More input is required to make progress.
    NeedInput,
    /// The output buffer was filled; provide more output space to continue.
    NeedOutput,
    /// The stream was flushed; no further output will be produced.
    Flushed,
}

/// Worst-case coded block: identifier (up to 6 bits), reference sample (up
/// to 32 bits) and 64 uncompressed 32-bit samples, rounded up with slack for
/// the 8-byte accumulator flushes of the block emitters.
const CDSLEN: usize = 64 * 4 + 32;

/// Sentinel stored in `zero_blocks` when a run is terminated by a segment
/// boundary and codes as Remainder-of-Segment.
const ROS: u32 = u32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    GetBlock,
    GetRsiResumable,
    CheckZeroBlock,
    SelectCodeOption,
    EncodeSplitting,
    EncodeUncomp,
    EncodeSe,
    EncodeZero,
    FlushBlock,
    FlushBlockResumable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
}

/// Per-call I/O cursors over the caller's buffers.
struct Io<'a> {
    input: &'a [u8],
    in_pos: usize,
    out: &'a mut [u8],
    out_pos: usize,
}

impl Io<'_> {
    fn avail_in(&self) -> usize {
        self.input.len() - self.in_pos
    }

    fn avail_out(&self) -> usize {
        self.out.len() - self.out_pos
    }
}

/// Streaming AEC encoder (Rust-idiomatic, modeled after libaec's
/// `aec_stream`).
///
/// The encoder is a resumable state machine: [`Encoder::encode`] consumes
/// whole samples from the input slice and writes coded bytes to the output
/// slice, suspending whenever either runs short. Re-calling with more input
/// or output resumes exactly where it left off, and any chunking of the
/// buffers produces the identical byte stream.
pub struct Encoder {
    flags: AecFlags,
    bits_per_sample: u32,
    block_size: usize,
    rsi: usize,

    format: SampleFormat,
    bytes_per_sample: usize,
    id_len: u32,
    kmax: u32,
    xmin: i64,
    xmax: i64,
    rsi_len: usize,
    preprocess: bool,

    // One RSI of raw samples, and the preprocessed residuals when
    // preprocessing is enabled (the residual view is `data_raw` otherwise).
    data_raw: Vec<u32>,
    data_pp: Vec<u32>,
    block_start: usize,
    blocks_avail: usize,
    ref_offset: usize,

    k: u32,
    uncomp_len: u32,
    zero_blocks: u32,
    zero_ref: bool,
    zero_ref_sample: u32,
    block_nonzero: bool,

    writer: BitWriter,
    cds_buf: [u8; CDSLEN],
    direct_out: bool,
    mode: Mode,
    i: usize,
    flush: Flush,
    flushed: bool,

    total_in: usize,
    total_out: usize,
}

impl Encoder {
    pub fn new(params: AecParams) -> Result<Self, AecError> {
        validate_params(params)?;

        let format = SampleFormat::select(params);
        let bytes_per_sample = format.bytes_per_sample();
        let id_len = id_len(params);
        let kmax = if id_len > 1 { (1u32 << id_len) - 3 } else { 0 };

        let bps = u32::from(params.bits_per_sample);
        let (xmin, xmax) = if params.flags.contains(AecFlags::DATA_SIGNED) {
            (-(1i64 << (bps - 1)), (1i64 << (bps - 1)) - 1)
        } else {
            (0, (1i64 << bps) - 1)
        };

        let block_size = params.block_size as usize;
        let rsi = params.rsi as usize;
        let samples_per_rsi = rsi * block_size;
        let preprocess = params.flags.contains(AecFlags::DATA_PREPROCESS);

        Ok(Self {
            flags: params.flags,
            bits_per_sample: bps,
            block_size,
            rsi,
            format,
            bytes_per_sample,
            id_len,
            kmax,
            xmin,
            xmax,
            rsi_len: samples_per_rsi * bytes_per_sample,
            preprocess,
            data_raw: vec![0; samples_per_rsi],
            data_pp: if preprocess { vec![0; samples_per_rsi] } else { Vec::new() },
            block_start: 0,
            blocks_avail: 0,
            ref_offset: 0,
            k: 0,
            uncomp_len: block_size as u32 * bps,
            zero_blocks: 0,
            zero_ref: false,
            zero_ref_sample: 0,
            block_nonzero: false,
            writer: BitWriter::new(),
            cds_buf: [0; CDSLEN],
            direct_out: false,
            mode: Mode::GetBlock,
            i: 0,
            flush: Flush::NoFlush,
            flushed: false,
            total_in: 0,
            total_out: 0,
        })
    }

    /// Bytes occupied by one raw input sample for this configuration.
    pub fn bytes_per_sample(&self) -> usize {
        self.bytes_per_sample
    }

    /// Total number of input bytes consumed so far.
    pub fn total_in(&self) -> usize {
        self.total_in
    }

    /// Total number of output bytes produced so far.
    pub fn total_out(&self) -> usize {
        self.total_out
    }

    /// Drive the state machine until it suspends.
    ///
    /// Returns `(consumed, written, status)`. Only whole samples are
    /// consumed; a trailing partial sample stays in `input` and must be
    /// presented again on the next call.
    pub fn encode(
        &mut self,
        input: &[u8],
        output: &mut [u8],
        flush: Flush,
    ) -> (usize, usize, EncodeStatus) {
        if self.flushed {
            return (0, 0, EncodeStatus::Flushed);
        }
        self.flush = flush;

        let mut io = Io { input, in_pos: 0, out: output, out_pos: 0 };

        loop {
            let step = match self.mode {
                Mode::GetBlock => self.get_block(&mut io),
                Mode::GetRsiResumable => self.get_rsi_resumable(&mut io),
                Mode::CheckZeroBlock => self.check_zero_block(),
                Mode::SelectCodeOption => self.select_code_option(),
                Mode::EncodeSplitting => self.encode_splitting(&mut io),
                Mode::EncodeUncomp => self.encode_uncomp(&mut io),
                Mode::EncodeSe => self.encode_se(&mut io),
                Mode::EncodeZero => self.encode_zero(&mut io),
                Mode::FlushBlock => self.flush_block(&mut io),
                Mode::FlushBlockResumable => self.flush_block_resumable(&mut io),
            };
            if step == Step::Exit {
                break;
            }
        }

        // The caller's buffer goes away between calls; park the pending
        // partial byte in the internal scratch so the next call can resume.
        if self.direct_out {
            io.out_pos = self.writer.position();
            self.cds_buf[0] = io.out[self.writer.position()];
            self.writer.relocate(0);
            self.direct_out = false;
        }

        self.total_in += io.in_pos;
        self.total_out += io.out_pos;

        let status = if self.flushed {
            EncodeStatus::Flushed
        } else if io.out_pos >= io.out.len() {
            EncodeStatus::NeedOutput
        } else {
            EncodeStatus::NeedInput
        };

        (io.in_pos, io.out_pos, status)
    }

    /// Tear the stream down.
    ///
    /// Errors iff a [`Flush::Flush`] was requested but the encoder never
    /// reached its flushed state (the caller did not drain the output).
    pub fn finish(self) -> Result<(), AecError> {
        if self.flush == Flush::Flush && !self.flushed {
            return Err(AecError::IncompleteStream);
        }
        Ok(())
    }

    /*
     * FSM states
     */

    /// Provide the next block of residuals, pulling in a whole RSI of input
    /// when the block buffer is exhausted.
    fn get_block(&mut self, io: &mut Io<'_>) -> Step {
        self.init_output(io);

        if self.block_nonzero {
            // A zero run was flushed first; now encode the held block.
            self.block_nonzero = false;
            self.mode = Mode::SelectCodeOption;
            return Step::Continue;
        }

        if self.blocks_avail == 0 {
            self.blocks_avail = self.rsi - 1;
            self.block_start = 0;

            if io.avail_in() >= self.rsi_len {
                let fmt = self.format;
                fmt.get_rsi(&io.input[io.in_pos..io.in_pos + self.rsi_len], &mut self.data_raw);
                io.in_pos += self.rsi_len;
                if self.preprocess {
                    self.preprocess_rsi();
                }
                self.mode = Mode::CheckZeroBlock;
            } else {
                self.i = 0;
                self.mode = Mode::GetRsiResumable;
            }
        } else {
            if self.ref_offset != 0 {
                self.ref_offset = 0;
                self.uncomp_len = self.block_size as u32 * self.bits_per_sample;
            }
            self.block_start += self.block_size;
            self.blocks_avail -= 1;
            self.mode = Mode::CheckZeroBlock;
        }
        Step::Continue
    }

    /// Sample-at-a-time RSI ingestion for short input buffers.
    ///
    /// Suspends when input runs out. On flush a short tail is padded by
    /// replicating the last sample, with `blocks_avail` restricted to the
    /// blocks that hold real data.
    fn get_rsi_resumable(&mut self, io: &mut Io<'_>) -> Step {
        let total = self.rsi * self.block_size;

        while self.i < total {
            if io.avail_in() >= self.bytes_per_sample {
                let fmt = self.format;
                let width = self.bytes_per_sample;
                self.data_raw[self.i] = fmt.get_sample(&io.input[io.in_pos..io.in_pos + width]);
                io.in_pos += width;
                self.i += 1;
            } else if self.flush == Flush::Flush {
                if self.i > 0 {
                    self.blocks_avail = self.i.div_ceil(self.block_size) - 1;
                    let last = self.data_raw[self.i - 1];
                    for slot in &mut self.data_raw[self.i..total] {
                        *slot = last;
                    }
                    self.i = total;
                } else {
                    return self.finish_stream(io);
                }
            } else {
                return Step::Exit;
            }
        }

        if self.preprocess {
            self.preprocess_rsi();
        }
        self.mode = Mode::CheckZeroBlock;
        Step::Continue
    }

    /// Check whether the current block is all zero, aggregating consecutive
    /// zero blocks until a non-zero block, a 64-block boundary or the RSI
    /// end.
    fn check_zero_block(&mut self) -> Step {
        let start = self.block_start;
        let data: &[u32] = if self.preprocess { &self.data_pp } else { &self.data_raw };
        let block = &data[start..start + self.block_size];
        let nonzero = block[self.ref_offset..].iter().any(|&s| s != 0);
        let first = block[0];

        if nonzero {
            if self.zero_blocks > 0 {
                // The pending zero run must be emitted before this block;
                // hold the block and come back to it.
                self.block_nonzero = true;
                self.mode = Mode::EncodeZero;
            } else {
                self.mode = Mode::SelectCodeOption;
            }
        } else {
            self.zero_blocks += 1;
            if self.zero_blocks == 1 {
                self.zero_ref = self.ref_offset != 0;
                self.zero_ref_sample = first;
            }
            if self.blocks_avail == 0 || (self.rsi - self.blocks_avail) % 64 == 0 {
                if self.zero_blocks > 4 {
                    self.zero_blocks = ROS;
                }
                self.mode = Mode::EncodeZero;
            } else {
                self.mode = Mode::GetBlock;
            }
        }
        Step::Continue
    }

    /// Decide which code option to use for the current block.
    fn select_code_option(&mut self) -> Step {
        let split_len = if self.id_len > 1 { self.assess_splitting() } else { u32::MAX };
        let se_len = self.assess_se();

        self.mode = if split_len < self.uncomp_len {
            if split_len < se_len { Mode::EncodeSplitting } else { Mode::EncodeSe }
        } else if self.uncomp_len <= se_len {
            Mode::EncodeUncomp
        } else {
            Mode::EncodeSe
        };
        Step::Continue
    }

    fn encode_splitting(&mut self, io: &mut Io<'_>) -> Step {
        let k = self.k;
        let ref_offset = self.ref_offset;
        let start = self.block_start;
        let bps = self.bits_per_sample;
        let id_len = self.id_len;

        let data: &[u32] = if self.preprocess { &self.data_pp } else { &self.data_raw };
        let block = &data[start..start + self.block_size];
        let dst: &mut [u8] =
            if self.direct_out { &mut io.out[..] } else { &mut self.cds_buf[..] };

        self.writer.write_bits(dst, k + 1, id_len);
        if ref_offset != 0 {
            self.writer.write_bits(dst, block[0], bps);
        }
        self.writer.write_block_fs(dst, &block[ref_offset..], k);
        if k > 0 {
            self.writer.write_block(dst, &block[ref_offset..], k);
        }

        self.mode = Mode::FlushBlock;
        Step::Continue
    }

    fn encode_uncomp(&mut self, io: &mut Io<'_>) -> Step {
        let start = self.block_start;
        let bps = self.bits_per_sample;
        let id_len = self.id_len;

        let data: &[u32] = if self.preprocess { &self.data_pp } else { &self.data_raw };
        let block = &data[start..start + self.block_size];
        let dst: &mut [u8] =
            if self.direct_out { &mut io.out[..] } else { &mut self.cds_buf[..] };

        self.writer.write_bits(dst, (1 << id_len) - 1, id_len);
        self.writer.write_block(dst, block, bps);

        self.mode = Mode::FlushBlock;
        Step::Continue
    }

    fn encode_se(&mut self, io: &mut Io<'_>) -> Step {
        let ref_offset = self.ref_offset;
        let start = self.block_start;
        let bps = self.bits_per_sample;
        let id_len = self.id_len;

        let data: &[u32] = if self.preprocess { &self.data_pp } else { &self.data_raw };
        let block = &data[start..start + self.block_size];
        let dst: &mut [u8] =
            if self.direct_out { &mut io.out[..] } else { &mut self.cds_buf[..] };

        self.writer.write_bits(dst, 1, id_len + 1);
        if ref_offset != 0 {
            self.writer.write_bits(dst, block[0], bps);
        }
        for pair in block.chunks_exact(2) {
            let d = pair[0] + pair[1];
            self.writer.write_fs(dst, d * (d + 1) / 2 + pair[1]);
        }

        self.mode = Mode::FlushBlock;
        Step::Continue
    }

    fn encode_zero(&mut self, io: &mut Io<'_>) -> Step {
        let id_len = self.id_len;
        let bps = self.bits_per_sample;
        let dst: &mut [u8] =
            if self.direct_out { &mut io.out[..] } else { &mut self.cds_buf[..] };

        self.writer.write_bits(dst, 0, id_len + 1);
        if self.zero_ref {
            self.writer.write_bits(dst, self.zero_ref_sample, bps);
        }

        let fs = if self.zero_blocks == ROS {
            4
        } else if self.zero_blocks >= 5 {
            self.zero_blocks
        } else {
            self.zero_blocks - 1
        };
        self.writer.write_fs(dst, fs);

        self.zero_blocks = 0;
        self.mode = Mode::FlushBlock;
        Step::Continue
    }

    /// Flush the coded block: in direct mode just advance the output cursor,
    /// otherwise hand over to the restartable copy out of the scratch
    /// buffer. RSI byte-alignment padding is emitted here so it lands in the
    /// same flush.
    fn flush_block(&mut self, io: &mut Io<'_>) -> Step {
        if self.blocks_avail == 0
            && self.flags.contains(AecFlags::PAD_RSI)
            && !self.block_nonzero
        {
            let pad = self.writer.free_bits() % 8;
            let dst: &mut [u8] =
                if self.direct_out { &mut io.out[..] } else { &mut self.cds_buf[..] };
            self.writer.write_bits(dst, 0, pad);
        }

        if self.direct_out {
            io.out_pos = self.writer.position();
            self.mode = Mode::GetBlock;
            return Step::Continue;
        }

        self.i = 0;
        self.mode = Mode::FlushBlockResumable;
        Step::Continue
    }

    /// Slow restartable flushing of the scratch buffer.
    fn flush_block_resumable(&mut self, io: &mut Io<'_>) -> Step {
        let n = (self.writer.position() - self.i).min(io.avail_out());
        io.out[io.out_pos..io.out_pos + n].copy_from_slice(&self.cds_buf[self.i..self.i + n]);
        io.out_pos += n;
        self.i += n;

        if io.avail_out() == 0 {
            Step::Exit
        } else {
            self.mode = Mode::GetBlock;
            Step::Continue
        }
    }

    /// Direct output to the caller's buffer if it can hold a whole Coded
    /// Data Set, use the internal scratch buffer otherwise.
    fn init_output(&mut self, io: &mut Io<'_>) {
        if io.avail_out() > CDSLEN {
            if !self.direct_out {
                self.direct_out = true;
                io.out[io.out_pos] = self.cds_buf[self.writer.position()];
                self.writer.relocate(io.out_pos);
            }
        } else {
            if self.zero_blocks == 0 || self.direct_out {
                // Carry the leftover partial byte over from the last block.
                let pending = if self.direct_out {
                    io.out[self.writer.position()]
                } else {
                    self.cds_buf[self.writer.position()]
                };
                self.cds_buf[0] = pending;
                self.writer.relocate(0);
            }
            self.direct_out = false;
        }
    }

    /// End of stream: pad the final byte with zero bits and emit it.
    fn finish_stream(&mut self, io: &mut Io<'_>) -> Step {
        let free = self.writer.free_bits();
        let dst: &mut [u8] =
            if self.direct_out { &mut io.out[..] } else { &mut self.cds_buf[..] };
        self.writer.write_bits(dst, 0, free);

        if io.out_pos < io.out.len() {
            if self.direct_out {
                io.out_pos = self.writer.position() + 1;
                self.direct_out = false;
            } else {
                io.out[io.out_pos] = self.cds_buf[self.writer.position()];
                io.out_pos += 1;
            }
            self.cds_buf[0] = 0;
            self.writer.reset();
            self.flushed = true;
        }
        Step::Exit
    }

    /*
     * Preprocessing
     */

    fn preprocess_rsi(&mut self) {
        if self.flags.contains(AecFlags::DATA_SIGNED) {
            self.preprocess_signed();
        } else {
            self.preprocess_unsigned();
        }
        self.ref_offset = 1;
        self.uncomp_len = (self.block_size as u32 - 1) * self.bits_per_sample;
    }

    /// Map an RSI of unsigned samples to prediction residuals.
    ///
    /// The unit-delay predictor maps an upward step to `2D` and a downward
    /// step to `2D - 1`; when the step exceeds the distance to the range
    /// boundary the residual saturates to the remaining distance, keeping
    /// every residual within `bits_per_sample` bits.
    fn preprocess_unsigned(&mut self) {
        let xmax = self.xmax as u32;
        let raw = &self.data_raw;
        let pp = &mut self.data_pp;

        pp[0] = raw[0];
        for i in 0..raw.len() - 1 {
            let (cur, next) = (raw[i], raw[i + 1]);
            pp[i + 1] = if next >= cur {
                let d = next - cur;
                if d <= cur { d << 1 } else { next }
            } else {
                let d = cur - next;
                if d <= xmax - cur { (d << 1) - 1 } else { xmax - next }
            };
        }
    }

    /// Map an RSI of signed samples to prediction residuals.
    ///
    /// Samples are sign-extended from `bits_per_sample` bits and the
    /// residual mapping runs in 64-bit arithmetic against the signed range.
    fn preprocess_signed(&mut self) {
        let (xmin, xmax) = (self.xmin, self.xmax);
        let m = i64::from(1u32 << (self.bits_per_sample - 1));
        let raw = &self.data_raw;
        let pp = &mut self.data_pp;

        pp[0] = raw[0];
        let mut prev = (i64::from(raw[0]) ^ m) - m;
        for i in 0..raw.len() - 1 {
            let cur = (i64::from(raw[i + 1]) ^ m) - m;
            pp[i + 1] = if cur < prev {
                let d = prev - cur;
                if d <= xmax - prev { (2 * d - 1) as u32 } else { (xmax - cur) as u32 }
            } else {
                let d = cur - prev;
                if d <= prev - xmin { (2 * d) as u32 } else { (cur - xmin) as u32 }
            };
            prev = cur;
        }
    }

    /*
     * Cost assessment
     */

    /// Length of the CDS encoded with the splitting option and optimal `k`.
    ///
    /// The CDS length as a function of `k` has exactly one minimum. The
    /// search starts from the previous block's `k`, walks uphill or downhill
    /// and reverses direction at most once. Moving up is cut off as soon as
    /// the FS part is smaller than the block size (a further reduced FS part
    /// cannot compensate the larger binary part), and symmetrically for
    /// moving down.
    fn assess_splitting(&mut self) -> u32 {
        let start = self.block_start;
        let data: &[u32] = if self.preprocess { &self.data_pp } else { &self.data_raw };
        let block = &data[start + self.ref_offset..start + self.block_size];
        let this_bs = block.len() as u64;

        let mut len_min = u64::MAX;
        let mut k = self.k;
        let mut k_min = k;
        let mut no_turn = k == 0;
        let mut dir_up = true;

        loop {
            let fs_len: u64 = block.iter().map(|&s| u64::from(s >> k)).sum();
            let len = fs_len + this_bs * u64::from(k + 1);

            if len < len_min {
                if len_min < u64::MAX {
                    no_turn = true;
                }
                len_min = len;
                k_min = k;

                if dir_up {
                    if fs_len < this_bs || k >= self.kmax {
                        if no_turn {
                            break;
                        }
                        k = self.k - 1;
                        dir_up = false;
                        no_turn = true;
                    } else {
                        k += 1;
                    }
                } else {
                    if fs_len >= this_bs || k == 0 {
                        break;
                    }
                    k -= 1;
                }
            } else {
                if no_turn {
                    break;
                }
                k = self.k - 1;
                dir_up = false;
                no_turn = true;
            }
        }

        self.k = k_min;
        len_min.min(u64::from(u32::MAX)) as u32
    }

    /// Length of the CDS encoded with the Second Extension option, or
    /// `u32::MAX` when a pair sum overflows the uncompressed length.
    fn assess_se(&self) -> u32 {
        let start = self.block_start;
        let data: &[u32] = if self.preprocess { &self.data_pp } else { &self.data_raw };
        let block = &data[start..start + self.block_size];

        let mut len: u32 = 1;
        for pair in block.chunks_exact(2) {
            let d = u64::from(pair[0]) + u64::from(pair[1]);
            if d > u64::from(self.uncomp_len) {
                return u32::MAX;
            }
            len += (d * (d + 1) / 2 + u64::from(pair[1]) + 1) as u32;
        }
        len
    }
}

fn validate_params(params: AecParams) -> Result<(), AecError> {
    if !(1..=32).contains(&params.bits_per_sample) {
        return Err(AecError::InvalidConfig("bits_per_sample must be 1..=32"));
    }
    if ![8u32, 16, 32, 64].contains(&params.block_size) {
        return Err(AecError::InvalidConfig("block_size must be one of 8, 16, 32, 64"));
    }
    if !(1..=4096).contains(&params.rsi) {
        return Err(AecError::InvalidConfig("rsi must be 1..=4096"));
    }
    if params.flags.contains(AecFlags::RESTRICTED) && params.bits_per_sample > 4 {
        return Err(AecError::InvalidConfig("RESTRICTED requires bits_per_sample <= 4"));
    }
    Ok(())
}

fn id_len(params: AecParams) -> u32 {
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

fn worst_case_encoded_len(enc: &Encoder, samples: usize) -> usize {
    let blocks = samples.div_ceil(enc.block_size).max(1);
    let per_block_bits = enc.id_len as usize + 1 + enc.bits_per_sample as usize * (enc.block_size + 1);
    let rsis = blocks.div_ceil(enc.rsi);
    let bits = blocks * per_block_bits + rsis * 7 + 16;
    // Extra room so the whole encode stays on the direct-output path.
    bits.div_ceil(8) + CDSLEN + 1
}

pub fn encode(input: &[u8], params: AecParams) -> Result<Vec<u8>, AecError> {
    let mut enc = Encoder::new(params)?;
    if input.len() % enc.bytes_per_sample != 0 {
        return Err(AecError::InvalidInput("input length is not a multiple of the sample size"));
    }

    let samples = input.len() / enc.bytes_per_sample;
    let mut out = vec![0u8; worst_case_encoded_len(&enc, samples)];
    let (_, written, status) = enc.encode(input, &mut out, Flush::Flush);
    if status != EncodeStatus::Flushed {
        return Err(AecError::IncompleteStream);
    }

    out.truncate(written);
    Ok(out)
}

pub fn encode_into(input: &[u8], params: AecParams, output: &mut [u8]) -> Result<usize, AecError> {
    let mut enc = Encoder::new(params)?;
    if input.len() % enc.bytes_per_sample != 0 {
        return Err(AecError::InvalidInput("input length is not a multiple of the sample size"));
    }

    let (_, written, status) = enc.encode(input, output, Flush::Flush);
    if status != EncodeStatus::Flushed {
        return Err(AecError::InvalidInput("output buffer too small for encoded stream"));
    }
    Ok(written)
}
