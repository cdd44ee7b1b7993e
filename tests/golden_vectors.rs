//! Bit-exact golden streams derived by hand from the CCSDS coding rules.

use rust_aec_encoder::{encode, AecFlags, AecParams};

mod common;

#[test]
fn zero_run_covers_whole_stream() -> anyhow::Result<()> {
    // Two all-zero blocks collapse into a single zero-run CDS: identifier
    // `0` in 4 bits, then FS(1) for a 2-block run, padded to `0x04`.
    let params = AecParams::new(8, 8, 2, AecFlags::empty());
    let payload = encode(&[0u8; 16], params)?;
    assert_eq!(payload, vec![0x04]);

    assert_eq!(common::decode(&payload, params, 16), vec![0u32; 16]);
    Ok(())
}

#[test]
fn constant_preprocessed_rsi_becomes_zero_run_with_reference() -> anyhow::Result<()> {
    // Residuals of a constant signal are [x0, 0, 0, ...]; the scanner sees
    // an all-zero block past the reference sample and emits a zero-run CDS
    // carrying the reference: 0000 | 00001010 | 1, padded.
    let params = AecParams::new(8, 8, 1, AecFlags::DATA_PREPROCESS);
    let payload = encode(&[10u8; 8], params)?;
    assert_eq!(payload, vec![0x00, 0xA8]);

    assert_eq!(common::decode(&payload, params, 8), vec![10u32; 8]);
    Ok(())
}

#[test]
fn zero_runs_split_at_64_block_boundaries() -> anyhow::Result<()> {
    // 128 zero blocks in one RSI: the run must be cut at the 64-block
    // boundary, and both halves exceed 4 blocks so each codes as the ROS
    // sentinel FS(4): twice `0000 00001`.
    let params = AecParams::new(8, 8, 128, AecFlags::empty());
    let payload = encode(&[0u8; 1024], params)?;
    assert_eq!(payload, vec![0x00, 0x80, 0x40]);

    assert_eq!(common::decode(&payload, params, 1024), vec![0u32; 1024]);
    Ok(())
}

#[test]
fn maximum_rsi_emits_one_ros_per_segment() -> anyhow::Result<()> {
    // A full 4096-block RSI of zeros: the run is cut at every 64-block
    // boundary, producing 64 ROS units of 9 bits each (`0000 00001`). The
    // 576-bit stream repeats a 9-byte pattern with the terminator bit
    // walking one position right per unit.
    let params = AecParams::new(8, 8, 4096, AecFlags::empty());
    let payload = encode(&vec![0u8; 4096 * 8], params)?;

    let mut expected = Vec::new();
    for _ in 0..8 {
        expected.extend_from_slice(&[0x00, 0x80, 0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x01]);
    }
    assert_eq!(payload, expected);

    assert_eq!(common::decode(&payload, params, 4096 * 8), vec![0u32; 4096 * 8]);
    Ok(())
}

#[test]
fn short_tail_pads_by_replication_and_splits() -> anyhow::Result<()> {
    // Three samples flushed into an 8-sample block: the tail replicates the
    // last sample, Rice splitting with k=1 wins, and the stream is
    // id=010, FS parts 1/01x7, then the low bits 1,0,1,1,1,1,1,1.
    let params = AecParams::new(8, 8, 1, AecFlags::empty());
    let payload = encode(&[1u8, 2, 3], params)?;
    assert_eq!(payload, vec![0x55, 0x55, 0x6F, 0xC0]);

    assert_eq!(common::decode(&payload, params, 3), vec![1, 2, 3]);
    Ok(())
}

#[test]
fn incompressible_block_stays_uncompressed() -> anyhow::Result<()> {
    // All-ones samples defeat splitting and SE; the block is emitted raw
    // behind the all-ones identifier: 67 one bits, zero-padded.
    let params = AecParams::new(8, 8, 1, AecFlags::empty());
    let payload = encode(&[0xFFu8; 8], params)?;
    assert_eq!(payload, vec![0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xE0]);

    assert_eq!(common::decode(&payload, params, 8), vec![0xFFu32; 8]);
    Ok(())
}

#[test]
fn rsi_padding_byte_aligns_between_intervals() -> anyhow::Result<()> {
    // Two constant RSIs. Without padding the second CDS starts mid-byte;
    // with PAD_RSI each interval ends byte-aligned.
    let mut input = Vec::new();
    input.extend_from_slice(&[10u8; 8]);
    input.extend_from_slice(&[20u8; 8]);

    let expected = [vec![10u32; 8], vec![20u32; 8]].concat();

    let plain = AecParams::new(8, 8, 1, AecFlags::DATA_PREPROCESS);
    let payload = encode(&input, plain)?;
    assert_eq!(payload, vec![0x00, 0xA8, 0x0A, 0x40]);
    assert_eq!(common::decode(&payload, plain, 16), expected);

    let padded = AecParams::new(8, 8, 1, AecFlags::DATA_PREPROCESS | AecFlags::PAD_RSI);
    let payload = encode(&input, padded)?;
    assert_eq!(payload, vec![0x00, 0xA8, 0x01, 0x48]);
    assert_eq!(common::decode(&payload, padded, 16), expected);

    Ok(())
}

#[test]
fn empty_stream_is_one_padding_byte() -> anyhow::Result<()> {
    let params = AecParams::new(16, 16, 32, AecFlags::MSB);
    assert_eq!(encode(&[], params)?, vec![0x00]);
    Ok(())
}
