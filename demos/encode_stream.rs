use std::path::PathBuf;

use anyhow::Context;
use rust_aec_encoder::{flags_from_grib2_ccsds_flags, AecParams, EncodeStatus, Encoder, Flush};

fn main() -> anyhow::Result<()> {
    // Minimal argument parsing (no clap dependency).
    // Usage:
    //   cargo run --example encode_stream -- --input samples.bin --output payload.bin \
    //       --bps 12 --block-size 32 --rsi 128 --ccsds-flags 0x0e

    let mut input_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut bits_per_sample: u8 = 12;
    let mut block_size: u32 = 32;
    let mut rsi: u32 = 128;
    let mut ccsds_flags: u8 = 0x0e;
    let mut in_chunk: usize = 4096;
    let mut out_chunk: usize = 16 * 1024;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                let v = args.next().context("--input requires a value")?;
                input_path = Some(PathBuf::from(v));
            }
            "--output" => {
                let v = args.next().context("--output requires a value")?;
                output_path = Some(PathBuf::from(v));
            }
            "--bps" => {
                let v = args.next().context("--bps requires a value")?;
                bits_per_sample = v.parse().context("--bps must be an integer")?;
            }
            "--block-size" => {
                let v = args.next().context("--block-size requires a value")?;
                block_size = v.parse().context("--block-size must be an integer")?;
            }
            "--rsi" => {
                let v = args.next().context("--rsi requires a value")?;
                rsi = v.parse().context("--rsi must be an integer")?;
            }
            "--ccsds-flags" => {
                let v = args.next().context("--ccsds-flags requires a value")?;
                let v = v.trim_start_matches("0x");
                ccsds_flags = u8::from_str_radix(v, 16).context("--ccsds-flags must be hex")?;
            }
            "--in-chunk" => {
                let v = args.next().context("--in-chunk requires a value")?;
                in_chunk = v.parse().context("--in-chunk must be an integer")?;
            }
            "--out-chunk" => {
                let v = args.next().context("--out-chunk requires a value")?;
                out_chunk = v.parse().context("--out-chunk must be an integer")?;
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            other => {
                anyhow::bail!("unknown argument: {other} (use --help)");
            }
        }
    }

    let input_path = input_path.unwrap_or_else(|| PathBuf::from("samples.bin"));
    let output_path = output_path.unwrap_or_else(|| PathBuf::from("aec_payload.bin"));

    let raw = std::fs::read(&input_path)
        .with_context(|| format!("failed to read samples: {}", input_path.display()))?;

    let params = AecParams::new(
        bits_per_sample,
        block_size,
        rsi,
        flags_from_grib2_ccsds_flags(ccsds_flags),
    );
    let mut enc = Encoder::new(params)?;

    // Drive the encoder chunk by chunk, the way a network or file pipeline
    // would, instead of using the one-shot `encode`.
    let mut payload = Vec::new();
    let mut buf = vec![0u8; out_chunk.max(1)];
    let mut pending: Vec<u8> = Vec::new();
    let mut cursor = 0usize;

    while cursor < raw.len() {
        let end = (cursor + in_chunk.max(1)).min(raw.len());
        pending.extend_from_slice(&raw[cursor..end]);
        cursor = end;

        loop {
            let (consumed, written, status) = enc.encode(&pending, &mut buf, Flush::NoFlush);
            pending.drain(..consumed);
            payload.extend_from_slice(&buf[..written]);
            match status {
                EncodeStatus::NeedOutput => continue,
                EncodeStatus::NeedInput => break,
                EncodeStatus::Flushed => anyhow::bail!("unexpected flush"),
            }
        }
    }

    loop {
        let (consumed, written, status) = enc.encode(&pending, &mut buf, Flush::Flush);
        pending.drain(..consumed);
        payload.extend_from_slice(&buf[..written]);
        if status == EncodeStatus::Flushed {
            break;
        }
    }

    let (total_in, total_out) = (enc.total_in(), enc.total_out());
    enc.finish()?;

    std::fs::write(&output_path, &payload)
        .with_context(|| format!("failed to write payload: {}", output_path.display()))?;

    println!(
        "encoded {} -> {} bytes ({:.1}%), wrote {}",
        total_in,
        total_out,
        100.0 * total_out as f64 / total_in.max(1) as f64,
        output_path.display()
    );

    Ok(())
}

fn print_help() {
    println!(
        "encode_stream: chunked CCSDS/AEC encoding of a raw sample file\n\
         \n\
         options:\n\
         --input PATH        raw packed samples (default samples.bin)\n\
         --output PATH       encoded payload (default aec_payload.bin)\n\
         --bps N             bits per sample (default 12)\n\
         --block-size N      8, 16, 32 or 64 (default 32)\n\
         --rsi N             blocks per reference sample interval (default 128)\n\
         --ccsds-flags HEX   GRIB2 template 5.42 ccsdsFlags (default 0x0e)\n\
         --in-chunk N        input chunk size in bytes (default 4096)\n\
         --out-chunk N       output chunk size in bytes (default 16384)"
    );
}
