use rust_aec_encoder::{encode, flags_from_grib2_ccsds_flags, AecParams};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // One-shot encoding of a raw sample file. Parameters mirror GRIB2
    // template 5.42; flags are the ccsdsFlags byte.
    //
    //   encode_raw <input> <output> [bps] [block_size] [rsi] [ccsds_flags_hex]

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        eprintln!("usage: encode_raw <input> <output> [bps] [block_size] [rsi] [ccsds_flags_hex]");
        std::process::exit(2);
    }

    let bits_per_sample: u8 = args.get(2).map_or(Ok(12), |v| v.parse())?;
    let block_size: u32 = args.get(3).map_or(Ok(32), |v| v.parse())?;
    let rsi: u32 = args.get(4).map_or(Ok(128), |v| v.parse())?;
    let ccsds_flags: u8 = args
        .get(5)
        .map_or(Ok(0x0e), |v| u8::from_str_radix(v.trim_start_matches("0x"), 16))?;

    let raw = std::fs::read(&args[0])?;

    let params = AecParams::new(
        bits_per_sample,
        block_size,
        rsi,
        flags_from_grib2_ccsds_flags(ccsds_flags),
    );
    let payload = encode(&raw, params)?;

    std::fs::write(&args[1], &payload)?;
    println!(
        "{} samples bytes -> {} payload bytes (bps={bits_per_sample} block={block_size} rsi={rsi})",
        raw.len(),
        payload.len()
    );

    Ok(())
}
