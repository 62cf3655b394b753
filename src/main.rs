//! `barcode-ecc` - encode or repair barcode codeword blocks from the shell
//!
//! ```text
//! barcode-ecc encode    -s qr -e 10 32,91,11,120,209,114,220,77,67,64,236,17,236,17,236,17
//! barcode-ecc decode    -s pdf417 -e 2 --erasures 2 1,2,0,4,646,327
//! barcode-ecc generator -s datamatrix -e 5
//! ```

use anyhow::{bail, Context, Result};
use barcode_ecc::codewords::{
    format_codewords, format_hex_codewords, parse_codewords, parse_hex_codewords,
};
use barcode_ecc::reed_solomon::{
    decode_blocks, CodewordBlock, ReedSolomonDecoder, ReedSolomonEncoder,
};
use barcode_ecc::{parse_args, CodecConfig, Symbology};
use clap::ArgMatches;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = parse_args();

    match matches.subcommand() {
        Some(("encode", sub)) => encode(sub),
        Some(("decode", sub)) => decode(sub),
        Some(("generator", sub)) => generator(sub),
        _ => bail!("no subcommand given, see --help"),
    }
}

fn symbology(matches: &ArgMatches) -> Result<Symbology> {
    matches
        .get_one::<Symbology>("symbology")
        .copied()
        .context("--symbology is required")
}

fn ec_count(matches: &ArgMatches) -> Result<usize> {
    matches
        .get_one::<usize>("ec")
        .copied()
        .context("--ec is required")
}

fn read_codewords(matches: &ArgMatches, symbology: Symbology) -> Result<Vec<u32>> {
    let text = matches
        .get_many::<String>("codewords")
        .context("no codewords given")?
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");

    if matches.get_flag("hex") {
        if !symbology.is_byte_oriented() {
            bail!("--hex needs a byte-sized field, {symbology} codewords do not fit in a byte");
        }
        return parse_hex_codewords(&text).context("Failed to parse hex codewords");
    }

    parse_codewords(&text, symbology.field().size()).context("Failed to parse codewords")
}

fn print_codewords(codewords: &[u32], as_hex: bool) {
    match format_hex_codewords(codewords).filter(|_| as_hex) {
        Some(hex) => println!("{hex}"),
        None => println!("{}", format_codewords(codewords)),
    }
}

fn encode(matches: &ArgMatches) -> Result<()> {
    let symbology = symbology(matches)?;
    let ec_count = ec_count(matches)?;
    let data = read_codewords(matches, symbology)?;

    let encoder = ReedSolomonEncoder::new(symbology.field());
    let parity = encoder
        .encode(&data, ec_count)
        .with_context(|| format!("Failed to encode {} codewords for {symbology}", data.len()))?;

    let mut block = data;
    block.extend_from_slice(&parity);
    print_codewords(&block, matches.get_flag("hex"));
    Ok(())
}

fn decode(matches: &ArgMatches) -> Result<()> {
    let symbology = symbology(matches)?;
    let ec_count = ec_count(matches)?;
    let received = read_codewords(matches, symbology)?;
    let erasures: Vec<usize> = matches
        .get_many::<usize>("erasures")
        .map(|values| values.copied().collect())
        .unwrap_or_default();
    let config = CodecConfig::from_args(matches);

    let decoder = ReedSolomonDecoder::with_config(symbology.field(), &config);
    let mut blocks = [CodewordBlock::new(received, ec_count).with_erasures(erasures)];
    let mut results = decode_blocks(&decoder, &mut blocks, &config);

    let corrected = results
        .pop()
        .context("decoder returned no result")?
        .with_context(|| format!("Block is unreadable as {symbology}"))?;

    eprintln!("Corrected {corrected} codewords");
    print_codewords(&blocks[0].codewords, matches.get_flag("hex"));
    Ok(())
}

fn generator(matches: &ArgMatches) -> Result<()> {
    let symbology = symbology(matches)?;
    let ec_count = ec_count(matches)?;

    let encoder = ReedSolomonEncoder::new(symbology.field());
    let generator = encoder
        .generator(ec_count)
        .context("Failed to build generator polynomial")?;

    println!("{generator}");
    println!("{}", format_codewords(generator.coefficients()));
    Ok(())
}
