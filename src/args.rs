use crate::symbology::Symbology;
use clap::{Arg, ArgAction, Command};

fn symbology_arg() -> Arg {
    Arg::new("symbology")
        .short('s')
        .long("symbology")
        .help("Barcode format: qr, datamatrix, aztec-param, aztec6, aztec8, aztec10, aztec12, maxicode, pdf417")
        .value_name("NAME")
        .required(true)
        .value_parser(|name: &str| name.parse::<Symbology>().map_err(|err| err.to_string()))
}

fn ec_arg() -> Arg {
    Arg::new("ec")
        .short('e')
        .long("ec")
        .help("Number of error correction codewords")
        .value_name("COUNT")
        .required(true)
        .value_parser(clap::value_parser!(usize))
}

fn hex_arg() -> Arg {
    Arg::new("hex")
        .long("hex")
        .help("Codewords are a hex string (byte-sized fields only)")
        .action(ArgAction::SetTrue)
}

fn codewords_arg(help: &'static str) -> Arg {
    Arg::new("codewords")
        .help(help)
        .required(true)
        .num_args(1..)
        .index(1)
}

/// Command-line definition for the `barcode-ecc` tool
pub fn build_cli() -> Command {
    Command::new("barcode-ecc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reed-Solomon error correction for 2-D barcode codewords")
        .arg_required_else_help(true)
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .help("Number of threads for block processing (0 = auto)")
                .value_name("N")
                .global(true),
        )
        .arg(
            Arg::new("no-parallel")
                .long("no-parallel")
                .help("Process blocks on the calling thread only")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-verify")
                .long("no-verify")
                .help("Skip the syndrome re-check after correcting")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("encode")
                .visible_alias("e")
                .about("Append parity codewords to data codewords")
                .arg(symbology_arg())
                .arg(ec_arg())
                .arg(hex_arg())
                .arg(codewords_arg("Data codewords")),
        )
        .subcommand(
            Command::new("decode")
                .visible_alias("d")
                .about("Check and correct a received codeword block")
                .arg(symbology_arg())
                .arg(ec_arg())
                .arg(hex_arg())
                .arg(
                    Arg::new("erasures")
                        .long("erasures")
                        .help("Comma-separated positions known to be unreadable")
                        .value_name("POSITIONS")
                        .value_delimiter(',')
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(codewords_arg("Received codewords, parity last")),
        )
        .subcommand(
            Command::new("generator")
                .visible_alias("g")
                .about("Print the generator polynomial")
                .arg(symbology_arg())
                .arg(ec_arg()),
        )
}

pub fn parse_args() -> clap::ArgMatches {
    build_cli().get_matches()
}
