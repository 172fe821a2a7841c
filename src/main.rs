#![forbid(unsafe_code)]
//! `ff1`: FF1 format-preserving encryption of hex text from stdin to stdout.
//!
//! ```text
//! ff1 -k key.hex -t tweak.hex < plain.hex > cipher.hex
//! ff1 -k key.hex -t tweak.hex -d -w 64 < cipher.hex > plain.hex
//! ```
//!
//! Errors go to stderr and exit with status 1. Set `RUST_LOG=debug` for
//! progress messages.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fpe_hex::{
    CLI_MAX_TWEAK_LEN, CipherOptions, Direction, Ff1, TextOptions, decode_hex_secret, read_input,
    read_text_file, transform_text,
};
use log::debug;
use secrecy::ExposeSecret;
use zeroize::Zeroizing;

const USAGE: &str = "Usage: ff1 -k <keyfile> -t <tweakfile> [-d] [-p <padding>] [-w <width>] < infile > outfile\n       Infile = one long hex line, created with a base16 encoder or xxd.";

#[derive(Parser, Debug)]
#[command(
    name = "ff1",
    version,
    about = "FF1 (radix 16) format-preserving encryption of hex text from stdin"
)]
struct Cli {
    /// Path to the key file (128, 192 or 256 bit, hex encoded)
    #[arg(short = 'k', long = "key-file", value_name = "KEYFILE")]
    key_file: Option<PathBuf>,

    /// Path to the tweak file (up to 64 bit, hex encoded)
    #[arg(short = 't', long = "tweak-file", value_name = "TWEAKFILE")]
    tweak_file: Option<PathBuf>,

    /// Decrypt instead of encrypt (line breaks in the input are removed)
    #[arg(short = 'd', long = "decrypt")]
    decrypt: bool,

    /// Right-pad the input with '0' to this many bytes (0 = off)
    #[arg(short = 'p', long = "padding", default_value_t = 0)]
    padding: usize,

    /// Write the output in lines of this many characters (0 = one line)
    #[arg(short = 'w', long = "width", default_value_t = 0)]
    width: usize,
}

fn main() -> Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version print to stdout and succeed; everything else fails with 1.
            let code = if e.use_stderr() { 1 } else { 0 };
            e.print().context("error writing usage")?;
            std::process::exit(code);
        }
    };
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let (Some(key_file), Some(tweak_file)) = (cli.key_file.as_deref(), cli.tweak_file.as_deref())
    else {
        anyhow::bail!(USAGE);
    };

    let key_hex = read_text_file(key_file).context("error reading key file")?;
    let tweak_hex = read_text_file(tweak_file).context("error reading tweak file")?;
    let key = decode_hex_secret(&key_hex).context("error decoding key hex")?;
    let tweak = decode_hex_secret(&tweak_hex).context("error decoding tweak hex")?;

    let options = CipherOptions::default().with_max_tweak_len(CLI_MAX_TWEAK_LEN);
    let cipher = Ff1::new(key.expose_secret(), tweak.expose_secret(), options)
        .context("error creating FF1 cipher")?;
    drop(key);
    debug!("cipher ready: {cipher:?}");

    let input = read_input(io::stdin().lock()).context("error reading input data")?;

    let direction = if cli.decrypt {
        Direction::Decrypt
    } else {
        Direction::Encrypt
    };
    let opts = TextOptions::default()
        .with_direction(direction)
        .with_padding(cli.padding)
        .with_width(cli.width);

    let output = Zeroizing::new(transform_text(&cipher, &input, &opts).with_context(|| {
        match direction {
            Direction::Encrypt => "error encrypting data",
            Direction::Decrypt => "error decrypting data",
        }
    })?);

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .context("error writing output data")?;
    Ok(())
}
