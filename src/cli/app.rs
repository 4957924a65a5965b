// Command Line Driver
// Argument parsing and attack assembly

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser};
use num_bigint::BigUint;
use num_traits::Num;

use crate::attack::{AttackConfig, BroadcastAttack, TrivialAttack};
use crate::cli::tuples::parse_tuples;

#[derive(Parser, Debug)]
#[command(
    name = "rsa_lowexp",
    version,
    about = "Recovers RSA plaintext encrypted under a low public exponent",
    group(ArgGroup::new("input").required(true).args(["integers", "files"]))
)]
struct Args {
    /// Tuple list of (ciphertext, modulus) integers, e.g. "(42,101),(42,103)"
    #[arg(short, long, value_name = "LIST")]
    integers: Option<String>,

    /// Tuple list of (ciphertext file, PEM public key file) paths
    #[arg(short, long, value_name = "LIST")]
    files: Option<String>,

    /// Run the trivial attack: each ciphertext is m^e with no wraparound,
    /// so only the first element of each tuple is used
    #[arg(short, long)]
    trivial: bool,

    /// Public exponent the ciphertexts were produced under
    #[arg(
        short,
        long,
        default_value_t = 3,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    exponent: u32,
}

/// Parse the command line and run the selected attack
pub fn run() -> Result<()> {
    dispatch(Args::parse())
}

fn dispatch(args: Args) -> Result<()> {
    let config = AttackConfig::new(args.exponent);

    if let Some(list) = &args.integers {
        let tuples = parse_tuples(list)?;
        if args.trivial {
            // One independent attack per tuple, one output line each
            for tuple in &tuples {
                let attack = TrivialAttack::from_integer(parse_integer(&tuple[0])?, config);
                print_plaintext(&attack.exploit()?);
            }
        } else {
            let mut attack = BroadcastAttack::new(config);
            for (index, tuple) in tuples.iter().enumerate() {
                let [ciphertext, modulus] = two_elements(tuple, index)?;
                attack.observe(parse_integer(ciphertext)?, parse_integer(modulus)?);
            }
            print_plaintext(&attack.exploit()?);
        }
    } else if let Some(list) = &args.files {
        let tuples = parse_tuples(list)?;
        if args.trivial {
            for tuple in &tuples {
                let mut attack = TrivialAttack::new(config);
                attack.load_ciphertext(Path::new(&tuple[0]))?;
                print_plaintext(&attack.exploit()?);
            }
        } else {
            let mut attack = BroadcastAttack::new(config);
            for (index, tuple) in tuples.iter().enumerate() {
                let [ciphertext, modulus] = two_elements(tuple, index)?;
                attack.load_ciphertext(Path::new(ciphertext))?;
                attack.load_modulus(Path::new(modulus))?;
            }
            print_plaintext(&attack.exploit()?);
        }
    }
    Ok(())
}

fn two_elements(tuple: &[String], index: usize) -> Result<[&str; 2]> {
    match tuple {
        [ciphertext, modulus, ..] => Ok([ciphertext.as_str(), modulus.as_str()]),
        _ => bail!("tuple #{} needs a ciphertext and a modulus", index + 1),
    }
}

/// Parse a decimal integer, or hexadecimal with a 0x prefix
fn parse_integer(text: &str) -> Result<BigUint> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => BigUint::from_str_radix(hex, 16),
        None => BigUint::from_str_radix(text, 10),
    };
    parsed.with_context(|| format!("not an integer: {}", text))
}

/// Print a recovered plaintext: text when it decodes as UTF-8, hex otherwise
fn print_plaintext(bytes: &[u8]) {
    match std::str::from_utf8(bytes) {
        Ok(text) => println!("{}", text),
        Err(_) => println!("hex:{}", hex::encode(bytes)),
    }
}
