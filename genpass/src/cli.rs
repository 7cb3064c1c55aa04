//! Command line interface.

use anyhow::Result;
use anyhow::ensure;
use clap::Parser;

use runeset::parse;

use crate::generator::Generator;
use crate::wordlist;

/// Character set for the plain `--password` mode.
const DEFAULT_CSET: &str = r"\g";

const CSET_HELP: &str = "\
Syntax of CSET:
        c               Character c
        \\-              Literal -
        \\\\              Literal \\
        \\xXX            Unicode character U+00XX
        \\uXXXX          Unicode character U+XXXX
        \\UXXXXXXXX      Unicode character U+XXXXXXXX
        c1-c2           Characters between c1 and c2 inclusive
        \\d              ASCII digits
        \\l              ASCII lowercase letters
        \\L              ASCII uppercase letters
        \\w              ASCII alphanumerics
        \\s              ASCII punctuations
        \\g              ASCII graphical characters
        \\pN             Unicode character class (one-letter General Category)
        \\p{NAME}        Unicode character class (General Category or Script)
";

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Generates secure random passphrase/password/hex/base64 strings.",
    long_about = None,
    after_help = CSET_HELP,
)]
pub struct Args {
    /// Show the password strength
    #[arg(short = 'e', long)]
    pub show_bits: bool,

    /// Generate N strings
    #[arg(
        short,
        long,
        value_name = "N",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..),
    )]
    pub count: u32,

    /// Generate strings with at least BITS-bit strength
    /// (default: 80-bit for passphrase/password, 128-bit for hex/base64)
    #[arg(
        short,
        long,
        value_name = "BITS",
        value_parser = clap::value_parser!(u32).range(1..),
    )]
    pub bits: Option<u32>,

    /// Generate N-words/characters strings (takes priority over --bits)
    #[arg(
        short,
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..),
    )]
    pub length: Option<u32>,

    /// Generate passphrases from FILE, one word per line (- for stdin)
    #[arg(short, long, value_name = "FILE", group = "mode")]
    pub wordlist: Option<String>,

    /// Generate passwords using ASCII graphical characters
    #[arg(short, long, group = "mode")]
    pub password: bool,

    /// Generate passwords using characters specified by CSET
    #[arg(long, value_name = "CSET", group = "mode")]
    pub password_with: Option<String>,

    /// Generate hexadecimal strings
    #[arg(short = 'x', long, group = "mode")]
    pub hex: bool,

    /// Generate base64url strings
    #[arg(short = 'u', long, group = "mode")]
    pub base64: bool,
}

/// Return command line args.
pub fn parse_args() -> Args {
    Args::parse()
}

/// Run the generator with the given args.
pub fn run(args: &Args) -> Result<()> {
    let generator = make_generator(args)?;
    let bits = generator.bits();
    for _ in 0..args.count {
        if args.show_bits {
            println!("{}\t\t({bits:.2} bits)", generator.generate());
        } else {
            println!("{}", generator.generate());
        }
    }
    Ok(())
}

/// Number of elements per string: an explicit `--length`, or the smallest
/// count reaching the requested (or default) strength.
fn num_elements(args: &Args, bits_per_element: f64, default_bits: u32) -> u32 {
    if let Some(n) = args.length {
        n
    } else {
        let bits = args.bits.unwrap_or(default_bits);
        (f64::from(bits) / bits_per_element).ceil() as u32
    }
}

fn make_generator(args: &Args) -> Result<Generator> {
    if let Some(path) = &args.wordlist {
        let wordlist = wordlist::load(path)?;
        let bits_per_word = (wordlist.len() as f64).log2();
        let nwords = num_elements(args, bits_per_word, 80);
        return Ok(Generator::Passphrase { wordlist, nwords });
    }
    if args.hex {
        return Ok(Generator::Hex { nchars: num_elements(args, 4.0, 128) });
    }
    if args.base64 {
        return Ok(Generator::Base64 { nchars: num_elements(args, 6.0, 128) });
    }
    let cset = args.password_with.as_deref().unwrap_or(DEFAULT_CSET);
    let picker = parse(cset)?.picker();
    ensure!(
        picker.size() >= 2,
        "character set must contain at least 2 characters"
    );
    let nchars = num_elements(args, (picker.size() as f64).log2(), 80);
    Ok(Generator::Password { picker, nchars })
}
