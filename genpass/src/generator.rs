//! Random string generation for each output mode.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;
use rand::Rng;
use rand::RngCore;
use rand::TryRngCore;
use rand::rngs::OsRng;

use runeset::Picker;

/// One random string producer.
///
/// Every draw comes from the operating system's secure random source; a
/// failure of that source panics rather than degrading to a weaker one.
#[derive(Clone, Debug)]
pub enum Generator {
    /// `nwords` uniform draws from a wordlist, joined by spaces.
    Passphrase { wordlist: Vec<String>, nwords: u32 },
    /// `nchars` uniform draws from a frozen character set.
    Password { picker: Picker, nchars: u32 },
    /// `nchars` hexadecimal digits.
    Hex { nchars: u32 },
    /// `nchars` base64url characters.
    Base64 { nchars: u32 },
}

impl Generator {
    /// Return the number of elements per generated string.
    pub fn elements(&self) -> u32 {
        match self {
            Generator::Passphrase { nwords, .. } => *nwords,
            Generator::Password { nchars, .. }
            | Generator::Hex { nchars }
            | Generator::Base64 { nchars } => *nchars,
        }
    }

    /// Return the entropy in bits contributed by each element.
    pub fn bits_per_element(&self) -> f64 {
        match self {
            Generator::Passphrase { wordlist, .. } => (wordlist.len() as f64).log2(),
            Generator::Password { picker, .. } => (picker.size() as f64).log2(),
            Generator::Hex { .. } => 4.0,
            Generator::Base64 { .. } => 6.0,
        }
    }

    /// Return the total entropy in bits of one generated string.
    pub fn bits(&self) -> f64 {
        self.bits_per_element() * f64::from(self.elements())
    }

    /// Generate one random string.
    pub fn generate(&self) -> String {
        match self {
            Generator::Passphrase { wordlist, nwords } => {
                assert!(!wordlist.is_empty(), "genpass: empty wordlist");
                let mut rng = OsRng.unwrap_err();
                let words: Vec<&str> = (0..*nwords)
                    .map(|_| wordlist[rng.random_range(0..wordlist.len())].as_str())
                    .collect();
                words.join(" ")
            }
            Generator::Password { picker, nchars } => {
                assert!(picker.size() != 0, "genpass: empty character set");
                (0..*nchars).map(|_| picker.random()).collect()
            }
            Generator::Hex { nchars } => {
                let nchars = *nchars as usize;
                assert!(nchars != 0, "genpass: nchars must not be zero");
                let mut buf = vec![0u8; (nchars - 1) / 2 + 1];
                OsRng.unwrap_err().fill_bytes(&mut buf);
                let mut out = hex::encode(buf);
                out.truncate(nchars);
                out
            }
            Generator::Base64 { nchars } => {
                let nchars = *nchars as usize;
                assert!(nchars != 0, "genpass: nchars must not be zero");
                let mut buf = vec![0u8; 3 * ((nchars - 1) / 4 + 1)];
                OsRng.unwrap_err().fill_bytes(&mut buf);
                let mut out = URL_SAFE.encode(buf);
                out.truncate(nchars);
                out
            }
        }
    }
}
