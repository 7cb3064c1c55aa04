//! Wordlist loading.

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;
use std::io::stdin;

use anyhow::Context;
use anyhow::Result;
use anyhow::ensure;

/// Load a wordlist from a file, or from stdin when `path` is `-`.
///
/// One word per line. At least 2 words are required, otherwise a drawn word
/// carries no entropy.
pub fn load(path: &str) -> Result<Vec<String>> {
    if path == "-" {
        read_words(stdin())
    } else {
        let file = File::open(path).with_context(|| format!("cannot open wordlist {path}"))?;
        read_words(file)
    }
}

fn read_words(r: impl Read) -> Result<Vec<String>> {
    let mut words = Vec::new();
    for line in BufReader::new(r).lines() {
        words.push(line?);
    }
    ensure!(words.len() >= 2, "wordlist must contain at least 2 words");
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_word_per_line() {
        let words = read_words("alpha\nbravo\ncharlie\n".as_bytes()).unwrap();
        assert_eq!(words, ["alpha", "bravo", "charlie"]);
    }

    #[test]
    fn short_lists_are_rejected() {
        assert!(read_words("".as_bytes()).is_err());
        assert!(read_words("alone\n".as_bytes()).is_err());
    }
}
