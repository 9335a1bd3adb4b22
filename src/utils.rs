use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::Chunk;

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Partitions track URIs into submission chunks of at most `chunk_size`
/// entries, preserving order. Every chunk except possibly the last is full;
/// empty input yields no chunks.
pub fn chunk_uris(uris: &[String], chunk_size: usize) -> Vec<Chunk> {
    uris.chunks(chunk_size)
        .enumerate()
        .map(|(index, slice)| Chunk {
            index,
            uris: slice.to_vec(),
        })
        .collect()
}

pub fn parse_chunk_size(arg: &str) -> Result<usize, String> {
    let size: usize = arg
        .parse()
        .map_err(|_| format!("'{}' is not a number", arg))?;
    if size == 0 {
        return Err(String::from("chunk size must be at least 1"));
    }
    Ok(size)
}
