//! Encoding and decoding many independent blocks at once
//!
//! Larger symbols split their codewords into several Reed-Solomon blocks
//! (a version 40-H QR code carries 81). Blocks share nothing but the field,
//! so they are processed on rayon's pool when the configuration allows it.

use super::decoder::ReedSolomonDecoder;
use super::encoder::ReedSolomonEncoder;
use super::error::RsResult;
use super::field::Field;
use crate::config::CodecConfig;
use log::{debug, warn};
use rayon::prelude::*;

/// One received block together with its parity length and known erasures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodewordBlock {
    pub codewords: Vec<u32>,
    pub ec_count: usize,
    pub erasures: Vec<usize>,
}

impl CodewordBlock {
    pub fn new(codewords: Vec<u32>, ec_count: usize) -> Self {
        Self {
            codewords,
            ec_count,
            erasures: Vec::new(),
        }
    }

    pub fn with_erasures(mut self, erasures: Vec<usize>) -> Self {
        self.erasures = erasures;
        self
    }

    /// Data codewords in front of the parity
    pub fn data(&self) -> &[u32] {
        let data_len = self.codewords.len().saturating_sub(self.ec_count);
        &self.codewords[..data_len]
    }
}

/// Run `op` under the thread count requested by `config`
fn with_pool<T: Send>(config: &CodecConfig, op: impl FnOnce() -> T + Send) -> T {
    if !config.parallel || config.threads == 0 {
        return op();
    }
    match rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
    {
        Ok(pool) => pool.install(op),
        Err(err) => {
            warn!(
                "Could not build a pool of {} threads ({}), using the global pool",
                config.threads, err
            );
            op()
        }
    }
}

/// Correct every block in place; one result per block, in order
pub fn decode_blocks<F: Field + ?Sized>(
    decoder: &ReedSolomonDecoder<'_, F>,
    blocks: &mut [CodewordBlock],
    config: &CodecConfig,
) -> Vec<RsResult<usize>> {
    let decode_one = |block: &mut CodewordBlock| {
        decoder.decode_with_erasures(&mut block.codewords, block.ec_count, &block.erasures)
    };

    let results: Vec<RsResult<usize>> = if config.parallel {
        with_pool(config, || blocks.par_iter_mut().map(decode_one).collect())
    } else {
        blocks.iter_mut().map(decode_one).collect()
    };

    let failed = results.iter().filter(|r| r.is_err()).count();
    debug!(
        "decoded {} blocks on {} threads, {} uncorrectable",
        results.len(),
        config.effective_threads(),
        failed
    );
    results
}

/// Append `ec_count` parity codewords to every data block
pub fn encode_blocks<F: Field + ?Sized>(
    encoder: &ReedSolomonEncoder<'_, F>,
    data_blocks: &[Vec<u32>],
    ec_count: usize,
    config: &CodecConfig,
) -> RsResult<Vec<Vec<u32>>> {
    let encode_one = |data: &Vec<u32>| -> RsResult<Vec<u32>> {
        let parity = encoder.encode(data, ec_count)?;
        let mut block = Vec::with_capacity(data.len() + ec_count);
        block.extend_from_slice(data);
        block.extend_from_slice(&parity);
        Ok(block)
    };

    if config.parallel {
        with_pool(config, || data_blocks.par_iter().map(encode_one).collect())
    } else {
        data_blocks.iter().map(encode_one).collect()
    }
}
