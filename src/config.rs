//! Configuration for encode/decode operations

/// Configuration shared by the decoder and the batch codec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Re-check syndromes after correcting a block
    pub verify_corrections: bool,
    /// Number of threads for batch processing (0 = auto-detect)
    pub threads: usize,
    /// Whether to process blocks in parallel (false = single-threaded everything)
    pub parallel: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            verify_corrections: true,
            threads: 0, // Auto-detect CPU cores
            parallel: true,
        }
    }
}

impl CodecConfig {
    pub fn new(verify_corrections: bool, threads: usize, parallel: bool) -> Self {
        Self {
            verify_corrections,
            threads,
            parallel,
        }
    }

    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        let threads = matches
            .get_one::<String>("threads")
            .and_then(|s| s.parse().ok())
            .unwrap_or(0);

        let parallel = !matches.get_flag("no-parallel");
        let verify_corrections = !matches.get_flag("no-verify");

        Self::new(verify_corrections, threads, parallel)
    }

    /// Get effective thread count (auto-detect if 0)
    pub fn effective_threads(&self) -> usize {
        match (self.parallel, self.threads) {
            (false, _) => 1, // Sequential mode always uses single thread
            (true, 0) => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4), // Auto-detect CPU cores
            (true, n) => n,  // Use specified thread count
        }
    }
}
