use crate::config::Config;
use crate::errors::AppResult;
use crate::io::{self, InputPair};
use crate::wrap::wrap;
use tracing::{debug, error, info};

/// What a single run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub pairs_read: usize,
    pub blocks_written: usize,
    pub skipped: usize,
    pub output_written: bool,
}

fn wrap_pair(pair: &InputPair) -> AppResult<String> {
    let limit = pair.parse_limit()?;
    Ok(wrap(&pair.text, limit)?)
}

/// Wraps every pair, skipping the ones whose limit is unusable.
///
/// Returns the wrapped blocks in input order and the number skipped.
pub fn wrap_pairs(pairs: &[InputPair]) -> (Vec<String>, usize) {
    let mut blocks = Vec::with_capacity(pairs.len());
    let mut skipped = 0;

    for pair in pairs {
        match wrap_pair(pair) {
            Ok(block) => blocks.push(block),
            Err(e) => {
                error!("{e}. Skipping item.");
                skipped += 1;
            }
        }
    }

    (blocks, skipped)
}

/// Reads, wraps and writes. Every failure is logged and recovered from.
pub fn run(config: &Config) -> RunReport {
    let pairs = match io::read_input_file(&config.input_file) {
        Ok(pairs) => pairs,
        Err(e) => {
            error!("{e}");
            Vec::new()
        }
    };
    debug!(count = pairs.len(), path = %config.input_file.display(), "read input pairs");

    let (blocks, skipped) = wrap_pairs(&pairs);

    let output_written = match io::write_output_file(&config.output_file, &blocks) {
        Ok(()) => {
            info!(blocks = blocks.len(), path = %config.output_file.display(), "wrote output");
            true
        }
        Err(e) => {
            error!("Error writing to file {}: {e}", config.output_file.display());
            false
        }
    };

    RunReport {
        pairs_read: pairs.len(),
        blocks_written: if output_written { blocks.len() } else { 0 },
        skipped,
        output_written,
    }
}
