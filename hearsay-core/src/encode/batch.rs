//! Batching for pre-compressed capture blocks.
//!
//! Compressed container blocks (unlike PCM WAV chunks) are not independently
//! decodable in small fragments, so successive blocks are buffered and sent
//! as one concatenated payload. A flush happens when *any* threshold holds:
//! buffered block count, cumulative byte size, or a periodic counter over all
//! blocks ever pushed. The thresholds are tunable; they trade decode
//! reliability on the peer against latency.

use tracing::debug;

/// Flush thresholds for [`BlockBatcher`].
#[derive(Debug, Clone, Copy)]
pub struct BatchPolicy {
    /// Flush once this many blocks are buffered.
    pub max_blocks: usize,
    /// Flush once the buffered bytes exceed this size.
    pub max_bytes: usize,
    /// Flush whenever the lifetime block counter hits a multiple of this.
    pub flush_every: u64,
}

impl Default for BatchPolicy {
    fn default() -> Self {
        Self {
            max_blocks: 5,
            max_bytes: 20 * 1024,
            flush_every: 10,
        }
    }
}

/// Accumulates compressed blocks and emits concatenated payloads.
#[derive(Debug)]
pub struct BlockBatcher {
    policy: BatchPolicy,
    blocks: Vec<Vec<u8>>,
    buffered_bytes: usize,
    /// Lifetime count of pushed blocks, including already-flushed ones.
    pushed_total: u64,
}

impl BlockBatcher {
    pub fn new(policy: BatchPolicy) -> Self {
        Self {
            policy,
            blocks: Vec::new(),
            buffered_bytes: 0,
            pushed_total: 0,
        }
    }

    /// Buffer a block; returns an assembled payload when a threshold is hit.
    ///
    /// Empty blocks are ignored (the platform recorder emits them around
    /// stream boundaries).
    pub fn push(&mut self, block: Vec<u8>) -> Option<Vec<u8>> {
        if block.is_empty() {
            return None;
        }
        self.pushed_total += 1;
        self.buffered_bytes += block.len();
        self.blocks.push(block);

        let count_hit = self.blocks.len() >= self.policy.max_blocks;
        let bytes_hit = self.buffered_bytes > self.policy.max_bytes;
        let periodic_hit =
            self.policy.flush_every > 0 && self.pushed_total % self.policy.flush_every == 0;

        if count_hit || bytes_hit || periodic_hit {
            debug!(
                blocks = self.blocks.len(),
                bytes = self.buffered_bytes,
                count_hit,
                bytes_hit,
                periodic_hit,
                "flushing compressed block batch"
            );
            return self.assemble();
        }
        None
    }

    /// Drain whatever is buffered, regardless of thresholds.
    ///
    /// Called at stop time so the tail of the recording is not lost.
    pub fn flush(&mut self) -> Option<Vec<u8>> {
        self.assemble()
    }

    /// Blocks currently buffered.
    pub fn buffered_blocks(&self) -> usize {
        self.blocks.len()
    }

    fn assemble(&mut self) -> Option<Vec<u8>> {
        if self.blocks.is_empty() {
            return None;
        }
        let mut payload = Vec::with_capacity(self.buffered_bytes);
        for block in self.blocks.drain(..) {
            payload.extend_from_slice(&block);
        }
        self.buffered_bytes = 0;
        Some(payload)
    }
}
