//! Batched delivery of streaming extraction output.
//!
//! Streaming CSV yields values one at a time; pushing each value to a host
//! sink individually would make the sink operation dominate. The drain loop
//! amortizes it: values accumulate in a buffer that is flushed once it holds
//! [`BatchPolicy::max_items`] values or once [`BatchPolicy::max_delay`] has
//! passed since the last flush, whichever comes first, with a final flush
//! after the source is exhausted.
//!
//! Cancellation is cooperative and polled between values and before each
//! flush. Once observed, no further values are produced and any
//! buffered-but-unflushed values are intentionally dropped; partial results
//! already flushed are not rolled back.
use crate::error::{Result, StringLeError};
use crate::extraction::csv::stream_csv;
use crate::types::ExtractionOptions;
use ahash::AHashSet;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Cooperative cancellation signal shared between a host and a drain loop.
///
/// Cloning is cheap; all clones observe the same flag. Cancellation is not an
/// error, just an early end of the sequence.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Flush thresholds for the batched drain loop.
#[derive(Debug, Clone)]
pub struct BatchPolicy {
    /// Flush once this many values are buffered.
    pub max_items: usize,
    /// Flush once this much time has passed since the previous flush.
    pub max_delay: Duration,
}

impl Default for BatchPolicy {
    fn default() -> Self {
        Self {
            max_items: 500,
            max_delay: Duration::from_millis(100),
        }
    }
}

/// Host-provided sink that accepts incremental batches of extracted strings.
///
/// Implementations perform the actual I/O (append to an editor buffer, write
/// to stdout, send over a channel). A failed write aborts the drain.
#[async_trait]
pub trait BatchSink {
    async fn write_batch(&mut self, batch: Vec<String>) -> Result<()>;
}

/// Simple in-memory sink, mostly useful in tests and for hosts that want the
/// batch boundaries preserved.
#[derive(Debug, Default)]
pub struct VecSink {
    pub batches: Vec<Vec<String>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All values across batches, in delivery order.
    pub fn values(&self) -> Vec<String> {
        self.batches.iter().flatten().cloned().collect()
    }
}

#[async_trait]
impl BatchSink for VecSink {
    async fn write_batch(&mut self, batch: Vec<String>) -> Result<()> {
        self.batches.push(batch);
        Ok(())
    }
}

/// Drain a streaming CSV extraction into `sink` with batched flushes.
///
/// With `dedupe` set, repeated values are dropped as they stream (first
/// occurrence wins), matching the bulk pipeline's dedupe stage. Returns the
/// number of values delivered to the sink.
pub async fn drain_csv_to_sink<S: BatchSink + Send>(
    text: &str,
    options: &ExtractionOptions,
    policy: &BatchPolicy,
    dedupe: bool,
    token: CancellationToken,
    sink: &mut S,
) -> Result<u64> {
    let mut seen = dedupe.then(AHashSet::new);
    let mut pending: Vec<String> = Vec::new();
    let mut delivered: u64 = 0;
    let mut last_flush = Instant::now();

    let stream = stream_csv(text, options).with_cancellation(token.clone());

    for value in stream {
        if token.is_cancelled() {
            return Ok(delivered);
        }
        if let Some(seen) = seen.as_mut()
            && !seen.insert(value.clone())
        {
            continue;
        }
        pending.push(value);

        if pending.len() >= policy.max_items || last_flush.elapsed() > policy.max_delay {
            if token.is_cancelled() {
                return Ok(delivered);
            }
            delivered += pending.len() as u64;
            sink.write_batch(std::mem::take(&mut pending)).await?;
            last_flush = Instant::now();
        }
    }

    if !pending.is_empty() && !token.is_cancelled() {
        delivered += pending.len() as u64;
        sink.write_batch(pending).await?;
    }

    Ok(delivered)
}

/// Synchronous wrapper over [`drain_csv_to_sink`] using a shared runtime.
///
/// The runtime is created once on first use. Creation only fails on resource
/// exhaustion, at which point nothing else would work either, so failing fast
/// is the right call.
#[cfg(feature = "tokio-runtime")]
pub fn drain_csv_to_sink_sync<S: BatchSink + Send>(
    text: &str,
    options: &ExtractionOptions,
    policy: &BatchPolicy,
    dedupe: bool,
    token: CancellationToken,
    sink: &mut S,
) -> Result<u64> {
    use once_cell::sync::Lazy;

    static GLOBAL_RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("Failed to create global Tokio runtime - system may be out of resources")
    });

    GLOBAL_RUNTIME.block_on(drain_csv_to_sink(text, options, policy, dedupe, token, sink))
}

/// Sink wrapper around any `FnMut(Vec<String>)`, for hosts without async I/O.
pub struct FnSink<F: FnMut(Vec<String>) + Send> {
    f: F,
}

impl<F: FnMut(Vec<String>) + Send> FnSink<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<F: FnMut(Vec<String>) + Send> BatchSink for FnSink<F> {
    async fn write_batch(&mut self, batch: Vec<String>) -> Result<()> {
        (self.f)(batch);
        Ok(())
    }
}

impl StringLeError {
    /// Convenience for sinks wrapping foreign errors.
    pub fn from_sink_error<E: std::fmt::Display>(err: E) -> Self {
        Self::sink(err.to_string())
    }
}
