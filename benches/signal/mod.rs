//! Benchmarks for the signal layer.

mod build;
mod stream;

pub use build::bench_build;
pub use stream::bench_stream;
