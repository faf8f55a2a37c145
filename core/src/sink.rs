use std::ops::ControlFlow;

/// The abstract consumer of generated candidates.
///
/// A sink receives each candidate in emission order and signals whether the scheduler should
/// keep going. The core makes no assumption about the sink being synchronous with any external
/// I/O; it may back-buffer internally but must preserve exact emission order on flush.
pub trait CandidateSink {
    /// Hands a candidate password to the sink.
    ///
    /// Returning [`ControlFlow::Break`] stops the scheduler immediately after this call; this is
    /// a clean, well-defined early termination, not an error.
    fn accept(&mut self, candidate: &[u8]) -> ControlFlow<()>;
}

impl<F> CandidateSink for F
where
    F: FnMut(&[u8]) -> ControlFlow<()>,
{
    fn accept(&mut self, candidate: &[u8]) -> ControlFlow<()> {
        self(candidate)
    }
}

/// A sink that collects every candidate into a `Vec`, useful for tests and small-scale
/// embedding.
#[derive(Default)]
pub struct VecSink {
    pub candidates: Vec<Vec<u8>>,
}

impl CandidateSink for VecSink {
    fn accept(&mut self, candidate: &[u8]) -> ControlFlow<()> {
        self.candidates.push(candidate.to_vec());
        ControlFlow::Continue(())
    }
}
