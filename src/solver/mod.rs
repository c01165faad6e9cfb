//! Wordle solving algorithms
//!
//! Constraint folding, entropy scoring, guess pool sampling, and the session
//! that ties them into a suggest → feedback → filter loop.

pub mod config;
pub mod constraints;
pub mod entropy;
pub mod sampler;
pub mod selector;
mod session;

pub use config::{SamplerConfig, SolverConfig};
pub use constraints::Constraints;
pub use entropy::Suggestion;
pub use sampler::CandidatePoolSampler;
pub use selector::GuessSelector;
pub use session::{GuessRecord, SessionState, SolverError, SolverSession};
