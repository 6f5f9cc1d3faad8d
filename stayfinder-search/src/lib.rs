//! Search, ranking, and comparison components for the Stayfinder engine.
//!
//! The crate provides the four pure building blocks of the search flow:
//!
//! - [`FilterPipeline`] narrows a catalog with conjunctive optional
//!   predicates;
//! - [`RecommendationScorer`] derives an absolute 0–100 score per listing
//!   from fixed-weight normalised signals;
//! - [`ComparisonScorer`] derives 0–100 per-axis scores calibrated relative
//!   to a small user-chosen set;
//! - [`SearchOrchestrator`] composes filter, score, sort, and pagination
//!   into the single entry point the presentation layer consumes.
//!
//! Every operation is a deterministic, side-effect-free function over
//! in-memory collections: no I/O, no shared state, and therefore no locking
//! concerns for concurrent callers.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod compare;
mod orchestrator;
mod pipeline;
mod recommend;

pub use compare::{ComparisonScore, ComparisonScorer};
pub use orchestrator::{SearchOrchestrator, SearchPage};
pub use pipeline::FilterPipeline;
pub use recommend::{RecommendationScorer, RecommendationWeights};
