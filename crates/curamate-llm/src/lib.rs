//! Prompt building and structured decoding for the CuraMate completion
//! service.
//!
//! The completion service is an opaque collaborator that turns a prompt
//! into free-form text; everything structured about its output comes from
//! prompt-engineered contracts plus the extraction/validation paths here.
//! Both parsers are single-shot: one call, one decode, no retries.

pub mod completion;
pub mod extraction;
pub mod prompts;

pub use completion::*;
pub use extraction::*;
pub use prompts::*;
