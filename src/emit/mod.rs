//! Artifact emitters.
//!
//! Both emitters render the complete artifact in memory and only then touch
//! the filesystem with a single write, so a failed run never leaves a
//! truncated table behind. The render halves are public so the numeric
//! pipelines can be verified without any I/O.

pub mod pcm;
pub mod table;
