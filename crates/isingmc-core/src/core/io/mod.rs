//! Reading and writing the estimator's text formats.
//!
//! - [`graph`] - the line-oriented graph description (`c` comments, one `p` parameter
//!   line, then `u v weight` triples)
//! - [`result`] - the two-line result artifact (minimum energy, encoded spin state)
//!
//! Both implement the shared [`traits::TextFile`] interface.

pub mod graph;
pub mod result;
pub mod traits;
