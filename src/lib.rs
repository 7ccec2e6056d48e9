//! # Fragchain - Overlap Chain Assembly
//!
//! Reconstructs the longest possible ordered concatenation of text
//! fragments by matching the 2-character suffix of one fragment
//! against the 2-character prefix of another, in the manner of
//! domino chaining or DNA overlap assembly.
//!
//! The pipeline has four stages:
//! 1. **Relations**: index fragments by prefix and suffix, then derive
//!    each fragment's directed overlap relations from the tables
//! 2. **Filter**: drop fragments with no relation in either direction
//!    (restoring the original set if that would drop everything)
//! 3. **Search**: exhaustive depth-first backtracking for one longest
//!    simple path through the overlap graph
//! 4. **Merge**: splice the chain into a single string, dropping the
//!    2-character overlap at each junction
//!
//! ## Example
//!
//! ```
//! use fragchain::Assembler;
//!
//! let mut asm: Assembler = ["175676", "942517", "768812"].into_iter().collect();
//! let merged = asm.assemble().unwrap();
//!
//! assert_eq!(merged.value(), "94251756768812");
//! ```
//!
//! ## Performance
//!
//! - Relation building is O(n) indexing plus O(n·k) population for
//!   average bucket size k, never an O(n²) pairwise scan
//! - The search is exhaustive and worst-case exponential on densely
//!   connected inputs; callers bound input size, not the crate
//! - Fragments live in a generational-index arena (SlotMap), so the
//!   cyclic overlap graph needs no reference counting

mod assembler;
mod error;
mod filter;
mod fragment;
mod index;
mod merge;
mod observer;
mod search;

pub mod io;


pub use assembler::{Assembler, AssemblyStats};
pub use error::{ChainError, Result};
pub use fragment::{Fragment, OVERLAP_LEN};
pub use observer::{NoopObserver, Observer, TracingObserver};
