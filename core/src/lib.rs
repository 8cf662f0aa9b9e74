//! XPM Core Types
//!
//! This crate provides the foundational types shared by the corpus, the
//! pattern matcher and the valuation index:
//! - Identity types (TextId, Variable)
//! - Value types (the Value enum bound to variables)
//! - Ordered variable sets (Variables, VarKey)
//! - Raw matching rows (Row, Tuple)
//! - Common error types

mod error;
mod id;
mod row;
mod value;
mod variables;

pub use error::*;
pub use id::*;
pub use row::*;
pub use value::*;
pub use variables::*;
