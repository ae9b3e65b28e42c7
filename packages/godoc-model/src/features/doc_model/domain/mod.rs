//! Documentation model domain
//!
//! Immutable entities: accessors hand out shared slices, never the owning
//! vectors, so a built model cannot be altered through its API.

mod block;
mod documented;
mod function;
mod package;
mod parameter;
mod type_decl;

pub use block::{Block, Constant, ConstantBlock, Variable, VariableBlock};
pub use documented::Documented;
pub use function::{Function, Method};
pub use package::Package;
pub use parameter::Parameter;
pub use type_decl::Type;
