//! Documentation model use cases

mod assemble_package;
mod load_package;
mod render_comments;

pub use assemble_package::{partition_files, PackageAssembler};
pub use load_package::LoadPackageUseCase;
pub use render_comments::{CommentRenderer, Commented};
