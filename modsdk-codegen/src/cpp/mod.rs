//! C++ header code generation modules.

pub mod classes;
pub mod functions;
pub mod helpers;
pub mod members;
pub mod sort;
pub mod templates;

pub use classes::{ClassBodies, ClassGenerator};
pub use sort::{SortContext, sort_class, sort_root};
