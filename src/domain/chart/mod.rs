//! Chart aggregate: geometry handle, options and pointer gestures.

pub mod drag;
pub mod handle;
pub mod options;
pub mod selection;
pub mod value_objects;

pub use drag::*;
pub use handle::*;
pub use options::*;
pub use selection::*;
pub use value_objects::*;
