mod money;
mod operation;

pub use money::*;
pub use operation::*;
