mod control_handle;

pub use control_handle::*;
