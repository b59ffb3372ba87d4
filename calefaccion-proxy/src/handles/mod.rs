mod relay_handle;

pub use relay_handle::*;
