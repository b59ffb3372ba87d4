mod command;
mod motion;
mod proxy;
mod response;

pub use command::*;
pub use motion::*;
pub use proxy::*;
pub use response::*;
