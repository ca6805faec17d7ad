//! Types used by inlay in its configuration

mod duration;
mod uri;

pub use duration::*;
pub use uri::*;
