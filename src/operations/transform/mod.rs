mod copy;
mod spherify;

pub use copy::{CopyGraph, CopyMapping, VertexOverrides};
pub use spherify::{Spherify, SpherifyMode};
