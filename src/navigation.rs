//! Navigation entry points, diagnostics and the route graph.

pub use wayfinder_navigation::*;
