//! Library scanning: turn command-line paths into decoded `Track`s.

mod scan;

pub use scan::scan;
