//! Triangle-soup to triangle-strip conversion.
//!
//! Input is a list of winding-ordered index triples; output is a list of
//! strips that decode (alternating winding, degenerate steps skipped) to
//! exactly the non-degenerate input triangles.
//!
//! Layout
//! - `mesh`: face arena, strip-compatible adjacency, seed order.
//! - `strip`: a strip under construction and its parity repair.
//! - `stripifier`: seed loop, lookahead over seed candidates, merge pass.
//! - `decode`, `stitch`: consumers of strips (decoding, coverage checks,
//!   joining into one strip).
//! - `input`, `gen`: validated host input and reproducible test meshes.
//!
//! API Policy
//! - The free functions and `StripifyCfg` are the supported surface for the
//!   CLI and the Python binding. `Mesh`/`Strip` internals may change.

pub mod decode;
pub mod gen;
pub mod input;
pub mod mesh;
pub mod stitch;
pub mod strip;
pub mod stripifier;
pub mod triangle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use decode::{check_strips, triangulate, CoverageError, Mismatch};
pub use input::{triangles_from_rows, InputError, InputErrorKind};
pub use mesh::{FaceId, Mesh};
pub use stitch::stitch_strips;
pub use stripifier::{stripify, stripify_with, DegeneratePolicy, Stripifier, StripifyCfg};
pub use triangle::{Triangle, Vertex};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::decode::{check_strips, triangulate};
    pub use crate::stitch::stitch_strips;
    pub use crate::stripifier::{stripify, stripify_with, DegeneratePolicy, StripifyCfg};
    pub use crate::triangle::{same_triangle, Triangle, Vertex};
}
