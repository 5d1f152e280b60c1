//! B-spline core algorithms: Cox–de Boor recursion, knot vectors, and De Boor evaluation.

pub mod basis;
pub mod deboor;
pub mod knot;

pub use basis::{basis, basis_with_tolerance, BasisTable};
pub use knot::{basis_functions, find_span, KnotVector};
