mod generate_solids;
mod placement;

pub use generate_solids::{GenerateSolids, DEFAULT_SOLID_COUNT};
pub use placement::PlacementConstraint;
