mod bounce;

pub use bounce::{BounceParams, BouncePhase, BounceSimulator, BounceState};
