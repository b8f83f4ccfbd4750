//! Fixed parameters of the walk.

/// Constants shared by the walk engine and the simulator.
pub mod walk_constants {
    /// Number of shots every walk is sampled with.
    pub const DEFAULT_SHOTS: usize = 1024;
    /// Phase rotation applied by the coin after the superposition (θ = π/4).
    pub const COIN_PHASE: f64 = std::f64::consts::FRAC_PI_4;
    /// Largest register the default simulator accepts.
    pub const DEFAULT_MAX_QUBITS: usize = 16;
}
