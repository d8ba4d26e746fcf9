use flyer_vlm::FlightState;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Sea-level density (kg/m³).
pub const SEA_LEVEL_DENSITY: f64 = 1.225;

pub fn cruise_state(alpha: f64, beta: f64) -> FlightState {
    FlightState::new(50.0, SEA_LEVEL_DENSITY, alpha, beta)
}

/// Reproducible random flight states within the linear range of the method.
pub fn random_states(seed: u64, count: usize) -> Vec<FlightState> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            FlightState::new(
                rng.gen_range(10.0..120.0),
                rng.gen_range(0.4..1.3),
                rng.gen_range(-8.0..12.0),
                rng.gen_range(-5.0..5.0),
            )
        })
        .collect()
}
