use nalgebra::{DMatrix, Vector3};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::components::{AeroResults, Aircraft, FlightState, Lattice};
use crate::resources::config::{AnalysisConfig, WakeAlignment};
use crate::resources::errors::Result;
use crate::systems::aerodynamics::{
    aero_coefficients, assemble_influence, boundary_conditions, global_forces, panel_loads,
    validate_refs, wake_direction, Execution, FactorizedSystem,
};
use crate::systems::geometry::{resolve_aircraft, ResolvedAircraft};
use crate::systems::mesh::generate_lattice;

/// Influence matrix of a state-independent wake and its factorisation.
#[derive(Debug, Clone)]
struct Influence {
    matrix: DMatrix<f64>,
    system: FactorizedSystem,
}

/// One aircraft, meshed and ready to be evaluated at any number of flight states.
///
/// With the default body-axis wake the influence matrix does not depend on the
/// flight state. It is assembled and factorised once in [`Analysis::new`] and
/// shared read-only by every evaluation.
#[derive(Debug, Clone)]
pub struct Analysis {
    config: AnalysisConfig,
    aircraft: ResolvedAircraft,
    lattice: Lattice,
    influence: Option<Influence>,
}

impl Analysis {
    pub fn new(aircraft: &Aircraft, config: AnalysisConfig) -> Result<Self> {
        validate_refs(&aircraft.refs)?;
        let resolved = resolve_aircraft(aircraft)?;
        let lattice = generate_lattice(&resolved, &config.mesh)?;

        let influence = match config.wake {
            WakeAlignment::BodyAxis => {
                let matrix = assemble_influence(&lattice, &Vector3::x(), Execution::Parallel)?;
                let system = FactorizedSystem::new(matrix.clone())?;
                Some(Influence { matrix, system })
            }
            WakeAlignment::Freestream => None,
        };

        info!(
            "Analysis ready for '{}': {} panels, {:?} wake",
            resolved.uid,
            lattice.len(),
            config.wake
        );
        Ok(Self {
            config,
            aircraft: resolved,
            lattice,
            influence,
        })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn resolved(&self) -> &ResolvedAircraft {
        &self.aircraft
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Influence matrix shared by all flight states, `None` when the wake follows
    /// the freestream.
    pub fn influence_matrix(&self) -> Option<&DMatrix<f64>> {
        self.influence.as_ref().map(|i| &i.matrix)
    }

    /// Influence matrix for one flight state.
    pub fn influence_matrix_for(&self, state: &FlightState) -> Result<DMatrix<f64>> {
        match &self.influence {
            Some(influence) => Ok(influence.matrix.clone()),
            None => {
                let wake = wake_direction(self.config.wake, state);
                assemble_influence(&self.lattice, &wake, Execution::Parallel)
            }
        }
    }

    /// Evaluates a single flight state with the panel loops on the rayon pool.
    pub fn evaluate(&self, state: &FlightState) -> Result<AeroResults> {
        self.evaluate_with(state, Execution::Parallel)
    }

    /// Evaluates every flight state (an aero-performance map). States run in
    /// parallel, each of them serially.
    pub fn sweep(&self, states: &[FlightState]) -> Result<Vec<AeroResults>> {
        info!("Sweeping {} flight states", states.len());
        states
            .par_iter()
            .map(|state| self.evaluate_with(state, Execution::Serial))
            .collect()
    }

    fn evaluate_with(&self, state: &FlightState, execution: Execution) -> Result<AeroResults> {
        state.validate()?;
        let refs = &self.aircraft.refs;
        let wake = wake_direction(self.config.wake, state);

        let assembled;
        let system = match &self.influence {
            Some(influence) => &influence.system,
            None => {
                assembled =
                    FactorizedSystem::new(assemble_influence(&self.lattice, &wake, execution)?)?;
                &assembled
            }
        };

        let rhs = boundary_conditions(&self.lattice, state, &refs.rcenter)?;
        let circulation = system.solve(&rhs)?;

        let panels = panel_loads(&self.lattice, &circulation, state, &refs.rcenter, &wake, execution)?;
        let forces = global_forces(&panels, state, &refs.rcenter, execution);
        let coefficients = aero_coefficients(&forces, state, refs)?;

        debug!(
            "V = {:.2}, alpha = {:.2}, beta = {:.2}: CL = {:.5}, CD = {:.5}, Cm = {:.5}",
            state.airspeed,
            state.alpha,
            state.beta,
            coefficients.c_lift,
            coefficients.c_drag,
            coefficients.c_pitch
        );

        Ok(AeroResults {
            state: *state,
            panels,
            forces,
            coefficients,
        })
    }
}
