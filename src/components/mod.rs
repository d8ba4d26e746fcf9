pub mod aircraft;
pub mod airfoil;
pub mod control;
pub mod flight_state;
pub mod lattice;
pub mod results;
pub mod segment;

pub use aircraft::{Aircraft, ReferenceValues, Symmetry, Wing};
pub use airfoil::{Airfoil, Camber};
pub use control::{DeviceType, WingControl};
pub use flight_state::{FlightCondition, FlightState};
pub use lattice::{Lattice, Panel};
pub use results::{AeroCoefficients, AeroResults, GlobalForces, PanelResult};
pub use segment::{PanelDensity, SegmentAirfoils, SegmentGeometry, SegmentVertices, WingSegment};
