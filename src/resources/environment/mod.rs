mod atmosphere;

pub use atmosphere::{
    Atmosphere, AtmosphereConfig, AtmosphereProperties, AtmosphereType, EARTH_RADIUS, GAS_CONSTANT,
    HEAT_CAPACITY_RATIO, STANDARD_GRAVITY,
};
