pub mod depth;
pub mod matrix;
pub mod permeability;

pub use depth::DepthClass;
pub use matrix::{evaluate, RechargeVerdict};
pub use permeability::{
    permeability_class, resolve_aquifer, AquiferClass, Material, PermeabilityClass,
};
