pub mod constants;
pub mod conversion;
pub mod orbel_errors;
pub mod orbit_type;
