pub mod ports;
pub mod registry;
pub mod showcase;
