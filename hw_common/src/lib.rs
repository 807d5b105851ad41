pub mod primitives;
pub mod transport;
