pub mod clock;
pub mod noise;

pub use clock::{Clock, MonotonicClock};
pub use noise::{FixedNoise, Noise, UniformNoise};
