pub mod density;
pub mod spread;

pub use density::highest_density;
pub use spread::smallest_spread;
