pub mod applications;
pub mod products;
pub mod simulate;
