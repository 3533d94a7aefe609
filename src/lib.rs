pub mod cluster;
pub mod error;
pub mod resource;
pub mod sim;

pub use error::Error;

#[cfg(test)]
mod test;
