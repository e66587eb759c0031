#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(any(feature = "std", feature = "no-std")))]
compile_error!("either the `std` or the `no-std` feature must be enabled");

mod error;
mod vector;

pub use error::Error;
pub use vector::Vector3;
