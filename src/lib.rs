pub mod batch;
pub mod checker;
pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod hasher;
pub mod output;
pub mod source;
pub mod transport;

#[cfg(test)]
mod testing;

pub use checker::{Checker, Service};
pub use config::{Config, Settings};
pub use error::{Error, Result};
pub use hasher::PasswordHash;
pub use source::Source;
pub use transport::{HttpTransport, Transport};
