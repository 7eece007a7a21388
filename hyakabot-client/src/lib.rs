#[macro_use]
extern crate eyre;

#[macro_use]
extern crate tracing;

mod client;
mod error;
mod hyakanime;

pub use self::{client::Client, error::ClientError};

static MY_USER_AGENT: &str = env!("CARGO_PKG_NAME");
