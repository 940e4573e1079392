//! Auth-domain identifiers, grant types, redirect state, and token models.

pub mod grant;
pub mod id;
pub mod state;
pub mod token;

pub use grant::*;
pub use id::*;
pub use state::*;
pub use token::{record::*, secret::*};
