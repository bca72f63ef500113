//! Wire types shared between the Eco Stay admin frontend and the REST API.

pub mod domain;
pub mod system;
