#![allow(dead_code)]

pub mod runner;
pub mod transport;
pub mod world;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{anyhow, Context, Error};
        pub type Result<T> = anyhow::Result<T, Error>;

        pub use std::collections::{BTreeSet, HashMap, HashSet};
    }
}

pub mod prelude {
    pub use super::runner::*;
    pub use super::transport::*;
    pub use super::utils::prelude::*;
    pub use super::world::prelude::*;
}
