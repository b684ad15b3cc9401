use serde::{Deserialize, Serialize};

pub mod macros;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Args {
    pub q: String,
}
