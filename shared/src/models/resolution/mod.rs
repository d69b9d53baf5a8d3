use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub nx: usize,
    pub ny: usize,
}

impl Resolution {
    pub fn new(nx: usize, ny: usize) -> Self {
        Self { nx, ny }
    }
}
