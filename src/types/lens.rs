use serde::{Deserialize, Serialize};

use crate::types::aperture::Aperture;
use crate::types::length::Length;

/// The lens block: make, model, and the optical settings in effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lens {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub aperture: Aperture,
    pub focal_length: Length,
}
