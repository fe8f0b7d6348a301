//! Plate Check - bending and shear capacity of rectangular steel plates
//!
//! Implements a simplified AS 4100:2020 formula set:
//! - Section properties of a solid rectangular plate
//! - Compactness classification (b/t ≤ 60·ε)
//! - Design bending and shear capacities
//! - Actual stresses and utilisation ratios
//!
//! This is not a full AS 4100 compliance check.
//!
//! ## Example
//! ```rust
//! use plate_check::prelude::*;
//!
//! let input = PlateInput::default()
//!     .with_geometry(200.0, 10.0)
//!     .with_actions(5.0, 100.0);
//! input.validate().unwrap();
//!
//! let result = compute(&input);
//! assert!(result.is_compact);
//! assert!(result.is_adequate());
//!
//! println!("{}", Report::from_result(&result));
//! ```

pub mod capacity;
pub mod compactness;
pub mod error;
pub mod input;
pub mod report;
pub mod response;
pub mod section;

// Re-export common types
pub mod prelude {
    pub use crate::capacity::{compute, PlateResult, UtilisationStatus};
    pub use crate::compactness::Compactness;
    pub use crate::error::{CalcError, CalcResult};
    pub use crate::input::{InputField, PlateInput, FIELDS};
    pub use crate::report::{Metric, Report};
    pub use crate::response::{run_check, CheckResponse};
    pub use crate::section::PlateSection;
}

#[cfg(feature = "server")]
pub mod api;

#[cfg(feature = "wasm")]
pub mod wasm;
