//! Data layer: core types, loading, and the transformation stages.
//!
//! Architecture:
//! ```text
//!  .csv
//!    │
//!    ▼
//!  ┌────────┐
//!  │ loader │  parse + infer field types → Dataset
//!  └────────┘
//!    │
//!    ▼
//!  ┌───────────┐   ┌────────┐   ┌───────────┐   ┌──────┐
//!  │ transform │ → │ filter │ → │ aggregate │ → │ sort │
//!  └───────────┘   └────────┘   └───────────┘   └──────┘
//!    │                                     each stage returns a fresh value
//!    ▼
//!  ┌────────┐
//!  │ export │  Dataset → delimited text
//!  └────────┘
//! ```

pub mod aggregate;
pub mod error;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod sort;
pub mod transform;
