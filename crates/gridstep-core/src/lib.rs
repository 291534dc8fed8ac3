//! Core types and traits for the gridstep simulation kernel.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the mesh and the time stepper: boundary
//! tags and domain sides, integration schemes, the error taxonomy, and
//! the [`Observer`] interface through which components report
//! construction, boundary and step events.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod error;
pub mod method;
pub mod observer;

pub use boundary::{BoundaryType, Side};
pub use error::{
    Axis, ConfigError, InvalidSideError, StepError, StepperError, UnknownMethodError,
};
pub use method::Method;
pub use observer::{Event, EventLevel, NoopObserver, Observer, TracingObserver};
