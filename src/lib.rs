//! doxdoc: numpydoc docstrings from doxygen XML.
//!
//! Runs doxygen over a C/C++ source tree, parses the XML it writes, and
//! splices rendered class, method and function docstrings into a host
//! pipeline's description registry.

pub mod config;
pub mod doxyfile;
pub mod error;
pub mod model;
pub mod parser;
pub mod registry;
pub mod render;
pub mod runner;

pub use config::RunConfig;
pub use error::{Error, Result};
pub use registry::{HostState, UpdateReport, Updater};
