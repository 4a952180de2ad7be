//! Response advice subsystem.
//!
//! # Data Flow
//! ```text
//! Endpoint registration (registry.rs, controlled flag)
//!     → router build layers interceptor.rs onto controlled routes only
//!     → handler produces body
//!     → interceptor.rs asks provider.rs for a value
//!     → Custom-Header written, response sent
//!
//! Uncontrolled routes skip the interceptor entirely.
//! ```
//!
//! # Design Decisions
//! - Capability is a registration-time flag, not a runtime lookup
//! - Provider is bound once at construction and shared via Arc

pub mod interceptor;
pub mod provider;
pub mod registry;

pub use interceptor::{apply_header_advice, CUSTOM_HEADER};
pub use provider::{HeaderValueProvider, StaticMessageProvider};
pub use registry::Endpoint;
