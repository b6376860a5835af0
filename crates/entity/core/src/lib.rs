//! # entity-core
//!
//! A generic value container that enforces a caller-supplied validator on
//! every write routed through it, while staying transparent for reads.
//!
//! ## Core Components
//!
//! - **Entity**: the container, with validated `set`, `resync`, read access,
//!   operator forwarding
//! - **Validator**: shareable predicate handle, accept-all by default
//! - **EntityConfig / TraceMode**: per-instance trace configuration
//! - **trace**: the process-wide trace flag
//!
//! ## Validation Rules
//!
//! - Construction never validates; only later writes do.
//! - A rejected write leaves the value and its shadow untouched and reports
//!   `false` (or [`ValidationRejected`] from the `try_*` forms).
//! - Replacing the validator never re-checks the current value.
//! - Binary and unary operators return a new instance with an accept-all
//!   validator.
//! - [`Entity::unchecked_mut`] is the one path that writes without
//!   validation.
//!
//! ```
//! use entity_core::Entity;
//!
//! let mut level = Entity::with_validator(5i64, |v| *v >= 0);
//! assert!(!level.set(-1));
//! assert_eq!(*level.get(), 5);
//!
//! level += 2;
//! assert_eq!(*level.get(), 7);
//!
//! let flipped = &level * -1;
//! assert_eq!(*flipped.get(), -7);
//! assert!(flipped.validator().is_accept_all());
//! ```

pub mod config;
pub mod entity;
pub mod error;
pub mod ops;
pub mod trace;
pub mod validator;

pub use config::{EntityConfig, TraceMode};
pub use entity::Entity;
pub use error::ValidationRejected;
pub use ops::{Step, Truthy};
pub use trace::{set_trace_enabled, trace_enabled};
pub use validator::Validator;
