//! Access control for studio staff.
//!
//! Admin status is decided by an injected [`domain::AdminPolicy`] configured
//! at startup, never by identities baked into the code. Project listings are
//! narrowed to what a viewer may see with [`domain::ProjectVisibility`].

pub mod domain;
