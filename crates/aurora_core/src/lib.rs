//! Core plumbing for the Aurora component library.
//!
//! Every component composes its root class with [`cn`], projects closed
//! presentation choices onto `data-*` attributes through [`token_enum!`]
//! types, and reads subtree-scoped records with [`expect_scoped`]. The
//! polymorphic root, controllable state, and theme provider live here as
//! well so component crates stay thin.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod class;
mod context;
mod error;
mod polymorphic;
mod state;
mod theme;
mod tokens;

pub use class::{cn, ClassCandidate};
pub use context::{expect_scoped, require_context};
pub use error::UiError;
pub use polymorphic::{merge_attrs, polymorphic_root, As, AttrList};
pub use state::{use_controllable, Controllable};
pub use theme::{use_theme, AuroraProvider, ThemeConfig, ThemeMode, ThemeRadius};
pub use tokens::{
    active_state_token, checked_state_token, flag_token, open_state_token, Accent, Orientation,
    Radius, Side, Size,
};
