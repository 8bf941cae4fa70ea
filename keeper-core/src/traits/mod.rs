//! Capabilities Keeper consumes from its host.
//!
//! The engines never talk to an editor directly. Everything they need from the
//! host (asset listing, dependency edges, type reflection, object properties,
//! cancellation) arrives through these traits.

pub mod asset_graph;
pub mod cancellation;
pub mod object_view;
pub mod type_reflection;

pub use asset_graph::AssetGraphProvider;
pub use cancellation::{Cancellable, CancellationToken, NeverCancel};
pub use object_view::ObjectView;
pub use type_reflection::TypeReflection;
