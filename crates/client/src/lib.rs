//! Helvania client — social-profile widget.
//!
//! Fetches a player's published social-profile document, degrades to a
//! neutral default when the document is missing or unreadable, and renders
//! the result into a host-page container as styled HTML with a short
//! entrance animation. DOM work only exists on wasm; profile fetching and
//! HTML generation also build natively, which is where the tests run.

pub mod logging;
pub mod profile_client;
pub mod render;
pub mod widget;

#[cfg(target_arch = "wasm32")]
pub mod animate;

pub use profile_client::ProfileClient;
pub use widget::SocialProfileWidget;
