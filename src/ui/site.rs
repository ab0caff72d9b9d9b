//! Site content context
//!
//! The content tables are provided once at the root of the app and read by the
//! page sections, so they never reach for module-level globals.

use leptos::prelude::*;

use crate::core::SiteContent;

/// Provide the landing page content to the component tree
pub fn provide_site_content(content: SiteContent) -> SiteContent {
    provide_context(content);
    content
}

/// Use the site content from anywhere in the component tree.
///
/// Falls back to the built-in Velix content when nothing was provided.
pub fn use_site_content() -> SiteContent {
    use_context::<SiteContent>().unwrap_or_default()
}
