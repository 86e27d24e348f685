//! Shared UI crate for the Spoonz site. Content, state machines, components
//! and views live here; the platform crates only launch and route.

pub mod app;
pub mod builder;
pub mod components;
pub mod core;
pub mod i18n;
pub mod sections;
pub mod site;
pub mod views;

pub use app::SiteProviders;

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
