//! Presentational components shared by every page
//!
//! Each component turns its props into a context record for the embedded
//! templates. Props carry everything a component shows: nothing is looked up
//! from global state at render time.

pub mod bio;
pub mod layout;
pub mod seo;

pub use bio::BioProps;
pub use layout::{HeadingLevel, LayoutProps, ACCENT_COLOR};
pub use seo::SeoProps;
