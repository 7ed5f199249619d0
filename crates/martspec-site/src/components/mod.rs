//! Reusable page components.
//!
//! Props are translation keys, asset paths and colours; text is resolved at
//! render time through the [`RenderContext`](crate::render::RenderContext).

pub mod card;
pub mod cta;
pub mod list;
pub mod pill;
pub mod review;
pub mod stories;

pub use card::{CardLink, TitleTextCard};
pub use cta::{AppStoreButton, CallToAction, Header, ImagePosition, LocalizedImage};
pub use list::{BulletList, IconTitleText, IconTitleTextList};
pub use pill::PillText;
pub use review::{Review, ReviewEntry};
