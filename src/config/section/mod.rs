//! Configuration section definitions.

mod content;
mod serve;
mod site;
mod sitemap;

pub use content::ContentSection;
pub use serve::ServeSection;
pub use site::SiteSection;
pub use sitemap::{PriorityPolicy, SitemapSection};
