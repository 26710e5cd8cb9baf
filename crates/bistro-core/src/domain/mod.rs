//! # Bistro Core - Domain Module
//! 
//! Static inputs to the renderers. Nothing here changes after startup.

pub mod image;
pub mod menu_record;
pub mod menu_category;
pub mod menu_dataset;
pub mod site_content;
pub mod site_links;

pub use image::ImageRef;
pub use menu_record::MenuRecord;
pub use menu_category::MenuCategory;
pub use menu_dataset::MenuDataset;
pub use site_content::SiteContent;
pub use site_links::SiteLinks;
