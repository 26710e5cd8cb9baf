//! Static copy for the non-menu sections of the site.

use bistro_shared::config::SiteSettings;

use super::ImageRef;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContent {
    pub name: String,
    pub tagline: String,
    pub about: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub hours: String,
    pub about_image: ImageRef,
    pub gallery: Vec<ImageRef>,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            name: "Bistro".to_string(),
            tagline: "Seasonal plates, from first coffee to last dessert.".to_string(),
            about: "A neighbourhood kitchen cooking breakfast, lunch and dinner from local produce."
                .to_string(),
            address: "12 Harbour Street".to_string(),
            phone: "+1 555 0100".to_string(),
            email: "hello@bistro.example".to_string(),
            hours: "Daily 8:00 - 22:00".to_string(),
            about_image: ImageRef::new("images/about-img.jpg", "Our dining room"),
            gallery: (1..=4)
                .map(|n| ImageRef::new(format!("images/gallery-img-{}.jpg", n), format!("Gallery photo {}", n)))
                .collect(),
        }
    }
}

impl SiteContent {
    /// Applies configured overrides on top of the defaults.
    pub fn from_settings(settings: &SiteSettings) -> Self {
        let mut content = Self::default();
        let overrides = [
            (&mut content.name, &settings.name),
            (&mut content.tagline, &settings.tagline),
            (&mut content.about, &settings.about),
            (&mut content.address, &settings.address),
            (&mut content.phone, &settings.phone),
            (&mut content.email, &settings.email),
            (&mut content.hours, &settings.hours),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                *field = value.clone();
            }
        }
        if let Some(gallery) = &settings.gallery {
            content.gallery = gallery
                .iter()
                .map(|image| ImageRef::new(image.src.clone(), image.alt.clone()))
                .collect();
        }
        content
    }
}
