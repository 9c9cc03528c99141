use crate::{
    cities::{City, CitySlug},
    error::{ModelError, Result},
    faq::FaqEntry,
    metrics::LaunchMetrics,
    showcase::{Screenshot, Testimonial},
    site::SiteIdentity,
};

/// All static content the site renders from.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct SiteCatalog {
    pub identity: SiteIdentity,
    pub screenshots: Vec<Screenshot>,
    pub testimonials: Vec<Testimonial>,
    pub cities: Vec<City>,
    pub metrics: LaunchMetrics,
    pub faq: Vec<FaqEntry>,
}

impl Default for SiteCatalog {
    fn default() -> Self {
        Self {
            identity: SiteIdentity::godavaii(),
            screenshots: default_screenshots(),
            testimonials: default_testimonials(),
            cities: default_cities(),
            metrics: LaunchMetrics::default(),
            faq: default_faq(),
        }
    }
}

impl SiteCatalog {
    /// Reject catalogs the page cannot render: carousels need at least one
    /// item and city pages need at least one served city.
    pub fn validate(&self) -> Result<()> {
        if self.screenshots.is_empty() {
            return Err(ModelError::EmptyField("screenshots"));
        }
        if self.testimonials.is_empty() {
            return Err(ModelError::EmptyField("testimonials"));
        }
        if self.cities.is_empty() {
            return Err(ModelError::EmptyField("cities"));
        }
        Ok(())
    }

    pub fn with_cities(mut self, cities: Vec<City>) -> Self {
        self.cities = cities;
        self
    }

    pub fn with_identity(mut self, identity: SiteIdentity) -> Self {
        self.identity = identity;
        self
    }

    pub fn city(&self, slug: &CitySlug) -> Option<&City> {
        self.cities.iter().find(|city| &city.slug == slug)
    }
}

pub fn default_screenshots() -> Vec<Screenshot> {
    vec![
        Screenshot::new("/LOGO.png", "Logo"),
        Screenshot::new("/MEDICINES.png", "Medicines"),
        Screenshot::new("/HOME.png", "Home"),
    ]
}

pub fn default_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new("Got my dad’s meds in 18 minutes. Superb!", "Priya S."),
        Testimonial::new(
            "Pharmacist suggested a safer alternative. 10/10.",
            "Kiran M.",
        ),
        Testimonial::new("Clean UI, quick delivery, verified stores.", "Arjun R."),
        Testimonial::new("Super fast and the rider was courteous.", "Neha V."),
        Testimonial::new("Reliable at midnight when it mattered most.", "Rohit P."),
        Testimonial::new("Easy Rx upload. Smooth experience.", "Zainab H."),
    ]
}

pub fn default_cities() -> Vec<City> {
    vec![City {
        name: "Noida".to_string(),
        slug: CitySlug::from_static("noida"),
    }]
}

pub fn default_faq() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new(
            "Do I need a prescription?",
            "For prescription medicines (Schedule H/H1), yes, upload a valid Rx. OTC items can be ordered without one.",
        ),
        FaqEntry::new(
            "How fast is delivery?",
            "Most orders arrive in under 30 minutes within the service radius, subject to weather & pharmacy availability.",
        ),
        FaqEntry::new(
            "What are the charges for pharmacies?",
            "Simple success-based pricing with transparent invoices. No listing fee during launch.",
        ),
        FaqEntry::new(
            "How are delivery partners paid?",
            "Regular payouts to your bank account. Peak-hour deliveries include additional incentives.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_renderable() {
        let catalog = SiteCatalog::default();
        catalog.validate().unwrap();
        assert_eq!(catalog.screenshots.len(), 3);
        assert_eq!(catalog.testimonials.len(), 6);
        assert_eq!(catalog.faq.len(), 4);
    }

    #[test]
    fn only_noida_is_served_by_default() {
        let catalog = SiteCatalog::default();
        let noida = CitySlug::parse("noida").unwrap();
        let mumbai = CitySlug::parse("mumbai").unwrap();
        assert_eq!(catalog.city(&noida).map(|c| c.name.as_str()), Some("Noida"));
        assert!(catalog.city(&mumbai).is_none());
    }

    #[test]
    fn empty_city_list_is_rejected() {
        let catalog = SiteCatalog::default().with_cities(Vec::new());
        assert_eq!(catalog.validate(), Err(ModelError::EmptyField("cities")));
    }
}
