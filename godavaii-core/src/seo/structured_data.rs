//! schema.org JSON-LD documents embedded in `<script type="application/ld+json">`.

use godavaii_model::{City, FaqEntry, SiteIdentity};
use serde::Serialize;

use crate::{error::Result, routes};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// A top-level JSON-LD document: `@context` plus the typed node.
#[derive(Debug, Clone, Serialize)]
pub struct JsonLd<T> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(flatten)]
    node: T,
}

impl<T: Serialize> JsonLd<T> {
    pub fn new(node: T) -> Self {
        Self {
            context: SCHEMA_CONTEXT,
            node,
        }
    }

    pub fn node(&self) -> &T {
        &self.node
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub name: String,
    pub url: String,
    pub logo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub same_as: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contact_point: Vec<ContactPoint>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub contact_type: String,
    pub email: String,
    pub area_served: String,
    pub available_language: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSite {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub url: String,
    pub name: String,
    pub potential_action: SearchAction,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchAction {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub target: String,
    #[serde(rename = "query-input")]
    pub query_input: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqPage {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub main_entity: Vec<Question>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub name: String,
    pub accepted_answer: Answer,
}

#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub service_type: String,
    pub name: String,
    pub area_served: ServiceArea,
    pub provider: Provider,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceArea {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub name: String,
    pub address: PostalAddress,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub address_country: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Provider {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub name: String,
    pub url: String,
    pub logo: String,
}

pub fn organization(identity: &SiteIdentity) -> JsonLd<Organization> {
    JsonLd::new(Organization {
        kind: "Organization",
        name: identity.name.clone(),
        url: identity.origin(),
        logo: identity.logo_url(),
        same_as: Some(Vec::new()),
        contact_point: vec![ContactPoint {
            kind: "ContactPoint",
            contact_type: "customer support".to_string(),
            email: identity.support_email.clone(),
            area_served: identity.area_served.clone(),
            available_language: identity.languages.clone(),
        }],
    })
}

pub fn website(identity: &SiteIdentity) -> JsonLd<WebSite> {
    let origin = identity.origin();
    JsonLd::new(WebSite {
        kind: "WebSite",
        potential_action: SearchAction {
            kind: "SearchAction",
            target: format!("{origin}/?q={{search_term_string}}"),
            query_input: "required name=search_term_string".to_string(),
        },
        url: origin,
        name: identity.name.clone(),
    })
}

pub fn faq_page(entries: &[FaqEntry]) -> JsonLd<FaqPage> {
    JsonLd::new(FaqPage {
        kind: "FAQPage",
        main_entity: entries
            .iter()
            .map(|entry| Question {
                kind: "Question",
                name: entry.question.clone(),
                accepted_answer: Answer {
                    kind: "Answer",
                    text: entry.answer.clone(),
                },
            })
            .collect(),
    })
}

pub fn city_service(identity: &SiteIdentity, city: &City) -> JsonLd<Service> {
    JsonLd::new(Service {
        kind: "Service",
        service_type: "Medicine Delivery".to_string(),
        name: format!("{} \u{2013} Medicine Delivery in {}", identity.name, city.name),
        area_served: ServiceArea {
            kind: "City",
            name: city.name.clone(),
            address: PostalAddress {
                kind: "PostalAddress",
                address_country: identity.area_served.clone(),
            },
        },
        provider: Provider {
            kind: "Organization",
            name: identity.name.clone(),
            url: identity.origin(),
            logo: identity.logo_url(),
        },
        url: identity.absolute(&routes::utils::city_path(city.slug.as_str())),
    })
}

/// Serialize for inline embedding. `</` is escaped so a string value can
/// never terminate the surrounding script element.
pub fn to_json_ld<T: Serialize>(document: &JsonLd<T>) -> Result<String> {
    let json = serde_json::to_string(document)?;
    Ok(json.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use godavaii_model::{CitySlug, SiteCatalog};
    use serde_json::{Value, json};

    fn parse<T: Serialize>(doc: &JsonLd<T>) -> Value {
        serde_json::from_str(&to_json_ld(doc).unwrap()).unwrap()
    }

    #[test]
    fn organization_has_support_contact() {
        let value = parse(&organization(&SiteIdentity::godavaii()));
        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "Organization");
        assert_eq!(value["logo"], "https://www.godavaii.com/LOGO.png");
        assert_eq!(
            value["contactPoint"][0],
            json!({
                "@type": "ContactPoint",
                "contactType": "customer support",
                "email": "info@godavaii.com",
                "areaServed": "IN",
                "availableLanguage": ["en", "hi"],
            })
        );
    }

    #[test]
    fn website_search_action_template() {
        let value = parse(&website(&SiteIdentity::godavaii()));
        assert_eq!(
            value["potentialAction"]["target"],
            "https://www.godavaii.com/?q={search_term_string}"
        );
        assert_eq!(
            value["potentialAction"]["query-input"],
            "required name=search_term_string"
        );
    }

    #[test]
    fn faq_page_mirrors_entries() {
        let catalog = SiteCatalog::default();
        let value = parse(&faq_page(&catalog.faq));
        let questions = value["mainEntity"].as_array().unwrap();
        assert_eq!(questions.len(), catalog.faq.len());
        assert_eq!(questions[0]["@type"], "Question");
        assert_eq!(questions[0]["acceptedAnswer"]["@type"], "Answer");
    }

    #[test]
    fn city_service_points_at_city_page() {
        let city = City::from_slug(CitySlug::parse("noida").unwrap());
        let value = parse(&city_service(&SiteIdentity::godavaii(), &city));
        assert_eq!(value["@type"], "Service");
        assert_eq!(value["name"], "GoDavaii \u{2013} Medicine Delivery in Noida");
        assert_eq!(value["areaServed"]["@type"], "City");
        assert_eq!(value["areaServed"]["address"]["addressCountry"], "IN");
        assert_eq!(
            value["url"],
            "https://www.godavaii.com/medicine-delivery/noida"
        );
    }

    #[test]
    fn script_close_is_escaped() {
        let entries = [FaqEntry::new("</script>", "x")];
        let json = to_json_ld(&faq_page(&entries)).unwrap();
        assert!(!json.contains("</script>"));
        assert!(json.contains("<\\/script>"));
    }
}
