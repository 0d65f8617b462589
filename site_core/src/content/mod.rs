//! Static marketing content for the site pages

pub mod catalog;

pub use catalog::*;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Residential,
    Commercial,
}

/// Filter tabs on the services page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceFilter {
    #[default]
    All,
    Residential,
    Commercial,
}

impl ServiceFilter {
    pub fn matches(&self, category: ServiceCategory) -> bool {
        match self {
            ServiceFilter::All => true,
            ServiceFilter::Residential => category == ServiceCategory::Residential,
            ServiceFilter::Commercial => category == ServiceCategory::Commercial,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
    pub category: ServiceCategory,
}

#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    pub rating: u8,
    pub content: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// A titled card with an icon: "why choose us" features and core values.
#[derive(Debug, Clone, Serialize)]
pub struct Highlight {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessStep {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactInfo {
    pub phone: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    pub hours: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub founded_year: u16,
}

#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Badge {
    pub icon: &'static str,
    pub label: &'static str,
}

/// A `<select>` option on the contact form.
#[derive(Debug, Clone, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Services in `filter`'s category, in their original order.
pub fn filter_services(services: &[Service], filter: ServiceFilter) -> Vec<&Service> {
    services.iter().filter(|s| filter.matches(s.category)).collect()
}

pub fn find_service(slug: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == slug)
}
