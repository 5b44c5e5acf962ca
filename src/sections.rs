//! Optional content blocks and their fixed render order.
//!
//! A section appears in the rendered body and in the navigation menu iff its
//! block exists in the configuration and carries at least one populated
//! field. The canonical order below is authoritative; JSON key order never
//! matters.

use crate::config::Config;

/// The optional body sections, in canonical render order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Services,
    Showcase,
    Testimonials,
    Faq,
    Cta,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::About,
        Section::Services,
        Section::Showcase,
        Section::Testimonials,
        Section::Faq,
        Section::Cta,
        Section::Contact,
    ];

    /// Key under which the section's render context is exposed to templates.
    pub fn key(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Services => "services",
            Section::Showcase => "showcase",
            Section::Testimonials => "testimonials",
            Section::Faq => "faq",
            Section::Cta => "cta",
            Section::Contact => "contact",
        }
    }

    /// Anchor id used for the section element and its navigation link.
    pub fn id(self) -> &'static str {
        match self {
            Section::About => "sobre",
            Section::Services => "servicos",
            Section::Showcase => "portfolio",
            Section::Testimonials => "depoimentos",
            Section::Faq => "faq",
            Section::Cta => "cta",
            Section::Contact => "contato",
        }
    }

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Section::About => "Sobre",
            Section::Services => "Serviços",
            Section::Showcase => "Portfólio",
            Section::Testimonials => "Depoimentos",
            Section::Faq => "FAQ",
            Section::Cta => "Começar",
            Section::Contact => "Contato",
        }
    }

    pub fn is_active(self, config: &Config) -> bool {
        match self {
            Section::About => config.about.as_ref().is_some_and(|s| !s.is_empty()),
            Section::Services => config.services.as_ref().is_some_and(|s| !s.is_empty()),
            Section::Showcase => config.showcase.as_ref().is_some_and(|s| !s.is_empty()),
            Section::Testimonials => config.testimonials.as_ref().is_some_and(|s| !s.is_empty()),
            Section::Faq => config.faq.as_ref().is_some_and(|s| !s.is_empty()),
            Section::Cta => config.cta.as_ref().is_some_and(|s| !s.is_empty()),
            Section::Contact => config.contact.as_ref().is_some_and(|s| !s.is_empty()),
        }
    }
}

/// Active sections in canonical order, driving both body and navigation.
pub fn active_sections(config: &Config) -> Vec<Section> {
    Section::ALL
        .iter()
        .copied()
        .filter(|s| s.is_active(config))
        .collect()
}

pub(crate) fn populated(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

fn has_text(value: &Option<String>) -> bool {
    populated(value.as_ref()).is_some()
}

fn has_items(values: &[String]) -> bool {
    values.iter().any(|v| !v.trim().is_empty())
}

/// A text/link pair used for buttons; only rendered when both halves are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
pub struct Button {
    pub text: String,
    pub link: String,
}

impl Button {
    pub fn is_complete(&self) -> bool {
        !self.text.trim().is_empty() && !self.link.trim().is_empty()
    }

    fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.link.trim().is_empty()
    }
}

/// The page header; always rendered, falling back to the site name.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
pub struct Hero {
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub image: Option<String>,
    pub bullet_points: Vec<String>,
    pub primary_cta: Option<Button>,
    pub secondary_cta: Option<Button>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
pub struct About {
    pub title: Option<String>,
    #[serde(alias = "content")]
    pub text: Option<String>,
    pub highlights: Vec<String>,
}

impl About {
    pub fn is_empty(&self) -> bool {
        !has_text(&self.title) && !has_text(&self.text) && !has_items(&self.highlights)
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
pub struct Services {
    pub title: Option<String>,
    pub description: Option<String>,
    pub items: Vec<ServiceItem>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
pub struct ServiceItem {
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
}

impl ServiceItem {
    pub(crate) fn is_populated(&self) -> bool {
        !self.name.trim().is_empty() || !self.description.trim().is_empty()
    }
}

impl Services {
    pub fn is_empty(&self) -> bool {
        !has_text(&self.title)
            && !has_text(&self.description)
            && !self.items.iter().any(ServiceItem::is_populated)
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
pub struct Showcase {
    pub title: Option<String>,
    pub description: Option<String>,
    pub items: Vec<ShowcaseItem>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
pub struct ShowcaseItem {
    pub image: Option<String>,
    pub caption: Option<String>,
    pub alt: Option<String>,
}

impl ShowcaseItem {
    pub(crate) fn is_populated(&self) -> bool {
        has_text(&self.image) || has_text(&self.caption)
    }
}

impl Showcase {
    pub fn is_empty(&self) -> bool {
        !has_text(&self.title)
            && !has_text(&self.description)
            && !self.items.iter().any(ShowcaseItem::is_populated)
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
pub struct Testimonials {
    pub title: Option<String>,
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub role: Option<String>,
}

impl Testimonial {
    pub(crate) fn is_populated(&self) -> bool {
        !self.quote.trim().is_empty() || !self.name.trim().is_empty()
    }
}

impl Testimonials {
    pub fn is_empty(&self) -> bool {
        !has_text(&self.title) && !self.items.iter().any(Testimonial::is_populated)
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
pub struct Faq {
    pub title: Option<String>,
    pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

impl FaqItem {
    pub(crate) fn is_populated(&self) -> bool {
        !self.question.trim().is_empty()
    }
}

impl Faq {
    pub fn is_empty(&self) -> bool {
        !has_text(&self.title) && !self.items.iter().any(FaqItem::is_populated)
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
pub struct CallToAction {
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub button: Option<Button>,
}

impl CallToAction {
    pub fn is_empty(&self) -> bool {
        !has_text(&self.headline)
            && !has_text(&self.subheadline)
            && self.button.as_ref().is_none_or(Button::is_empty)
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
pub struct Contact {
    pub title: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub maps_link: Option<String>,
    pub hours: Vec<String>,
    pub social: Vec<SocialLink>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

impl SocialLink {
    pub(crate) fn is_populated(&self) -> bool {
        !self.platform.trim().is_empty() && !self.url.trim().is_empty()
    }
}

impl Contact {
    pub fn is_empty(&self) -> bool {
        !has_text(&self.title)
            && !has_text(&self.description)
            && !has_text(&self.phone)
            && !has_text(&self.whatsapp)
            && !has_text(&self.email)
            && !has_text(&self.address)
            && !has_text(&self.maps_link)
            && !has_items(&self.hours)
            && !self.social.iter().any(SocialLink::is_populated)
    }
}
