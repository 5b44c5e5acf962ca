use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::sections::{
    About, CallToAction, Contact, Faq, Hero, Services, Showcase, Testimonials,
};
use crate::slug;

/// Built-in theme, applied field-by-field when the configuration leaves a
/// color unset.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "#1b6ef3".to_owned(),
            secondary: "#123a9a".to_owned(),
            accent: "#f97316".to_owned(),
            background: "#f7f9fc".to_owned(),
            text: "#1f2933".to_owned(),
        }
    }
}

/// The required `site` block.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
pub struct Site {
    pub name: String,
    pub slug: Option<String>,
    pub tagline: Option<String>,
    /// Relative local path (copied into the bundle) or an external
    /// `http://`/`https://`/`data:` reference (preserved verbatim).
    pub logo: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub accent_color: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
}

impl Site {
    pub fn palette(&self) -> Palette {
        let defaults = Palette::default();
        let pick = |value: &Option<String>, default: String| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_owned)
                .unwrap_or(default)
        };
        Palette {
            primary: pick(&self.primary_color, defaults.primary),
            secondary: pick(&self.secondary_color, defaults.secondary),
            accent: pick(&self.accent_color, defaults.accent),
            background: pick(&self.background_color, defaults.background),
            text: pick(&self.text_color, defaults.text),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
pub struct Seo {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
pub struct Footer {
    pub text: Option<String>,
    pub links: Vec<FooterLink>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
pub struct FooterLink {
    pub label: String,
    pub url: String,
}

/// One client's site description, loaded from a JSON file.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Directory containing the config file; relative asset paths and the
    /// default destination resolve against it.
    #[serde(skip)]
    pub root: PathBuf,
    /// Output root, relative to `root`.
    pub destination: PathBuf,
    /// Absolute output root override (e.g. from the CLI).
    #[serde(skip)]
    pub abs_dest: Option<PathBuf>,
    pub site: Site,
    pub seo: Seo,
    pub hero: Hero,
    pub about: Option<About>,
    pub services: Option<Services>,
    pub showcase: Option<Showcase>,
    pub testimonials: Option<Testimonials>,
    pub faq: Option<Faq>,
    pub cta: Option<CallToAction>,
    pub contact: Option<Contact>,
    pub footer: Footer,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: Default::default(),
            destination: "sites".into(),
            abs_dest: Default::default(),
            site: Default::default(),
            seo: Default::default(),
            hero: Default::default(),
            about: Default::default(),
            services: Default::default(),
            showcase: Default::default(),
            testimonials: Default::default(),
            faq: Default::default(),
            cta: Default::default(),
            contact: Default::default(),
            footer: Default::default(),
        }
    }
}

impl Config {
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Result<Config> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: PathBuf) -> Result<Config> {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| Error::config(format!("could not read {}: {e}", path.display())))?;

        let mut config: Config = serde_json::from_str(&content)
            .map_err(|e| Error::config(format!("could not parse {}: {e}", path.display())))?;

        let mut root = path;
        root.pop(); // Remove filename
        if root == Path::new("") {
            root = Path::new(".").to_owned();
        }
        config.root = root;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.site.name.trim().is_empty() {
            return Err(Error::config("`site.name` is required"));
        }
        Ok(())
    }

    /// Output directory name; explicit `site.slug` values are normalized the
    /// same way derived ones are, keeping the name filesystem-safe.
    pub fn slug(&self) -> String {
        let source = self
            .site
            .slug
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.site.name);
        slug::slugify(source)
    }

    /// `sites/<slug>/` under the destination root.
    pub fn output_dir(&self) -> PathBuf {
        let dest_root = self
            .abs_dest
            .clone()
            .unwrap_or_else(|| self.root.join(&self.destination));
        dest_root.join(self.slug())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_file_ok() {
        let result = Config::from_file("tests/fixtures/cafe/site.json").unwrap();
        assert_eq!(result.root, Path::new("tests/fixtures/cafe").to_path_buf());
        assert_eq!(result.site.name, "Café & Cia!");
    }

    #[test]
    fn test_from_file_not_found() {
        let result = Config::from_file("tests/fixtures/nope.json");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_from_file_invalid_syntax() {
        let result = Config::from_file("tests/fixtures/invalid/site.json");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_missing_name_rejected() {
        let result = Config::from_file("tests/fixtures/invalid/unnamed.json");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn slug_derived_from_name() {
        let config = Config {
            site: Site {
                name: "Café & Cia!".to_owned(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(config.slug(), "cafe-cia");
    }

    #[test]
    fn slug_explicit_wins() {
        let config = Config {
            site: Site {
                name: "Café & Cia!".to_owned(),
                slug: Some("cafezinho".to_owned()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(config.slug(), "cafezinho");
    }

    #[test]
    fn slug_explicit_is_normalized() {
        let config = Config {
            site: Site {
                name: "x".to_owned(),
                slug: Some("My Shop".to_owned()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(config.slug(), "my-shop");
    }

    #[test]
    fn output_dir_under_root() {
        let config = Config {
            root: "clients/cafe".into(),
            site: Site {
                name: "Café".to_owned(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(config.output_dir(), Path::new("clients/cafe/sites/cafe"));
    }

    #[test]
    fn output_dir_override() {
        let config = Config {
            root: "clients/cafe".into(),
            abs_dest: Some("/tmp/out".into()),
            site: Site {
                name: "Café".to_owned(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(config.output_dir(), Path::new("/tmp/out/cafe"));
    }

    #[test]
    fn display_round_trips_as_json() {
        let config = Config::from_file("tests/fixtures/cafe/site.json").unwrap();
        let parsed: Config = serde_json::from_str(&config.to_string()).unwrap();
        assert_eq!(parsed.site.name, config.site.name);
        assert_eq!(parsed.about, config.about);
    }

    #[test]
    fn palette_defaults_apply_per_field() {
        let site = Site {
            name: "x".to_owned(),
            primary_color: Some("#111111".to_owned()),
            text_color: Some("  ".to_owned()),
            ..Default::default()
        };
        let palette = site.palette();
        assert_eq!(palette.primary, "#111111");
        assert_eq!(palette.secondary, "#123a9a");
        assert_eq!(palette.text, "#1f2933");
    }
}
