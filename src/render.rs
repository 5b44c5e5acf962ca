//! Builds the Liquid render context from a resolved configuration.
//!
//! Every value handed to the template is either a trimmed scalar, an array,
//! a nested object, or `nil`. Absent optional fields are always `nil`
//! (never the empty string) so `{% if %}` guards behave: Liquid treats the
//! empty string as truthy.

use liquid::Object;
use liquid::model::Value;

use crate::config::Config;
use crate::html;
use crate::sections::{
    About, Button, CallToAction, Contact, Faq, Section, Services, Showcase, Testimonials,
};

pub(crate) fn globals(config: &Config, active: &[Section]) -> Object {
    let site = &config.site;
    let palette = site.palette();

    let title = populated(&config.seo.title).unwrap_or_else(|| site.name.trim().to_owned());
    let description = populated(&config.seo.description)
        .or_else(|| populated(&site.tagline))
        .unwrap_or_else(|| "Criação de sites profissionais.".to_owned());

    let mut globals = Object::new();
    globals.insert(
        "page".into(),
        obj(vec![
            ("title", Value::scalar(title)),
            ("description", Value::scalar(description)),
        ]),
    );
    globals.insert(
        "site".into(),
        obj(vec![
            ("name", scalar(&site.name)),
            ("logo", opt(&site.logo)),
        ]),
    );
    globals.insert(
        "theme".into(),
        obj(vec![
            ("primary", Value::scalar(palette.primary)),
            ("secondary", Value::scalar(palette.secondary)),
            ("accent", Value::scalar(palette.accent)),
            ("background", Value::scalar(palette.background)),
            ("text", Value::scalar(palette.text)),
        ]),
    );
    globals.insert("nav".into(), nav(active));
    globals.insert("hero".into(), hero(config));
    globals.insert("footer".into(), footer(config));

    for section in Section::ALL {
        let value = if active.contains(&section) {
            section_context(section, config)
        } else {
            Value::Nil
        };
        globals.insert(section.key().into(), value);
    }

    globals
}

fn section_context(section: Section, config: &Config) -> Value {
    match section {
        Section::About => config.about.as_ref().map(about).unwrap_or(Value::Nil),
        Section::Services => config.services.as_ref().map(services).unwrap_or(Value::Nil),
        Section::Showcase => config
            .showcase
            .as_ref()
            .map(|s| showcase(s, &config.site.name))
            .unwrap_or(Value::Nil),
        Section::Testimonials => config
            .testimonials
            .as_ref()
            .map(testimonials)
            .unwrap_or(Value::Nil),
        Section::Faq => config.faq.as_ref().map(faq).unwrap_or(Value::Nil),
        Section::Cta => config.cta.as_ref().map(cta).unwrap_or(Value::Nil),
        Section::Contact => config.contact.as_ref().map(contact).unwrap_or(Value::Nil),
    }
}

fn nav(active: &[Section]) -> Value {
    let mut entries = vec![obj(vec![
        ("id", Value::scalar("inicio")),
        ("label", Value::scalar("Início")),
    ])];
    entries.extend(active.iter().map(|section| {
        obj(vec![
            ("id", Value::scalar(section.id())),
            ("label", Value::scalar(section.label())),
        ])
    }));
    Value::Array(entries)
}

fn hero(config: &Config) -> Value {
    let hero = &config.hero;
    let site = &config.site;
    let headline = populated(&hero.headline)
        .or_else(|| populated(&site.tagline))
        .unwrap_or_else(|| site.name.trim().to_owned());

    let mut buttons = Vec::new();
    if let Some(value) = button(hero.primary_cta.as_ref(), "primary") {
        buttons.push(value);
    }
    if let Some(value) = button(hero.secondary_cta.as_ref(), "secondary") {
        buttons.push(value);
    }

    obj(vec![
        ("headline", Value::scalar(headline)),
        ("subheadline", opt(&hero.subheadline)),
        ("image", opt(&hero.image)),
        ("bullets", text_list(&hero.bullet_points)),
        ("buttons", list(buttons)),
    ])
}

fn button(button: Option<&Button>, class: &'static str) -> Option<Value> {
    let button = button.filter(|b| b.is_complete())?;
    Some(obj(vec![
        ("text", scalar(&button.text)),
        ("link", scalar(&button.link)),
        ("class", Value::scalar(class)),
    ]))
}

fn about(about: &About) -> Value {
    obj(vec![
        ("title", default_title(&about.title, "Sobre")),
        (
            "body",
            str_or_nil(html::paragraphs(about.text.as_deref().unwrap_or(""))),
        ),
        ("highlights", text_list(&about.highlights)),
    ])
}

fn services(services: &Services) -> Value {
    let items = services
        .items
        .iter()
        .filter(|i| i.is_populated())
        .map(|i| {
            obj(vec![
                ("name", scalar(&i.name)),
                ("description", scalar(&i.description)),
                ("icon", opt(&i.icon)),
            ])
        })
        .collect();
    obj(vec![
        ("title", default_title(&services.title, "Serviços")),
        ("description", opt(&services.description)),
        ("items", list(items)),
    ])
}

fn showcase(showcase: &Showcase, site_name: &str) -> Value {
    let items = showcase
        .items
        .iter()
        .filter(|i| i.is_populated())
        .map(|i| {
            let alt = populated(&i.alt)
                .or_else(|| populated(&i.caption))
                .unwrap_or_else(|| site_name.trim().to_owned());
            obj(vec![
                ("image", opt(&i.image)),
                ("caption", opt(&i.caption)),
                ("alt", Value::scalar(alt)),
            ])
        })
        .collect();
    obj(vec![
        ("title", default_title(&showcase.title, "Portfólio")),
        ("description", opt(&showcase.description)),
        ("items", list(items)),
    ])
}

fn testimonials(testimonials: &Testimonials) -> Value {
    let items = testimonials
        .items
        .iter()
        .filter(|i| i.is_populated())
        .map(|i| {
            obj(vec![
                ("quote", scalar(&i.quote)),
                ("name", scalar(&i.name)),
                ("role", opt(&i.role)),
            ])
        })
        .collect();
    obj(vec![
        (
            "title",
            default_title(&testimonials.title, "Clientes satisfeitos"),
        ),
        ("items", list(items)),
    ])
}

fn faq(faq: &Faq) -> Value {
    let items = faq
        .items
        .iter()
        .filter(|i| i.is_populated())
        .map(|i| {
            obj(vec![
                ("question", scalar(&i.question)),
                ("answer", str_or_nil(html::paragraphs(&i.answer))),
            ])
        })
        .collect();
    obj(vec![
        ("title", default_title(&faq.title, "Perguntas Frequentes")),
        ("items", list(items)),
    ])
}

fn cta(cta: &CallToAction) -> Value {
    obj(vec![
        (
            "headline",
            default_title(&cta.headline, "Pronto para começar?"),
        ),
        (
            "subheadline",
            default_title(&cta.subheadline, "Vamos conversar sobre seu projeto."),
        ),
        (
            "button",
            button(cta.button.as_ref(), "accent").unwrap_or(Value::Nil),
        ),
    ])
}

fn contact(contact: &Contact) -> Value {
    let social = contact
        .social
        .iter()
        .filter(|s| s.is_populated())
        .map(|s| {
            obj(vec![
                ("platform", scalar(&s.platform)),
                ("url", scalar(&s.url)),
            ])
        })
        .collect();
    obj(vec![
        ("title", default_title(&contact.title, "Fale Conosco")),
        ("description", opt(&contact.description)),
        ("phone", opt(&contact.phone)),
        ("whatsapp", opt(&contact.whatsapp)),
        ("email", opt(&contact.email)),
        ("address", opt(&contact.address)),
        ("maps_link", opt(&contact.maps_link)),
        ("hours", text_list(&contact.hours)),
        ("social", list(social)),
    ])
}

fn footer(config: &Config) -> Value {
    let footer = &config.footer;
    let text = populated(&footer.text).unwrap_or_else(|| {
        format!(
            "© {}. Todos os direitos reservados.",
            config.site.name.trim()
        )
    });
    let links = footer
        .links
        .iter()
        .filter(|l| !l.label.trim().is_empty() && !l.url.trim().is_empty())
        .map(|l| obj(vec![("label", scalar(&l.label)), ("url", scalar(&l.url))]))
        .collect();
    obj(vec![
        ("text", Value::scalar(text)),
        ("links", list(links)),
    ])
}

fn obj(pairs: Vec<(&'static str, Value)>) -> Value {
    let mut object = Object::new();
    for (key, value) in pairs {
        object.insert(key.into(), value);
    }
    Value::Object(object)
}

fn populated(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

fn scalar(text: &str) -> Value {
    Value::scalar(text.trim().to_owned())
}

fn opt(value: &Option<String>) -> Value {
    populated(value).map(Value::scalar).unwrap_or(Value::Nil)
}

fn default_title(value: &Option<String>, default: &'static str) -> Value {
    Value::scalar(populated(value).unwrap_or_else(|| default.to_owned()))
}

fn str_or_nil(text: String) -> Value {
    if text.is_empty() {
        Value::Nil
    } else {
        Value::scalar(text)
    }
}

fn text_list(items: &[String]) -> Value {
    let values: Vec<Value> = items
        .iter()
        .map(|i| i.trim())
        .filter(|i| !i.is_empty())
        .map(|i| Value::scalar(i.to_owned()))
        .collect();
    list(values)
}

fn list(values: Vec<Value>) -> Value {
    if values.is_empty() {
        Value::Nil
    } else {
        Value::Array(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections;

    fn config(json: &str) -> Config {
        serde_json::from_str(json).unwrap()
    }

    fn rendered(cfg: &Config) -> Object {
        let active = sections::active_sections(cfg);
        globals(cfg, &active)
    }

    fn inner(globals: &Object, key: &str) -> Object {
        match globals.get(key) {
            Some(Value::Object(object)) => object.clone(),
            other => panic!("`{key}` must be an object, got {other:?}"),
        }
    }

    fn field<'o>(object: &'o Object, key: &str) -> &'o Value {
        object.get(key).unwrap_or_else(|| panic!("missing `{key}`"))
    }

    #[test]
    fn inactive_sections_are_nil() {
        let cfg = config(r#"{"site": {"name": "x"}, "about": {}}"#);
        let globals = rendered(&cfg);
        assert_eq!(globals.get("about"), Some(&Value::Nil));
        assert_eq!(globals.get("contact"), Some(&Value::Nil));
    }

    #[test]
    fn nav_starts_at_home_and_follows_canonical_order() {
        let cfg = config(
            r#"{
                "site": {"name": "x"},
                "contact": {"phone": "1"},
                "about": {"text": "y"}
            }"#,
        );
        let globals = rendered(&cfg);
        let Some(Value::Array(entries)) = globals.get("nav") else {
            panic!("nav must be an array")
        };
        let ids: Vec<&Value> = entries
            .iter()
            .map(|e| match e {
                Value::Object(entry) => field(entry, "id"),
                other => panic!("nav entries must be objects, got {other:?}"),
            })
            .collect();
        assert_eq!(
            ids,
            vec![
                &Value::scalar("inicio"),
                &Value::scalar("sobre"),
                &Value::scalar("contato")
            ]
        );
    }

    #[test]
    fn hero_headline_falls_back_to_name() {
        let cfg = config(r#"{"site": {"name": "Padaria"}}"#);
        let hero = inner(&rendered(&cfg), "hero");
        assert_eq!(field(&hero, "headline"), &Value::scalar("Padaria"));
    }

    #[test]
    fn hero_headline_prefers_tagline_over_name() {
        let cfg = config(r#"{"site": {"name": "Padaria", "tagline": "Pão quente"}}"#);
        let hero = inner(&rendered(&cfg), "hero");
        assert_eq!(field(&hero, "headline"), &Value::scalar("Pão quente"));
    }

    #[test]
    fn incomplete_cta_button_is_nil() {
        let cfg = config(r#"{"site": {"name": "x"}, "cta": {"button": {"text": "Go"}}}"#);
        let cta = inner(&rendered(&cfg), "cta");
        assert_eq!(field(&cta, "button"), &Value::Nil);
    }

    #[test]
    fn blank_optional_strings_become_nil() {
        let cfg = config(r#"{"site": {"name": "x"}, "contact": {"phone": "1", "email": " "}}"#);
        let contact = inner(&rendered(&cfg), "contact");
        assert_eq!(field(&contact, "email"), &Value::Nil);
        assert_eq!(field(&contact, "phone"), &Value::scalar("1"));
    }

    #[test]
    fn empty_lists_become_nil() {
        let cfg = config(r#"{"site": {"name": "x"}, "services": {"title": "t", "items": []}}"#);
        let services = inner(&rendered(&cfg), "services");
        assert_eq!(field(&services, "items"), &Value::Nil);
    }

    #[test]
    fn footer_defaults_to_copyright_line() {
        let cfg = config(r#"{"site": {"name": "Padaria"}}"#);
        let footer = inner(&rendered(&cfg), "footer");
        assert_eq!(
            field(&footer, "text"),
            &Value::scalar("© Padaria. Todos os direitos reservados.")
        );
    }
}
