use std::sync::LazyLock;

static SLUG_INVALID_CHARS: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"([^a-zA-Z0-9]+)").unwrap());

/// Create a filesystem- and URL-safe identifier from a business name.
///
/// Used verbatim as the per-client output directory name.
pub fn slugify<S: AsRef<str>>(name: S) -> String {
    slugify_str(name.as_ref())
}

fn slugify_str(name: &str) -> String {
    let name = deunicode::deunicode_with_tofu(name, "-");
    let slug = SLUG_INVALID_CHARS.replace_all(&name, "-");
    let slug = slug.trim_matches('-').to_lowercase();
    if slug.is_empty() {
        "site".to_owned()
    } else {
        slug
    }
}

#[cfg(test)]
mod test_slug {
    use super::*;

    #[test]
    fn test_slugify() {
        let actual = slugify("___Padaria-do-Zé-__09___");
        assert_eq!(actual, "padaria-do-ze-09");
    }

    #[test]
    fn test_slugify_unicode() {
        let actual = slugify("Café & Cia!");
        assert_eq!(actual, "cafe-cia");
    }

    #[test]
    fn test_slugify_collapses_runs() {
        let actual = slugify("a  -  b");
        assert_eq!(actual, "a-b");
    }

    #[test]
    fn test_slugify_empty_falls_back() {
        assert_eq!(slugify(""), "site");
        assert_eq!(slugify("!!!"), "site");
    }
}
