/// Language and region subtags of a POSIX or BCP 47 locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub language: String,
    pub region: Option<String>,
}

const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

impl Locale {
    pub fn new(language: &str, region: Option<&str>) -> Self {
        Self {
            language: language.to_string(),
            region: region.map(str::to_string),
        }
    }

    /// Parses `fr_FR.UTF-8`, `fr-FR`, `fr_FR@euro` or `fr`.
    ///
    /// Returns `None` for `C`, `POSIX` and empty values.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.split(['.', '@']).next().unwrap_or_default().trim();

        if value.is_empty() || value == "C" || value == "POSIX" {
            return None;
        }

        let mut parts = value.splitn(2, ['_', '-']);
        let language = parts.next().filter(|language| !language.is_empty())?;
        let region = parts.next().filter(|region| !region.is_empty());

        Some(Self::new(&language.to_ascii_lowercase(), region))
    }

    /// Locale of the current process, falling back to `en-US`.
    pub fn system() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        LOCALE_ENV_VARS
            .iter()
            .filter_map(|name| lookup(*name))
            .find_map(|value| Locale::parse(&value))
            .unwrap_or_else(|| Locale::new("en", Some("US")))
    }
}
