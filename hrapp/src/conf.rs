pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Client configuration, provided as context at the application root.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(option_env!("HRAPP_API_BASE"))
    }
}

impl Config {
    pub fn new(api_base: Option<&str>) -> Self {
        let api_base = match api_base.map(str::trim) {
            Some(s) if !s.is_empty() => s.trim_end_matches('/'),
            _ => DEFAULT_API_BASE,
        };
        Self { api_base: api_base.to_string() }
    }

    /// The absolute base address; a base starting with `/` is taken to be
    /// relative to `origin`.
    pub fn resolve(&self, origin: Option<&str>) -> String {
        match origin {
            Some(origin) if self.api_base.starts_with('/') => format!(
                "{}{}",
                origin.trim_end_matches('/'),
                self.api_base,
            ),
            _ => self.api_base.clone(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn smoke() {
        assert_eq!(Config::new(None).api_base, DEFAULT_API_BASE);
        assert_eq!(Config::new(Some("  ")).api_base, DEFAULT_API_BASE);
        assert_eq!(
            Config::new(Some("https://hr.example.com/api/")).api_base,
            "https://hr.example.com/api",
        );
    }

    #[test]
    fn resolve() {
        let config = Config::new(Some("/api"));
        assert_eq!(config.resolve(Some("https://hr.example.com")), "https://hr.example.com/api");
        assert_eq!(config.resolve(None), "/api");
        let config = Config::new(Some("http://localhost:8000/api"));
        assert_eq!(config.resolve(Some("https://hr.example.com")), "http://localhost:8000/api");
    }
}
