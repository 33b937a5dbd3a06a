use crate::ports::PlatformEnvironment;

/// Environment whose answers are fixed at construction.
#[derive(Debug, Clone)]
pub struct StaticEnvironment {
    prefers_dark: bool,
    url: String,
}

impl StaticEnvironment {
    pub fn new(prefers_dark: bool, url: impl Into<String>) -> Self {
        Self {
            prefers_dark,
            url: url.into(),
        }
    }
}

impl Default for StaticEnvironment {
    fn default() -> Self {
        Self::new(false, "http://localhost/")
    }
}

impl PlatformEnvironment for StaticEnvironment {
    fn prefers_dark_scheme(&self) -> bool {
        self.prefers_dark
    }

    fn current_url(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_configured_values() {
        let env = StaticEnvironment::new(true, "https://decisions.example/final");
        assert!(env.prefers_dark_scheme());
        assert_eq!(env.current_url(), "https://decisions.example/final");
    }

    #[test]
    fn default_is_light() {
        assert!(!StaticEnvironment::default().prefers_dark_scheme());
    }
}
