use std::ops::RangeInclusive;
use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{PagerError, Result};
use crate::pager::render::Layout;

/// Prefix for environment overrides, e.g. `PAGERFC_PAGE_LINES=56`.
pub const ENV_PREFIX: &str = "PAGERFC";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Body lines per rendered page.
    pub page_lines: usize,
    /// Lowest break threshold drawn for a page.
    pub min_threshold: usize,
    /// Highest break threshold drawn for a page.
    pub max_threshold: usize,
    pub toc_column: usize,
    pub footer_column: usize,
    /// Fixes the threshold sequence so runs are reproducible.
    pub seed: Option<u64>,
    pub header_date: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let layout = Layout::default();
        Settings {
            page_lines: layout.page_lines,
            min_threshold: 56,
            max_threshold: 58,
            toc_column: layout.toc_column,
            footer_column: layout.footer_column,
            seed: None,
            header_date: layout.header_date,
        }
    }
}

impl Settings {
    /// Defaults, then the optional file, then `PAGERFC_*` environment variables.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(true));
        }
        let settings: Settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_threshold > self.max_threshold {
            return Err(PagerError::InvalidLayout(format!(
                "min_threshold {} is above max_threshold {}",
                self.min_threshold, self.max_threshold
            )));
        }
        if self.max_threshold > self.page_lines {
            return Err(PagerError::InvalidLayout(format!(
                "max_threshold {} exceeds page_lines {}",
                self.max_threshold, self.page_lines
            )));
        }
        if self.footer_column == 0 || self.toc_column == 0 {
            return Err(PagerError::InvalidLayout("columns must be positive".into()));
        }
        Ok(())
    }

    pub fn thresholds(&self) -> RangeInclusive<usize> {
        self.min_threshold..=self.max_threshold
    }

    pub fn layout(&self) -> Layout {
        Layout {
            page_lines: self.page_lines,
            toc_column: self.toc_column,
            footer_column: self.footer_column,
            header_date: self.header_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_rfc_geometry() {
        let s = Settings::default();
        assert_eq!(s.thresholds(), 56..=58);
        assert_eq!(s.layout(), Layout::default());
        assert!(s.validate().is_ok());
    }

    #[test]
    fn rejects_inverted_threshold_band() {
        let s = Settings {
            min_threshold: 59,
            max_threshold: 57,
            ..Settings::default()
        };
        assert!(matches!(s.validate(), Err(PagerError::InvalidLayout(_))));
    }

    #[test]
    fn rejects_threshold_beyond_page() {
        let s = Settings {
            max_threshold: 59,
            ..Settings::default()
        };
        let err = s.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid layout: max_threshold 59 exceeds page_lines 58"
        );
    }

    #[test]
    fn loads_from_file() {
        let path = std::env::temp_dir().join(format!("pagerfc-settings-{}.toml", std::process::id()));
        std::fs::write(&path, "seed = 42\nheader_date = true\nmin_threshold = 57\n").unwrap();
        let s = Settings::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(s.seed, Some(42));
        assert!(s.header_date);
        assert_eq!(s.thresholds(), 57..=58);
        assert_eq!(s.page_lines, 58);
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = Path::new("/nonexistent/pagerfc.toml");
        assert!(matches!(Settings::load(Some(path)), Err(PagerError::Config(_))));
    }
}
