//! Per-view settings loaded from YAML.
//!
//! ```yaml
//! products:
//!   page_size: 10
//!   title: Catalog
//! leads:
//!   export_filename: leads-export.csv
//! ```
//!
//! Every key is optional; a missing view or key keeps the built-in default.

use std::fs;
use std::path::Path;

use listpane_seeker::PageSize;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::view::ViewSchema;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub products: ViewConfig,
    pub leads: ViewConfig,
}

/// Overrides for one view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    pub page_size: Option<usize>,
    pub export_filename: Option<String>,
    pub title: Option<String>,
}

impl Config {
    pub fn from_yaml(yaml: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&text, path)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

impl ViewConfig {
    /// Applies the overrides to `schema`. `view` names the view in errors.
    pub fn apply<T>(&self, view: &str, mut schema: ViewSchema<T>) -> Result<ViewSchema<T>, ConfigError> {
        if let Some(size) = self.page_size {
            let size = PageSize::new(size).map_err(|_| ConfigError::InvalidPageSize {
                view: view.to_string(),
            })?;
            schema = schema.with_page_size(size);
        }
        if let Some(filename) = &self.export_filename {
            schema = schema.with_export_filename(filename.as_str());
        }
        if let Some(title) = &self.title {
            schema = schema.with_title(title.as_str());
        }
        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::product_schema;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_yaml_is_default() {
        let config = Config::from_yaml("{}", Path::new("inline")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn overrides_apply() {
        let config = Config::from_yaml(
            "products:\n  page_size: 10\n  title: Catalog\n",
            Path::new("inline"),
        )
        .unwrap();

        let schema = config
            .products
            .apply("products", product_schema().unwrap())
            .unwrap();
        assert_eq!(schema.page_size().get(), 10);
        assert_eq!(schema.title(), "Catalog");
        assert_eq!(schema.export_filename(), "products.csv");
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let config = ViewConfig {
            page_size: Some(0),
            ..ViewConfig::default()
        };
        let err = config.apply("leads", product_schema().unwrap()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPageSize { .. }));
    }

    #[test]
    fn unknown_keys_are_errors() {
        let err = Config::from_yaml("products:\n  colour: red\n", Path::new("inline")).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
    }

    #[test]
    fn loads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "leads:\n  export_filename: roster.csv").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.leads.export_filename.as_deref(), Some("roster.csv"));
    }
}
