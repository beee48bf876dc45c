//! The two datasets shipped with listpane, and JSON loading for custom ones.

mod lead;
mod product;

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::ConfigError;

pub use lead::{sample_leads, schema as lead_schema, Lead};
pub use product::{sample_products, schema as product_schema, Product, CATEGORIES};

/// Reads a JSON array of rows from `path`.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows: Vec<T> = serde_json::from_str(&text).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_products_from_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "name": "Lamp", "category": "Home", "price": 12.5, "stock": 3, "sales": 9}}]"#
        )
        .unwrap();

        let rows: Vec<Product> = load_json(file.path()).unwrap();
        assert_eq!(rows, vec![Product::new(1, "Lamp", "Home", 12.5, 3, 9)]);
    }

    #[test]
    fn reports_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_json::<Lead>(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
    }

    #[test]
    fn reports_missing_file() {
        let err = load_json::<Lead>(Path::new("/nonexistent/leads.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
