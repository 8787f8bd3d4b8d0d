use crate::error::{AppError, Result};

use super::AppConfig;

/// Validate the app config and surface every problem at once.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    let mut issues = Vec::new();

    validate_namespace(&config.image_namespace, &mut issues);
    validate_catalog_file(config, &mut issues);
    validate_tick_rate(config.tick_rate_ms, &mut issues);

    if issues.is_empty() {
        Ok(())
    } else {
        Err(AppError::message(format!(
            "app config invalid:\n  - {}",
            issues.join("\n  - ")
        )))
    }
}

fn validate_namespace(namespace: &str, issues: &mut Vec<String>) {
    if namespace.trim().is_empty() {
        issues.push("image_namespace must not be empty".to_string());
    } else if namespace.contains(['/', '\\']) || namespace == ".." {
        issues.push(format!(
            "image_namespace `{namespace}` must be a single directory name"
        ));
    }
}

fn validate_catalog_file(config: &AppConfig, issues: &mut Vec<String>) {
    if config.catalog_file.as_os_str().is_empty() {
        issues.push("catalog_file must not be empty".to_string());
    }
}

fn validate_tick_rate(tick_rate_ms: u64, issues: &mut Vec<String>) {
    if tick_rate_ms == 0 {
        issues.push("tick_rate_ms must be greater than zero".to_string());
    }
}
