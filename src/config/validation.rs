use crate::config::types::{Config, CrawlerConfig, OutputConfig, SelectorConfig, SiteConfig, UserAgentConfig};
use crate::{ConfigError, ConfigResult};
use scraper::Selector;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_site_config(&config.site)?;
    validate_selector_config(&config.selectors)?;
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the site location
fn validate_site_config(config: &SiteConfig) -> ConfigResult<()> {
    let base = config.base_url()?;

    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base_url must use http or https, got '{}'",
            base.scheme()
        )));
    }

    if config.index_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "index_path cannot be empty".to_string(),
        ));
    }

    base.join(&config.index_path)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid index_path: {}", e)))?;

    config.excluded_urls()?;

    Ok(())
}

/// Validates that every selector parses
fn validate_selector_config(config: &SelectorConfig) -> ConfigResult<()> {
    for (name, selector) in [
        ("brand", &config.brand),
        ("model", &config.model),
        ("version", &config.version),
        ("motor", &config.motor),
        ("anchor", &config.anchor),
        ("breadcrumb_label", &config.breadcrumb_label),
        ("detail_cell", &config.detail_cell),
    ] {
        check_selector(name, selector)?;
    }

    if config.breadcrumb_id.is_empty() {
        return Err(ConfigError::Validation(
            "breadcrumb_id cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Parses a selector, reporting which one failed
pub(crate) fn check_selector(name: &'static str, selector: &str) -> ConfigResult<Selector> {
    Selector::parse(selector).map_err(|_| ConfigError::InvalidSelector {
        name,
        selector: selector.to_string(),
    })
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> ConfigResult<()> {
    // request_delay of 0 is allowed; only tests use it

    if config.timeout < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout must be >= 1s, got {}s",
            config.timeout
        )));
    }

    if config.connect_timeout < 1 || config.connect_timeout > config.timeout {
        return Err(ConfigError::Validation(format!(
            "connect_timeout must be between 1s and timeout ({}s), got {}s",
            config.timeout, config.connect_timeout
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> ConfigResult<()> {
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    if config.crawler_version.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_version cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> ConfigResult<()> {
    if config.directory.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }

    Ok(())
}
