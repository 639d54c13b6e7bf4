use std::io::ErrorKind;
use std::path::PathBuf;
use std::{fs, io};

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use spdlog::debug;

use crate::date_format::{DateFormat, DateSeparator};

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Site {
    pub website: String,
    pub title: String,
    pub author: String,
    pub description: String,
    pub language: String,
}

impl Default for Site {
    fn default() -> Self {
        Site {
            website: "https://james-esg.com".to_string(),
            title: "James Esguerra".to_string(),
            author: "James Esguerra".to_string(),
            description: "Software engineer building scalable and maintainable solutions. \
                          Focused on continuous learning and practical problem-solving. \
                          Enjoys hands-on technology projects in a homelab."
                .to_string(),
            language: "en-US".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct General {
    pub content_width: String,
    pub centered_layout: bool,
    pub theme_toggle: bool,
    pub post_list_dotted_divider: bool,
    pub footer: bool,
    pub fade_animation: bool,
}

impl Default for General {
    fn default() -> Self {
        General {
            content_width: "35rem".to_string(),
            centered_layout: true,
            theme_toggle: true,
            post_list_dotted_divider: false,
            footer: false,
            fade_animation: true,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DateStyle {
    pub date_format: DateFormat,
    pub date_separator: DateSeparator,
    pub date_on_right: bool,
}

impl Default for DateStyle {
    fn default() -> Self {
        DateStyle {
            date_format: DateFormat::MonthDayYear,
            date_separator: DateSeparator::Dot,
            date_on_right: true,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Post {
    pub reading_time: bool,
    pub toc: bool,
    pub image_viewer: bool,
    pub copy_code: bool,
    pub link_card: bool,
}

impl Default for Post {
    fn default() -> Self {
        Post {
            reading_time: true,
            toc: true,
            image_viewer: true,
            copy_code: true,
            link_card: true,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Site-wide theme settings.
///
/// Every section falls back to the values shipped with the theme, so a
/// site only needs to declare the fields it wants to change. The record
/// is built once at startup and stays read-only afterwards.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ThemeConfig {
    pub site: Site,
    pub general: General,
    pub date: DateStyle,
    pub post: Post,
    pub log: Option<Log>,
}

lazy_static! {
    static ref CSS_LENGTH_REGEX: Regex = Regex::new(
        r"^\d+(\.\d+)?(px|rem|em|ch|vw|vh|%)$"
    ).unwrap();
}

fn require_non_empty(value: &str, field: &str) -> io::Result<()> {
    if value.trim().is_empty() {
        return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Configuration field {} cannot be empty", field)));
    }
    Ok(())
}

pub fn validate(cfg: &ThemeConfig) -> io::Result<()> {
    require_non_empty(&cfg.site.title, "site.title")?;
    require_non_empty(&cfg.site.author, "site.author")?;
    require_non_empty(&cfg.site.language, "site.language")?;

    if !cfg.site.website.starts_with("https://") && !cfg.site.website.starts_with("http://") {
        return Err(io::Error::new(
            ErrorKind::InvalidData,
            format!("site.website must be an absolute URL: {}", cfg.site.website)));
    }

    if !CSS_LENGTH_REGEX.is_match(&cfg.general.content_width) {
        return Err(io::Error::new(
            ErrorKind::InvalidData,
            format!("general.content_width is not a CSS length: {}", cfg.general.content_width)));
    }

    Ok(())
}

pub fn read_config(cfg_path: &PathBuf) -> io::Result<ThemeConfig> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening theme configuration {}: {}", cfg_path.display(), e))),
    };

    let cfg: ThemeConfig = match toml::from_str::<ThemeConfig>(cfg_content.as_str()) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing theme configuration: {}", e))),
    };

    validate(&cfg)?;
    debug!("Theme configuration read from {}", cfg_path.display());

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use crate::test_data::{FULL_CONFIG_DATA, PARTIAL_CONFIG_DATA};

    use super::*;

    #[test]
    fn test_read_full_config() {
        let cfg: ThemeConfig = toml::from_str(FULL_CONFIG_DATA).unwrap();

        assert_eq!(cfg.site.website, "https://blog.example.org");
        assert_eq!(cfg.site.title, "Example Blog");
        assert_eq!(cfg.site.author, "Jo Example");
        assert_eq!(cfg.site.language, "en-GB");
        assert_eq!(cfg.general.content_width, "42rem");
        assert!(!cfg.general.centered_layout);
        assert!(cfg.general.post_list_dotted_divider);
        assert_eq!(cfg.date.date_format, DateFormat::DayMonthYear);
        assert_eq!(cfg.date.date_separator, DateSeparator::Slash);
        assert!(!cfg.date.date_on_right);
        assert!(!cfg.post.reading_time);
        assert!(cfg.post.copy_code);

        let log = cfg.log.unwrap();
        assert_eq!(log.level, LogLevel::Info);
        assert!(log.log_to_console);
        assert_eq!(log.location, None);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let cfg: ThemeConfig = toml::from_str(PARTIAL_CONFIG_DATA).unwrap();

        assert_eq!(cfg.site.title, "Example Blog");
        // Everything not declared in the file keeps the shipped value
        assert_eq!(cfg.site.website, "https://james-esg.com");
        assert_eq!(cfg.site.language, "en-US");
        assert_eq!(cfg.general, General::default());
        assert_eq!(cfg.date, DateStyle::default());
        assert_eq!(cfg.post, Post::default());
        assert_eq!(cfg.log, None);
    }

    #[test]
    fn test_default_values() {
        let cfg = ThemeConfig::default();

        assert_eq!(cfg.site.website, "https://james-esg.com");
        assert_eq!(cfg.site.title, "James Esguerra");
        assert_eq!(cfg.site.author, "James Esguerra");
        assert_eq!(cfg.site.language, "en-US");
        assert_eq!(cfg.general.content_width, "35rem");
        assert!(cfg.general.centered_layout);
        assert!(cfg.general.theme_toggle);
        assert!(!cfg.general.post_list_dotted_divider);
        assert!(!cfg.general.footer);
        assert!(cfg.general.fade_animation);
        assert_eq!(cfg.date.date_format, DateFormat::MonthDayYear);
        assert_eq!(cfg.date.date_separator, DateSeparator::Dot);
        assert!(cfg.date.date_on_right);
        assert!(cfg.post.reading_time);
        assert!(cfg.post.toc);
        assert!(cfg.post.image_viewer);
        assert!(cfg.post.copy_code);
        assert!(cfg.post.link_card);
        assert!(validate(&cfg).is_ok());
    }

    #[test]
    fn test_invalid_date_format_is_rejected() {
        let res = toml::from_str::<ThemeConfig>(r#"
[date]
date_format = "YYYYMMDD"
"#);
        assert!(res.is_err());

        let res = toml::from_str::<ThemeConfig>(r#"
[date]
date_separator = ","
"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_validate_rejects_empty_strings() {
        let mut cfg = ThemeConfig::default();
        cfg.site.title = "".to_string();
        assert!(validate(&cfg).is_err());

        let mut cfg = ThemeConfig::default();
        cfg.site.author = "  ".to_string();
        assert!(validate(&cfg).is_err());
    }

    #[test]
    fn test_validate_rejects_relative_website() {
        let mut cfg = ThemeConfig::default();
        cfg.site.website = "/about".to_string();
        assert!(validate(&cfg).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_content_width() {
        let mut cfg = ThemeConfig::default();
        cfg.general.content_width = "wide".to_string();
        assert!(validate(&cfg).is_err());

        let mut cfg = ThemeConfig::default();
        cfg.general.content_width = "36.5rem".to_string();
        assert!(validate(&cfg).is_ok());
    }

    #[test]
    fn test_general_toggles_are_independent() {
        let left: ThemeConfig = toml::from_str(r#"
[general]
centered_layout = false
"#).unwrap();
        let right: ThemeConfig = toml::from_str(r#"
[general]
footer = true
"#).unwrap();

        assert!(!left.general.centered_layout);
        assert!(!left.general.footer);
        assert!(right.general.centered_layout);
        assert!(right.general.footer);
        assert_eq!(left.site, right.site);
        assert_eq!(left.date, right.date);
        assert_eq!(left.post, right.post);
        assert_eq!(left.general.content_width, right.general.content_width);
    }
}
