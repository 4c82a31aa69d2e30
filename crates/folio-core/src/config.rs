use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub modal: ModalConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (preferences and logs live here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Optional project catalog file (JSON or TOML). Built-in catalog when unset.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// Number of projects shown on the home page
    #[serde(default = "default_home_limit")]
    pub home_limit: usize,
    /// Height of the fixed header subtracted from section offsets
    #[serde(default = "default_header_offset")]
    pub header_offset: f64,
    /// Scroll offset past which the scroll-to-top button shows
    #[serde(default = "default_scroll_top_threshold")]
    pub scroll_top_threshold: f64,
    /// Parallax speed factor applied to the hero frame
    #[serde(default = "default_parallax_speed")]
    pub parallax_speed: f64,
    /// Delay between successive card entrance animations
    #[serde(default = "default_stagger_step_ms")]
    pub stagger_step_ms: u64,
    /// Share of an element that must be on screen before it reveals
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f64,
    /// Band at the bottom of the viewport that doesn't count as visible
    #[serde(default = "default_reveal_bottom_margin")]
    pub reveal_bottom_margin: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            home_limit: default_home_limit(),
            header_offset: default_header_offset(),
            scroll_top_threshold: default_scroll_top_threshold(),
            parallax_speed: default_parallax_speed(),
            stagger_step_ms: default_stagger_step_ms(),
            reveal_threshold: default_reveal_threshold(),
            reveal_bottom_margin: default_reveal_bottom_margin(),
        }
    }
}

/// Easing curve used by scroll animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Jump at the end of the animation
    None,
    Linear,
    /// Cubic ease-out
    Cubic,
    /// Quintic ease-out
    Quintic,
    /// Exponential ease-out
    EaseOut,
    /// Symmetric cubic ease-in-out
    #[default]
    InOutCubic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate in-page navigation instead of jumping
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Animation duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Easing curve
    #[serde(default)]
    pub easing: EasingType,
    /// Land exactly on the target when an animation retires
    #[serde(default = "default_true")]
    pub clamp_to_target: bool,
    /// Frame rate the TUI drives animations at
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Rows the TUI free-scrolls per Ctrl+E / Ctrl+Y press
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            clamp_to_target: default_true(),
            animation_fps: default_animation_fps(),
            scroll_lines: default_scroll_lines(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModalConfig {
    /// Replace an open overlay instead of stacking a second one
    #[serde(default = "default_true")]
    pub single_instance: bool,
    /// Delay before the overlay starts fading in
    #[serde(default = "default_fade_in_delay")]
    pub fade_in_delay_ms: u64,
    /// Fade-in duration
    #[serde(default = "default_fade_duration")]
    pub fade_duration_ms: u64,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            single_instance: default_true(),
            fade_in_delay_ms: default_fade_in_delay(),
            fade_duration_ms: default_fade_duration(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Simulated submission latency
    #[serde(default = "default_submit_delay")]
    pub submit_delay_ms: u64,
    /// How long a notification stays on screen
    #[serde(default = "default_notification_ms")]
    pub notification_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay(),
            notification_ms: default_notification_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Palette configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Palette configuration
/// Can be specified as a simple string (palette name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Palette family (e.g., "violet", "ocean")
    pub name: String,
    /// Optional color overrides for semantic colors
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Accept either a bare palette name or a table with `name` and `colors`
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(
                    "a string (palette name) or a map with 'name' and optional 'colors'",
                )
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => {
                            name = Some(map.next_value()?);
                        }
                        "colors" => {
                            colors = Some(map.next_value()?);
                        }
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

fn default_theme_name() -> String {
    "violet".to_string()
}

/// Optional color overrides, each a hex string (e.g., "#8b5cf6" or "8b5cf6")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Page background
    pub bg: Option<String>,
    /// Card background
    pub card: Option<String>,
    /// Primary text
    pub text: Option<String>,
    /// Muted text
    pub muted: Option<String>,
    /// Accent color
    pub accent: Option<String>,
    /// Border color
    pub border: Option<String>,
    /// Disabled action color
    pub disabled: Option<String>,
    /// Success color
    pub success: Option<String>,
    /// Error color
    pub error: Option<String>,
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_home_limit() -> usize {
    6
}

fn default_header_offset() -> f64 {
    80.0
}

fn default_scroll_top_threshold() -> f64 {
    300.0
}

fn default_parallax_speed() -> f64 {
    0.5
}

fn default_stagger_step_ms() -> u64 {
    100
}

fn default_reveal_threshold() -> f64 {
    crate::scroll::reveal::DEFAULT_THRESHOLD
}

fn default_reveal_bottom_margin() -> f64 {
    crate::scroll::reveal::DEFAULT_BOTTOM_MARGIN
}

fn default_animation_duration() -> u64 {
    800
}

fn default_animation_fps() -> u32 {
    60
}

fn default_scroll_lines() -> u16 {
    3
}

fn default_fade_in_delay() -> u64 {
    10
}

fn default_fade_duration() -> u64 {
    300
}

fn default_submit_delay() -> u64 {
    2000
}

fn default_notification_ms() -> u64 {
    5000
}

fn default_tick_rate() -> u64 {
    100
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, falling back to defaults when absent
    pub fn load_from(config_path: &std::path::Path) -> crate::Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Always uses ~/.config/folio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
            .join("config.toml")
    }

    /// Get the preference store file path
    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir().join("preferences.json")
    }

    /// Get the TUI log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("folio.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the catalog path (with tilde expansion), if one is configured
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.site.catalog_path.as_deref().map(expand_tilde)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.site.home_limit, 6);
        assert_eq!(config.site.header_offset, 80.0);
        assert_eq!(config.site.reveal_threshold, 0.1);
        assert_eq!(config.site.reveal_bottom_margin, 50.0);
        assert_eq!(config.scroll.animation_duration_ms, 800);
        assert_eq!(config.scroll.easing, EasingType::InOutCubic);
        assert!(config.scroll.clamp_to_target);
        assert!(config.modal.single_instance);
        assert_eq!(config.contact.submit_delay_ms, 2000);
        assert_eq!(config.contact.notification_ms, 5000);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [scroll]
            easing = "linear"
            clamp_to_target = false

            [site]
            home_limit = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.scroll.easing, EasingType::Linear);
        assert!(!config.scroll.clamp_to_target);
        assert_eq!(config.scroll.animation_duration_ms, 800);
        assert_eq!(config.site.home_limit, 3);
        assert_eq!(config.site.scroll_top_threshold, 300.0);
    }

    #[test]
    fn test_theme_config_accepts_string_or_table() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            theme = "ocean"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "ocean");

        let config: AppConfig = toml::from_str(
            r##"
            [ui.theme]
            name = "violet"
            colors = { accent = "#ff0000" }
            "##,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "violet");
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.site.home_limit, 6);
    }
}
