//! Theme root and configuration.
//!
//! [`AuroraProvider`] renders the element external stylesheets key their
//! design tokens from and publishes the active [`ThemeConfig`] to descendants.

use leptos::logging;
use leptos::*;
use serde::{Deserialize, Serialize};

use crate::{cn, flag_token, token_enum, Accent};

token_enum! {
    /// Color scheme.
    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum ThemeMode {
        /// Dark surfaces.
        Dark => "dark",
        /// Light surfaces.
        Light => "light",
    }
    default Dark;
}

token_enum! {
    /// Global corner treatment.
    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum ThemeRadius {
        /// Square corners.
        None => "none",
        /// Subtle rounding.
        Small => "small",
        /// Default rounding.
        Medium => "medium",
        /// Pronounced rounding.
        Large => "large",
    }
    default Medium;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Theme settings applied at the root of an Aurora subtree.
pub struct ThemeConfig {
    /// Color scheme.
    pub mode: ThemeMode,
    /// Accent color role.
    pub accent: Accent,
    /// Corner treatment.
    pub radius: ThemeRadius,
    /// Whether glow effects are enabled.
    pub glow: bool,
    /// Root font scale in `rem`.
    pub scaling: f32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Dark,
            accent: Accent::Cyan,
            radius: ThemeRadius::Medium,
            glow: true,
            scaling: 1.0,
        }
    }
}

impl ThemeConfig {
    /// Parses a JSON theme document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns the [`serde_json::Error`] for malformed documents.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Parses a JSON theme document, falling back to defaults on failure.
    pub fn from_json_or_default(raw: &str) -> Self {
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                logging::warn!("theme config parse failed: {err}");
                Self::default()
            }
        }
    }

    /// Inline style for the theme root, present only when scaling differs from 1.
    pub fn root_style(&self) -> Option<String> {
        ((self.scaling - 1.0).abs() > f32::EPSILON).then(|| format!("font-size: {}rem", self.scaling))
    }
}

#[component]
/// Theme root publishing [`ThemeConfig`] to descendants.
///
/// Individual props override the matching field of `config`.
pub fn AuroraProvider(
    #[prop(optional)] config: Option<ThemeConfig>,
    #[prop(optional)] mode: Option<ThemeMode>,
    #[prop(optional)] accent: Option<Accent>,
    #[prop(optional)] radius: Option<ThemeRadius>,
    #[prop(optional)] glow: Option<bool>,
    #[prop(optional)] scaling: Option<f32>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let mut theme = config.unwrap_or_default();
    if let Some(mode) = mode {
        theme.mode = mode;
    }
    if let Some(accent) = accent {
        theme.accent = accent;
    }
    if let Some(radius) = radius {
        theme.radius = radius;
    }
    if let Some(glow) = glow {
        theme.glow = glow;
    }
    if let Some(scaling) = scaling {
        theme.scaling = scaling;
    }

    let style = theme.root_style().map(|style| ("style", style.into_attribute()));
    let view_theme = theme.clone();
    provide_context(theme);

    view! {
        <div
            class=cn!(class)
            {..style}
            data-aurora-theme=view_theme.mode.token()
            data-aurora-accent=view_theme.accent.token()
            data-aurora-radius=view_theme.radius.token()
            data-aurora-glow=flag_token(view_theme.glow)
        >
            {children()}
        </div>
    }
}

/// Returns the nearest theme configuration, if any provider is mounted.
pub fn use_theme() -> Option<ThemeConfig> {
    use_context::<ThemeConfig>()
}
