//! Closed presentation vocabularies projected onto `data-*` attributes.
//!
//! Each component declares its own enumerations with [`token_enum!`]. The
//! shared sets below cover the choices several components have in common.

/// Declares a closed presentation enumeration with its attribute token.
///
/// The generated type derives the usual value traits, implements [`Default`]
/// with the named variant, exposes `token()` for the literal attribute value,
/// and lists every member in `ALL`.
#[macro_export]
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $token:literal
            ),+ $(,)?
        }
        default $default:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl $name {
            /// Every member of the closed set, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Literal attribute value for this choice.
            pub fn token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.token())
            }
        }
    };
}

token_enum! {
    /// Shared sizing scale.
    pub enum Size {
        /// Compact.
        Sm => "sm",
        /// Default.
        Md => "md",
        /// Spacious.
        Lg => "lg",
    }
    default Md;
}

token_enum! {
    /// Color-role choices shared by components and the theme root.
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum Accent {
        /// Cyan accent.
        Cyan => "cyan",
        /// Violet accent.
        Violet => "violet",
        /// Magenta accent.
        Magenta => "magenta",
        /// Emerald accent.
        Emerald => "emerald",
        /// Amber accent.
        Amber => "amber",
    }
    default Cyan;
}

token_enum! {
    /// Corner radius scale for component surfaces.
    pub enum Radius {
        /// Square corners.
        None => "none",
        /// Small radius.
        Sm => "sm",
        /// Medium radius.
        Md => "md",
        /// Large radius.
        Lg => "lg",
        /// Pill radius.
        Full => "full",
    }
    default Md;
}

token_enum! {
    /// Layout axis for separators, sliders, tabs, and scrollbars.
    pub enum Orientation {
        /// Horizontal axis.
        Horizontal => "horizontal",
        /// Vertical axis.
        Vertical => "vertical",
    }
    default Horizontal;
}

token_enum! {
    /// Edge an overlay is anchored to.
    pub enum Side {
        /// Above the anchor.
        Top => "top",
        /// Right of the anchor.
        Right => "right",
        /// Below the anchor.
        Bottom => "bottom",
        /// Left of the anchor.
        Left => "left",
    }
    default Bottom;
}

/// Projects a boolean presentation flag onto an optional attribute value.
///
/// `true` renders `"true"`; `false` omits the attribute entirely.
pub fn flag_token(value: bool) -> Option<&'static str> {
    value.then_some("true")
}

/// `data-state` token for open/closed disclosures.
pub fn open_state_token(open: bool) -> &'static str {
    if open {
        "open"
    } else {
        "closed"
    }
}

/// `data-state` token for two-state selection (radio, tab, checkbox).
pub fn checked_state_token(checked: bool) -> &'static str {
    if checked {
        "checked"
    } else {
        "unchecked"
    }
}

/// `data-state` token for activation (tabs, toggle groups).
pub fn active_state_token(active: bool) -> &'static str {
    if active {
        "active"
    } else {
        "inactive"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        assert_eq!(Size::default().token(), "md");
        assert_eq!(Accent::default().token(), "cyan");
        assert_eq!(Radius::default().token(), "md");
        assert_eq!(Orientation::default().token(), "horizontal");
        assert_eq!(Side::default().token(), "bottom");
    }

    #[test]
    fn all_lists_every_member_with_unique_tokens() {
        let tokens = Accent::ALL.iter().map(|accent| accent.token()).collect::<Vec<_>>();
        assert_eq!(tokens, vec!["cyan", "violet", "magenta", "emerald", "amber"]);
        assert_eq!(Size::ALL.len(), 3);
        assert_eq!(Radius::ALL.len(), 5);
    }

    #[test]
    fn display_renders_the_token() {
        assert_eq!(Size::Lg.to_string(), "lg");
        assert_eq!(Side::Left.to_string(), "left");
    }

    #[test]
    fn accent_serializes_as_lowercase_token() {
        let encoded = serde_json::to_string(&Accent::Emerald).expect("serialize accent");
        assert_eq!(encoded, "\"emerald\"");
        let decoded: Accent = serde_json::from_str("\"violet\"").expect("deserialize accent");
        assert_eq!(decoded, Accent::Violet);
    }

    #[test]
    fn flag_token_omits_false() {
        assert_eq!(flag_token(true), Some("true"));
        assert_eq!(flag_token(false), None);
    }

    #[test]
    fn state_tokens() {
        assert_eq!(open_state_token(true), "open");
        assert_eq!(open_state_token(false), "closed");
        assert_eq!(checked_state_token(true), "checked");
        assert_eq!(active_state_token(false), "inactive");
    }
}
