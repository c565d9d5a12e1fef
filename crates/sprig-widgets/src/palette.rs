//! Resolution of the two concrete styles a menu renders with.

use sprig_core::style::{Attr, Role, Style, Theme};

/// The resolved styles for menu rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuStyles {
    /// Unselected rows.
    pub normal: Style,
    /// The highlighted row.
    pub selected: Style,
}

impl MenuStyles {
    /// Resolve row styles from the theme.
    ///
    /// `normal` prefers the `Popup` role; when a theme leaves it undefined
    /// we fall back to `Active` joined with `Associate`. `selected`
    /// prefers `PopupAlt`, falling back to `normal` with inverse video
    /// toggled. Both are completed against the theme base, so the result
    /// is always fully specified.
    pub fn resolve(theme: &Theme) -> Self {
        let popup = theme.get(Role::Popup);
        let normal = if popup.is_defined() {
            popup
        } else {
            theme.get(Role::Active).join(&theme.get(Role::Associate))
        };

        let popup_alt = theme.get(Role::PopupAlt);
        let selected = if popup_alt.is_defined() {
            popup_alt
        } else {
            normal.toggle_attr(Attr::Reverse)
        };

        Self {
            normal: theme.resolve(normal),
            selected: theme.resolve(selected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_core::style::{AttrSet, Color, PartialStyle};

    #[test]
    fn fallback_path() {
        // The default theme defines no popup roles, so normal comes from
        // active joined with associate, and selected is normal inverted.
        let theme = Theme::default();
        let styles = MenuStyles::resolve(&theme);

        let expected =
            theme.resolve(theme.get(Role::Active).join(&theme.get(Role::Associate)));
        assert_eq!(styles.normal, expected);
        assert!(!styles.normal.attrs.reverse);
        assert!(styles.selected.attrs.reverse);
        assert_eq!(styles.selected.fg, styles.normal.fg);
        assert_eq!(styles.selected.bg, styles.normal.bg);
    }

    #[test]
    fn popup_roles_win() {
        let mut theme = Theme::default();
        theme.set(Role::Popup, PartialStyle::fg(Color::Yellow).with_bg(Color::Magenta));
        theme.set(
            Role::PopupAlt,
            PartialStyle::fg(Color::Black).with_bg(Color::Yellow),
        );
        let styles = MenuStyles::resolve(&theme);

        assert_eq!(styles.normal.fg, Color::Yellow);
        assert_eq!(styles.normal.bg, Color::Magenta);
        assert_eq!(styles.selected.fg, Color::Black);
        assert_eq!(styles.selected.bg, Color::Yellow);
        // No inversion when the alt role is explicit.
        assert!(!styles.selected.attrs.reverse);
    }

    #[test]
    fn attr_only_popup_counts_as_defined() {
        let mut theme = Theme::default();
        theme.set(Role::Popup, PartialStyle::attrs(AttrSet::new(Attr::Bold)));
        let styles = MenuStyles::resolve(&theme);
        assert!(styles.normal.attrs.bold);
        // Colors complete from the base, not from active/associate.
        assert_eq!(styles.normal.fg, theme.base().fg);
        assert_eq!(styles.normal.bg, theme.base().bg);
    }
}
