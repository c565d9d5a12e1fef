//! The style model: colors, text attributes, and the host theme.
//!
//! The host theme stores *partial* styles per named role. Widgets join
//! partials together and complete them against the theme's base style, so
//! every style that reaches the renderer is fully resolved.

use std::collections::HashMap;

/// A terminal color.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Color {
    /// ANSI black.
    Black,
    /// ANSI blue.
    Blue,
    /// ANSI cyan.
    Cyan,
    /// ANSI green.
    Green,
    /// ANSI grey.
    Grey,
    /// ANSI magenta.
    Magenta,
    /// ANSI red.
    Red,
    /// ANSI white.
    White,
    /// ANSI yellow.
    Yellow,
    /// A 24-bit color.
    Rgb(u8, u8, u8),
}

/// A text attribute.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Attr {
    /// Bold weight.
    Bold,
    /// Dim intensity.
    Dim,
    /// Italic slant.
    Italic,
    /// Inverse video.
    Reverse,
    /// Underline.
    Underline,
}

/// A set of active text attributes.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct AttrSet {
    /// Bold weight.
    pub bold: bool,
    /// Dim intensity.
    pub dim: bool,
    /// Italic slant.
    pub italic: bool,
    /// Inverse video.
    pub reverse: bool,
    /// Underline.
    pub underline: bool,
}

impl AttrSet {
    /// An attribute set with a single attribute turned on.
    pub fn new(attr: Attr) -> Self {
        Self::default().with(attr)
    }

    /// Is this attribute set empty?
    pub fn is_empty(&self) -> bool {
        !(self.bold || self.dim || self.italic || self.reverse || self.underline)
    }

    /// A helper for progressive construction of attribute sets.
    pub fn with(mut self, attr: Attr) -> Self {
        match attr {
            Attr::Bold => self.bold = true,
            Attr::Dim => self.dim = true,
            Attr::Italic => self.italic = true,
            Attr::Reverse => self.reverse = true,
            Attr::Underline => self.underline = true,
        };
        self
    }

    /// Flip a single attribute.
    pub fn toggle(mut self, attr: Attr) -> Self {
        match attr {
            Attr::Bold => self.bold = !self.bold,
            Attr::Dim => self.dim = !self.dim,
            Attr::Italic => self.italic = !self.italic,
            Attr::Reverse => self.reverse = !self.reverse,
            Attr::Underline => self.underline = !self.underline,
        };
        self
    }
}

/// A fully resolved style specification.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Style {
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    /// Text attributes.
    pub attrs: AttrSet,
}

/// A possibly partial style specification, as stored in a [`Theme`].
/// Partials are completed against the theme base before rendering.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct PartialStyle {
    /// Foreground, if specified.
    pub fg: Option<Color>,
    /// Background, if specified.
    pub bg: Option<Color>,
    /// Attributes, if specified.
    pub attrs: Option<AttrSet>,
}

impl PartialStyle {
    /// A partial style with only a foreground color.
    pub fn fg(fg: Color) -> Self {
        Self {
            fg: Some(fg),
            ..Self::default()
        }
    }

    /// A partial style with only a background color.
    pub fn bg(bg: Color) -> Self {
        Self {
            bg: Some(bg),
            ..Self::default()
        }
    }

    /// A partial style with only attributes.
    pub fn attrs(attrs: AttrSet) -> Self {
        Self {
            attrs: Some(attrs),
            ..Self::default()
        }
    }

    /// Add a foreground color.
    pub fn with_fg(mut self, fg: Color) -> Self {
        self.fg = Some(fg);
        self
    }

    /// Add a background color.
    pub fn with_bg(mut self, bg: Color) -> Self {
        self.bg = Some(bg);
        self
    }

    /// Add an attribute.
    pub fn with_attr(mut self, attr: Attr) -> Self {
        self.attrs = Some(self.attrs.unwrap_or_default().with(attr));
        self
    }

    /// Does this partial specify anything at all? The theme treats an
    /// entirely-empty partial as "role not defined".
    pub fn is_defined(&self) -> bool {
        self.fg.is_some() || self.bg.is_some() || self.attrs.is_some()
    }

    /// Deterministic merge of two partials: fields set on `self` win,
    /// fields unset on `self` are filled from `other`.
    pub fn join(&self, other: &Self) -> Self {
        Self {
            fg: self.fg.or(other.fg),
            bg: self.bg.or(other.bg),
            attrs: self.attrs.or(other.attrs),
        }
    }

    /// Flip an attribute, starting from empty attributes if none are set.
    pub fn toggle_attr(mut self, attr: Attr) -> Self {
        self.attrs = Some(self.attrs.unwrap_or_default().toggle(attr));
        self
    }
}

impl From<Style> for PartialStyle {
    fn from(s: Style) -> Self {
        Self {
            fg: Some(s.fg),
            bg: Some(s.bg),
            attrs: Some(s.attrs),
        }
    }
}

/// Named visual roles resolved from the host's theme.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Role {
    /// Overlay body rows.
    Popup,
    /// The highlighted overlay row.
    PopupAlt,
    /// The active editing surface; fallback when `Popup` is undefined.
    Active,
    /// Associated surface chrome; joined with `Active` in the fallback.
    Associate,
}

/// The host theme: a guaranteed-complete base style plus partial styles
/// for each role a theme author chose to define. Resolution always
/// succeeds because missing fields fall back to the base.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Theme {
    base: Style,
    roles: HashMap<Role, PartialStyle>,
}

impl Theme {
    /// A theme with the given base style and no roles defined.
    pub fn new(base: Style) -> Self {
        Self {
            base,
            roles: HashMap::new(),
        }
    }

    /// The base style.
    pub fn base(&self) -> Style {
        self.base
    }

    /// Define or replace a role.
    pub fn set(&mut self, role: Role, style: PartialStyle) {
        self.roles.insert(role, style);
    }

    /// The partial style for a role; empty if the theme does not define it.
    pub fn get(&self, role: Role) -> PartialStyle {
        self.roles.get(&role).copied().unwrap_or_default()
    }

    /// Complete a partial style against the base.
    pub fn resolve(&self, ps: PartialStyle) -> Style {
        Style {
            fg: ps.fg.unwrap_or(self.base.fg),
            bg: ps.bg.unwrap_or(self.base.bg),
            attrs: ps.attrs.unwrap_or(self.base.attrs),
        }
    }
}

impl Default for Theme {
    /// A usable dark palette. `Active` and `Associate` are defined;
    /// `Popup`/`PopupAlt` are left to theme authors, so the overlay
    /// fallback path is the default path.
    fn default() -> Self {
        let mut theme = Self::new(Style {
            fg: Color::White,
            bg: Color::Black,
            attrs: AttrSet::default(),
        });
        theme.set(Role::Active, PartialStyle::fg(Color::White).with_bg(Color::Blue));
        theme.set(Role::Associate, PartialStyle::attrs(AttrSet::new(Attr::Dim)));
        theme
    }
}
