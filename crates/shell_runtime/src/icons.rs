//! Centralized icon catalog for the desktop shell.
//!
//! Semantic icon identifiers plus a single SVG renderer so shell components
//! never embed raw markup. Glyphs are minimal filled 24px paths.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by shell components.
pub enum IconName {
    /// Shell logo glyph in the menu-bar corner.
    Logo,
    /// Mail app icon.
    Mail,
    /// Photos app icon.
    Photos,
    /// Music app icon.
    Music,
    /// Notes app icon.
    Notes,
    /// Settings app icon.
    Settings,
    /// Activity monitor app icon.
    Activity,
    /// Menu-bar network status glyph.
    Wifi,
    /// Menu-bar battery status glyph.
    Battery,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Logo => "logo",
            Self::Mail => "mail",
            Self::Photos => "photos",
            Self::Music => "music",
            Self::Notes => "notes",
            Self::Settings => "settings",
            Self::Activity => "activity",
            Self::Wifi => "wifi",
            Self::Battery => "battery",
        }
    }

    /// Raw SVG body markup for the icon.
    fn svg_body(self) -> &'static str {
        match self {
            Self::Logo => {
                r#"<path d="M12 2.5l2.6 5.6 5.9.9-4.2 4.2 1 6L12 16.4l-5.3 2.8 1-6L3.5 9l5.9-.9L12 2.5Z"/>"#
            }
            Self::Mail => {
                r#"<path d="M2 6.5C2 5.67 2.67 5 3.5 5h17c.83 0 1.5.67 1.5 1.5v11c0 .83-.67 1.5-1.5 1.5h-17A1.5 1.5 0 0 1 2 17.5v-11Zm2 .9v9.1h16V7.4l-7.6 4.9a.75.75 0 0 1-.8 0L4 7.4ZM19.1 6.5H4.9l7.1 4.6 7.1-4.6Z"/>"#
            }
            Self::Photos => {
                r#"<path d="M5 4h14c1.66 0 3 1.34 3 3v10c0 1.66-1.34 3-3 3H5c-1.66 0-3-1.34-3-3V7c0-1.66 1.34-3 3-3Zm14 1.5H5c-.83 0-1.5.67-1.5 1.5v8.3l3.9-3.9c.3-.3.77-.3 1.06 0l3.1 3.1 4.6-4.6c.3-.3.77-.3 1.06 0l3.28 3.28V7c0-.83-.67-1.5-1.5-1.5Zm-10.5 2a1.75 1.75 0 1 1 0 3.5 1.75 1.75 0 0 1 0-3.5Z"/>"#
            }
            Self::Music => {
                r#"<path d="M9 3.75c0-.36.26-.67.61-.74l9-1.8a.75.75 0 0 1 .89.74v13.3a3.25 3.25 0 1 1-1.5-2.74V5.67l-7.5 1.5v11.08a3.25 3.25 0 1 1-1.5-2.74V3.75Z"/>"#
            }
            Self::Notes => {
                r#"<path d="M6 2h8.17c.53 0 1.04.21 1.42.59l3.82 3.82c.38.38.59.89.59 1.42V20a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4c0-1.1.9-2 2-2Zm.5 1.5a.5.5 0 0 0-.5.5v16c0 .28.22.5.5.5h11a.5.5 0 0 0 .5-.5V8.5H14a2 2 0 0 1-2-2V3.5H6.5Zm7 .6v2.4c0 .28.22.5.5.5h2.4l-2.9-2.9ZM8 12.25c0-.41.34-.75.75-.75h6.5a.75.75 0 0 1 0 1.5h-6.5a.75.75 0 0 1-.75-.75Zm0 3c0-.41.34-.75.75-.75h6.5a.75.75 0 0 1 0 1.5h-6.5a.75.75 0 0 1-.75-.75Z"/>"#
            }
            Self::Settings => {
                r#"<path d="M10.8 2h2.4l.45 2.3c.63.18 1.22.45 1.76.8l2.2-.8 1.7 1.7-.8 2.2c.35.54.62 1.13.8 1.76l2.3.45v2.4l-2.3.45a6.73 6.73 0 0 1-.8 1.76l.8 2.2-1.7 1.7-2.2-.8c-.54.35-1.13.62-1.76.8l-.45 2.3h-2.4l-.45-2.3a6.73 6.73 0 0 1-1.76-.8l-2.2.8-1.7-1.7.8-2.2a6.73 6.73 0 0 1-.8-1.76L2 13.2v-2.4l2.3-.45c.18-.63.45-1.22.8-1.76l-.8-2.2 1.7-1.7 2.2.8c.54-.35 1.13-.62 1.76-.8L10.8 2ZM12 8.25a3.75 3.75 0 1 0 0 7.5 3.75 3.75 0 0 0 0-7.5Zm0 1.5a2.25 2.25 0 1 1 0 4.5 2.25 2.25 0 0 1 0-4.5Z"/>"#
            }
            Self::Activity => {
                r#"<path d="M3 12.75a.75.75 0 0 1 0-1.5h3.3l1.9-4.44a.75.75 0 0 1 1.4.04l2.53 7.6 1.62-3.51a.75.75 0 0 1 .68-.44H21a.75.75 0 0 1 0 1.5h-6.09l-2.23 4.81a.75.75 0 0 1-1.39-.08L8.82 9.3l-1.25 2.99a.75.75 0 0 1-.69.46H3Z"/>"#
            }
            Self::Wifi => {
                r#"<path d="M12 18.75a1.5 1.5 0 1 1 0-3 1.5 1.5 0 0 1 0 3Zm-3.54-4.29a.75.75 0 0 1-.02-1.06 5.1 5.1 0 0 1 7.12 0 .75.75 0 1 1-1.05 1.07 3.6 3.6 0 0 0-5 0c-.3.29-.77.28-1.05-.01Zm-2.83-2.83a.75.75 0 0 1-.01-1.06 9.08 9.08 0 0 1 12.76 0 .75.75 0 1 1-1.06 1.06 7.58 7.58 0 0 0-10.63 0c-.3.3-.77.3-1.06 0Zm-2.82-2.84a.75.75 0 0 1 0-1.06 13.05 13.05 0 0 1 18.38 0 .75.75 0 1 1-1.06 1.07 11.55 11.55 0 0 0-16.26 0c-.3.29-.77.29-1.06-.01Z"/>"#
            }
            Self::Battery => {
                r#"<path d="M4.25 7h12.5C17.99 7 19 8 19 9.25v5.5C19 16 18 17 16.75 17H4.25A2.25 2.25 0 0 1 2 14.75v-5.5C2 8.01 3 7 4.25 7Zm0 1.5a.75.75 0 0 0-.75.75v5.5c0 .41.34.75.75.75h12.5c.41 0 .75-.34.75-.75v-5.5a.75.75 0 0 0-.75-.75H4.25ZM20.5 10h.25c.69 0 1.25.56 1.25 1.25v1.5c0 .69-.56 1.25-1.25 1.25h-.25v-4Zm-15.25.75h8v2.5h-8v-2.5Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized shell icon sizes.
pub enum IconSize {
    /// 16px standard icon (menus, menu-bar status items).
    #[default]
    Sm,
    /// 20px medium icon (window chrome).
    Md,
    /// 24px large icon (context menus, lists).
    Lg,
    /// 48px dock-launcher icon.
    Xl,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
            Self::Xl => 48,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

#[component]
/// Renders an SVG glyph from the shell icon catalog.
pub fn ShellIcon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="shell-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}
