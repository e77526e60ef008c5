//! Static application catalog and per-application render dispatch.

use leptos::*;

use shell_app_mail::MailApp;
use shell_app_music::MusicApp;
use shell_app_notes::NotesApp;
use shell_app_photos::PhotosApp;
use shell_app_settings::SettingsApp;

use crate::icons::IconName;
use crate::model::{ApplicationId, WindowRect};

pub const MAIL_APP_ID: &str = "mail";
pub const PHOTOS_APP_ID: &str = "photos";
pub const MUSIC_APP_ID: &str = "music";
pub const NOTES_APP_ID: &str = "notes";
pub const SETTINGS_APP_ID: &str = "settings";
pub const ACTIVITY_APP_ID: &str = "activity";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Immutable display metadata for one simulated application.
pub struct ApplicationDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: IconName,
    /// Geometry used the first time a window opens for this id.
    pub default_rect: WindowRect,
    /// Whether the dock's curated launcher strip lists this application.
    pub show_in_dock: bool,
    /// Menu titles the menu bar displays while this application is focused.
    pub menu_titles: &'static [&'static str],
}

impl ApplicationDescriptor {
    pub fn application_id(&self) -> ApplicationId {
        ApplicationId::new(self.id)
    }
}

const APP_CATALOG: [ApplicationDescriptor; 6] = [
    ApplicationDescriptor {
        id: MAIL_APP_ID,
        title: "Mail",
        icon: IconName::Mail,
        default_rect: WindowRect {
            x: 90,
            y: 70,
            w: 720,
            h: 480,
        },
        show_in_dock: true,
        menu_titles: &["File", "Edit", "Mailbox", "Message", "View", "Window", "Help"],
    },
    ApplicationDescriptor {
        id: PHOTOS_APP_ID,
        title: "Photos",
        icon: IconName::Photos,
        default_rect: WindowRect {
            x: 130,
            y: 100,
            w: 680,
            h: 460,
        },
        show_in_dock: true,
        menu_titles: &["File", "Edit", "Image", "View", "Window", "Help"],
    },
    ApplicationDescriptor {
        id: MUSIC_APP_ID,
        title: "Music",
        icon: IconName::Music,
        default_rect: WindowRect {
            x: 170,
            y: 130,
            w: 620,
            h: 420,
        },
        show_in_dock: true,
        menu_titles: &["File", "Edit", "Song", "Controls", "View", "Window", "Help"],
    },
    ApplicationDescriptor {
        id: NOTES_APP_ID,
        title: "Notes",
        icon: IconName::Notes,
        default_rect: WindowRect {
            x: 210,
            y: 90,
            w: 640,
            h: 440,
        },
        show_in_dock: true,
        menu_titles: &["File", "Edit", "Format", "View", "Window", "Help"],
    },
    ApplicationDescriptor {
        id: SETTINGS_APP_ID,
        title: "Settings",
        icon: IconName::Settings,
        default_rect: WindowRect {
            x: 250,
            y: 120,
            w: 560,
            h: 420,
        },
        show_in_dock: true,
        menu_titles: &["File", "Edit", "View", "Window", "Help"],
    },
    // Reachable from the logo menu only; the dock strip is a curated subset.
    ApplicationDescriptor {
        id: ACTIVITY_APP_ID,
        title: "Activity",
        icon: IconName::Activity,
        default_rect: WindowRect {
            x: 300,
            y: 150,
            w: 480,
            h: 360,
        },
        show_in_dock: false,
        menu_titles: &["File", "Edit", "View", "Window", "Help"],
    },
];

/// Full application catalog, in display order.
pub fn application_catalog() -> &'static [ApplicationDescriptor] {
    &APP_CATALOG
}

/// Applications listed in the dock's launcher strip.
pub fn dock_applications() -> Vec<&'static ApplicationDescriptor> {
    application_catalog()
        .iter()
        .filter(|d| d.show_in_dock)
        .collect()
}

/// Looks up the descriptor for `app_id`, or `None` when the id is unknown to
/// the catalog (the window manager may still be tracking it).
pub fn descriptor_for(app_id: &ApplicationId) -> Option<&'static ApplicationDescriptor> {
    application_catalog()
        .iter()
        .find(|d| d.id == app_id.as_str())
}

/// Display title for `app_id`, falling back to the raw id for ids the catalog
/// does not know.
pub fn display_title(app_id: &ApplicationId) -> String {
    descriptor_for(app_id)
        .map(|d| d.title.to_string())
        .unwrap_or_else(|| app_id.as_str().to_string())
}

/// Geometry hint for the first open of `app_id`.
pub fn default_rect_for(app_id: &ApplicationId) -> WindowRect {
    descriptor_for(app_id)
        .map(|d| d.default_rect)
        .unwrap_or(WindowRect {
            x: 120,
            y: 90,
            w: 560,
            h: 400,
        })
}

/// Mounts the application view for one open window.
pub fn render_application(app_id: &ApplicationId) -> View {
    match app_id.as_str() {
        MAIL_APP_ID => view! { <MailApp /> }.into_view(),
        PHOTOS_APP_ID => view! { <PhotosApp /> }.into_view(),
        MUSIC_APP_ID => view! { <MusicApp /> }.into_view(),
        NOTES_APP_ID => view! { <NotesApp /> }.into_view(),
        SETTINGS_APP_ID => view! { <SettingsApp /> }.into_view(),
        ACTIVITY_APP_ID => render_activity_placeholder(),
        _ => render_unknown_application(app_id),
    }
}

fn render_activity_placeholder() -> View {
    view! {
        <div class="app app-activity">
            <p><strong>"Activity"</strong></p>
            <p>"Every window here is a rendering function, so there is not much to monitor."</p>
            <ul>
                <li>"Shell: running"</li>
                <li>"Windows: managed"</li>
                <li>"Background tasks: none"</li>
            </ul>
        </div>
    }
    .into_view()
}

fn render_unknown_application(app_id: &ApplicationId) -> View {
    let label = app_id.as_str().to_string();
    view! {
        <div class="app app-unknown">
            <p>{format!("No application is registered for `{label}`.")}</p>
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<&str> = application_catalog().iter().map(|d| d.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), application_catalog().len());
    }

    #[test]
    fn dock_strip_is_a_strict_subset_of_the_catalog() {
        let dock = dock_applications();
        assert!(!dock.is_empty());
        assert!(dock.len() < application_catalog().len());
        assert!(dock.iter().all(|d| d.show_in_dock));
    }

    #[test]
    fn descriptor_lookup_resolves_registered_ids() {
        let mail = ApplicationId::new(MAIL_APP_ID);
        let descriptor = descriptor_for(&mail).expect("mail descriptor");
        assert_eq!(descriptor.title, "Mail");
        assert_eq!(default_rect_for(&mail), descriptor.default_rect);
    }

    #[test]
    fn unknown_ids_fall_back_to_the_raw_id_label() {
        let ghost = ApplicationId::new("ghost");
        assert_eq!(descriptor_for(&ghost), None);
        assert_eq!(display_title(&ghost), "ghost");
    }

    #[test]
    fn every_descriptor_carries_a_usable_default_rect() {
        for descriptor in application_catalog() {
            assert!(descriptor.default_rect.w >= crate::surface::MIN_WINDOW_WIDTH);
            assert!(descriptor.default_rect.h >= crate::surface::MIN_WINDOW_HEIGHT);
        }
    }
}
