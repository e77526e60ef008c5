//! Simulated settings panel: read-only sections of hard-coded rows.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SettingsSection {
    id: &'static str,
    title: &'static str,
    rows: &'static [(&'static str, &'static str)],
}

const SECTIONS: [SettingsSection; 3] = [
    SettingsSection {
        id: "appearance",
        title: "Appearance",
        rows: &[
            ("Accent", "Harbor blue"),
            ("Wallpaper", "Gradient, evening"),
            ("Dock magnification", "On"),
            ("Menu bar clock", "12-hour"),
        ],
    },
    SettingsSection {
        id: "windows",
        title: "Windows",
        rows: &[
            ("One window per app", "Always"),
            ("Restore after minimize", "Exact geometry"),
            ("Zoom behavior", "Fill the desktop"),
        ],
    },
    SettingsSection {
        id: "about",
        title: "About this site",
        rows: &[
            ("Shell", "Rust + WebAssembly"),
            ("Persistence", "None, on purpose"),
            ("Accounts", "Not a thing here"),
        ],
    },
];

#[component]
pub fn SettingsApp() -> impl IntoView {
    view! {
        <div class="app app-settings">
            <For each=|| SECTIONS.to_vec() key=|section| section.id let:section>
                <section class="settings-section">
                    <h2>{section.title}</h2>
                    <div class="settings-rows">
                        <For each=move || section.rows.to_vec() key=|(label, _)| *label let:row>
                            <div class="settings-row">
                                <span class="settings-label">{row.0}</span>
                                <span class="settings-value">{row.1}</span>
                            </div>
                        </For>
                    </div>
                </section>
            </For>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_non_empty_and_unique() {
        let mut ids: Vec<&str> = SECTIONS.iter().map(|s| s.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), SECTIONS.len());
        assert!(SECTIONS.iter().all(|s| !s.rows.is_empty()));
    }
}
