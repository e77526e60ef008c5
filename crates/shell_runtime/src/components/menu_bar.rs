use std::time::Duration;

use super::*;
use crate::icons::{IconName, IconSize, ShellIcon};

/// Menu-bar label shown when no window is active.
pub const DEFAULT_APP_LABEL: &str = "Desktop";

const DEFAULT_MENU_TITLES: &[&str] = &["File", "Edit", "View", "Window", "Help"];

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved menu-bar presentation for the current focus state.
pub struct MenuBarContext {
    pub app_label: String,
    pub menu_titles: &'static [&'static str],
}

/// Resolves the menu-bar label and menu set for the active application.
///
/// Registered ids get their catalog title and menu set; ids the catalog does
/// not know fall back to the raw id over the default menus; no active window
/// yields the neutral desktop label.
pub fn menu_bar_context(active: Option<&ApplicationId>) -> MenuBarContext {
    let Some(app_id) = active else {
        return MenuBarContext {
            app_label: DEFAULT_APP_LABEL.to_string(),
            menu_titles: DEFAULT_MENU_TITLES,
        };
    };
    match registry::descriptor_for(app_id) {
        Some(descriptor) => MenuBarContext {
            app_label: descriptor.title.to_string(),
            menu_titles: descriptor.menu_titles,
        },
        None => MenuBarContext {
            app_label: app_id.as_str().to_string(),
            menu_titles: DEFAULT_MENU_TITLES,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MenuClockSnapshot {
    weekday: u32,
    hour: u32,
    minute: u32,
}

impl MenuClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                weekday: date.get_day(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                weekday: 1,
                hour: 9,
                minute: 41,
            }
        }
    }
}

fn weekday_label(weekday: u32) -> &'static str {
    match weekday {
        0 => "Sun",
        1 => "Mon",
        2 => "Tue",
        3 => "Wed",
        4 => "Thu",
        5 => "Fri",
        _ => "Sat",
    }
}

fn format_menu_clock(snapshot: MenuClockSnapshot) -> String {
    let mut hour = snapshot.hour % 12;
    if hour == 0 {
        hour = 12;
    }
    let suffix = if snapshot.hour >= 12 { "PM" } else { "AM" };
    format!(
        "{} {}:{:02} {}",
        weekday_label(snapshot.weekday),
        hour,
        snapshot.minute,
        suffix
    )
}

#[component]
pub(super) fn MenuBar() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;

    let active = Signal::derive(move || state.get().active_application().cloned());
    let context = Signal::derive(move || menu_bar_context(active.get().as_ref()));
    let window_menu_open = create_rw_signal(false);
    let clock = create_rw_signal(MenuClockSnapshot::now());

    // Ticks the clock display only; window-manager state is never touched on
    // a timer.
    if let Ok(interval) = set_interval_with_handle(
        move || clock.set(MenuClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let outside_click_listener = window_event_listener(ev::mousedown, move |_| {
        if window_menu_open.get_untracked() {
            window_menu_open.set(false);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let dispatch_on_active = move |ev: &web_sys::MouseEvent, make: fn(ApplicationId) -> WindowAction| {
        stop_mouse_event(ev);
        window_menu_open.set(false);
        if let Some(app_id) = active.get_untracked() {
            runtime.dispatch_action(make(app_id));
        }
    };

    view! {
        <header
            class="menu-bar"
            role="menubar"
            aria-label="Desktop menu bar"
            on:mousedown=move |ev| ev.stop_propagation()
        >
            <div class="menu-bar-left">
                <button
                    class="menu-bar-logo"
                    aria-label="About this desktop"
                    on:click=move |_| {
                        window_menu_open.set(false);
                        runtime.dispatch_action(WindowAction::Open(ApplicationId::new(
                            registry::ACTIVITY_APP_ID,
                        )));
                    }
                >
                    <ShellIcon icon=IconName::Logo size=IconSize::Sm />
                </button>

                <div class="menu-bar-app">
                    <button
                        class="menu-bar-app-title"
                        aria-haspopup="menu"
                        aria-controls="menu-bar-window-menu"
                        aria-expanded=move || window_menu_open.get()
                        on:click=move |_| window_menu_open.update(|open| *open = !*open)
                    >
                        {move || {
                            active
                                .get()
                                .and_then(|id| registry::descriptor_for(&id))
                                .map(|descriptor| {
                                    view! {
                                        <span class="menu-bar-app-icon" aria-hidden="true">
                                            <ShellIcon icon=descriptor.icon size=IconSize::Sm />
                                        </span>
                                    }
                                        .into_view()
                                })
                                .unwrap_or_else(|| ().into_view())
                        }}
                        <span>{move || context.get().app_label}</span>
                    </button>

                    <Show when=move || window_menu_open.get() fallback=|| ()>
                        <div
                            id="menu-bar-window-menu"
                            class="menu-bar-menu"
                            role="menu"
                            aria-label="Window actions"
                        >
                            <button
                                role="menuitem"
                                disabled=move || active.get().is_none()
                                on:click=move |ev| dispatch_on_active(&ev, WindowAction::Minimize)
                            >
                                "Minimize"
                            </button>
                            <button
                                role="menuitem"
                                disabled=move || active.get().is_none()
                                on:click=move |ev| dispatch_on_active(&ev, WindowAction::Maximize)
                            >
                                "Zoom"
                            </button>
                            <div class="menu-bar-separator" role="separator" aria-hidden="true"></div>
                            <button
                                role="menuitem"
                                disabled=move || active.get().is_none()
                                on:click=move |ev| dispatch_on_active(&ev, WindowAction::Close)
                            >
                                "Close Window"
                            </button>
                        </div>
                    </Show>
                </div>

                <nav class="menu-bar-titles" aria-hidden="true">
                    <For
                        each=move || context.get().menu_titles.to_vec()
                        key=|title| *title
                        let:title
                    >
                        <span class="menu-bar-title">{title}</span>
                    </For>
                </nav>
            </div>

            <div class="menu-bar-right">
                <span class="menu-bar-status" aria-hidden="true">
                    <ShellIcon icon=IconName::Battery size=IconSize::Sm />
                </span>
                <span class="menu-bar-status" aria-hidden="true">
                    <ShellIcon icon=IconName::Wifi size=IconSize::Sm />
                </span>
                <span class="menu-bar-clock">{move || format_menu_clock(clock.get())}</span>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registered_ids_resolve_their_own_menu_set() {
        let mail = ApplicationId::new(registry::MAIL_APP_ID);
        let context = menu_bar_context(Some(&mail));
        assert_eq!(context.app_label, "Mail");
        assert!(context.menu_titles.contains(&"Mailbox"));
    }

    #[test]
    fn unknown_ids_fall_back_to_the_default_menu_set() {
        let ghost = ApplicationId::new("ghost");
        let context = menu_bar_context(Some(&ghost));
        assert_eq!(context.app_label, "ghost");
        assert_eq!(context.menu_titles, DEFAULT_MENU_TITLES);
    }

    #[test]
    fn no_active_window_yields_the_neutral_label() {
        let context = menu_bar_context(None);
        assert_eq!(context.app_label, DEFAULT_APP_LABEL);
        assert_eq!(context.menu_titles, DEFAULT_MENU_TITLES);
    }

    #[test]
    fn clock_formats_twelve_hour_time() {
        assert_eq!(
            format_menu_clock(MenuClockSnapshot {
                weekday: 1,
                hour: 9,
                minute: 41
            }),
            "Mon 9:41 AM"
        );
        assert_eq!(
            format_menu_clock(MenuClockSnapshot {
                weekday: 5,
                hour: 0,
                minute: 5
            }),
            "Fri 12:05 AM"
        );
        assert_eq!(
            format_menu_clock(MenuClockSnapshot {
                weekday: 6,
                hour: 15,
                minute: 30
            }),
            "Sat 3:30 PM"
        );
    }
}
