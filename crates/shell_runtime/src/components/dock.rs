use super::*;
use crate::icons::{IconSize, ShellIcon};
use crate::registry::{dock_applications, ApplicationDescriptor};

/// Resting dock icon size.
pub const DOCK_ICON_SIZE_PX: i32 = 48;
/// Icon size directly under the pointer when magnification peaks.
pub const DOCK_ICON_MAGNIFIED_PX: i32 = 80;
/// Horizontal distance over which magnification falls back to rest.
pub const DOCK_MAGNIFY_RADIUS_PX: i32 = 112;
/// Gap between adjacent dock icons.
pub const DOCK_ICON_GAP_PX: i32 = 10;
/// Inner padding of the dock strip.
pub const DOCK_PADDING_PX: i32 = 12;

/// Cosmetic magnification scale for a dock icon.
///
/// Purely decorative: 1.0 at rest (no pointer over the strip, or beyond the
/// falloff radius), peaking at the magnified/resting size ratio when the
/// pointer sits on the icon's center. Never consulted for state decisions.
pub fn dock_icon_scale(pointer_x: Option<i32>, slot_center_x: i32) -> f64 {
    let Some(pointer_x) = pointer_x else {
        return 1.0;
    };
    let distance = (pointer_x - slot_center_x).abs();
    if distance >= DOCK_MAGNIFY_RADIUS_PX {
        return 1.0;
    }
    let max_scale = f64::from(DOCK_ICON_MAGNIFIED_PX) / f64::from(DOCK_ICON_SIZE_PX);
    let falloff = 1.0 - f64::from(distance) / f64::from(DOCK_MAGNIFY_RADIUS_PX);
    1.0 + (max_scale - 1.0) * falloff
}

/// Horizontal center of the dock slot at `index`, relative to the strip.
pub fn dock_slot_center_x(index: usize) -> i32 {
    DOCK_PADDING_PX + index as i32 * (DOCK_ICON_SIZE_PX + DOCK_ICON_GAP_PX) + DOCK_ICON_SIZE_PX / 2
}

fn dock_indicator_class(open: bool, active: bool, minimized: bool) -> &'static str {
    if !open {
        return "dock-indicator";
    }
    if active {
        "dock-indicator running active"
    } else if minimized {
        "dock-indicator running minimized"
    } else {
        "dock-indicator running"
    }
}

fn dock_item_aria_label(title: &str, open: bool, active: bool, minimized: bool) -> String {
    if !open {
        return format!("Open {title}");
    }
    let mut label = format!("{title}, running");
    if active {
        label.push_str(", focused");
    }
    if minimized {
        label.push_str(", hidden");
    }
    label
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct DockContextMenuState {
    app_id: ApplicationId,
    x: i32,
    y: i32,
}

#[cfg(target_arch = "wasm32")]
fn strip_relative_x(ev: &web_sys::PointerEvent) -> Option<i32> {
    use wasm_bindgen::JsCast;

    let target = ev.current_target()?;
    let element = target.dyn_into::<web_sys::Element>().ok()?;
    let bounds = element.get_bounding_client_rect();
    Some(ev.client_x() - bounds.left() as i32)
}

#[cfg(not(target_arch = "wasm32"))]
fn strip_relative_x(_: &web_sys::PointerEvent) -> Option<i32> {
    None
}

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;
    let pointer_x = create_rw_signal(None::<i32>);
    let context_menu = create_rw_signal(None::<DockContextMenuState>);

    let outside_click_listener = window_event_listener(ev::mousedown, move |_| {
        if context_menu.get_untracked().is_some() {
            context_menu.set(None);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    view! {
        <footer
            class="dock"
            role="toolbar"
            aria-label="Application dock"
            on:mousedown=move |ev| ev.stop_propagation()
        >
            <div
                class="dock-strip"
                on:pointermove=move |ev: web_sys::PointerEvent| pointer_x.set(strip_relative_x(&ev))
                on:pointerleave=move |_| pointer_x.set(None)
            >
                <For
                    each={move || dock_applications().into_iter().enumerate().collect::<Vec<_>>()}
                    key=|(_, descriptor)| descriptor.id
                    let:entry
                >
                    <DockItem
                        slot_index=entry.0
                        descriptor=entry.1
                        pointer_x=pointer_x
                        context_menu=context_menu
                    />
                </For>
            </div>

            <Show when=move || context_menu.get().is_some() fallback=|| ()>
                {move || {
                    let Some(menu) = context_menu.get() else {
                        return ().into_view();
                    };
                    let flags = state.get();
                    let open = flags.is_open(&menu.app_id);
                    let minimized = flags.is_minimized(&menu.app_id);
                    let menu_style = format!("left:{}px;top:{}px;", menu.x, menu.y);
                    let open_id = menu.app_id.clone();
                    let toggle_id = menu.app_id.clone();
                    let quit_id = menu.app_id.clone();

                    view! {
                        <div
                            id="dock-context-menu"
                            class="dock-menu"
                            role="menu"
                            aria-label="Dock item actions"
                            style=menu_style
                            on:mousedown=move |ev| ev.stop_propagation()
                        >
                            <button
                                role="menuitem"
                                on:click=move |ev| {
                                    stop_mouse_event(&ev);
                                    context_menu.set(None);
                                    runtime.dispatch_action(WindowAction::Open(open_id.clone()));
                                }
                            >
                                "Open"
                            </button>
                            <button
                                role="menuitem"
                                disabled=!open
                                on:click=move |ev| {
                                    stop_mouse_event(&ev);
                                    context_menu.set(None);
                                    runtime.dispatch_action(WindowAction::Minimize(toggle_id.clone()));
                                }
                            >
                                {if minimized { "Show" } else { "Hide" }}
                            </button>
                            <div class="dock-menu-separator" role="separator" aria-hidden="true"></div>
                            <button
                                role="menuitem"
                                disabled=!open
                                on:click=move |ev| {
                                    stop_mouse_event(&ev);
                                    context_menu.set(None);
                                    runtime.dispatch_action(WindowAction::Close(quit_id.clone()));
                                }
                            >
                                "Quit"
                            </button>
                        </div>
                    }
                        .into_view()
                }}
            </Show>
        </footer>
    }
}

#[component]
fn DockItem(
    slot_index: usize,
    descriptor: &'static ApplicationDescriptor,
    pointer_x: RwSignal<Option<i32>>,
    context_menu: RwSignal<Option<DockContextMenuState>>,
) -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;
    let app_id = descriptor.application_id();

    let flags = {
        let app_id = app_id.clone();
        Signal::derive(move || {
            let manager = state.get();
            (
                manager.is_open(&app_id),
                manager.is_active(&app_id),
                manager.is_minimized(&app_id),
            )
        })
    };

    let icon_style = move || {
        let scale = dock_icon_scale(pointer_x.get(), dock_slot_center_x(slot_index));
        format!("transform:scale({scale:.3});")
    };

    let open_id = app_id.clone();
    let menu_id = app_id.clone();

    view! {
        <button
            class="dock-item"
            data-app=descriptor.id
            title=descriptor.title
            aria-label=move || {
                let (open, active, minimized) = flags.get();
                dock_item_aria_label(descriptor.title, open, active, minimized)
            }
            on:click=move |_| {
                context_menu.set(None);
                runtime.dispatch_action(WindowAction::Open(open_id.clone()));
            }
            on:contextmenu=move |ev: web_sys::MouseEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                context_menu.set(Some(DockContextMenuState {
                    app_id: menu_id.clone(),
                    x: ev.client_x(),
                    y: ev.client_y(),
                }));
            }
        >
            <span class="dock-icon" style=icon_style aria-hidden="true">
                <ShellIcon icon=descriptor.icon size=IconSize::Xl />
            </span>
            <span
                class=move || {
                    let (open, active, minimized) = flags.get();
                    dock_indicator_class(open, active, minimized)
                }
                aria-hidden="true"
            ></span>
            <span class="visually-hidden">{descriptor.title}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn icon_rests_at_unit_scale_without_a_pointer() {
        assert_eq!(dock_icon_scale(None, dock_slot_center_x(0)), 1.0);
    }

    #[test]
    fn icon_peaks_at_the_magnified_ratio_under_the_pointer() {
        let center = dock_slot_center_x(2);
        let peak = dock_icon_scale(Some(center), center);
        let expected = f64::from(DOCK_ICON_MAGNIFIED_PX) / f64::from(DOCK_ICON_SIZE_PX);
        assert!((peak - expected).abs() < 1e-9);
    }

    #[test]
    fn icon_rests_beyond_the_falloff_radius() {
        let center = dock_slot_center_x(0);
        assert_eq!(
            dock_icon_scale(Some(center + DOCK_MAGNIFY_RADIUS_PX), center),
            1.0
        );
        assert_eq!(
            dock_icon_scale(Some(center - DOCK_MAGNIFY_RADIUS_PX - 40), center),
            1.0
        );
    }

    #[test]
    fn magnification_decreases_monotonically_with_distance() {
        let center = dock_slot_center_x(1);
        let mut previous = f64::MAX;
        for distance in 0..=DOCK_MAGNIFY_RADIUS_PX {
            let scale = dock_icon_scale(Some(center + distance), center);
            assert!(scale <= previous);
            assert!(scale >= 1.0);
            previous = scale;
        }
    }

    #[test]
    fn slot_centers_advance_by_one_icon_pitch() {
        let pitch = DOCK_ICON_SIZE_PX + DOCK_ICON_GAP_PX;
        assert_eq!(dock_slot_center_x(0), DOCK_PADDING_PX + DOCK_ICON_SIZE_PX / 2);
        assert_eq!(dock_slot_center_x(3) - dock_slot_center_x(2), pitch);
    }

    #[test]
    fn indicator_class_distinguishes_running_states() {
        assert_eq!(dock_indicator_class(false, false, false), "dock-indicator");
        assert_eq!(
            dock_indicator_class(true, false, false),
            "dock-indicator running"
        );
        assert_eq!(
            dock_indicator_class(true, true, false),
            "dock-indicator running active"
        );
        assert_eq!(
            dock_indicator_class(true, false, true),
            "dock-indicator running minimized"
        );
    }

    #[test]
    fn aria_labels_describe_the_window_state() {
        assert_eq!(dock_item_aria_label("Mail", false, false, false), "Open Mail");
        assert_eq!(
            dock_item_aria_label("Mail", true, true, false),
            "Mail, running, focused"
        );
        assert_eq!(
            dock_item_aria_label("Mail", true, false, true),
            "Mail, running, hidden"
        );
    }
}
