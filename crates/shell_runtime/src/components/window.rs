use super::*;
use crate::icons::{IconSize, ShellIcon};
use crate::surface::SurfaceState;
use crate::viewport::desktop_viewport_rect;

#[component]
pub(super) fn WindowSurface(app_id: ApplicationId) -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;
    let app = store_value(app_id);

    let is_active = Signal::derive(move || state.get().is_active(&app.get_value()));
    let is_minimized = Signal::derive(move || state.get().is_minimized(&app.get_value()));
    let is_maximized = Signal::derive(move || state.get().is_maximized(&app.get_value()));
    let z_index = Signal::derive(move || {
        state
            .get()
            .stack_position(&app.get_value())
            .map(|position| position + 1)
            .unwrap_or(0)
    });

    let title = registry::display_title(&app.get_value());
    let icon = registry::descriptor_for(&app.get_value()).map(|d| d.icon);
    let surface = create_rw_signal(SurfaceState::new(registry::default_rect_for(
        &app.get_value(),
    )));

    // The store only flips the maximized flag; geometry snapshot and viewport
    // fill happen here, on the flag's edges.
    let was_maximized = create_rw_signal(false);
    create_effect(move |_| {
        let is_max = is_maximized.get();
        let was_max = was_maximized.get_untracked();
        if is_max && !was_max {
            was_maximized.set(true);
            surface.update(|s| s.enter_maximized(desktop_viewport_rect()));
        } else if !is_max && was_max {
            was_maximized.set(false);
            surface.update(|s| s.exit_maximized());
        }
    });

    let viewport_listener = window_event_listener(ev::resize, move |_| {
        if is_maximized.get_untracked() {
            surface.update(|s| s.viewport_resized(desktop_viewport_rect()));
        }
    });
    on_cleanup(move || viewport_listener.remove());

    // The one manager write a surface interaction is allowed: focus.
    let focus_surface = move |_: web_sys::PointerEvent| {
        if !is_active.get_untracked() {
            runtime.dispatch_action(WindowAction::Focus(app.get_value()));
        }
    };

    let begin_move = move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        if is_maximized.get_untracked() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        surface.update(|s| s.begin_drag(pointer_from_pointer_event(&ev)));
    };
    let track_pointer = move |ev: web_sys::PointerEvent| {
        surface.update(|s| s.pointer_moved(pointer_from_pointer_event(&ev)));
    };
    let finish_pointer = move |_: web_sys::PointerEvent| {
        surface.update(|s| s.end_interaction());
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(WindowAction::Maximize(app.get_value()));
    };

    let surface_style = move || {
        let rect = surface.get().rect();
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            rect.x,
            rect.y,
            rect.w,
            rect.h,
            z_index.get()
        )
    };
    let surface_class = move || {
        let mut class = String::from("window-surface");
        if is_active.get() {
            class.push_str(" active");
        }
        if is_maximized.get() {
            class.push_str(" maximized");
        }
        class
    };

    let contents = registry::render_application(&app.get_value());

    view! {
        <Show when=move || !is_minimized.get() fallback=|| ()>
            <section
                class=surface_class
                style=surface_style
                on:pointerdown=focus_surface
                role="dialog"
                aria-label=title.clone()
            >
                <header
                    class="window-titlebar"
                    on:pointerdown=begin_move
                    on:pointermove=track_pointer
                    on:pointerup=finish_pointer
                    on:pointercancel=finish_pointer
                    on:dblclick=titlebar_double_click
                >
                    <div class="window-controls">
                        <button
                            class="window-control close"
                            aria-label="Close window"
                            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                            on:dblclick=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                runtime.dispatch_action(WindowAction::Close(app.get_value()));
                            }
                        ></button>
                        <button
                            class="window-control minimize"
                            aria-label="Minimize window"
                            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                            on:dblclick=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                runtime.dispatch_action(WindowAction::Minimize(app.get_value()));
                            }
                        ></button>
                        <button
                            class="window-control zoom"
                            aria-label=move || {
                                if is_maximized.get() { "Restore window" } else { "Zoom window" }
                            }
                            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                            on:dblclick=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                runtime.dispatch_action(WindowAction::Maximize(app.get_value()));
                            }
                        ></button>
                    </div>
                    <div class="window-title">
                        {icon
                            .map(|icon| {
                                view! {
                                    <span class="window-title-icon" aria-hidden="true">
                                        <ShellIcon icon=icon size=IconSize::Sm />
                                    </span>
                                }
                                    .into_view()
                            })
                            .unwrap_or_else(|| ().into_view())}
                        <span>{title.clone()}</span>
                    </div>
                </header>

                <div class="window-body">{contents.clone()}</div>

                <Show when=move || !is_maximized.get() fallback=|| ()>
                    <WindowResizeHandle surface=surface edge=ResizeEdge::North />
                    <WindowResizeHandle surface=surface edge=ResizeEdge::South />
                    <WindowResizeHandle surface=surface edge=ResizeEdge::East />
                    <WindowResizeHandle surface=surface edge=ResizeEdge::West />
                    <WindowResizeHandle surface=surface edge=ResizeEdge::NorthEast />
                    <WindowResizeHandle surface=surface edge=ResizeEdge::NorthWest />
                    <WindowResizeHandle surface=surface edge=ResizeEdge::SouthEast />
                    <WindowResizeHandle surface=surface edge=ResizeEdge::SouthWest />
                </Show>
            </section>
        </Show>
    }
}

#[component]
fn WindowResizeHandle(surface: RwSignal<SurfaceState>, edge: ResizeEdge) -> impl IntoView {
    let class_name = format!("window-resize-handle {}", resize_edge_class(edge));

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        surface.update(|s| s.begin_resize(edge, pointer_from_pointer_event(&ev)));
    };
    let track_pointer = move |ev: web_sys::PointerEvent| {
        surface.update(|s| s.pointer_moved(pointer_from_pointer_event(&ev)));
    };
    let finish_pointer = move |_: web_sys::PointerEvent| {
        surface.update(|s| s.end_interaction());
    };

    view! {
        <div
            class=class_name
            aria-hidden="true"
            on:pointerdown=on_pointerdown
            on:pointermove=track_pointer
            on:pointerup=finish_pointer
            on:pointercancel=finish_pointer
        />
    }
}
