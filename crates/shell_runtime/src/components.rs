//! Desktop shell UI composition and interaction surfaces.

mod dock;
mod menu_bar;
mod window;

use leptos::*;

use self::{dock::Dock, menu_bar::MenuBar, window::WindowSurface};

use crate::{
    model::{ApplicationId, PointerPosition, ResizeEdge},
    registry,
    window_manager::WindowAction,
};

pub use crate::runtime_context::{use_shell_runtime, ShellProvider, ShellRuntimeContext};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    use wasm_bindgen::JsCast;

    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn resize_edge_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::North => "edge-n",
        ResizeEdge::South => "edge-s",
        ResizeEdge::East => "edge-e",
        ResizeEdge::West => "edge-w",
        ResizeEdge::NorthEast => "edge-ne",
        ResizeEdge::NorthWest => "edge-nw",
        ResizeEdge::SouthEast => "edge-se",
        ResizeEdge::SouthWest => "edge-sw",
    }
}

#[component]
/// Renders the full desktop shell: menu bar, window layer, and dock.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;

    // The desktop lands on the portfolio notes window. Dispatch reads state
    // untracked, so this effect fires exactly once.
    create_effect(move |_| {
        if state.get_untracked().stack_order().is_empty() {
            runtime.dispatch_action(WindowAction::Open(ApplicationId::new(
                registry::NOTES_APP_ID,
            )));
        }
    });

    view! {
        <div id="desktop-shell-root" class="desktop-shell" tabindex="-1">
            <MenuBar />

            <div class="window-layer">
                <For
                    each=move || state.get().stack_order().to_vec()
                    key=|app_id| app_id.to_string()
                    let:app_id
                >
                    <WindowSurface app_id=app_id />
                </For>
            </div>

            <Dock />
        </div>
    }
}
