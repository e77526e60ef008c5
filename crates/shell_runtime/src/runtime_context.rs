//! Runtime provider and context wiring for the desktop shell.
//!
//! Owns the single reactive [`WindowManagerState`] instance for the session
//! and the dispatch callback every shell surface uses to mutate it. UI
//! composition stays in [`crate::components`].

use leptos::*;

use crate::window_manager::{apply_window_action, WindowAction, WindowManagerState};

#[derive(Clone, Copy)]
/// Leptos context for reading window-manager state and dispatching
/// [`WindowAction`] values.
pub struct ShellRuntimeContext {
    /// Reactive window-manager state signal.
    pub state: RwSignal<WindowManagerState>,
    /// Window-action dispatch callback.
    pub dispatch: Callback<WindowAction>,
}

impl ShellRuntimeContext {
    /// Dispatches a window action through the runtime context callback.
    pub fn dispatch_action(&self, action: WindowAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`ShellRuntimeContext`] to descendant components.
pub fn ShellProvider(children: Children) -> impl IntoView {
    let state = create_rw_signal(WindowManagerState::default());

    let dispatch = Callback::new(move |action: WindowAction| {
        let mut manager = state.get_untracked();
        let previous = manager.clone();
        match apply_window_action(&mut manager, action) {
            Ok(()) => {
                if manager != previous {
                    state.set(manager);
                }
            }
            Err(err) => logging::warn!("window action ignored: {err}"),
        }
    });

    provide_context(ShellRuntimeContext { state, dispatch });

    children().into_view()
}

/// Returns the current [`ShellRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`ShellProvider`].
pub fn use_shell_runtime() -> ShellRuntimeContext {
    use_context::<ShellRuntimeContext>().expect("ShellRuntimeContext not provided")
}
