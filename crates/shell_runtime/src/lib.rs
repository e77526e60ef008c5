//! Desktop window-manager runtime and shell surfaces for the portfolio site.

pub mod components;
pub mod icons;
pub mod model;
pub mod registry;
pub mod surface;
pub mod viewport;
pub mod window_manager;

mod runtime_context;

pub use components::{use_shell_runtime, DesktopShell, ShellProvider, ShellRuntimeContext};
pub use model::*;
pub use window_manager::{
    apply_window_action, WindowAction, WindowManagerError, WindowManagerState,
};
