//! Desktop viewport queries against the hosting browser window.

use crate::model::WindowRect;
use crate::surface::MENU_BAR_HEIGHT_PX;
#[cfg(target_arch = "wasm32")]
use crate::surface::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

/// Returns the desktop region available to window surfaces: the full browser
/// viewport minus the reserved menu-bar strip, pinned below it.
///
/// Outside a browser (native test builds) a fixed fallback viewport is
/// reported.
pub fn desktop_viewport_rect() -> WindowRect {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(1280);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(800);

            return WindowRect {
                x: 0,
                y: MENU_BAR_HEIGHT_PX,
                w: width.max(MIN_WINDOW_WIDTH),
                h: (height - MENU_BAR_HEIGHT_PX).max(MIN_WINDOW_HEIGHT),
            };
        }
    }

    WindowRect {
        x: 0,
        y: MENU_BAR_HEIGHT_PX,
        w: 1280,
        h: 800 - MENU_BAR_HEIGHT_PX,
    }
}
