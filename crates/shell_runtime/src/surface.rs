//! Geometry and pointer-interaction state for one window surface.
//!
//! A surface owns only its rectangle and the maximize-restore snapshot; which
//! windows exist, which is focused, and the minimize/maximize flags live in
//! [`crate::window_manager`]. Drag and resize are modeled as an explicit
//! idle → dragging/resizing → idle machine driven by discrete pointer events.

use serde::{Deserialize, Serialize};

use crate::model::{PointerPosition, ResizeEdge, WindowRect};

/// Minimum allowed window width.
pub const MIN_WINDOW_WIDTH: i32 = 240;
/// Minimum allowed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 160;
/// Height reserved for the menu bar at the top of the desktop.
pub const MENU_BAR_HEIGHT_PX: i32 = 28;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// An in-progress title-bar drag.
pub struct DragSession {
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// An in-progress edge/corner resize.
pub struct ResizeSession {
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Current pointer-interaction phase of a surface.
pub enum SurfaceInteraction {
    #[default]
    Idle,
    Dragging(DragSession),
    Resizing(ResizeSession),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Geometry state owned by a single window surface.
pub struct SurfaceState {
    rect: WindowRect,
    restore_rect: Option<WindowRect>,
    interaction: SurfaceInteraction,
}

impl SurfaceState {
    pub fn new(rect: WindowRect) -> Self {
        Self {
            rect,
            restore_rect: None,
            interaction: SurfaceInteraction::Idle,
        }
    }

    pub fn rect(&self) -> WindowRect {
        self.rect
    }

    pub fn interaction(&self) -> SurfaceInteraction {
        self.interaction
    }

    /// Starts a title-bar drag. Ignored while another interaction is running.
    pub fn begin_drag(&mut self, pointer: PointerPosition) {
        if matches!(self.interaction, SurfaceInteraction::Idle) {
            self.interaction = SurfaceInteraction::Dragging(DragSession {
                pointer_start: pointer,
                rect_start: self.rect,
            });
        }
    }

    /// Starts an edge/corner resize. Ignored while another interaction is
    /// running.
    pub fn begin_resize(&mut self, edge: ResizeEdge, pointer: PointerPosition) {
        if matches!(self.interaction, SurfaceInteraction::Idle) {
            self.interaction = SurfaceInteraction::Resizing(ResizeSession {
                edge,
                pointer_start: pointer,
                rect_start: self.rect,
            });
        }
    }

    /// Applies one pointer-move delta to the active interaction, if any.
    pub fn pointer_moved(&mut self, pointer: PointerPosition) {
        match self.interaction {
            SurfaceInteraction::Idle => {}
            SurfaceInteraction::Dragging(session) => {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                self.rect = session.rect_start.offset(dx, dy);
            }
            SurfaceInteraction::Resizing(session) => {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                self.rect = resize_rect(session.rect_start, session.edge, dx, dy)
                    .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
            }
        }
    }

    /// Ends the active interaction and returns the machine to idle.
    pub fn end_interaction(&mut self) {
        self.interaction = SurfaceInteraction::Idle;
    }

    /// Snapshots the current rectangle and fills the viewport.
    pub fn enter_maximized(&mut self, viewport: WindowRect) {
        self.interaction = SurfaceInteraction::Idle;
        self.restore_rect = Some(self.rect);
        self.rect = viewport.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
    }

    /// Restores the pre-maximize rectangle, consuming the snapshot.
    pub fn exit_maximized(&mut self) {
        if let Some(rect) = self.restore_rect.take() {
            self.rect = rect;
        }
    }

    /// Re-derives the fill rectangle after the viewport itself resized while
    /// the surface is maximized. The restore snapshot is left untouched.
    pub fn viewport_resized(&mut self, viewport: WindowRect) {
        self.rect = viewport.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
    }
}

/// Applies resize deltas for a given edge/corner drag.
pub fn resize_rect(start: WindowRect, edge: ResizeEdge, dx: i32, dy: i32) -> WindowRect {
    match edge {
        ResizeEdge::East => WindowRect {
            w: start.w + dx,
            ..start
        },
        ResizeEdge::West => WindowRect {
            x: start.x + dx,
            w: start.w - dx,
            ..start
        },
        ResizeEdge::South => WindowRect {
            h: start.h + dy,
            ..start
        },
        ResizeEdge::North => WindowRect {
            y: start.y + dy,
            h: start.h - dy,
            ..start
        },
        ResizeEdge::NorthEast => WindowRect {
            y: start.y + dy,
            h: start.h - dy,
            w: start.w + dx,
            ..start
        },
        ResizeEdge::NorthWest => WindowRect {
            x: start.x + dx,
            y: start.y + dy,
            w: start.w - dx,
            h: start.h - dy,
        },
        ResizeEdge::SouthEast => WindowRect {
            w: start.w + dx,
            h: start.h + dy,
            ..start
        },
        ResizeEdge::SouthWest => WindowRect {
            x: start.x + dx,
            w: start.w - dx,
            h: start.h + dy,
            ..start
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rect(x: i32, y: i32, w: i32, h: i32) -> WindowRect {
        WindowRect { x, y, w, h }
    }

    fn point(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    #[test]
    fn drag_applies_pointer_deltas_to_position_only() {
        let mut surface = SurfaceState::new(rect(40, 60, 400, 300));

        surface.begin_drag(point(100, 100));
        surface.pointer_moved(point(125, 90));

        assert_eq!(surface.rect(), rect(65, 50, 400, 300));

        surface.pointer_moved(point(80, 140));
        assert_eq!(surface.rect(), rect(20, 100, 400, 300));

        surface.end_interaction();
        assert_eq!(surface.interaction(), SurfaceInteraction::Idle);
    }

    #[test]
    fn pointer_moves_while_idle_do_nothing() {
        let mut surface = SurfaceState::new(rect(40, 60, 400, 300));
        surface.pointer_moved(point(500, 500));
        assert_eq!(surface.rect(), rect(40, 60, 400, 300));
    }

    #[test]
    fn begin_drag_is_ignored_while_resizing() {
        let mut surface = SurfaceState::new(rect(0, 0, 400, 300));
        surface.begin_resize(ResizeEdge::East, point(400, 150));

        surface.begin_drag(point(10, 10));

        assert!(matches!(
            surface.interaction(),
            SurfaceInteraction::Resizing(_)
        ));
    }

    #[test]
    fn begin_resize_is_ignored_while_dragging() {
        let mut surface = SurfaceState::new(rect(0, 0, 400, 300));
        surface.begin_drag(point(10, 10));

        surface.begin_resize(ResizeEdge::South, point(200, 300));

        assert!(matches!(
            surface.interaction(),
            SurfaceInteraction::Dragging(_)
        ));
    }

    #[test]
    fn east_resize_grows_width() {
        let mut surface = SurfaceState::new(rect(10, 10, 400, 300));
        surface.begin_resize(ResizeEdge::East, point(410, 150));
        surface.pointer_moved(point(470, 150));
        assert_eq!(surface.rect(), rect(10, 10, 460, 300));
    }

    #[test]
    fn north_west_resize_moves_origin_and_shrinks() {
        let mut surface = SurfaceState::new(rect(100, 100, 400, 300));
        surface.begin_resize(ResizeEdge::NorthWest, point(100, 100));
        surface.pointer_moved(point(130, 120));
        assert_eq!(surface.rect(), rect(130, 120, 370, 280));
    }

    #[test]
    fn resize_clamps_to_minimum_dimensions() {
        let mut surface = SurfaceState::new(rect(100, 100, 400, 300));
        surface.begin_resize(ResizeEdge::SouthEast, point(500, 400));
        surface.pointer_moved(point(-600, -500));

        let clamped = surface.rect();
        assert_eq!(clamped.w, MIN_WINDOW_WIDTH);
        assert_eq!(clamped.h, MIN_WINDOW_HEIGHT);
    }

    #[test]
    fn maximize_round_trip_restores_the_snapshot() {
        let mut surface = SurfaceState::new(rect(10, 10, 400, 300));
        let viewport = rect(0, MENU_BAR_HEIGHT_PX, 1280, 800 - MENU_BAR_HEIGHT_PX);

        surface.enter_maximized(viewport);
        assert_eq!(surface.rect(), viewport);

        surface.exit_maximized();
        assert_eq!(surface.rect(), rect(10, 10, 400, 300));
    }

    #[test]
    fn viewport_resize_while_maximized_tracks_the_new_viewport() {
        let mut surface = SurfaceState::new(rect(10, 10, 400, 300));
        surface.enter_maximized(rect(0, MENU_BAR_HEIGHT_PX, 1280, 772));

        surface.viewport_resized(rect(0, MENU_BAR_HEIGHT_PX, 1024, 740));
        assert_eq!(surface.rect(), rect(0, MENU_BAR_HEIGHT_PX, 1024, 740));

        // The original snapshot still wins on restore.
        surface.exit_maximized();
        assert_eq!(surface.rect(), rect(10, 10, 400, 300));
    }

    #[test]
    fn entering_maximized_cancels_an_active_drag() {
        let mut surface = SurfaceState::new(rect(10, 10, 400, 300));
        surface.begin_drag(point(50, 50));

        surface.enter_maximized(rect(0, MENU_BAR_HEIGHT_PX, 1280, 772));

        assert_eq!(surface.interaction(), SurfaceInteraction::Idle);
    }

    #[test]
    fn exit_without_snapshot_keeps_current_rect() {
        let mut surface = SurfaceState::new(rect(10, 10, 400, 300));
        surface.exit_maximized();
        assert_eq!(surface.rect(), rect(10, 10, 400, 300));
    }
}
