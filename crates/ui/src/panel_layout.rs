//! Transient state of the stats panel and the geometry derived from it.
//!
//! The host owns orientation, position and visibility; `PanelLayout` mirrors
//! them and adds what only the UI knows about (hover, drag, edit mode). Drag
//! offsets stay local until the drag stops, then the snapped position is
//! handed back for `setPanelPosition`.

use bevy::log::debug;
use host::config::PANEL_GRID_SNAP;
use host::mod_settings::PanelOrientation;
use host::ui_system::PanelPosition;

/// Direction the stat icons flow in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAxis {
    Row,
    Column,
}

/// Panel edge carrying a drag handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleEdge {
    Top,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    origin: PanelPosition,
    dx: f32,
    dy: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelLayout {
    pub orientation: PanelOrientation,
    pub visible: bool,
    pub in_photo_mode: bool,
    pub in_editor: bool,
    pub editing: bool,
    pub hovering: bool,
    position: PanelPosition,
    drag: Option<DragState>,
    observed_orientation: Option<PanelOrientation>,
}

/// Round both axes to the nearest multiple of `grid`.
pub fn snap_to_grid(position: PanelPosition, grid: f32) -> PanelPosition {
    if grid <= 0.0 {
        return position;
    }
    PanelPosition::new(
        (position.x / grid).round() * grid,
        (position.y / grid).round() * grid,
    )
}

impl PanelLayout {
    /// The panel is drawn only when open and outside photo mode and editors.
    pub fn should_render(&self) -> bool {
        self.visible && !self.in_photo_mode && !self.in_editor
    }

    pub fn handles_visible(&self) -> bool {
        self.is_dragging() || self.hovering || self.editing
    }

    pub fn axis(&self) -> PanelAxis {
        match self.orientation {
            PanelOrientation::Horizontal => PanelAxis::Row,
            PanelOrientation::Vertical => PanelAxis::Column,
        }
    }

    pub fn handle_edges(&self) -> &'static [HandleEdge] {
        match self.orientation {
            PanelOrientation::Horizontal => &[HandleEdge::Top],
            PanelOrientation::Vertical => &[HandleEdge::Left, HandleEdge::Right],
        }
    }

    /// Offset to draw at: the live drag position while dragging.
    pub fn position(&self) -> PanelPosition {
        match self.drag {
            Some(drag) => PanelPosition::new(drag.origin.x + drag.dx, drag.origin.y + drag.dy),
            None => self.position,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    // -------------------------------------------------------------------------
    // Host mirror
    // -------------------------------------------------------------------------

    /// Take a host-pushed position. Ignored mid-drag; the drag's own commit
    /// will win. Returns whether the position was adopted.
    pub fn adopt_host_position(&mut self, position: PanelPosition) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.position = position;
        true
    }

    /// Record the host orientation. Returns `true` exactly once per change,
    /// when the caller should ask the host to reset the position. The first
    /// observation only establishes the baseline.
    pub fn observe_orientation(&mut self, orientation: PanelOrientation) -> bool {
        self.orientation = orientation;
        let previous = self.observed_orientation.replace(orientation);
        match previous {
            Some(previous) if previous != orientation => {
                debug!(
                    "[StatsPanel] orientation {} -> {}, resetting position",
                    previous, orientation
                );
                true
            }
            _ => false,
        }
    }

    // -------------------------------------------------------------------------
    // Interaction
    // -------------------------------------------------------------------------

    pub fn start_drag(&mut self) {
        if self.drag.is_none() {
            self.drag = Some(DragState {
                origin: self.position,
                dx: 0.0,
                dy: 0.0,
            });
        }
    }

    pub fn drag_by(&mut self, dx: f32, dy: f32) {
        if let Some(drag) = &mut self.drag {
            drag.dx += dx;
            drag.dy += dy;
        }
    }

    /// Finish a drag. Returns the grid-snapped position to commit, which is
    /// also kept locally until the host echoes it.
    pub fn stop_drag(&mut self) -> Option<PanelPosition> {
        self.drag?;
        let snapped = snap_to_grid(self.position(), PANEL_GRID_SNAP);
        self.drag = None;
        self.position = snapped;
        Some(snapped)
    }

    /// Flip edit mode. Leaving edit mode is refused while every stat is
    /// hidden, since the panel would have nothing left to show.
    pub fn toggle_editing(&mut self, all_hidden: bool) -> bool {
        if self.editing && all_hidden {
            debug!("[StatsPanel] keeping edit mode, all stats are hidden");
            return false;
        }
        self.editing = !self.editing;
        true
    }
}
