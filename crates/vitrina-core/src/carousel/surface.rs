//! Host capability interface for one carousel strip
//!
//! The coordinator never touches the page directly; it reads geometry and
//! applies effects through [`Surface`]. A real page binds this to its DOM
//! elements, tests bind it to synthetic measurements.

/// CSS class carried by the active item and the active dot
pub const ACTIVE_CLASS: &str = "active";

/// CSS class carried by a control that cannot move further
pub const DISABLED_CLASS: &str = "disabled";

/// Bounds of one item, relative to the page viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemBounds {
    /// Left edge
    pub left: f64,
    /// Rendered width
    pub width: f64,
}

impl ItemBounds {
    /// Right edge
    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Horizontal center
    #[inline]
    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Bounds and scroll state of the strip's scroll container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBounds {
    /// Left edge, relative to the page viewport
    pub left: f64,
    /// Visible width
    pub width: f64,
    /// Current scroll offset of the content
    pub scroll: f64,
}

impl ViewportBounds {
    /// Right edge
    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Horizontal center
    #[inline]
    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// The two navigation affordances of a strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Prev,
    Next,
}

/// Everything the coordinator needs from the rendering host.
///
/// Measurements are live: the host answers with the current layout on every
/// call, the coordinator never caches them. The item count, by contrast, is
/// fixed once the strip is mounted.
pub trait Surface {
    /// Number of items in the strip
    fn item_count(&self) -> usize;

    /// Live bounds of the scroll container
    fn viewport(&self) -> ViewportBounds;

    /// Live bounds of the item at `index`
    fn item(&self, index: usize) -> ItemBounds;

    /// Width of the whole page viewport, for breakpoint checks
    fn page_width(&self) -> f64;

    /// Request a smooth scroll of the container content to `offset`.
    /// The host clamps to its scrollable range.
    fn scroll_to(&mut self, offset: f64);

    /// Materialize one indicator dot per item, replacing any existing dots
    fn ensure_dots(&mut self, count: usize);

    /// Toggle [`ACTIVE_CLASS`] on the item at `index`
    fn set_item_active(&mut self, index: usize, active: bool);

    /// Toggle [`ACTIVE_CLASS`] on the dot at `index`
    fn set_dot_active(&mut self, index: usize, active: bool);

    /// Toggle [`DISABLED_CLASS`] on a control (cleared when `enabled`)
    fn set_control_enabled(&mut self, control: Control, enabled: bool);
}
