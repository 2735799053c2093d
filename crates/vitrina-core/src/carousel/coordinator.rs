//! Per-strip carousel state machine
//!
//! Reconciles the shown item across touch swipes, control clicks, dot
//! clicks and native scrolling. One instance owns one strip; instances
//! share nothing. The host delivers input as [`CarouselEvent`]s and calls
//! [`Carousel::tick`] from its timer; the coordinator itself never reads a
//! clock, which keeps every timing decision reproducible in tests.

use std::time::Instant;

use tracing::debug;

use super::config::{CarouselConfig, Navigation};
use super::geometry;
use super::surface::{Control, Surface};

/// Input events delivered by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    /// Previous-control activation
    PrevClick,
    /// Next-control activation
    NextClick,
    /// Activation of the dot at `index`
    DotClick(usize),
    /// Click on the item at `index`; `interactive` is true when the click
    /// landed on a link or button inside the item
    ItemClick { index: usize, interactive: bool },
    /// Horizontal screen coordinate where a touch began
    TouchStart { x: f64 },
    /// Horizontal screen coordinate where the touch ended
    TouchEnd { x: f64 },
    /// Native scroll of the strip's container
    Scroll,
}

/// Deadline kinds, ordered so simultaneous firings drain deterministically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Pending {
    Center,
    Debounce,
}

/// Coordinator for one carousel strip.
///
/// Construction goes through [`Carousel::mount`], which refuses an empty
/// strip. After that the invariant `current < item_count` holds for the
/// life of the instance.
pub struct Carousel<S: Surface> {
    surface: S,
    config: CarouselConfig,
    /// Index of the item shown as active
    current: usize,
    /// Whether native scrolls are tracked; decided once, from the page
    /// width at mount time
    track_scroll: bool,
    /// Where the current touch gesture started
    touch_start: Option<f64>,
    /// Deadline for the deferred initial centering
    center_at: Option<Instant>,
    /// Deadline for re-reading the position after a native scroll
    debounce_at: Option<Instant>,
    /// End of the window during which scroll feedback is suppressed
    /// because a programmatic scroll is assumed to still be moving
    settle_until: Option<Instant>,
}

impl<S: Surface> Carousel<S> {
    /// Build the coordinator for one strip.
    ///
    /// With two or more items the second one starts active, leaving one
    /// full item visible to the left as a hint that earlier content
    /// exists; a lone item starts active itself. The actual centering
    /// scroll is deferred by the configured delay so the host's layout can
    /// settle before geometry is measured.
    ///
    /// Returns `None` for a strip without items.
    pub fn mount(surface: S, config: CarouselConfig, now: Instant) -> Option<Self> {
        let count = surface.item_count();
        if count == 0 {
            debug!("Carousel has no items, skipping");
            return None;
        }

        let track_scroll = surface.page_width() <= config.mobile_breakpoint;
        let initial = if count >= 2 { 1 } else { 0 };

        let mut carousel = Self {
            surface,
            config,
            current: initial,
            track_scroll,
            touch_start: None,
            center_at: None,
            debounce_at: None,
            settle_until: None,
        };
        carousel.surface.ensure_dots(count);
        carousel.set_active(initial);
        carousel.center_at = Some(now + carousel.config.initial_center_delay());
        Some(carousel)
    }

    /// Index of the item currently shown as active
    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    /// True while a programmatic scroll is assumed to be in flight
    #[inline]
    pub fn is_settling(&self, now: Instant) -> bool {
        self.suppressed_at(now)
    }

    /// Get current configuration
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Borrow the host surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Borrow the host surface mutably
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Feed one host event into the state machine
    pub fn handle(&mut self, event: CarouselEvent, now: Instant) {
        match event {
            CarouselEvent::PrevClick => self.step(-1, now),
            CarouselEvent::NextClick => self.step(1, now),
            CarouselEvent::DotClick(index) => self.navigate_to(index as isize, now),
            CarouselEvent::ItemClick { index, interactive } => {
                // Click-to-center is a mobile affordance, checked per event
                // because the page can be resized after mount.
                if self.surface.page_width() > self.config.mobile_breakpoint {
                    return;
                }
                if interactive {
                    return;
                }
                self.navigate_to(index as isize, now);
            }
            CarouselEvent::TouchStart { x } => self.touch_start = Some(x),
            CarouselEvent::TouchEnd { x } => self.finish_touch(x, now),
            CarouselEvent::Scroll => self.note_scroll(now),
        }
    }

    /// Fire every deadline due at `now`, oldest first. Each action is
    /// evaluated at its own deadline, so outcomes do not depend on how
    /// often the host ticks.
    pub fn tick(&mut self, now: Instant) {
        loop {
            let due = [
                self.center_at.map(|t| (t, Pending::Center)),
                self.debounce_at.map(|t| (t, Pending::Debounce)),
            ]
            .into_iter()
            .flatten()
            .filter(|&(t, _)| t <= now)
            .min();

            let Some((at, pending)) = due else { break };
            match pending {
                Pending::Center => {
                    self.center_at = None;
                    self.navigate_to(self.current as isize, at);
                }
                Pending::Debounce => {
                    self.debounce_at = None;
                    // Re-check suppression as of the firing instant: the
                    // debounce may have been armed before a navigation
                    // opened the window, and must not fight it.
                    if self.suppressed_at(at) {
                        continue;
                    }
                    let resolved = self.resolve_current();
                    if resolved != self.current {
                        self.set_active(resolved);
                    }
                }
            }
        }

        if self.settle_until.is_some_and(|until| now >= until) {
            self.settle_until = None;
        }
    }

    /// Which item is actually centered right now, read from live geometry.
    ///
    /// This is the source of truth for "what is shown"; the stored
    /// `current` lags behind whenever the user scrolls manually.
    pub fn resolve_current(&self) -> usize {
        let viewport = self.surface.viewport();
        let items = (0..self.surface.item_count()).map(|i| self.surface.item(i));
        geometry::closest_to_center(items, &viewport)
    }

    /// One step from the live position. Resolved fresh because a manual
    /// scroll may have moved the strip without going through `set_active`.
    fn step(&mut self, delta: isize, now: Instant) {
        let current = self.resolve_current() as isize;
        self.navigate_to(current + delta, now);
    }

    fn finish_touch(&mut self, end: f64, now: Instant) {
        let Some(start) = self.touch_start.take() else {
            return;
        };
        let delta = start - end;
        if delta.abs() <= self.config.swipe_threshold {
            // A tap, not a swipe.
            return;
        }
        if delta > 0.0 {
            self.step(1, now);
        } else {
            self.step(-1, now);
        }
    }

    fn note_scroll(&mut self, now: Instant) {
        if !self.track_scroll || self.suppressed_at(now) {
            return;
        }
        // Each scroll event pushes the deadline out; only the settled
        // position matters.
        self.debounce_at = Some(now + self.config.debounce());
    }

    /// The only path that produces a programmatic scroll. Active-state
    /// feedback is applied immediately rather than when the scroll lands;
    /// a navigation issued while an earlier one is settling restarts the
    /// window and supersedes its scroll target.
    fn navigate_to(&mut self, target: isize, now: Instant) {
        let Some(index) = self.normalize(target) else {
            return;
        };
        self.settle_until = Some(now + self.config.settle());
        self.set_active(index);
        let offset = geometry::center_offset(&self.surface.item(index), &self.surface.viewport());
        self.surface.scroll_to(offset);
    }

    fn normalize(&self, index: isize) -> Option<usize> {
        let count = self.surface.item_count() as isize;
        match self.config.navigation {
            Navigation::Wrap => Some(index.rem_euclid(count) as usize),
            Navigation::Bounded => (0..count).contains(&index).then_some(index as usize),
        }
    }

    /// Make `index` the single active item and dot, and refresh the
    /// controls' enabled state.
    fn set_active(&mut self, index: usize) {
        let count = self.surface.item_count();
        if index >= count {
            return;
        }
        self.current = index;
        for i in 0..count {
            self.surface.set_item_active(i, i == index);
            self.surface.set_dot_active(i, i == index);
        }
        match self.config.navigation {
            Navigation::Wrap => {
                self.surface.set_control_enabled(Control::Prev, true);
                self.surface.set_control_enabled(Control::Next, true);
            }
            Navigation::Bounded => {
                self.surface.set_control_enabled(Control::Prev, index > 0);
                self.surface.set_control_enabled(Control::Next, index + 1 < count);
            }
        }
    }

    /// The suppression window is half-open: a deadline firing exactly at
    /// its end is no longer suppressed.
    fn suppressed_at(&self, at: Instant) -> bool {
        self.settle_until.is_some_and(|until| at < until)
    }
}
