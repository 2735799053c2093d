//! Carousel coordination for the landing page strips
//!
//! Keeps a horizontally scrollable item list, its indicator dots and its
//! prev/next controls in sync under three independent input sources:
//! touch swipes, control clicks and native scrolling. The coordinator is
//! host-independent; everything it needs from the page goes through the
//! [`Surface`] capability trait, and all timing is deadline-based so tests
//! never wait on real timers.
//!
//! # Architecture
//!
//! ## Atomic layer
//! - `config` - Timing constants, breakpoint and navigation variant
//! - `geometry` - Pure position math (closest-to-center, centering offset)
//! - `surface` - The capability trait and the measurement types
//!
//! ## Molecular layer
//! - `coordinator` - The per-strip state machine combining the atoms
//!
//! ## Page layer
//! - `page` - Which strips exist on the landing page and how they mount
//!
//! # Usage
//!
//! ```ignore
//! use std::time::Instant;
//! use vitrina_core::carousel::{Carousel, CarouselConfig, CarouselEvent};
//!
//! let mut carousel = Carousel::mount(surface, CarouselConfig::default(), Instant::now())
//!     .expect("strip has items");
//!
//! // Feed host events as they arrive, and tick from the host's timer.
//! carousel.handle(CarouselEvent::NextClick, Instant::now());
//! carousel.tick(Instant::now());
//! ```

// Atomic layer
pub mod config;
pub mod geometry;
pub mod surface;

// Molecular layer
pub mod coordinator;

// Page layer
pub mod page;

// Re-exports for convenient access
pub use config::{CarouselConfig, Navigation};
pub use coordinator::{Carousel, CarouselEvent};
pub use page::{mount_page, CarouselHooks, PageHost, PAGE_STRIPS};
pub use surface::{Control, ItemBounds, Surface, ViewportBounds, ACTIVE_CLASS, DISABLED_CLASS};
