//! Landing-page wiring
//!
//! The page carries two independent carousel strips, products and
//! projects. This module holds the markup hooks each strip binds to and
//! mounts whichever of them the page actually contains.

use std::time::Instant;

use tracing::debug;

use super::config::CarouselConfig;
use super::coordinator::Carousel;
use super::surface::Surface;

/// Markup identifiers one strip binds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselHooks {
    /// Id of the scrollable container
    pub container: &'static str,
    /// Id of the dot indicator row
    pub dots: &'static str,
    /// Id of the previous control
    pub prev: &'static str,
    /// Id of the next control
    pub next: &'static str,
    /// Class naming the items inside the container
    pub item_class: &'static str,
}

/// The strips the landing page ships with
pub const PAGE_STRIPS: [CarouselHooks; 2] = [
    CarouselHooks {
        container: "productsCarousel",
        dots: "carouselDots",
        prev: "carouselPrev",
        next: "carouselNext",
        item_class: "carousel-item",
    },
    CarouselHooks {
        container: "projectsCarousel",
        dots: "projectsCarouselDots",
        prev: "projectsCarouselPrev",
        next: "projectsCarouselNext",
        item_class: "carousel-item",
    },
];

/// Resolves markup hooks to a concrete [`Surface`]
pub trait PageHost {
    type Surface: Surface;

    /// Bind the hooks to live markup; `None` when the container is absent
    fn resolve(&mut self, hooks: &CarouselHooks) -> Option<Self::Surface>;
}

/// Mount a coordinator for every strip present in the page.
///
/// Strips whose container is missing from the markup, or which contain no
/// items, are skipped without complaint; the rest of the page keeps
/// working.
pub fn mount_page<H: PageHost>(
    host: &mut H,
    config: &CarouselConfig,
    now: Instant,
) -> Vec<Carousel<H::Surface>> {
    PAGE_STRIPS
        .iter()
        .filter_map(|hooks| {
            let Some(surface) = host.resolve(hooks) else {
                debug!("No '{}' container in the page, skipping", hooks.container);
                return None;
            };
            Carousel::mount(surface, config.clone(), now)
        })
        .collect()
}
