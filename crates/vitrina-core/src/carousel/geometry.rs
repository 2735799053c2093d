//! Pure position math for carousel tracking
//!
//! Operates on viewport-relative measurements only; no host access, no
//! state. The coordinator feeds it what the [`Surface`] reports.
//!
//! [`Surface`]: super::surface::Surface

use super::surface::{ItemBounds, ViewportBounds};

/// True when any part of the item lies inside the container viewport
#[inline]
pub fn is_visible(item: &ItemBounds, viewport: &ViewportBounds) -> bool {
    item.right() > viewport.left && item.left < viewport.right()
}

/// Index of the visible item whose center is closest to the viewport
/// center.
///
/// Falls back to 0 when nothing is visible (a zero-width or not-yet-laid-
/// out container), so callers always get a valid index for a non-empty
/// strip. Ties keep the earlier item.
pub fn closest_to_center(
    items: impl IntoIterator<Item = ItemBounds>,
    viewport: &ViewportBounds,
) -> usize {
    let center = viewport.center();

    let mut closest_index = 0;
    let mut closest_distance = f64::INFINITY;

    for (index, item) in items.into_iter().enumerate() {
        if !is_visible(&item, viewport) {
            continue;
        }
        let distance = (center - item.center()).abs();
        if distance < closest_distance {
            closest_distance = distance;
            closest_index = index;
        }
    }

    closest_index
}

/// Scroll offset that puts the item's center on the viewport's center,
/// floored at zero. `item.left` is viewport-relative, so the current
/// scroll offset is added back to get the content-space position.
#[inline]
pub fn center_offset(item: &ItemBounds, viewport: &ViewportBounds) -> f64 {
    let item_left = item.left - viewport.left + viewport.scroll;
    (item_left + item.width / 2.0 - viewport.width / 2.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(width: f64, scroll: f64) -> ViewportBounds {
        ViewportBounds {
            left: 0.0,
            width,
            scroll,
        }
    }

    fn item(left: f64, width: f64) -> ItemBounds {
        ItemBounds { left, width }
    }

    #[test]
    fn test_visibility() {
        let vp = viewport(360.0, 0.0);
        assert!(is_visible(&item(0.0, 300.0), &vp));
        assert!(is_visible(&item(-250.0, 300.0), &vp)); // right edge peeks in
        assert!(is_visible(&item(350.0, 300.0), &vp)); // left edge peeks in
        assert!(!is_visible(&item(-300.0, 300.0), &vp));
        assert!(!is_visible(&item(360.0, 300.0), &vp));
    }

    #[test]
    fn test_closest_picks_centered_item() {
        let vp = viewport(360.0, 0.0);
        let items = vec![item(-290.0, 300.0), item(30.0, 300.0), item(350.0, 300.0)];
        assert_eq!(closest_to_center(items, &vp), 1);
    }

    #[test]
    fn test_closest_skips_invisible_items() {
        let vp = viewport(360.0, 0.0);
        // The narrow item 0 is nearer to the center (187 vs 320) but sits
        // fully outside the viewport, so it must lose.
        let items = vec![item(-12.0, 10.0), item(350.0, 300.0)];
        assert_eq!(closest_to_center(items, &vp), 1);
    }

    #[test]
    fn test_closest_tie_keeps_earlier_item() {
        let vp = viewport(400.0, 0.0);
        // Centers at 150 and 250, both 50 away from the center at 200.
        let items = vec![item(100.0, 100.0), item(200.0, 100.0)];
        assert_eq!(closest_to_center(items, &vp), 0);
    }

    #[test]
    fn test_closest_defaults_to_zero_without_visible_items() {
        assert_eq!(closest_to_center(Vec::new(), &viewport(360.0, 0.0)), 0);

        // Zero-width viewport makes every visibility test fail.
        let items = vec![item(0.0, 300.0), item(320.0, 300.0)];
        assert_eq!(closest_to_center(items, &viewport(0.0, 0.0)), 0);
    }

    #[test]
    fn test_center_offset() {
        // Item sits 320 into the content, 300 wide, container 360 wide:
        // target = 320 + 150 - 180.
        let vp = viewport(360.0, 0.0);
        assert_eq!(center_offset(&item(320.0, 300.0), &vp), 290.0);
    }

    #[test]
    fn test_center_offset_accounts_for_current_scroll() {
        // Same item while the container is already scrolled by 290: the
        // viewport-relative left shrinks but the target stays put.
        let vp = viewport(360.0, 290.0);
        assert_eq!(center_offset(&item(30.0, 300.0), &vp), 290.0);
    }

    #[test]
    fn test_center_offset_floors_at_zero() {
        let vp = viewport(360.0, 0.0);
        assert_eq!(center_offset(&item(0.0, 300.0), &vp), 0.0);
    }
}
