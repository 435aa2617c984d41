//! Recursive binary-partition strategy parameterized by a split fraction.
//!
//! Tileables consume the content area in order: each one takes the
//! origin-side fraction of the current area along its longer axis, and the
//! remainder carries into the next iteration. The last tileable takes the
//! entire remaining area, so the partition never leaves a gap.

use std::fmt;
use std::sync::Arc;

use mosaic_core::types::geometry::Rect;

use super::TilingLayout;
use crate::workspaces::core::Tileable;
use crate::workspaces::settings::LayoutSettingsStore;

pub const KEY: &str = "ratio";

const RATIO_STEP: f64 = 0.05;
// Tuning hotkeys stop being honored outside this band; the hard clamp to
// [0, 1] still applies to whatever value the settings store hands us.
const SHRINK_FLOOR: f64 = 0.2;
const GROW_CEILING: f64 = 0.8;

pub struct RatioLayout {
    ratio: f64,
    gap: f64,
    settings: Arc<dyn LayoutSettingsStore>,
}

impl RatioLayout {
    pub fn new(settings: Arc<dyn LayoutSettingsStore>) -> Self {
        let ratio = settings.ratio().clamp(0.0, 1.0);
        let gap = settings.gap().max(0.0);
        RatioLayout { ratio, gap, settings }
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// The raw (gap-free) rectangle for position `index` of `len`.
    fn partition(&self, content: Rect<f64>, index: usize, len: usize) -> Rect<f64> {
        let mut area = content;
        for _ in 0..index {
            area = self.remainder(area);
        }
        if index == len - 1 {
            area
        } else {
            self.origin_side(area)
        }
    }

    /// The origin-side fraction of `area`, split along its longer axis.
    /// A square area splits horizontally.
    fn origin_side(&self, area: Rect<f64>) -> Rect<f64> {
        if area.width() >= area.height() {
            Rect::from_coords(area.x(), area.y(), area.width() * self.ratio, area.height())
        } else {
            Rect::from_coords(area.x(), area.y(), area.width(), area.height() * self.ratio)
        }
    }

    /// What is left of `area` after the origin side has been taken.
    fn remainder(&self, area: Rect<f64>) -> Rect<f64> {
        if area.width() >= area.height() {
            Rect::from_coords(
                area.x() + area.width() * self.ratio,
                area.y(),
                area.width() * (1.0 - self.ratio),
                area.height(),
            )
        } else {
            Rect::from_coords(
                area.x(),
                area.y() + area.height() * self.ratio,
                area.width(),
                area.height() * (1.0 - self.ratio),
            )
        }
    }
}

impl TilingLayout for RatioLayout {
    fn key(&self) -> &'static str {
        KEY
    }

    fn icon(&self) -> &'static str {
        "view-dual-symbolic"
    }

    fn apply(&self, tileables: &mut [Tileable], content: Rect<f64>) {
        let len = tileables.len();
        for (index, tileable) in tileables.iter_mut().enumerate() {
            let frame = self.partition(content, index, len).inset(self.gap);
            tileable.set_frame(frame);
        }
    }

    fn increase(&mut self) -> bool {
        if self.ratio > GROW_CEILING {
            return false;
        }
        self.ratio = (self.ratio + RATIO_STEP).min(1.0);
        self.settings.set_ratio(self.ratio);
        true
    }

    fn decrease(&mut self) -> bool {
        if self.ratio < SHRINK_FLOOR {
            return false;
        }
        self.ratio = (self.ratio - RATIO_STEP).max(0.0);
        self.settings.set_ratio(self.ratio);
        true
    }
}

impl fmt::Debug for RatioLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RatioLayout")
            .field("ratio", &self.ratio)
            .field("gap", &self.gap)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspaces::core::{ApplicationId, WindowHandle, WindowIdentifier, WindowInfo};
    use crate::workspaces::settings::MemoryLayoutSettings;
    use pretty_assertions::assert_eq;

    fn window(n: u32) -> Tileable {
        Tileable::window(WindowInfo::new(
            WindowHandle::from(format!("win-{n}").as_str()),
            ApplicationId::from("org.mosaic.App.desktop"),
            WindowIdentifier::from(format!("xid:{n}").as_str()),
        ))
    }

    fn layout_with(ratio: f64, gap: f64) -> RatioLayout {
        RatioLayout::new(Arc::new(MemoryLayoutSettings::with_values(ratio, gap)))
    }

    fn frames(tileables: &[Tileable]) -> Vec<Rect<f64>> {
        tileables.iter().map(|t| t.frame()).collect()
    }

    #[test]
    fn single_tileable_takes_the_full_content_rect() {
        for ratio in [0.1, 0.5, 0.9] {
            let layout = layout_with(ratio, 0.0);
            let content = Rect::from_coords(0.0, 0.0, 1920.0, 1080.0);
            let mut tileables = vec![window(1)];
            layout.apply(&mut tileables, content);
            assert_eq!(tileables[0].frame(), content);
        }
    }

    #[test]
    fn empty_list_assigns_nothing() {
        let layout = layout_with(0.5, 0.0);
        let mut tileables: Vec<Tileable> = Vec::new();
        layout.apply(&mut tileables, Rect::from_coords(0.0, 0.0, 100.0, 100.0));
        assert!(tileables.is_empty());
    }

    #[test]
    fn three_way_split_on_a_square_area() {
        let layout = layout_with(0.5, 0.0);
        let mut tileables = vec![window(1), window(2), window(3)];

        layout.apply(&mut tileables, Rect::from_coords(0.0, 0.0, 100.0, 100.0));

        // The square content splits horizontally first. The remaining
        // 50x100 area is taller than wide, so the second split is vertical
        // and the last tileable takes the leftover quarter.
        assert_eq!(
            frames(&tileables),
            vec![
                Rect::from_coords(0.0, 0.0, 50.0, 100.0),
                Rect::from_coords(50.0, 0.0, 50.0, 50.0),
                Rect::from_coords(50.0, 50.0, 50.0, 50.0),
            ]
        );
    }

    #[test]
    fn two_way_split_respects_the_ratio() {
        let layout = layout_with(0.75, 0.0);
        let mut tileables = vec![window(1), window(2)];

        layout.apply(&mut tileables, Rect::from_coords(0.0, 0.0, 200.0, 100.0));

        assert_eq!(
            frames(&tileables),
            vec![
                Rect::from_coords(0.0, 0.0, 150.0, 100.0),
                Rect::from_coords(150.0, 0.0, 50.0, 100.0),
            ]
        );
    }

    #[test]
    fn wide_remainder_keeps_splitting_horizontally() {
        let layout = layout_with(0.5, 0.0);
        let mut tileables = vec![window(1), window(2), window(3)];

        layout.apply(&mut tileables, Rect::from_coords(0.0, 0.0, 400.0, 100.0));

        // 400x100: both remainders stay wider than tall.
        assert_eq!(
            frames(&tileables),
            vec![
                Rect::from_coords(0.0, 0.0, 200.0, 100.0),
                Rect::from_coords(200.0, 0.0, 100.0, 100.0),
                Rect::from_coords(300.0, 0.0, 100.0, 100.0),
            ]
        );
    }

    #[test]
    fn tall_area_splits_vertically_first() {
        let layout = layout_with(0.5, 0.0);
        let mut tileables = vec![window(1), window(2)];

        layout.apply(&mut tileables, Rect::from_coords(0.0, 0.0, 100.0, 300.0));

        assert_eq!(
            frames(&tileables),
            vec![
                Rect::from_coords(0.0, 0.0, 100.0, 150.0),
                Rect::from_coords(0.0, 150.0, 100.0, 150.0),
            ]
        );
    }

    #[test]
    fn reapplying_after_reorder_follows_the_new_order() {
        let layout = layout_with(0.5, 0.0);
        let content = Rect::from_coords(0.0, 0.0, 400.0, 100.0);
        let mut tileables = vec![window(1), window(2)];

        layout.apply(&mut tileables, content);
        let first_frame = tileables[0].frame();

        tileables.swap(0, 1);
        layout.apply(&mut tileables, content);

        assert_eq!(tileables[1].frame(), Rect::from_coords(200.0, 0.0, 200.0, 100.0));
        assert_eq!(tileables[0].frame(), first_frame);
    }

    #[test]
    fn gap_shrinks_frames_inward() {
        let layout = layout_with(0.5, 10.0);
        let mut tileables = vec![window(1), window(2)];

        layout.apply(&mut tileables, Rect::from_coords(0.0, 0.0, 200.0, 100.0));

        assert_eq!(
            frames(&tileables),
            vec![
                Rect::from_coords(10.0, 10.0, 80.0, 80.0),
                Rect::from_coords(110.0, 10.0, 80.0, 80.0),
            ]
        );
    }

    #[test]
    fn gap_never_produces_negative_dimensions() {
        let layout = layout_with(0.5, 60.0);
        let mut tileables = vec![window(1), window(2)];

        layout.apply(&mut tileables, Rect::from_coords(0.0, 0.0, 200.0, 100.0));

        for tileable in &tileables {
            assert!(tileable.frame().width() >= 0.0);
            assert!(tileable.frame().height() >= 0.0);
        }
        assert_eq!(tileables[0].frame().height(), 0.0);
    }

    #[test]
    fn increase_steps_and_persists() {
        let settings = Arc::new(MemoryLayoutSettings::with_values(0.5, 0.0));
        let mut layout = RatioLayout::new(Arc::clone(&settings) as Arc<dyn LayoutSettingsStore>);

        assert!(layout.increase());
        assert!((layout.ratio() - 0.55).abs() < 1e-9);
        assert!((settings.ratio() - 0.55).abs() < 1e-9);
    }

    #[test]
    fn decrease_stops_below_the_soft_floor() {
        let mut layout = layout_with(0.5, 0.0);

        while layout.decrease() {}

        // The last honored step lands just under the floor, after which
        // further decreases are rejected without touching the ratio.
        let settled = layout.ratio();
        assert!(settled < 0.2 && settled >= 0.15 - 1e-9);
        assert!(!layout.decrease());
        assert_eq!(layout.ratio(), settled);
    }

    #[test]
    fn increase_stops_above_the_soft_ceiling() {
        let mut layout = layout_with(0.5, 0.0);

        while layout.increase() {}

        let settled = layout.ratio();
        assert!(settled > 0.8 && settled <= 0.85 + 1e-9);
        assert!(!layout.increase());
        assert_eq!(layout.ratio(), settled);
    }

    #[test]
    fn ratio_never_leaves_the_unit_interval() {
        let mut layout = layout_with(0.02, 0.0);
        assert!(!layout.decrease());
        assert!(layout.ratio() >= 0.0);

        let mut layout = layout_with(0.99, 0.0);
        assert!(!layout.increase());
        assert!(layout.ratio() <= 1.0);
    }

    #[test]
    fn rejected_tuning_leaves_geometry_untouched() {
        let mut layout = layout_with(0.1, 0.0);
        let content = Rect::from_coords(0.0, 0.0, 400.0, 100.0);
        let mut tileables = vec![window(1), window(2)];

        layout.apply(&mut tileables, content);
        let before = frames(&tileables);

        assert!(!layout.decrease());
        layout.apply(&mut tileables, content);
        assert_eq!(frames(&tileables), before);
    }

    #[test]
    fn out_of_range_persisted_ratio_is_clamped() {
        let layout = layout_with(3.0, 0.0);
        assert_eq!(layout.ratio(), 1.0);
    }
}
