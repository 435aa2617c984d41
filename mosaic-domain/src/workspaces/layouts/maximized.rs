//! The trivial strategy: every tileable covers the whole content area.

use mosaic_core::types::geometry::Rect;

use super::TilingLayout;
use crate::workspaces::core::Tileable;

pub const KEY: &str = "maximized";

#[derive(Debug, Clone, Copy, Default)]
pub struct MaximizedLayout;

impl TilingLayout for MaximizedLayout {
    fn key(&self) -> &'static str {
        KEY
    }

    fn icon(&self) -> &'static str {
        "view-fullscreen-symbolic"
    }

    fn apply(&self, tileables: &mut [Tileable], content: Rect<f64>) {
        for tileable in tileables {
            tileable.set_frame(content);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspaces::core::{ApplicationId, Tileable, WindowHandle, WindowIdentifier, WindowInfo};
    use pretty_assertions::assert_eq;

    fn window(n: u32) -> Tileable {
        Tileable::window(WindowInfo::new(
            WindowHandle::from(format!("win-{n}").as_str()),
            ApplicationId::from("org.mosaic.App.desktop"),
            WindowIdentifier::from(format!("xid:{n}").as_str()),
        ))
    }

    #[test]
    fn every_tileable_gets_the_full_content_rect() {
        let layout = MaximizedLayout;
        let content = Rect::from_coords(10.0, 20.0, 800.0, 600.0);
        let mut tileables = vec![window(1), window(2), Tileable::launcher()];

        layout.apply(&mut tileables, content);

        for tileable in &tileables {
            assert_eq!(tileable.frame(), content);
        }
    }

    #[test]
    fn empty_list_is_a_no_op() {
        let layout = MaximizedLayout;
        let mut tileables: Vec<Tileable> = Vec::new();
        layout.apply(&mut tileables, Rect::from_coords(0.0, 0.0, 100.0, 100.0));
        assert!(tileables.is_empty());
    }
}
