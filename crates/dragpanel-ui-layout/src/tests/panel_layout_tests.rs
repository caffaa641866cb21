use super::{PanelGeometry, PanelLayout};
use dragpanel_ui_graphics::{EdgeInsets, Point, Rect, Size};

#[test]
fn width_spans_full_to_shrunk_for_any_ratio() {
    for ratio in [0.1f32, 0.25, 0.5, 0.75, 0.9] {
        let layout = PanelLayout::new(ratio, PanelLayout::VIDEO_ASPECT_RATIO);
        assert_eq!(layout.player_width(0.0, 1080.0), 1080.0);
        let shrunk = layout.player_width(1.0, 1080.0);
        assert!((shrunk - ratio * 1080.0).abs() < 1e-3, "ratio {ratio}: {shrunk}");
    }
}

#[test]
fn width_interpolates_linearly_and_height_keeps_aspect() {
    let layout = PanelLayout::default();
    let size = layout.player_size(0.5, 1600.0);
    assert_eq!(size.width, 1200.0);
    assert!((size.height - 675.0).abs() < 1e-3);
}

#[test]
fn offsets_outside_unit_range_are_saturated() {
    let layout = PanelLayout::default();
    assert_eq!(layout.player_width(-3.0, 1000.0), 1000.0);
    assert_eq!(layout.player_width(7.0, 1000.0), 500.0);
}

#[test]
fn description_is_right_anchored_under_panel() {
    let layout = PanelLayout::default();
    let padding = EdgeInsets::from_components(0.0, 0.0, 16.0, 0.0);
    let left = layout.anchored_left(1080.0, padding, 540.0);
    assert_eq!(left, 524.0);

    let player = Rect::from_origin_size(Point::new(left, 100.0), Size::new(540.0, 303.75));
    assert_eq!(layout.description_origin(player), Point::new(524.0, 403.75));
}

#[test]
fn geometry_converts_between_pixels_and_offsets() {
    let geometry = PanelGeometry {
        min_top: 20.0,
        vertical_range: 400.0,
        horizontal_range: 1620.0,
        min_width: 540.0,
        max_width: 1080.0,
    };
    assert_eq!(geometry.vertical_offset_for(20.0), 0.0);
    assert_eq!(geometry.vertical_offset_for(220.0), 0.5);
    assert_eq!(geometry.vertical_offset_for(5_000.0), 1.0);
    assert_eq!(geometry.top_for(1.0), 420.0);

    let rest = 1.0 / 1.5;
    let left = geometry.left_for(rest, 540.0);
    assert!((left - 540.0).abs() < 1e-3);
    assert!((geometry.horizontal_offset_for(left) - rest).abs() < 1e-6);
}

#[test]
fn degenerate_ranges_map_to_zero_offset() {
    let geometry = PanelGeometry::default();
    assert_eq!(geometry.vertical_offset_for(100.0), 0.0);
    assert_eq!(geometry.horizontal_offset_for(100.0), 0.0);
}
