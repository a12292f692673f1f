/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod planar_projection;

use self::planar_projection::*;

use geo_overlay::*;

fn nyc() -> GeoCoordinate {
    GeoCoordinate::new(40.748817, -73.985428)
}

#[test]
fn center_is_origin_of_anchor_rect() {
    let projection = PlanarProjection { zoom_scale: 2.0 };
    let circle = GeoCircle::new(GeoCoordinate::new(0.05, 0.1), 30.0);

    let geometry = ProjectionAdapter::new(&projection).screen_geometry(&circle, 100.0);

    assert!(geometry.center_point.x == 200.0 && geometry.center_point.y == 100.0);
    assert!(geometry.radius_pixels == 60.0);
    assert!(geometry.anchor_rect.x == 200.0 && geometry.anchor_rect.width == 120.0);
}

#[test]
fn bounding_rect_is_centered_on_circle() {
    let projection = PlanarProjection { zoom_scale: 1.0 };
    let circle = GeoCircle::new(GeoCoordinate::new(0.05, 0.05), 30.0);

    let geometry = ProjectionAdapter::new(&projection).screen_geometry(&circle, 100.0);
    let center = geometry.bounding_rect.center();

    assert!(center.x == geometry.center_point.x && center.y == geometry.center_point.y);
    assert!(geometry.bounding_rect.width == 60.0 && geometry.bounding_rect.height == 60.0);
}

#[test]
fn scale_multiplier_follows_radius() {
    let projection = PlanarProjection { zoom_scale: 1.0 };
    let adapter = ProjectionAdapter::new(&projection);

    let radii = [10.0, 100.0, 1000.0, 5000.0, 20000.0];
    let multipliers = radii
        .iter()
        .map(|radius| adapter.screen_geometry(&GeoCircle::new(nyc(), *radius), 100.0).scale_multiplier)
        .collect::<Vec<_>>();

    for pair in multipliers.windows(2) {
        assert!(pair[1] > pair[0]);
    }
    assert!(multipliers[2] == 10.0);
    assert!(multipliers[3] == 50.0);
}

#[test]
fn scale_multiplier_ignores_zoom() {
    let circle = GeoCircle::new(nyc(), 1000.0);
    let zoomed_out = WebMercatorProjection::new(MapRect::default(), 0.001);
    let zoomed_in = WebMercatorProjection::new(MapRect::default(), 1.0);

    let far = ProjectionAdapter::new(&zoomed_out).screen_geometry(&circle, 100.0);
    let near = ProjectionAdapter::new(&zoomed_in).screen_geometry(&circle, 100.0);

    assert!(far.scale_multiplier == near.scale_multiplier);
    assert!(near.radius_pixels > far.radius_pixels * 100.0);
}

#[test]
fn surface_scale_follows_zoom() {
    let circle = GeoCircle::new(GeoCoordinate::new(0.05, 0.1), 30.0);

    let mercator = ProjectionAdapter::new(&WebMercatorProjection::new(MapRect::default(), 0.25)).screen_geometry(&circle, 100.0);
    let planar = ProjectionAdapter::new(&PlanarProjection { zoom_scale: 2.0 }).screen_geometry(&circle, 100.0);

    assert!(mercator.surface_scale == 0.25);
    assert!(planar.surface_scale == 2.0);
    assert!(planar.surface_length(24.0) == 48.0);
}

#[test]
fn screen_radius_depends_on_radius_and_zoom_only() {
    let small = GeoCircle::new(nyc(), 1000.0);
    let large = small.with_radius(5000.0);

    let projection = WebMercatorProjection::new(MapRect::default(), 0.01);
    let compensated = WebMercatorProjection::new(MapRect::default(), 0.002);

    let small_geometry = ProjectionAdapter::new(&projection).screen_geometry(&small, 100.0);
    let large_geometry = ProjectionAdapter::new(&projection).screen_geometry(&large, 100.0);
    let compensated_geometry = ProjectionAdapter::new(&compensated).screen_geometry(&large, 100.0);

    // Same zoom: screen radius grows with the real-world radius
    let ratio = large_geometry.radius_pixels / small_geometry.radius_pixels;
    assert!((ratio - 5.0).abs() < 1e-4, "Ratio {}", ratio);

    // Zooming out by the same factor cancels it out, while the multiplier still reflects the real radius
    assert!((compensated_geometry.radius_pixels - small_geometry.radius_pixels).abs() < 1e-3);
    assert!(compensated_geometry.scale_multiplier == 5.0 * small_geometry.scale_multiplier);
}

#[test]
fn zero_radius_has_no_size() {
    let projection = PlanarProjection { zoom_scale: 1.0 };
    let geometry = ProjectionAdapter::new(&projection).screen_geometry(&GeoCircle::new(nyc(), 0.0), 100.0);

    assert!(geometry.radius_pixels == 0.0);
    assert!(geometry.bounding_rect.is_empty());
}

#[test]
fn mercator_maps_null_island_to_world_center() {
    let point = WebMercatorProjection::project_coordinate(GeoCoordinate::new(0.0, 0.0));

    assert!((point.x - MAP_WORLD_SIZE / 2.0).abs() < 1e-6);
    assert!((point.y - MAP_WORLD_SIZE / 2.0).abs() < 1e-6);
}

#[test]
fn mercator_north_is_up() {
    let north = WebMercatorProjection::project_coordinate(GeoCoordinate::new(50.0, 0.0));
    let south = WebMercatorProjection::project_coordinate(GeoCoordinate::new(-50.0, 0.0));

    assert!(north.y < south.y);
    assert!((north.y - (MAP_WORLD_SIZE - south.y)).abs() < 1e-3);
}

#[test]
fn mercator_stretches_towards_poles() {
    let equator = WebMercatorProjection::points_per_meter_at_latitude(0.0);
    let nyc_scale = WebMercatorProjection::points_per_meter_at_latitude(nyc().latitude);

    assert!((equator - MAP_WORLD_SIZE / EARTH_CIRCUMFERENCE).abs() < 1e-9);
    assert!((nyc_scale - equator / nyc().latitude.to_radians().cos()).abs() < 1e-9);
}

#[test]
fn mercator_clamps_polar_latitudes() {
    let pole = WebMercatorProjection::project_coordinate(GeoCoordinate::new(90.0, 0.0));
    let limit = WebMercatorProjection::project_coordinate(GeoCoordinate::new(MAX_MERCATOR_LATITUDE, 0.0));

    assert!(pole.y.is_finite());
    assert!(pole == limit);
    assert!(pole.y.abs() < 1.0);
}

#[test]
fn visible_rect_origin_is_surface_origin() {
    let visible = MapRect::new(1000.0, 2000.0, 500.0, 500.0);
    let projection = WebMercatorProjection::new(visible, 0.5);

    let rect = projection.map_rect_to_screen(MapRect::new(1100.0, 2200.0, 40.0, 60.0));

    assert!(rect.x == 50.0 && rect.y == 100.0);
    assert!(rect.width == 20.0 && rect.height == 30.0);
}
