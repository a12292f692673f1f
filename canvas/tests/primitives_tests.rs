/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use geo_overlay_canvas::*;

fn path_points(drawing: &[Draw]) -> Vec<(f32, f32)> {
    drawing
        .iter()
        .filter_map(|draw| match draw {
            Draw::Path(PathOp::Move(x, y)) => Some((*x, *y)),
            Draw::Path(PathOp::BezierCurve(_, (x, y))) => Some((*x, *y)),
            _ => None,
        })
        .collect()
}

#[test]
fn circle_is_a_closed_bezier_subpath() {
    let mut drawing: Vec<Draw> = vec![];
    drawing.circle(100.0, 50.0, 20.0);

    assert!(matches!(drawing.first(), Some(Draw::Path(PathOp::Move(_, _)))));
    assert!(matches!(drawing.last(), Some(Draw::Path(PathOp::ClosePath))));
    assert!(drawing.iter().filter(|draw| matches!(draw, Draw::Path(PathOp::BezierCurve(_, _)))).count() >= 4);
}

#[test]
fn circle_points_lie_on_the_radius() {
    let mut drawing: Vec<Draw> = vec![];
    drawing.circle(100.0, 50.0, 20.0);

    for (x, y) in path_points(&drawing) {
        let distance = ((x - 100.0).powi(2) + (y - 50.0).powi(2)).sqrt();
        assert!((distance - 20.0).abs() < 0.01, "Point ({}, {}) is {} from the center", x, y, distance);
    }
}

#[test]
fn oval_in_square_matches_circle() {
    let mut circle: Vec<Draw> = vec![];
    let mut oval: Vec<Draw> = vec![];

    circle.circle(30.0, 40.0, 10.0);
    oval.oval(Rect::new(20.0, 30.0, 20.0, 20.0));

    let circle_points = path_points(&circle);
    let oval_points = path_points(&oval);

    assert!(circle_points.len() == oval_points.len());
    for ((cx, cy), (ox, oy)) in circle_points.into_iter().zip(oval_points) {
        assert!((cx - ox).abs() < 0.001 && (cy - oy).abs() < 0.001);
    }
}

#[test]
fn oval_stretches_to_fill_its_bounds() {
    let mut drawing: Vec<Draw> = vec![];
    drawing.oval(Rect::new(0.0, 0.0, 40.0, 10.0));

    let points = path_points(&drawing);
    let max_x = points.iter().map(|(x, _)| *x).fold(f32::MIN, f32::max);
    let min_x = points.iter().map(|(x, _)| *x).fold(f32::MAX, f32::min);
    let max_y = points.iter().map(|(_, y)| *y).fold(f32::MIN, f32::max);
    let min_y = points.iter().map(|(_, y)| *y).fold(f32::MAX, f32::min);

    assert!((max_x - 40.0).abs() < 0.01 && min_x.abs() < 0.01);
    assert!((max_y - 10.0).abs() < 0.01 && min_y.abs() < 0.01);
}

#[test]
fn rect_visits_each_corner() {
    let mut drawing: Vec<Draw> = vec![];
    drawing.rect(Rect::new(1.0, 2.0, 3.0, 4.0));

    assert!(
        drawing
            == vec![
                Draw::Path(PathOp::Move(1.0, 2.0)),
                Draw::Path(PathOp::Line(4.0, 2.0)),
                Draw::Path(PathOp::Line(4.0, 6.0)),
                Draw::Path(PathOp::Line(1.0, 6.0)),
                Draw::Path(PathOp::ClosePath),
            ]
    );
}
