use std::f64::consts::TAU;

use gridcast::{collide_with_grid, hit_cell, snap_to_grid, Cell, Grid, Ray, Trace, EPSILON};
use nalgebra::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn on_grid_line(p: Vector2<f64>) -> bool {
    (p.x - p.x.round()).abs() < 1e-6 || (p.y - p.y.round()).abs() < 1e-6
}

#[test]
fn snap_is_smallest_line_ahead() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let x: f64 = rng.gen_range(-20.0..20.0);

        let up = snap_to_grid(x, 1.0, EPSILON);
        assert_eq!(up.fract(), 0.0);
        assert!(up > x);
        assert!(up - 1.0 <= x + EPSILON);

        let down = snap_to_grid(x, -1.0, EPSILON);
        assert_eq!(down.fract(), 0.0);
        assert!(down < x);
        assert!(down + 1.0 >= x - EPSILON);

        assert_eq!(snap_to_grid(x, 0.0, EPSILON), x);
    }
}

#[test]
fn crossings_keep_moving_forward() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let angle = rng.gen_range(0.0..TAU);
        let direction = Vector2::new(angle.cos(), angle.sin());
        let origin = Vector2::new(rng.gen_range(1.0..15.0), rng.gen_range(1.0..15.0));

        let mut begin = origin;
        let mut end = origin + direction * rng.gen_range(0.1..2.0);
        let mut travelled = (end - origin).dot(&direction);
        for _ in 0..10 {
            let next = collide_with_grid(begin, end, EPSILON);
            assert!(on_grid_line(next), "{next:?} is not on a grid line");

            let along = (next - origin).dot(&direction);
            assert!(along > travelled, "stalled at {next:?} from {origin:?}");
            travelled = along;
            begin = end;
            end = next;
        }
    }
}

#[test]
fn random_rays_leave_the_grid() {
    let grid = Grid::default();
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..500 {
        let target = Vector2::new(rng.gen_range(0.0..16.0), rng.gen_range(0.0..16.0));
        let ray = Ray::new(grid.center(), target);
        if ray.direction().norm() < 1e-6 {
            continue;
        }

        let bounces: Vec<_> = Trace::new(grid, ray, EPSILON).take(100).collect();
        let last = bounces.last().expect("at least one bounce");
        assert!(last.exited, "ray towards {target:?} did not leave the grid");
        assert!(!grid.contains(last.cell));
        // Each bounce crosses at least one line, and the path spans at most
        // W + H + 2 of them before the cell check fails.
        assert!(bounces.len() <= 35, "{} bounces", bounces.len());
    }
}

#[test]
fn cursor_on_origin_stops() {
    let grid = Grid::default();
    let ray = Ray::new(grid.center(), grid.center());
    let bounces: Vec<_> = Trace::new(grid, ray, EPSILON).collect();
    assert_eq!(bounces.len(), 1);
    assert!(bounces[0].stalled);
    assert_eq!(bounces[0].cell, hit_cell(ray.origin, ray.target, EPSILON));
}

#[test]
fn corner_exit() {
    let grid = Grid::new(4, 4);
    let ray = Ray::new(Vector2::new(2.0, 2.0), Vector2::new(2.5, 2.5));
    let bounces: Vec<_> = Trace::new(grid, ray, EPSILON).collect();
    let last = bounces.last().expect("at least one bounce");
    assert_eq!(last.cell, Cell::new(5, 5));
    assert_eq!(last.ray.target, Vector2::new(5.0, 5.0));
}
