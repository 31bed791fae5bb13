use hodgman::prelude::*;

/// Reference polygon pairs, all clockwise.
fn scenarios() -> Vec<(&'static str, Polygon<f64>, Polygon<f64>)> {
    vec![
        (
            "squares",
            Polygon::from_coords(&[(-1.0, 1.0), (1.0, 1.0), (1.0, -1.0), (-1.0, -1.0)]),
            Polygon::from_coords(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]),
        ),
        (
            "squares, rotated start vertices",
            Polygon::from_coords(&[(-1.0, -1.0), (-1.0, 1.0), (1.0, 1.0), (1.0, -1.0)]),
            Polygon::from_coords(&[(2.0, 0.0), (0.0, 0.0), (0.0, 2.0), (2.0, 2.0)]),
        ),
        (
            "triangles",
            Polygon::from_coords(&[(0.0, 0.0), (2.0, 1.0), (2.0, 0.0)]),
            Polygon::from_coords(&[(1.0, 0.5), (3.0, 1.5), (3.0, 0.5)]),
        ),
        (
            "star and square",
            Polygon::from_coords(&[
                (0.0, 3.0),
                (0.5, 0.5),
                (3.0, 0.0),
                (0.5, -0.5),
                (0.0, -3.0),
                (-0.5, -0.5),
                (-3.0, 0.0),
                (-0.5, 0.5),
            ]),
            Polygon::from_coords(&[(-2.0, -2.0), (-2.0, 2.0), (2.0, 2.0), (2.0, -2.0)]),
        ),
        (
            "disjoint squares",
            Polygon::from_coords(&[(-1.0, 1.0), (1.0, 1.0), (1.0, -1.0), (-1.0, -1.0)]),
            Polygon::from_coords(&[(5.0, 5.0), (5.0, 6.0), (6.0, 6.0), (6.0, 5.0)]),
        ),
    ]
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let clipper = PolygonClipper::new(true);

    for (name, subject, clip) in scenarios() {
        let result = clipper.clip(&subject, &clip);

        println!("{name}");
        println!("  subject area:  {:.4}", subject.area());
        println!("  clip area:     {:.4}", clip.area());
        println!("  overlap area:  {:.4}", result.area());
        println!("  iou:           {:.4}", iou(&subject, &clip));
        for p in result.vertices() {
            println!("    ({:.4}, {:.4})", p.x, p.y);
        }
    }
}
