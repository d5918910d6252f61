extern crate catmull_rom_chain;

use catmull_rom_chain::{CatmullRom, ControlPoint, SplineParameters};
use rand::Rng;

// 5 or 6 points with integer coordinates in [0, 12).
fn generate_random_points() -> Vec<ControlPoint> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(5..7);

    (0..length)
        .map(|_| {
            ControlPoint::new(
                rng.gen_range(0..12) as f64,
                rng.gen_range(0..12) as f64,
                rng.gen_range(0..12) as f64,
            )
        })
        .collect()
}

fn main() {
    env_logger::init();

    let control_points = generate_random_points();
    let spline = CatmullRom::new(SplineParameters::new(0.5, 100).unwrap());

    match spline.build_chain(&control_points) {
        Ok(curve) => {
            println!("kind;x;y;z");
            for p in control_points.iter() {
                println!("control;{:.2};{:.2};{:.2}", p.x, p.y, p.z);
            }
            for p in curve.iter() {
                println!("curve;{:.4};{:.4};{:.4}", p.x, p.y, p.z);
            }
        }
        // random integer points may repeat
        Err(error) => eprintln!("{}", error),
    }
}
