extern crate catmull_rom_chain;

use catmull_rom_chain::{evaluate_segment, ControlPoint};

fn main() {
    env_logger::init();

    let p0 = ControlPoint::new(0.0, 0.0, 0.0);
    let p1 = ControlPoint::new(1.0, 1.0, 0.0);
    let p2 = ControlPoint::new(1.5, 1.0, 0.0);
    let p3 = ControlPoint::new(8.0, 0.0, 0.0);

    let number_of_points = 20;

    println!("alpha;x;y;z");
    for alpha in [0.0, 0.5, 1.0] {
        let curve = evaluate_segment(&p0, &p1, &p2, &p3, alpha, number_of_points).unwrap();
        for p in curve.iter() {
            println!("{:.1};{:.4};{:.4};{:.4}", alpha, p.x, p.y, p.z);
        }
    }
}
