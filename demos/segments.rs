extern crate catmull_rom_chain;

use catmull_rom_chain::{CatmullRom, ControlPoint, Parameterization, SplineParameters};

fn main() {
    env_logger::init();

    let control_points = vec![
        ControlPoint::new(0.0, 0.0, 0.0),
        ControlPoint::new(2.0, 3.0, 1.0),
        ControlPoint::new(5.0, 4.0, 2.0),
        ControlPoint::new(7.0, 1.0, 2.0),
        ControlPoint::new(9.0, 2.0, 4.0),
        ControlPoint::new(11.0, 6.0, 3.0),
    ];

    let parameters = SplineParameters::with_parameterization(Parameterization::Chordal, 10).unwrap();
    let segments = CatmullRom::new(parameters).segments(&control_points).unwrap();

    println!("segment;x;y;z");
    for (i, segment) in segments.iter().enumerate() {
        for p in segment.iter() {
            println!("{};{:.3};{:.3};{:.3}", i, p.x, p.y, p.z);
        }
    }
}
