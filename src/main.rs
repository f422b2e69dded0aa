use std::error::Error;
use std::process;

use log::{error, info};

use quatern::config::Config;
use quatern::{Quaternion, QuatResult};

fn main() {
    env_logger::init();

    let config = match Config::new(std::env::args().skip(1).collect()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };
    info!("{config}");

    if let Err(err) = run(&config) {
        error!("{err}");
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let q = Quaternion::from_axis_angle(config.axis, config.angle)?.normalized()?;
    let rotated = q.rotate_vector(config.vector)?;
    println!("q = {q}");
    println!("v rotated = {rotated}");

    println!("Rotation matrix:");
    let rows: [[f64; 3]; 3] = q.to_rotation_matrix().into();
    for row in rows {
        println!("{row:?}");
    }

    let composite = compose()?;
    println!("Composite quaternion: {composite}");

    let back = Quaternion::from_rotation_matrix(composite.to_rotation_matrix());
    info!("matrix round trip: {back}");
    Ok(())
}

/// 30 degrees about x, then 45 degrees about y.
fn compose() -> QuatResult<Quaternion> {
    let q1 = Quaternion::from_axis_angle((1.0, 0.0, 0.0), 30f64.to_radians())?.normalized()?;
    let q2 = Quaternion::from_axis_angle((0.0, 1.0, 0.0), 45f64.to_radians())?.normalized()?;
    (q2 * q1).normalized()
}
