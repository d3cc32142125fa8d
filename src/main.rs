//! Generates both enclosure halves and writes them to `stl/`.

use macrodial_case::parts::{body, cover};
use macrodial_case::solid::Solid;
use std::error::Error;
use std::fs;

fn export(solid: &Solid, name: &str) -> Result<(), Box<dyn Error>> {
    let bb = solid.bounding_box();
    log::info!(
        "{name}: {} polygons, envelope {:.2} x {:.2} x {:.2} mm",
        solid.polygons.len(),
        bb.size().x,
        bb.size().y,
        bb.size().z,
    );
    if !solid.is_watertight() {
        log::warn!("{name}: boundary is not watertight, check the mesh before printing");
    }

    let path = format!("stl/{name}.stl");
    fs::write(&path, solid.to_stl_binary()?)?;
    log::info!("wrote {path}");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    fs::create_dir_all("stl")?;

    export(&cover::generate()?, "board_cover")?;
    export(&body::generate()?, "main_body")?;

    Ok(())
}
