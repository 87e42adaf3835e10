use std::error::Error;
use std::fs;
use std::path::Path;

// Copies the trunk output into `static/dist` so it gets embedded.
fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = Path::new("static/dist");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        if out_dir.exists() {
            fs::remove_dir_all(out_dir)?;
        }
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )?;
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
    Ok(())
}
