use std::fs;
use std::path::Path;

// Mirrors the compiled frontend into static/dist for include_dir embedding.
// Without a built bundle an empty directory is created instead, so the
// backend still compiles (and serves a bare 404 shell) when only the server
// toolchain is present.
fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    let _ = fs::remove_dir_all(out_dir);

    if dist_dir.exists() {
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new()
                .overwrite(true)
                .copy_inside(true),
        )
        .unwrap();
    } else {
        fs::create_dir_all(out_dir.join("dist")).unwrap();
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
