use std::{
    env,
    error::Error,
    fs,
    path::{Path, PathBuf},
};

const HEADER_NAME: &str = "hwcrypto.h";

fn main() -> Result<(), Box<dyn Error>> {
    let crate_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let include_dir = target_dir()?.join("include").join("hwcrypto");
    fs::create_dir_all(&include_dir)?;

    let bindings = cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("HWCRYPTO_FFI_H")
        .with_autogen_warning("/* Generated by cbindgen from hwcrypto-ffi. Do not edit. */")
        .with_cpp_compat(true)
        .with_documentation(true)
        .with_no_includes()
        .with_sys_include("stdbool.h")
        .with_sys_include("stdint.h")
        .generate()?;
    bindings.write_to_file(include_dir.join(HEADER_NAME));

    println!("cargo:rerun-if-changed=build.rs");
    for source in fs::read_dir(crate_dir.join("src"))? {
        println!("cargo:rerun-if-changed={}", source?.path().display());
    }
    println!("cargo:rerun-if-env-changed=CARGO_TARGET_DIR");
    Ok(())
}

/// `<target>/<profile>` holds the include directory next to the built library
fn target_dir() -> Result<PathBuf, Box<dyn Error>> {
    if let Ok(target) = env::var("CARGO_TARGET_DIR") {
        let profile = env::var("PROFILE")?;
        return Ok(Path::new(&target).join(profile));
    }
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    out_dir
        .ancestors()
        .nth(3)
        .map(Path::to_path_buf)
        .ok_or_else(|| format!("unexpected OUT_DIR layout: {}", out_dir.display()).into())
}
