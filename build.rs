fn main() {
    // Stamp the build so the footer can show when the site was last published
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={build_time}");
    println!("cargo:rerun-if-changed=build.rs");
}
