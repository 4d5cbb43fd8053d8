use std::env;
use std::fs;

fn main() {
    // Bake the crash-reporting DSN in at compile time, "undefined" disables reporting
    let sentry_dsn = env::var("SENTRY_DSN").unwrap_or_else(|_| String::from("undefined"));
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = std::path::Path::new(&out_dir).join("sentry_dsn.rs");
    fs::write(
        &dest_path,
        format!(r#"pub const SENTRY_DSN: &str = "{}";"#, sentry_dsn),
    )
    .unwrap();
    println!("cargo:rerun-if-env-changed=SENTRY_DSN");
}
