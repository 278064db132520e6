//! Build script for the Proyektor gateway.
//!
//! Copies the `.env.example` configuration template into the user's local data
//! directory (`<data_local_dir>/proyektor/.env.example`), next to where
//! `config::load_env` looks for the real `.env`.
//!
//! A missing template only produces a cargo warning; failing to create the
//! directory or write the file fails the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = std::path::PathBuf::from(std::env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    out_dir.push("proyektor");
    std::fs::create_dir_all(&out_dir)?;

    if env_example_path.is_file() {
        let contents = std::fs::read_to_string(&env_example_path)?;
        std::fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
