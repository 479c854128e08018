use std::error::Error;
use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn Error>> {
    // Builds outside of a git checkout still need VERGEN_GIT_DESCRIBE for cli::FULL_VERSION
    if EmitBuilder::builder()
        .fail_on_error()
        .git_describe(true, true, None)
        .emit()
        .is_err()
    {
        println!("cargo:rustc-env=VERGEN_GIT_DESCRIBE=unknown");
    }
    Ok(())
}
