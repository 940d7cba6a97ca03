//! Build-time helper for `todo-server`.
//!
//! Call it from `build.rs`:
//!
//! ```ignore
//! fn main() {
//!     todo_build::frontend("todo-frontend");
//! }
//! ```
//!
//! This will:
//! 1. Compile `../todo-frontend` for `wasm32-unknown-unknown` with the `hydrate` feature
//! 2. Run `wasm-bindgen` to generate JS bindings
//! 3. Copy `../todo-frontend/index.html`, or write a default one
//! 4. Set `TODO_FRONTEND_DIST` for `rust-embed`
//!
//! When `wasm-bindgen` is missing, the build fails, or `TODO_SKIP_FRONTEND`
//! is set, a placeholder page is staged instead and a cargo warning is
//! printed. The server then still builds and serves that page.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::{env, fs};

const WASM_TARGET: &str = "wasm32-unknown-unknown";

/// Env var that skips the WASM build.
pub const SKIP_ENV: &str = "TODO_SKIP_FRONTEND";

/// Marker replaced by the server with the page config.
/// Must match `todo_core::page::CONFIG_PLACEHOLDER`; todo-server tests compare the two.
pub const CONFIG_PLACEHOLDER: &str = "<!--TODO_PAGE_CONFIG-->";

/// Why the WASM bundle could not be produced.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("{} is set", SKIP_ENV)]
    Skipped,

    #[error(
        "failed to run {tool} ({source}). Install it with: cargo install wasm-bindgen-cli --version 0.2.104"
    )]
    ToolMissing {
        tool: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("{step} failed")]
    CommandFailed { step: &'static str },

    #[error("WASM file not found at {}", .0.display())]
    ArtifactMissing(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Names derived from the frontend crate name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendNames {
    /// `todo-frontend`
    pub crate_name: String,
    /// `todo_frontend`, the stem of the `.wasm` and `.js` files
    pub lib_name: String,
    /// `TODO_FRONTEND_DIST`, read by `#[folder = "$TODO_FRONTEND_DIST"]`
    pub dist_env: String,
}

impl FrontendNames {
    pub fn new(crate_name: &str) -> Self {
        let lib_name = crate_name.replace('-', "_");
        let dist_env = format!("{}_DIST", lib_name.to_uppercase());
        Self {
            crate_name: crate_name.to_string(),
            lib_name,
            dist_env,
        }
    }
}

/// Build the frontend crate next to the calling crate and stage its dist dir.
///
/// Never panics on a missing WASM toolchain; see the crate docs.
///
/// # Panics
///
/// Panics if `OUT_DIR` or `CARGO_MANIFEST_DIR` are unset (i.e. when not
/// called from a build script) or the dist directory cannot be written.
pub fn frontend(crate_name: &str) {
    let names = FrontendNames::new(crate_name);

    println!("cargo:rerun-if-changed=../{}/src/", names.crate_name);
    println!("cargo:rerun-if-changed=../{}/Cargo.toml", names.crate_name);
    println!("cargo:rerun-if-changed=../{}/index.html", names.crate_name);
    println!("cargo:rerun-if-changed=../todo-core/src/");
    println!("cargo:rerun-if-env-changed={SKIP_ENV}");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set"));
    let frontend_dir = manifest_dir.join("..").join(&names.crate_name);
    let dist_dir = out_dir.join(format!("{}-dist", names.crate_name));
    fs::create_dir_all(&dist_dir).expect("Failed to create dist directory");

    let staged = build_wasm(&names, &frontend_dir, &out_dir, &dist_dir)
        .and_then(|()| stage_index_html(&names, &frontend_dir, &dist_dir));

    if let Err(e) = staged {
        println!("cargo:warning=Frontend not built: {e}. Serving a placeholder page.");
        fs::write(dist_dir.join("index.html"), placeholder_html())
            .expect("Failed to write placeholder index.html");
    }

    println!("cargo:rustc-env={}={}", names.dist_env, dist_dir.display());
}

fn build_wasm(
    names: &FrontendNames,
    frontend_dir: &Path,
    out_dir: &Path,
    dist_dir: &Path,
) -> Result<(), BuildError> {
    if env::var_os(SKIP_ENV).is_some() {
        return Err(BuildError::Skipped);
    }

    // Check the tool first so a machine without the WASM tooling fails fast.
    Command::new("wasm-bindgen")
        .arg("--version")
        .output()
        .map_err(|source| BuildError::ToolMissing {
            tool: "wasm-bindgen",
            source,
        })?;

    // The frontend has its own Cargo.lock and target dir, so this does not
    // contend with the outer build for the workspace lock.
    let cargo = env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
    let target_dir = out_dir.join("frontend-target");
    println!("cargo:warning=Building {} WASM...", names.crate_name);
    let status = Command::new(cargo)
        .current_dir(frontend_dir)
        .env_remove("CARGO_ENCODED_RUSTFLAGS")
        .args(["build", "--lib", "--release", "--features", "hydrate", "--target"])
        .arg(WASM_TARGET)
        .arg("--target-dir")
        .arg(&target_dir)
        .status()
        .map_err(|source| BuildError::ToolMissing {
            tool: "cargo",
            source,
        })?;
    if !status.success() {
        return Err(BuildError::CommandFailed {
            step: "cargo build (wasm32)",
        });
    }

    let wasm_file = target_dir
        .join(WASM_TARGET)
        .join("release")
        .join(format!("{}.wasm", names.lib_name));
    if !wasm_file.exists() {
        return Err(BuildError::ArtifactMissing(wasm_file));
    }

    let status = Command::new("wasm-bindgen")
        .arg(&wasm_file)
        .arg("--out-dir")
        .arg(dist_dir)
        .args(["--target", "web", "--no-typescript"])
        .status()
        .map_err(|source| BuildError::ToolMissing {
            tool: "wasm-bindgen",
            source,
        })?;
    if !status.success() {
        return Err(BuildError::CommandFailed {
            step: "wasm-bindgen",
        });
    }

    Ok(())
}

fn stage_index_html(
    names: &FrontendNames,
    frontend_dir: &Path,
    dist_dir: &Path,
) -> Result<(), BuildError> {
    let html_src = frontend_dir.join("index.html");
    let html_dst = dist_dir.join("index.html");

    if html_src.exists() {
        fs::copy(&html_src, &html_dst)?;
    } else {
        fs::write(&html_dst, default_html(&names.lib_name))?;
    }
    Ok(())
}

/// Page that loads `{lib_name}.js` into `the_canvas_id`.
pub fn default_html(lib_name: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Todo App</title>
    <style>
        html, body {{ margin: 0; padding: 0; width: 100%; height: 100%; overflow: hidden; }}
        canvas {{ width: 100%; height: 100%; }}
        #loading_text {{ position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); font-family: sans-serif; font-size: 1.5em; color: #888; }}
    </style>
    {CONFIG_PLACEHOLDER}
</head>
<body>
    <p id="loading_text">Loading...</p>
    <canvas id="the_canvas_id"></canvas>
    <script type="module">
        import init from './{lib_name}.js';
        init();
    </script>
</body>
</html>"#
    )
}

/// Page served when the WASM bundle was not built.
pub fn placeholder_html() -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Todo App</title>
    {CONFIG_PLACEHOLDER}
</head>
<body>
    <p id="loading_text">The frontend was not built. Install wasm-bindgen-cli and the
    {WASM_TARGET} target, then rebuild todo-server.</p>
</body>
</html>"#
    )
}
