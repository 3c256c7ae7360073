use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{exit, Command};

use clap::{Parser, Subcommand};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

const LAMBDA_PACKAGE: &str = "hello_record_lambda";
const LAMBDA_BIN: &str = "put_record_lambda";

#[derive(Parser)]
#[command(name = "xtask", about = "Task runner for the hello-record workspace")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run CI checks (fmt, clippy, tests)
    Ci,
    /// Build `put_record_lambda` and zip it as a `bootstrap` artifact
    LambdaPackage {
        /// Compilation target triple for the Lambda binary
        #[arg(long, default_value = "x86_64-unknown-linux-gnu")]
        target: String,
        /// Build without `--release`
        #[arg(long)]
        debug: bool,
        /// Directory receiving `put_record.zip`
        #[arg(long, default_value = "dist")]
        out_dir: PathBuf,
    },
}

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn run_cargo(args: &[&str]) {
    eprintln!("+ cargo {}", args.join(" "));
    let status = Command::new("cargo")
        .args(args)
        .status()
        .expect("failed to execute cargo");
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn lambda_package(target: &str, debug: bool, out_dir: &Path) {
    let installed = Command::new("rustup")
        .args(["target", "list", "--installed"])
        .output()
        .map(|output| String::from_utf8_lossy(&output.stdout).into_owned());
    match installed {
        Ok(list) if !list.lines().any(|line| line.trim() == target) => {
            panic!("rust target `{target}` is not installed; run `rustup target add {target}`")
        }
        Ok(_) => {}
        Err(error) => eprintln!("warning: skipping rustup target check ({error})"),
    }

    step("Build lambda binary");
    let mut args = vec!["build", "-p", LAMBDA_PACKAGE, "--bin", LAMBDA_BIN, "--target", target];
    if !debug {
        args.push("--release");
    }
    run_cargo(&args);

    step("Zip bootstrap");
    let profile_dir = if debug { "debug" } else { "release" };
    let binary_path = Path::new("target").join(target).join(profile_dir).join(LAMBDA_BIN);
    let binary = fs::read(&binary_path)
        .unwrap_or_else(|error| panic!("cannot read '{}': {error}", binary_path.display()));

    fs::create_dir_all(out_dir).expect("failed to create output directory");
    let zip_path = out_dir.join("put_record.zip");
    let mut zip = ZipWriter::new(fs::File::create(&zip_path).expect("failed to create zip"));
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o755);
    zip.start_file("bootstrap", options)
        .expect("failed to start bootstrap entry");
    zip.write_all(&binary).expect("failed to write bootstrap entry");
    zip.finish().expect("failed to finish zip");

    eprintln!("\nPackaged {}", zip_path.display());
}

fn ci() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"]);

    step("Test workspace");
    run_cargo(&["test", "--workspace"]);
}

fn main() {
    match Cli::parse().command {
        Commands::Ci => {
            ci();
            eprintln!("\nCI passed.");
        }
        Commands::LambdaPackage {
            target,
            debug,
            out_dir,
        } => lambda_package(&target, debug, &out_dir),
    }
}
