use std::path::PathBuf;

use clap::Parser;

/// Compiles a Shakespeare Programming Language play into a JVM class file.
#[derive(Debug, Parser)]
#[command(name = "splc", version, about)]
pub struct Cli {
    /// Path to the `.spl` source file.
    pub input: PathBuf,

    /// Directory the class file (and jar, with `--jar`) are written into.
    #[arg(long, default_value = "bin")]
    pub output_dir: PathBuf,

    /// Name of the generated class.
    #[arg(long, default_value = "SplProgram")]
    pub cls_name: String,

    /// `major_version` field of the class file.
    #[arg(long, default_value_t = 50)]
    pub cls_maj_version: u16,

    /// `minor_version` field of the class file.
    #[arg(long, default_value_t = 0)]
    pub cls_min_version: u16,

    /// Also package the class into a runnable jar.
    #[arg(long)]
    pub jar: bool,

    /// Emit debug-level tracing to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}
