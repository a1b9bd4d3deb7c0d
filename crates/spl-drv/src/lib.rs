//! Orchestrates the compiler phases behind the `splc` binary: parse, flatten,
//! lower, emit, write.

pub mod cli;

use std::fs;
use std::path::PathBuf;

use spl_class::ClassFile;
use spl_util::Result;
use tracing::info;

pub use cli::Cli;

/// Runs the full pipeline over already-read source text, stopping short of
/// writing anything to disk. Split out from [`run`] so tests can exercise it
/// without a filesystem.
pub fn compile_source(source: &str, cls_name: &str, major: u16, minor: u16) -> Result<ClassFile> {
    let ast = spl_ast::Parser::parse(source)?;
    let ir = spl_ir::flatten(&ast);
    spl_gen::Builder::new(cls_name, major, minor)?.build(&ir)
}

/// Reads `cli.input`, compiles it, and writes either a jar (`--jar`) or a
/// bare class file to `cli.output_dir` -- never both. Returns the path of
/// whichever artifact was written.
pub fn run(cli: &Cli) -> Result<PathBuf> {
    info!(input = %cli.input.display(), "reading source");
    let source = fs::read_to_string(&cli.input)?;

    let class = compile_source(&source, &cli.cls_name, cli.cls_maj_version, cli.cls_min_version)?;
    info!(class = %class.name, methods = class.methods.len(), "compiled");

    if cli.jar {
        let jar_path = spl_class::write_jar(&class, &cli.output_dir)?;
        info!(path = %jar_path.display(), "wrote jar");
        Ok(jar_path)
    } else {
        let class_path = spl_class::write_class_file(&class, &cli.output_dir)?;
        info!(path = %class_path.display(), "wrote class file");
        Ok(class_path)
    }
}
