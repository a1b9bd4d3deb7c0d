use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use spl_util::{CompilerError, Result};

use crate::class::ClassFile;
use crate::emitter::{class_file_name, emit};

/// Writes the serialized class to `output_dir/<name>.class`.
///
/// Writes to a temporary sibling file first and renames it into place so a
/// failed write never leaves a partial `.class` file behind (§7).
pub fn write_class_file(class: &ClassFile, output_dir: &Path) -> Result<PathBuf> {
    let bytes = emit(class)?;
    fs::create_dir_all(output_dir)?;

    let final_path = output_dir.join(class_file_name(class));
    let tmp_path = output_dir.join(format!("{}.tmp", class_file_name(class)));

    let write_result = (|| -> Result<()> {
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(&bytes)?;
        file.sync_all()?;
        Ok(())
    })();

    match write_result {
        Ok(()) => {
            fs::rename(&tmp_path, &final_path)?;
            Ok(final_path)
        }
        Err(err) => {
            let _ = fs::remove_file(&tmp_path);
            Err(err)
        }
    }
}

/// Packages a compiled class into a minimal jar: the class file at the
/// archive root and again under a lowercased directory named after the
/// class, plus a manifest declaring `Main-Class`.
pub fn write_jar(class: &ClassFile, output_dir: &Path) -> Result<PathBuf> {
    let bytes = emit(class)?;
    fs::create_dir_all(output_dir)?;

    let jar_path = output_dir.join(format!("{}.jar", class.name));
    let tmp_path = output_dir.join(format!("{}.jar.tmp", class.name));

    let write_result = (|| -> Result<()> {
        let file = fs::File::create(&tmp_path)?;
        let mut zip = zip::ZipWriter::new(file);
        let options = zip::write::FileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);

        zip.start_file("META-INF/MANIFEST.MF", options)
            .map_err(jar_error)?;
        let manifest = format!(
            "Manifest-Version: 1.0\r\nMain-Class: {}\r\n",
            class.name
        );
        zip.write_all(manifest.as_bytes())?;

        let entry_name = class_file_name(class);
        zip.start_file(&entry_name, options).map_err(jar_error)?;
        zip.write_all(&bytes)?;

        let nested_name = format!("{}/{}", class.name.to_lowercase(), entry_name);
        zip.start_file(&nested_name, options).map_err(jar_error)?;
        zip.write_all(&bytes)?;

        zip.finish().map_err(jar_error)?;
        Ok(())
    })();

    match write_result {
        Ok(()) => {
            fs::rename(&tmp_path, &jar_path)?;
            Ok(jar_path)
        }
        Err(err) => {
            let _ = fs::remove_file(&tmp_path);
            Err(err)
        }
    }
}

fn jar_error(err: zip::result::ZipError) -> CompilerError {
    CompilerError::Io(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant_pool::Entry;
    use crate::field::FieldTable;
    use crate::method::{CodeAttribute, Method};

    fn trivial_class() -> ClassFile {
        let mut class = ClassFile::new("SplProgram", 50, 0).unwrap();
        let code_name = class.pool.add(Entry::Utf8("Code".to_string())).unwrap();
        let main_name = class.pool.add(Entry::Utf8("main".to_string())).unwrap();
        let main_descriptor = class
            .pool
            .add(Entry::Utf8("([Ljava/lang/String;)V".to_string()))
            .unwrap();
        class.methods.push(Method {
            name_index: main_name,
            descriptor_index: main_descriptor,
            access_flags: 0x0001 | 0x0008,
            code: CodeAttribute {
                name_index: code_name,
                max_stack: 32768,
                max_locals: 32768,
                code: vec![0xB1],
            },
        });
        class.fields = FieldTable::default();
        class
    }

    #[test]
    fn writes_a_class_file_with_the_expected_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_class_file(&trivial_class(), dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "SplProgram.class");
        assert!(path.exists());
        assert!(!dir.path().join("SplProgram.class.tmp").exists());
    }

    #[test]
    fn writes_a_jar_with_manifest_and_nested_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_jar(&trivial_class(), dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "SplProgram.jar");

        let file = fs::File::open(&path).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert!(names.contains(&"META-INF/MANIFEST.MF".to_string()));
        assert!(names.contains(&"SplProgram.class".to_string()));
        assert!(names.contains(&"splprogram/SplProgram.class".to_string()));
    }
}
