//! Structure walking and file materialization.
//!
//! For the selected type every declared folder is created under the destination
//! root and each template → output mapping in it is turned into a new file. Errors
//! on individual folders or files are logged and the walk moves on; existing
//! destination files are never overwritten.

use log::{debug, error, warn};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::config::{FolderFiles, Structure};
use crate::error::Result;
use crate::replacements::Replacements;
use crate::substitute::{
    split_path, substitute_dir_path, substitute_file_content, substitute_file_path,
};

/// What happened to a single template → output mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Created,
    /// The template file does not exist; nothing was written.
    TemplateMissing,
    /// The destination already exists and was left untouched.
    DestinationExists,
}

/// Summary of one structure walk.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub created: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    /// Folders or files that failed with an I/O error.
    pub failed: usize,
}

impl Report {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Joins the non-empty `/`-separated segments of `path` onto `root`.
///
/// Leading separators are dropped, so the result always stays below `root`.
pub fn join_segments<P: AsRef<Path>>(root: P, path: &str) -> PathBuf {
    let mut joined = root.as_ref().to_path_buf();
    for segment in split_path(path) {
        joined.push(segment);
    }
    joined
}

/// Writes `content` to the freshly created `file_path`.
///
/// A failed write removes the partial file so a later run can create it again.
pub fn write_or_discard<W: Write>(writer: &mut W, file_path: &Path, content: &[u8]) -> Result<()> {
    if let Err(e) = writer.write_all(content).and_then(|_| writer.flush()) {
        if let Err(remove_err) = fs::remove_file(file_path) {
            warn!("Could not remove partial file {}: {}", file_path.display(), remove_err);
        }
        return Err(e.into());
    }
    Ok(())
}

/// Creates `template_path` rendered into `file_path`.
///
/// # Returns
/// * `FileOutcome::TemplateMissing` if the template does not exist
/// * `FileOutcome::DestinationExists` if `file_path` is already there
/// * `FileOutcome::Created` once the substituted content is written
///
/// # Errors
/// * `Error::IoError` if reading the template or writing the output fails
pub fn create_file_from_template(
    template_path: &Path,
    file_path: &Path,
    replacements: &Replacements,
) -> Result<FileOutcome> {
    if !template_path.is_file() {
        warn!("Template file {} does not exist!", template_path.display());
        return Ok(FileOutcome::TemplateMissing);
    }

    if file_path.exists() {
        warn!(
            "Destination file {} already exists and will be skipped!",
            file_path.display()
        );
        return Ok(FileOutcome::DestinationExists);
    }

    let template = fs::read_to_string(template_path)?;
    let content = substitute_file_content(&template, replacements);

    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(file_path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            warn!(
                "Destination file {} already exists and will be skipped!",
                file_path.display()
            );
            return Ok(FileOutcome::DestinationExists);
        }
        Err(e) => return Err(e.into()),
    };
    write_or_discard(&mut file, file_path, content.as_bytes())?;

    debug!("Written {} from {}", file_path.display(), template_path.display());
    Ok(FileOutcome::Created)
}

/// Walks a type's structure against one template root and destination root.
pub struct Processor<'a> {
    template_root: &'a Path,
    destination_root: &'a Path,
    replacements: &'a Replacements,
}

impl<'a> Processor<'a> {
    pub fn new(
        template_root: &'a Path,
        destination_root: &'a Path,
        replacements: &'a Replacements,
    ) -> Self {
        Self { template_root, destination_root, replacements }
    }

    /// Full path of a template file. Template names are not substituted.
    pub fn template_path(&self, template_name: &str) -> PathBuf {
        join_segments(self.template_root, template_name)
    }

    /// Destination directory for a declared folder path.
    pub fn folder_path(&self, folder: &str) -> PathBuf {
        join_segments(
            self.destination_root,
            &substitute_dir_path(folder, self.replacements),
        )
    }

    /// Full destination path of an output file declared inside `folder`.
    pub fn output_path(&self, folder: &str, file_name: &str) -> PathBuf {
        join_segments(
            self.folder_path(folder),
            &substitute_file_path(file_name, self.replacements),
        )
    }

    /// Creates every prefix of the substituted `folder` path that does not exist yet.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - The deepest directory, i.e. the folder itself
    pub fn create_dir(&self, folder: &str) -> Result<PathBuf> {
        let final_path = substitute_dir_path(folder, self.replacements);
        let mut current = self.destination_root.to_path_buf();

        for part in split_path(&final_path) {
            current.push(part);
            if !current.exists() {
                debug!("Creating directory {}", current.display());
                fs::create_dir(&current)?;
            }
        }

        Ok(current)
    }

    /// Materializes every template → output mapping of one folder.
    pub fn process_files(&self, folder: &str, files: &FolderFiles, report: &mut Report) {
        for (template_name, file_name) in files {
            let template_path = self.template_path(template_name);
            let file_path = self.output_path(folder, file_name);

            match create_file_from_template(&template_path, &file_path, self.replacements) {
                Ok(FileOutcome::Created) => report.created.push(file_path),
                Ok(FileOutcome::TemplateMissing) | Ok(FileOutcome::DestinationExists) => {
                    report.skipped.push(file_path)
                }
                Err(e) => {
                    error!("Failed to create {}: {}", file_path.display(), e);
                    report.failed += 1;
                }
            }
        }
    }

    /// Creates all folders and files declared in `structure`, in declaration order.
    pub fn process(&self, structure: &Structure) -> Report {
        let mut report = Report::default();

        for (folder, files) in structure {
            debug!("Processing folder '{}'", folder);

            if let Err(e) = self.create_dir(folder) {
                error!("Failed to create folder '{}': {}", folder, e);
                report.failed += 1;
                continue;
            }

            match files {
                Some(files) if !files.is_empty() => self.process_files(folder, files, &mut report),
                _ => debug!("No files declared for folder '{}'", folder),
            }
        }

        report
    }
}
