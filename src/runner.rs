//! Orchestration of a single cpm run.
//!
//! Loads the configuration, resolves the type id and type value (prompting for
//! them when allowed), builds the replacement table, and walks the type's
//! structure.

use log::{debug, warn};
use std::path::{Path, PathBuf};

use crate::cli::Args;
use crate::config::{find_config, get_config, Config};
use crate::error::{Error, Result};
use crate::processor::{Processor, Report};
use crate::prompt::Prompter;
use crate::replacements::{build_replacements, validate_type_value};

/// Directories searched for the configuration file when `--config` is not given:
/// the executable's directory first, then the project directory.
pub fn config_search_dirs(project_dir: &Path) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir);
    }
    if !dirs.iter().any(|dir| dir == project_dir) {
        dirs.push(project_dir.to_path_buf());
    }
    dirs
}

/// One line per declared type: `<type-id>  <value template>`.
pub fn format_types(config: &Config) -> String {
    let width = config.types.keys().map(String::len).max().unwrap_or(0);
    config
        .types
        .iter()
        .map(|(type_id, template)| format!("{type_id:<width$}  {template}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Returns the type id from the command line, or asks for one.
///
/// # Errors
/// * `Error::MissingArgument` if no id was given and prompting is not allowed
/// * `Error::ConfigError` if there is nothing to choose from
pub fn resolve_type_id(
    config: &Config,
    type_id: Option<String>,
    interactive: bool,
    prompt: &dyn Prompter,
) -> Result<String> {
    if let Some(type_id) = type_id {
        return Ok(type_id);
    }
    if !interactive {
        return Err(Error::MissingArgument { name: "type-id".to_string() });
    }

    let choices: Vec<String> = config.type_ids().into_iter().map(String::from).collect();
    if choices.is_empty() {
        return Err(Error::ConfigError("no types declared".to_string()));
    }
    let index = prompt.select("Select type".to_string(), &choices)?;
    choices
        .get(index)
        .cloned()
        .ok_or_else(|| Error::PromptError(format!("selection {index} is out of range")))
}

/// Returns a type value with enough segments for `template`.
///
/// In interactive mode a missing or short value is asked for again until a valid
/// one is entered.
///
/// # Errors
/// * `Error::MissingArgument` if no value was given and prompting is not allowed
/// * `Error::TypeValueMismatch` if the value is too short and prompting is not allowed
pub fn resolve_type_value(
    type_id: &str,
    template: &str,
    type_value: Option<String>,
    interactive: bool,
    prompt: &dyn Prompter,
) -> Result<String> {
    let mut candidate = type_value;
    loop {
        match candidate.take() {
            Some(value) => match validate_type_value(template, &value) {
                Ok(()) => return Ok(value),
                Err(e) if interactive => warn!("{e}"),
                Err(e) => return Err(e),
            },
            None if !interactive => {
                return Err(Error::MissingArgument { name: "type-value".to_string() })
            }
            None => {}
        }
        candidate = Some(prompt.input(format!("Value for \"{type_id}\" ({template})"))?);
    }
}

/// Creates the structure of `type_id` with `type_value` below `project_dir`.
///
/// # Errors
/// * `Error::DestinationMissing` if the destination root does not exist
/// * `Error::UnknownType`, `Error::MissingStructure`, `Error::TypeValueMismatch`
///   for configuration-structural problems
///
/// Individual file failures are reported in the returned `Report`.
pub fn scaffold(
    config: &Config,
    project_dir: &Path,
    type_id: &str,
    type_value: &str,
) -> Result<Report> {
    let destination_root = ensure_destination(config, project_dir)?;
    let structure = config.type_structure(type_id)?;
    let replacements = build_replacements(config, type_id, type_value)?;
    let template_root = project_dir.join(&config.dir_file_templates);

    debug!(
        "Templates from {}, output to {}",
        template_root.display(),
        destination_root.display()
    );

    let processor = Processor::new(&template_root, &destination_root, &replacements);
    Ok(processor.process(structure))
}

fn ensure_destination(config: &Config, project_dir: &Path) -> Result<PathBuf> {
    let destination_root = project_dir.join(&config.dir_destination);
    if !destination_root.is_dir() {
        return Err(Error::DestinationMissing {
            destination: destination_root.display().to_string(),
        });
    }
    Ok(destination_root)
}

/// Fails on the first missing positional, type id before type value.
fn require_arguments(args: &Args) -> Result<()> {
    if args.type_id.is_none() {
        return Err(Error::MissingArgument { name: "type-id".to_string() });
    }
    if args.type_value.is_none() {
        return Err(Error::MissingArgument { name: "type-value".to_string() });
    }
    Ok(())
}

/// Main application logic execution.
///
/// # Flow
/// 1. In non-interactive mode, checks both positionals were given
/// 2. Locates and loads the configuration
/// 3. Checks the destination root exists
/// 4. Resolves the type id and its structure
/// 5. Resolves the type value
/// 6. Creates folders and files
pub fn run(args: Args, prompt: &dyn Prompter) -> Result<()> {
    if args.non_interactive && !args.list {
        require_arguments(&args)?;
    }

    let project_dir = match args.project_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let config_path = find_config(args.config.as_deref(), &config_search_dirs(&project_dir))?;
    let config = get_config(&config_path)?;

    if args.list {
        println!("{}", format_types(&config));
        return Ok(());
    }

    ensure_destination(&config, &project_dir)?;

    let interactive = !args.non_interactive;
    let type_id = resolve_type_id(&config, args.type_id, interactive, prompt)?;
    let template = config.type_template(&type_id)?;
    config.type_structure(&type_id)?;
    let type_value =
        resolve_type_value(&type_id, template, args.type_value, interactive, prompt)?;

    let report = scaffold(&config, &project_dir, &type_id, &type_value)?;

    for path in &report.created {
        println!("Created: '{}'", path.display());
    }
    if report.has_failures() {
        warn!("{} item(s) could not be created", report.failed);
    }

    println!("DONE!");
    Ok(())
}
