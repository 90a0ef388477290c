//! Convert command implementation.

use std::path::Path;

use keepmd_core::config::loader::{ConfigLoader, default_config_path};
use keepmd_core::convert::{ConvertError, ConvertOptions, Converter, ProgressCallback};
use tracing::debug;

use crate::ConvertArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, quiet: bool, args: &ConvertArgs) {
    let cfg = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL keepmd convert");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    };

    crate::logging::init(&cfg, quiet);

    let options = ConvertOptions {
        input_dir: args.input.clone(),
        output_dir: cfg.output_dir.clone(),
        tag_folders: args.tag_folders || cfg.tag_folders,
    };
    debug!("Converting with {:?}", options);

    let report_progress = |current: usize, total: usize, path: &str| {
        debug!("[{}/{}] {}", current, total, path);
    };
    let progress: Option<ProgressCallback> = Some(Box::new(report_progress));

    let converter = Converter::new(options);
    match converter.run(progress) {
        Ok(stats) => {
            if stats.failed.is_empty() {
                println!("OK   keepmd convert");
            } else {
                println!("PART keepmd convert");
            }
            println!("input: {}", args.input.display());
            println!("output: {}", converter.options().output_dir.display());
            println!();
            println!("  Files found:          {}", stats.files_found);
            println!("  Notes converted:      {}", stats.notes_converted);
            if stats.notes_renamed > 0 {
                println!("  Notes renamed:        {}", stats.notes_renamed);
            }
            println!("  Attachments copied:   {}", stats.attachments_copied);
            if stats.attachments_missing > 0 {
                println!("  Attachments missing:  {}", stats.attachments_missing);
            }
            if !stats.failed.is_empty() {
                println!("  Notes skipped:        {}", stats.failed.len());
                for failed in &stats.failed {
                    println!("    {}: {}", failed.path.display(), failed.reason);
                }
                exit(1);
            }
        }
        Err(ConvertError::InvalidInputPath(e)) => {
            println!("FAIL keepmd convert");
            println!("Please enter a correct path!");
            println!("{e}");
            exit(1);
        }
        Err(e) => {
            println!("FAIL keepmd convert");
            println!("{e}");
            exit(1);
        }
    }

    crate::logging::flush();
}

fn exit(code: i32) -> ! {
    crate::logging::flush();
    std::process::exit(code);
}
