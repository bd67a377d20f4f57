use std::path::Path;

use chrono::{DateTime, Utc};
use secrecy::ExposeSecret;

use cryptnote_core::{open_file, seal_file, FilePayload, SealOptions};

use crate::app::{prompt_new_password, prompt_password, AppContext};
use crate::cli::{OpenFileArgs, SealFileArgs};
use crate::commands::open::warn_tampered;
use crate::errors::CliError;
use crate::helpers::{
    check_destination, read_file, read_sealable_file, recovered_file_name, sealed_file_path,
    write_output,
};
use crate::output::opened_file_json;
use crate::ui::{format_bytes, receipt};

pub fn handle_seal_file(ctx: &AppContext, args: &SealFileArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false);
    let config = ctx.config()?;

    let bytes = read_sealable_file(&args.path)?;
    let name = args
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| CliError::invalid_input("Path does not name a file"))?;
    let payload = FilePayload::from_bytes(name, "", last_modified_ms(&args.path), &bytes)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| sealed_file_path(&args.path));
    check_destination(&output, args.force)?;

    let password = prompt_new_password(ctx.interactive(args.no_input))?;
    let options = if args.high_security || config.seal.high_security {
        SealOptions::high_security()
    } else {
        SealOptions::default()
    };
    let wire = seal_file(&payload, password.expose_secret(), options)?;
    write_output(&output, wire.as_bytes(), args.force)?;

    tracing::debug!(output = %output.display(), size = bytes.len(), "sealed file");

    if !ctx.quiet() {
        let size = format_bytes(bytes.len() as u64);
        let output_display = output.display().to_string();
        println!(
            "{}",
            receipt(
                &ui,
                "Sealed file",
                &[
                    ("File", payload.name.as_str()),
                    ("Size", size.as_str()),
                    ("Output", output_display.as_str()),
                ],
            ),
        );
    }
    Ok(())
}

pub fn handle_open_file(ctx: &AppContext, args: &OpenFileArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(args.json);

    let contents = read_file(&args.path)?;
    let wire = String::from_utf8(contents)
        .map_err(|_| CliError::invalid_input("Sealed file is not text"))?;

    let password = prompt_password(ctx.interactive(args.no_input))?;
    let opened = open_file(wire.trim(), password.expose_secret())?;
    let bytes = opened.payload.bytes()?;

    let output = match &args.output {
        Some(path) => path.clone(),
        None => recovered_file_name(&opened.payload.name).ok_or_else(|| {
            CliError::invalid_input(
                "The sealed file has no usable name.\nHint: Choose a destination with --output.",
            )
        })?,
    };
    write_output(&output, &bytes, args.force)?;

    if opened.tampered {
        warn_tampered(&ui);
    }

    let output_display = output.display().to_string();
    if ui.mode.is_json() {
        let json = opened_file_json(&opened, bytes.len(), &output_display);
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else if !ctx.quiet() {
        let size = format_bytes(bytes.len() as u64);
        println!(
            "{}",
            receipt(
                &ui,
                "Opened file",
                &[
                    ("File", opened.payload.name.as_str()),
                    ("Size", size.as_str()),
                    ("Output", output_display.as_str()),
                ],
            ),
        );
    }

    if args.strict && opened.tampered {
        return Err(CliError::Tampered.into());
    }
    Ok(())
}

/// Modification time in milliseconds since the Unix epoch, or 0 if unknown.
fn last_modified_ms(path: &Path) -> i64 {
    std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map(|time| DateTime::<Utc>::from(time).timestamp_millis())
        .unwrap_or(0)
}
