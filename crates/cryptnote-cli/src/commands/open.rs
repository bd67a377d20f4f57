use secrecy::{ExposeSecret, SecretString};

use cryptnote_core::{extract_share_from_url, open};

use crate::app::{env_password, prompt_password, AppContext};
use crate::cli::OpenArgs;
use crate::errors::CliError;
use crate::helpers::read_wire;
use crate::output::opened_json;
use crate::ui::{badge, blank_line, header, kv, Badge, UiContext};

pub fn handle_open(ctx: &AppContext, args: &OpenArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(args.json);

    let input = read_wire(args.input.clone(), "message")?;
    let (wire, embedded_key) = split_share_input(&input)?;

    let password = match (env_password(), embedded_key) {
        (Some(password), _) => password,
        (None, Some(key)) => {
            tracing::debug!("using password embedded in share link");
            SecretString::from(key)
        }
        (None, None) => prompt_password(ctx.interactive(args.no_input))?,
    };

    let opened = open(&wire, password.expose_secret())?;

    if opened.tampered {
        warn_tampered(&ui);
    }

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&opened_json(&opened))?);
    } else if ctx.quiet() || !ui.mode.is_pretty() {
        println!("{}", opened.message);
    } else {
        println!("{}", header(&ui, "open", Some(opened.format.as_str())));
        if !opened.created.is_empty() {
            println!("{}", kv(&ui, "Created", &opened.created));
        }
        println!(
            "{}",
            kv(&ui, "Iterations", &opened.iterations.to_string())
        );
        blank_line(&ui);
        println!("{}", opened.message);
    }

    if args.strict && opened.tampered {
        return Err(CliError::Tampered.into());
    }
    Ok(())
}

/// Accept either a bare wire string or a share link.
///
/// Wire strings never contain `?`, so anything with a query is treated as a
/// link.
fn split_share_input(input: &str) -> anyhow::Result<(String, Option<String>)> {
    if !input.contains('?') {
        return Ok((input.to_string(), None));
    }

    let shared = extract_share_from_url(input);
    match shared.content {
        Some(content) => Ok((content, shared.key)),
        None => Err(CliError::invalid_input(
            "The link does not carry a sealed message.\nHint: Share links look like https://host/?share=...",
        )
        .into()),
    }
}

pub(crate) fn warn_tampered(ui: &UiContext) {
    eprintln!(
        "{}",
        badge(
            ui,
            Badge::Warn,
            "Integrity check failed: this message may have been altered since it was sealed"
        )
    );
}
