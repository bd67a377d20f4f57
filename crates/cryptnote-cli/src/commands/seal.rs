use secrecy::ExposeSecret;

use cryptnote_core::{build_share_link, seal, SealOptions};

use crate::app::{prompt_new_password, AppContext};
use crate::cli::SealArgs;
use crate::helpers::{read_message, resolve_base_url};
use crate::output::sealed_json;
use crate::ui::{blank_line, kv, receipt};

pub fn handle_seal(ctx: &AppContext, args: &SealArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(args.json);
    let config = ctx.config()?;

    let message = read_message(args.message.clone())?;
    let password = prompt_new_password(ctx.interactive(args.no_input))?;

    let options = if args.high_security || config.seal.high_security {
        SealOptions::high_security()
    } else {
        SealOptions::default()
    };
    let wire = seal(&message, password.expose_secret(), options)?;

    let link = if args.link {
        let base = resolve_base_url(args.base_url.as_deref(), &config.share.base_url)?;
        let embed = args.embed_key || config.share.embed_key;
        Some(build_share_link(
            &base,
            &wire,
            embed.then(|| password.expose_secret()),
        ))
    } else {
        None
    };

    if ui.mode.is_json() {
        let output = sealed_json(&wire, options.iterations(), link.as_deref());
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if ctx.quiet() || !ui.mode.is_pretty() {
        println!("{}", wire);
        if let Some(link) = &link {
            println!("{}", link);
        }
        return Ok(());
    }

    let iterations = options.iterations().to_string();
    let length = wire.len().to_string();
    println!(
        "{}",
        receipt(
            &ui,
            "Sealed message",
            &[("Iterations", iterations.as_str()), ("Length", length.as_str())],
        ),
    );
    blank_line(&ui);
    println!("{}", wire);
    if let Some(link) = &link {
        blank_line(&ui);
        println!("{}", kv(&ui, "Link", link));
    }
    Ok(())
}
