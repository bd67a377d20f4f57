use secrecy::ExposeSecret;

use cryptnote_core::{build_share_link, WireEnvelope};

use crate::app::{prompt_password, AppContext};
use crate::cli::ShareArgs;
use crate::helpers::{read_wire, resolve_base_url};

pub fn handle_share(ctx: &AppContext, args: &ShareArgs) -> anyhow::Result<()> {
    let config = ctx.config()?;

    let wire = read_wire(Some(args.wire.clone()), "message")?;
    // Must at least parse as a wire string
    WireEnvelope::parse(&wire)?;

    let base = resolve_base_url(args.base_url.as_deref(), &config.share.base_url)?;
    let link = if args.embed_key || config.share.embed_key {
        let password = prompt_password(ctx.interactive(args.no_input))?;
        build_share_link(&base, &wire, Some(password.expose_secret()))
    } else {
        build_share_link(&base, &wire, None)
    };

    println!("{}", link);
    Ok(())
}
