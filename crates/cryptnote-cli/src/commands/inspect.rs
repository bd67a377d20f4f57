use cryptnote_core::WireEnvelope;

use crate::app::AppContext;
use crate::cli::InspectArgs;
use crate::helpers::read_wire;
use crate::output::inspect_json;
use crate::ui::{field_table, header, hint, truncate};

pub fn handle_inspect(ctx: &AppContext, args: &InspectArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(args.json);

    let wire = read_wire(args.wire.clone(), "message")?;
    let envelope = WireEnvelope::parse(&wire)?;

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&inspect_json(&envelope))?);
        return Ok(());
    }

    let meta = envelope.metadata();
    let version = meta
        .version
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string());
    let rows = [
        ("format", envelope.format().as_str().to_string()),
        ("salt", hex::encode(envelope.salt())),
        ("iv", hex::encode(envelope.iv())),
        ("iterations", meta.iterations.to_string()),
        ("high_security", meta.high_security.to_string()),
        ("metadata_version", version),
        ("metadata_readable", meta.readable.to_string()),
        ("hmac", truncate(envelope.hmac().unwrap_or("-"), 24)),
        ("ciphertext_length", envelope.ciphertext().len().to_string()),
    ];

    if !ctx.quiet() {
        println!("{}", header(&ui, "inspect", None));
    }
    println!("{}", field_table(&ui, &rows));
    if ui.mode.is_pretty() && envelope.hmac().is_some() && !meta.readable {
        println!(
            "{}",
            hint(
                &ui,
                "Metadata is unreadable; opening will assume 1000 iterations."
            )
        );
    }
    Ok(())
}

