use cryptnote_core::{generate_key, score_strength};

use crate::app::AppContext;
use crate::cli::KeygenArgs;
use crate::constants::MAX_KEY_LENGTH;
use crate::errors::CliError;
use crate::ui::{kv, strength_label};

pub fn handle_keygen(ctx: &AppContext, args: &KeygenArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(args.json);
    let length = match args.length {
        Some(length) => length,
        None => ctx.config()?.keygen.length,
    };
    if length == 0 || length > MAX_KEY_LENGTH {
        return Err(CliError::invalid_input(format!(
            "Key length must be between 1 and {}, got {}\nHint: Check [keygen] length in the config file.",
            MAX_KEY_LENGTH, length
        ))
        .into());
    }

    let key = generate_key(length)?;
    let score = score_strength(&key);

    if ui.mode.is_json() {
        let output = serde_json::json!({
            "key": key,
            "length": length,
            "strength": score,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if ctx.quiet() || !ui.mode.is_pretty() {
        println!("{}", key);
    } else {
        println!("{}", key);
        println!(
            "{}",
            kv(
                &ui,
                "Strength",
                &format!("{} ({})", score, strength_label(score))
            )
        );
    }
    Ok(())
}
