use secrecy::{ExposeSecret, SecretString};

use cryptnote_core::score_strength;

use crate::app::{prompt_password, AppContext};
use crate::cli::StrengthArgs;
use crate::ui::{kv, strength_label, strength_meter};

pub fn handle_strength(ctx: &AppContext, args: &StrengthArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(args.json);

    let password = match &args.password {
        Some(value) => SecretString::from(value.as_str()),
        None => prompt_password(ctx.interactive(args.no_input))?,
    };
    let score = score_strength(password.expose_secret());
    let label = strength_label(score);

    if ui.mode.is_json() {
        let output = serde_json::json!({ "score": score, "label": label });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if ctx.quiet() {
        println!("{}", score);
    } else if ui.mode.is_pretty() {
        println!(
            "{} {} {}",
            strength_meter(score, ui.unicode),
            score,
            label
        );
    } else {
        println!("{}", kv(&ui, "Score", &score.to_string()));
        println!("{}", kv(&ui, "Label", label));
    }
    Ok(())
}
