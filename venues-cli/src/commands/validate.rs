//! `validate <file>`

use std::path::Path;

use colored::Colorize;
use minions_fields::validate_fields;
use serde_json::{Map, Value};

use super::input::read_json_file;
use crate::context::CliContext;
use crate::error::{CliError, CliResult};

/// Check a stored or hand-written minion document against its type's schema.
///
/// An unresolvable `minionTypeId` fails before any field is validated. A
/// document without `fields` is validated as an empty object.
pub async fn run_validate(ctx: &CliContext, file: &Path) -> CliResult<()> {
    let document = read_json_file(file).await?;
    let type_id = document
        .get("minionTypeId")
        .and_then(Value::as_str)
        .unwrap_or("(missing minionTypeId)");
    let minion_type = ctx.find_type_by_id(type_id)?;

    let fields = document
        .get("fields")
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()));
    let result = validate_fields(&fields, &minion_type.schema);
    tracing::debug!(file = %file.display(), valid = result.valid, "validated");

    if !result.valid {
        return Err(CliError::ValidationFailed {
            type_name: minion_type.name.clone(),
            errors: result.errors,
        });
    }

    println!(
        "\n  {} Valid {} {}\n",
        "✔".green(),
        minion_type.icon,
        minion_type.name
    );
    Ok(())
}
