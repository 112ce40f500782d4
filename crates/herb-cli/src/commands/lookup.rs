use serde::Serialize;

use herb_core::enums::Category;
use herb_core::knowledge;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct LookupResponse {
    label: String,
    category: Category,
    description: String,
    known: bool,
}

pub fn handle(flags: &GlobalFlags, label: &str) -> anyhow::Result<()> {
    let entry = knowledge::lookup(label);
    output(
        &LookupResponse {
            label: label.to_string(),
            category: entry.category,
            known: knowledge::known_labels().contains(&label),
            description: entry.description,
        },
        flags.format,
    )
}
