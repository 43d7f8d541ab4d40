use anyhow::Result;
use chrono::Utc;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::io::input::load_snapshot;
use crate::io::output::{create_writer, OutputFormat, RelatedView, RelationView, RelationsReport};
use crate::relations::analyze_relations;

pub struct RelationsOptions {
    pub export: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub top: Option<usize>,
}

pub fn handle_relations(options: RelationsOptions) -> Result<()> {
    let snapshot = load_snapshot(&options.export)?;

    let mut relations = analyze_relations(&snapshot.outfits);
    if let Some(top) = options.top {
        relations.truncate(top);
    }

    // Validation guarantees every relation id resolves to an item.
    let names: HashMap<&str, &str> = snapshot
        .items
        .iter()
        .map(|i| (i.id.as_str(), i.name.as_str()))
        .collect();
    let display_name = |id: &str| names.get(id).copied().unwrap_or(id).to_string();

    let views = relations
        .into_iter()
        .map(|relation| RelationView {
            name: display_name(&relation.id),
            frequency: relation.frequency,
            related: relation
                .related
                .into_iter()
                .map(|r| RelatedView {
                    name: display_name(&r.id),
                    count: r.count,
                    id: r.id,
                })
                .collect(),
            id: relation.id,
        })
        .collect();

    let report = RelationsReport {
        wardrobe_id: snapshot.wardrobe_id.clone(),
        generated_at: Utc::now(),
        relations: views,
    };

    let destination = super::open_destination(options.output.as_deref())?;
    create_writer(options.format, destination).write_relations(&report)
}
