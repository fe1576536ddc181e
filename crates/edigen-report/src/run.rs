//! The generation run: ingest, resolve, fill, generate, write.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use edigen_ingest::{attach_designs_path, discover_inputs, load_scenarios_path, parse_sheet_path};
use edigen_map::{Catalog, resolve_columns};
use edigen_model::{DocumentKind, Item, Scenario};
use edigen_template::XmlNode;
use tracing::{info, warn};

use crate::documents::{GenerateOptions, generate_document, profile};
use crate::filler::fill_design;
use crate::output::OutputWriter;
use crate::report::{Artifact, RunReport};
use crate::snippets;

/// Everything a run needs, resolved from CLI flags.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory holding the sheet, scenario JSON and design archive.
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub catalog: PathBuf,
    /// Optional directory of per-kind template overrides.
    pub templates_dir: Option<PathBuf>,
    pub options: GenerateOptions,
}

/// Runs a full generation pass.
///
/// Input-level failures (unreadable catalog, no sheet) are hard errors;
/// everything per-column, per-file and per-scenario is collected into
/// the report and the run continues.
pub fn run(config: &RunConfig) -> Result<RunReport> {
    let inputs = discover_inputs(&config.input_dir)?;
    let catalog = Catalog::from_path(&config.catalog)
        .with_context(|| format!("mapping catalog {}", config.catalog.display()))?;
    let sheet = parse_sheet_path(&inputs.sheet)
        .with_context(|| format!("design sheet {}", inputs.sheet.display()))?;
    let resolution = resolve_columns(&catalog, &sheet.columns);
    let mut scenarios = load_scenarios_path(&inputs.scenarios)
        .with_context(|| format!("scenarios {}", inputs.scenarios.display()))?;
    let archive_errors = attach_designs_path(&mut scenarios, &inputs.archive)
        .with_context(|| format!("design archive {}", inputs.archive.display()))?;

    let writer = OutputWriter::new(&config.output_dir);
    writer.prepare()?;

    let mut report = RunReport {
        sheet_errors: sheet.errors,
        resolution_errors: resolution.errors,
        archive_errors,
        ..RunReport::default()
    };

    let items = resolution.items;
    let templates = load_template_overrides(config.templates_dir.as_deref())?;

    for index in 0..scenarios.len() {
        let scenario = scenarios[index].clone();
        if let Some(filled) = fill_scenario(&scenario, &items, &writer, &mut report)? {
            scenarios[index].csv_test_file = filled;
        }
        generate_scenario(&scenario, &scenarios, &items, config, &templates, &writer, &mut report)?;
    }

    write_snippets(&items, &scenarios, &writer, &mut report)?;
    info!(
        artifacts = report.artifacts.len(),
        errors = report.error_count(),
        warnings = report.warning_count(),
        "run finished"
    );
    Ok(report)
}

fn fill_scenario(
    scenario: &Scenario,
    items: &[Item],
    writer: &OutputWriter,
    report: &mut RunReport,
) -> Result<Option<String>> {
    if !scenario.has_design() {
        return Ok(None);
    }
    // Only resolved items with a TLI tag occupy design-file cells.
    let tli_items: Vec<&Item> = items
        .iter()
        .filter(|item| item.record_id.is_some() && !item.tli_tag_850.is_empty())
        .collect();

    match fill_design(&scenario.csv_design, &tli_items, &scenario.csv_design_filename) {
        Ok(filled) => {
            let path = writer.write_csv(&scenario.csv_design_filename, &filled)?;
            report.artifacts.push(Artifact {
                scenario: scenario.key.clone(),
                description: "test file".to_string(),
                path,
            });
            Ok(Some(filled))
        }
        Err(err) => {
            warn!(key = %scenario.key, %err, "test file not generated");
            report.generation_errors.push(err.to_string());
            Ok(None)
        }
    }
}

fn generate_scenario(
    scenario: &Scenario,
    scenarios: &[Scenario],
    items: &[Item],
    config: &RunConfig,
    templates: &BTreeMap<DocumentKind, XmlNode>,
    writer: &OutputWriter,
    report: &mut RunReport,
) -> Result<()> {
    for kind in DocumentKind::OUTBOUND {
        if !scenario.includes(kind) {
            continue;
        }
        let partner = scenario.consolidated_with.as_ref().and_then(|key| {
            scenarios
                .iter()
                .find(|s| s.key == *key && s.document_kind == Some(DocumentKind::PurchaseOrder))
        });

        match generate_document(
            scenario,
            partner,
            items,
            kind,
            &config.options,
            templates.get(&kind),
        ) {
            Ok(generated) => {
                report.structure_warnings.extend(
                    generated
                        .warnings
                        .iter()
                        .map(|w| format!("{} {kind}: {w}", scenario.key)),
                );
                let path = writer.write_xml(&scenario.key, kind, &generated.xml)?;
                report.artifacts.push(Artifact {
                    scenario: scenario.key.clone(),
                    description: kind.label().to_string(),
                    path,
                });
            }
            // One failed kind never blocks the others.
            Err(err) => {
                warn!(key = %scenario.key, %kind, "generation failed: {err:#}");
                report
                    .generation_errors
                    .push(format!("{} {kind}: {err:#}", scenario.key));
            }
        }
    }
    Ok(())
}

fn write_snippets(
    items: &[Item],
    scenarios: &[Scenario],
    writer: &OutputWriter,
    report: &mut RunReport,
) -> Result<()> {
    let blocks = [
        ("tli_fields", snippets::tli_fields(items)),
        ("populate_methods", snippets::populate_methods(items)),
        ("populate_maps", snippets::populate_maps(items)),
        ("populate_calls", snippets::populate_calls(items)),
        ("omm_850", snippets::omm_method_850(scenarios)),
        ("omm_860", snippets::omm_method_860(scenarios)),
    ];
    for (name, text) in blocks {
        let path = writer.write_snippet(name, &text)?;
        report.artifacts.push(Artifact {
            scenario: "-".to_string(),
            description: format!("snippet {name}"),
            path,
        });
    }
    Ok(())
}

fn load_template_overrides(dir: Option<&Path>) -> Result<BTreeMap<DocumentKind, XmlNode>> {
    let mut overrides = BTreeMap::new();
    let Some(dir) = dir else {
        return Ok(overrides);
    };
    for kind in DocumentKind::OUTBOUND {
        let Some(profile) = profile(kind) else {
            continue;
        };
        let path = dir.join(profile.template_name);
        if path.is_file() {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("template override {}", path.display()))?;
            let node = XmlNode::from_xml_str(&text)
                .with_context(|| format!("template override {}", path.display()))?;
            overrides.insert(kind, node);
        }
    }
    Ok(overrides)
}
