use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info_span;

use edigen_map::{Catalog, clear_edi_info, parse, resolve};
use edigen_model::DocumentKind;
use edigen_report::{GenerateOptions, RunConfig, RunReport, run};

use crate::cli::{GenerateArgs, LocateArgs};
use crate::summary::apply_table_style;

pub fn run_generate(args: &GenerateArgs) -> Result<RunReport> {
    let span = info_span!("generate", input = %args.input_dir.display());
    let _guard = span.enter();

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| args.input_dir.join("output"));
    let config = RunConfig {
        input_dir: args.input_dir.clone(),
        output_dir,
        catalog: args.catalog.clone(),
        templates_dir: args.templates_dir.clone(),
        options: GenerateOptions {
            line_sequence: !args.no_line_sequence,
            ack_type: !args.no_ack_type,
            item_status: !args.no_item_status,
            tset_purpose: !args.no_tset_purpose,
            taxes: !args.no_taxes,
            charges: !args.no_charges,
            total_amount: !args.no_total_amount,
        },
    };
    run(&config)
}

pub fn run_kinds() -> Result<()> {
    let kinds = [
        DocumentKind::PurchaseOrder,
        DocumentKind::Acknowledgment,
        DocumentKind::Shipment,
        DocumentKind::Invoice,
        DocumentKind::Change,
    ];
    let mut table = Table::new();
    table.set_header(vec!["Code", "Document", "Direction"]);
    apply_table_style(&mut table);
    for kind in kinds {
        let direction = if kind.is_inbound() { "inbound" } else { "outbound" };
        table.add_row(vec![kind.code_str().to_string(), kind.label().to_string(), direction.to_string()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_locate(args: &LocateArgs) -> Result<()> {
    let cleared = clear_edi_info(&args.text);
    let descriptor = parse(&cleared);
    println!("{descriptor}");

    if let Some(path) = &args.catalog {
        let catalog = Catalog::from_path(path)
            .with_context(|| format!("mapping catalog {}", path.display()))?;
        match resolve(&catalog, &descriptor) {
            Ok(record) => {
                println!(
                    "record {}: value {:?}, TLI tag {:?}, RSX tag {:?}",
                    record.id, record.value, record.tli_tag_850, record.rsx_tag_850
                );
            }
            Err(err) => println!("{err}"),
        }
    }
    Ok(())
}
