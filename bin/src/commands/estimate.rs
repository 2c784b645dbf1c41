//! Estimate command implementation.
//!
//! Builds a [`MigrationForm`] from config defaults and command-line flags,
//! optionally walks through it with interactive prompts, runs the estimator,
//! and writes the report.

use anyhow::{Context, Result};
use clap::Args;
use deskshift_lib::{
    DEFAULT_DESTINATION, DEFAULT_SOURCE, DataEntity, DeskshiftConfig, Estimator, MigrationForm,
    MigrationReport, PlanTier, PlatformCapability, PlatformCatalog, ReportFormat,
};
use inquire::{CustomType, MultiSelect, Select};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::display::{check_non_negative, format_count, parse_volume, resolve_format};

/// Flags of the `estimate` command.
#[derive(Args, Debug, Default)]
pub(crate) struct EstimateArgs {
    /// Source platform identifier
    #[arg(short, long)]
    pub(crate) source: Option<String>,

    /// Source plan key. Defaults to the platform's first plan.
    #[arg(long)]
    pub(crate) source_plan: Option<String>,

    /// Destination platform identifier
    #[arg(short, long)]
    pub(crate) dest: Option<String>,

    /// Destination plan key. Defaults to the platform's first plan.
    #[arg(long)]
    pub(crate) dest_plan: Option<String>,

    /// Entity to migrate (repeatable). Defaults to every entity both sides support.
    #[arg(short, long)]
    pub(crate) entity: Vec<DataEntity>,

    /// Record count as ENTITY=COUNT (repeatable)
    #[arg(long, value_parser = parse_volume)]
    pub(crate) volume: Vec<(DataEntity, u64)>,

    /// Average attachments per ticket
    #[arg(long)]
    pub(crate) attachments: Option<f64>,

    /// Average attachment size in MB
    #[arg(long)]
    pub(crate) attachment_size: Option<f64>,

    /// Report format (text, markdown, json, csv)
    #[arg(short, long)]
    pub(crate) format: Option<ReportFormat>,

    /// Output file path. Defaults to stdout.
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,

    /// Walk through the form with prompts
    #[arg(short, long)]
    pub(crate) interactive: bool,
}

/// Run the estimator and write the report.
pub(crate) fn estimate(
    catalog: &PlatformCatalog,
    config: &DeskshiftConfig,
    args: &EstimateArgs,
) -> Result<()> {
    let mut form = build_form(catalog, config, args)?;
    if args.interactive {
        prompt_form(&mut form)?;
    }

    let inputs = form.to_inputs();
    let estimator = Estimator::new(config.estimator.attachment_bandwidth_mb_per_min);
    let result = estimator.estimate(&inputs, catalog);
    tracing::info!(
        source = %inputs.source,
        destination = %inputs.destination,
        hours = result.total_duration_hours,
        risk = %result.risk_level,
        "estimate complete"
    );

    let report = MigrationReport::new(inputs, result, catalog);
    let format = resolve_format(args.format, args.output.as_deref(), config)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            format
                .write(&report, BufWriter::new(file))
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("Wrote {format} report to {}", path.display());
        }
        None => format
            .write(&report, std::io::stdout())
            .context("Failed to write report")?,
    }
    Ok(())
}

/// Applies config defaults, then flags, on top of the form defaults.
///
/// A plan from the config only applies when the platform itself was not
/// overridden on the command line.
pub(crate) fn build_form<'a>(
    catalog: &'a PlatformCatalog,
    config: &DeskshiftConfig,
    args: &EstimateArgs,
) -> Result<MigrationForm<'a>> {
    let defaults = &config.defaults;
    let source = args
        .source
        .as_deref()
        .or(defaults.source.as_deref())
        .unwrap_or(DEFAULT_SOURCE);
    let destination = args
        .dest
        .as_deref()
        .or(defaults.destination.as_deref())
        .unwrap_or(DEFAULT_DESTINATION);

    let mut form = MigrationForm::with_platforms(catalog, source, destination)
        .context("Invalid platform selection")?;

    let source_plan = args.source_plan.as_deref().or_else(|| {
        args.source
            .is_none()
            .then_some(defaults.source_plan.as_deref())
            .flatten()
    });
    if let Some(plan) = source_plan {
        form.set_source_plan(plan)?;
    }
    let dest_plan = args.dest_plan.as_deref().or_else(|| {
        args.dest
            .is_none()
            .then_some(defaults.dest_plan.as_deref())
            .flatten()
    });
    if let Some(plan) = dest_plan {
        form.set_dest_plan(plan)?;
    }

    for (entity, count) in defaults.volumes()? {
        form.set_volume(entity, count);
    }
    for &(entity, count) in &args.volume {
        form.set_volume(entity, count);
    }

    let (per_ticket, size_mb) = form.attachments();
    let per_ticket = args
        .attachments
        .or(defaults.avg_attachments_per_ticket)
        .unwrap_or(per_ticket);
    let size_mb = args
        .attachment_size
        .or(defaults.avg_attachment_size_mb)
        .unwrap_or(size_mb);
    form.set_attachments(
        check_non_negative("--attachments", per_ticket)?,
        check_non_negative("--attachment-size", size_mb)?,
    );

    if !args.entity.is_empty() {
        form.set_selection(&args.entity)?;
    }

    tracing::debug!(
        source = form.source(),
        source_plan = form.source_plan(),
        destination = form.destination(),
        dest_plan = form.dest_plan(),
        entities = form.selected().len(),
        "built estimate request"
    );
    Ok(form)
}

/// Plan tier as shown in the plan prompt.
struct PlanChoice<'a>(&'a PlanTier);

impl std::fmt::Display for PlanChoice<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} req/min)",
            self.0.limits.label, self.0.limits.requests_per_minute
        )
    }
}

/// Entity as shown in the selection prompt.
struct EntityChoice {
    entity: DataEntity,
    manual: bool,
}

impl std::fmt::Display for EntityChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.manual {
            write!(f, "{} (manual)", self.entity.label())
        } else {
            write!(f, "{}", self.entity.label())
        }
    }
}

fn prompt_platform<'a>(
    message: &str,
    catalog: &'a PlatformCatalog,
    current: &str,
) -> Result<&'a PlatformCapability> {
    let platforms: Vec<&PlatformCapability> = catalog.all().collect();
    let cursor = platforms.iter().position(|p| p.id() == current).unwrap_or(0);
    Select::new(message, platforms)
        .with_starting_cursor(cursor)
        .prompt()
        .context("Platform selection cancelled")
}

fn prompt_plan(message: &str, platform: &PlatformCapability, current: &str) -> Result<String> {
    let choices: Vec<PlanChoice<'_>> = platform.plans().iter().map(PlanChoice).collect();
    let cursor = choices.iter().position(|c| c.0.key == current).unwrap_or(0);
    let choice = Select::new(message, choices)
        .with_starting_cursor(cursor)
        .prompt()
        .context("Plan selection cancelled")?;
    Ok(choice.0.key.clone())
}

/// Walks through the form with prompts, starting from its current values.
fn prompt_form(form: &mut MigrationForm<'_>) -> Result<()> {
    let catalog = form.catalog();

    let source = prompt_platform("Source platform:", catalog, form.source())?;
    if source.id() != form.source() {
        form.set_source(source.id())?;
    }
    let plan = prompt_plan("Source plan:", source, form.source_plan())?;
    form.set_source_plan(&plan)?;

    let destination = prompt_platform("Destination platform:", catalog, form.destination())?;
    if destination.id() != form.destination() {
        form.set_destination(destination.id())?;
    }
    let plan = prompt_plan("Destination plan:", destination, form.dest_plan())?;
    form.set_dest_plan(&plan)?;

    let choices: Vec<EntityChoice> = DataEntity::ALL
        .into_iter()
        .filter(|&entity| source.can_export(entity))
        .map(|entity| EntityChoice {
            entity,
            manual: !destination.can_import(entity),
        })
        .collect();
    let defaults: Vec<usize> = choices
        .iter()
        .enumerate()
        .filter(|(_, c)| form.selected().contains(&c.entity))
        .map(|(i, _)| i)
        .collect();
    let picked: Vec<DataEntity> = MultiSelect::new("Entities to migrate:", choices)
        .with_default(&defaults)
        .prompt()
        .context("Entity selection cancelled")?
        .into_iter()
        .map(|c| c.entity)
        .collect();
    form.set_selection(&picked)?;

    for &entity in &picked {
        let message = format!("{} records:", entity.label());
        let count = CustomType::<u64>::new(&message)
            .with_default(form.volume(entity))
            .with_formatter(&format_count)
            .with_error_message("Enter a whole number")
            .prompt()
            .context("Volume entry cancelled")?;
        form.set_volume(entity, count);
    }

    if picked.contains(&DataEntity::Tickets) {
        let (per_ticket, size_mb) = form.attachments();
        let per_ticket = CustomType::<f64>::new("Attachments per ticket:")
            .with_default(per_ticket)
            .with_error_message("Enter a number")
            .prompt()
            .context("Attachment entry cancelled")?;
        let size_mb = CustomType::<f64>::new("Average attachment size (MB):")
            .with_default(size_mb)
            .with_error_message("Enter a number")
            .prompt()
            .context("Attachment entry cancelled")?;
        form.set_attachments(per_ticket, size_mb);
    }
    Ok(())
}
