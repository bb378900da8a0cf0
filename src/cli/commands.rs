//! Command dispatch: maps parsed arguments onto the domain API.

use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::Settings;
use crate::domain::generator::generate_hierarchy;
use crate::domain::params::GenerationParams;
use crate::domain::reconcile::Reconciliation;
use crate::domain::summary::HierarchySummary;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(None)?;

    match &cli.command {
        Some(Commands::Fixed {
            total,
            levels,
            max_reports,
        }) => _fixed(cli, &settings, *total, *levels, *max_reports),
        Some(Commands::Flexible {
            total,
            ratio,
            min,
            max,
        }) => _flexible(cli, &settings, *total, *ratio, *min, *max),
        Some(Commands::Strict { total, ratio }) => _strict(cli, &settings, *total, *ratio),
        Some(Commands::Config { command }) => _config(&settings, command),
        None => _default(cli, &settings),
    }
}

#[instrument(skip(cli, settings))]
fn _fixed(
    cli: &Cli,
    settings: &Settings,
    total: Option<usize>,
    levels: Option<usize>,
    max_reports: Option<usize>,
) -> CliResult<()> {
    let params = GenerationParams::FixedLevels {
        total: total.unwrap_or(settings.fixed.total),
        levels: levels.unwrap_or(settings.fixed.levels),
        max_reports: max_reports.unwrap_or(settings.fixed.max_reports),
    };
    _generate(cli, params)
}

#[instrument(skip(cli, settings))]
fn _flexible(
    cli: &Cli,
    settings: &Settings,
    total: Option<usize>,
    ratio: Option<usize>,
    min: Option<usize>,
    max: Option<usize>,
) -> CliResult<()> {
    let params = GenerationParams::Flexible {
        total: total.unwrap_or(settings.flexible.total),
        ratio: ratio.unwrap_or(settings.flexible.ratio),
        min: min.unwrap_or(settings.flexible.min),
        max: max.unwrap_or(settings.flexible.max),
    };
    _generate(cli, params)
}

#[instrument(skip(cli, settings))]
fn _strict(
    cli: &Cli,
    settings: &Settings,
    total: Option<usize>,
    ratio: Option<usize>,
) -> CliResult<()> {
    let params = GenerationParams::Strict {
        total: total.unwrap_or(settings.strict.total),
        ratio: ratio.unwrap_or(settings.strict.ratio),
    };
    _generate(cli, params)
}

#[instrument(skip(cli, settings))]
fn _default(cli: &Cli, settings: &Settings) -> CliResult<()> {
    let params = settings.default_params()?;
    _generate(cli, params)
}

#[instrument(skip(cli))]
fn _generate(cli: &Cli, params: GenerationParams) -> CliResult<()> {
    debug!(?params, "generating hierarchy");
    let result = generate_hierarchy(&params)?;

    if cli.leaves {
        for leaf in result.root.leaf_nodes() {
            output::info(&leaf.id);
        }
    } else {
        output::info(&output::render_tree(&result.root));
    }

    if result.unplaced > 0 {
        output::warning(&format!(
            "could not place all employees, {} unassigned",
            result.unplaced
        ));
    }
    match result.reconciliation {
        Reconciliation::Balanced => {}
        Reconciliation::Repaired { added } => {
            output::warning(&format!(
                "employee count fell short, attached {} direct reports to the root",
                added
            ));
        }
        Reconciliation::Unresolved { expected, actual } => {
            output::failure(&format!(
                "employee count not repairable, expected {} got {}",
                expected, actual
            ));
        }
    }

    output::header("Organization Summary");
    output::info(&HierarchySummary::new(params.model(), &result));
    for line in param_lines(&params) {
        output::detail(&line);
    }
    Ok(())
}

/// Model-specific legend lines, mirroring the generation inputs.
fn param_lines(params: &GenerationParams) -> Vec<String> {
    match *params {
        GenerationParams::FixedLevels {
            levels,
            max_reports,
            ..
        } => vec![
            format!("Desired Levels: {}", levels),
            format!("Max Reports per Manager: {}", max_reports),
        ],
        GenerationParams::Flexible {
            ratio, min, max, ..
        } => vec![
            format!("Target Ratio: 1:{}", ratio),
            format!("Min Reports: {}", min),
            format!("Max Reports: {}", max),
        ],
        GenerationParams::Strict { ratio, .. } => {
            vec![format!("Strict Ratio: 1:{}", ratio)]
        }
    }
}

fn _config(settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&toml::to_string_pretty(settings)?);
            Ok(())
        }
        ConfigCommands::Path => {
            match Settings::global_config_path() {
                Some(path) => output::info(&path.display()),
                None => output::warning("no home directory found"),
            }
            Ok(())
        }
    }
}
