use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::engine::Engine;
use crate::error::AppError;
use crate::output::{
    TableOptions, print_cache, print_daily, print_heatmap, print_insights, print_models,
    print_overview, print_projects, print_tools, to_json,
};
use crate::pricing::PricingTable;
use crate::source::ClaudePaths;
use crate::utils::Timezone;

pub(crate) struct CommandContext {
    pub(crate) json: bool,
    pub(crate) options: TableOptions,
}

impl CommandContext {
    pub(crate) fn from_cli(cli: &Cli) -> Self {
        Self {
            json: cli.json,
            options: TableOptions {
                use_color: cli.use_color(),
                top: cli.top(),
            },
        }
    }
}

fn validate_subscription_cost(value: Option<f64>) -> Result<Option<f64>, AppError> {
    match value {
        Some(cost) if !cost.is_finite() || cost < 0.0 => Err(AppError::InvalidSubscriptionCost {
            input: cost.to_string(),
        }),
        other => Ok(other),
    }
}

/// Wire the engine from merged CLI/config values.
pub(crate) fn build_engine(cli: &Cli, config: &Config) -> Result<Engine, AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let paths = ClaudePaths::resolve(cli.claude_dir.clone());
    let pricing = PricingTable::builtin().with_overrides(&config.pricing);
    tracing::debug!(
        root = %paths.root.display(),
        priced_models = pricing.len(),
        "resolved data directory"
    );

    let mut engine = Engine::new(paths)
        .with_pricing(pricing)
        .with_timezone(timezone);
    if let Some(cost) = validate_subscription_cost(cli.subscription_cost)? {
        engine = engine.with_subscription_cost(cost);
    }
    Ok(engine)
}

/// Print either the JSON document or the table view of a report.
fn emit<T: serde::Serialize>(ctx: &CommandContext, report: &T, table: impl FnOnce(&T, TableOptions)) {
    if ctx.json {
        println!("{}", to_json(report));
    } else {
        table(report, ctx.options);
    }
}

fn handle_stats(engine: &Engine, ctx: &CommandContext) -> Result<(), AppError> {
    let report = engine.overview()?;
    emit(ctx, &report, print_overview);
    Ok(())
}

fn handle_daily(engine: &Engine, ctx: &CommandContext) {
    let days = engine.daily();
    emit(ctx, &days, |days, options| print_daily(days, options));
}

fn handle_heatmap(engine: &Engine, ctx: &CommandContext) {
    emit(ctx, &engine.heatmap(), print_heatmap);
}

fn handle_insights(engine: &Engine, ctx: &CommandContext) -> Result<(), AppError> {
    let report = engine.insights()?;
    emit(ctx, &report, print_insights);
    Ok(())
}

fn handle_cache(engine: &Engine, ctx: &CommandContext) -> Result<(), AppError> {
    let report = engine.cache()?;
    emit(ctx, &report, print_cache);
    Ok(())
}

fn handle_projects(engine: &Engine, ctx: &CommandContext) {
    let projects = engine.projects();
    emit(ctx, &projects, |projects, options| print_projects(projects, options));
}

fn handle_tools(engine: &Engine, ctx: &CommandContext) {
    emit(ctx, &engine.tools(), print_tools);
}

fn handle_models(engine: &Engine, ctx: &CommandContext) -> Result<(), AppError> {
    let models = engine.models()?;
    emit(ctx, &models, |models, options| print_models(models, options));
    Ok(())
}

pub(crate) fn run_command(
    command: Commands,
    engine: &Engine,
    ctx: &CommandContext,
) -> Result<(), AppError> {
    tracing::debug!(?command, root = %engine.paths().root.display(), "running query");
    match command {
        Commands::Stats => handle_stats(engine, ctx)?,
        Commands::Daily => handle_daily(engine, ctx),
        Commands::Heatmap => handle_heatmap(engine, ctx),
        Commands::Insights => handle_insights(engine, ctx)?,
        Commands::Cache => handle_cache(engine, ctx)?,
        Commands::Projects => handle_projects(engine, ctx),
        Commands::Tools => handle_tools(engine, ctx),
        Commands::Models => handle_models(engine, ctx)?,
    }
    Ok(())
}
