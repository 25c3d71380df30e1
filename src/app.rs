use crate::accessor::DateAccessor;
use crate::cli::{Cli, Commands};
use crate::consts::DATE_FORMAT;
use crate::error::AppError;
use crate::output::{
    DateReport, output_info_json, output_month_json, output_now_json, output_today_json,
    print_info_table,
};
use crate::utils::format_month_range;

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) accessor: &'a DateAccessor,
}

fn handle_today(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let today = ctx.accessor.today()?;
    if ctx.cli.json {
        println!("{}", output_today_json(&today));
    } else {
        println!("{}", today.to_rfc3339());
    }
    Ok(())
}

fn handle_now(ctx: &CommandContext<'_>, timezone: &str) -> Result<(), AppError> {
    let now = ctx.accessor.today_with_timezone(timezone)?;
    if ctx.cli.json {
        println!("{}", output_now_json(&now));
    } else {
        println!("{}", now.to_rfc3339());
    }
    Ok(())
}

fn print_month_json(ctx: &CommandContext<'_>, value: &str) -> Result<(), AppError> {
    let (start, next_start) = ctx.accessor.billing_month_range(value)?;
    let range = format_month_range(start, next_start);
    println!("{}", output_month_json(value, start, next_start, &range));
    Ok(())
}

fn handle_month_start(ctx: &CommandContext<'_>, value: &str) -> Result<(), AppError> {
    if ctx.cli.json {
        return print_month_json(ctx, value);
    }
    let start = ctx.accessor.get_billing_month_start(value)?;
    println!("{}", start.format(DATE_FORMAT));
    Ok(())
}

fn handle_month_range(ctx: &CommandContext<'_>, value: &str) -> Result<(), AppError> {
    if ctx.cli.json {
        return print_month_json(ctx, value);
    }
    println!("{}", ctx.accessor.month_date_range(value)?);
    Ok(())
}

fn handle_info(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let report = DateReport::build(ctx.accessor, ctx.cli.timezone.as_deref())?;
    if ctx.cli.json {
        println!("{}", output_info_json(&report));
    } else {
        print_info_table(&report, ctx.cli.use_color());
    }
    Ok(())
}

/// Dispatch a parsed command.
pub(crate) fn run_command(command: &Commands, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    match command {
        Commands::Today => handle_today(ctx),
        Commands::Now { timezone } => handle_now(ctx, timezone),
        Commands::MonthStart { value } => handle_month_start(ctx, value),
        Commands::MonthRange { value } => handle_month_range(ctx, value),
        Commands::Info => handle_info(ctx),
    }
}
