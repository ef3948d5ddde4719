//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{reports, ApplicationError};
use crate::cli::args::{Cli, Commands, DemoName};
use crate::cli::output;
use crate::cli::CliResult;
use crate::config::global_config_path;
use crate::domain::Forest;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::LineSink;

pub fn execute_command(
    cli: &Cli,
    container: &ServiceContainer,
    sink: &mut dyn LineSink,
) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Demo { name }) => demo(*name, container, sink),
        Some(Commands::Config) => show_config(container, sink),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

pub fn demo_forest(name: DemoName) -> CliResult<Forest> {
    let forest = match name {
        DemoName::Example => reports::example()?,
        DemoName::Levels => reports::severity_levels()?,
        DemoName::Breaks => reports::line_breaks()?,
        DemoName::Nested => reports::nested_groups()?,
    };
    Ok(forest)
}

#[instrument(level = "debug", skip(container, sink))]
fn demo(name: DemoName, container: &ServiceContainer, sink: &mut dyn LineSink) -> CliResult<()> {
    let forest = demo_forest(name)?;
    debug!("demo forest has {} nodes", forest.len());
    container.renderer().render(&forest, sink)?;
    Ok(())
}

fn show_config(container: &ServiceContainer, sink: &mut dyn LineSink) -> CliResult<()> {
    let path = global_config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<unavailable>".to_string());

    sink.write_line(&output::setting("color", &container.settings.color))
        .map_err(ApplicationError::from)?;
    sink.write_line(&output::setting("config file", &path))
        .map_err(ApplicationError::from)?;
    Ok(())
}
