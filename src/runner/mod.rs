//! CLI execution and command dispatch logic.
//!
//! This module keeps `main` minimal by providing a single entry point that
//! handles command execution. Output is written to a caller-supplied writer
//! so tests can capture it without spawning the binary.

mod error;

pub use error::RunnerError;

use std::borrow::Cow;
use std::io::{self, Write};

use anyhow::{Context, Result};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::catalogue::Catalogue;
use crate::cli::{Cli, Commands, LanguageArgs, Timestamp};
use crate::language::Language;
use crate::locale_resolution::{
    EnvProvider, SysLocale, SystemEnv, SystemLocale, resolve_default, resolve_override,
};
use crate::localization::{Localizer, keys};
use crate::locale_tree::parity::ParityReport;
use crate::setting::store::{FileStore, PreferenceStore};
use crate::setting::{History, LanguageSetting, Navigator};

/// Execute the parsed [`Cli`] against the process environment and stdout.
///
/// # Errors
///
/// Returns an error if the catalogue cannot be loaded, the preference cannot
/// be read or written, output fails, or `check` finds drift.
pub fn run(cli: &Cli) -> Result<()> {
    let mut stdout = io::stdout().lock();
    run_with(cli, &SystemEnv, &SysLocale, &mut stdout)
}

/// Execute the parsed [`Cli`] with explicit environment, host locale, and
/// output sink.
///
/// # Errors
///
/// See [`run`].
pub fn run_with(
    cli: &Cli,
    env: &impl EnvProvider,
    system: &impl SystemLocale,
    out: &mut impl Write,
) -> Result<()> {
    let catalogue = load_catalogue(cli)?;
    let navigator = language_route(&cli.command).map_or_else(History::default, History::starting_at);
    let store = FileStore::in_dir(&cli.state_dir);
    let mut setting = LanguageSetting::initialise(store, navigator, resolve_default(system));
    let language = resolve_override(cli.locale.as_deref(), env).unwrap_or_else(|| setting.get());
    debug!(%language, "resolved active language");
    let localizer = Localizer::new(&catalogue, language);

    match &cli.command {
        Commands::Resolve { keys } => handle_resolve(&localizer, keys, out),
        Commands::Format { at } => handle_format(&localizer, *at, out),
        Commands::Check => handle_check(&catalogue, &localizer, out),
        Commands::Keys { prefix } => handle_keys(&localizer, prefix.as_deref(), out),
        Commands::Language(args) => handle_language(&catalogue, &mut setting, args, out),
    }
}

fn language_route(command: &Commands) -> Option<&str> {
    match command {
        Commands::Language(LanguageArgs { route, .. }) => route.as_deref(),
        _ => None,
    }
}

fn load_catalogue(cli: &Cli) -> Result<Cow<'static, Catalogue>> {
    cli.locales_dir.as_deref().map_or_else(
        || Ok(Cow::Borrowed(Catalogue::embedded())),
        |dir| {
            Catalogue::from_dir(dir)
                .map(Cow::Owned)
                .with_context(|| format!("loading locale catalogue from {dir}"))
        },
    )
}

fn handle_resolve(localizer: &Localizer<'_>, keys: &[String], out: &mut impl Write) -> Result<()> {
    for key in keys {
        writeln!(out, "{}", localizer.t(key)).context("writing translation")?;
    }
    Ok(())
}

fn handle_format(localizer: &Localizer<'_>, at: Timestamp, out: &mut impl Write) -> Result<()> {
    let rendered = match at {
        Timestamp::Now => localizer.format_offset_datetime(OffsetDateTime::now_utc()),
        Timestamp::At(datetime) => localizer.format_datetime(datetime),
    };
    writeln!(out, "{rendered}").context("writing timestamp")?;
    Ok(())
}

fn handle_check(catalogue: &Catalogue, localizer: &Localizer<'_>, out: &mut impl Write) -> Result<()> {
    info!(
        target: "pharmadesk::subcommand",
        subcommand = "check",
        "Comparing locale catalogues"
    );
    let report = catalogue.parity();
    if report.is_clean() {
        writeln!(out, "{}", localizer.t(keys::CLI_PARITY_OK)).context("writing parity result")?;
        return Ok(());
    }
    write_report(&report, localizer, out).context("writing parity report")?;
    let count = report.missing_in_other.len()
        + report.missing_in_reference.len()
        + report.shape_mismatches.len();
    Err(RunnerError::CatalogueDrift { count }.into())
}

fn write_report(report: &ParityReport, localizer: &Localizer<'_>, out: &mut impl Write) -> io::Result<()> {
    let missing_in = localizer.t(keys::CLI_MISSING_IN);
    let sections = [
        (format!("{missing_in} {}", Language::Km), &report.missing_in_other),
        (format!("{missing_in} {}", Language::En), &report.missing_in_reference),
        (localizer.t(keys::CLI_SHAPE_MISMATCH).to_owned(), &report.shape_mismatches),
    ];
    for (heading, paths) in sections {
        if paths.is_empty() {
            continue;
        }
        writeln!(out, "{heading}:")?;
        for path in paths {
            writeln!(out, "  {path}")?;
        }
    }
    Ok(())
}

fn handle_keys(localizer: &Localizer<'_>, prefix: Option<&str>, out: &mut impl Write) -> Result<()> {
    for path in localizer
        .tree()
        .leaf_paths()
        .into_iter()
        .filter(|path| prefix.is_none_or(|wanted| path.starts_with(wanted)))
    {
        writeln!(out, "{path} = {}", localizer.t(&path)).context("writing key listing")?;
    }
    Ok(())
}

fn handle_language<S, N>(
    catalogue: &Catalogue,
    setting: &mut LanguageSetting<S, N>,
    args: &LanguageArgs,
    out: &mut impl Write,
) -> Result<()>
where
    S: PreferenceStore,
    N: Navigator,
{
    if let Some(tag) = &args.tag {
        setting
            .set(tag)
            .with_context(|| format!("switching language to '{tag}'"))?;
        let localizer = setting.localizer(catalogue);
        writeln!(out, "{}: {}", localizer.t(keys::CLI_LANGUAGE_SAVED), setting.get())
            .context("writing language confirmation")?;
        if args.route.is_some()
            && let Some(path) = setting.navigator().current_path()
        {
            writeln!(out, "{path}").context("writing rewritten route")?;
        }
        return Ok(());
    }
    let current = setting.get();
    let localizer = setting.localizer(catalogue);
    writeln!(
        out,
        "{}: {} ({})",
        localizer.t(keys::CLI_CURRENT_LANGUAGE),
        current,
        current.native_name()
    )
    .context("writing current language")?;
    Ok(())
}
