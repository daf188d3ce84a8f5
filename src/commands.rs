//! Subcommand handlers

use crate::catalog::{catalog, resolve_name};
use crate::cli::{Command, ConfigAction, GpuAction, SwapAction, TuneAction};
use crate::config::{DecktuneConfig, save_cfg, save_cfg_to};
use crate::paths::PATH_CONFIG;
use crate::game_data::{
    CancelToken, FsTransfer, GameId, InventoryEntry, MovePlan, MoveReport, MoveStatus,
    StorageEndpoint, SteamLibraries, SyncError, check_space, collect_endpoints, confirm, diff,
    execute, free_space, list_endpoints, list_game_records, remove_game_data, uninstalled_ids,
};
use crate::gpu::{RECOMMENDED_VRAM_MB, video_memory_mb};
use crate::progress::SyncProgress;
use crate::runner::SystemRunner;
use crate::swap::{GIB, resize_swap, swap_status};
use crate::tuning::{self, SysTunables, Tunable};

use std::collections::BTreeSet;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{error, warn};

pub fn run(
    command: Command,
    config: &DecktuneConfig,
    config_path: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Devices => devices(config),
        Command::List { uninstalled } => list(config, uninstalled),
        Command::Diff { left, right } => show_diff(config, left, right),
        Command::Sync { left, right, yes } => sync(config, left, right, yes),
        Command::Clean { ids, uninstalled } => clean(config, ids, uninstalled),
        Command::Tune { action } => tune(config, action),
        Command::Swap { action } => swap(config, action),
        Command::Gpu { action } => gpu(action),
        Command::Config { action } => settings(config, config_path, action),
    }
}

fn inventory(config: &DecktuneConfig) -> Vec<InventoryEntry> {
    let steam_root = config.steam_root();
    let source = SteamLibraries::new(&steam_root, &config.removable_media_root);
    collect_endpoints(&source, &config.internal_root, &steam_root)
}

fn endpoint_at(config: &DecktuneConfig, root: PathBuf) -> StorageEndpoint {
    StorageEndpoint::new(root, &config.internal_root, &config.steam_root())
}

/// Endpoint pair for diff and sync.
///
/// Both paths given are used as they are. Otherwise the pair comes from the
/// library inventory, where fewer than two locations is
/// [`SyncError::NoDevice`].
fn resolve_pair(
    config: &DecktuneConfig,
    left: Option<PathBuf>,
    right: Option<PathBuf>,
) -> Result<(StorageEndpoint, StorageEndpoint), SyncError> {
    if let (Some(left), Some(right)) = (&left, &right) {
        return Ok((
            endpoint_at(config, left.clone()),
            endpoint_at(config, right.clone()),
        ));
    }

    let steam_root = config.steam_root();
    let source = SteamLibraries::new(&steam_root, &config.removable_media_root);
    let entries = list_endpoints(&source, &config.internal_root, &steam_root)?;

    pick_pair(
        entries,
        left.map(|root| endpoint_at(config, root)),
        right.map(|root| endpoint_at(config, root)),
    )
}

/// Left defaults to the first endpoint (the internal storage), right to the
/// first endpoint with different trees
fn pick_pair(
    entries: Vec<InventoryEntry>,
    left: Option<StorageEndpoint>,
    right: Option<StorageEndpoint>,
) -> Result<(StorageEndpoint, StorageEndpoint), SyncError> {
    let found = entries.len();
    let mut endpoints = entries.into_iter().map(|entry| entry.endpoint);

    let left = match left {
        Some(endpoint) => endpoint,
        None => endpoints.next().ok_or(SyncError::NoDevice { found })?,
    };
    let right = match right {
        Some(endpoint) => endpoint,
        None => endpoints
            .find(|endpoint| endpoint.compat() != left.compat())
            .ok_or(SyncError::NoDevice { found })?,
    };

    Ok((left, right))
}

fn devices(config: &DecktuneConfig) -> Result<(), Box<dyn Error>> {
    for entry in inventory(config) {
        println!(
            "{}  ({} installed, data in {})",
            entry.endpoint,
            entry.installed.len(),
            entry.endpoint.compat().display()
        );
    }
    Ok(())
}

fn list(config: &DecktuneConfig, only_uninstalled: bool) -> Result<(), Box<dyn Error>> {
    let records = list_game_records(&inventory(config), catalog(config));

    for record in records
        .iter()
        .filter(|record| !only_uninstalled || !record.installed)
    {
        let state = if record.installed {
            "installed"
        } else {
            "not installed"
        };
        println!("{} - {} - {}", record.id, record.display_name, state);
    }
    Ok(())
}

fn print_ids(config: &DecktuneConfig, heading: &str, ids: &BTreeSet<GameId>, bytes: u64) {
    println!("{heading}: {} game(s), {}", ids.len(), human_bytes(bytes));
    for id in ids {
        println!("  {} - {}", id, resolve_name(config, *id));
    }
}

/// Free space on both sides, then the space check
fn space_check(
    config: &DecktuneConfig,
    plan: &MovePlan,
    left: &StorageEndpoint,
    right: &StorageEndpoint,
) -> Result<(), SyncError> {
    let free = |endpoint: &StorageEndpoint| {
        free_space(endpoint.compat()).map_err(|source| SyncError::FreeSpace {
            path: endpoint.compat().to_path_buf(),
            source,
        })
    };
    check_space(
        plan,
        left,
        free(left)?,
        right,
        free(right)?,
        config.space_margin_bytes,
    )
}

fn show_diff(
    config: &DecktuneConfig,
    left: Option<PathBuf>,
    right: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    let (left, right) = match resolve_pair(config, left, right) {
        Err(SyncError::NoDevice { .. }) => {
            println!("Only one storage location found, nothing to sync");
            return Ok(());
        }
        other => other?,
    };

    let plan = diff(&left, &right)?;
    print_ids(
        config,
        &format!("Only on {left}"),
        &plan.only_on_left,
        plan.left_extra_bytes,
    );
    print_ids(
        config,
        &format!("Only on {right}"),
        &plan.only_on_right,
        plan.right_extra_bytes,
    );

    match space_check(config, &plan, &left, &right) {
        Ok(()) => println!("Enough free space on both sides"),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn ask(prompt: &str) -> io::Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn sync(
    config: &DecktuneConfig,
    left: Option<PathBuf>,
    right: Option<PathBuf>,
    yes: bool,
) -> Result<(), Box<dyn Error>> {
    let (left, right) = match resolve_pair(config, left, right) {
        Err(SyncError::NoDevice { .. }) => {
            println!("Only one storage location found, nothing to sync");
            return Ok(());
        }
        other => other?,
    };

    let plan = diff(&left, &right)?;
    if plan.is_empty() {
        println!("{left} and {right} are already in sync");
        return Ok(());
    }

    space_check(config, &plan, &left, &right)?;

    println!(
        "{} game(s) to {right} ({}), {} game(s) to {left} ({})",
        plan.only_on_left.len(),
        human_bytes(plan.left_extra_bytes),
        plan.only_on_right.len(),
        human_bytes(plan.right_extra_bytes),
    );
    if !yes && !ask("Continue?")? {
        println!("Aborted");
        return Ok(());
    }

    let cancel = CancelToken::new();
    if let Err(e) = ctrlc::set_handler({
        let cancel = cancel.clone();
        move || cancel.cancel()
    }) {
        warn!("sync - Failed to register Ctrl-C handler: {}", e);
    }

    let bar = SyncProgress::new(plan.total_items());
    let report = execute(&plan, &left, &right, &FsTransfer, &cancel, |p| bar.update(p));
    bar.finish();

    for line in report_lines(&report, &left, &right) {
        println!("{line}");
    }

    match report.status() {
        MoveStatus::Cancelled => Ok(()),
        _ => match confirm(&plan, &left, &right) {
            Ok(()) => Ok(()),
            Err(e) => {
                error!("sync - {}", e);
                Err(e.into())
            }
        },
    }
}

fn report_lines(
    report: &MoveReport,
    left: &StorageEndpoint,
    right: &StorageEndpoint,
) -> Vec<String> {
    let failed = report.failures().count();
    let mut lines = vec![match report.status() {
        MoveStatus::Succeeded => format!("Completed: {} game(s) moved", report.succeeded_count()),
        MoveStatus::CompletedWithIssues => format!(
            "Completed with issues: {} moved, {} failed",
            report.succeeded_count(),
            failed
        ),
        MoveStatus::Failed => format!("Failed: none of {failed} game(s) moved"),
        MoveStatus::Cancelled => format!(
            "Cancelled after {} of {} game(s)",
            report.outcomes.len(),
            report.planned
        ),
    }];

    for outcome in report.failures() {
        if let Some(e) = &outcome.error {
            let (from, to) = outcome.direction.endpoints(left, right);
            lines.push(format!("  {} ({from} -> {to}): {e}", outcome.id));
        }
    }
    lines
}

fn clean(
    config: &DecktuneConfig,
    ids: Vec<GameId>,
    uninstalled: bool,
) -> Result<(), Box<dyn Error>> {
    let entries = inventory(config);
    let ids = if uninstalled {
        uninstalled_ids(&list_game_records(&entries, catalog(config)))
    } else {
        ids
    };
    if ids.is_empty() {
        println!("Nothing to clean");
        return Ok(());
    }

    let endpoints: Vec<StorageEndpoint> = entries.into_iter().map(|e| e.endpoint).collect();
    let outcomes = remove_game_data(&ids, &endpoints);

    let mut failed = 0;
    for outcome in &outcomes {
        for path in &outcome.removed {
            println!("{}: removed {}", outcome.id, path.display());
        }
        for (path, e) in &outcome.failures {
            failed += 1;
            println!("{}: failed to remove {}: {}", outcome.id, path.display(), e);
        }
    }

    if failed > 0 {
        return Err(format!("{failed} director(ies) could not be removed").into());
    }
    Ok(())
}

fn tune(config: &DecktuneConfig, action: TuneAction) -> Result<(), Box<dyn Error>> {
    let tunables = SysTunables::from_config(config);

    match action {
        TuneAction::Status => {
            for status in tuning::status(&tunables) {
                let marker = if status.is_recommended() { "*" } else { " " };
                println!(
                    "{marker} {:<26} {:<10} recommended {:<8} {}",
                    status.tunable.name(),
                    status.current.as_deref().unwrap_or("?"),
                    status.tunable.recommended(),
                    if status.persisted { "persisted" } else { "" },
                );
            }
        }
        TuneAction::Recommended => {
            let swap = swap_status(config)?;
            tuning::use_recommended(&tunables, &SystemRunner, &swap)?;
            println!("Recommended settings applied");
        }
        TuneAction::Stock => {
            let swap = swap_status(config)?;
            tuning::use_stock(&tunables, &SystemRunner, &swap)?;
            println!("Stock settings restored");
        }
        TuneAction::Toggle { tunable } => {
            let tunable: Tunable = tunable.parse()?;
            tuning::toggle(&tunables, tunable)?;
            let state = if tuning::is_recommended(&tunables, tunable) {
                "recommended"
            } else {
                "stock"
            };
            println!("{tunable} is now {state}");
        }
    }
    Ok(())
}

fn swap(config: &DecktuneConfig, action: SwapAction) -> Result<(), Box<dyn Error>> {
    match action {
        SwapAction::Status => {
            let status = swap_status(config)?;
            match &status.location {
                Some(location) => println!(
                    "Swap file {} ({})",
                    location.display(),
                    human_bytes(status.size_bytes)
                ),
                None => println!("No swap file"),
            }
            println!("Free space: {}", human_bytes(status.free_bytes));
            let sizes: Vec<String> = status.available_sizes.iter().map(u32::to_string).collect();
            println!("Available sizes (GiB): {}", sizes.join(", "));
            println!("Recommended size: {} GiB", status.recommended_size);
        }
        SwapAction::Resize { gb } => {
            let status = swap_status(config)?;
            resize_swap(&SystemRunner, &status, gb)?;
            println!("Swap file is now {} ({} GiB)", human_bytes(u64::from(gb) * GIB), gb);
        }
        SwapAction::Swappiness { value } => {
            let tunables = SysTunables::from_config(config);
            tuning::set_custom(&tunables, Tunable::Swappiness, &value.to_string())?;
            println!("Swappiness set to {value}");
        }
    }
    Ok(())
}

fn gpu(action: GpuAction) -> Result<(), Box<dyn Error>> {
    match action {
        GpuAction::Status => {
            let current = match video_memory_mb(&SystemRunner) {
                Ok(mb) => human_bytes(u64::from(mb) * 1024 * 1024),
                Err(e) => {
                    warn!("gpu - {}", e);
                    "unknown".to_string()
                }
            };
            println!("Dedicated video memory: {current}");
            println!(
                "Recommended: {} (set UMA Frame buffer size in the BIOS)",
                human_bytes(u64::from(RECOMMENDED_VRAM_MB) * 1024 * 1024)
            );
        }
    }
    Ok(())
}

fn settings(
    config: &DecktuneConfig,
    path: Option<&Path>,
    action: ConfigAction,
) -> Result<(), Box<dyn Error>> {
    match action {
        ConfigAction::Show => println!("{}", serde_json::to_string_pretty(config)?),
        ConfigAction::Init => {
            match path {
                Some(path) => save_cfg_to(config, path)?,
                None => save_cfg(config)?,
            }
            let shown = path
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PATH_CONFIG.join("settings.json"));
            println!("Wrote {}", shown.display());
        }
    }
    Ok(())
}

fn human_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}
