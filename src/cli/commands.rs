use std::fmt::Write as _;
use std::io;

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Args};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::config::{Preferences, Theme, ViewMode};
use crate::links::{LinkError, LinkRecord, LinkRegistry, ReorderTarget};
use crate::storage::KeyValueStore;

const MAX_NAME_WIDTH: usize = 24;
const ELLIPSIS: &str = "…";

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Print the list as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Display name (must be unique, case-insensitive)
    pub name: String,
    /// Page to open; https:// is added when no scheme is given
    pub url: String,
    /// Thumbnail image URL
    pub icon_url: String,
}

#[derive(Args, Debug, Clone)]
pub struct EditArgs {
    /// Link identifier
    pub id: String,
    /// New display name
    #[arg(long)]
    pub name: Option<String>,
    /// New page URL
    #[arg(long)]
    pub url: Option<String>,
    /// New thumbnail image URL
    #[arg(long)]
    pub icon_url: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct RemoveArgs {
    /// Link identifier
    pub id: String,
    /// Skip the confirmation prompt
    #[arg(long, short)]
    pub yes: bool,
}

#[derive(Args, Debug, Clone)]
#[command(group(ArgGroup::new("target").required(true).args(["before", "to"])))]
pub struct MoveArgs {
    /// Link identifier
    pub id: String,
    /// Place the link directly before this one
    #[arg(long)]
    pub before: Option<String>,
    /// Row number to move the link to, as numbered by `list` (#1 is the top)
    #[arg(long)]
    pub to: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Link identifier
    pub id: String,
}

#[derive(Args, Debug, Clone)]
pub struct ThemeArgs {
    /// dark or light; omit to print the current theme
    pub theme: Option<Theme>,
}

#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    /// list or grid; omit to print the current layout
    pub mode: Option<ViewMode>,
}

pub fn list_links<S: KeyValueStore>(registry: &LinkRegistry<S>, args: &ListArgs) -> Result<String> {
    if args.json {
        let mut json =
            serde_json::to_string_pretty(registry.links()).context("serializing link list")?;
        json.push('\n');
        return Ok(json);
    }
    Ok(format_links(registry.links()))
}

pub fn add_link<S: KeyValueStore>(registry: &mut LinkRegistry<S>, args: AddArgs) -> Result<String> {
    let link = registry
        .add(&args.name, &args.url, &args.icon_url)
        .map_err(describe)?;
    Ok(format!("Added '{}' ({})\n", link.name, link.id))
}

pub fn edit_link<S: KeyValueStore>(
    registry: &mut LinkRegistry<S>,
    args: EditArgs,
) -> Result<String> {
    let Some(current) = registry.get(&args.id).cloned() else {
        bail!("no link with id '{}'", args.id);
    };
    if args.name.is_none() && args.url.is_none() && args.icon_url.is_none() {
        bail!("nothing to change: pass --name, --url or --icon-url");
    }
    let name = args.name.unwrap_or(current.name);
    let url = args.url.unwrap_or(current.url);
    let icon_url = args.icon_url.unwrap_or(current.icon_url);

    let link = registry
        .update(&args.id, &name, &url, &icon_url)
        .map_err(describe)?;
    Ok(format!("Updated '{}' ({})\n", link.name, link.id))
}

pub fn remove_link<S, F>(
    registry: &mut LinkRegistry<S>,
    args: RemoveArgs,
    confirm: F,
) -> Result<String>
where
    S: KeyValueStore,
    F: FnOnce(&LinkRecord) -> Result<bool>,
{
    let Some(link) = registry.get(&args.id).cloned() else {
        return Ok(format!("No link with id '{}'; nothing removed\n", args.id));
    };
    if !args.yes && !confirm(&link)? {
        return Ok("Cancelled\n".to_string());
    }
    match registry.remove(&args.id).map_err(describe)? {
        Some(removed) => Ok(format!("Removed '{}'\n", removed.name)),
        None => Ok(format!("'{}' was already gone\n", link.name)),
    }
}

pub fn move_link<S: KeyValueStore>(
    registry: &mut LinkRegistry<S>,
    args: MoveArgs,
) -> Result<String> {
    let target = match (args.before, args.to) {
        (Some(before), _) => ReorderTarget::Before(before),
        (None, Some(0)) => bail!("rows are numbered from 1"),
        (None, Some(row)) => ReorderTarget::Index(row - 1),
        (None, None) => bail!("pass --before <id> or --to <row>"),
    };
    if !registry.reorder(&args.id, target).map_err(describe)? {
        return Ok("Nothing moved\n".to_string());
    }
    let row = registry.position(&args.id).unwrap_or_default() + 1;
    let name = registry
        .get(&args.id)
        .map(|link| link.name.as_str())
        .unwrap_or_default();
    Ok(format!("Moved '{name}' to #{row}\n"))
}

pub fn show_link<S: KeyValueStore>(registry: &LinkRegistry<S>, args: &ShowArgs) -> Result<String> {
    match registry.get(&args.id) {
        Some(link) => Ok(format!("{}\n", link.url)),
        None => bail!("no link with id '{}'", args.id),
    }
}

pub fn theme<S: KeyValueStore>(store: &S, args: ThemeArgs) -> Result<String> {
    let mut prefs = Preferences::load(store)?;
    if let Some(theme) = args.theme {
        prefs.set_theme(store, theme)?;
    }
    Ok(match prefs.theme {
        Some(theme) => format!("theme: {theme}\n"),
        None => "theme: system\n".to_string(),
    })
}

pub fn view<S: KeyValueStore>(store: &S, args: ViewArgs) -> Result<String> {
    let mut prefs = Preferences::load(store)?;
    if let Some(mode) = args.mode {
        prefs.set_view_mode(store, mode)?;
    }
    Ok(format!("view: {}\n", prefs.view_mode))
}

/// Interactive yes/no prompt. Refuses to guess when stdin is not a terminal.
pub fn confirm_removal(link: &LinkRecord) -> Result<bool> {
    use std::io::Write;
    if !atty::is(atty::Stream::Stdin) {
        bail!(
            "refusing to delete '{}' without --yes (stdin is not a terminal)",
            link.name
        );
    }
    let mut stdout = io::stdout();
    write!(stdout, "Delete '{}'? [y/N]: ", link.name)?;
    stdout.flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn describe(err: LinkError) -> anyhow::Error {
    if err.is_validation() {
        anyhow::anyhow!("invalid link: {err}")
    } else {
        anyhow::Error::new(err)
    }
}

fn format_links(links: &[LinkRecord]) -> String {
    if links.is_empty() {
        return "No links saved.\n".to_string();
    }
    let names: Vec<String> = links.iter().map(|link| fit_name(&link.name)).collect();
    let width = names.iter().map(|name| name.width()).max().unwrap_or(0);

    let mut out = String::new();
    for (index, (link, name)) in links.iter().zip(&names).enumerate() {
        let position = format!("#{}", index + 1);
        let padding = " ".repeat(width - name.width());
        let _ = writeln!(
            &mut out,
            "{position:<4}{name}{padding}  {}  ({})",
            link.url, link.id
        );
    }
    out
}

fn fit_name(name: &str) -> String {
    if name.width() <= MAX_NAME_WIDTH {
        return name.to_string();
    }
    let budget = MAX_NAME_WIDTH - ELLIPSIS.width();
    let mut fitted = String::new();
    for grapheme in name.graphemes(true) {
        if fitted.width() + grapheme.width() > budget {
            break;
        }
        fitted.push_str(grapheme);
    }
    fitted.push_str(ELLIPSIS);
    fitted
}
