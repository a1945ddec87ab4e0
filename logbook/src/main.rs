use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use logbook::core::ContentKind;
use logbook::feed::{LoadPhase, REFLECTIONS_PAGE_SIZE};
use logbook::parser;
use logbook::projectors::section_cards::{self, SectionSummary};
use logbook::session::{ContentFetcher, PortfolioSession};

#[derive(Debug, Parser)]
#[command(
    name = "logbook",
    about = "Learning-log tooling built on the logbook crate",
    version
)]
struct Cli {
    /// Enable verbose logging for debugging.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse a delimited data file and print its records.
    Parse(ParseArgs),

    /// Render the daily progress grid.
    Progress(ProgressArgs),

    /// Render the weekly reflection grid.
    Weeks(WeeksArgs),

    /// Render the tools grid.
    Tools(ToolsArgs),

    /// Render the achievements list.
    Achievements(AchievementsArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Delimited text file to parse.
    input: PathBuf,
    /// Field delimiter (single character). Defaults to a comma.
    #[arg(long)]
    delimiter: Option<char>,
    /// Emit JSON instead of a field-per-line listing.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct ProgressArgs {
    /// Directory holding the delimited data files.
    #[arg(long, default_value = "data")]
    data: PathBuf,
    /// Extra "load more" clicks applied after the first page.
    #[arg(long, default_value_t = 0)]
    more: u32,
    /// Open the detail view for this day (1-based).
    #[arg(long)]
    day: Option<usize>,
    /// Emit JSON instead of a human-readable list.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct WeeksArgs {
    /// Directory holding the delimited data files.
    #[arg(long, default_value = "data")]
    data: PathBuf,
    /// Extra "load more" clicks applied after the first page.
    #[arg(long, default_value_t = 0)]
    more: u32,
    /// Open the detail view for this week number.
    #[arg(long)]
    week: Option<String>,
    /// Emit JSON instead of a human-readable list.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct ToolsArgs {
    /// Directory holding the delimited data files.
    #[arg(long, default_value = "data")]
    data: PathBuf,
    /// Extra "show more" clicks applied after the first page.
    #[arg(long, default_value_t = 0)]
    more: u32,
    /// Emit JSON instead of a human-readable list.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct AchievementsArgs {
    /// Directory holding the delimited data files.
    #[arg(long, default_value = "data")]
    data: PathBuf,
    /// Emit JSON instead of a human-readable list.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();
    let cli = Cli::parse();
    let verbose = cli.verbose;
    match cli.command {
        Commands::Parse(args) => handle_parse(args, verbose),
        Commands::Progress(args) => handle_progress(args, verbose),
        Commands::Weeks(args) => handle_weeks(args, verbose),
        Commands::Tools(args) => handle_tools(args, verbose),
        Commands::Achievements(args) => handle_achievements(args, verbose),
    }
}

/* ------------------------------ Data access ------------------------------ */

struct DataDirFetcher {
    root: PathBuf,
    verbose: bool,
}

impl ContentFetcher for DataDirFetcher {
    fn fetch(&self, kind: ContentKind) -> Result<String> {
        let path = self.root.join(kind.file_name());
        if self.verbose {
            eprintln!("Reading {:?}", path);
        }
        fs::read_to_string(&path).with_context(|| format!("reading {:?}", path))
    }
}

/// Load every source from the data directory, exactly as the page does at
/// mount. Individual source failures stay warnings; commands that need a
/// specific source surface its failure through `ensure_loaded`.
fn load_session(data: &Path, verbose: bool) -> PortfolioSession {
    let fetcher = DataDirFetcher {
        root: data.to_path_buf(),
        verbose,
    };
    let mut session = PortfolioSession::new();
    session.load_all(&fetcher);
    session
}

fn ensure_loaded(session: &PortfolioSession, kind: ContentKind) -> Result<()> {
    if let LoadPhase::Failed(reason) = session.phase(kind) {
        anyhow::bail!("{} failed to load: {}", kind.file_name(), reason);
    }
    Ok(())
}

fn delimiter_byte(delimiter: Option<char>) -> Result<u8> {
    match delimiter {
        None => Ok(parser::DEFAULT_DELIMITER),
        Some(c) if c.is_ascii() => Ok(c as u8),
        Some(c) => anyhow::bail!("delimiter {c:?} is not a single-byte character"),
    }
}

/* -------------------------------- Handlers -------------------------------- */

fn handle_parse(args: ParseArgs, verbose: bool) -> Result<()> {
    let ParseArgs {
        input,
        delimiter,
        json,
    } = args;
    let delimiter = delimiter_byte(delimiter)?;
    if verbose {
        eprintln!("Parsing {:?}", input);
    }
    let text = fs::read_to_string(&input).with_context(|| format!("reading {:?}", input))?;
    let records =
        parser::parse_records(&text, delimiter).with_context(|| format!("parsing {:?}", input))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for (index, record) in records.iter().enumerate() {
            println!("record {index}:");
            for (name, value) in &record.fields {
                println!("  {name}: {value}");
            }
        }
    }
    Ok(())
}

fn handle_progress(args: ProgressArgs, verbose: bool) -> Result<()> {
    let ProgressArgs {
        data,
        more,
        day,
        json,
    } = args;
    let mut session = load_session(&data, verbose);
    ensure_loaded(&session, ContentKind::Progress)?;
    for _ in 0..more {
        session.reveal_more_progress();
    }

    if let Some(day) = day {
        if day == 0 || !session.open_entry(day - 1) {
            anyhow::bail!(
                "day {day} is not on screen; {} of {} entries are visible",
                session.progress().visible().len(),
                session.progress().len()
            );
        }
        let detail = section_cards::entry_detail(&session).context("no active day entry")?;
        if json {
            println!("{}", serde_json::to_string_pretty(&detail)?);
        } else {
            println!("{}: {}", detail.label, detail.title);
            println!("  image:   {}", detail.artwork.src());
            println!("  task:    {}", detail.task);
            println!("  tools:   {}", detail.tools);
            println!("  summary: {}", detail.summary1);
            println!("           {}", detail.summary2);
            if let Some(url) = &detail.linkedin_url {
                println!("  shared:  {url}");
            }
        }
        return Ok(());
    }

    let cards = section_cards::progress_cards(&session);
    let summary = section_cards::progress_summary(&session);
    if json {
        #[derive(serde::Serialize)]
        struct Output {
            cards: Vec<section_cards::ProgressCard>,
            summary: SectionSummary,
        }
        println!("{}", serde_json::to_string_pretty(&Output { cards, summary })?);
        return Ok(());
    }

    if cards.is_empty() {
        eprintln!("No progress entries to show.");
        return Ok(());
    }
    for card in &cards {
        println!("{:<8} {}", card.label, card.title);
        println!("         tools: {}", card.tools);
        println!("         task:  {}", card.task);
    }
    print_summary("entries", summary);
    Ok(())
}

fn handle_weeks(args: WeeksArgs, verbose: bool) -> Result<()> {
    let WeeksArgs {
        data,
        more,
        week,
        json,
    } = args;
    let mut session = load_session(&data, verbose);
    ensure_loaded(&session, ContentKind::Reflections)?;
    for _ in 0..more {
        session.reveal_more_reflections();
    }

    if let Some(week) = week {
        let index = session
            .reflections()
            .visible()
            .iter()
            .position(|r| r.week_number == week)
            .with_context(|| format!("week {week} is not on screen"))?;
        session.open_reflection(index);
        let detail = section_cards::reflection_detail(&session).context("no active reflection")?;
        if json {
            println!("{}", serde_json::to_string_pretty(&detail)?);
        } else {
            println!("{}", detail.heading);
            println!("  image:    {}", detail.artwork.src());
            println!("  overview: {}", detail.overview);
            println!("  learned:  {}", detail.key_learnings);
            println!("  thoughts: {}", detail.reflection);
            println!("  favorite: {}", detail.favorite_project);
        }
        return Ok(());
    }

    let cards = section_cards::reflection_cards(&session);
    let summary = section_cards::reflections_summary(&session);
    if json {
        #[derive(serde::Serialize)]
        struct Output {
            cards: Vec<section_cards::ReflectionCard>,
            summary: SectionSummary,
        }
        println!("{}", serde_json::to_string_pretty(&Output { cards, summary })?);
        return Ok(());
    }

    if cards.is_empty() {
        eprintln!("No weekly reflections to show.");
        return Ok(());
    }
    for card in &cards {
        println!("Week {:<4} {}", card.week_number, card.overview);
    }
    print_summary("weeks", summary);
    if !summary.has_more && summary.total > REFLECTIONS_PAGE_SIZE {
        println!("You've reached the end of the weekly reflections");
    }
    Ok(())
}

fn handle_tools(args: ToolsArgs, verbose: bool) -> Result<()> {
    let ToolsArgs { data, more, json } = args;
    let mut session = load_session(&data, verbose);
    ensure_loaded(&session, ContentKind::Tools)?;
    for _ in 0..more {
        session.reveal_more_tools();
    }

    let cards = section_cards::tool_cards(&session);
    let summary = section_cards::tools_summary(&session);
    if json {
        #[derive(serde::Serialize)]
        struct Output {
            cards: Vec<section_cards::ToolCard>,
            summary: SectionSummary,
        }
        println!("{}", serde_json::to_string_pretty(&Output { cards, summary })?);
        return Ok(());
    }

    if cards.is_empty() {
        eprintln!("No tools to show.");
        return Ok(());
    }
    for card in &cards {
        println!("{:<12} {}", card.name, card.description);
    }
    print_summary("tools", summary);
    Ok(())
}

fn handle_achievements(args: AchievementsArgs, verbose: bool) -> Result<()> {
    let AchievementsArgs { data, json } = args;
    let session = load_session(&data, verbose);
    ensure_loaded(&session, ContentKind::Achievements)?;

    let cards = section_cards::achievement_cards(&session);
    if json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    if cards.is_empty() {
        eprintln!("No achievements to show.");
        return Ok(());
    }
    for card in &cards {
        println!("{}", card.title);
        println!("  {}", card.description);
    }
    Ok(())
}

fn print_summary(noun: &str, summary: SectionSummary) {
    if summary.has_more {
        println!(
            "Showing {} of {} {noun}; pass --more to reveal another page.",
            summary.shown, summary.total
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_data_dir(dir: &Path) {
        fs::write(
            dir.join("progress.csv"),
            "title|tools|task|summary1|summary2|linkedinUrl\n\
             First day|ChatGPT|Build a bot|s1|s2|\n\
             |ChatGPT|Blank title row|s1|s2|\n",
        )
        .expect("write progress");
        fs::write(
            dir.join("reflection.csv"),
            "weekNumber|overview|keyLearnings|reflection|favoriteProject\n\
             1|First week|Prompts|Consistency|The bot\n",
        )
        .expect("write reflection");
        fs::write(
            dir.join("tools.csv"),
            "name,logoNumber,description\nChatGPT,1,Daily driver\n",
        )
        .expect("write tools");
        fs::write(
            dir.join("achievements.csv"),
            "title|description\nStreak|100 days\n",
        )
        .expect("write achievements");
    }

    #[test]
    fn session_loads_every_source_from_a_data_dir() {
        let tmp = tempfile::tempdir().expect("tempdir");
        write_data_dir(tmp.path());

        let session = load_session(tmp.path(), false);
        assert_eq!(session.progress().len(), 1);
        assert_eq!(session.reflections().len(), 1);
        assert_eq!(session.tools().len(), 1);
        assert_eq!(session.achievements().len(), 1);
        assert!(session.phase(ContentKind::Progress).is_ready());
    }

    #[test]
    fn a_missing_file_empties_only_its_own_section() {
        let tmp = tempfile::tempdir().expect("tempdir");
        write_data_dir(tmp.path());
        fs::remove_file(tmp.path().join("progress.csv")).expect("remove progress");

        let session = load_session(tmp.path(), false);
        assert!(session.progress().is_empty());
        assert!(ensure_loaded(&session, ContentKind::Progress).is_err());
        assert_eq!(session.tools().len(), 1);
        assert!(ensure_loaded(&session, ContentKind::Tools).is_ok());
    }

    #[test]
    fn delimiter_defaults_to_a_comma() {
        assert_eq!(delimiter_byte(None).expect("default"), b',');
        assert_eq!(delimiter_byte(Some('|')).expect("pipe"), b'|');
        assert!(delimiter_byte(Some('→')).is_err());
    }
}
