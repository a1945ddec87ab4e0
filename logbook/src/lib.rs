//! Learning-log domain library for a day-by-day AI study journal.
//! Keeps the core pure: validated load-once content stores, incremental
//! pagination, detail selection, and viewport tracking, with rendering and
//! delivery left to thin collaborators on top.

pub mod core {
    use serde::{Deserialize, Serialize};

    /* ------------------------------ Records ------------------------------ */

    /// One day of logged progress. Identity is the 1-based position in load
    /// order; the record itself carries no day number.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ProgressEntry {
        pub title: String,
        /// Tool list exactly as written in the source row.
        pub tools: String,
        pub task: String,
        pub summary1: String,
        pub summary2: String,
        /// Share link; rendered only when present.
        pub linkedin_url: Option<String>,
    }

    impl ProgressEntry {
        /// Entries without a real title never enter the store.
        pub fn is_valid(&self) -> bool {
            !self.title.trim().is_empty()
        }
    }

    /// One week of reflection. The week number is both the identity and the
    /// artwork key.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct WeeklyReflection {
        pub week_number: String,
        pub overview: String,
        pub key_learnings: String,
        pub reflection: String,
        pub favorite_project: String,
    }

    impl WeeklyReflection {
        pub fn is_valid(&self) -> bool {
            !self.week_number.is_empty()
        }

        pub fn artwork_path(&self) -> String {
            format!("/images/reflections/week{}.png", self.week_number)
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Tool {
        pub name: String,
        pub logo_number: String,
        pub description: String,
    }

    impl Tool {
        pub fn is_valid(&self) -> bool {
            !self.name.is_empty()
        }

        pub fn artwork_path(&self) -> String {
            format!("/images/tools/logo{}.png", self.logo_number)
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Achievement {
        pub title: String,
        pub description: String,
    }

    impl Achievement {
        pub fn is_valid(&self) -> bool {
            !self.title.is_empty()
        }
    }

    /* ------------------------------- Sources ------------------------------- */

    /// The four independent content sources. Each loads once per session and
    /// a failure in one never touches the other three.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum ContentKind {
        Progress,
        Reflections,
        Tools,
        Achievements,
    }

    impl ContentKind {
        /// Mount order on the page; completion order is unconstrained.
        pub const ALL: [ContentKind; 4] = [
            ContentKind::Progress,
            ContentKind::Reflections,
            ContentKind::Tools,
            ContentKind::Achievements,
        ];

        /// Source file name under the data directory.
        pub fn file_name(&self) -> &'static str {
            match self {
                ContentKind::Progress => "progress.csv",
                ContentKind::Reflections => "reflection.csv",
                ContentKind::Tools => "tools.csv",
                ContentKind::Achievements => "achievements.csv",
            }
        }

        /// Field delimiter of the source payload. The tools sheet is a plain
        /// comma file; the free-text sources use pipes so prose can keep its
        /// commas.
        pub fn delimiter(&self) -> u8 {
            match self {
                ContentKind::Tools => b',',
                _ => b'|',
            }
        }
    }

    /* ---------------------------- Identity labels ---------------------------- */

    /// 1-based ordinal of a progress entry within the load order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct DayNumber(pub usize);

    impl DayNumber {
        pub fn from_index(index: usize) -> Self {
            Self(index + 1)
        }

        pub fn label(&self) -> String {
            format!("Day {}", self.0)
        }

        pub fn artwork_path(&self) -> String {
            format!("/images/daily progress/day{}.jpg", self.0)
        }
    }

    /* ---------------------------- Artwork slots ---------------------------- */

    pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.jpg";
    pub const TOOL_PLACEHOLDER_IMAGE: &str = "/images/tools/placeholder.jpg";

    /// An image source with a one-shot fallback: the first load failure swaps
    /// to the placeholder and disarms the handler, so a failing placeholder is
    /// never retried.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ImageSlot {
        src: String,
        fallback: String,
        fell_back: bool,
    }

    impl ImageSlot {
        pub fn new(src: String, fallback: &str) -> Self {
            Self {
                src,
                fallback: fallback.to_string(),
                fell_back: false,
            }
        }

        pub fn src(&self) -> &str {
            &self.src
        }

        /// Report a load failure. Returns true when the slot switched to its
        /// fallback; later failures are no-ops.
        pub fn mark_failed(&mut self) -> bool {
            if self.fell_back {
                return false;
            }
            self.src = self.fallback.clone();
            self.fell_back = true;
            true
        }
    }

    /* ---------------------------- Hosting base path ---------------------------- */

    /// URL prefix for statically hosted assets. Local development serves from
    /// the root; project-pages hosting nests the site under the repository
    /// name, which arrives as the first path segment.
    pub fn base_path(hostname: &str, pathname: &str) -> String {
        if hostname == "localhost" || hostname == "127.0.0.1" {
            return String::new();
        }
        let first = pathname.split('/').nth(1).unwrap_or("");
        format!("/{first}")
    }

    /* ---------------------------- Errors (domain) ---------------------------- */

    /// Why a content source ended up empty.
    #[derive(Debug, thiserror::Error)]
    pub enum SourceError {
        #[error("source fetch failed: {0}")]
        Fetch(String),
        #[error("source payload did not parse: {0}")]
        Parse(String),
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn day_numbers_are_one_based() {
            let day = DayNumber::from_index(0);
            assert_eq!(day.label(), "Day 1");
            assert_eq!(day.artwork_path(), "/images/daily progress/day1.jpg");
        }

        #[test]
        fn image_slot_falls_back_exactly_once() {
            let mut slot = ImageSlot::new("/images/reflections/week3.png".into(), PLACEHOLDER_IMAGE);
            assert!(slot.mark_failed());
            assert_eq!(slot.src(), PLACEHOLDER_IMAGE);
            assert!(!slot.mark_failed());
            assert_eq!(slot.src(), PLACEHOLDER_IMAGE);
        }

        #[test]
        fn base_path_is_empty_for_local_hosts() {
            assert_eq!(base_path("localhost", "/anything/here"), "");
            assert_eq!(base_path("127.0.0.1", "/anything"), "");
        }

        #[test]
        fn base_path_uses_first_segment_on_project_hosting() {
            assert_eq!(base_path("user.github.io", "/my-log/index.html"), "/my-log");
        }

        #[test]
        fn whitespace_titles_are_invalid() {
            let entry = ProgressEntry {
                title: "   ".into(),
                tools: String::new(),
                task: String::new(),
                summary1: String::new(),
                summary2: String::new(),
                linkedin_url: None,
            };
            assert!(!entry.is_valid());
        }
    }
}

pub mod parser {
    //! Delimited-record parser built on `nom`.
    //!
    //! The first line names the fields; every following line is one record.
    //! Rows shorter than the header leave trailing fields absent, longer rows
    //! keep only the named prefix. Validation is the store's job: blank lines
    //! still come back as (empty) records so a single predicate decides what
    //! survives.

    use crate::core::*;
    use anyhow::{Result, anyhow};
    use indexmap::IndexMap;
    use nom::{
        IResult,
        bytes::complete::take_while,
        character::complete::char,
        combinator::map,
        error::VerboseError,
        multi::separated_list0,
    };
    use serde::{Deserialize, Serialize};

    /* ------------------------ Public entry points ------------------------ */

    pub const DEFAULT_DELIMITER: u8 = b',';

    /// One parsed row: field name to cell value, in header order.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct RawRecord {
        pub fields: IndexMap<String, String>,
    }

    impl RawRecord {
        /// Cell value for `name`, or the empty string when the row had no
        /// such cell.
        pub fn field(&self, name: &str) -> &str {
            self.fields.get(name).map(String::as_str).unwrap_or("")
        }

        /// Cell value for `name` when present and non-empty.
        pub fn field_opt(&self, name: &str) -> Option<String> {
            let value = self.field(name);
            if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        }
    }

    /// Parse a delimited payload with a header row into records.
    pub fn parse_records(input: &str, delimiter: u8) -> Result<Vec<RawRecord>> {
        let delimiter = char::from(delimiter);
        let mut lines = payload_lines(input);
        let Some(header_line) = lines.next() else {
            return Ok(Vec::new());
        };
        let (_, header) = row_cells(delimiter)(header_line).map_err(to_anyhow("header row"))?;

        let mut records = Vec::new();
        for line in lines {
            let (_, cells) = row_cells(delimiter)(line).map_err(to_anyhow("data row"))?;
            let mut fields = IndexMap::new();
            for (name, cell) in header.iter().zip(cells) {
                fields.insert(name.clone(), cell);
            }
            records.push(RawRecord { fields });
        }
        Ok(records)
    }

    /* --------------------------- Typed sources --------------------------- */

    /// Parse the daily progress source.
    pub fn parse_progress(input: &str) -> Result<Vec<ProgressEntry>> {
        let records = parse_records(input, ContentKind::Progress.delimiter())?;
        Ok(records.iter().map(progress_entry).collect())
    }

    /// Parse the weekly reflections source.
    pub fn parse_reflections(input: &str) -> Result<Vec<WeeklyReflection>> {
        let records = parse_records(input, ContentKind::Reflections.delimiter())?;
        Ok(records.iter().map(weekly_reflection).collect())
    }

    /// Parse the tools source.
    pub fn parse_tools(input: &str) -> Result<Vec<Tool>> {
        let records = parse_records(input, ContentKind::Tools.delimiter())?;
        Ok(records.iter().map(tool).collect())
    }

    /// Parse the achievements source.
    pub fn parse_achievements(input: &str) -> Result<Vec<Achievement>> {
        let records = parse_records(input, ContentKind::Achievements.delimiter())?;
        Ok(records.iter().map(achievement).collect())
    }

    fn progress_entry(record: &RawRecord) -> ProgressEntry {
        ProgressEntry {
            title: record.field("title").to_string(),
            tools: record.field("tools").to_string(),
            task: record.field("task").to_string(),
            summary1: record.field("summary1").to_string(),
            summary2: record.field("summary2").to_string(),
            linkedin_url: record.field_opt("linkedinUrl"),
        }
    }

    fn weekly_reflection(record: &RawRecord) -> WeeklyReflection {
        WeeklyReflection {
            week_number: record.field("weekNumber").to_string(),
            overview: record.field("overview").to_string(),
            key_learnings: record.field("keyLearnings").to_string(),
            reflection: record.field("reflection").to_string(),
            favorite_project: record.field("favoriteProject").to_string(),
        }
    }

    fn tool(record: &RawRecord) -> Tool {
        Tool {
            name: record.field("name").to_string(),
            logo_number: record.field("logoNumber").to_string(),
            description: record.field("description").to_string(),
        }
    }

    fn achievement(record: &RawRecord) -> Achievement {
        Achievement {
            title: record.field("title").to_string(),
            description: record.field("description").to_string(),
        }
    }

    /* ------------------------------- Grammar ------------------------------- */

    type PResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

    fn row_cells(delimiter: char) -> impl Fn(&str) -> PResult<'_, Vec<String>> {
        move |i: &str| {
            map(
                separated_list0(
                    char(delimiter),
                    take_while(move |c: char| c != delimiter && c != '\r' && c != '\n'),
                ),
                |cells: Vec<&str>| cells.into_iter().map(str::to_string).collect(),
            )(i)
        }
    }

    fn payload_lines(input: &str) -> impl Iterator<Item = &str> {
        input
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
    }

    fn to_anyhow(label: &'static str) -> impl Fn(nom::Err<VerboseError<&str>>) -> anyhow::Error {
        move |e| match e {
            nom::Err::Error(ve) | nom::Err::Failure(ve) => {
                let msg = pretty_verbose_error(label, ve);
                anyhow!(msg)
            }
            nom::Err::Incomplete(_) => anyhow!("incomplete input while parsing {}", label),
        }
    }

    fn pretty_verbose_error(label: &str, ve: VerboseError<&str>) -> String {
        use std::fmt::Write;
        let mut s = String::new();
        let _ = writeln!(s, "parse error in {}:", label);
        for (frag, kind) in ve.errors {
            let show = frag
                .get(0..frag.find('\n').unwrap_or(frag.len()))
                .unwrap_or(frag);
            let _ = writeln!(s, "  at: {:?}  {:?}", show, kind);
        }
        s
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn maps_cells_to_header_fields_in_order() {
            let records = parse_records("title|tools|task\nDay one|ChatGPT|Build a bot\n", b'|')
                .expect("parse");
            assert_eq!(records.len(), 2);
            assert_eq!(records[0].field("title"), "Day one");
            assert_eq!(records[0].field("tools"), "ChatGPT");
            assert_eq!(records[0].field("task"), "Build a bot");
            let names: Vec<&str> = records[0].fields.keys().map(String::as_str).collect();
            assert_eq!(names, ["title", "tools", "task"]);
        }

        #[test]
        fn short_rows_leave_trailing_fields_absent() {
            let records = parse_records("a|b|c\nonly", b'|').expect("parse");
            assert_eq!(records[0].field("a"), "only");
            assert_eq!(records[0].field("b"), "");
            assert_eq!(records[0].field("c"), "");
            assert_eq!(records[0].field_opt("b"), None);
        }

        #[test]
        fn extra_cells_are_ignored() {
            let records = parse_records("a|b\n1|2|3|4", b'|').expect("parse");
            assert_eq!(records[0].fields.len(), 2);
            assert_eq!(records[0].field("b"), "2");
        }

        #[test]
        fn empty_input_yields_no_records() {
            assert!(parse_records("", b'|').expect("parse").is_empty());
        }

        #[test]
        fn trailing_newline_becomes_an_empty_record() {
            // The store predicate, not the parser, is what drops these.
            let records = parse_records("title\nreal\n", b'|').expect("parse");
            assert_eq!(records.len(), 2);
            assert_eq!(records[1].field("title"), "");
        }

        #[test]
        fn default_delimiter_is_a_comma() {
            let records =
                parse_records("name,logoNumber\nChatGPT,1\n", DEFAULT_DELIMITER).expect("parse");
            assert_eq!(records[0].field("name"), "ChatGPT");
            assert_eq!(records[0].field("logoNumber"), "1");
        }

        #[test]
        fn pipes_keep_commas_inside_prose() {
            let records = parse_records("title|task\nDay 4|Wire forms, sheets, and mail\n", b'|')
                .expect("parse");
            assert_eq!(records[0].field("task"), "Wire forms, sheets, and mail");
        }

        #[test]
        fn crlf_line_endings_parse_cleanly() {
            let records = parse_records("a|b\r\n1|2\r\n", b'|').expect("parse");
            assert_eq!(records[0].field("a"), "1");
            assert_eq!(records[0].field("b"), "2");
        }

        #[test]
        fn typed_progress_mapping_keeps_optional_link() {
            let input = "title|tools|task|summary1|summary2|linkedinUrl\n\
                         With link|t|k|s1|s2|https://example.com/post\n\
                         Without link|t|k|s1|s2|\n";
            let entries = parse_progress(input).expect("parse");
            assert_eq!(
                entries[0].linkedin_url.as_deref(),
                Some("https://example.com/post")
            );
            assert_eq!(entries[1].linkedin_url, None);
        }
    }
}

pub mod feed {
    //! Load-once content feeds: a validated collection plus the monotonic
    //! "reveal one more page" machine that gates what is rendered.

    use serde::{Deserialize, Serialize};

    /// Records revealed per click in the daily progress grid.
    pub const PROGRESS_PAGE_SIZE: usize = 15;
    /// Reflections revealed per click.
    pub const REFLECTIONS_PAGE_SIZE: usize = 9;
    /// Tools revealed per click.
    pub const TOOLS_PAGE_SIZE: usize = 6;

    /* ------------------------------- Pager ------------------------------- */

    /// Monotonic pagination over an ordered collection. The displayed subset
    /// is always the prefix `items[0..displayed]` and only ever grows.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Pager {
        page_size: usize,
        displayed: usize,
        loading: bool,
    }

    impl Pager {
        pub fn new(page_size: usize) -> Self {
            Self {
                page_size,
                displayed: 0,
                loading: false,
            }
        }

        /// Show the first page. Called once, when the owning store loads.
        pub fn prime(&mut self, len: usize) {
            self.displayed = self.page_size.min(len);
        }

        /// Reveal up to one more page. Calling past the end of the collection
        /// or while a reveal is in flight is a safe no-op.
        pub fn reveal_more(&mut self, len: usize) {
            if self.loading || self.displayed >= len {
                return;
            }
            self.displayed = (self.displayed + self.page_size).min(len);
        }

        /// Mark a reveal in flight; further reveals are no-ops until cleared.
        pub fn begin_loading(&mut self) {
            self.loading = true;
        }

        pub fn finish_loading(&mut self) {
            self.loading = false;
        }

        pub fn is_loading(&self) -> bool {
            self.loading
        }

        pub fn displayed(&self) -> usize {
            self.displayed
        }

        pub fn page_size(&self) -> usize {
            self.page_size
        }

        /// Whether a "load more" affordance should render.
        pub fn has_more(&self, len: usize) -> bool {
            self.displayed < len
        }
    }

    /* ------------------------------- Feeds ------------------------------- */

    /// A validated, load-once collection and its pager.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Paged<T> {
        items: Vec<T>,
        pager: Pager,
    }

    impl<T> Paged<T> {
        pub fn new(page_size: usize) -> Self {
            Self {
                items: Vec::new(),
                pager: Pager::new(page_size),
            }
        }

        /// Install the loaded collection and show the first page.
        pub fn fill(&mut self, items: Vec<T>) {
            self.items = items;
            self.pager.prime(self.items.len());
        }

        pub fn reveal_more(&mut self) {
            self.pager.reveal_more(self.items.len());
        }

        /// The rendered prefix, in original order.
        pub fn visible(&self) -> &[T] {
            &self.items[..self.pager.displayed()]
        }

        pub fn all(&self) -> &[T] {
            &self.items
        }

        pub fn len(&self) -> usize {
            self.items.len()
        }

        pub fn is_empty(&self) -> bool {
            self.items.is_empty()
        }

        pub fn has_more(&self) -> bool {
            self.pager.has_more(self.items.len())
        }

        pub fn pager_mut(&mut self) -> &mut Pager {
            &mut self.pager
        }
    }

    /* ----------------------------- Load state ----------------------------- */

    /// Lifecycle of a content source. Each source fetches at most once per
    /// session; a second attempt while one is in flight is rejected.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub enum LoadPhase {
        NotStarted,
        Loading,
        Ready,
        Failed(String),
    }

    impl LoadPhase {
        /// Whether a new fetch may begin.
        pub fn can_begin(&self) -> bool {
            matches!(self, LoadPhase::NotStarted)
        }

        pub fn is_ready(&self) -> bool {
            matches!(self, LoadPhase::Ready)
        }
    }

}

pub mod selection {
    //! At-most-one active detail item per content kind. The two slots are
    //! independent: opening a reflection leaves the active day entry alone.

    use serde::{Deserialize, Serialize};

    use crate::core::{DayNumber, ProgressEntry, WeeklyReflection};

    /// A progress entry opened in the detail overlay, together with the day
    /// it was rendered under (the record itself carries no ordinal).
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SelectedEntry {
        pub day: DayNumber,
        pub entry: ProgressEntry,
    }

    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Selection {
        active_entry: Option<SelectedEntry>,
        active_reflection: Option<WeeklyReflection>,
    }

    impl Selection {
        pub fn new() -> Self {
            Self::default()
        }

        /// Open a day entry; replaces whatever was open before.
        pub fn select_entry(&mut self, day: DayNumber, entry: ProgressEntry) {
            self.active_entry = Some(SelectedEntry { day, entry });
        }

        /// Close the entry overlay. A no-op when nothing is open.
        pub fn dismiss_entry(&mut self) {
            self.active_entry = None;
        }

        pub fn select_reflection(&mut self, reflection: WeeklyReflection) {
            self.active_reflection = Some(reflection);
        }

        pub fn dismiss_reflection(&mut self) {
            self.active_reflection = None;
        }

        pub fn active_entry(&self) -> Option<&SelectedEntry> {
            self.active_entry.as_ref()
        }

        pub fn active_reflection(&self) -> Option<&WeeklyReflection> {
            self.active_reflection.as_ref()
        }
    }

}

pub mod viewport {
    //! Scroll-position bookkeeping for the single-page layout: which named
    //! section is current for nav highlighting, and which sections have been
    //! revealed at least once for the one-shot fade-in.

    use std::collections::BTreeSet;

    use serde::{Deserialize, Serialize};

    /// Offset added to the raw scroll position before hit-testing sections.
    pub const SCROLL_PROBE_OFFSET: i64 = 100;

    /// Fraction of a section that must enter the viewport before its one-time
    /// reveal fires.
    pub const REVEAL_THRESHOLD: f64 = 0.1;

    /// Ordered nav bar: label to section id.
    pub const NAV_LINKS: &[(&str, &str)] = &[
        ("Home", "home"),
        ("Daily Progress", "daily-progress"),
        ("Weekly Progress", "weekly-progress"),
        ("Achievements", "achievements"),
        ("About", "about"),
        ("Contact", "contact"),
    ];

    /// One named page region, registered in document order.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Section {
        pub id: String,
        pub top: i64,
        pub height: i64,
    }

    impl Section {
        fn contains(&self, probe: i64) -> bool {
            probe >= self.top && probe < self.top + self.height
        }
    }

    /// Tracks the section the viewport currently sits in. Iteration follows
    /// registration (document) order, so when bounds overlap the later
    /// section wins. Once something has been active it stays active until a
    /// different section matches.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SectionTracker {
        sections: Vec<Section>,
        active: Option<String>,
    }

    impl SectionTracker {
        pub fn new() -> Self {
            Self::default()
        }

        /// Register a section. Call in document order.
        pub fn register(&mut self, id: impl Into<String>, top: i64, height: i64) {
            self.sections.push(Section {
                id: id.into(),
                top,
                height,
            });
        }

        /// Recompute the active section for a scroll offset. Pure in the
        /// offset, so callers may throttle or batch scroll events freely.
        pub fn update(&mut self, scroll_y: i64) -> Option<&str> {
            let probe = scroll_y + SCROLL_PROBE_OFFSET;
            for section in &self.sections {
                if section.contains(probe) {
                    self.active = Some(section.id.clone());
                }
            }
            self.active_section()
        }

        pub fn active_section(&self) -> Option<&str> {
            self.active.as_deref()
        }
    }

    /// One-shot reveal marks, independent of active-section tracking: once a
    /// section has been seen it never goes back to hidden.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct RevealObserver {
        revealed: BTreeSet<String>,
    }

    impl RevealObserver {
        pub fn new() -> Self {
            Self::default()
        }

        /// Report the currently visible fraction of a section. Returns true
        /// the first time the threshold is met.
        pub fn observe(&mut self, id: &str, visible_fraction: f64) -> bool {
            if visible_fraction >= REVEAL_THRESHOLD && !self.revealed.contains(id) {
                self.revealed.insert(id.to_string());
                return true;
            }
            false
        }

        pub fn is_revealed(&self, id: &str) -> bool {
            self.revealed.contains(id)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn page() -> SectionTracker {
            let mut tracker = SectionTracker::new();
            tracker.register("home", 0, 600);
            tracker.register("daily-progress", 600, 900);
            tracker.register("contact", 1500, 400);
            tracker
        }

        #[test]
        fn probe_sits_below_the_raw_offset() {
            let mut tracker = page();
            // Offset 550 probes at 650, inside daily-progress.
            assert_eq!(tracker.update(550), Some("daily-progress"));
        }

        #[test]
        fn later_section_wins_when_bounds_overlap() {
            let mut tracker = SectionTracker::new();
            tracker.register("outer", 0, 2000);
            tracker.register("inner", 500, 300);
            assert_eq!(tracker.update(600), Some("inner"));
        }

        #[test]
        fn active_is_retained_when_nothing_matches() {
            let mut tracker = page();
            tracker.update(0);
            assert_eq!(tracker.update(10_000), Some("home"));
        }

        #[test]
        fn no_section_is_active_before_a_first_match() {
            let mut tracker = page();
            assert_eq!(tracker.update(10_000), None);
        }

        #[test]
        fn reveals_are_monotonic() {
            let mut observer = RevealObserver::new();
            assert!(!observer.observe("about", 0.05));
            assert!(observer.observe("about", 0.1));
            assert!(!observer.observe("about", 0.9));
            assert!(observer.is_revealed("about"));
        }
    }
}

pub mod carousel {
    //! Wrap-around rotation for the future-projects showcase. Unlike the feed
    //! pager this navigator wraps at both ends.

    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Carousel {
        index: usize,
        len: usize,
    }

    impl Carousel {
        pub fn new(len: usize) -> Self {
            Self { index: 0, len }
        }

        pub fn next(&mut self) {
            if self.len == 0 {
                return;
            }
            self.index = (self.index + 1) % self.len;
        }

        pub fn prev(&mut self) {
            if self.len == 0 {
                return;
            }
            self.index = (self.index + self.len - 1) % self.len;
        }

        pub fn index(&self) -> usize {
            self.index
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn wraps_in_both_directions() {
            let mut carousel = Carousel::new(3);
            carousel.prev();
            assert_eq!(carousel.index(), 2);
            carousel.next();
            assert_eq!(carousel.index(), 0);
        }

        #[test]
        fn empty_rotation_stays_put() {
            let mut carousel = Carousel::new(0);
            carousel.next();
            carousel.prev();
            assert_eq!(carousel.index(), 0);
        }
    }
}

pub mod contact {
    //! Contact-form payload and the delivery seam. Submission goes to a
    //! third-party form relay; success and failure handling belong to that
    //! collaborator, so the core only shapes and validates the payload.

    use serde::{Deserialize, Serialize};

    /// Relay endpoint the page posts form data to.
    pub const RELAY_ENDPOINT: &str = "https://formspree.io/f/xvgozvdp";

    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ContactMessage {
        pub name: String,
        pub email: String,
        pub message: String,
    }

    #[derive(Debug, PartialEq, Eq, thiserror::Error)]
    pub enum ContactError {
        #[error("missing required field: {0}")]
        MissingField(&'static str),
    }

    impl ContactMessage {
        /// Every field is required before the form may submit.
        pub fn validate(&self) -> Result<(), ContactError> {
            if self.name.trim().is_empty() {
                return Err(ContactError::MissingField("name"));
            }
            if self.email.trim().is_empty() {
                return Err(ContactError::MissingField("email"));
            }
            if self.message.trim().is_empty() {
                return Err(ContactError::MissingField("message"));
            }
            Ok(())
        }
    }

    /// Delivery is delegated to an external relay service.
    pub trait ContactRelay {
        fn deliver(&self, message: &ContactMessage) -> anyhow::Result<()>;
    }

}

pub mod session {
    //! Session-wide view state, owned by one controller and mutated only
    //! through the operations below. The four content sources load
    //! independently; any interleaving of their completions converges to the
    //! same state.

    use anyhow::Result;
    use log::warn;
    use serde::{Deserialize, Serialize};

    use crate::core::{
        Achievement, ContentKind, DayNumber, ProgressEntry, SourceError, Tool, WeeklyReflection,
    };
    use crate::feed::{
        LoadPhase, PROGRESS_PAGE_SIZE, Paged, REFLECTIONS_PAGE_SIZE, TOOLS_PAGE_SIZE,
    };
    use crate::parser;
    use crate::selection::Selection;
    use crate::viewport::SectionTracker;

    /* ----------------------------- Fetch seam ----------------------------- */

    /// Retrieves the raw payload for one content source. The page fetches
    /// over HTTP, the CLI reads a data directory, and tests hand in strings.
    pub trait ContentFetcher {
        fn fetch(&self, kind: ContentKind) -> Result<String>;
    }

    /* ------------------------------ Session ------------------------------ */

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct PortfolioSession {
        progress: Paged<ProgressEntry>,
        reflections: Paged<WeeklyReflection>,
        tools: Paged<Tool>,
        achievements: Vec<Achievement>,
        progress_phase: LoadPhase,
        reflections_phase: LoadPhase,
        tools_phase: LoadPhase,
        achievements_phase: LoadPhase,
        selection: Selection,
        tracker: SectionTracker,
    }

    impl Default for PortfolioSession {
        fn default() -> Self {
            Self::new()
        }
    }

    impl PortfolioSession {
        pub fn new() -> Self {
            Self {
                progress: Paged::new(PROGRESS_PAGE_SIZE),
                reflections: Paged::new(REFLECTIONS_PAGE_SIZE),
                tools: Paged::new(TOOLS_PAGE_SIZE),
                achievements: Vec::new(),
                progress_phase: LoadPhase::NotStarted,
                reflections_phase: LoadPhase::NotStarted,
                tools_phase: LoadPhase::NotStarted,
                achievements_phase: LoadPhase::NotStarted,
                selection: Selection::new(),
                tracker: SectionTracker::new(),
            }
        }

        /* ------------------------------ Loading ------------------------------ */

        /// Begin a fetch for `kind`. Returns false when a load is already in
        /// flight or finished: each source fetches at most once per session.
        pub fn begin_load(&mut self, kind: ContentKind) -> bool {
            let phase = self.phase_mut(kind);
            if !phase.can_begin() {
                return false;
            }
            *phase = LoadPhase::Loading;
            true
        }

        /// Complete one source from its fetched payload: parse, drop invalid
        /// records, and show the first page. A failure leaves this source
        /// empty and never touches the other three.
        pub fn finish_load(&mut self, kind: ContentKind, payload: Result<String>) {
            let outcome = match payload {
                Ok(text) => self
                    .install(kind, &text)
                    .map_err(|e| SourceError::Parse(format!("{e:#}"))),
                Err(e) => Err(SourceError::Fetch(format!("{e:#}"))),
            };
            match outcome {
                Ok(()) => *self.phase_mut(kind) = LoadPhase::Ready,
                Err(err) => {
                    warn!("{}: {err}", kind.file_name());
                    *self.phase_mut(kind) = LoadPhase::Failed(err.to_string());
                }
            }
        }

        /// Drive one full load from a fetcher. Returns false when the source
        /// had already started loading.
        pub fn load(&mut self, kind: ContentKind, fetcher: &impl ContentFetcher) -> bool {
            if !self.begin_load(kind) {
                return false;
            }
            self.finish_load(kind, fetcher.fetch(kind));
            true
        }

        /// Load all four sources. Completion order does not matter.
        pub fn load_all(&mut self, fetcher: &impl ContentFetcher) {
            for kind in ContentKind::ALL {
                self.load(kind, fetcher);
            }
        }

        fn install(&mut self, kind: ContentKind, text: &str) -> Result<()> {
            match kind {
                ContentKind::Progress => {
                    let entries = parser::parse_progress(text)?;
                    self.progress
                        .fill(entries.into_iter().filter(|e| e.is_valid()).collect());
                }
                ContentKind::Reflections => {
                    let reflections = parser::parse_reflections(text)?;
                    self.reflections
                        .fill(reflections.into_iter().filter(|r| r.is_valid()).collect());
                }
                ContentKind::Tools => {
                    let tools = parser::parse_tools(text)?;
                    self.tools
                        .fill(tools.into_iter().filter(|t| t.is_valid()).collect());
                }
                ContentKind::Achievements => {
                    let achievements = parser::parse_achievements(text)?;
                    self.achievements = achievements.into_iter().filter(|a| a.is_valid()).collect();
                }
            }
            Ok(())
        }

        fn phase_mut(&mut self, kind: ContentKind) -> &mut LoadPhase {
            match kind {
                ContentKind::Progress => &mut self.progress_phase,
                ContentKind::Reflections => &mut self.reflections_phase,
                ContentKind::Tools => &mut self.tools_phase,
                ContentKind::Achievements => &mut self.achievements_phase,
            }
        }

        pub fn phase(&self, kind: ContentKind) -> &LoadPhase {
            match kind {
                ContentKind::Progress => &self.progress_phase,
                ContentKind::Reflections => &self.reflections_phase,
                ContentKind::Tools => &self.tools_phase,
                ContentKind::Achievements => &self.achievements_phase,
            }
        }

        /* ------------------------------- Feeds ------------------------------- */

        pub fn progress(&self) -> &Paged<ProgressEntry> {
            &self.progress
        }

        pub fn reflections(&self) -> &Paged<WeeklyReflection> {
            &self.reflections
        }

        pub fn tools(&self) -> &Paged<Tool> {
            &self.tools
        }

        /// Achievements render in full; they are never paginated.
        pub fn achievements(&self) -> &[Achievement] {
            &self.achievements
        }

        pub fn reveal_more_progress(&mut self) {
            self.progress.reveal_more();
        }

        pub fn reveal_more_reflections(&mut self) {
            self.reflections.reveal_more();
        }

        pub fn reveal_more_tools(&mut self) {
            self.tools.reveal_more();
        }

        /* ----------------------------- Selection ----------------------------- */

        /// Open the detail overlay for the day at `index` (0-based position
        /// in the visible grid). Clicks outside the grid are ignored.
        pub fn open_entry(&mut self, index: usize) -> bool {
            let entry = match self.progress.visible().get(index) {
                Some(entry) => entry.clone(),
                None => return false,
            };
            self.selection.select_entry(DayNumber::from_index(index), entry);
            true
        }

        pub fn close_entry(&mut self) {
            self.selection.dismiss_entry();
        }

        /// Open the reflection at `index` in the visible grid.
        pub fn open_reflection(&mut self, index: usize) -> bool {
            let reflection = match self.reflections.visible().get(index) {
                Some(reflection) => reflection.clone(),
                None => return false,
            };
            self.selection.select_reflection(reflection);
            true
        }

        pub fn close_reflection(&mut self) {
            self.selection.dismiss_reflection();
        }

        pub fn selection(&self) -> &Selection {
            &self.selection
        }

        /* ----------------------------- Viewport ----------------------------- */

        pub fn tracker(&self) -> &SectionTracker {
            &self.tracker
        }

        pub fn tracker_mut(&mut self) -> &mut SectionTracker {
            &mut self.tracker
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use anyhow::anyhow;
        use std::collections::HashMap;

        struct MapFetcher {
            payloads: HashMap<ContentKind, String>,
        }

        impl MapFetcher {
            fn new(pairs: &[(ContentKind, &str)]) -> Self {
                Self {
                    payloads: pairs
                        .iter()
                        .map(|(kind, text)| (*kind, text.to_string()))
                        .collect(),
                }
            }
        }

        impl ContentFetcher for MapFetcher {
            fn fetch(&self, kind: ContentKind) -> Result<String> {
                self.payloads
                    .get(&kind)
                    .cloned()
                    .ok_or_else(|| anyhow!("no payload for {}", kind.file_name()))
            }
        }

        fn progress_payload(valid: usize, blank: usize) -> String {
            let mut text = String::from("title|tools|task|summary1|summary2|linkedinUrl\n");
            for day in 1..=valid {
                text.push_str(&format!("Day {day} title|tool|task|s1|s2|\n"));
            }
            for _ in 0..blank {
                text.push_str("   |tool|task|s1|s2|\n");
            }
            text
        }

        fn reflections_payload(weeks: usize) -> String {
            let mut text = String::from("weekNumber|overview|keyLearnings|reflection|favoriteProject\n");
            for week in 1..=weeks {
                text.push_str(&format!("{week}|overview|learned|thought|project\n"));
            }
            text
        }

        #[test]
        fn blank_titles_never_enter_the_store() {
            let mut session = PortfolioSession::new();
            session.finish_load(ContentKind::Progress, Ok(progress_payload(20, 3)));
            assert_eq!(session.progress().len(), 20);
            assert_eq!(session.progress().visible().len(), 15);

            session.reveal_more_progress();
            assert_eq!(session.progress().visible().len(), 20);
            session.reveal_more_progress();
            assert_eq!(session.progress().visible().len(), 20);
        }

        #[test]
        fn every_store_gates_on_its_identity_field() {
            let mut session = PortfolioSession::new();
            session.finish_load(
                ContentKind::Reflections,
                Ok("weekNumber|overview\n1|kept\n|dropped\n".to_string()),
            );
            session.finish_load(
                ContentKind::Tools,
                Ok("name,logoNumber,description\nChatGPT,1,kept\n,2,dropped\n".to_string()),
            );
            session.finish_load(
                ContentKind::Achievements,
                Ok("title|description\nBadge|kept\n|dropped\n".to_string()),
            );
            assert_eq!(session.reflections().len(), 1);
            assert_eq!(session.tools().len(), 1);
            assert_eq!(session.achievements().len(), 1);
        }

        #[test]
        fn twelve_weeks_reveal_to_twelve_not_eighteen() {
            let mut session = PortfolioSession::new();
            session.finish_load(ContentKind::Reflections, Ok(reflections_payload(12)));
            assert_eq!(session.reflections().visible().len(), 9);
            session.reveal_more_reflections();
            assert_eq!(session.reflections().visible().len(), 12);
        }

        #[test]
        fn one_failing_source_leaves_the_others_intact() {
            let fetcher = MapFetcher::new(&[
                (ContentKind::Reflections, "weekNumber|overview\n1|fine\n"),
                (ContentKind::Tools, "name,logoNumber,description\nChatGPT,1,chat\n"),
                (ContentKind::Achievements, "title|description\nBadge|done\n"),
            ]);
            let mut session = PortfolioSession::new();
            session.load_all(&fetcher);

            assert!(matches!(
                session.phase(ContentKind::Progress),
                LoadPhase::Failed(_)
            ));
            assert!(session.progress().is_empty());
            assert_eq!(session.reflections().len(), 1);
            assert_eq!(session.tools().len(), 1);
            assert_eq!(session.achievements().len(), 1);
        }

        #[test]
        fn load_order_does_not_change_the_outcome() {
            let progress = progress_payload(4, 0);
            let reflections = reflections_payload(2);
            let fetcher = MapFetcher::new(&[
                (ContentKind::Progress, progress.as_str()),
                (ContentKind::Reflections, reflections.as_str()),
                (ContentKind::Tools, "name,logoNumber,description\nZapier,3,glue\n"),
                (ContentKind::Achievements, "title|description\nStreak|100 days\n"),
            ]);

            let mut forward = PortfolioSession::new();
            for kind in ContentKind::ALL {
                forward.load(kind, &fetcher);
            }

            let mut backward = PortfolioSession::new();
            for kind in ContentKind::ALL.iter().rev() {
                backward.load(*kind, &fetcher);
            }

            assert_eq!(forward.progress().visible(), backward.progress().visible());
            assert_eq!(forward.reflections().all(), backward.reflections().all());
            assert_eq!(forward.tools().all(), backward.tools().all());
            assert_eq!(forward.achievements(), backward.achievements());
        }

        #[test]
        fn a_source_loads_at_most_once() {
            let fetcher = MapFetcher::new(&[(ContentKind::Achievements, "title|description\nA|a\n")]);
            let mut session = PortfolioSession::new();
            assert!(session.load(ContentKind::Achievements, &fetcher));
            assert!(!session.load(ContentKind::Achievements, &fetcher));
            assert_eq!(session.achievements().len(), 1);
        }

        #[test]
        fn in_flight_loads_reject_duplicates() {
            let mut session = PortfolioSession::new();
            assert!(session.begin_load(ContentKind::Progress));
            assert!(!session.begin_load(ContentKind::Progress));
            session.finish_load(ContentKind::Progress, Ok(progress_payload(1, 0)));
            assert!(session.phase(ContentKind::Progress).is_ready());
        }

        #[test]
        fn clicks_outside_the_visible_grid_are_ignored() {
            let mut session = PortfolioSession::new();
            session.finish_load(ContentKind::Progress, Ok(progress_payload(20, 0)));
            assert!(!session.open_entry(15));
            assert!(session.open_entry(14));
            let active = session.selection().active_entry().expect("selection");
            assert_eq!(active.day, DayNumber(15));
        }

        #[test]
        fn opening_then_closing_a_reflection_round_trips() {
            let mut session = PortfolioSession::new();
            session.finish_load(ContentKind::Reflections, Ok(reflections_payload(3)));
            assert!(session.open_reflection(2));
            assert_eq!(
                session
                    .selection()
                    .active_reflection()
                    .map(|r| r.week_number.as_str()),
                Some("3")
            );
            session.close_reflection();
            assert!(session.selection().active_reflection().is_none());
        }
    }
}

pub mod projectors {
    //! Read models for the view layer, denormalized from session state.

    pub mod section_cards {
        use serde::Serialize;

        use crate::core::{
            DayNumber, ImageSlot, PLACEHOLDER_IMAGE, TOOL_PLACEHOLDER_IMAGE,
        };
        use crate::session::PortfolioSession;

        /// One card in the daily progress grid.
        #[derive(Debug, Clone, Serialize)]
        pub struct ProgressCard {
            pub day: DayNumber,
            pub label: String,
            pub artwork: ImageSlot,
            pub title: String,
            pub tools: String,
            pub task: String,
        }

        /// Detail overlay for the selected day.
        #[derive(Debug, Clone, Serialize)]
        pub struct EntryDetail {
            pub label: String,
            pub artwork: ImageSlot,
            pub title: String,
            pub task: String,
            pub tools: String,
            pub summary1: String,
            pub summary2: String,
            pub linkedin_url: Option<String>,
        }

        #[derive(Debug, Clone, Serialize)]
        pub struct ReflectionCard {
            pub week_number: String,
            pub heading: String,
            pub overview: String,
        }

        /// Detail overlay for the selected week.
        #[derive(Debug, Clone, Serialize)]
        pub struct ReflectionDetail {
            pub heading: String,
            pub artwork: ImageSlot,
            pub overview: String,
            pub key_learnings: String,
            pub reflection: String,
            pub favorite_project: String,
        }

        #[derive(Debug, Clone, Serialize)]
        pub struct ToolCard {
            pub name: String,
            pub artwork: ImageSlot,
            pub description: String,
        }

        #[derive(Debug, Clone, Serialize)]
        pub struct AchievementCard {
            pub title: String,
            pub description: String,
        }

        /// How much of a section is on screen, for the load-more affordance.
        #[derive(Debug, Clone, Copy, Serialize)]
        pub struct SectionSummary {
            pub shown: usize,
            pub total: usize,
            pub has_more: bool,
        }

        pub fn progress_cards(session: &PortfolioSession) -> Vec<ProgressCard> {
            session
                .progress()
                .visible()
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    let day = DayNumber::from_index(index);
                    ProgressCard {
                        label: day.label(),
                        artwork: ImageSlot::new(day.artwork_path(), PLACEHOLDER_IMAGE),
                        day,
                        title: entry.title.clone(),
                        tools: entry.tools.clone(),
                        task: entry.task.clone(),
                    }
                })
                .collect()
        }

        pub fn entry_detail(session: &PortfolioSession) -> Option<EntryDetail> {
            session.selection().active_entry().map(|selected| EntryDetail {
                label: selected.day.label(),
                artwork: ImageSlot::new(selected.day.artwork_path(), PLACEHOLDER_IMAGE),
                title: selected.entry.title.clone(),
                task: selected.entry.task.clone(),
                tools: selected.entry.tools.clone(),
                summary1: selected.entry.summary1.clone(),
                summary2: selected.entry.summary2.clone(),
                linkedin_url: selected.entry.linkedin_url.clone(),
            })
        }

        pub fn reflection_cards(session: &PortfolioSession) -> Vec<ReflectionCard> {
            session
                .reflections()
                .visible()
                .iter()
                .map(|reflection| ReflectionCard {
                    week_number: reflection.week_number.clone(),
                    heading: format!("Week {} Insights", reflection.week_number),
                    overview: reflection.overview.clone(),
                })
                .collect()
        }

        pub fn reflection_detail(session: &PortfolioSession) -> Option<ReflectionDetail> {
            session.selection().active_reflection().map(|reflection| ReflectionDetail {
                heading: format!("Week {} Reflection", reflection.week_number),
                artwork: ImageSlot::new(reflection.artwork_path(), PLACEHOLDER_IMAGE),
                overview: reflection.overview.clone(),
                key_learnings: reflection.key_learnings.clone(),
                reflection: reflection.reflection.clone(),
                favorite_project: reflection.favorite_project.clone(),
            })
        }

        pub fn tool_cards(session: &PortfolioSession) -> Vec<ToolCard> {
            session
                .tools()
                .visible()
                .iter()
                .map(|tool| ToolCard {
                    name: tool.name.clone(),
                    artwork: ImageSlot::new(tool.artwork_path(), TOOL_PLACEHOLDER_IMAGE),
                    description: tool.description.clone(),
                })
                .collect()
        }

        pub fn achievement_cards(session: &PortfolioSession) -> Vec<AchievementCard> {
            session
                .achievements()
                .iter()
                .map(|achievement| AchievementCard {
                    title: achievement.title.clone(),
                    description: achievement.description.clone(),
                })
                .collect()
        }

        pub fn progress_summary(session: &PortfolioSession) -> SectionSummary {
            SectionSummary {
                shown: session.progress().visible().len(),
                total: session.progress().len(),
                has_more: session.progress().has_more(),
            }
        }

        pub fn reflections_summary(session: &PortfolioSession) -> SectionSummary {
            SectionSummary {
                shown: session.reflections().visible().len(),
                total: session.reflections().len(),
                has_more: session.reflections().has_more(),
            }
        }

        pub fn tools_summary(session: &PortfolioSession) -> SectionSummary {
            SectionSummary {
                shown: session.tools().visible().len(),
                total: session.tools().len(),
                has_more: session.tools().has_more(),
            }
        }
    }

    pub mod showcase {
        //! Fixed future-projects rotation content.

        use serde::Serialize;

        #[derive(Debug, Clone, Serialize)]
        pub struct FutureProject {
            pub title: &'static str,
            pub description: &'static str,
            pub technologies: &'static [&'static str],
        }

        pub const FUTURE_PROJECTS: &[FutureProject] = &[
            FutureProject {
                title: "AI-Powered Healthcare Assistant",
                description: "An intelligent assistant that provides personalized \
                              medical advice and monitors patient health metrics.",
                technologies: &["TensorFlow", "Python", "Healthcare APIs"],
            },
            FutureProject {
                title: "Autonomous Driving System",
                description: "A robust driving stack built on deep learning and \
                              computer vision to enhance road safety.",
                technologies: &["PyTorch", "Computer Vision", "Sensor Fusion"],
            },
            FutureProject {
                title: "Natural Language Processing Framework",
                description: "A comprehensive NLP framework for advanced text \
                              analysis and generation tasks.",
                technologies: &["Transformers", "BERT", "Python"],
            },
        ];

        #[cfg(test)]
        mod tests {
            use super::*;
            use crate::carousel::Carousel;

            #[test]
            fn rotation_covers_every_project_and_wraps() {
                let mut carousel = Carousel::new(FUTURE_PROJECTS.len());
                let mut seen = Vec::new();
                for _ in 0..FUTURE_PROJECTS.len() + 1 {
                    seen.push(FUTURE_PROJECTS[carousel.index()].title);
                    carousel.next();
                }
                assert_eq!(seen.first(), seen.last());
                assert_eq!(seen.len(), FUTURE_PROJECTS.len() + 1);
            }
        }
    }
}

pub use parser::parse_records;
pub use session::{ContentFetcher, PortfolioSession};
