//! Turns one line of input into an ordered list of steps for the terminal to
//! apply. Nothing here touches the browser: time comes from a `TimeSource`
//! and every side effect is described by a `Step`.

use crate::buffer::LineKind;
use crate::clock::{format_date, uptime_days, uptime_years, TimeSource};
use crate::config::{prompt, TerminalConfig, HOME_PATH, KERNEL_STRING, PATH_LABEL};
use crate::content::{ContentKey, ContentStore};
use crate::error::TerminalError;
use crate::history::{CommandHistory, Direction};
use crate::i18n::{fill, Language};
use crate::markup::{paint, sanitize_input};
use crate::neofetch::format_neofetch;
use crate::registry::{Action, CommandRegistry, Resolution, Verb};
use crate::schedule::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Processing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub language: Language,
    pub path_label: String,
    pub history: CommandHistory,
    pub phase: Phase,
}

impl Session {
    pub fn new(language: Language, max_history: usize) -> Self {
        Session {
            language,
            path_label: PATH_LABEL.to_string(),
            history: CommandHistory::new(max_history),
            phase: Phase::Idle,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Line {
        kind: LineKind,
        text: String,
        command: Option<String>,
    },
    Clear,
    ExportResume(Language),
    Schedule { delay_ms: u32, task: Task },
}

impl Step {
    pub fn line(kind: LineKind, text: impl Into<String>) -> Step {
        Step::Line {
            kind,
            text: text.into(),
            command: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reaction {
    pub steps: Vec<Step>,
    pub rejected: bool,
}

impl Reaction {
    pub fn rejected() -> Self {
        Reaction {
            steps: Vec::new(),
            rejected: true,
        }
    }

    fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    fn line(&mut self, kind: LineKind, text: impl Into<String>) {
        self.push(Step::line(kind, text));
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    None,
    Unique(String),
    Ambiguous(Vec<String>),
}

const PROCESSES: [&str; 6] = [
    "PID  TTY      TIME CMD",
    "1    pts/0    00:00:01 passion",
    "2    pts/0    00:00:05 coding",
    "3    pts/0    00:00:10 learning",
    "4    pts/0    00:00:02 coffee-drinking",
    "5    pts/0    00:00:01 problem-solving",
];

const TOP: [&str; 4] = [
    "85.2% - Backend Development",
    "12.1% - Learning New Technologies",
    "2.5% - Coffee Breaks",
    "0.2% - Sleeping",
];

const DISK: [&str; 4] = [
    "Filesystem     Size  Used Avail Use%",
    "/dev/brain     ∞TB   95%   ∞TB  95% Knowledge",
    "/dev/passion   ∞TB   100%  ∞TB  100% Projects",
    "/dev/coffee    1GB   85%   150MB 85% Energy",
];

const MEMORY: [&str; 4] = [
    "Total:     ∞ GB",
    "Used:      95% (Programming Knowledge)",
    "Free:      5% (Available for new learning)",
    "Cached:    ∞ GB (Experience)",
];

fn file_icon(name: &str) -> &'static str {
    if name.ends_with(".pdf") {
        "📄"
    } else if name.ends_with(".txt") {
        "📝"
    } else {
        "📁"
    }
}

pub struct Interpreter {
    registry: CommandRegistry,
    content: ContentStore,
    exit_followup_delay_ms: u32,
}

impl Interpreter {
    pub fn new(content: ContentStore, config: &TerminalConfig) -> Self {
        Interpreter {
            registry: CommandRegistry::new(),
            content,
            exit_followup_delay_ms: config.exit_followup_delay_ms,
        }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    /// The word the startup demo types for `lang`.
    pub fn demo_command(&self, lang: Language) -> &'static str {
        self.registry
            .token_for(Action::Verb(Verb::ShowTree), lang)
            .unwrap_or("tree")
    }

    pub fn execute(
        &self,
        mut session: Session,
        line: &str,
        clock: &dyn TimeSource,
    ) -> (Session, Reaction) {
        if session.phase == Phase::Processing {
            log::debug!("input rejected while processing: {:?}", line);
            return (session, Reaction::rejected());
        }
        let typed = sanitize_input(line.trim());
        let typed = typed.trim();
        if typed.is_empty() {
            return (session, Reaction::default());
        }

        session.phase = Phase::Processing;
        let mut reaction = Reaction::default();
        reaction.push(Step::Line {
            kind: LineKind::Input,
            text: format!("{} {}", prompt(), typed),
            command: Some(typed.to_string()),
        });
        session.history.push(typed, clock.now_ms());

        let mut words = typed.split_whitespace();
        let token = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        let result = match self.registry.resolve(token, session.language) {
            Resolution::Content(key) => {
                if key == ContentKey::Resume {
                    reaction.push(Step::ExportResume(session.language));
                }
                self.show_section(&mut reaction, key, session.language)
            }
            Resolution::Verb(verb) => self.run_verb(&mut reaction, verb, &args, &session, clock),
            Resolution::NotFound => Err(TerminalError::CommandNotFound(token.to_string())),
        };

        if let Err(e) = result {
            log::debug!("{}", e);
            reaction.line(LineKind::Error, e.render(session.language));
            if matches!(e, TerminalError::CommandNotFound(_)) {
                reaction.line(LineKind::System, session.language.messages().help_hint);
            }
        }

        session.phase = Phase::Idle;
        (session, reaction)
    }

    fn show_section(
        &self,
        reaction: &mut Reaction,
        key: ContentKey,
        lang: Language,
    ) -> Result<(), TerminalError> {
        let entry = self
            .content
            .get(lang, key)
            .ok_or(TerminalError::ContentMissing(key))?;
        reaction.line(LineKind::Output, entry.render());
        Ok(())
    }

    fn run_verb(
        &self,
        reaction: &mut Reaction,
        verb: Verb,
        args: &[&str],
        session: &Session,
        clock: &dyn TimeSource,
    ) -> Result<(), TerminalError> {
        let lang = session.language;
        let m = lang.messages();
        match verb {
            Verb::Clear => {
                reaction.push(Step::Clear);
                reaction.line(LineKind::System, paint("success", m.cleared));
            }
            Verb::Whoami => {
                reaction.line(
                    LineKind::Output,
                    format!("{}\n{}", m.whoami, paint("success", m.whoami_desc)),
                );
            }
            Verb::ListSections => {
                let mut out = vec![paint("info", m.sections)];
                for name in self.content.file_list(lang) {
                    out.push(format!("{} {}", file_icon(name), name));
                }
                reaction.line(LineKind::Output, out.join("\n"));
            }
            Verb::PrintPath => reaction.line(LineKind::Output, HOME_PATH),
            Verb::ShowDate => reaction.line(
                LineKind::Output,
                format_date(clock.now_ms(), clock.utc_offset_minutes(), lang),
            ),
            Verb::ShowSystemInfo => reaction.line(LineKind::Output, KERNEL_STRING),
            Verb::ReadFile => {
                let requested = args.first().ok_or(TerminalError::MissingOperand("cat"))?;
                let key = self
                    .content
                    .file_key(lang, requested)
                    .ok_or_else(|| TerminalError::FileNotFound(requested.to_string()))?;
                self.show_section(reaction, key, lang)?;
            }
            Verb::Echo => reaction.line(LineKind::Output, args.join(" ")),
            Verb::ShowAsciiBanner => {
                reaction.line(LineKind::Output, format_neofetch(&uptime_text(lang, clock)));
            }
            Verb::FakeSudo => {
                reaction.line(LineKind::Error, m.nice_try);
                reaction.line(LineKind::Output, m.permissions);
            }
            Verb::FakeExit => {
                reaction.line(LineKind::Output, paint("warning", m.goodbye));
                reaction.push(Step::Schedule {
                    delay_ms: self.exit_followup_delay_ms,
                    task: Task::Line {
                        kind: LineKind::System,
                        text: format!("{}\n{}", m.joking_exit, m.close_tab),
                    },
                });
            }
            Verb::ShowHistory => {
                let mut out = vec![paint("info", m.command_history)];
                for (i, entry) in session.history.iter().enumerate() {
                    out.push(format!("{:4}  {}", i + 1, entry.command));
                }
                reaction.line(LineKind::Output, out.join("\n"));
            }
            Verb::ShowTree => {
                let files = self.content.file_list(lang);
                let mut out = vec!["portfolio/".to_string()];
                for (i, name) in files.iter().enumerate() {
                    let branch = if i + 1 == files.len() { "└──" } else { "├──" };
                    out.push(format!("{} {}", branch, name));
                }
                reaction.line(LineKind::Output, out.join("\n"));
            }
            Verb::ShowProcesses => {
                reaction.line(LineKind::Output, titled(m.processes, &PROCESSES, None));
            }
            Verb::ShowTop => {
                reaction.line(LineKind::Output, titled(m.top_processes, &TOP, Some("success")));
            }
            Verb::ShowDiskUsage => {
                reaction.line(LineKind::Output, DISK.join("\n"));
            }
            Verb::ShowMemory => {
                reaction.line(LineKind::Output, titled(m.memory, &MEMORY, Some("success")));
            }
            Verb::ShowUptime => {
                reaction.line(
                    LineKind::Output,
                    format!(
                        "{} {}\n{}",
                        m.uptime,
                        uptime_text(lang, clock),
                        paint("success", m.uptime_desc)
                    ),
                );
            }
        }
        Ok(())
    }

    pub fn navigate(&self, session: &mut Session, direction: Direction) -> String {
        session.history.navigate(direction)
    }

    pub fn complete(&self, partial: &str, lang: Language) -> Completion {
        let partial = partial.trim().to_lowercase();
        let matches: Vec<String> = self
            .registry
            .tokens(lang)
            .into_iter()
            .filter(|t| t.starts_with(&partial))
            .map(String::from)
            .collect();
        match matches.len() {
            0 => Completion::None,
            1 => Completion::Unique(matches.into_iter().next().unwrap_or_default()),
            _ => Completion::Ambiguous(matches),
        }
    }
}

fn titled(heading: &str, rows: &[&str], class: Option<&str>) -> String {
    let mut out = vec![paint("info", heading)];
    out.extend(rows.iter().map(|r| match class {
        Some(c) => paint(c, r),
        None => r.to_string(),
    }));
    out.join("\n")
}

fn uptime_text(lang: Language, clock: &dyn TimeSource) -> String {
    let days = uptime_days(clock.now_ms());
    fill(
        lang.messages().years_of_coding,
        &[
            ("days", &days.to_string()),
            ("years", &uptime_years(days).to_string()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::markup::strip_color_tokens;

    // 2024-03-05T14:07:09Z
    const NOW: f64 = 1_709_647_629_000.0;

    fn interp() -> Interpreter {
        Interpreter::new(ContentStore::builtin(), &TerminalConfig::default())
    }

    fn run(i: &Interpreter, session: Session, line: &str) -> (Session, Reaction) {
        i.execute(session, line, &FixedClock::new(NOW))
    }

    fn lines_of(r: &Reaction, kind: LineKind) -> Vec<String> {
        r.steps
            .iter()
            .filter_map(|s| match s {
                Step::Line { kind: k, text, .. } if *k == kind => Some(strip_color_tokens(text)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_every_content_token_emits_one_output_line() {
        let i = interp();
        for lang in Language::ALL {
            for token in i.registry().tokens(lang) {
                let Resolution::Content(key) = i.registry().resolve(token, lang) else {
                    continue;
                };
                let (_, r) = run(&i, Session::new(lang, 100), token);
                let out = lines_of(&r, LineKind::Output);
                assert_eq!(out.len(), 1, "{} under {}", token, lang);
                let entry = i.content().get(lang, key).unwrap();
                assert!(out[0].contains(&entry.title));
                for body in &entry.body {
                    assert!(out[0].contains(body.as_str()));
                }
            }
        }
    }

    #[test]
    fn test_unknown_command() {
        let i = interp();
        let s = Session::new(Language::En, 100);
        let (s2, r) = run(&i, s.clone(), "FooBar --x");
        let errors = lines_of(&r, LineKind::Error);
        assert_eq!(errors, vec!["Command not found: FooBar".to_string()]);
        assert_eq!(lines_of(&r, LineKind::System).len(), 1);
        assert_eq!(s2.language, s.language);
        assert_eq!(s2.path_label, "~");
    }

    #[test]
    fn test_input_line_and_history() {
        let i = interp();
        let (s, r) = run(&i, Session::new(Language::En, 100), "  pwd  ");
        assert_eq!(
            r.steps[0],
            Step::Line {
                kind: LineKind::Input,
                text: "gustavo@portfolio:~$ pwd".into(),
                command: Some("pwd".into()),
            }
        );
        assert_eq!(lines_of(&r, LineKind::Output), vec![HOME_PATH.to_string()]);
        assert_eq!(s.history.len(), 1);
        assert_eq!(s.phase, Phase::Idle);
    }

    #[test]
    fn test_blank_input_is_noop() {
        let i = interp();
        let s = Session::new(Language::Pt, 100);
        let (s2, r) = run(&i, s.clone(), "   \t ");
        assert!(r.is_empty());
        assert_eq!(s2, s);
    }

    #[test]
    fn test_processing_rejects_input() {
        let i = interp();
        let mut s = Session::new(Language::En, 100);
        s.phase = Phase::Processing;
        let (s2, r) = run(&i, s.clone(), "help");
        assert!(r.rejected);
        assert!(r.is_empty());
        assert_eq!(s2, s);
    }

    #[test]
    fn test_about_matches_sobre_in_portuguese() {
        let i = interp();
        let s = Session::new(Language::Pt, 100);
        let (_, a) = run(&i, s.clone(), "about");
        let (_, b) = run(&i, s, "sobre");
        assert_eq!(lines_of(&a, LineKind::Output), lines_of(&b, LineKind::Output));
    }

    #[test]
    fn test_cat() {
        let i = interp();
        let en = Session::new(Language::En, 100);
        let (_, r) = run(&i, en.clone(), "cat about.md");
        let about = i.content().get(Language::En, ContentKey::About).unwrap();
        assert_eq!(lines_of(&r, LineKind::Output), vec![about.render()]);

        let (_, r) = run(&i, Session::new(Language::Pt, 100), "ler about.md");
        let sobre = i.content().get(Language::Pt, ContentKey::About).unwrap();
        assert_eq!(lines_of(&r, LineKind::Output), vec![sobre.render()]);

        let (_, r) = run(&i, en.clone(), "cat Missing.MD");
        assert_eq!(
            lines_of(&r, LineKind::Error),
            vec!["cat: Missing.MD: No such file or directory".to_string()]
        );

        let (_, r) = run(&i, en.clone(), "cat");
        assert_eq!(lines_of(&r, LineKind::Error), vec!["Usage: cat [filename]".to_string()]);

        let (_, r) = run(&i, en, "cat resume.pdf");
        assert!(!r.steps.iter().any(|s| matches!(s, Step::ExportResume(_))));
        assert_eq!(lines_of(&r, LineKind::Error).len(), 1);
    }

    #[test]
    fn test_resume_exports_before_text() {
        let i = interp();
        let (_, r) = run(&i, Session::new(Language::Pt, 100), "curriculo");
        assert_eq!(r.steps[1], Step::ExportResume(Language::Pt));
        assert!(matches!(r.steps[2], Step::Line { kind: LineKind::Output, .. }));
    }

    #[test]
    fn test_missing_content_is_error_line() {
        let mut store = ContentStore::builtin();
        store.remove(Language::Pt, ContentKey::Skills);
        let i = Interpreter::new(store, &TerminalConfig::default());
        let (_, r) = run(&i, Session::new(Language::Pt, 100), "habilidades");
        assert_eq!(lines_of(&r, LineKind::Error), vec!["Conteúdo não encontrado".to_string()]);
        assert!(lines_of(&r, LineKind::Output).is_empty());
    }

    #[test]
    fn test_clear_emits_clear_then_confirmation() {
        let i = interp();
        let (_, r) = run(&i, Session::new(Language::En, 100), "CLEAR");
        assert_eq!(r.steps[1], Step::Clear);
        assert_eq!(lines_of(&r, LineKind::System), vec!["Terminal cleared! ✨".to_string()]);
    }

    #[test]
    fn test_echo() {
        let i = interp();
        let s = Session::new(Language::En, 100);
        let (_, r) = run(&i, s.clone(), "echo hello   world");
        assert_eq!(lines_of(&r, LineKind::Output), vec!["hello world".to_string()]);
        let (_, r) = run(&i, s, "echo");
        assert_eq!(lines_of(&r, LineKind::Output), vec![String::new()]);
    }

    #[test]
    fn test_tab_separates_words() {
        let i = interp();
        let s = Session::new(Language::En, 100);
        let (_, r) = run(&i, s.clone(), "cat\tabout.md");
        let about = i.content().get(Language::En, ContentKey::About).unwrap();
        assert_eq!(lines_of(&r, LineKind::Output), vec![about.render()]);
        assert!(lines_of(&r, LineKind::Error).is_empty());

        let (_, r) = run(&i, s, "echo a\tb");
        assert_eq!(lines_of(&r, LineKind::Output), vec!["a b".to_string()]);
    }

    #[test]
    fn test_sudo() {
        let i = interp();
        let (_, r) = run(&i, Session::new(Language::En, 100), "sudo rm -rf /");
        assert_eq!(lines_of(&r, LineKind::Error).len(), 1);
        assert_eq!(lines_of(&r, LineKind::Output).len(), 1);
    }

    #[test]
    fn test_exit_schedules_followup() {
        let i = interp();
        let (_, r) = run(&i, Session::new(Language::En, 100), "exit");
        let scheduled: Vec<_> = r
            .steps
            .iter()
            .filter_map(|s| match s {
                Step::Schedule { delay_ms, task } => Some((*delay_ms, task.clone())),
                _ => None,
            })
            .collect();
        assert_eq!(scheduled.len(), 1);
        assert_eq!(scheduled[0].0, 1000);
        assert!(matches!(&scheduled[0].1, Task::Line { text, .. } if text.contains("Just kidding")));
    }

    #[test]
    fn test_history_lists_itself() {
        let i = interp();
        let s = Session::new(Language::En, 100);
        let (s, _) = run(&i, s, "ls");
        let (_, r) = run(&i, s, "history");
        let out = &lines_of(&r, LineKind::Output)[0];
        assert_eq!(out, "Command History:\n   1  ls\n   2  history");
    }

    #[test]
    fn test_tree_and_ls() {
        let i = interp();
        let (_, r) = run(&i, Session::new(Language::Pt, 100), "arvore");
        let out = &lines_of(&r, LineKind::Output)[0];
        assert!(out.starts_with("portfolio/\n├── sobre.md"));
        assert!(out.ends_with("└── contato.txt"));

        let (_, r) = run(&i, Session::new(Language::En, 100), "ls");
        let out = &lines_of(&r, LineKind::Output)[0];
        assert!(out.contains("📁 about.md"));
        assert!(out.contains("📄 resume.pdf"));
        assert!(out.contains("📝 contact.txt"));
    }

    #[test]
    fn test_date_and_uptime() {
        let i = interp();
        let (_, r) = run(&i, Session::new(Language::Pt, 100), "data");
        assert_eq!(lines_of(&r, LineKind::Output), vec!["05/03/2024, 14:07:09".to_string()]);
        let (_, r) = run(&i, Session::new(Language::En, 100), "uptime");
        let out = &lines_of(&r, LineKind::Output)[0];
        assert!(out.starts_with("System uptime: 1525 days, 4 years of coding"));
    }

    #[test]
    fn test_history_navigation() {
        let i = interp();
        let mut s = Session::new(Language::En, 100);
        for c in ["c1", "c2", "c3"] {
            s = run(&i, s, c).0;
        }
        assert_eq!(i.navigate(&mut s, Direction::Up), "c3");
        assert_eq!(i.navigate(&mut s, Direction::Up), "c2");
        assert_eq!(i.navigate(&mut s, Direction::Up), "c1");
        assert_eq!(i.navigate(&mut s, Direction::Down), "c2");
        assert_eq!(i.navigate(&mut s, Direction::Down), "c3");
    }

    #[test]
    fn test_complete() {
        let i = interp();
        assert_eq!(i.complete("neo", Language::En), Completion::Unique("neofetch".into()));
        assert_eq!(
            i.complete("e", Language::En),
            Completion::Ambiguous(vec!["experience".into(), "education".into(), "echo".into(), "exit".into()])
        );
        assert_eq!(i.complete("zzz", Language::Pt), Completion::None);
        assert_eq!(i.complete("HAB", Language::Pt), Completion::Unique("habilidades".into()));
    }

    #[test]
    fn test_demo_command() {
        let i = interp();
        assert_eq!(i.demo_command(Language::Pt), "arvore");
        assert_eq!(i.demo_command(Language::En), "tree");
    }
}
