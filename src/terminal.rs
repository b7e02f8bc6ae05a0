use crate::buffer::{LineKind, OutputBuffer, TerminalLine};
use crate::clock::TimeSource;
use crate::config::TerminalConfig;
use crate::content::ContentStore;
use crate::export::{export_resume, resume_filename, ResumeExporter};
use crate::history::Direction;
use crate::i18n::{fill, Language};
use crate::interpreter::{Completion, Interpreter, Phase, Reaction, Session, Step};
use crate::markup::{paint, render_lines};
use crate::schedule::{Task, TaskQueue, TaskTag};
use std::rc::Rc;

/// Owns everything with a lifetime: the session, the visible lines, pending
/// timed output and the resume exporter.
pub struct Terminal {
    config: TerminalConfig,
    interpreter: Interpreter,
    session: Session,
    buffer: OutputBuffer,
    tasks: TaskQueue,
    exporter: Box<dyn ResumeExporter>,
    clock: Rc<dyn TimeSource>,
    destroyed: bool,
}

impl Terminal {
    pub fn new(
        config: TerminalConfig,
        clock: Rc<dyn TimeSource>,
        exporter: Box<dyn ResumeExporter>,
    ) -> Self {
        let content = ContentStore::builtin();
        content.validate_translations();
        Terminal {
            interpreter: Interpreter::new(content, &config),
            session: Session::new(config.language, config.max_history_size),
            buffer: OutputBuffer::new(config.max_output_lines),
            tasks: TaskQueue::new(),
            exporter,
            clock,
            destroyed: false,
            config,
        }
    }

    pub fn boot(&mut self) {
        let m = self.session.language.messages();
        self.buffer.push(LineKind::System, paint("success", m.welcome), None);
        self.buffer.push(LineKind::System, paint("info", m.help_tip), None);
        if self.config.demo_on_start {
            self.schedule_demo();
        }
        log::info!("terminal started ({})", self.session.language);
    }

    fn schedule_demo(&mut self) {
        self.tasks.cancel(TaskTag::Demo);
        self.tasks.schedule(
            self.clock.now_ms(),
            self.config.welcome_delay_ms,
            Task::Demo(self.session.language),
        );
    }

    /// Runs one typed line. Returns false if the input was rejected.
    pub fn execute(&mut self, line: &str) -> bool {
        if self.destroyed {
            return false;
        }
        let (session, reaction) =
            self.interpreter
                .execute(self.session.clone(), line, self.clock.as_ref());
        self.session = session;
        if reaction.rejected {
            return false;
        }
        self.apply(reaction);
        true
    }

    fn apply(&mut self, reaction: Reaction) {
        self.session.phase = Phase::Processing;
        for step in reaction.steps {
            match step {
                Step::Line {
                    kind,
                    text,
                    command,
                } => {
                    self.buffer.push(kind, text, command);
                }
                Step::Clear => self.buffer.clear(),
                Step::ExportResume(lang) => self.export(lang),
                Step::Schedule { delay_ms, task } => {
                    self.tasks.schedule(self.clock.now_ms(), delay_ms, task);
                }
            }
        }
        self.session.phase = Phase::Idle;
    }

    fn export(&mut self, lang: Language) {
        let m = self.session.language.messages();
        match export_resume(self.exporter.as_mut(), lang) {
            Ok(filename) => {
                self.buffer.push(
                    LineKind::System,
                    paint("success", &fill(m.downloading_resume, &[("filename", &filename)])),
                    None,
                );
                self.buffer
                    .push(LineKind::System, paint("info", m.resume_success), None);
            }
            Err(e) => {
                self.buffer
                    .push(LineKind::Error, e.render(self.session.language), None);
            }
        }
    }

    /// Download button on the resume section.
    pub fn download_resume(&mut self, lang: Language) -> String {
        if !self.destroyed {
            self.export(lang);
        }
        resume_filename(lang)
    }

    pub fn switch_language(&mut self, lang: Language) {
        if self.destroyed {
            return;
        }
        self.session.language = lang;
        self.buffer.clear();
        let m = lang.messages();
        self.buffer
            .push(LineKind::System, paint("success", m.language_switched), None);
        self.buffer
            .push(LineKind::System, paint("info", m.language_info), None);
        self.tasks.cancel(TaskTag::Demo);
        if self.config.demo_on_language_switch {
            self.schedule_demo();
        }
        log::info!("language switched to {}", lang);
    }

    /// Ctrl+C.
    pub fn interrupt(&mut self) {
        self.buffer.push(LineKind::System, "^C".to_string(), None);
    }

    /// Ctrl+L.
    pub fn clear_screen(&mut self) {
        self.buffer.clear();
        let m = self.session.language.messages();
        self.buffer
            .push(LineKind::System, paint("success", m.cleared), None);
    }

    pub fn navigate(&mut self, direction: Direction) -> String {
        self.interpreter.navigate(&mut self.session, direction)
    }

    /// Tab completion. Several matches are listed in the log; the input is
    /// only replaced for a unique match.
    pub fn complete(&mut self, partial: &str) -> Completion {
        let completion = self.interpreter.complete(partial, self.session.language);
        if let Completion::Ambiguous(options) = &completion {
            let m = self.session.language.messages();
            self.buffer.push(
                LineKind::System,
                format!("{} {}", m.completions, options.join(", ")),
                None,
            );
        }
        completion
    }

    /// Releases due tasks. Returns true if anything was appended.
    pub fn poll(&mut self) -> bool {
        if self.destroyed {
            return false;
        }
        let due = self.tasks.due(self.clock.now_ms());
        let changed = !due.is_empty();
        for task in due {
            match task {
                Task::Line { kind, text } => {
                    self.buffer.push(kind, text, None);
                }
                // A language switch cancels pending demos, so `lang` is current.
                Task::Demo(lang) => {
                    let command = self.interpreter.demo_command(lang);
                    self.execute(command);
                }
            }
        }
        changed
    }

    pub fn destroy(&mut self) {
        self.tasks.cancel_all();
        self.destroyed = true;
        log::info!("terminal destroyed");
    }

    pub fn language(&self) -> Language {
        self.session.language
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_processing(&self) -> bool {
        self.session.phase == Phase::Processing
    }

    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    pub fn lines(&self) -> impl Iterator<Item = &TerminalLine> {
        self.buffer.lines()
    }

    pub fn line_count(&self) -> usize {
        self.buffer.len()
    }

    pub fn lines_json(&self) -> String {
        self.buffer.to_json()
    }

    pub fn render_html(&self) -> String {
        render_lines(self.buffer.lines())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::export::fakes::{FailingExporter, RecordingExporter};
    use crate::markup::strip_color_tokens;

    const NOW: f64 = 1_709_647_629_000.0;

    fn terminal_with(
        config: TerminalConfig,
        exporter: Box<dyn ResumeExporter>,
    ) -> (Terminal, Rc<FixedClock>) {
        let clock = Rc::new(FixedClock::new(NOW));
        let t = Terminal::new(config, clock.clone(), exporter);
        (t, clock)
    }

    fn terminal() -> (Terminal, Rc<FixedClock>) {
        terminal_with(TerminalConfig::default(), Box::new(RecordingExporter::default()))
    }

    fn texts(t: &Terminal, kind: LineKind) -> Vec<String> {
        t.lines()
            .filter(|l| l.kind == kind)
            .map(|l| strip_color_tokens(&l.text))
            .collect()
    }

    #[test]
    fn test_boot_runs_demo_after_delay() {
        let (mut t, clock) = terminal();
        t.boot();
        assert_eq!(t.line_count(), 2);
        clock.advance(499.0);
        assert!(!t.poll());
        clock.advance(1.0);
        assert!(t.poll());
        let inputs = texts(&t, LineKind::Input);
        assert_eq!(inputs, vec!["gustavo@portfolio:~$ tree".to_string()]);
        assert!(texts(&t, LineKind::Output)[0].starts_with("portfolio/"));
    }

    #[test]
    fn test_boot_without_demo() {
        let config = TerminalConfig {
            demo_on_start: false,
            ..TerminalConfig::default()
        };
        let (mut t, _) = terminal_with(config, Box::new(RecordingExporter::default()));
        t.boot();
        assert_eq!(t.pending_tasks(), 0);
    }

    #[test]
    fn test_clear_twice_leaves_one_line() {
        let (mut t, _) = terminal();
        t.boot();
        t.execute("clear");
        t.execute("clear");
        assert_eq!(t.line_count(), 1);
        assert_eq!(texts(&t, LineKind::System), vec!["Terminal cleared! ✨".to_string()]);
    }

    #[test]
    fn test_buffer_keeps_most_recent_lines() {
        let (mut t, _) = terminal();
        for i in 0..600 {
            t.execute(&format!("echo {}", i));
        }
        assert_eq!(t.line_count(), 1000);
        let last = t.lines().last().unwrap();
        assert_eq!(last.text, "599");
        let first = t.lines().next().unwrap();
        assert_eq!(first.text, "gustavo@portfolio:~$ echo 100");
    }

    #[test]
    fn test_exit_followup_after_delay_only() {
        let (mut t, clock) = terminal();
        t.execute("exit");
        let before = t.line_count();
        clock.advance(999.0);
        t.poll();
        assert_eq!(t.line_count(), before);
        clock.advance(1.0);
        t.poll();
        assert_eq!(t.line_count(), before + 1);
    }

    #[test]
    fn test_no_followup_after_destroy() {
        let (mut t, clock) = terminal();
        t.execute("exit");
        let before = t.line_count();
        t.destroy();
        clock.advance(5000.0);
        assert!(!t.poll());
        assert_eq!(t.line_count(), before);
        assert!(!t.execute("help"));
    }

    #[test]
    fn test_resume_success_lines() {
        let (mut t, _) = terminal();
        t.execute("resume");
        let system = texts(&t, LineKind::System);
        assert_eq!(
            system,
            vec![
                "📥 Downloading Gustavo_Muniz_Resume_EN.pdf...".to_string(),
                "Resume downloaded successfully! Check your Downloads folder.".to_string(),
            ]
        );
        assert_eq!(texts(&t, LineKind::Output).len(), 1);
    }

    #[test]
    fn test_resume_lines_are_coloured() {
        let (mut t, _) = terminal();
        t.execute("resume");
        let html = t.render_html();
        assert!(html.contains(
            "<span class=\"success\">📥 Downloading Gustavo_Muniz_Resume_EN.pdf...</span>"
        ));
        assert!(html.contains("<span class=\"info\">Resume downloaded successfully!"));
    }

    #[test]
    fn test_export_failure_is_one_error_line() {
        let (mut t, _) = terminal_with(
            TerminalConfig::default(),
            Box::new(FailingExporter("jsPDF is not loaded")),
        );
        t.execute("resume");
        let errors = texts(&t, LineKind::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("jsPDF is not loaded"));
        assert!(texts(&t, LineKind::System).is_empty());
    }

    #[test]
    fn test_download_resume_directly() {
        let (mut t, _) = terminal();
        assert_eq!(t.download_resume(Language::Pt), "Gustavo_Muniz_Resume_PT.pdf");
        assert_eq!(texts(&t, LineKind::System).len(), 2);
    }

    #[test]
    fn test_switch_language_replaces_demo() {
        let (mut t, clock) = terminal();
        t.boot();
        clock.advance(200.0);
        t.switch_language(Language::Pt);
        assert_eq!(t.pending_tasks(), 1);
        assert_eq!(t.line_count(), 2);
        assert!(texts(&t, LineKind::System)[0].contains("Português"));
        clock.advance(500.0);
        t.poll();
        assert_eq!(
            texts(&t, LineKind::Input),
            vec!["gustavo@portfolio:~$ arvore".to_string()]
        );
    }

    #[test]
    fn test_switch_without_demo_cancels_boot_demo() {
        let config = TerminalConfig {
            demo_on_language_switch: false,
            ..TerminalConfig::default()
        };
        let (mut t, clock) = terminal_with(config, Box::new(RecordingExporter::default()));
        t.boot();
        assert_eq!(t.pending_tasks(), 1);
        clock.advance(200.0);
        t.switch_language(Language::Pt);
        assert_eq!(t.pending_tasks(), 0);
        clock.advance(1000.0);
        assert!(!t.poll());
        assert!(texts(&t, LineKind::Input).is_empty());
        assert_eq!(t.line_count(), 2);
    }

    #[test]
    fn test_history_survives_language_switch() {
        let (mut t, _) = terminal();
        t.execute("about");
        t.switch_language(Language::Pt);
        assert_eq!(t.navigate(Direction::Up), "about");
    }

    #[test]
    fn test_ambiguous_completion_is_listed() {
        let (mut t, _) = terminal();
        let c = t.complete("h");
        assert_eq!(c, Completion::Ambiguous(vec!["help".into(), "history".into()]));
        assert_eq!(
            texts(&t, LineKind::System),
            vec!["Available completions: help, history".to_string()]
        );
        assert_eq!(t.complete("wh"), Completion::Unique("whoami".into()));
        assert_eq!(t.line_count(), 1);
    }

    #[test]
    fn test_interrupt_and_clear_screen() {
        let (mut t, _) = terminal();
        t.execute("ls");
        t.interrupt();
        assert_eq!(t.lines().last().unwrap().text, "^C");
        t.clear_screen();
        assert_eq!(t.line_count(), 1);
        assert!(t.session().history.len() == 1);
    }

    #[test]
    fn test_render_html_escapes_input() {
        let (mut t, _) = terminal();
        t.execute("<b>hi</b>");
        let html = t.render_html();
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
        assert!(!t.is_processing());
    }
}
