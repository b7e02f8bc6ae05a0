use crate::content::ContentKey;
use crate::i18n::Language;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Clear,
    Whoami,
    ListSections,
    PrintPath,
    ShowDate,
    ShowSystemInfo,
    ReadFile,
    Echo,
    ShowAsciiBanner,
    FakeSudo,
    FakeExit,
    ShowHistory,
    ShowTree,
    ShowProcesses,
    ShowTop,
    ShowDiskUsage,
    ShowMemory,
    ShowUptime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Content(ContentKey),
    Verb(Verb),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Content(ContentKey),
    Verb(Verb),
    NotFound,
}

impl From<Option<Action>> for Resolution {
    fn from(action: Option<Action>) -> Self {
        match action {
            Some(Action::Content(key)) => Resolution::Content(key),
            Some(Action::Verb(verb)) => Resolution::Verb(verb),
            None => Resolution::NotFound,
        }
    }
}

use self::Action::{Content as C, Verb as V};

const EN_TABLE: &[(&str, Action)] = &[
    ("help", C(ContentKey::Help)),
    ("about", C(ContentKey::About)),
    ("experience", C(ContentKey::Experience)),
    ("education", C(ContentKey::Education)),
    ("skills", C(ContentKey::Skills)),
    ("projects", C(ContentKey::Projects)),
    ("resume", C(ContentKey::Resume)),
    ("contact", C(ContentKey::Contact)),
    ("clear", V(Verb::Clear)),
    ("whoami", V(Verb::Whoami)),
    ("ls", V(Verb::ListSections)),
    ("pwd", V(Verb::PrintPath)),
    ("date", V(Verb::ShowDate)),
    ("uname", V(Verb::ShowSystemInfo)),
    ("cat", V(Verb::ReadFile)),
    ("echo", V(Verb::Echo)),
    ("neofetch", V(Verb::ShowAsciiBanner)),
    ("sudo", V(Verb::FakeSudo)),
    ("exit", V(Verb::FakeExit)),
    ("history", V(Verb::ShowHistory)),
    ("tree", V(Verb::ShowTree)),
    ("ps", V(Verb::ShowProcesses)),
    ("top", V(Verb::ShowTop)),
    ("df", V(Verb::ShowDiskUsage)),
    ("free", V(Verb::ShowMemory)),
    ("uptime", V(Verb::ShowUptime)),
];

const PT_TABLE: &[(&str, Action)] = &[
    ("ajuda", C(ContentKey::Help)),
    ("sobre", C(ContentKey::About)),
    ("experiencia", C(ContentKey::Experience)),
    ("educacao", C(ContentKey::Education)),
    ("habilidades", C(ContentKey::Skills)),
    ("projetos", C(ContentKey::Projects)),
    ("curriculo", C(ContentKey::Resume)),
    ("contato", C(ContentKey::Contact)),
    ("limpar", V(Verb::Clear)),
    ("quemsou", V(Verb::Whoami)),
    ("listar", V(Verb::ListSections)),
    ("pwd", V(Verb::PrintPath)),
    ("data", V(Verb::ShowDate)),
    ("sistema", V(Verb::ShowSystemInfo)),
    ("ler", V(Verb::ReadFile)),
    ("eco", V(Verb::Echo)),
    ("neofetch", V(Verb::ShowAsciiBanner)),
    ("sudo", V(Verb::FakeSudo)),
    ("sair", V(Verb::FakeExit)),
    ("historico", V(Verb::ShowHistory)),
    ("arvore", V(Verb::ShowTree)),
    ("processos", V(Verb::ShowProcesses)),
    ("topo", V(Verb::ShowTop)),
    ("disco", V(Verb::ShowDiskUsage)),
    ("memoria", V(Verb::ShowMemory)),
    ("tempo", V(Verb::ShowUptime)),
];

/// Maps typed command words to what they do, per language. English words
/// stay valid while Portuguese is active; the reverse is not true.
pub struct CommandRegistry {
    tables: BTreeMap<Language, BTreeMap<&'static str, Action>>,
    order: BTreeMap<Language, Vec<&'static str>>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        let mut r = CommandRegistry {
            tables: BTreeMap::new(),
            order: BTreeMap::new(),
        };
        r.register(Language::En, EN_TABLE);
        r.register(Language::Pt, PT_TABLE);
        r
    }

    fn register(&mut self, lang: Language, table: &[(&'static str, Action)]) {
        let map = self.tables.entry(lang).or_default();
        let order = self.order.entry(lang).or_default();
        for &(token, action) in table {
            if map.insert(token, action).is_none() {
                order.push(token);
            }
        }
    }

    fn lookup(&self, lang: Language, token: &str) -> Option<Action> {
        self.tables.get(&lang)?.get(token).copied()
    }

    pub fn resolve(&self, token: &str, lang: Language) -> Resolution {
        let token = token.to_lowercase();
        let native = self.lookup(lang, &token);
        let action = match (native, lang) {
            (Some(a), _) => Some(a),
            (None, Language::Pt) => self.lookup(Language::En, &token),
            (None, Language::En) => None,
        };
        action.into()
    }

    /// Every token valid under `lang`, native ones first, no duplicates.
    pub fn tokens(&self, lang: Language) -> Vec<&'static str> {
        let mut out: Vec<&'static str> = self.order.get(&lang).cloned().unwrap_or_default();
        if lang == Language::Pt {
            if let Some(en) = self.order.get(&Language::En) {
                for token in en {
                    if !out.contains(token) {
                        out.push(token);
                    }
                }
            }
        }
        out
    }

    /// First native command word bound to `action`.
    pub fn token_for(&self, action: Action, lang: Language) -> Option<&'static str> {
        self.order
            .get(&lang)?
            .iter()
            .copied()
            .find(|t| self.lookup(lang, t) == Some(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_case_insensitive() {
        let r = CommandRegistry::new();
        assert_eq!(r.resolve("HeLp", Language::En), Resolution::Content(ContentKey::Help));
        assert_eq!(r.resolve("LS", Language::En), Resolution::Verb(Verb::ListSections));
    }

    #[test]
    fn test_english_fallback_is_one_way() {
        let r = CommandRegistry::new();
        assert_eq!(r.resolve("about", Language::Pt), Resolution::Content(ContentKey::About));
        assert_eq!(r.resolve("sobre", Language::Pt), Resolution::Content(ContentKey::About));
        assert_eq!(r.resolve("sobre", Language::En), Resolution::NotFound);
        assert_eq!(r.resolve("ls", Language::Pt), Resolution::Verb(Verb::ListSections));
    }

    #[test]
    fn test_portuguese_whoami() {
        let r = CommandRegistry::new();
        assert_eq!(r.resolve("quemSou", Language::Pt), Resolution::Verb(Verb::Whoami));
    }

    #[test]
    fn test_unknown_is_not_found() {
        let r = CommandRegistry::new();
        assert_eq!(r.resolve("rm", Language::En), Resolution::NotFound);
        assert_eq!(r.resolve("", Language::Pt), Resolution::NotFound);
    }

    #[test]
    fn test_tokens_dedup() {
        let r = CommandRegistry::new();
        let en = r.tokens(Language::En);
        assert_eq!(en.len(), 26);
        assert_eq!(en[0], "help");
        let pt = r.tokens(Language::Pt);
        assert_eq!(pt[0], "ajuda");
        assert_eq!(pt.iter().filter(|t| **t == "pwd").count(), 1);
        assert!(pt.contains(&"about"));
        assert_eq!(pt.len(), 26 + 26 - 3);
    }

    #[test]
    fn test_token_for_verb() {
        let r = CommandRegistry::new();
        let tree = Action::Verb(Verb::ShowTree);
        assert_eq!(r.token_for(tree, Language::Pt), Some("arvore"));
        assert_eq!(r.token_for(tree, Language::En), Some("tree"));
    }
}
