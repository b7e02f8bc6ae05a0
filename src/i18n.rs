use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Pt,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Pt];

    pub fn from_code(code: &str) -> Option<Language> {
        let c = code.trim().to_ascii_lowercase();
        if c == "en" || c.starts_with("en-") {
            Some(Language::En)
        } else if c == "pt" || c.starts_with("pt-") {
            Some(Language::Pt)
        } else {
            None
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
        }
    }

    /// Upper-case tag used in download filenames.
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Pt => "PT",
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Language::En => &EN_MESSAGES,
            Language::Pt => &PT_MESSAGES,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// UI strings for one language.
pub struct Messages {
    pub welcome: &'static str,
    pub help_tip: &'static str,
    pub cleared: &'static str,
    pub whoami: &'static str,
    pub whoami_desc: &'static str,
    pub sections: &'static str,
    pub command_not_found: &'static str,
    pub help_hint: &'static str,
    pub usage_cat: &'static str,
    pub file_not_found: &'static str,
    pub content_not_found: &'static str,
    pub processes: &'static str,
    pub top_processes: &'static str,
    pub memory: &'static str,
    pub uptime: &'static str,
    pub uptime_desc: &'static str,
    pub years_of_coding: &'static str,
    pub nice_try: &'static str,
    pub permissions: &'static str,
    pub goodbye: &'static str,
    pub joking_exit: &'static str,
    pub close_tab: &'static str,
    pub command_history: &'static str,
    pub downloading_resume: &'static str,
    pub resume_success: &'static str,
    pub export_failed: &'static str,
    pub language_switched: &'static str,
    pub language_info: &'static str,
    pub completions: &'static str,
}

pub static EN_MESSAGES: Messages = Messages {
    welcome: "Welcome to Gustavo's Terminal Portfolio! 🚀",
    help_tip: "Type 'help' to see available commands or 'about' to learn more about me.",
    cleared: "Terminal cleared! ✨",
    whoami: "gustavo",
    whoami_desc: "Full Stack Developer | Linux Enthusiast | Problem Solver",
    sections: "Available sections:",
    command_not_found: "Command not found:",
    help_hint: "Type 'help' to see available commands.",
    usage_cat: "Usage: cat [filename]",
    file_not_found: "cat: {file}: No such file or directory",
    content_not_found: "Content not found",
    processes: "Active processes:",
    top_processes: "Top processes by passion usage:",
    memory: "Memory Usage:",
    uptime: "System uptime:",
    uptime_desc: "Developer uptime: Several years of passion! 🚀",
    years_of_coding: "{days} days, {years} years of coding",
    nice_try: "Nice try! But this is a portfolio, not a real terminal 😄",
    permissions: "You already have all the permissions you need here!",
    goodbye: "Goodbye! Thanks for visiting my portfolio! 👋",
    joking_exit: "Just kidding! You can't exit from here 😉",
    close_tab: "But feel free to close the tab if you want to leave!",
    command_history: "Command History:",
    downloading_resume: "📥 Downloading {filename}...",
    resume_success: "Resume downloaded successfully! Check your Downloads folder.",
    export_failed: "Error generating PDF: {error}",
    language_switched: "Language switched to English! 🇺🇸",
    language_info: "You can now use English commands like \"help\", \"about\", \"experience\", etc.",
    completions: "Available completions:",
};

pub static PT_MESSAGES: Messages = Messages {
    welcome: "Bem-vindo ao meu portfólio terminal! 🚀",
    help_tip: "Digite 'ajuda' para ver os comandos disponíveis ou 'sobre' para saber mais sobre mim.",
    cleared: "Terminal limpo! ✨",
    whoami: "gustavo",
    whoami_desc: "Desenvolvedor Full Stack | Entusiasta Linux | Solucionador de Problemas",
    sections: "Seções disponíveis:",
    command_not_found: "Comando não encontrado:",
    help_hint: "Digite 'ajuda' para ver os comandos disponíveis.",
    usage_cat: "Uso: ler [arquivo]",
    file_not_found: "ler: {file}: Arquivo ou diretório não encontrado",
    content_not_found: "Conteúdo não encontrado",
    processes: "Processos ativos:",
    top_processes: "Top processos por uso de paixão:",
    memory: "Uso de Memória:",
    uptime: "Tempo de sistema:",
    uptime_desc: "Tempo de desenvolvedor: Vários anos de paixão! 🚀",
    years_of_coding: "{days} dias, {years} anos programando",
    nice_try: "Boa tentativa! Mas isso é um portfólio, não um terminal real 😄",
    permissions: "Você já tem todas as permissões que precisa aqui!",
    goodbye: "Tchau! Obrigado por visitar meu portfólio! 👋",
    joking_exit: "Brincadeira! Você não pode sair daqui 😉",
    close_tab: "Mas fique à vontade para fechar a aba se quiser sair!",
    command_history: "Histórico de Comandos:",
    downloading_resume: "📥 Baixando {filename}...",
    resume_success: "Currículo baixado com sucesso! Verifique sua pasta de Downloads.",
    export_failed: "Erro ao gerar o PDF: {error}",
    language_switched: "Idioma alterado para Português! 🇧🇷",
    language_info: "Agora você pode usar comandos em português como \"ajuda\", \"sobre\", \"experiencia\", etc.",
    completions: "Completações disponíveis:",
};

/// Replaces every `{name}` placeholder with its value.
pub fn fill(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in params {
        out = out.replace(&format!("{{{}}}", key), value);
    }
    out
}
