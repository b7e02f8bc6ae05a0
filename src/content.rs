//! Static, language-keyed text shown by the section commands and `cat`.

use crate::i18n::Language;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContentKey {
    Help,
    About,
    Experience,
    Education,
    Skills,
    Projects,
    Resume,
    Contact,
}

impl ContentKey {
    pub const ALL: [ContentKey; 8] = [
        ContentKey::Help,
        ContentKey::About,
        ContentKey::Experience,
        ContentKey::Education,
        ContentKey::Skills,
        ContentKey::Projects,
        ContentKey::Resume,
        ContentKey::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentKey::Help => "help-content",
            ContentKey::About => "about-content",
            ContentKey::Experience => "experience-content",
            ContentKey::Education => "education-content",
            ContentKey::Skills => "skills-content",
            ContentKey::Projects => "projects-content",
            ContentKey::Resume => "resume-content",
            ContentKey::Contact => "contact-content",
        }
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentEntry {
    pub title: String,
    pub body: Vec<String>,
}

impl ContentEntry {
    pub fn new(title: &str, body: &[&str]) -> Self {
        ContentEntry {
            title: title.to_string(),
            body: body.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// Title, blank line, then the body one line per entry.
    pub fn render(&self) -> String {
        format!("{}\n\n{}", self.title, self.body.join("\n"))
    }
}

/// Gaps between the two language tracks. Advisory only.
#[derive(Debug, Default, PartialEq)]
pub struct TranslationReport {
    pub missing_in_pt: Vec<String>,
    pub missing_in_en: Vec<String>,
}

impl TranslationReport {
    pub fn complete(&self) -> bool {
        self.missing_in_pt.is_empty() && self.missing_in_en.is_empty()
    }
}

pub struct ContentStore {
    entries: BTreeMap<Language, BTreeMap<ContentKey, ContentEntry>>,
    files: BTreeMap<Language, Vec<(&'static str, Option<ContentKey>)>>,
    // Readable through `cat` but never listed.
    aliases: BTreeMap<Language, Vec<(&'static str, ContentKey)>>,
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ContentStore {
    pub fn empty() -> Self {
        ContentStore {
            entries: BTreeMap::new(),
            files: BTreeMap::new(),
            aliases: BTreeMap::new(),
        }
    }

    pub fn builtin() -> Self {
        let mut store = ContentStore::empty();
        for (key, entry) in en_entries() {
            store.insert(Language::En, key, entry);
        }
        for (key, entry) in pt_entries() {
            store.insert(Language::Pt, key, entry);
        }
        store.files.insert(Language::En, EN_FILES.to_vec());
        store.files.insert(Language::Pt, PT_FILES.to_vec());
        store.aliases.insert(Language::Pt, PT_ALIASES.to_vec());
        store
    }

    pub fn insert(&mut self, lang: Language, key: ContentKey, entry: ContentEntry) {
        self.entries.entry(lang).or_default().insert(key, entry);
    }

    pub fn remove(&mut self, lang: Language, key: ContentKey) -> Option<ContentEntry> {
        self.entries.get_mut(&lang).and_then(|m| m.remove(&key))
    }

    pub fn get(&self, lang: Language, key: ContentKey) -> Option<&ContentEntry> {
        self.entries.get(&lang).and_then(|m| m.get(&key))
    }

    /// Names shown by `ls` and `tree`, in display order.
    pub fn file_list(&self, lang: Language) -> Vec<&'static str> {
        self.files
            .get(&lang)
            .map(|files| {
                files.iter().map(|(name, _)| *name).collect()
            })
            .unwrap_or_default()
    }

    /// Looks a filename up in the language's file map, then in its unlisted
    /// aliases. Case-insensitive.
    pub fn file_key(&self, lang: Language, filename: &str) -> Option<ContentKey> {
        let wanted = filename.to_lowercase();
        if let Some((_, key)) = self
            .files
            .get(&lang)
            .and_then(|files| files.iter().find(|(name, _)| *name == wanted))
        {
            return *key;
        }
        self.aliases
            .get(&lang)?
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|(_, key)| *key)
    }

    /// Compares the content keys of both languages and logs any gap.
    pub fn validate_translations(&self) -> TranslationReport {
        let keys = |lang: Language| -> Vec<ContentKey> {
            self.entries
                .get(&lang)
                .map(|m| m.keys().copied().collect())
                .unwrap_or_default()
        };
        let en = keys(Language::En);
        let pt = keys(Language::Pt);
        let report = TranslationReport {
            missing_in_pt: en
                .iter()
                .filter(|k| !pt.contains(k))
                .map(|k| k.to_string())
                .collect(),
            missing_in_en: pt
                .iter()
                .filter(|k| !en.contains(k))
                .map(|k| k.to_string())
                .collect(),
        };
        if !report.missing_in_pt.is_empty() {
            log::warn!("Missing Portuguese translations: {:?}", report.missing_in_pt);
        }
        if !report.missing_in_en.is_empty() {
            log::warn!("Missing English translations: {:?}", report.missing_in_en);
        }
        report
    }
}

const EN_FILES: &[(&str, Option<ContentKey>)] = &[
    ("about.md", Some(ContentKey::About)),
    ("experience.md", Some(ContentKey::Experience)),
    ("education.md", Some(ContentKey::Education)),
    ("skills.md", Some(ContentKey::Skills)),
    ("projects.md", Some(ContentKey::Projects)),
    ("resume.pdf", None),
    ("contact.txt", Some(ContentKey::Contact)),
];

const PT_FILES: &[(&str, Option<ContentKey>)] = &[
    ("sobre.md", Some(ContentKey::About)),
    ("experiencia.md", Some(ContentKey::Experience)),
    ("educacao.md", Some(ContentKey::Education)),
    ("habilidades.md", Some(ContentKey::Skills)),
    ("projetos.md", Some(ContentKey::Projects)),
    ("curriculo.pdf", None),
    ("contato.txt", Some(ContentKey::Contact)),
];

// English names stay readable under Portuguese, like the commands.
const PT_ALIASES: &[(&str, ContentKey)] = &[
    ("about.md", ContentKey::About),
    ("experience.md", ContentKey::Experience),
    ("education.md", ContentKey::Education),
    ("skills.md", ContentKey::Skills),
    ("projects.md", ContentKey::Projects),
    ("contact.txt", ContentKey::Contact),
];

fn en_entries() -> Vec<(ContentKey, ContentEntry)> {
    vec![
        (
            ContentKey::Help,
            ContentEntry::new(
                "🆘 AVAILABLE COMMANDS",
                &[
                    "Navigation Commands:",
                    "  help        - Show this help message",
                    "  about       - Learn about me and my background",
                    "  experience  - View my work experience",
                    "  education   - View my academic background",
                    "  skills      - See my technical skills",
                    "  projects    - View my side projects",
                    "  resume      - Download my resume",
                    "  contact     - Get my contact information",
                    "",
                    "System Commands:",
                    "  clear       - Clear the terminal",
                    "  whoami      - Display current user",
                    "  ls          - List available sections",
                    "  cat         - Read a file (e.g. cat about.md)",
                    "  tree        - Show the portfolio structure",
                    "  neofetch    - Show system information",
                    "  history     - Show command history",
                    "  pwd, date, uname, echo, ps, top, df, free, uptime, sudo, exit",
                    "",
                    "Tip: use ↑/↓ for history and Tab to complete commands.",
                ],
            ),
        ),
        (
            ContentKey::About,
            ContentEntry::new(
                "👨‍💻 GUSTAVO MUNIZ - Full Stack Developer",
                &[
                    "With agility and performance in mind, I always aim to create systems that are not only highly efficient but also make life easier for the users who rely on them.",
                    "With professional experience & years of study, I can swiftly identify errors and resolve them in short timeframes, contributing to the company's growth!",
                    "I am also a passionate enthusiast of the Linux world!",
                ],
            ),
        ),
        (
            ContentKey::Experience,
            ContentEntry::new(
                "💼 WORK EXPERIENCE",
                &[
                    "Support and Development Analyst - PREFEITURA DE PAU BRASIL (2025 - CURRENT)",
                    "  Allied with development tools (Laravel, Symfony, Golang, C#), I identified structural problems in the city hall, and developed applications to help manage, control and facilitate public management through software! In addition to maintaining servers and workstations.",
                    "",
                    "Full Stack Developer - WEMIND GROUP (2024 - 2025)",
                    "  Using technologies like Symfony aligned with Twig, I build systems to help small businesses streamline and centralize their internal processes, simplifying the daily tasks of administrators and consolidating their team data into a single platform.",
                    "",
                    "Speaker - Workshops - ACADEMIC PRESENTATIONS (2025)",
                    "  Whether the topic is AI, development, infrastructure (infra), or automation, delivering talks on these subjects is a strong suit. These sessions can help internal teams onboard with new technologies and work more agilely, achieving high performance.",
                ],
            ),
        ),
        (
            ContentKey::Education,
            ContentEntry::new(
                "🎓 ACADEMIC EDUCATION",
                &[
                    "Information Systems - UNIVERSITY OF EXCELLENCE - UNEX (2023 - 2027)",
                    "Native Mobile Development - SENAC (2020)",
                ],
            ),
        ),
        (
            ContentKey::Skills,
            ContentEntry::new(
                "⚡ TECHNICAL SKILLS",
                &[
                    "Backend:        PHP, Laravel, Symfony, Golang, C#",
                    "Frontend:       Twig, Tailwind CSS, Alpine.js, Chart.js",
                    "DevOps & Tools: Linux, Git, Docker, SQLite, MySQL",
                ],
            ),
        ),
        (
            ContentKey::Projects,
            ContentEntry::new(
                "🚀 SIDE PROJECTS",
                &[
                    "Municipal Fuel Management System",
                    "  Fuel control for public fleets with mandatory authorization, real-time analytics and CSV reports.",
                    "  Technologies: Laravel 12, Laravel Breeze, Tailwind CSS, Alpine.js, Chart.js, SQLite/MySQL",
                    "",
                    "🔧 Coming soon! This section will showcase my personal projects and open-source contributions.",
                    "In the meantime, check out my GitHub: https://github.com/guztaver",
                ],
            ),
        ),
        (
            ContentKey::Resume,
            ContentEntry::new(
                "📄 RESUME",
                &[
                    "Download my resume in PDF format:",
                    "  📥 Download English Resume",
                    "  📥 Download Portuguese Resume",
                ],
            ),
        ),
        (
            ContentKey::Contact,
            ContentEntry::new(
                "📞 CONTACT INFORMATION",
                &[
                    "Phone:    (73) 981155999",
                    "Email:    contact@gustavoanjos.com",
                    "Website:  https://gustavoanjos.com",
                    "GitHub:   https://github.com/guztaver",
                    "LinkedIn: https://linkedin.com/in/gustavo404",
                ],
            ),
        ),
    ]
}

fn pt_entries() -> Vec<(ContentKey, ContentEntry)> {
    vec![
        (
            ContentKey::Help,
            ContentEntry::new(
                "🆘 COMANDOS DISPONÍVEIS",
                &[
                    "Comandos de Navegação:",
                    "  ajuda        - Mostrar esta mensagem de ajuda",
                    "  sobre        - Saber mais sobre mim e minha experiência",
                    "  experiencia  - Ver minha experiência profissional",
                    "  educacao     - Ver minha formação acadêmica",
                    "  habilidades  - Ver minhas habilidades técnicas",
                    "  projetos     - Ver meus projetos pessoais",
                    "  curriculo    - Baixar meu currículo",
                    "  contato      - Obter minhas informações de contato",
                    "",
                    "Comandos do Sistema:",
                    "  limpar       - Limpar o terminal",
                    "  quemsou      - Mostrar usuário atual",
                    "  listar       - Listar seções disponíveis",
                    "  ler          - Ler um arquivo (ex: ler sobre.md)",
                    "  arvore       - Mostrar a estrutura do portfólio",
                    "  neofetch     - Mostrar informações do sistema",
                    "  historico    - Mostrar histórico de comandos",
                    "  pwd, data, sistema, eco, processos, topo, disco, memoria, tempo, sudo, sair",
                    "",
                    "Dica: use ↑/↓ para o histórico e Tab para completar comandos.",
                ],
            ),
        ),
        (
            ContentKey::About,
            ContentEntry::new(
                "👨‍💻 GUSTAVO MUNIZ - Desenvolvedor Full Stack",
                &[
                    "Com agilidade e performance em mente, almejo sempre criar sistemas que, além de muito ágeis, facilitam a vida dos usuários que utilizam eles.",
                    "Com experiência profissional & anos de estudo, posso identificar erros com agilidade e resolvê-los em tempos curtos, que podem ajudar no crescimento da empresa!",
                    "E um entusiasta do mundo Linux!",
                ],
            ),
        ),
        (
            ContentKey::Experience,
            ContentEntry::new(
                "💼 EXPERIÊNCIA PROFISSIONAL",
                &[
                    "Analista de Suporte e Desenvolvimento - PREFEITURA DE PAU BRASIL (2025 - ATUAL)",
                    "  Aliado às ferramentas de desenvolvimento (Laravel, Symfony, Golang, C#), identifiquei problemas estruturais na prefeitura, e desenvolvi aplicativos para ajudar a gerir, controlar e facilitar a gestão pública através de software! Além de dar manutenção em servidores e workstations.",
                    "",
                    "Desenvolvedor Full Stack - WEMIND GROUP (2024 - 2025)",
                    "  Com tecnologias como Symfony alinhadas ao Twig, construo sistemas para que empresas pequenas possam agilizar e centralizar os seus processos internos, facilitando a vida dos administradores e centralizando os dados das suas equipes em uma única plataforma.",
                    "",
                    "Palestrante - DIVERSAS PALESTRAS ACADÊMICAS (2025)",
                    "  Seja o assunto IAs, desenvolvimento, infra ou automação, palestras desses assuntos são um forte, podendo ajudar equipes internas a se introduzirem com uma nova tecnologia e trabalhar de forma mais ágil e com ótima performance.",
                ],
            ),
        ),
        (
            ContentKey::Education,
            ContentEntry::new(
                "🎓 FORMAÇÃO ACADÊMICA",
                &[
                    "Sistemas de Informação - FACULDADE DE EXCELÊNCIA - UNEX (2023 - 2027)",
                    "Desenvolvimento de Aplicativos Mobile - Nativo - SENAC (2020)",
                ],
            ),
        ),
        (
            ContentKey::Skills,
            ContentEntry::new(
                "⚡ HABILIDADES TÉCNICAS",
                &[
                    "Backend:             PHP, Laravel, Symfony, Golang, C#",
                    "Frontend:            Twig, Tailwind CSS, Alpine.js, Chart.js",
                    "DevOps & Ferramentas: Linux, Git, Docker, SQLite, MySQL",
                ],
            ),
        ),
        (
            ContentKey::Projects,
            ContentEntry::new(
                "🚀 PROJETOS PESSOAIS",
                &[
                    "Sistema de Gerenciamento de Combustível Municipal",
                    "  Controle de abastecimento para frotas públicas com autorização obrigatória, dashboard em tempo real e relatórios CSV.",
                    "  Tecnologias: Laravel 12, Laravel Breeze, Tailwind CSS, Alpine.js, Chart.js, SQLite/MySQL",
                    "",
                    "🔧 Em breve! Esta seção mostrará meus projetos pessoais e contribuições open-source.",
                    "Enquanto isso, confira meu GitHub: https://github.com/guztaver",
                ],
            ),
        ),
        (
            ContentKey::Resume,
            ContentEntry::new(
                "📄 CURRÍCULO",
                &[
                    "Baixe meu currículo em formato PDF:",
                    "  📥 Baixar Currículo em Inglês",
                    "  📥 Baixar Currículo em Português",
                ],
            ),
        ),
        (
            ContentKey::Contact,
            ContentEntry::new(
                "📞 INFORMAÇÕES DE CONTATO",
                &[
                    "Telefone: (73) 981155999",
                    "E-mail:   contact@gustavoanjos.com",
                    "Website:  https://gustavoanjos.com",
                    "GitHub:   https://github.com/guztaver",
                    "LinkedIn: https://linkedin.com/in/gustavo404",
                ],
            ),
        ),
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct ResumeContact {
    pub phone: &'static str,
    pub email: &'static str,
    pub website: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResumeExperience {
    pub position: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResumeEducation {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResumeProject {
    pub name: &'static str,
    pub description: &'static str,
    pub technologies: &'static str,
    pub impact: &'static str,
    pub link: Option<&'static str>,
}

/// Section headings and labels used in the PDF.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeLabels {
    pub profile: &'static str,
    pub experience: &'static str,
    pub education: &'static str,
    pub projects: &'static str,
    pub technologies: &'static str,
    pub impact: &'static str,
}

/// Everything the PDF bridge needs to lay out one resume.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeData {
    pub name: &'static str,
    pub title: &'static str,
    pub contact: ResumeContact,
    pub profile: &'static str,
    pub labels: ResumeLabels,
    pub experience: Vec<ResumeExperience>,
    pub education: Vec<ResumeEducation>,
    pub projects: Vec<ResumeProject>,
}

const CONTACT: ResumeContact = ResumeContact {
    phone: "(73) 981155999",
    email: "contact@gustavoanjos.com",
    website: "https://gustavoanjos.com",
    github: "https://github.com/guztaver",
    linkedin: "https://linkedin.com/in/gustavo404",
};

const FUEL_PROJECT_LINK: &str =
    "https://www.linkedin.com/feed/update/urn:li:activity:7356710729246224384/";

pub fn resume_data(lang: Language) -> ResumeData {
    match lang {
        Language::En => ResumeData {
            name: "GUSTAVO MUNIZ",
            title: "Backend Developer",
            contact: CONTACT,
            profile: "With agility and performance in mind, I always aim to create systems that are not only highly efficient but also make life easier for the users who rely on them. With professional experience & years of study, I can swiftly identify errors and resolve them in short timeframes, contributing to the company's growth! I am also a passionate enthusiast of the Linux world!",
            labels: ResumeLabels {
                profile: "PROFESSIONAL PROFILE",
                experience: "WORK EXPERIENCE",
                education: "ACADEMIC EDUCATION",
                projects: "KEY PROJECTS",
                technologies: "Technologies: ",
                impact: "Impact: ",
            },
            experience: vec![
                ResumeExperience {
                    position: "Support and Development Analyst",
                    company: "PREFEITURA DE PAU BRASIL",
                    period: "2025 - CURRENT",
                    description: "Allied with development tools (Laravel, Symfony, Golang, C#), I identified structural problems in the prefecture, and developed applications to help manage, control and facilitate public management through software! In addition to maintaining servers and workstations.",
                },
                ResumeExperience {
                    position: "Full Stack Developer",
                    company: "WEMIND GROUP",
                    period: "2024 - 2025",
                    description: "Using technologies like Symfony aligned with Twig, I build systems to help small businesses streamline and centralize their internal processes, simplifying the daily tasks of administrators and consolidating their team data into a single platform.",
                },
                ResumeExperience {
                    position: "Speaker - Workshops",
                    company: "ACADEMIC PRESENTATIONS",
                    period: "2025",
                    description: "Whether the topic is AI, development, infrastructure (infra), or automation, delivering talks on these subjects is a strong suit. These sessions can help internal teams onboard with new technologies and work more agilely, achieving high performance.",
                },
            ],
            education: vec![
                ResumeEducation {
                    degree: "Information Systems",
                    institution: "UNIVERSITY OF EXCELLENCE - UNEX",
                    period: "2023 - 2027",
                },
                ResumeEducation {
                    degree: "Native Mobile Development",
                    institution: "SENAC",
                    period: "2020 - 2020",
                },
            ],
            projects: vec![ResumeProject {
                name: "Municipal Fuel Management System",
                description: "Complete fuel management system for public fleets built with Laravel. Features fuel control with mandatory authorization, real-time analytics dashboard, vehicle management with MERCOSUL validation, role-based access control (Admin, Manager, Operator), detailed reports with CSV export, and cost control with full transparency.",
                technologies: "Laravel 12, Laravel Breeze, Tailwind CSS, Alpine.js, Chart.js, SQLite/MySQL",
                impact: "Increased transparency in public spending, strict fuel control, and cost optimization for municipal governments.",
                link: Some(FUEL_PROJECT_LINK),
            }],
        },
        Language::Pt => ResumeData {
            name: "GUSTAVO MUNIZ",
            title: "Desenvolvedor Backend",
            contact: CONTACT,
            profile: "Com agilidade e performance em mente, almejo sempre criar sistemas que, além de muito ágeis, facilitam a vida dos usuários que utilizam eles. Com experiência profissional & anos de estudo, posso identificar erros com agilidade e resolvê-los em tempos curtos, que podem ajudar no crescimento da empresa! E um entusiasta do mundo Linux!",
            labels: ResumeLabels {
                profile: "OBJETIVOS",
                experience: "EXPERIÊNCIAS",
                education: "FORMAÇÃO",
                projects: "PROJETOS",
                technologies: "Tecnologias: ",
                impact: "Impacto: ",
            },
            experience: vec![
                ResumeExperience {
                    position: "Analista de Suporte e Desenvolvimento",
                    company: "PREFEITURA DE PAU BRASIL",
                    period: "2025 - ATUAL",
                    description: "Aliado às ferramentas de desenvolvimento (Laravel, Symfony, Golang, C#), identifiquei problemas estruturais na prefeitura, e desenvolvi aplicativos para ajudar a gerir, controlar e facilitar a gestão pública através de software! Além de dar manutenção em servidores e workstations.",
                },
                ResumeExperience {
                    position: "Desenvolvedor Full Stack",
                    company: "WEMIND GROUP",
                    period: "2024 - 2025",
                    description: "Com tecnologias como Symfony alinhadas ao Twig, construo sistemas para que empresas pequenas possam agilizar e centralizar os seus processos internos, facilitando a vida dos administradores e centralizando os dados das suas equipes em uma única plataforma.",
                },
                ResumeExperience {
                    position: "Palestrante",
                    company: "DIVERSAS PALESTRAS ACADÊMICAS",
                    period: "2025",
                    description: "Seja o assunto IAs, desenvolvimento, infra ou automação, palestras desses assuntos são um forte, podendo ajudar equipes internas a se introduzirem com uma nova tecnologia e trabalhar de forma mais ágil e com ótima performance.",
                },
            ],
            education: vec![
                ResumeEducation {
                    degree: "Sistemas de Informação",
                    institution: "FACULDADE DE EXCELÊNCIA - UNEX",
                    period: "2023 - 2027",
                },
                ResumeEducation {
                    degree: "Desenvolvimento de Aplicativos Mobile - Nativo",
                    institution: "SENAC",
                    period: "2020 - 2020",
                },
            ],
            projects: vec![ResumeProject {
                name: "Sistema de Gerenciamento de Combustível Municipal",
                description: "Sistema completo de gerenciamento de combustível para frotas públicas desenvolvido em Laravel. Oferece controle total de abastecimentos com autorização obrigatória, dashboard analytics com gráficos em tempo real, gestão de veículos com validação MERCOSUL, sistema de roles (Admin, Gerente, Operador), relatórios detalhados e exportação CSV, e controle de custos com transparência total.",
                technologies: "Laravel 12, Laravel Breeze, Tailwind CSS, Alpine.js, Chart.js, SQLite/MySQL",
                impact: "Maior transparência nos gastos públicos, controle rigoroso de combustível e otimização de custos para prefeituras.",
                link: Some(FUEL_PROJECT_LINK),
            }],
        },
    }
}
