use crate::config::{HOSTNAME, USERNAME};
use crate::markup::{paint, visible_width};

pub struct NeofetchLogo {
    pub lines: Vec<&'static str>,
    pub class: &'static str,
}

pub fn get_logo() -> NeofetchLogo {
    NeofetchLogo {
        lines: vec![
            "          /:-------------:\\",
            "       :-------------------::",
            "     :-----------/shhOHbmp---:\\",
            "   /-----------omMMMNNNMMD  ---:",
            "  :-----------sMMMMNMNMP.    ---:",
            " :-----------:MMMdP-------    ---\\",
            ",------------:MMMd--------    ---:",
            ":------------:MMMd-------    .---:",
            ":----    oNMMMMMMMMMNho     .----:",
            ":--     .+shhhMMMmhhy++   .------/",
            ":-    -------:MMMd--------------:",
            ":-   --------/MMMd-------------;",
            ":-    ------/hMMMy------------:",
            ":-- :dMNdhhdNMMNo------------;",
            ":---:sdNMMMMNds:------------:",
            ":------:://:-------------::",
            ":---------------------://",
        ],
        class: "info",
    }
}

fn field(label: &str, value: &str) -> String {
    format!("{} {}", paint("info", &format!("{}:", label)), value)
}

/// Logo on the left, system facts on the right.
pub fn format_neofetch(uptime: &str) -> String {
    let logo = get_logo();
    let user_host = format!("{}@{}", USERNAME, HOSTNAME);

    let info_lines = [
        paint("success", &user_host),
        paint("success", &"-".repeat(user_host.chars().count())),
        field("OS", "Portfolio Linux x86_64"),
        field("Host", "Terminal Portfolio"),
        field("Kernel", "5.4.0-portfolio"),
        field("Uptime", uptime),
        field("Packages", "experience, skills, projects"),
        field("Shell", "bash 5.0.17"),
        field("Terminal", "web-terminal"),
        field("CPU", "Coffee-powered Developer Brain"),
        field("Memory", "∞ curiosity / ∞ passion"),
        field("Disk", "Unlimited potential"),
        field("Local IP", "127.0.0.1 (home)"),
        format!("{} {}", paint("info", "Favorite OS:"), paint("success", "Fedora")),
    ];

    let max_logo_width = logo.lines.iter().map(|l| visible_width(l)).max().unwrap_or(0);

    let mut rows = Vec::new();
    for i in 0..logo.lines.len().max(info_lines.len()) {
        let logo_line = logo.lines.get(i).copied().unwrap_or("");
        let info_line = info_lines.get(i).map(String::as_str).unwrap_or("");
        let padding = " ".repeat(max_logo_width - visible_width(logo_line) + 3);
        rows.push(format!(
            "{}{}{}",
            paint(logo.class, logo_line),
            padding,
            info_line
        ));
    }
    rows.join("\n")
}
