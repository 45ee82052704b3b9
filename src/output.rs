//! Terminal rendering: banners, panels and turn output.

use colored::{Color, Colorize};

use frankie_agents::AgentKind;
use frankie_orchestrator::{MacroId, Notice, OrchestratorError, Reply, Turn};

const PANEL_WIDTH: usize = 72;

pub(crate) const BLANK_WARNING: &str =
    "💭 Please enter a command or request. Type 'help' for guidance.";

/// A box with a title bar; long lines are left as-is.
pub(crate) fn panel(title: &str, body: &str, color: Color) {
    let title = format!("─ {title} ");
    let fill = PANEL_WIDTH.saturating_sub(title.chars().count() + 1);
    println!("{}", format!("╭{title}{}", "─".repeat(fill)).color(color));
    for line in body.lines() {
        println!("{} {}", "│".color(color), line);
    }
    println!("{}", format!("╰{}", "─".repeat(PANEL_WIDTH - 1)).color(color));
}

pub(crate) fn notice(notice: &Notice) {
    match notice {
        Notice::Info(s) => println!("{}", s.cyan()),
        Notice::Success(s) => println!("{}", s.green()),
        Notice::Warning(s) => println!("{}", s.yellow()),
        Notice::Error(s) => println!("{}", s.red()),
    }
}

pub(crate) fn welcome(target: &str, bypass_consent: bool) {
    println!();
    println!("{}", "🤖 F.R.A.N.K.I.E.".bright_cyan().bold());
    println!(
        "{}",
        "Framework for Routing Agents, Navigating Knowledge and Intelligent Execution".dimmed()
    );
    println!();
    let mut table = String::new();
    for kind in AgentKind::ALL {
        table.push_str(&format!(
            "{:<22} {:<28} {}\n",
            kind.name(),
            kind.id(),
            kind.aliases().join(", ")
        ));
    }
    panel("Specialist Agents", table.trim_end(), Color::Cyan);
    let consent = if bypass_consent {
        "tool consent bypassed".yellow()
    } else {
        "tool consent required".green()
    };
    println!(
        "{} {} {} {}",
        "Status:".bold(),
        format!("routing to {target}").bright_white(),
        "|".dimmed(),
        consent
    );
    println!(
        "{}",
        "Type 'help' for commands, 'shortcuts' for desktop macros, 'exit' to quit.".dimmed()
    );
    println!();
}

pub(crate) fn goodbye() {
    println!();
    println!("{}", "👋 Goodbye! F.R.A.N.K.I.E. signing off.".bright_cyan());
}

pub(crate) fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}

pub(crate) fn help() {
    let body = [
        "exit | quit | bye        Leave F.R.A.N.K.I.E.",
        "help | ?                 Show this help",
        "clear                    Clear the screen",
        "shortcuts | macros       List desktop shortcuts",
        "!<command>               Run a shell command",
        "",
        "Anything else is sent to the orchestrator, which picks a specialist:",
        "  \"search the web for rust 2024 edition changes\"     browser",
        "  \"draw an architecture diagram of a web service\"    content",
        "  \"what's new on my rss feeds?\"                      news",
        "  \"remember that the demo is on Friday\"              memory",
        "",
        "Say \"send computer ...\" to reach the computer agent without shortcuts.",
        "Start with `frankie --agent <name>` to talk to one specialist directly.",
    ]
    .join("\n");
    panel("❓ Help", &body, Color::Blue);
}

pub(crate) fn shortcuts() {
    let mut body = String::new();
    for id in MacroId::ALL {
        body.push_str(&format!("{:<20} {}\n", id.canonical(), id.summary()));
        body.push_str(&format!(
            "{:<20} {}\n",
            "",
            format!("also: {}", id.variants().join(", ")).dimmed()
        ));
    }
    panel("⚡ Desktop Shortcuts", body.trim_end(), Color::Magenta);
}

fn reply(reply: &Reply) {
    if let Some(text) = &reply.text {
        panel(&reply.title, text, Color::Green);
    }
    for n in &reply.notices {
        notice(n);
    }
}

pub(crate) fn error(err: &OrchestratorError) {
    let body = format!(
        "Error Type: {}\nMessage: {}\n\nTroubleshooting:\n  • Check your network connection and API key\n  \
         • Try rephrasing the request or name an agent with --agent\n  \
         • Run with --debug and check ~/.frankie/logs",
        err.kind(),
        err
    );
    panel("❌ Error", &body, Color::Red);
}

pub(crate) fn critical(message: &str) {
    panel(
        "🚨 Critical System Error",
        &format!("{message}\n\nF.R.A.N.K.I.E. has to stop."),
        Color::Red,
    );
}

/// Print one turn. Exit, clear and help are handled here too.
pub(crate) fn render(turn: &Turn) {
    match turn {
        Turn::Exit => goodbye(),
        Turn::Help => help(),
        Turn::Clear => clear_screen(),
        Turn::Shortcuts => shortcuts(),
        Turn::Blank => println!("{}", BLANK_WARNING.yellow()),
        Turn::Ignored => {}
        Turn::Shell {
            command,
            success,
            output,
        } => {
            let (title, color) = if *success {
                (format!("$ {command}"), Color::White)
            } else {
                (format!("$ {command} (failed)"), Color::Red)
            };
            let output = if output.trim().is_empty() {
                "(no output)"
            } else {
                output.as_str()
            };
            panel(&title, output, color);
        }
        Turn::Reply(r) => reply(r),
        Turn::Failed(e) => error(e),
    }
}
