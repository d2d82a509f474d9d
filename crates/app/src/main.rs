use std::fmt;
use std::io::{self, BufRead, Write};

use finbright_core::model::LessonId;
use finbright_core::{Catalog, StartOutcome};
use services::{Language, ProgressionService, SettingsService};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownFlag(String),
    InvalidLanguage { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownFlag(arg) => write!(f, "unknown flag: {arg}"),
            ArgsError::InvalidLanguage { raw } => write!(f, "invalid --lang value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--lang <en|es>] [command ...]");
    eprintln!();
    eprintln!("With no commands an interactive session starts; otherwise the");
    eprintln!("commands run in order against one session and the app exits.");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  lessons              list lessons with lock status");
    eprintln!("  start <lesson-id>    start a lesson and collect points");
    eprintln!("  badges               list badges with earned status");
    eprintln!("  points               show the current point total");
    eprintln!("  profile              show the demo profile card");
    eprintln!("  community            show community statistics");
    eprintln!("  events               list upcoming events");
    eprintln!("  lending              list lending offers");
    eprintln!("  help-topics          list help topics");
    eprintln!("  lang                 toggle the UI language flag");
    eprintln!("  help                 show this command list");
    eprintln!("  quit                 end the session (interactive mode)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  FINBRIGHT_LANG       initial language code (en or es)");
}

struct Args {
    language: Language,
    commands: Vec<String>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut language = std::env::var("FINBRIGHT_LANG")
            .ok()
            .and_then(|value| value.parse::<Language>().ok())
            .unwrap_or_default();
        let mut commands = Vec::new();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--lang" => {
                    let value = args
                        .next()
                        .ok_or(ArgsError::MissingValue { flag: "--lang" })?;
                    language = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidLanguage { raw: value })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                flag if flag.starts_with("--") => {
                    return Err(ArgsError::UnknownFlag(arg));
                }
                _ => commands.push(arg),
            }
        }

        Ok(Self { language, commands })
    }
}

/// Terminal shell around the progression engine. All it does is render view
/// models and forward commands; the rules live in `finbright-core`.
struct Shell {
    progression: ProgressionService,
    settings: SettingsService,
}

enum Step {
    Continue,
    Quit,
}

impl Shell {
    fn new(language: Language) -> Self {
        Self {
            progression: ProgressionService::new(Catalog::finbright()),
            settings: SettingsService::new(language),
        }
    }

    fn execute(&self, line: &str) -> Step {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Step::Continue;
        };

        match command {
            "lessons" => self.show_lessons(),
            "start" => match words.next() {
                Some(id) => self.start_lesson(id),
                None => println!("start needs a lesson id (try `lessons`)"),
            },
            "badges" => self.show_badges(),
            "points" => {
                println!("Your Points: {}", self.progression.current_progress().points());
            }
            "profile" => self.show_profile(),
            "community" => self.show_community(),
            "events" => self.show_events(),
            "lending" => self.show_lending(),
            "help-topics" => self.show_help_topics(),
            "lang" => {
                let language = self.settings.toggle_language();
                println!("Language: {language}");
            }
            "help" => print_usage(),
            "quit" | "exit" => return Step::Quit,
            other => println!("unknown command: {other} (try `help`)"),
        }
        Step::Continue
    }

    fn show_lessons(&self) {
        let points = self.progression.current_progress().points();
        println!("Your Points: {points}");
        println!("Learn & Grow");
        for lesson in self.progression.list_lessons() {
            let marker = if lesson.completed {
                "done"
            } else if lesson.locked {
                "locked"
            } else {
                "open"
            };
            println!(
                "  [{marker}] {} - {} ({}, {})",
                lesson.id, lesson.title, lesson.level, lesson.duration
            );
            if lesson.locked {
                println!(
                    "         requires {} points to unlock ({} more)",
                    lesson.points_required,
                    lesson.missing_points(points)
                );
            }
        }
    }

    fn start_lesson(&self, id: &str) {
        let report = match self.progression.start_lesson(&LessonId::new(id)) {
            Ok(report) => report,
            Err(err) => {
                println!("{err}");
                return;
            }
        };

        match report.outcome {
            StartOutcome::Granted {
                points_gained,
                newly_earned,
            } => {
                println!(
                    "Lesson complete! +{points_gained} points (total {})",
                    report.progress.points()
                );
                if !newly_earned.is_empty() {
                    let names: Vec<&str> = newly_earned.iter().map(|b| b.name()).collect();
                    println!("Congratulations! You've unlocked: {}", names.join(", "));
                }
            }
            StartOutcome::Denied { points_required } => {
                println!("Unlock this lesson by earning {points_required} points!");
            }
        }
    }

    fn show_badges(&self) {
        println!("Available Badges");
        for badge in self.progression.list_badges() {
            let marker = if badge.earned { "earned" } else { "      " };
            println!(
                "  [{marker}] {} ({} pts)",
                badge.name, badge.points_required
            );
        }
    }

    fn show_profile(&self) {
        let profile = services::community::demo_profile();
        println!("{}", profile.name);
        println!("  Health Score:    {}", profile.financial_health_score);
        println!("  Savings Goal:    ${}", profile.savings_goal_usd);
        println!("  Current Savings: ${}", profile.current_savings_usd);
        println!("  Learning Streak: {} days", profile.learning_streak_days);
    }

    fn show_community(&self) {
        let snapshot = services::community::community_snapshot();
        println!("Community Impact");
        println!("  Referrals:       {}", snapshot.referrals);
        println!("  Total Savings:   ${}", snapshot.total_savings_usd);
        println!("  Interest Earned: ${}", snapshot.interest_earned_usd);
    }

    fn show_events(&self) {
        println!("Upcoming Events");
        for event in services::community::upcoming_events() {
            println!("  {} - {}", event.date.format("%B %-d, %Y"), event.title);
            println!("    {} ({})", event.description, event.location);
        }
    }

    fn show_lending(&self) {
        println!("Community Lending");
        for offer in services::community::lending_offers() {
            println!(
                "  {} - up to ${}, {}% interest, {} slots",
                offer.title, offer.max_amount_usd, offer.interest_rate_pct, offer.available_slots
            );
        }
    }

    fn show_help_topics(&self) {
        println!("Help & Support");
        for topic in services::community::help_topics() {
            println!("  {} - {}", topic.title, topic.description);
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let shell = Shell::new(args.language);

    if !args.commands.is_empty() {
        // Script mode: one in-memory session, commands in argv order.
        // `start` consumes the following word as its lesson id.
        let mut words = args.commands.iter();
        while let Some(word) = words.next() {
            let line = if word == "start" {
                match words.next() {
                    Some(id) => format!("start {id}"),
                    None => word.clone(),
                }
            } else {
                word.clone()
            };
            if let Step::Quit = shell.execute(&line) {
                break;
            }
        }
        return Ok(());
    }

    println!("FinBright - Riverwood Community Financial Empowerment");
    println!("Language: {} (type `help` for commands)", shell.settings.language());

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if let Step::Quit = shell.execute(line.trim()) {
            break;
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
