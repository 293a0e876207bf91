use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

use party_site::SITE_ID;
use party_site::api::{ApiClient, MemberType};
use party_site::config::{self, Config};
use party_site::counter::{Counter, CounterSpec, CounterState, Easing, FrameSink};
use party_site::forms::{
    ContactForm, FormOutcome, NewsletterForm, PollForm, RegistrationForm, RsvpForm,
};
use party_site::logging;
use party_site::render::{Board, long_date};
use party_site::site::content::{
    IMPACT_DURATION_MS, IMPACT_METRICS, PHOTOS, STAT_DURATION_MS, STATS, Stat,
};
use party_site::site::{EventsView, Lightbox, PageView, Route};
use party_site::state::{Session, Theme, ToastVariant};

#[derive(Parser)]
#[command(name = SITE_ID, version, about = "United People's Party site tools")]
struct Cli {
    /// Config file (default: ~/.config/party-site/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    api: Option<String>,

    /// Override the colour theme for this session
    #[arg(long, global = true)]
    theme: Option<Theme>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a page by its URL path
    Page {
        #[arg(default_value = "/")]
        path: String,
    },
    /// List every route
    Routes,
    /// Show the session theme, optionally toggling it
    Theme {
        #[arg(long)]
        toggle: bool,
    },
    /// Animate a single counter
    Counter {
        target: i64,
        #[arg(long, default_value_t = STAT_DURATION_MS)]
        duration: i64,
        #[arg(long, default_value = "")]
        suffix: String,
        #[arg(long)]
        easing: Option<Easing>,
    },
    /// Animate the home page stats board
    Stats {
        /// Show the impact metrics instead
        #[arg(long)]
        impact: bool,
    },
    /// Step through the photo gallery
    Gallery {
        #[arg(long, default_value = "All")]
        category: String,
    },
    /// List events from the API
    Events {
        /// Event type to show (`all` for everything)
        #[arg(long = "type", default_value = "all")]
        event_type: String,
    },
    /// Submit one of the site's forms
    #[command(subcommand)]
    Submit(Submit),
}

#[derive(Subcommand)]
enum Submit {
    Newsletter {
        #[arg(long)]
        email: String,
    },
    Contact(ContactArgs),
    Rsvp {
        /// Event id from `events`
        #[arg(long)]
        event: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
    },
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        interest: String,
        #[arg(long, default_value_t = MemberType::Member)]
        member_type: MemberType,
    },
    Poll {
        #[arg(long)]
        option: String,
    },
}

#[derive(Args)]
struct ContactArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    subject: String,
    #[arg(long)]
    message: String,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let _guard = logging::init(SITE_ID);

    let mut config = load_config(cli.config.as_deref());
    if let Some(api) = cli.api {
        config.api_base_url = api;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    let session = Session::new(&config);
    session.theme.subscribe(|theme| info!(%theme, "theme changed"));

    match cli.command {
        Command::Page { path } => {
            let route = Route::resolve(&path);
            println!("{}", PageView::new(route));
            let theme = session.theme.theme();
            println!("Theme: {theme} (toggle for {})", theme.toggled());
            Ok(if route == Route::NotFound {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Command::Routes => {
            for route in Route::all() {
                println!("{:<12} {}", route.path().unwrap_or_default(), route.title());
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Theme { toggle } => {
            if toggle {
                session.theme.toggle();
            }
            println!("{}", session.theme.theme());
            Ok(ExitCode::SUCCESS)
        }
        Command::Counter {
            target,
            duration,
            suffix,
            easing,
        } => {
            let easing = easing.unwrap_or(config.counter.easing);
            run_counter(&config, easing, CounterSpec::new(target, duration, suffix));
            Ok(ExitCode::SUCCESS)
        }
        Command::Stats { impact } => {
            let (stats, duration) = if impact {
                (IMPACT_METRICS, IMPACT_DURATION_MS)
            } else {
                (STATS, STAT_DURATION_MS)
            };
            run_board(&config, stats, duration);
            Ok(ExitCode::SUCCESS)
        }
        Command::Gallery { category } => {
            show_gallery(&category);
            Ok(ExitCode::SUCCESS)
        }
        Command::Events { event_type } => {
            let client = ApiClient::new(&config.api_base_url)?;
            runtime()?.block_on(list_events(&client, &event_type))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Submit(submit) => {
            let client = ApiClient::new(&config.api_base_url)?;
            let outcome = runtime()?.block_on(run_submit(&client, &session, submit));
            print_toasts(&session);
            Ok(match outcome {
                FormOutcome::Sent => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            })
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> Config {
    let result = match path {
        Some(p) => config::load_config_from(p),
        None => config::load_config(),
    };
    if let Some(warning) = result.warning {
        warn!("{warning}; using defaults");
    }
    result.config
}

fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new().context("failed to start async runtime")
}

fn counter_for(config: &Config, easing: Easing, sink: impl FrameSink) -> Counter {
    Counter::new(sink)
        .with_easing(easing)
        .with_tick(Duration::from_millis(config.counter.tick_ms))
}

fn run_counter(config: &Config, easing: Easing, spec: CounterSpec) {
    let sink = |text: &str, _state: CounterState| {
        let mut out = std::io::stdout().lock();
        let _ = write!(out, "\r\x1b[2K{text}");
        let _ = out.flush();
    };

    let mut counter = counter_for(config, easing, sink);
    let started = Instant::now();
    counter.start(spec);
    let done = counter.wait();
    println!();
    info!(value = done.display_value, elapsed = ?started.elapsed(), "counter finished");
}

fn run_board(config: &Config, stats: &[Stat], duration_ms: i64) {
    let labels: Vec<&str> = stats.iter().map(|s| s.label).collect();
    let board = Board::new(&labels, std::io::stdout());

    let counters: Vec<Counter> = stats
        .iter()
        .enumerate()
        .map(|(i, stat)| {
            let mut counter = counter_for(config, config.counter.easing, board.slot(i));
            counter.start(CounterSpec::new(stat.value, duration_ms, stat.suffix));
            counter
        })
        .collect();

    for counter in &counters {
        counter.wait();
    }
}

fn show_gallery(category: &str) {
    let mut lightbox = Lightbox::new(PHOTOS);
    lightbox.select_category(category);
    if !lightbox.open_at(0) {
        println!("No photos in {category}.");
        return;
    }
    for _ in 0..lightbox.filtered().len() {
        if let (Some(photo), Some(position)) = (lightbox.current(), lightbox.position()) {
            println!("{position:>8}  {} [{}]", photo.title, photo.category);
        }
        lightbox.next();
    }
    lightbox.close();
}

async fn list_events(client: &ApiClient, event_type: &str) -> anyhow::Result<()> {
    let mut view = EventsView::new();
    view.set_filter(event_type);
    view.load(client)
        .await
        .context("failed to load events")?;

    let events = view.filtered();
    if events.is_empty() {
        println!("No events found.");
        return Ok(());
    }
    for e in events {
        let when = long_date(&e.date).unwrap_or_else(|| e.date.clone());
        println!("[{}] {} ({})", e.id, e.title, e.event_type);
        println!("    {when} {} @ {}", e.time, e.location);
        println!("    {} RSVPs", e.rsvp_count);
        if !e.description.is_empty() {
            println!("    {}", e.description);
        }
    }
    Ok(())
}

async fn run_submit(client: &ApiClient, session: &Session, submit: Submit) -> FormOutcome {
    let toasts = &session.toasts;
    match submit {
        Submit::Newsletter { email } => {
            NewsletterForm { email }.submit(client, toasts).await
        }
        Submit::Contact(args) => {
            let mut form = ContactForm::default();
            form.name = args.name;
            form.email = args.email;
            form.subject = args.subject;
            form.message = args.message;
            form.submit(client, toasts).await
        }
        Submit::Rsvp {
            event,
            name,
            email,
            phone,
        } => {
            let mut view = EventsView::new();
            if let Err(e) = view.load(client).await {
                warn!(error = %e, "could not load events for RSVP");
                toasts.error("Error", "Failed to submit RSVP. Please try again.");
                return FormOutcome::Failed(e);
            }
            let Some(record) = view.find(&event).cloned() else {
                toasts.error("Unknown Event", format!("No event with id {event}."));
                return FormOutcome::Incomplete("event");
            };

            let mut form = RsvpForm::open(&record);
            form.name = name;
            form.email = email;
            form.phone = phone;
            form.submit(client, toasts, &mut view).await
        }
        Submit::Register {
            name,
            email,
            phone,
            interest,
            member_type,
        } => {
            let mut form = RegistrationForm::default();
            form.name = name;
            form.email = email;
            form.phone = phone;
            form.area_of_interest = interest;
            form.member_type = member_type;
            if let Err(field) = form.next() {
                toasts.error("Missing Fields", "Please fill in all required fields.");
                return FormOutcome::Incomplete(field);
            }
            form.submit(client, toasts).await
        }
        Submit::Poll { option } => {
            let mut poll = PollForm::default();
            if !poll.select(&option) {
                let options = poll.poll().options.join(", ");
                toasts.error("Unknown Option", format!("Choose one of: {options}"));
                return FormOutcome::Incomplete("option");
            }
            poll.submit(client, toasts).await
        }
    }
}

fn print_toasts(session: &Session) {
    for toast in session.toasts.active() {
        let mark = match toast.variant {
            ToastVariant::Default => "ok",
            ToastVariant::Destructive => "error",
        };
        println!("[{mark}] {}: {}", toast.title, toast.description);
    }
}
