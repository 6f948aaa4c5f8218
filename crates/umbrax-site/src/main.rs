//! umbrax-site CLI
//!
//! Renders the contact form, runs the contact pipeline headlessly and
//! previews the landing page effects.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use umbrax_forms::{render_contact_form, ContactData, ContactField, ValidationErrors};
use umbrax_site::SiteConfig;
use umbrax_ui::effects::{CounterAnimation, Navigation};
use umbrax_ui::SubmitOutcome;

/// Contact form and page behaviors of the Umbrax site.
#[derive(Parser)]
#[command(name = "umbrax-site")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Site configuration file (JSON). Defaults apply when absent.
    #[arg(short, long, env = "UMBRAX_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the contact form HTML.
    Render,

    /// Validate and send a contact submission.
    Submit {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        /// Value of the selected service.
        #[arg(long, default_value = "")]
        service: String,

        #[arg(long, default_value = "")]
        message: String,

        /// Print the form with inline errors when validation fails.
        #[arg(long)]
        html: bool,
    },

    /// Show the scroll-driven state at a scroll position.
    Effects {
        /// Vertical scroll position in pixels.
        #[arg(long)]
        scroll_y: f64,
    },

    /// Print the count-up frames of a stat label.
    Counter {
        /// Label such as "500+".
        text: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = SiteConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Render => {
            let html = render_contact_form(
                &config.form_fields(),
                &ContactData::new(),
                &ValidationErrors::new(),
                &config.submit_label,
            );
            println!("{html}");
        }

        Commands::Submit {
            name,
            email,
            service,
            message,
            html,
        } => {
            let data = ContactData::new()
                .with(ContactField::Name, name)
                .with(ContactField::Email, email)
                .with(ContactField::Service, service)
                .with(ContactField::Message, message);

            let page = config.contact_page();
            page.feedback().on_field_change(|field, result| {
                debug!(field = %field, valid = result.valid, "field feedback updated");
            });
            page.controller().on_submit(|outcome| {
                info!(sent = outcome.is_sent(), "submit finished");
            });

            for field in ContactField::ALL {
                page.input(field, data.get(field));
            }

            info!("sending contact submission");
            match page.submit().await {
                Some(SubmitOutcome::Sent) => {
                    for notification in page.document().notifications() {
                        println!("{}", notification.message);
                    }
                }
                Some(SubmitOutcome::Rejected(validation)) => {
                    let errors = validation.errors();
                    for (field, message) in errors.all_errors() {
                        warn!(field = %field, "{message}");
                    }
                    if html {
                        let form = render_contact_form(
                            &config.form_fields(),
                            &data,
                            &errors,
                            &config.submit_label,
                        );
                        println!("{form}");
                    }
                    anyhow::bail!("submission rejected: {} invalid field(s)", errors.len());
                }
                Some(SubmitOutcome::Failed(err)) => {
                    for notification in page.document().notifications() {
                        eprintln!("{}", notification.message);
                    }
                    return Err(err.into());
                }
                None => anyhow::bail!("submit control is busy"),
            }
        }

        Commands::Effects { scroll_y } => {
            let effects = config.scroll_effects();
            let snapshot = effects.snapshot(scroll_y);

            let links: Vec<String> = effects
                .sections()
                .iter()
                .map(|section| format!("#{}", section.id))
                .collect();
            let mut nav = Navigation::new(links);
            nav.sync(&snapshot);

            println!("scroll_y:        {}", snapshot.scroll_y);
            println!("header scrolled: {}", snapshot.header_scrolled);
            println!("scroll-to-top:   {}", snapshot.show_scroll_top);
            println!(
                "active section:  {}",
                snapshot.active_section.as_deref().unwrap_or("-")
            );
            println!("active link:     {}", nav.active().unwrap_or("-"));
            println!("background:      {}", snapshot.parallax.background_transform());
            println!("logo:            {}", snapshot.parallax.logo_transform());
        }

        Commands::Counter { text } => match CounterAnimation::parse(&text) {
            Some(counter) => {
                for frame in counter {
                    println!("{frame}");
                }
            }
            None => {
                info!("label does not start with a digit; nothing to animate");
                println!("{text}");
            }
        },
    }

    Ok(())
}
