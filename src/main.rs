use folio_ui::app::App;
use folio_ui::config::Settings;
use folio_ui::core::Board;
use folio_ui::ui::Page;
use tracing::{error, info};

fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Folio UI enhancement engine...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // A demo page with every element bound, the way the reference markup
    // lays them out
    let page = Page::fully_bound("mailto:post@folio.dev");
    let board = Board::with_sample_entries();
    let system_dark = settings.theme.system_dark;

    let mut app = App::bootstrap(&settings, page, board, system_dark);

    info!(
        "Greeting: {} (year {})",
        app.page().greeting.as_deref().unwrap_or(""),
        app.page().year.as_deref().unwrap_or(""),
    );
    info!("Applied theme: {}", app.page().applied_theme().as_str());

    // Walk the résumé board: full render, then a narrowed one
    if let Some(panel) = app.page().resume.as_ref() {
        info!(
            "Résumé board: {} cards for {}-{}",
            panel.view.cards().len(),
            panel.from_year,
            panel.to_year,
        );
    }

    if let Some(panel) = app.page_mut().resume.as_mut() {
        panel.include_education = false;
        panel.from_year = 2018;
    }
    app.filters_changed();

    if let Some(panel) = app.page().resume.as_ref() {
        match serde_json::to_string_pretty(&panel.view) {
            Ok(json) => info!("Filtered view (work, 2018-): {}", json),
            Err(e) => error!("Failed to serialize view: {}", e),
        }
    }

    app.reset_filters();

    // Walk the contact form: empty submit is blocked, a filled one builds
    // the mailto target
    let blocked = !app.submit_contact();
    info!("Empty form submit blocked: {}", blocked);

    if let Some(panel) = app.page_mut().contact.as_mut() {
        panel.form.name = "Ada Lovelace".to_string();
        panel.form.email = "ada@example.com".to_string();
        panel.form.subject = "Hello from the demo".to_string();
        panel.form.message = "Just checking the mailto wiring.".to_string();
        panel.form.consent = true;
    }

    if app.submit_contact() {
        if let Some(panel) = app.page().contact.as_ref() {
            info!("Submission target: {}", panel.action);
        }
    }

    app.reset_contact();
    app.flush_deferred();

    info!("Demo walk complete");
}
