use clap::{Parser, Subcommand};
use colour_engine::{
    contrast_result, format_contrast_ratio, generate_custom_scale, generate_harmony,
    generate_monochromatic, generate_random_palette, generate_random_palette_with,
    generate_scale, optimal_text_colour, parse_colour, suggest_contrasting_colour, wcag_level,
    CvdType, HarmonyType, ScaleMethod, ScaleStep, Simulator,
};
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use swatchlab::api;
use swatchlab::models::{AppConfig, Review};
use swatchlab::server;
use swatchlab::services::CacheStatus;

#[derive(Parser)]
#[command(name = "swatchlab")]
#[command(about = "Colour palette accessibility: contrast, colour-blindness simulation, harmonies")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Show WCAG contrast between a text and a background colour
    Contrast {
        /// Text colour (hex, rgb() or hsl())
        foreground: String,
        /// Background colour
        background: String,
    },
    /// Show how a colour looks with colour vision deficiencies
    Simulate {
        colour: String,

        /// Only this deficiency (e.g. "deuteranopia"); all when omitted
        #[arg(short, long)]
        cvd: Option<String>,
    },
    /// Generate a colour harmony
    Harmony {
        colour: String,

        /// complementary, analogous, triadic, split-complementary, tetradic,
        /// square or monochromatic
        #[arg(value_name = "TYPE")]
        harmony_type: String,

        /// Number of colours for monochromatic
        #[arg(short, long)]
        count: Option<usize>,
    },
    /// Generate a tonal scale
    Scale {
        colour: String,

        /// "hsl" or "oklch"
        #[arg(short, long, default_value = "oklch")]
        method: String,

        /// Custom number of steps instead of 50..950
        #[arg(short, long)]
        steps: Option<usize>,
    },
    /// Generate a random palette
    Random {
        #[arg(short, long, default_value_t = 5)]
        count: usize,

        /// Seed for a reproducible palette
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Swatchlab API",
        description = "Colour conversion, WCAG contrast, colour vision deficiency analysis and palette generation",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_convert,
        api::handle_contrast,
        api::handle_simulate,
        api::handle_palette_check,
        api::handle_category_check,
        api::handle_contrast_fix,
        api::handle_distinguish_fix,
        api::handle_cache_status,
        api::handle_clear_cache,
        api::handle_harmony,
        api::handle_scale,
        api::handle_variations,
        api::handle_mix,
        api::handle_random,
        api::handle_report,
        api::handle_list_reviews,
        api::handle_add_review,
        api::handle_remove_review,
    ),
    components(schemas(
        api::ConvertRequest,
        api::ConvertResponse,
        api::ContrastRequest,
        api::ContrastResponse,
        api::SimulateRequest,
        api::SimulateResponse,
        api::PaletteCheckRequest,
        api::PaletteCheckResponse,
        api::CategoryCheckRequest,
        api::ContrastFixRequest,
        api::ContrastFixResponse,
        api::DistinguishFixRequest,
        api::DistinguishFixResponse,
        api::HarmonyRequest,
        api::HarmonyResponse,
        api::ScaleRequest,
        api::ScaleResponse,
        api::VariationsRequest,
        api::VariationsResponse,
        api::MixRequest,
        api::MixResponse,
        api::RandomResponse,
        api::ReportRequest,
        api::ReviewRequest,
        api::ReviewsResponse,
        CacheStatus,
        Review,
    )),
    tags(
        (name = "Colour", description = "Parsing and conversion"),
        (name = "Contrast", description = "WCAG 2.1 contrast"),
        (name = "Simulation", description = "Colour vision deficiency simulation and checks"),
        (name = "Fixes", description = "Lightness adjustments for failing pairs"),
        (name = "Generators", description = "Harmonies, scales and variations"),
        (name = "Report", description = "Palette accessibility reports and review state")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(command) => {
            init_cli_logging();
            run_query_command(command)
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn init_cli_logging() {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swatchlab=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Strict colour parsing for command arguments
fn colour_arg(input: &str) -> anyhow::Result<String> {
    parse_colour(input).ok_or_else(|| anyhow::anyhow!("Invalid colour: {input:?}"))
}

fn print_scale(steps: &[ScaleStep]) {
    for step in steps {
        println!("  {:>4}  {}", step.step, step.hex);
    }
}

/// Answer a one-shot query (no server needed)
fn run_query_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Contrast {
            foreground,
            background,
        } => {
            let foreground = colour_arg(&foreground)?;
            let background = colour_arg(&background)?;
            let result = contrast_result(&foreground, &background);

            println!("{foreground} on {background}");
            println!("  Ratio:        {}", format_contrast_ratio(result.ratio));
            println!("  Normal text:  {}", wcag_level(result.ratio, false));
            println!("  Large text:   {}", wcag_level(result.ratio, true));
            println!("  Best text:    {}", optimal_text_colour(&background));
            if !result.aa_normal {
                println!(
                    "  Suggestion:   {} (reaches 4.5:1)",
                    suggest_contrasting_colour(&background, &foreground, 4.5)
                );
            }
        }
        Commands::Simulate { colour, cvd } => {
            let colour = colour_arg(&colour)?;
            let simulator = Simulator::default();
            let types: Vec<CvdType> = match cvd {
                Some(name) => vec![name.parse()?],
                None => CvdType::ALL.to_vec(),
            };

            println!("{colour}");
            for cvd in types {
                println!("  {:<16} {}", cvd.as_str(), simulator.simulate(&colour, cvd));
            }
        }
        Commands::Harmony {
            colour,
            harmony_type,
            count,
        } => {
            let colour = colour_arg(&colour)?;
            let harmony_type: HarmonyType = harmony_type.parse()?;
            let colours = match (harmony_type, count) {
                (HarmonyType::Monochromatic, Some(count)) => {
                    generate_monochromatic(&colour, count)
                }
                _ => generate_harmony(&colour, harmony_type),
            };

            println!("{harmony_type} harmony of {colour}");
            for hex in colours {
                println!("  {hex}");
            }
        }
        Commands::Scale {
            colour,
            method,
            steps,
        } => {
            let colour = colour_arg(&colour)?;
            let method: ScaleMethod = method.parse()?;
            let scale = match steps {
                Some(0) => anyhow::bail!("--steps must be at least 1"),
                Some(steps) => generate_custom_scale(&colour, steps, method),
                None => generate_scale(&colour, method),
            };

            println!("{method} scale of {colour}");
            print_scale(&scale);
        }
        Commands::Random { count, seed } => {
            let colours = match seed {
                Some(seed) => generate_random_palette_with(&mut StdRng::seed_from_u64(seed), count),
                None => generate_random_palette(count),
            };
            for hex in colours {
                println!("{hex}");
            }
        }
        Commands::Serve => anyhow::bail!("serve is not a one-shot query"),
    }

    Ok(())
}

/// Print status information when no subcommand is given
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Read environment variables
    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    // Header
    println!("Swatchlab v{VERSION}");
    println!("Colour palette accessibility server\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    // Effective configuration
    let config = AppConfig::load(config_file.as_deref().map(std::path::Path::new));
    println!("\nConfiguration:");
    println!(
        "  analysis.distinguish_threshold = {}",
        config.analysis.distinguish_threshold
    );
    println!("  analysis.fix_threshold         = {}", config.analysis.fix_threshold);
    println!("  analysis.target_ratio          = {}", config.analysis.target_ratio);
    println!(
        "  analysis.degradation_margin    = {}",
        config.analysis.degradation_margin
    );
    println!("  cache.capacity                 = {}", config.cache.capacity);

    // Commands section
    println!("\nCommands:");
    println!("  swatchlab serve                      Start the HTTP server");
    println!("  swatchlab contrast <FG> <BG>         Check WCAG contrast");
    println!("  swatchlab simulate <COLOUR> [--cvd]  Simulate colour vision deficiencies");
    println!("  swatchlab harmony <COLOUR> <TYPE>    Generate a harmony");
    println!("  swatchlab scale <COLOUR> [--method]  Generate a tonal scale");
    println!("  swatchlab random [--count] [--seed]  Generate a random palette");
    println!("\nRun 'swatchlab --help' for more options.");
}

async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swatchlab=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let config = AppConfig::from_env();

    // Create application state using shared server module
    let state = server::create_app_state(config);

    // Build router: start with shared API routes, add production-only routes
    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Swatchlab server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
