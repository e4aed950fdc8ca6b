use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use proxy_sheet::{CardSize, LayoutConfig, PaperSize, Unit};
use std::path::PathBuf;

mod logger;

#[derive(Parser)]
#[command(name = "proxysheet", about = "Print-ready card proxy sheets", version)]
struct Cli {
    /// Log per-page and per-card detail
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out card images on printable pages
    Sheet {
        /// Card image files, placed in the order given
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// JSON layout file used as the base configuration
        #[arg(long)]
        config: Option<PathBuf>,

        /// Paper size
        #[arg(long, value_enum)]
        paper: Option<PaperArg>,

        /// Card size preset
        #[arg(long, value_enum)]
        card: Option<CardArg>,

        /// Unit for --card-width, --card-height, --spacing and --margin
        #[arg(long, default_value = "in", value_enum)]
        units: UnitArg,

        /// Card width
        #[arg(long)]
        card_width: Option<f32>,

        /// Card height
        #[arg(long)]
        card_height: Option<f32>,

        /// Gap between cards
        #[arg(long)]
        spacing: Option<f32>,

        /// Printer-safe margin
        #[arg(long)]
        margin: Option<f32>,

        /// Resampling resolution
        #[arg(long)]
        dpi: Option<f32>,

        /// Cards per row
        #[arg(long)]
        columns: Option<usize>,

        /// Cards per column
        #[arg(long)]
        rows: Option<usize>,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,
    },

    /// Write the default layout as JSON
    InitConfig {
        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

#[derive(Clone, Copy, ValueEnum)]
enum CardArg {
    Standard,
    Small,
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitArg {
    In,
    Mm,
    Pt,
}

impl From<PaperArg> for PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

impl From<CardArg> for CardSize {
    fn from(arg: CardArg) -> Self {
        match arg {
            CardArg::Standard => Self::Standard,
            CardArg::Small => Self::Small,
        }
    }
}

impl From<UnitArg> for Unit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::In => Self::Inches,
            UnitArg::Mm => Self::Millimeters,
            UnitArg::Pt => Self::Points,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::ConsoleLogger::new(cli.verbose)
        .init()
        .context("Failed to install logger")?;

    match cli.command {
        Commands::Sheet {
            input,
            output,
            config,
            paper,
            card,
            units,
            card_width,
            card_height,
            spacing,
            margin,
            dpi,
            columns,
            rows,
            stats_only,
        } => {
            let mut layout = match &config {
                Some(path) => LayoutConfig::load(path)
                    .await
                    .with_context(|| format!("Failed to load {}", path.display()))?,
                None => LayoutConfig::default(),
            };

            if let Some(paper) = paper {
                layout = layout.with_paper(paper.into());
            }
            if let Some(card) = card {
                layout = layout.with_card(card.into());
            }

            let unit = Unit::from(units);
            if let Some(width) = card_width {
                layout.card_width_in = unit.to_inches(width);
            }
            if let Some(height) = card_height {
                layout.card_height_in = unit.to_inches(height);
            }
            if let Some(spacing) = spacing {
                layout.spacing_in = unit.to_inches(spacing);
            }
            if let Some(margin) = margin {
                layout.margin_in = unit.to_inches(margin);
            }
            if let Some(dpi) = dpi {
                layout.dpi = dpi;
            }
            if let Some(columns) = columns {
                layout.columns = columns;
            }
            if let Some(rows) = rows {
                layout.rows = rows;
            }

            let stats = proxy_sheet::calculate_statistics(input.len(), &layout)?;
            println!("Sheet Statistics:");
            println!("  Card images: {}", stats.source_images);
            println!(
                "  Card size: {:.2} x {:.2} {}",
                unit.from_inches(layout.card_width_in),
                unit.from_inches(layout.card_height_in),
                unit.name()
            );
            println!("  Cards per page: {}", stats.cards_per_page);
            println!("  Pages: {}", stats.pages);
            println!("  Cards on last page: {}", stats.cards_on_last_page);
            println!("  Empty slots: {}", stats.empty_slots);

            if stats_only {
                return Ok(());
            }

            let images = proxy_sheet::load_images(&input).await?;
            proxy_sheet::generate_pdf(&images, &layout, &output).await?;
            println!(
                "Generated {} cards on {} pages → {}",
                images.len(),
                stats.pages,
                output.display()
            );
        }

        Commands::InitConfig { output } => {
            LayoutConfig::default().save(&output).await?;
            println!("Default layout → {}", output.display());
        }
    }

    Ok(())
}
