// ABOUTME: Main application entry point.
// ABOUTME: Loads figure descriptions, prints computed layouts, and writes SVG previews.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fg_canvas::{Decoration, SvgCanvas};
use fg_core::{FigureSpec, NullCanvas, Settings};
use fg_layout::{Grid, Layout};

/// Exact panel layout for figures measured in inches
#[derive(Parser)]
#[command(name = "figgrid", author, version, about, long_about = None)]
struct Cli {
    /// Log layout passes and canvas calls
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canvas size and every panel rectangle of a figure
    Layout {
        /// Figure description (.toml)
        figure: PathBuf,

        /// Print the layout as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write an SVG preview of a figure
    Preview {
        /// Figure description (.toml)
        figure: PathBuf,

        /// Output path (defaults to the figure path with an .svg extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pixels per inch (overrides the settings file)
        #[arg(long)]
        dpi: Option<f64>,

        /// Do not draw margin bands
        #[arg(long)]
        no_bands: bool,
    },

    /// Show the settings file location and contents
    Settings {
        /// Write the default settings to the settings file
        #[arg(long)]
        write_default: bool,
    },
}

fn load_figure(path: &Path) -> Result<FigureSpec> {
    FigureSpec::load(path).with_context(|| format!("Failed to load figure {}", path.display()))
}

/// Margin bands for every panel, colored per side
fn band_decorations(layout: &Layout, settings: &Settings) -> Vec<Decoration> {
    let colors = &settings.band_colors;
    layout
        .panels
        .iter()
        .flat_map(|panel| {
            let bands = panel.bands();
            [
                (bands.left, colors.left),
                (bands.right, colors.right),
                (bands.top, colors.top),
                (bands.bottom, colors.bottom),
            ]
        })
        .map(|(rect, color)| Decoration {
            rect,
            color,
            opacity: settings.band_opacity,
        })
        .collect()
}

fn print_layout(layout: &Layout) {
    println!(
        "canvas {:.4}\" x {:.4}\" ({}x{} panels)",
        layout.canvas.width, layout.canvas.height, layout.rows, layout.cols
    );
    println!(
        "{:>4} {:>4} {:>10} {:>10} {:>10} {:>10}",
        "row", "col", "x", "y", "width", "height"
    );
    for panel in &layout.panels {
        println!(
            "{:>4} {:>4} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
            panel.cell.row,
            panel.cell.col,
            panel.rect.x,
            panel.rect.y,
            panel.rect.width,
            panel.rect.height
        );
    }
}

fn run_layout(figure_path: &Path, json: bool) -> Result<()> {
    let figure = load_figure(figure_path)?;
    let grid = Grid::from_figure(&figure, NullCanvas)
        .with_context(|| format!("Invalid figure {}", figure_path.display()))?;
    let layout = grid.layout();

    if json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
    } else {
        print_layout(&layout);
    }
    Ok(())
}

fn run_preview(
    figure_path: &Path,
    output: Option<PathBuf>,
    dpi: Option<f64>,
    no_bands: bool,
) -> Result<()> {
    let mut settings = Settings::load_or_default();
    if let Some(dpi) = dpi {
        settings.dpi = dpi;
    }
    if no_bands {
        settings.draw_bands = false;
    }
    let canvas = SvgCanvas::from_settings(&settings).context("Invalid preview settings")?;

    let figure = load_figure(figure_path)?;
    let grid = Grid::from_figure(&figure, canvas)
        .with_context(|| format!("Invalid figure {}", figure_path.display()))?;

    let decorations = if settings.draw_bands {
        band_decorations(&grid.layout(), &settings)
    } else {
        Vec::new()
    };

    let output = output.unwrap_or_else(|| figure_path.with_extension("svg"));
    grid.canvas()
        .save(&output, &decorations)
        .with_context(|| format!("Failed to write preview {}", output.display()))?;
    Ok(())
}

fn run_settings(write_default: bool) -> Result<()> {
    if write_default {
        let path = Settings::default()
            .save_to_default()
            .context("Failed to write settings")?;
        tracing::info!("Wrote default settings to {}", path.display());
    }

    match Settings::default_path() {
        Some(path) => println!("# {}", path.display()),
        None => println!("# no config directory on this platform"),
    }
    print!("{}", toml::to_string_pretty(&Settings::load_or_default())?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Layout { figure, json } => run_layout(&figure, json),
        Commands::Preview {
            figure,
            output,
            dpi,
            no_bands,
        } => run_preview(&figure, output, dpi, no_bands),
        Commands::Settings { write_default } => run_settings(write_default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fg_core::MarginSpec;

    #[test]
    fn cli_parses_preview() {
        let cli = Cli::try_parse_from(["figgrid", "preview", "fig.toml", "--dpi", "300", "--no-bands"])
            .unwrap();
        match cli.command {
            Commands::Preview { dpi, no_bands, .. } => {
                assert_eq!(dpi, Some(300.0));
                assert!(no_bands);
            }
            _ => panic!("expected preview"),
        }
    }

    #[test]
    fn zero_dpi_preview_fails_before_writing() {
        let figure = std::env::temp_dir().join("figgrid_test_zero_dpi.toml");
        std::fs::write(&figure, "rows = 1\ncols = 1\n").unwrap();
        let output = std::env::temp_dir().join("figgrid_test_zero_dpi.svg");
        let _ = std::fs::remove_file(&output);

        let result = run_preview(&figure, Some(output.clone()), Some(0.0), false);
        let _ = std::fs::remove_file(&figure);

        assert!(result.is_err());
        assert!(!output.exists());
    }

    #[test]
    fn four_bands_per_panel() {
        let mut grid = Grid::detached(1, 2).unwrap();
        grid.update_all(|p| {
            p.set_margin(&MarginSpec::every(0.1))?;
            p.set_size(Some(1.0), Some(1.0))
        })
        .unwrap();

        let settings = Settings::default();
        let decorations = band_decorations(&grid.layout(), &settings);

        assert_eq!(decorations.len(), 8);
        assert_eq!(decorations[0].color, settings.band_colors.left);
        assert_eq!(decorations[3].color, settings.band_colors.bottom);
    }
}
