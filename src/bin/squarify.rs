use art_prep::output;
use art_prep::process::{self, SquarifyConfig, ThumbFormat};
use art_prep::scan::THUMBS_DIR;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "squarify")]
#[command(about = "Center-crop images to square and generate thumbnails into THUMBS")]
#[command(long_about = "\
Center-crop images to square and generate thumbnails into THUMBS

Walks an image folder (recursively by default). Images that are not square
are center-cropped to the smaller dimension; square results can optionally
be downscaled with --max-size. Every image gets a bounded thumbnail under a
THUMBS/ tree that mirrors the input's subfolders.

Square variants are only written when a crop or downscale actually changed
the image; thumbnails are always written.

Examples:

  squarify \"Top Images\" --out \"Top Images (square)\"
  squarify \"Top Images\" --out \"Top Images (square)\" --thumb-size 256
  squarify \"Top Images\" --inplace --thumb-size 256
  squarify \"Top Images\" --dry-run

Exit codes: 0 on full success, 1 if any file failed, 2 on bad arguments.")]
#[command(version)]
struct Cli {
    /// Input folder containing images
    folder: PathBuf,

    /// Output folder for square images (default: "<folder> (square)")
    #[arg(long, conflicts_with = "inplace")]
    out: Option<PathBuf>,

    /// Overwrite originals in place (careful)
    #[arg(long)]
    inplace: bool,

    /// Do not scan subfolders
    #[arg(long)]
    no_recursive: bool,

    /// Optional max square size, downscale if larger
    #[arg(long)]
    max_size: Option<u32>,

    /// Thumbnail size in px
    #[arg(long, default_value_t = 256)]
    thumb_size: u32,

    /// Thumbnail file format (default: same as source/output)
    #[arg(long, value_enum, default_value_t = ThumbFormat::Same)]
    thumb_format: ThumbFormat,

    /// Show what would be done, write nothing
    #[arg(long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if !cli.folder.is_dir() {
        eprintln!("ERROR: folder not found: {}", cli.folder.display());
        return ExitCode::from(2);
    }

    let square_root = if cli.inplace {
        cli.folder.clone()
    } else {
        cli.out
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{} (square)", cli.folder.display())))
    };
    let thumbs_root = square_root.join(THUMBS_DIR);

    let config = SquarifyConfig {
        input: cli.folder,
        square_root: square_root.clone(),
        recursive: !cli.no_recursive,
        max_size: cli.max_size,
        thumb_size: cli.thumb_size,
        thumb_format: cli.thumb_format,
        dry_run: cli.dry_run,
    };

    match process::run(&config) {
        Ok(summary) => {
            output::print_square_summary(&summary, cli.dry_run, &square_root, &thumbs_root);
            if summary.failed > 0 {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("ERROR: {e}");
            ExitCode::from(2)
        }
    }
}
