//! Paint a level from the command line and print the compiled des file
//!
//! ```text
//! des_map_editor 0,0,Player-0 3,3,Staircase-0 1,1,Monster-0
//! des_map_editor --name castle --catalog tiles.json 0,0,Walls-0 0,0
//! ```

use clap::Parser;
use des_map_core::TileCatalog;
use des_map_editor::{builtin_catalog, EditorConfig, EditorError, EditorSession};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "des_map_editor")]
#[command(about = "Paint a NetHack level and print it as a des file")]
struct Args {
    /// Tile catalog JSON (defaults to the bundled catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Level name, overriding the config
    #[arg(short, long)]
    name: Option<String>,

    /// Print the paintable tiles and exit
    #[arg(long)]
    list_tiles: bool,

    /// Edits applied in order: `x,y,TILE_ID` paints a cell, `x,y` erases it
    #[arg(value_name = "EDIT")]
    edits: Vec<Edit>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Edit {
    Paint { x: i32, y: i32, tile_id: String },
    Erase { x: i32, y: i32 },
}

impl FromStr for Edit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ',');
        let mut coord = || -> Result<i32, String> {
            let part = parts.next().ok_or_else(|| format!("Missing coordinate in '{s}'"))?;
            part.trim()
                .parse()
                .map_err(|_| format!("Invalid coordinate '{part}' in '{s}'"))
        };
        let x = coord()?;
        let y = coord()?;

        match parts.next().map(str::trim) {
            Some("") => Err(format!("Empty tile id in '{s}'")),
            Some(tile_id) => Ok(Edit::Paint {
                x,
                y,
                tile_id: tile_id.to_string(),
            }),
            None => Ok(Edit::Erase { x, y }),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let catalog = match &args.catalog {
        Some(path) => TileCatalog::load(path),
        None => builtin_catalog(),
    };
    let catalog = match catalog {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Failed to load tile catalog: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.list_tiles {
        for tile in catalog.visible_tiles() {
            println!("{}\t{}\t{}", tile.id, tile.glyph, tile.name);
        }
        return ExitCode::SUCCESS;
    }

    let mut config = match &args.config {
        Some(path) => match EditorConfig::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Failed to load config from {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => EditorConfig::load(),
    };
    if let Some(name) = args.name {
        config.level_name = name;
    }

    let mut session = EditorSession::new(catalog, config);
    for edit in args.edits {
        match edit {
            Edit::Paint { x, y, tile_id } => match session.paint((x, y), &tile_id) {
                Ok(()) => {}
                Err(EditorError::UnknownTile(id)) => {
                    tracing::error!("Unknown tile '{}'", id);
                    return ExitCode::FAILURE;
                }
                Err(e) => tracing::warn!("Skipped {},{},{}: {}", x, y, tile_id, e),
            },
            Edit::Erase { x, y } => {
                session.erase((x, y));
            }
        }
    }

    print!("{}", session.compile());
    ExitCode::SUCCESS
}
