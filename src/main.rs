//! planetmesh CLI - procedural cube-sphere terrain meshes.
//!
//! Builds a noise-displaced cube-sphere and writes its buffers to disk.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};

use planetmesh::export::{export_mesh_obj, export_mesh_raw, RawExportOptions};
use planetmesh::geometry::{FacePlane, Projection, Segments};
use planetmesh::logging::init_logging;
use planetmesh::mesh::{CubeSphereMesh, MeshConfig};
use planetmesh::noise::NoiseKind;
use planetmesh::CubeFaceId;

/// Procedural cube-sphere terrain mesh generator.
#[derive(Parser)]
#[command(name = "planetmesh")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a mesh and export its buffers.
    Generate(GenerateArgs),

    /// Display vertex and triangle counts for a grid size.
    Info {
        /// Segments per face axis.
        #[arg(short, long, default_value = "128")]
        segments: u32,
    },
}

#[derive(clap::Args)]
struct GenerateArgs {
    /// JSON configuration file; flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Segments per face axis (e.g., 32, 128, 256).
    #[arg(short, long)]
    segments: Option<u32>,

    /// Segments along X, overriding --segments.
    #[arg(long)]
    width_segments: Option<u32>,

    /// Segments along Y, overriding --segments.
    #[arg(long)]
    height_segments: Option<u32>,

    /// Segments along Z, overriding --segments.
    #[arg(long)]
    depth_segments: Option<u32>,

    /// Box width before projection.
    #[arg(long)]
    width: Option<f32>,

    /// Box height before projection.
    #[arg(long)]
    height: Option<f32>,

    /// Box depth before projection.
    #[arg(long)]
    depth: Option<f32>,

    /// Number of fractal noise octaves.
    #[arg(long)]
    octaves: Option<u8>,

    /// Cube-to-sphere mapping.
    #[arg(short, long)]
    projection: Option<ProjectionArg>,

    /// Noise source.
    #[arg(long)]
    noise: Option<NoiseArg>,

    /// Random seed for reproducible generation.
    #[arg(long)]
    seed: Option<u64>,

    /// Noise amplitude.
    #[arg(long)]
    amplitude: Option<f32>,

    /// Noise bias (the constant value for --noise constant).
    #[arg(long)]
    bias: Option<f32>,

    /// Base noise frequency.
    #[arg(long)]
    frequency: Option<f32>,

    /// Output directory for generated files.
    #[arg(short, long, default_value = "./output")]
    output: PathBuf,

    /// Base name for output files.
    #[arg(short, long, default_value = "planet")]
    name: String,

    /// Export format.
    #[arg(short, long, default_value = "raw")]
    format: ExportFormat,

    /// Also export per-corner normals (RAW only).
    #[arg(long)]
    corner_normals: bool,

    /// Also export the triangle index buffer (RAW only).
    #[arg(long)]
    indices: bool,

    /// Print the resolved configuration as JSON and exit.
    #[arg(long)]
    print_config: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    /// Little-endian f32 buffers with a JSON manifest.
    Raw,
    /// Wavefront OBJ.
    Obj,
}

#[derive(Clone, Copy, ValueEnum)]
enum ProjectionArg {
    /// Keep the flat cube.
    Cube,
    /// Normalize onto the unit sphere.
    Normalize,
    /// Analytical spherification.
    Spherify,
}

impl From<ProjectionArg> for Projection {
    fn from(arg: ProjectionArg) -> Self {
        match arg {
            ProjectionArg::Cube => Projection::Cube,
            ProjectionArg::Normalize => Projection::Normalize,
            ProjectionArg::Spherify => Projection::Spherify,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum NoiseArg {
    /// Coherent simplex noise.
    Simplex,
    /// Per-vertex seeded jitter.
    Jitter,
    /// Constant value (see --bias).
    Constant,
}

impl From<NoiseArg> for NoiseKind {
    fn from(arg: NoiseArg) -> Self {
        match arg {
            NoiseArg::Simplex => NoiseKind::Simplex,
            NoiseArg::Jitter => NoiseKind::Jitter,
            NoiseArg::Constant => NoiseKind::Constant,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose).map_err(|e| anyhow::anyhow!(e))?;

    match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Info { segments } => run_info(segments),
    }
}

fn resolve_config(args: &GenerateArgs) -> Result<MeshConfig> {
    let mut config = match &args.config {
        Some(path) => MeshConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => MeshConfig::default(),
    };

    if let Some(segments) = args.segments {
        config.segments = Segments::uniform(segments);
    }
    if let Some(s) = args.width_segments {
        config.segments.width = s;
    }
    if let Some(s) = args.height_segments {
        config.segments.height = s;
    }
    if let Some(s) = args.depth_segments {
        config.segments.depth = s;
    }
    if let Some(w) = args.width {
        config.dimensions.width = w;
    }
    if let Some(h) = args.height {
        config.dimensions.height = h;
    }
    if let Some(d) = args.depth {
        config.dimensions.depth = d;
    }
    if let Some(octaves) = args.octaves {
        config.fractal.octaves = octaves;
    }
    if let Some(projection) = args.projection {
        config.projection = projection.into();
    }
    if let Some(noise) = args.noise {
        config.noise.kind = noise.into();
    }
    if let Some(seed) = args.seed {
        config.noise.seed = Some(seed);
    }
    if let Some(amplitude) = args.amplitude {
        config.noise.amplitude = amplitude;
    }
    if let Some(bias) = args.bias {
        config.noise.bias = bias;
    }
    if let Some(frequency) = args.frequency {
        config.noise.frequency = frequency;
    }

    Ok(config)
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let mut config = resolve_config(&args)?;

    if config.fractal.octaves > 16 {
        bail!("octaves must be at most 16 (got {})", config.fractal.octaves);
    }

    // Pin the seed so the manifest records what was actually used.
    let seed = config.noise.resolve_seed();
    config.noise.seed = Some(seed);

    if args.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    info!(
        segments = ?config.segments,
        octaves = config.fractal.octaves,
        projection = ?config.projection,
        seed,
        "generating mesh"
    );

    let start = Instant::now();
    let field = config.noise.build_with_seed(seed);
    let mesh = CubeSphereMesh::generate(&config, &field)?;

    if let Err(e) = mesh.check_finite() {
        warn!("{}", e);
    }

    let stats = mesh.stats();
    info!(
        vertices = stats.vertex_count,
        triangles = stats.triangle_count,
        min_radius = stats.min_radius,
        max_radius = stats.max_radius,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "mesh built"
    );

    match args.format {
        ExportFormat::Raw => {
            let options = RawExportOptions {
                corner_normals: args.corner_normals,
                indices: args.indices,
                config: Some(config),
            };
            let manifest = export_mesh_raw(&mesh, &args.output, &args.name, &options)
                .with_context(|| format!("failed to export to {}", args.output.display()))?;
            info!(
                dir = %args.output.display(),
                manifest = %format!("{}.json", manifest.name),
                "exported raw buffers"
            );
        }
        ExportFormat::Obj => {
            let path = args.output.join(format!("{}.obj", args.name));
            export_mesh_obj(&mesh, &path)
                .with_context(|| format!("failed to export to {}", path.display()))?;
            info!(path = %path.display(), "exported obj");
        }
    }

    Ok(())
}

fn run_info(segments: u32) -> Result<()> {
    if segments == 0 {
        bail!("segments must be at least 1");
    }

    let config = MeshConfig::sphere(segments, 1);
    let planes: Vec<FacePlane> = CubeFaceId::all()
        .iter()
        .map(|face| face.plane(config.dimensions, config.segments))
        .collect();
    let vertices: usize = planes.iter().map(FacePlane::vertex_count).sum();
    let triangles: usize = planes.iter().map(FacePlane::triangle_count).sum();

    // 3 floats per vertex, 9 per triangle, 3 per normal.
    let bytes = (vertices * 3 + triangles * 12) * std::mem::size_of::<f32>();

    println!("planetmesh configuration");
    println!("========================");
    println!("Segments per face: {}x{}", segments, segments);
    println!("Vertices per face: {}", planes[0].vertex_count());
    println!("Triangles per face: {}", planes[0].triangle_count());
    println!("Total vertices: {}", vertices);
    println!("Total triangles: {}", triangles);
    println!("Buffer memory: {:.2} MB", bytes as f64 / (1024.0 * 1024.0));

    Ok(())
}
