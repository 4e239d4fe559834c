use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use raycast::{
    math::{transform::Transformation, tuple::Axis},
    Intersectable, Matrix, Point, Primitive, Ray, Scene, Sphere, Square, TransformContext, Tuple,
    Vector,
};

const GRID_MARK_HIT: char = '#';
const GRID_MARK_MISS: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ShapeKind {
    Sphere,
    Square,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Casts rays against a single transformed primitive
/// and prints where they hit it
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// The primitive to intersect
    #[clap(long, default_value = "sphere")]
    shape: ShapeKind,

    /// World-space ray origin, as `x,y,z`
    #[clap(long, value_parser = parse_triple, default_value = "0,0,5", allow_hyphen_values = true)]
    origin: [f64; 3],

    /// World-space ray direction, as `x,y,z`. Does not need to be normalized
    #[clap(long, value_parser = parse_triple, default_value = "0,0,-1", allow_hyphen_values = true)]
    direction: [f64; 3],

    /// Scaling of the primitive, applied first
    #[clap(long, value_parser = parse_triple, allow_hyphen_values = true)]
    scale: Option<[f64; 3]>,

    /// Rotation around the x axis in radians, applied after scaling
    #[clap(long, allow_hyphen_values = true)]
    rotate_x: Option<f64>,

    /// Rotation around the y axis in radians
    #[clap(long, allow_hyphen_values = true)]
    rotate_y: Option<f64>,

    /// Rotation around the z axis in radians
    #[clap(long, allow_hyphen_values = true)]
    rotate_z: Option<f64>,

    /// Translation of the primitive, applied last
    #[clap(long, value_parser = parse_triple, allow_hyphen_values = true)]
    translate: Option<[f64; 3]>,

    /// Object-space center of the sphere
    #[clap(long, value_parser = parse_triple, allow_hyphen_values = true)]
    center: Option<[f64; 3]>,

    /// Object-space radius of the sphere
    #[clap(long)]
    radius: Option<f64>,

    /// Cast an N x N grid of parallel rays around the origin instead of a single ray,
    /// and print the hit mask
    #[clap(short, long)]
    grid: Option<usize>,

    /// Half the side length of the grid
    #[clap(long, default_value_t = 2.)]
    extent: f64,

    /// Set the logging level
    #[clap(long, default_value = "info")]
    log_level: LogLevel,
}

fn parse_triple(s: &str) -> Result<[f64; 3], String> {
    let values = s
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid number in `{s}`: {e}"))?;
    <[f64; 3]>::try_from(values)
        .map_err(|values| format!("expected 3 comma separated values, got {}", values.len()))
}

fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

impl Args {
    fn transformations(&self) -> Vec<Transformation> {
        let mut transformations = Vec::new();
        if let Some([x, y, z]) = self.scale {
            transformations.push(Transformation::Scaling(x, y, z));
        }
        for (axis, radians) in [
            (Axis::X, self.rotate_x),
            (Axis::Y, self.rotate_y),
            (Axis::Z, self.rotate_z),
        ] {
            if let Some(radians) = radians {
                transformations.push(Transformation::Rotation(axis, radians));
            }
        }
        if let Some([x, y, z]) = self.translate {
            transformations.push(Transformation::Translation(x, y, z));
        }
        transformations
    }

    fn primitive(&self) -> anyhow::Result<Primitive> {
        let matrix = Matrix::from(self.transformations());
        let transform =
            TransformContext::new(matrix).context("failed to set up the primitive transformation")?;

        match self.shape {
            ShapeKind::Sphere => {
                let center = self.center.map_or(Point::zero(), |[x, y, z]| Point::new(x, y, z));
                let radius = self.radius.unwrap_or(1.);
                if radius <= 0. {
                    bail!("sphere radius must be positive, got {radius}");
                }
                Ok(Sphere::with_center_and_radius(center, radius, transform).into())
            }
            ShapeKind::Square => {
                if self.center.is_some() || self.radius.is_some() {
                    log::warn!("--center and --radius only apply to spheres, ignoring them");
                }
                Ok(Square::new(transform).into())
            }
        }
    }
}

/// Orthographic grid of rays sharing `direction`, centered at `origin`,
/// row by row from the top.
fn grid_rays(origin: Point, direction: Vector, size: usize, extent: f64) -> Vec<Ray> {
    let forward = direction.normalize();
    let helper = if forward.y().abs() < 0.9 {
        Vector::new(0., 1., 0.)
    } else {
        Vector::new(1., 0., 0.)
    };
    let right = forward.cross(helper).normalize();
    let up = right.cross(forward);

    let step = if size > 1 {
        2. * extent / (size - 1) as f64
    } else {
        0.
    };
    let offset = |i: usize| if size > 1 { -extent + step * i as f64 } else { 0. };

    (0..size)
        .flat_map(|row| (0..size).map(move |col| (row, col)))
        .map(|(row, col)| {
            let origin = origin + right * offset(col) + up * -offset(row);
            Ray::new(origin, direction)
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let [ox, oy, oz] = args.origin;
    let [dx, dy, dz] = args.direction;
    let origin = Point::new(ox, oy, oz);
    let direction = Vector::new(dx, dy, dz);
    if direction.magnitude() == 0. {
        bail!("ray direction must not be the zero vector");
    }

    let primitive = args.primitive()?;
    log::debug!("{} transformation: {:?}", primitive.name(), primitive.transform().c());

    let Some(size) = args.grid else {
        let values = primitive.intersect(origin, direction);
        if values.is_hit() {
            println!("t_w = {}", values.t_w);
            println!(
                "P_w = ({}, {}, {}, 1)",
                values.p_w.x(),
                values.p_w.y(),
                values.p_w.z()
            );
            println!(
                "N_w = ({}, {}, {}, 0)",
                values.n_w.x(),
                values.n_w.y(),
                values.n_w.z()
            );
        } else {
            println!("t_w = inf (no hit)");
        }
        return Ok(());
    };

    if size == 0 {
        bail!("grid size must be at least 1");
    }

    let rays = grid_rays(origin, direction, size, args.extent);
    let scene = Scene::new(vec![primitive]);

    let style = indicatif::ProgressStyle::with_template(
        "{spinner} [{elapsed_precise}] [{wide_bar}] {pos}/{len} rays",
    )
    .context("invalid progress bar template")?
    .progress_chars("=>-");
    let bar = indicatif::ProgressBar::new(rays.len() as u64).with_style(style);
    let hits = scene.closest_hits_with_progress(&rays, bar);

    for row in hits.chunks(size) {
        let line: String = row
            .iter()
            .map(|hit| if hit.is_some() { GRID_MARK_HIT } else { GRID_MARK_MISS })
            .collect();
        println!("{line}");
    }
    Ok(())
}
